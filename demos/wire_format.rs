//! Timestamp Wire Formats
//!
//! Shows the JSON record form and the fixed-width binary form, and what
//! happens when malformed input arrives.

use hlclock::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clock = Clock::new(1, SystemClock::millis());
    let stamp = clock.tick();

    let json = serde_json::to_string(&stamp)?;
    println!("json:   {json}");
    let from_json: Timestamp = serde_json::from_str(&json)?;
    assert_eq!(from_json, stamp);

    let bytes = stamp.to_bytes();
    println!("binary: {bytes:02x?}");
    assert_eq!(Timestamp::decode(&bytes)?, stamp);

    match Timestamp::decode(&bytes[..6]) {
        Ok(ts) => println!("unexpected decode: {ts}"),
        Err(err) => println!("short buffer: {err}"),
    }

    match serde_json::from_str::<Timestamp>(r#"{"timestamp": 1}"#) {
        Ok(ts) => println!("unexpected decode: {ts}"),
        Err(err) => println!("missing field: {err}"),
    }

    Ok(())
}
