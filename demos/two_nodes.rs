//! Two Nodes Exchanging Messages
//!
//! Node B's wall clock runs behind node A's. Stamping every send and
//! receive with a hybrid logical clock keeps the message log in causal
//! order anyway.
//!
//! Run with `RUST_LOG=hlclock=trace` to see every clock step.

use hlclock::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let time_a = ManualClock::new(10_000);
    let time_b = ManualClock::new(9_400); // 600 behind
    let mut a = Clock::new(1, &time_a);
    let mut b = Clock::new(2, &time_b);

    let mut log = Vec::new();

    let ping = a.tick();
    log.push(("A sends ping", ping));

    time_b.advance(5);
    log.push(("B receives ping", b.observe(ping)));

    time_b.advance(5);
    let pong = b.tick();
    log.push(("B sends pong", pong));

    time_a.advance(20);
    log.push(("A receives pong", a.observe(pong)));

    time_a.advance(1);
    log.push(("A local work", a.tick()));

    for (what, stamp) in &log {
        println!("{what:<16} {stamp}");
    }

    let ordered = log.windows(2).all(|pair| pair[0].1 < pair[1].1);
    println!("causal order preserved: {ordered}");
}
