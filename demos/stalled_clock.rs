//! Stalled And Rewound Wall Clocks
//!
//! A node whose physical clock stops, then jumps backwards (say after an
//! NTP correction), keeps issuing strictly increasing timestamps.

use hlclock::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let time = ManualClock::new(1_000);
    let mut clock = Clock::new(1, &time);
    let mut previous = clock.snapshot();
    println!("start        {previous}");

    let steps: [(&str, i64); 6] = [
        ("advance", 10),
        ("stall", 0),
        ("stall", 0),
        ("step back", -500),
        ("advance", 100),
        ("catch up", 450),
    ];

    for (what, delta) in steps {
        time.advance(delta);
        let now = clock.tick();
        assert!(now > previous);
        println!("{what:<12} {now}  (physical reading {})", time.now());
        previous = now;
    }
}
