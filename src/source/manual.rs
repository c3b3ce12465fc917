//! Manually driven time source

use core::sync::atomic::{AtomicI64, Ordering};

use super::TimeSource;

/// Time source whose reading only changes when told to
///
/// Used in simulation and tests to script stalls, jumps and backward steps.
/// All updates take `&self`, so the same instance can be read by a clock
/// (through `&ManualClock` or an `Arc`) while the driver moves time.
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let time = ManualClock::new(1_000);
/// let mut clock = Clock::new(1, &time);
///
/// time.rewind(50);
/// assert_eq!(clock.tick(), Timestamp::new(1_000, 1));
///
/// time.set(2_000);
/// assert_eq!(clock.tick(), Timestamp::new(2_000, 0));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Creates a source reading `start`
    pub const fn new(start: i64) -> Self {
        Self {
            now: AtomicI64::new(start),
        }
    }

    /// Sets the current reading
    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::Release);
    }

    /// Moves the reading forward by `delta`, saturating at `i64::MAX`
    pub fn advance(&self, delta: i64) {
        self.shift(|now| now.saturating_add(delta));
    }

    /// Moves the reading backward by `delta`, saturating at `i64::MIN`
    pub fn rewind(&self, delta: i64) {
        self.shift(|now| now.saturating_sub(delta));
    }

    fn shift(&self, f: impl Fn(i64) -> i64) {
        // The closure never returns None, so the update cannot fail.
        let _ = self
            .now
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |now| Some(f(now)));
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::Acquire)
    }
}
