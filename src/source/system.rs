//! Wall-clock time source

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::TimeSource;

/// Unit of a [`SystemClock`] reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Whole seconds
    Seconds,
    /// Milliseconds
    #[default]
    Millis,
    /// Microseconds
    Micros,
    /// Nanoseconds
    Nanos,
}

impl Resolution {
    /// Converts a duration into a count of this unit, saturating at `i64::MAX`
    pub fn count(self, duration: Duration) -> i64 {
        let count = match self {
            Self::Seconds => u128::from(duration.as_secs()),
            Self::Millis => duration.as_millis(),
            Self::Micros => duration.as_micros(),
            Self::Nanos => duration.as_nanos(),
        };
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

/// Time source reading the system wall clock relative to the UNIX epoch
///
/// Wall-clock time can step backwards (NTP corrections, manual changes).
/// The clock algebra absorbs that; this source reports what the system
/// says. Times before the epoch read as negative values.
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let mut clock = Clock::new(7, SystemClock::new(Resolution::Millis));
/// let first = clock.tick();
/// let second = clock.tick();
/// assert!(second > first);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock {
    resolution: Resolution,
}

impl SystemClock {
    /// Creates a wall-clock source with the given resolution
    pub const fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    /// Wall-clock source counting whole seconds
    pub const fn seconds() -> Self {
        Self::new(Resolution::Seconds)
    }

    /// Wall-clock source counting milliseconds
    pub const fn millis() -> Self {
        Self::new(Resolution::Millis)
    }

    /// Returns the configured resolution
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => self.resolution.count(elapsed),
            Err(before) => -self.resolution.count(before.duration()),
        }
    }
}
