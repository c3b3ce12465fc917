//! Hybrid logical clock timestamps
//!
//! A [`Timestamp`] pairs a physical time reading with a 16-bit logical
//! counter. Timestamps are plain `Copy` values ordered lexicographically by
//! `(physical, counter)`; nothing in this module holds state or reads a
//! clock. Physical time is always passed in by the caller.

mod codec;
#[cfg(feature = "serde")]
mod serde_impl;

pub use codec::WIRE_SIZE;

use core::fmt;

use tracing::warn;

/// Hybrid logical clock timestamp
///
/// # Ordering
///
/// Timestamps compare by physical time first and by counter second. The
/// derived [`Ord`] is that order, so `a < b` means `a` happened before `b`
/// whenever `b` was produced by observing `a`.
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let local = Timestamp::new(1_000, 0);
///
/// // Physical time stalled: only the counter moves.
/// let next = local.advanced(1_000);
/// assert_eq!(next, Timestamp::new(1_000, 1));
///
/// // A message arrives from a node whose clock runs ahead.
/// let remote = Timestamp::new(1_500, 7);
/// let merged = next.merged(1_200, remote);
/// assert_eq!(merged, Timestamp::new(1_500, 8));
/// assert!(merged > next && merged > remote);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    /// Physical time reading, in caller-defined units
    physical: i64,
    /// Logical counter for events sharing one physical reading
    counter: u16,
}

impl Timestamp {
    /// The timestamp at physical time zero with counter zero
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a timestamp from its parts
    ///
    /// Every `(physical, counter)` pair is a valid timestamp.
    pub const fn new(physical: i64, counter: u16) -> Self {
        Self { physical, counter }
    }

    /// Returns the physical time component
    pub const fn physical(&self) -> i64 {
        self.physical
    }

    /// Returns the logical counter component
    pub const fn counter(&self) -> u16 {
        self.counter
    }

    /// Returns the timestamp for a local event observed at `observed`
    ///
    /// If physical time moved past this timestamp the counter resets.
    /// Otherwise the physical part is kept and the counter is bumped, so the
    /// result still sorts after `self` when the source stalls or runs
    /// backwards.
    #[must_use]
    pub fn advanced(self, observed: i64) -> Self {
        if observed > self.physical {
            Self::new(observed, 0)
        } else {
            Self::new(self.physical, next_counter(self.counter))
        }
    }

    /// Advances this timestamp in place for a local event
    ///
    /// See [`Timestamp::advanced`].
    pub fn advance(&mut self, observed: i64) {
        *self = self.advanced(observed);
    }

    /// Returns the timestamp for receiving `remote` at local time `observed`
    ///
    /// The branches are tested in order and the first match wins:
    ///
    /// 1. `observed` is later than both `self` and `remote`: take it with a
    ///    fresh counter.
    /// 2. `self` and `remote` share a physical time: keep it and continue
    ///    from the larger counter.
    /// 3. `remote` is ahead: adopt its physical time and continue its counter.
    /// 4. `self` is ahead: keep it and bump the counter.
    #[must_use]
    pub fn merged(self, observed: i64, remote: Timestamp) -> Self {
        if observed > self.physical && observed > remote.physical {
            Self::new(observed, 0)
        } else if self.physical == remote.physical {
            Self::new(self.physical, next_counter(self.counter.max(remote.counter)))
        } else if remote.physical > self.physical {
            Self::new(remote.physical, next_counter(remote.counter))
        } else {
            Self::new(self.physical, next_counter(self.counter))
        }
    }

    /// Merges a remote timestamp into this one in place
    ///
    /// See [`Timestamp::merged`].
    pub fn merge(&mut self, observed: i64, remote: Timestamp) {
        *self = self.merged(observed, remote);
    }

    /// Compares two timestamps, returning `-1`, `0` or `1`
    ///
    /// Integer form of [`Ord::cmp`] for callers that exchange comparison
    /// results as numbers.
    pub fn compare(&self, other: &Self) -> i8 {
        self.cmp(other) as i8
    }
}

/// Bumps a logical counter, wrapping at `u16::MAX`
fn next_counter(counter: u16) -> u16 {
    let next = counter.wrapping_add(1);
    if next == 0 {
        warn!(counter, "logical counter wrapped");
    }
    next
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timestamp:{{clock: {}, counter: {}}}",
            self.physical, self.counter
        )
    }
}

impl From<(i64, u16)> for Timestamp {
    fn from((physical, counter): (i64, u16)) -> Self {
        Self::new(physical, counter)
    }
}

impl From<Timestamp> for (i64, u16) {
    fn from(timestamp: Timestamp) -> Self {
        (timestamp.physical, timestamp.counter)
    }
}
