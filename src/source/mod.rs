//! Physical time sources
//!
//! A [`Clock`](crate::clock::Clock) reads physical time through the
//! [`TimeSource`] trait. Readings are plain `i64` values in whatever unit
//! the source chooses; the clock only compares them. Sources are not
//! required to be monotonic.

mod manual;
#[cfg(feature = "std")]
mod system;

pub use manual::ManualClock;
#[cfg(feature = "std")]
pub use system::{Resolution, SystemClock};

/// Capability to read the current physical time
pub trait TimeSource {
    /// Returns the current physical time reading
    fn now(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

#[cfg(feature = "std")]
impl<T: TimeSource + ?Sized> TimeSource for std::boxed::Box<T> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

#[cfg(feature = "std")]
impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

/// Time source backed by a closure
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(F);

impl<F: Fn() -> i64> TimeSource for FnSource<F> {
    fn now(&self) -> i64 {
        (self.0)()
    }
}

/// Creates a time source that calls `f` for every reading
///
/// # Example
/// ```rust
/// use hlclock::prelude::*;
///
/// let source = hlclock::source::from_fn(|| 42);
/// assert_eq!(source.now(), 42);
/// ```
pub fn from_fn<F: Fn() -> i64>(f: F) -> FnSource<F> {
    FnSource(f)
}
