#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Hybrid Logical Clocks for causally ordered, near-physical timestamps**
//!
//! hlclock issues timestamps that pair a physical time reading with a 16-bit
//! logical counter. Timestamps from independently clocked nodes form a total
//! order that respects causality: any event that observed another event's
//! timestamp sorts after it, even when the local wall clock stalls, drifts
//! or steps backwards. Between causally related events the physical part
//! stays as close to real time as the inputs allow.
//!
//! ## Features
//!
//! - **Pure algebra** - [`Timestamp`] is a `Copy` value; advancing and merging
//!   are plain functions of their inputs
//! - **Pluggable time** - physical time comes from any [`TimeSource`], in
//!   whatever unit the caller picks
//! - **`no_std`** - everything except the wall-clock source works without `std`
//! - **Sortable wire format** - fixed 10-byte encoding whose byte order is
//!   timestamp order
//!
//! ### Crate Features
//! - `std` (default) - [`SystemClock`] wall-clock source and std error integration
//! - `serde` - serde support for [`Timestamp`] as `{timestamp, counter}`
//!
//! ## Quick Start
//!
//! ```rust
//! use hlclock::prelude::*;
//!
//! let time = ManualClock::new(1_000);
//! let mut clock = Clock::new(1, &time);
//!
//! // Local events while physical time stands still.
//! let a = clock.tick();
//! let b = clock.tick();
//! assert!(b > a);
//!
//! // A message from a node running ahead pulls the clock forward.
//! let remote = Timestamp::new(5_000, 3);
//! let c = clock.observe(remote);
//! assert!(c > remote && c > b);
//!
//! // Timestamps travel as fixed-width bytes.
//! let bytes = c.to_bytes();
//! assert_eq!(Timestamp::decode(&bytes)?, c);
//! # Ok::<(), hlclock::error::FormatError>(())
//! ```
//!
//! ## Concurrency
//!
//! A [`Clock`] does no internal locking. Share one between threads by
//! putting it behind a `Mutex` or giving it a single owning task.
//!
//! ## Counter Overflow
//!
//! The counter wraps at `u16::MAX`. A wrap is logged at `warn` level through
//! `tracing` and otherwise goes unreported; after a wrap the new timestamp
//! sorts before its predecessor. At 65 536 events per physical tick this
//! requires a stalled source or a very coarse resolution.
//!
//! [`Timestamp`]: crate::timestamp::Timestamp
//! [`Clock`]: crate::clock::Clock
//! [`TimeSource`]: crate::source::TimeSource
//! [`SystemClock`]: crate::source::SystemClock

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod clock;
pub mod error;
pub mod source;
pub mod timestamp;

/// Prelude module of hlclock
///
/// Convenient re-exports for common hlclock types and traits
pub mod prelude {
    pub use crate::clock::{Clock, NodeId};
    pub use crate::error::{FormatError, FormatResult};
    #[cfg(feature = "std")]
    pub use crate::source::{Resolution, SystemClock};
    pub use crate::source::{ManualClock, TimeSource};
    pub use crate::timestamp::{Timestamp, WIRE_SIZE};
}
