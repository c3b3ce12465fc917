//! Error handling module for hlclock
//!
//! Only decoding can fail; see [`FormatError`].

pub mod format;

pub use format::{FormatError, FormatResult};
