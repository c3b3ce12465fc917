//! Decoding errors for timestamps
//!
//! The timestamp algebra and the clock are total. Turning bytes or
//! structured records back into a [`Timestamp`](crate::timestamp::Timestamp)
//! is the only place anything can go wrong.

use thiserror::Error;

/// Error raised when an encoded timestamp cannot be decoded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer bytes than a full encoding were available
    #[error("buffer too short: expected {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Bytes required
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Extra bytes followed a complete encoding
    #[error("trailing bytes: expected {expected} bytes, got {actual}")]
    TrailingBytes {
        /// Bytes consumed by the encoding
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// A required field was absent from a structured record
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field value does not fit the declared width
    #[error("value {value} out of range for field `{field}`")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Offending value, widened for reporting
        value: i128,
    },
}

impl FormatError {
    /// Returns true if the input ended before a full encoding was read
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::BufferTooShort { .. })
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::BufferTooShort { .. } | Self::TrailingBytes { .. } => "Framing",
            Self::MissingField(_) | Self::OutOfRange { .. } => "Field",
        }
    }
}

/// Result type for timestamp decoding
pub type FormatResult<T> = Result<T, FormatError>;
