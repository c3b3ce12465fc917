//! Fixed-width binary encoding
//!
//! Layout, big-endian throughout:
//!
//! | Bytes | Field    | Notes                 |
//! |-------|----------|-----------------------|
//! | 0..8  | physical | `i64` with sign bit flipped |
//! | 8..10 | counter  | `u16`                 |
//!
//! Flipping the sign bit makes negative readings sort below positive ones,
//! so comparing two encodings byte by byte gives the same answer as
//! comparing the timestamps. Encodings can be used as storage keys as-is.

use super::Timestamp;
use crate::error::{FormatError, FormatResult};

/// Size of an encoded timestamp in bytes
pub const WIRE_SIZE: usize = 10;

const SIGN_BIT: u64 = 1 << 63;

impl Timestamp {
    /// Encodes this timestamp into its fixed-width form
    pub fn to_bytes(&self) -> [u8; WIRE_SIZE] {
        let physical = ((self.physical as u64) ^ SIGN_BIT).to_be_bytes();
        let counter = self.counter.to_be_bytes();

        let mut out = [0u8; WIRE_SIZE];
        out[..8].copy_from_slice(&physical);
        out[8..].copy_from_slice(&counter);
        out
    }

    /// Decodes a timestamp from exactly [`WIRE_SIZE`] bytes
    pub fn from_bytes(bytes: &[u8; WIRE_SIZE]) -> Self {
        let physical = u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let counter = u16::from_be_bytes([bytes[8], bytes[9]]);
        Self::new((physical ^ SIGN_BIT) as i64, counter)
    }

    /// Writes the encoding to the front of `buf`
    ///
    /// # Returns
    /// The number of bytes written, always [`WIRE_SIZE`].
    ///
    /// # Errors
    /// [`FormatError::BufferTooShort`] if `buf` cannot hold an encoding.
    pub fn encode(&self, buf: &mut [u8]) -> FormatResult<usize> {
        let actual = buf.len();
        let out = buf
            .first_chunk_mut::<WIRE_SIZE>()
            .ok_or(FormatError::BufferTooShort {
                expected: WIRE_SIZE,
                actual,
            })?;
        *out = self.to_bytes();
        Ok(WIRE_SIZE)
    }

    /// Decodes a timestamp that fills `buf` exactly
    ///
    /// # Errors
    /// [`FormatError::BufferTooShort`] or [`FormatError::TrailingBytes`] if
    /// `buf` is not exactly [`WIRE_SIZE`] bytes long.
    pub fn decode(buf: &[u8]) -> FormatResult<Self> {
        let (timestamp, rest) = Self::decode_prefix(buf)?;
        if !rest.is_empty() {
            return Err(FormatError::TrailingBytes {
                expected: WIRE_SIZE,
                actual: buf.len(),
            });
        }
        Ok(timestamp)
    }

    /// Decodes a timestamp from the front of `buf`
    ///
    /// Returns the timestamp and the bytes after it, for callers that embed
    /// timestamps in larger frames.
    pub fn decode_prefix(buf: &[u8]) -> FormatResult<(Self, &[u8])> {
        let (head, rest) = buf
            .split_first_chunk::<WIRE_SIZE>()
            .ok_or(FormatError::BufferTooShort {
                expected: WIRE_SIZE,
                actual: buf.len(),
            })?;
        Ok((Self::from_bytes(head), rest))
    }
}
