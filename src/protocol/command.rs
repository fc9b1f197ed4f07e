//! # Typed Command Builder
//!
//! Wire commands are an opcode prefix (1-4 bytes) followed by parameter
//! bytes. This builder constructs them with uniform range validation: a
//! command is either fully valid or never materializes, so callers can
//! append the result to an output buffer without partial-write concerns.
//!
//! ## Byte Order
//!
//! Multi-byte length/position fields are **little-endian** split into
//! low/high byte pairs: `value = low + 256 * high`.

use crate::error::TirillaError;

/// A wire command under construction.
///
/// Holds the opcode bytes plus any parameter bytes appended so far.
/// Immutable once converted with [`Command::into_bytes`].
///
/// ## Example
///
/// ```
/// use tirilla::protocol::command::Command;
///
/// let bytes = Command::new(&[0x1D, 0x56]) // GS V
///     .param(66)
///     .param(40)
///     .into_bytes();
/// assert_eq!(bytes, vec![0x1D, 0x56, 66, 40]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    bytes: Vec<u8>,
}

impl Command {
    /// Start a command from its opcode prefix.
    pub fn new(opcode: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(opcode.len() + 4);
        bytes.extend_from_slice(opcode);
        Self { bytes }
    }

    /// Append a single parameter byte. The `u8` type already enforces the
    /// 0..=255 wire range.
    pub fn param(mut self, n: u8) -> Self {
        self.bytes.push(n);
        self
    }

    /// Append a parameter byte after checking a command-specific bound.
    pub fn param_ranged(
        self,
        name: &'static str,
        value: u8,
        min: u8,
        max: u8,
    ) -> Result<Self, TirillaError> {
        TirillaError::check_range(name, value as u32, min as u32, max as u32)?;
        Ok(self.param(value))
    }

    /// Append a 16-bit value as a little-endian low/high byte pair.
    pub fn param_u16_le(mut self, value: u16) -> Self {
        let [low, high] = u16_le(value);
        self.bytes.push(low);
        self.bytes.push(high);
        self
    }

    /// Append a raw data payload (bit-image rows, barcode digits).
    pub fn data(mut self, d: &[u8]) -> Self {
        self.bytes.extend_from_slice(d);
        self
    }

    /// Finish the command, yielding the exact wire bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encode a u16 value as little-endian bytes [low, high].
///
/// ## Example
///
/// ```
/// use tirilla::protocol::command::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(512), [0x00, 0x02]); // full head width in dots
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}
