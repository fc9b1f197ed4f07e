//! # Error Types
//!
//! This module defines error types used throughout the tirilla library.
//!
//! Encoding is all-or-nothing: a command either validates and is emitted in
//! full, or it fails with one of these errors and nothing reaches the output
//! buffer. Validation errors always name the offending parameter.

use thiserror::Error;

/// Main error type for tirilla operations
#[derive(Debug, Error)]
pub enum TirillaError {
    /// An integer parameter fell outside its documented range
    #[error("Parameter `{name}` out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Command payload with the wrong shape (barcode data, bit-image length)
    #[error("Invalid command data: {0}")]
    InvalidData(String),

    /// Documented protocol command that this encoder does not implement.
    /// Failing loudly beats silently emitting wrong bytes.
    #[error("Unsupported command: {0}")]
    Unsupported(&'static str),

    /// Transport-level errors (device open, write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TirillaError {
    /// Range-check helper used by the command builders.
    ///
    /// Returns `value` unchanged when `min <= value <= max`, otherwise an
    /// [`TirillaError::OutOfRange`] naming the parameter.
    pub fn check_range(
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    ) -> Result<u32, TirillaError> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(TirillaError::OutOfRange {
                name,
                value,
                min,
                max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_accepts_bounds() {
        assert_eq!(TirillaError::check_range("n", 1, 1, 4).unwrap(), 1);
        assert_eq!(TirillaError::check_range("n", 4, 1, 4).unwrap(), 4);
    }

    #[test]
    fn test_check_range_rejects_outside() {
        let err = TirillaError::check_range("n", 5, 1, 4).unwrap_err();
        match err {
            TirillaError::OutOfRange {
                name,
                value,
                min,
                max,
            } => {
                assert_eq!(name, "n");
                assert_eq!(value, 5);
                assert_eq!(min, 1);
                assert_eq!(max, 4);
            }
            other => panic!("wrong error variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = TirillaError::check_range("feed", 300, 0, 255).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("feed"));
        assert!(msg.contains("300"));
    }
}
