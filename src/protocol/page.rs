//! # Page Mode Commands
//!
//! In page mode the printer composes an entire page in memory before
//! printing, rather than printing line by line. These commands switch
//! between modes, print the composed page, and control the page-mode print
//! direction.

use super::command::Command;
use super::commands::{CAN, ESC, FF};
use crate::error::TirillaError;

/// # Select Page Mode (ESC L)
///
/// Switches from standard mode to page mode. Processed only at the
/// beginning of a line.
#[inline]
pub fn select_page_mode() -> Vec<u8> {
    vec![ESC, b'L']
}

/// # Select Standard Mode (ESC S)
///
/// Switches from page mode back to standard mode, discarding the buffered
/// page data.
#[inline]
pub fn select_standard_mode() -> Vec<u8> {
    vec![ESC, b'S']
}

/// # Print Data in Page Mode (ESC FF)
///
/// In page mode, prints all buffered data in the printing area collectively
/// without leaving page mode.
#[inline]
pub fn print_in_page_mode() -> Vec<u8> {
    vec![ESC, FF]
}

/// # Print and Return to Standard Mode (FF)
///
/// In page mode, prints the buffered page collectively and returns to
/// standard mode.
#[inline]
pub fn print_and_return_to_standard_mode() -> Vec<u8> {
    vec![FF]
}

/// # Cancel Print Data in Page Mode (CAN)
///
/// Deletes all the print data in the current printable area.
#[inline]
pub fn cancel_print_data() -> Vec<u8> {
    vec![CAN]
}

/// Print direction and starting position in page mode (ESC T n).
///
/// ASCII-digit values per the manual:
///
/// | n  | print direction | starting position |
/// |----|-----------------|-------------------|
/// | 48 | Left to right   | Upper left        |
/// | 49 | Bottom to top   | Lower left        |
/// | 50 | Right to left   | Lower right       |
/// | 51 | Top to bottom   | Upper right       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PrintDirection {
    #[default]
    LeftToRight = 48,
    BottomToTop = 49,
    RightToLeft = 50,
    TopToBottom = 51,
}

/// # Select Print Direction in Page Mode (ESC T n)
pub fn print_direction(direction: PrintDirection) -> Vec<u8> {
    Command::new(&[ESC, b'T'])
        .param(direction as u8)
        .into_bytes()
}

/// # Set Printing Area in Page Mode (ESC W ...)
///
/// Not implemented. The eight-byte area payload is documented but this
/// encoder does not emit it.
pub fn set_printing_area() -> Result<Vec<u8>, TirillaError> {
    Err(TirillaError::Unsupported(
        "ESC W (set printing area in page mode)",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_switching() {
        assert_eq!(select_page_mode(), vec![0x1B, 0x4C]);
        assert_eq!(select_standard_mode(), vec![0x1B, 0x53]);
    }

    #[test]
    fn test_page_printing() {
        assert_eq!(print_in_page_mode(), vec![0x1B, 0x0C]);
        assert_eq!(print_and_return_to_standard_mode(), vec![0x0C]);
        assert_eq!(cancel_print_data(), vec![0x18]);
    }

    #[test]
    fn test_print_direction_values() {
        assert_eq!(
            print_direction(PrintDirection::LeftToRight),
            vec![0x1B, 0x54, 48]
        );
        assert_eq!(
            print_direction(PrintDirection::TopToBottom),
            vec![0x1B, 0x54, 51]
        );
    }

    #[test]
    fn test_printing_area_unsupported() {
        assert!(matches!(
            set_printing_area(),
            Err(TirillaError::Unsupported(_))
        ));
    }
}
