//! # SRP-350 Control and General Commands
//!
//! This module implements the control bytes and general ESC commands of the
//! Bixolon SRP-350 ESC/POS dialect: printer initialization, paper feed,
//! print positioning, character spacing, tab stops and paper cutting.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `HT`, `LF`, `FF`, `CR`, `CAN`
//! - Real-time: `DLE EOT n`, `DLE ENQ n`
//! - Multi-byte with parameters: `ESC J n`, `GS V m n`
//!
//! ## Byte Order
//!
//! Multi-byte position fields use **little-endian** encoding: a position of
//! 530 dots is sent as `[0x12, 0x02]` (530 = 0x0212).
//!
//! ## Reference
//!
//! Based on the "SRP-350 ESC/POS Command Manual" (Bixolon / Samsung miniprinters).

use super::command::Command;
use crate::error::TirillaError;

// ============================================================================
// PREFIX AND CONTROL BYTE CONSTANTS
// ============================================================================

/// HT (Horizontal Tab) - Advance to the next tab position
pub const HT: u8 = 0x09;

/// LF (Line Feed) - Print the line buffer and feed one line
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - Print and return to standard mode (page mode only)
pub const FF: u8 = 0x0C;

/// CR (Carriage Return) - Same as LF when auto line feed is enabled
pub const CR: u8 = 0x0D;

/// DLE (Data Link Escape) - Real-time command prefix
pub const DLE: u8 = 0x10;

/// CAN (Cancel) - Delete the page-mode print area
pub const CAN: u8 = 0x18;

/// ESC (Escape) - Command prefix byte
///
/// Most SRP-350 commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - NV bit-image command prefix (0x1C)
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - Extended command prefix (0x1D)
///
/// Used for character size, barcodes, bit images and paper cutting.
pub const GS: u8 = 0x1D;

// ============================================================================
// CONTROL BYTES
// ============================================================================

/// # Horizontal Tab (HT)
///
/// Moves the print position to the next horizontal tab position.
/// Tab positions are set with [`set_horizontal_tab_positions`].
#[inline]
pub fn horizontal_tab() -> Vec<u8> {
    vec![HT]
}

/// # Print and Line Feed (LF)
///
/// Prints the data in the print buffer and feeds one line based on the
/// current line spacing.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::commands;
///
/// assert_eq!(commands::line_feed(), vec![0x0A]);
/// ```
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Print and Carriage Return (CR)
///
/// When automatic line feed is enabled this functions the same as LF; when
/// disabled, the printer ignores it.
#[inline]
pub fn carriage_return() -> Vec<u8> {
    vec![CR]
}

// ============================================================================
// REAL-TIME COMMANDS (DLE)
// ============================================================================

/// # Real-Time Status Transmission (DLE EOT n)
///
/// Requests the printer to transmit a status byte in real time. This encoder
/// does not read the response back; the request bytes are emitted like any
/// other command.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | Hex     | 10 04 n   |
/// | Decimal | 16 4 n    |
///
/// ## Parameters
///
/// - `n = 1`: Transmit printer status
/// - `n = 2`: Transmit off-line status
/// - `n = 3`: Transmit error status
/// - `n = 4`: Transmit paper roll sensor status
///
/// ## Errors
///
/// Fails with [`TirillaError::OutOfRange`] when `n` is not in `1..=4`.
pub fn real_time_status(n: u8) -> Result<Vec<u8>, TirillaError> {
    Ok(Command::new(&[DLE, 0x04])
        .param_ranged("n", n, 1, 4)?
        .into_bytes())
}

/// # Real-Time Request to Printer (DLE ENQ n)
///
/// Recover from an error (`n = 1`) or recover and restart printing from the
/// line where the error occurred (`n = 2`).
///
/// ## Errors
///
/// Fails with [`TirillaError::OutOfRange`] when `n` is not in `1..=2`.
pub fn real_time_request(n: u8) -> Result<Vec<u8>, TirillaError> {
    Ok(Command::new(&[DLE, 0x05])
        .param_ranged("n", n, 1, 2)?
        .into_bytes())
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the data in the print buffer and resets the printer mode to the
/// power-on default. Call at the start of each print job.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use tirilla::protocol::commands;
///
/// assert_eq!(commands::initialize(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn initialize() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// SPACING AND POSITIONING
// ============================================================================

/// # Set Right-Side Character Spacing (ESC SP n)
///
/// Sets the spacing on the right side of each character to
/// `n x (horizontal or vertical motion unit)`.
pub fn right_side_character_spacing(n: u8) -> Vec<u8> {
    Command::new(&[ESC, b' ']).param(n).into_bytes()
}

/// # Set Absolute Print Position (ESC $ nL nH)
///
/// Sets the distance from the beginning of the line to the position at which
/// subsequent characters are printed: `(nL + nH x 256)` motion units.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::commands;
///
/// // 530 = 0x0212 -> little-endian split [0x12, 0x02]
/// assert_eq!(commands::set_absolute_print_position(530), vec![0x1B, 0x24, 0x12, 0x02]);
/// ```
pub fn set_absolute_print_position(position: u16) -> Vec<u8> {
    Command::new(&[ESC, b'$']).param_u16_le(position).into_bytes()
}

/// # Set Relative Print Position (ESC \ nL nH)
///
/// Sets the print starting position `(nL + nH x 256)` motion units from the
/// current position.
pub fn set_relative_print_position(distance: u16) -> Vec<u8> {
    Command::new(&[ESC, b'\\']).param_u16_le(distance).into_bytes()
}

/// # Set Horizontal Tab Positions (ESC D n1...nk NUL)
///
/// Sets up to k horizontal tab positions; each value is a column number from
/// the beginning of the line. The list is NUL-terminated on the wire. An
/// empty list clears all tab positions.
pub fn set_horizontal_tab_positions(positions: &[u8]) -> Vec<u8> {
    Command::new(&[ESC, b'D'])
        .data(positions)
        .param(0x00)
        .into_bytes()
}

// ============================================================================
// LINE SPACING AND PAPER FEED
// ============================================================================

/// # Select Default Line Spacing (ESC 2)
///
/// Selects 1/6-inch (approximately 4.23 mm) line spacing.
#[inline]
pub fn select_default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the line spacing to `n x (vertical or horizontal motion unit)`.
pub fn set_line_spacing(n: u8) -> Vec<u8> {
    Command::new(&[ESC, b'3']).param(n).into_bytes()
}

/// # Print and Feed Paper (ESC J n)
///
/// Prints the data in the print buffer and feeds the paper by
/// `n x (vertical or horizontal motion unit)`.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::commands;
///
/// assert_eq!(commands::print_and_feed(40), vec![0x1B, 0x4A, 40]);
/// ```
pub fn print_and_feed(n: u8) -> Vec<u8> {
    Command::new(&[ESC, b'J']).param(n).into_bytes()
}

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the data in the print buffer and feeds `n` lines.
pub fn print_and_feed_lines(n: u8) -> Vec<u8> {
    Command::new(&[ESC, b'd']).param(n).into_bytes()
}

// ============================================================================
// PERIPHERAL DEVICE AND USER-DEFINED CHARACTERS
// ============================================================================

/// # Set Peripheral Device (ESC = n)
///
/// Selects the device to which the host sends data: `n = 0` disables the
/// printer, `n = 1` enables it.
pub fn set_peripheral_device(n: u8) -> Vec<u8> {
    Command::new(&[ESC, b'=']).param(n).into_bytes()
}

/// # Select/Cancel User-Defined Character Set (ESC % n)
///
/// When the LSB of `n` is 1 the user-defined character set is selected,
/// when 0 it is canceled.
pub fn select_user_defined_character_set(n: u8) -> Vec<u8> {
    Command::new(&[ESC, b'%']).param(n).into_bytes()
}

/// # Define User-Defined Characters (ESC & ...)
///
/// Not implemented. The glyph payload format (per-character column data) is
/// documented but this encoder does not emit it; failing loudly beats
/// emitting a malformed definition.
pub fn define_user_defined_characters() -> Result<Vec<u8>, TirillaError> {
    Err(TirillaError::Unsupported(
        "ESC & (define user-defined characters)",
    ))
}

/// # Cancel User-Defined Characters (ESC ? n)
///
/// Deletes the user-defined character for character code `n`.
///
/// ## Errors
///
/// The manual documents `32 < n < 126`; values outside `33..=125` fail with
/// [`TirillaError::OutOfRange`].
pub fn cancel_user_defined_characters(n: u8) -> Result<Vec<u8>, TirillaError> {
    Ok(Command::new(&[ESC, b'?'])
        .param_ranged("n", n, 33, 125)?
        .into_bytes())
}

// ============================================================================
// PAPER CUTTING
// ============================================================================

/// Paper cut modes for [`cut`] (GS V).
///
/// Values are the documented ASCII-digit-valued mode codes, not 0/1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CutMode {
    /// Partial cut at the current position (`m = 49`)
    #[default]
    Default = 49,
    /// Feed to `(cutting position + n x vertical motion unit)`, then cut
    /// (`m = 66`); pair with a feed amount
    FeedAndCut = 66,
}

/// # Select Cut Mode and Cut Paper (GS V m / GS V m n)
///
/// Cuts the paper. With [`CutMode::FeedAndCut`] and a feed amount, the
/// printer feeds to the cutting position plus `n` motion units first.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | Hex     | 1D 56 m      |
/// | Hex     | 1D 56 m n    |
///
/// The feed byte is present on the wire only when `feed` is supplied — the
/// three-byte and four-byte shapes are distinct commands, not a zero-filled
/// default.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::commands::{cut, CutMode};
///
/// assert_eq!(cut(CutMode::FeedAndCut, Some(40)), vec![0x1D, 0x56, 66, 40]);
/// assert_eq!(cut(CutMode::FeedAndCut, None), vec![0x1D, 0x56, 66]);
/// ```
pub fn cut(mode: CutMode, feed: Option<u8>) -> Vec<u8> {
    let cmd = Command::new(&[GS, b'V']).param(mode as u8);
    match feed {
        Some(n) => cmd.param(n).into_bytes(),
        None => cmd.into_bytes(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_bytes() {
        assert_eq!(horizontal_tab(), vec![0x09]);
        assert_eq!(line_feed(), vec![0x0A]);
        assert_eq!(carriage_return(), vec![0x0D]);
    }

    #[test]
    fn test_real_time_status_bounds() {
        assert_eq!(real_time_status(1).unwrap(), vec![0x10, 0x04, 1]);
        assert_eq!(real_time_status(4).unwrap(), vec![0x10, 0x04, 4]);
        assert!(real_time_status(0).is_err());
        assert!(real_time_status(5).is_err());
    }

    #[test]
    fn test_real_time_request_bounds() {
        assert_eq!(real_time_request(2).unwrap(), vec![0x10, 0x05, 2]);
        assert!(real_time_request(3).is_err());
    }

    #[test]
    fn test_initialize() {
        assert_eq!(initialize(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_positioning_little_endian() {
        assert_eq!(set_absolute_print_position(0), vec![0x1B, 0x24, 0, 0]);
        assert_eq!(
            set_absolute_print_position(512),
            vec![0x1B, 0x24, 0x00, 0x02]
        );
        assert_eq!(
            set_relative_print_position(300),
            vec![0x1B, 0x5C, 0x2C, 0x01]
        );
    }

    #[test]
    fn test_tab_positions_nul_terminated() {
        assert_eq!(
            set_horizontal_tab_positions(&[8, 16, 24]),
            vec![0x1B, 0x44, 8, 16, 24, 0x00]
        );
        // Empty list clears tabs and is just the terminator
        assert_eq!(set_horizontal_tab_positions(&[]), vec![0x1B, 0x44, 0x00]);
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(select_default_line_spacing(), vec![0x1B, 0x32]);
        assert_eq!(set_line_spacing(60), vec![0x1B, 0x33, 60]);
    }

    #[test]
    fn test_feed() {
        assert_eq!(print_and_feed(0), vec![0x1B, 0x4A, 0]);
        assert_eq!(print_and_feed(255), vec![0x1B, 0x4A, 255]);
        assert_eq!(print_and_feed_lines(5), vec![0x1B, 0x64, 5]);
    }

    #[test]
    fn test_user_defined_characters() {
        assert!(matches!(
            define_user_defined_characters(),
            Err(TirillaError::Unsupported(_))
        ));
        assert_eq!(
            cancel_user_defined_characters(65).unwrap(),
            vec![0x1B, 0x3F, 65]
        );
        assert!(cancel_user_defined_characters(32).is_err());
        assert!(cancel_user_defined_characters(126).is_err());
    }

    #[test]
    fn test_cut_optional_feed() {
        assert_eq!(cut(CutMode::Default, None), vec![0x1D, 0x56, 49]);
        assert_eq!(cut(CutMode::FeedAndCut, Some(40)), vec![0x1D, 0x56, 66, 40]);
        // Three bytes, not four: the feed byte is omitted entirely
        assert_eq!(cut(CutMode::FeedAndCut, None).len(), 3);
    }
}
