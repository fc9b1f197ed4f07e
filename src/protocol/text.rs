//! # SRP-350 Text Styling Commands
//!
//! Print-mode selection, underline, emphasis, character sizing, fonts and
//! international character sets.
//!
//! ## Composite Parameter Bytes
//!
//! Two commands take a single byte packing several fields. The bit layouts
//! are protocol contracts and reproduced exactly:
//!
//! - `ESC ! n` print-mode byte — see [`PrintMode`]
//! - `GS ! n` character-size byte — high nibble width, low nibble height
//!
//! ## ASCII-Digit Mode Values
//!
//! Several mode parameters use ASCII-digit-valued constants (48 = `'0'`,
//! 49 = `'1'`, ...). These exact values are what the printer expects; they
//! must not be renumbered to 0/1/2.

use super::command::Command;
use super::commands::{ESC, GS};
use crate::error::TirillaError;

// ============================================================================
// PRINT MODE (ESC !)
// ============================================================================

/// Composite print-mode settings for [`select_print_mode`] (ESC ! n).
///
/// Packs into one byte with the documented bit positions:
///
/// | bit | function              |
/// |-----|-----------------------|
/// |   0 | Char font B (9 x 17)  |
/// |   3 | Emphasized mode       |
/// |   4 | Double height mode    |
/// |   5 | Double width mode     |
/// |   7 | Underline mode        |
///
/// Bits 1, 2 and 6 are undefined and always emitted as 0.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::text::PrintMode;
///
/// let mode = PrintMode {
///     font_b: true,
///     emphasized: true,
///     double_width: true,
///     underline: true,
///     ..Default::default()
/// };
/// assert_eq!(mode.to_byte(), 0b1010_1001); // 169
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintMode {
    /// Select character font B (9 x 17) instead of font A (12 x 24)
    pub font_b: bool,
    /// Emphasized (bold) mode
    pub emphasized: bool,
    /// Double height mode
    pub double_height: bool,
    /// Double width mode
    pub double_width: bool,
    /// Underline mode
    pub underline: bool,
}

impl PrintMode {
    /// Pack the five fields into the wire byte.
    pub fn to_byte(self) -> u8 {
        let mut n = 0u8;
        n |= self.font_b as u8;
        n |= (self.emphasized as u8) << 3;
        n |= (self.double_height as u8) << 4;
        n |= (self.double_width as u8) << 5;
        n |= (self.underline as u8) << 7;
        n
    }
}

/// # Select Print Modes (ESC ! n)
///
/// Selects font, emphasis, double height/width and underline in one command.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
pub fn select_print_mode(mode: PrintMode) -> Vec<u8> {
    Command::new(&[ESC, b'!']).param(mode.to_byte()).into_bytes()
}

// ============================================================================
// UNDERLINE / EMPHASIS / DOUBLE STRIKE
// ============================================================================

/// Underline thickness for [`underline`] (ESC - n).
///
/// The values are ASCII digits: `'0'` = 48, `'1'` = 49, `'2'` = 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Underline {
    /// Underline off (`n = 48`)
    #[default]
    Off = 48,
    /// 1-dot-thick underline (`n = 49`)
    SingleDot = 49,
    /// 2-dot-thick underline (`n = 50`)
    DoubleDot = 50,
}

/// # Turn Underline Mode On/Off (ESC - n)
///
/// ## Example
///
/// ```
/// use tirilla::protocol::text::{underline, Underline};
///
/// assert_eq!(underline(Underline::DoubleDot), vec![0x1B, 0x2D, 50]);
/// ```
pub fn underline(mode: Underline) -> Vec<u8> {
    Command::new(&[ESC, b'-']).param(mode as u8).into_bytes()
}

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// Only the LSB of `n` is significant on the wire; this takes a bool.
pub fn emphasize(on: bool) -> Vec<u8> {
    Command::new(&[ESC, b'E']).param(on as u8).into_bytes()
}

/// # Turn Double-Strike Mode On/Off (ESC G n)
///
/// On the SRP-350 double-strike renders the same as emphasized.
pub fn double_strike(on: bool) -> Vec<u8> {
    Command::new(&[ESC, b'G']).param(on as u8).into_bytes()
}

// ============================================================================
// CHARACTER SIZE (GS !)
// ============================================================================

/// Pack a character-size byte: high nibble width multiplier, low nibble
/// height multiplier.
///
/// ## Errors
///
/// Each multiplier must be in `0..=7`.
///
/// ## Example
///
/// ```
/// use tirilla::protocol::text::character_size_byte;
///
/// assert_eq!(character_size_byte(3, 5).unwrap(), (3 << 4) | 5); // 53
/// ```
pub fn character_size_byte(width: u8, height: u8) -> Result<u8, TirillaError> {
    TirillaError::check_range("width", width as u32, 0, 7)?;
    TirillaError::check_range("height", height as u32, 0, 7)?;
    Ok((width << 4) | height)
}

/// # Select Character Size (GS ! n)
///
/// Selects width and height multipliers for subsequent characters.
/// `0` means normal size, `1` double, up to `7` (8x).
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
pub fn select_character_size(width: u8, height: u8) -> Result<Vec<u8>, TirillaError> {
    let n = character_size_byte(width, height)?;
    Ok(Command::new(&[GS, b'!']).param(n).into_bytes())
}

// ============================================================================
// FONTS AND CHARACTER SETS
// ============================================================================

/// Character fonts for [`select_font`] (ESC M n). ASCII-digit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Font {
    /// Font A, 12 x 24 dots (`n = 48`)
    #[default]
    A = 48,
    /// Font B, 9 x 17 dots (`n = 49`)
    B = 49,
}

/// # Select Character Font (ESC M n)
pub fn select_font(font: Font) -> Vec<u8> {
    Command::new(&[ESC, b'M']).param(font as u8).into_bytes()
}

/// International character sets for [`select_charset`] (ESC R n).
///
/// These substitute a handful of code points (#, $, @, brackets, ...) with
/// national variants. Note the gap: Denmark II is 10, not 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Charset {
    #[default]
    Usa = 0,
    France = 1,
    Germany = 2,
    Uk = 3,
    Denmark1 = 4,
    Sweden = 5,
    Italy = 6,
    Spain = 7,
    Norway = 8,
    Denmark2 = 10,
}

/// # Select International Character Set (ESC R n)
pub fn select_charset(charset: Charset) -> Vec<u8> {
    Command::new(&[ESC, b'R']).param(charset as u8).into_bytes()
}

// ============================================================================
// ROTATION / INVERSE / SMOOTHING
// ============================================================================

/// # Turn 90-Degree Clockwise Rotation On/Off (ESC V n)
///
/// `n` is ASCII-digit valued: 48 = off, 49 = on. Not to be confused with the
/// cut command, which is `GS V`.
pub fn clockwise_rotation(on: bool) -> Vec<u8> {
    Command::new(&[ESC, b'V'])
        .param(if on { 49 } else { 48 })
        .into_bytes()
}

/// # Turn White/Black Reverse Printing On/Off (GS B n)
pub fn inverse(on: bool) -> Vec<u8> {
    Command::new(&[GS, b'B']).param(on as u8).into_bytes()
}

/// # Turn Smoothing Mode On/Off (GS b n)
///
/// Smooths the jagged edges of scaled-up characters.
pub fn smoothing(on: bool) -> Vec<u8> {
    Command::new(&[GS, b'b']).param(on as u8).into_bytes()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_mode_bit_positions() {
        // One bit at a time
        assert_eq!(PrintMode { font_b: true, ..Default::default() }.to_byte(), 1);
        assert_eq!(
            PrintMode { emphasized: true, ..Default::default() }.to_byte(),
            1 << 3
        );
        assert_eq!(
            PrintMode { double_height: true, ..Default::default() }.to_byte(),
            1 << 4
        );
        assert_eq!(
            PrintMode { double_width: true, ..Default::default() }.to_byte(),
            1 << 5
        );
        assert_eq!(
            PrintMode { underline: true, ..Default::default() }.to_byte(),
            1 << 7
        );
    }

    #[test]
    fn test_print_mode_combined() {
        // Worked example from the manual: bit0 + bit3 + bit5 + bit7 = 169
        let mode = PrintMode {
            font_b: true,
            emphasized: true,
            double_height: false,
            double_width: true,
            underline: true,
        };
        assert_eq!(mode.to_byte(), 169);
        assert_eq!(select_print_mode(mode), vec![0x1B, 0x21, 169]);
    }

    #[test]
    fn test_print_mode_default_is_zero() {
        assert_eq!(PrintMode::default().to_byte(), 0);
    }

    #[test]
    fn test_underline_ascii_digit_values() {
        assert_eq!(underline(Underline::Off), vec![0x1B, 0x2D, 48]);
        assert_eq!(underline(Underline::SingleDot), vec![0x1B, 0x2D, 49]);
        assert_eq!(underline(Underline::DoubleDot), vec![0x1B, 0x2D, 50]);
    }

    #[test]
    fn test_emphasis_and_double_strike() {
        assert_eq!(emphasize(true), vec![0x1B, 0x45, 1]);
        assert_eq!(emphasize(false), vec![0x1B, 0x45, 0]);
        assert_eq!(double_strike(true), vec![0x1B, 0x47, 1]);
    }

    #[test]
    fn test_character_size_packing() {
        assert_eq!(character_size_byte(3, 5).unwrap(), 53);
        assert_eq!(character_size_byte(0, 0).unwrap(), 0);
        assert_eq!(character_size_byte(7, 7).unwrap(), 0x77);
        assert_eq!(
            select_character_size(1, 1).unwrap(),
            vec![0x1D, 0x21, 0x11]
        );
    }

    #[test]
    fn test_character_size_bounds() {
        assert!(character_size_byte(8, 0).is_err());
        assert!(character_size_byte(0, 8).is_err());
        let err = select_character_size(9, 2).unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn test_fonts_and_charsets() {
        assert_eq!(select_font(Font::A), vec![0x1B, 0x4D, 48]);
        assert_eq!(select_font(Font::B), vec![0x1B, 0x4D, 49]);
        assert_eq!(select_charset(Charset::Usa), vec![0x1B, 0x52, 0]);
        assert_eq!(select_charset(Charset::Denmark2), vec![0x1B, 0x52, 10]);
    }

    #[test]
    fn test_rotation_inverse_smoothing() {
        assert_eq!(clockwise_rotation(true), vec![0x1B, 0x56, 49]);
        assert_eq!(clockwise_rotation(false), vec![0x1B, 0x56, 48]);
        assert_eq!(inverse(true), vec![0x1D, 0x42, 1]);
        assert_eq!(smoothing(false), vec![0x1D, 0x62, 0]);
    }
}
