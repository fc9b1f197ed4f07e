//! # SRP-350 Barcode Commands
//!
//! One-dimensional barcode printing (GS k) plus the sizing and HRI
//! (Human Readable Interpretation) configuration commands.
//!
//! ## Two Wire Shapes
//!
//! `GS k` has two payload shapes depending on the barcode system code:
//!
//! | Systems | Codes | Shape |
//! |---------|-------|-------|
//! | A (classic) | 0..=6 | `1D 6B m d1...dk 00` — NUL-terminated |
//! | B (extended) | 65..=73 | `1D 6B m n d1...dk` — length-prefixed |
//!
//! The boundary is encoded in the [`BarcodeSystem`] enum rather than a raw
//! numeric comparison, so every system carries its shape through an
//! exhaustive match.
//!
//! ## Usage
//!
//! ```
//! use tirilla::protocol::barcode::{self, BarcodeSystem, HriPosition};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::set_height(100));
//! data.extend(barcode::hri_position(HriPosition::Below));
//! data.extend(barcode::print_barcode(BarcodeSystem::Ean13, "4388860567386")?);
//! # Ok::<(), tirilla::TirillaError>(())
//! ```

use super::command::Command;
use crate::error::TirillaError;
use crate::protocol::commands::GS;

// ============================================================================
// BARCODE SYSTEMS (GS k)
// ============================================================================

/// How a barcode system frames its data bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    /// System A: data followed by a NUL terminator, no length byte
    NulTerminated,
    /// System B: explicit length byte before the data, no terminator
    LengthPrefixed,
}

/// Barcode symbologies supported by `GS k`.
///
/// The classic (system A) entries use codes 0..=6 and the NUL-terminated
/// shape; the extended (system B) entries use codes 65..=73 and the
/// length-prefixed shape. JAN-13/JAN-8 are the same symbologies as
/// EAN-13/EAN-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeSystem {
    /// UPC-A, system A (code 0)
    UpcA,
    /// UPC-E, system A (code 1)
    UpcE,
    /// JAN/EAN-13, system A (code 2)
    Ean13,
    /// JAN/EAN-8, system A (code 3)
    Ean8,
    /// CODE39, system A (code 4)
    Code39,
    /// Interleaved 2 of 5, system A (code 5)
    Itf,
    /// CODABAR, system A (code 6)
    Codabar,
    /// UPC-A, system B (code 65)
    UpcAExt,
    /// UPC-E, system B (code 66)
    UpcEExt,
    /// JAN/EAN-13, system B (code 67)
    Ean13Ext,
    /// JAN/EAN-8, system B (code 68)
    Ean8Ext,
    /// CODE39, system B (code 69)
    Code39Ext,
    /// Interleaved 2 of 5, system B (code 70)
    ItfExt,
    /// CODABAR, system B (code 71)
    CodabarExt,
    /// CODE93, system B only (code 72)
    Code93,
    /// CODE128, system B only (code 73)
    Code128,
}

impl BarcodeSystem {
    /// The documented system code sent as the `m` parameter.
    pub fn code(self) -> u8 {
        match self {
            Self::UpcA => 0,
            Self::UpcE => 1,
            Self::Ean13 => 2,
            Self::Ean8 => 3,
            Self::Code39 => 4,
            Self::Itf => 5,
            Self::Codabar => 6,
            Self::UpcAExt => 65,
            Self::UpcEExt => 66,
            Self::Ean13Ext => 67,
            Self::Ean8Ext => 68,
            Self::Code39Ext => 69,
            Self::ItfExt => 70,
            Self::CodabarExt => 71,
            Self::Code93 => 72,
            Self::Code128 => 73,
        }
    }

    /// Which of the two payload shapes this system uses.
    pub fn wire_shape(self) -> WireShape {
        match self {
            Self::UpcA
            | Self::UpcE
            | Self::Ean13
            | Self::Ean8
            | Self::Code39
            | Self::Itf
            | Self::Codabar => WireShape::NulTerminated,
            Self::UpcAExt
            | Self::UpcEExt
            | Self::Ean13Ext
            | Self::Ean8Ext
            | Self::Code39Ext
            | Self::ItfExt
            | Self::CodabarExt
            | Self::Code93
            | Self::Code128 => WireShape::LengthPrefixed,
        }
    }
}

/// # Print Barcode (GS k)
///
/// Selects a barcode system and prints the barcode. The payload shape
/// depends on the system, see the module docs.
///
/// Data is ASCII-encoded before length-counting or NUL-termination.
///
/// ## Errors
///
/// - [`TirillaError::InvalidData`] when `data` is empty or not ASCII
/// - [`TirillaError::OutOfRange`] when a length-prefixed system's data
///   exceeds 255 bytes
///
/// ## Example
///
/// ```
/// use tirilla::protocol::barcode::{print_barcode, BarcodeSystem};
///
/// // System A: NUL-terminated
/// let a = print_barcode(BarcodeSystem::Ean8, "41057759")?;
/// assert_eq!(a[..3], [0x1D, 0x6B, 3]);
/// assert_eq!(a[a.len() - 1], 0x00);
///
/// // System B: length-prefixed
/// let b = print_barcode(BarcodeSystem::Ean13Ext, "4388860567386")?;
/// assert_eq!(b[..4], [0x1D, 0x6B, 67, 13]);
/// # Ok::<(), tirilla::TirillaError>(())
/// ```
pub fn print_barcode(system: BarcodeSystem, data: &str) -> Result<Vec<u8>, TirillaError> {
    if data.is_empty() {
        return Err(TirillaError::InvalidData("barcode data is empty".into()));
    }
    if !data.is_ascii() {
        return Err(TirillaError::InvalidData(format!(
            "barcode data must be ASCII, got {data:?}"
        )));
    }

    let bytes = data.as_bytes();
    let cmd = Command::new(&[GS, b'k']).param(system.code());
    match system.wire_shape() {
        WireShape::NulTerminated => Ok(cmd.data(bytes).param(0x00).into_bytes()),
        WireShape::LengthPrefixed => {
            if bytes.len() > 255 {
                return Err(TirillaError::OutOfRange {
                    name: "data length",
                    value: bytes.len() as u32,
                    min: 1,
                    max: 255,
                });
            }
            Ok(cmd.param(bytes.len() as u8).data(bytes).into_bytes())
        }
    }
}

// ============================================================================
// BARCODE SIZING
// ============================================================================

/// # Set Barcode Height (GS h n)
///
/// `n` is the bar height in dots.
pub fn set_height(n: u8) -> Vec<u8> {
    Command::new(&[GS, b'h']).param(n).into_bytes()
}

/// # Set Barcode Width (GS w n)
///
/// `n` is the module width multiplier.
pub fn set_width(n: u8) -> Vec<u8> {
    Command::new(&[GS, b'w']).param(n).into_bytes()
}

// ============================================================================
// HRI CHARACTERS
// ============================================================================

/// Printing position of HRI characters relative to the bars (GS H n).
/// ASCII-digit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HriPosition {
    /// Not printed (`n = 48`)
    #[default]
    NotPrinted = 48,
    /// Above the barcode (`n = 49`)
    Above = 49,
    /// Below the barcode (`n = 50`)
    Below = 50,
    /// Both above and below (`n = 51`)
    AboveAndBelow = 51,
}

/// # Select Printing Position of HRI Characters (GS H n)
pub fn hri_position(position: HriPosition) -> Vec<u8> {
    Command::new(&[GS, b'H']).param(position as u8).into_bytes()
}

/// Fonts for HRI characters (GS f n). ASCII-digit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HriFont {
    /// Font A, 12 x 24 (`n = 48`)
    #[default]
    A = 48,
    /// Font B, 9 x 17 (`n = 49`)
    B = 49,
}

/// # Select Font for HRI Characters (GS f n)
pub fn hri_font(font: HriFont) -> Vec<u8> {
    Command::new(&[GS, b'f']).param(font as u8).into_bytes()
}

// ============================================================================
// TESTS
// ============================================================================
