//! # SRP-350 Bit Image Commands
//!
//! Column-format bit images (ESC *), downloaded bit images (GS * / GS /) and
//! raster bit images (GS v 0).
//!
//! ## Bit Packing
//!
//! Raster data is packed 8 horizontal dots per byte:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! ```
//!
//! ## SRP-350 Specifications
//!
//! | Property | Value |
//! |----------|-------|
//! | Max print width | 512 dots (64 bytes) |
//! | Resolution | 180 DPI (~7 dots/mm) |
//!
//! Every data-carrying command validates that the payload length matches the
//! dimensions in its header before emitting anything.

use super::command::Command;
use super::commands::{ESC, GS};
use crate::error::TirillaError;

// ============================================================================
// BIT IMAGE MODE (ESC *)
// ============================================================================

/// Vertical density modes for [`select_bit_image`] (ESC * m).
///
/// | m  | mode                  | v dots | bytes per column |
/// |----|-----------------------|--------|------------------|
/// |  0 | 8-dot single density  |      8 | 1                |
/// |  1 | 8-dot double density  |      8 | 1                |
/// | 32 | 24-dot single density |     24 | 3                |
/// | 33 | 24-dot double density |     24 | 3                |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BitImageMode {
    EightDotSingle = 0,
    EightDotDouble = 1,
    TwentyFourDotSingle = 32,
    TwentyFourDotDouble = 33,
}

impl BitImageMode {
    /// Data bytes per horizontal dot column (1 for 8-dot, 3 for 24-dot).
    pub fn bytes_per_column(self) -> usize {
        match self {
            Self::EightDotSingle | Self::EightDotDouble => 1,
            Self::TwentyFourDotSingle | Self::TwentyFourDotDouble => 3,
        }
    }
}

/// # Select Bit-Image Mode (ESC * m nL nH d1...dk)
///
/// Prints a column-format bit image `width` dot columns wide. The expected
/// data length is `width * bytes_per_column(m)`.
///
/// ## Protocol Details
///
/// | Format  | Bytes                 |
/// |---------|-----------------------|
/// | Hex     | 1B 2A m nL nH d1...dk |
///
/// `nL`, `nH` are the little-endian split of the column count.
///
/// ## Errors
///
/// [`TirillaError::InvalidData`] when `data.len()` does not match the
/// declared width for the mode.
pub fn select_bit_image(
    mode: BitImageMode,
    width: u16,
    data: &[u8],
) -> Result<Vec<u8>, TirillaError> {
    let expected = width as usize * mode.bytes_per_column();
    if data.len() != expected {
        return Err(TirillaError::InvalidData(format!(
            "bit image data length {} does not match {} columns in mode {:?} (expected {})",
            data.len(),
            width,
            mode,
            expected
        )));
    }
    Ok(Command::new(&[ESC, b'*'])
        .param(mode as u8)
        .param_u16_le(width)
        .data(data)
        .into_bytes())
}

// ============================================================================
// DOWNLOADED BIT IMAGE (GS * / GS /)
// ============================================================================

/// Maximum `x * y` product for a downloaded bit image, per the manual.
pub const DOWNLOADED_IMAGE_MAX_CELLS: u32 = 1536;

/// # Define Downloaded Bit Image (GS * x y d1...d(x*y*8))
///
/// Defines a bit image in printer RAM using `x` and `y` in 8-dot units.
/// The image is `x * 8` dots wide and `y * 8` dots tall, so the data length
/// must be exactly `x * y * 8` bytes.
///
/// ## Bounds
///
/// - `1 <= x <= 255`
/// - `1 <= y <= 48`
/// - `x * y <= 1536`
///
/// All bounds are validated before any bytes are produced.
pub fn define_downloaded_bit_image(x: u8, y: u8, data: &[u8]) -> Result<Vec<u8>, TirillaError> {
    TirillaError::check_range("x", x as u32, 1, 255)?;
    TirillaError::check_range("y", y as u32, 1, 48)?;
    TirillaError::check_range(
        "x * y",
        x as u32 * y as u32,
        1,
        DOWNLOADED_IMAGE_MAX_CELLS,
    )?;
    let expected = x as usize * y as usize * 8;
    if data.len() != expected {
        return Err(TirillaError::InvalidData(format!(
            "downloaded bit image data length {} does not match {}x{} cells (expected {})",
            data.len(),
            x,
            y,
            expected
        )));
    }
    Ok(Command::new(&[GS, b'*'])
        .param(x)
        .param(y)
        .data(data)
        .into_bytes())
}

/// Print modes for a downloaded bit image (GS / m). ASCII-digit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DownloadedImageMode {
    /// Normal (`m = 48`)
    #[default]
    Normal = 48,
    /// Double width (`m = 49`)
    DoubleWidth = 49,
    /// Double height (`m = 50`)
    DoubleHeight = 50,
    /// Quadruple (`m = 51`)
    Quadruple = 51,
}

/// # Print Downloaded Bit Image (GS / m)
pub fn print_downloaded_bit_image(mode: DownloadedImageMode) -> Vec<u8> {
    Command::new(&[GS, b'/']).param(mode as u8).into_bytes()
}

// ============================================================================
// RASTER BIT IMAGE (GS v 0)
// ============================================================================

/// Scaling modes for the raster bit image command (GS v 0 m).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RasterMode {
    /// Normal, 1 dot per data bit (`m = 0`)
    #[default]
    Normal = 0,
    /// Double width (`m = 1`)
    DoubleWidth = 1,
    /// Double height (`m = 2`)
    DoubleHeight = 2,
    /// Quadruple (`m = 3`)
    Quadruple = 3,
}

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// Prints a row-major raster image. Width is given in **bytes**
/// (`xL + xH * 256`), height in **dots** (`yL + yH * 256`); the data length
/// must equal their product.
///
/// ## Protocol Details
///
/// | Format  | Bytes                           |
/// |---------|---------------------------------|
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk  |
///
/// The raster pipeline in [`crate::render::raster`] produces these header
/// fields and packed data directly; see
/// [`RasterImage::to_command`](crate::render::raster::RasterImage::to_command).
///
/// ## Errors
///
/// [`TirillaError::InvalidData`] when the payload length does not match the
/// header dimensions.
pub fn print_raster_bit_image(
    mode: RasterMode,
    x_l: u8,
    x_h: u8,
    y_l: u8,
    y_h: u8,
    data: &[u8],
) -> Result<Vec<u8>, TirillaError> {
    let width_bytes = x_l as usize + x_h as usize * 256;
    let height_dots = y_l as usize + y_h as usize * 256;
    let expected = width_bytes * height_dots;
    if data.len() != expected {
        return Err(TirillaError::InvalidData(format!(
            "raster data length {} does not match {} bytes x {} rows (expected {})",
            data.len(),
            width_bytes,
            height_dots,
            expected
        )));
    }
    Ok(Command::new(&[GS, b'v', b'0'])
        .param(mode as u8)
        .param(x_l)
        .param(x_h)
        .param(y_l)
        .param(y_h)
        .data(data)
        .into_bytes())
}

// ============================================================================
// TESTS
// ============================================================================
