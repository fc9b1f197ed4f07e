//! # Raster Image Pipeline
//!
//! Converts an arbitrary bitmap into the dimension-prefixed monochrome
//! payload required by the raster bit-image command (GS v 0).
//!
//! ## Transform Chain
//!
//! The steps run in a fixed order, each feeding the next:
//!
//! 1. **Scale to fit**: widths above 512 dots are downscaled preserving
//!    aspect ratio; narrower bitmaps keep their native resolution.
//! 2. **Flatten transparency**: composite over a solid white background.
//! 3. **Greyscale + invert**: luminance, then inverted so visually dark
//!    source pixels map to bit value 1 (the head prints on 1).
//! 4. **Threshold**: midpoint binarization (no dithering).
//! 5. **Center** (optional): pad horizontally to the full 512-dot width,
//!    content centered, padding off/white.
//! 6. **Pack**: row-major, 8 pixels per byte MSB-first, right-padded to the
//!    next byte boundary when the width is not a multiple of 8.
//!
//! The pipeline is a pure function of `(bitmap, centering flag)`: no session
//! state, re-entrant, byte-identical across runs.

use image::{DynamicImage, imageops::FilterType};
use std::path::Path;
use tracing::debug;

use crate::error::TirillaError;
use crate::printer::PrinterConfig;
use crate::protocol::graphics::{self, RasterMode};

/// Maximum horizontal dot count, taken from the SRP-350 hardware profile.
pub const MAX_WIDTH_DOTS: u32 = PrinterConfig::SRP350.width_dots as u32;

/// A packed 1-bit raster ready for the raster bit-image command.
///
/// `x_l`/`x_h` are the little-endian split of the width **in bytes**,
/// `y_l`/`y_h` of the height **in dots**. The head width caps the raster at
/// 64 bytes, so `x_h` is always 0.
///
/// Invariant: `data.len() == (x_l + 256 * x_h) * (y_l + 256 * y_h)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub x_l: u8,
    pub x_h: u8,
    pub y_l: u8,
    pub y_h: u8,
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Run the full pipeline on a decoded bitmap.
    ///
    /// With `center` set, bitmaps narrower than 512 dots are padded to the
    /// full print width with the content centered
    /// (`(512 - width) / 2` left margin, integer floor). Without it, the
    /// bitmap keeps its width, right-padded to a byte boundary if needed.
    ///
    /// ## Errors
    ///
    /// [`TirillaError::Image`] when the bitmap is empty, taller than the
    /// 16-bit height field allows (65535 dots), or so wide that scaling
    /// collapses its height to zero.
    pub fn from_image(img: &DynamicImage, center: bool) -> Result<Self, TirillaError> {
        let (w, h) = (img.width(), img.height());
        if w == 0 || h == 0 {
            return Err(TirillaError::Image(format!("empty bitmap ({w}x{h})")));
        }

        // 1. Scale to fit the print head, preserving aspect ratio.
        let scaled;
        let img = if w > MAX_WIDTH_DOTS {
            let ratio = w as f64 / MAX_WIDTH_DOTS as f64;
            let new_h = (h as f64 / ratio) as u32;
            if new_h == 0 {
                return Err(TirillaError::Image(format!(
                    "bitmap {w}x{h} too wide to scale to {MAX_WIDTH_DOTS} dots"
                )));
            }
            debug!(from = ?(w, h), to = ?(MAX_WIDTH_DOTS, new_h), "downscaling bitmap");
            scaled = img.resize_exact(MAX_WIDTH_DOTS, new_h, FilterType::Lanczos3);
            &scaled
        } else {
            img
        };

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if height > u16::MAX as u32 {
            return Err(TirillaError::Image(format!(
                "bitmap height {height} exceeds the 16-bit raster height field"
            )));
        }

        // 2-4. Flatten over white, take luminance, invert, threshold.
        // A source pixel prints (bit 1) when its flattened luminance is
        // below the midpoint, i.e. the inverted value is above it.
        let mut on = vec![false; (width * height) as usize];
        for (x, y, px) in rgba.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            let a = a as u32;
            let r = (r as u32 * a + 255 * (255 - a)) / 255;
            let g = (g as u32 * a + 255 * (255 - a)) / 255;
            let b = (b as u32 * a + 255 * (255 - a)) / 255;
            let luma = (299 * r + 587 * g + 114 * b) / 1000;
            on[(y * width + x) as usize] = (255 - luma) > 127;
        }

        // 5. Centering pads to the full head width; otherwise pad only to
        // the next byte boundary so no columns are truncated.
        let (final_width, left_margin) = if center && width < MAX_WIDTH_DOTS {
            (MAX_WIDTH_DOTS, (MAX_WIDTH_DOTS - width) / 2)
        } else {
            (width.next_multiple_of(8), 0)
        };

        // 6. Pack row-major, MSB-first.
        let width_bytes = (final_width / 8) as usize;
        let mut data = vec![0u8; width_bytes * height as usize];
        for y in 0..height as usize {
            let row = y * width_bytes;
            for x in 0..width as usize {
                if on[y * width as usize + x] {
                    let gx = x + left_margin as usize;
                    data[row + gx / 8] |= 1 << (7 - (gx % 8));
                }
            }
        }

        Ok(Self {
            x_l: (final_width / 8) as u8,
            x_h: 0,
            y_l: (height % 256) as u8,
            y_h: (height / 256) as u8,
            data,
        })
    }

    /// Load a bitmap from disk and run the pipeline on it.
    pub fn from_path<P: AsRef<Path>>(path: P, center: bool) -> Result<Self, TirillaError> {
        let img = image::open(path.as_ref()).map_err(|e| {
            TirillaError::Image(format!("failed to load {}: {e}", path.as_ref().display()))
        })?;
        Self::from_image(&img, center)
    }

    /// Raster width in bytes (`x_l + 256 * x_h`).
    pub fn width_bytes(&self) -> usize {
        self.x_l as usize + self.x_h as usize * 256
    }

    /// Raster height in dots (`y_l + 256 * y_h`).
    pub fn height_dots(&self) -> usize {
        self.y_l as usize + self.y_h as usize * 256
    }

    /// Encode as a raster bit-image command (GS v 0).
    pub fn to_command(&self, mode: RasterMode) -> Result<Vec<u8>, TirillaError> {
        graphics::print_raster_bit_image(mode, self.x_l, self.x_h, self.y_l, self.y_h, &self.data)
    }
}

// ============================================================================
// TESTS
// ============================================================================
