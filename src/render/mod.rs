//! # Raster Rendering
//!
//! Conversion of arbitrary bitmaps into the printer's 1-bit raster format.
//!
//! - [`raster`]: the quantization pipeline feeding the raster bit-image
//!   command (scale, flatten, invert, threshold, center, pack)

pub mod raster;

pub use raster::RasterImage;
