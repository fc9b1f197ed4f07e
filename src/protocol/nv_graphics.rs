//! # NV Bit Image Commands
//!
//! NV (Non-Volatile) bit images are stored in the printer's flash memory and
//! persist across power cycles — the usual home for shop logos.
//!
//! The SRP-350 defines NV images with `FS q` (0x1C 0x71). Each image block
//! carries its own dimension header: `xL xH yL yH` followed by packed dot
//! data, with both dimensions counted in 8-dot units.

use super::command::Command;
use super::commands::FS;
use crate::error::TirillaError;

/// Build one NV image block: `[width, 0, height, 0, d1...dk]`.
///
/// `width` and `height` are in 8-dot units, so the block describes a
/// `width * 8` x `height * 8` dot image and the data length must be exactly
/// `width * height * 8` bytes (width bytes per 8-dot band row, times
/// `height * 8` rows).
///
/// The high dimension bytes are always 0 here: the print head caps width at
/// 64 units (512 dots) and a flash logo taller than 2048 dots is rejected
/// by the printer anyway.
///
/// ## Errors
///
/// - [`TirillaError::OutOfRange`] when a dimension is 0
/// - [`TirillaError::InvalidData`] when the data length does not match
pub fn nv_image_block(width: u8, height: u8, data: &[u8]) -> Result<Vec<u8>, TirillaError> {
    TirillaError::check_range("width", width as u32, 1, 255)?;
    TirillaError::check_range("height", height as u32, 1, 255)?;
    let expected = width as usize * height as usize * 8;
    if data.len() != expected {
        return Err(TirillaError::InvalidData(format!(
            "NV image data length {} does not match {}x{} units (expected {})",
            data.len(),
            width,
            height,
            expected
        )));
    }
    let mut block = Vec::with_capacity(4 + data.len());
    block.extend_from_slice(&[width, 0, height, 0]);
    block.extend_from_slice(data);
    Ok(block)
}

/// # Define NV Bit Image (FS q n [xL xH yL yH d1...dk]...)
///
/// Stores `blocks.len()` images in flash, erasing any previously defined
/// set. Each block comes from [`nv_image_block`].
///
/// ## Protocol Details
///
/// | Format  | Bytes                              |
/// |---------|------------------------------------|
/// | Hex     | 1C 71 n [xL xH yL yH d1...dk] x n  |
///
/// ## Errors
///
/// [`TirillaError::OutOfRange`] when `blocks` is empty (the printer
/// requires `n >= 1`).
pub fn define_nv_bit_image(blocks: &[Vec<u8>]) -> Result<Vec<u8>, TirillaError> {
    TirillaError::check_range("n", blocks.len() as u32, 1, 255)?;
    let mut cmd = Command::new(&[FS, b'q']).param(blocks.len() as u8);
    for block in blocks {
        cmd = cmd.data(block);
    }
    Ok(cmd.into_bytes())
}

/// # Print NV Bit Image (FS p n m)
///
/// Not implemented: the SRP-350's print command for stored NV images is
/// documented but this encoder does not emit it yet.
pub fn print_nv_bit_image() -> Result<Vec<u8>, TirillaError> {
    Err(TirillaError::Unsupported("FS p (print NV bit image)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_shape() {
        let data = vec![0xFF; 2 * 3 * 8];
        let block = nv_image_block(2, 3, &data).unwrap();
        assert_eq!(block[..4], [2, 0, 3, 0]);
        assert_eq!(block.len(), 4 + 48);
    }

    #[test]
    fn test_block_length_check() {
        assert!(nv_image_block(2, 3, &[0u8; 47]).is_err());
        assert!(nv_image_block(0, 3, &[]).is_err());
    }

    #[test]
    fn test_define_single_image() {
        let data = vec![0xAA; 8];
        let block = nv_image_block(1, 1, &data).unwrap();
        let cmd = define_nv_bit_image(std::slice::from_ref(&block)).unwrap();
        assert_eq!(cmd[..3], [0x1C, 0x71, 1]);
        assert_eq!(&cmd[3..], &block[..]);
    }

    #[test]
    fn test_define_multiple_images() {
        let a = nv_image_block(1, 1, &[0x11; 8]).unwrap();
        let b = nv_image_block(2, 1, &[0x22; 16]).unwrap();
        let cmd = define_nv_bit_image(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(cmd[2], 2);
        assert_eq!(&cmd[3..3 + a.len()], &a[..]);
        assert_eq!(&cmd[3 + a.len()..], &b[..]);
    }

    #[test]
    fn test_define_requires_blocks() {
        assert!(define_nv_bit_image(&[]).is_err());
    }

    #[test]
    fn test_print_unsupported() {
        assert!(matches!(
            print_nv_bit_image(),
            Err(TirillaError::Unsupported(_))
        ));
    }
}
