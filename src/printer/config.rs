//! # Printer Configuration
//!
//! Hardware specifications for supported thermal printers.
//!
//! | Model | Width (dots) | Resolution |
//! |-------|--------------|------------|
//! | SRP-350 | 512 | 180 DPI |

/// # Printer Configuration
///
/// Defines the hardware characteristics of a thermal printer.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_mm = width_dots / dots_per_mm
///
/// For the SRP-350:
///   dots_per_mm = 180 / 25.4 ≈ 7.1
///   width_mm = 512 / 7.1 ≈ 72mm
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Maximum print width in dots
    pub width_dots: u16,

    /// Print width in bytes (width_dots / 8)
    pub width_bytes: u16,

    /// Resolution in dots per inch
    pub dpi: u16,
}

impl PrinterConfig {
    /// # Bixolon SRP-350 Configuration
    ///
    /// 80mm paper thermal receipt printer, typically attached as a USB or
    /// serial character device (`/dev/usb/lp0`).
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 80mm |
    /// | Print width | ~72mm (512 dots) |
    /// | Resolution | 180 DPI |
    /// | Cutter | Auto-cutter (partial) |
    pub const SRP350: Self = Self {
        name: "Bixolon SRP-350",
        width_dots: 512,
        width_bytes: 64,
        dpi: 180,
    };

    /// Dots per millimeter at this printer's resolution.
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Print width in millimeters.
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }

    /// Convert millimeters to dots.
    #[inline]
    pub fn mm_to_dots(&self, mm: f32) -> u16 {
        (mm * self.dots_per_mm()).round() as u16
    }

    /// Convert dots to millimeters.
    #[inline]
    pub fn dots_to_mm(&self, dots: u16) -> f32 {
        dots as f32 / self.dots_per_mm()
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::SRP350
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srp350_dimensions() {
        let config = PrinterConfig::SRP350;
        assert_eq!(config.width_dots, 512);
        assert_eq!(config.width_bytes, 64);
        assert_eq!(config.width_dots, config.width_bytes * 8);
    }

    #[test]
    fn test_dots_per_mm() {
        let dpmm = PrinterConfig::SRP350.dots_per_mm();
        // 180 DPI ≈ 7.1 dots/mm
        assert!((dpmm - 7.09).abs() < 0.05);
    }

    #[test]
    fn test_width_mm() {
        let width = PrinterConfig::SRP350.width_mm();
        assert!((width - 72.0).abs() < 1.0);
    }

    #[test]
    fn test_mm_dots_round_trip() {
        let config = PrinterConfig::SRP350;
        let dots = config.mm_to_dots(10.0);
        assert!((config.dots_to_mm(dots) - 10.0).abs() < 0.2);
    }

    #[test]
    fn test_default_is_srp350() {
        assert_eq!(PrinterConfig::default().name, PrinterConfig::SRP350.name);
    }
}
