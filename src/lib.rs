//! # Tirilla - Bixolon SRP-350 Receipt Printer Library
//!
//! Tirilla is a Rust library for driving Bixolon SRP-350 thermal receipt
//! printers over a Unix character device. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders with parameter
//!   validation
//! - **Raster pipeline**: arbitrary bitmaps quantized to the printer's
//!   1-bit format (scale, flatten, threshold, center, pack)
//! - **Sessions**: buffered command assembly with debug echo, flushed to
//!   the device in one write
//! - **Transport**: serial/USB character-device communication
//!
//! ## Quick Start
//!
//! ```no_run
//! use tirilla::{
//!     printer::Session,
//!     protocol::{commands::CutMode, text::Underline},
//!     transport::SerialTransport,
//! };
//!
//! // Open the printer device
//! let transport = SerialTransport::open("/dev/usb/lp0")?;
//! let mut session = Session::new(transport);
//!
//! // Build a small receipt
//! session.initialize();
//! session.underline(Underline::SingleDot);
//! session.println("CORNER STORE");
//! session.underline(Underline::Off);
//! session.println("total: 12.50");
//! session.print_and_feed_lines(3);
//! session.cut(CutMode::FeedAndCut, Some(40));
//!
//! // Send everything in one write
//! session.send()?;
//! # Ok::<(), tirilla::TirillaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`render`] | Bitmap to 1-bit raster conversion |
//! | [`printer`] | Printer configurations and sessions |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with:
//! - Bixolon SRP-350 (80mm paper, 180 DPI, 512-dot head)
//!
//! Other printers speaking the same ESC/POS dialect should work with
//! appropriate configuration adjustments.

pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::TirillaError;
pub use printer::{DebugMode, PrinterConfig, Session};
pub use protocol::codepage::Codepage;
pub use render::RasterImage;
pub use transport::{MemoryTransport, SerialTransport, Transport};
