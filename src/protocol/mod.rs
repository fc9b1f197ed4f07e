//! # SRP-350 ESC/POS Protocol Implementation
//!
//! Low-level command builders for the Bixolon SRP-350's ESC/POS dialect.
//! Each builder is a pure function mapping typed parameters to the exact
//! byte sequence the hardware specifies; validation happens before any
//! bytes are produced.
//!
//! ## Module Structure
//!
//! - [`command`]: typed command builder (opcode + validated parameters)
//! - [`commands`]: initialization, feed, positioning, tabs, cut
//! - [`text`]: print modes, underline, emphasis, sizes, fonts, charsets
//! - [`barcode`]: barcode systems, HRI configuration
//! - [`graphics`]: bit images, downloaded images, raster images
//! - [`nv_graphics`]: NV (flash-stored) bit images
//! - [`page`]: page mode
//! - [`codepage`]: single-byte text encoding (CP437 default)
//!
//! ## Usage Example
//!
//! ```
//! use tirilla::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::initialize());
//! data.extend(text::emphasize(true));
//! data.extend(b"RECEIPT");
//! data.extend(text::emphasize(false));
//! data.extend(commands::line_feed());
//! data.extend(commands::cut(commands::CutMode::FeedAndCut, Some(40)));
//! // Send `data` to the printer via a transport or session...
//! ```
//!
//! ## Protocol Reference
//!
//! Based on the "SRP-350 ESC/POS Command Manual" (Bixolon).

pub mod barcode;
pub mod codepage;
pub mod command;
pub mod commands;
pub mod graphics;
pub mod nv_graphics;
pub mod page;
pub mod text;
