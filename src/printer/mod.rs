//! # Printer Configuration and Sessions
//!
//! - [`config`]: hardware specifications for supported printers
//! - [`session`]: the output buffer, debug echo state, and flush logic

pub mod config;
pub mod session;

pub use config::PrinterConfig;
pub use session::{DebugMode, Session};
