//! # Printer Session
//!
//! A [`Session`] owns the output buffer for one printer: every encoder
//! operation appends its byte sequence, and [`Session::send`] flushes the
//! accumulated bytes to the transport in a single write.
//!
//! ## Buffer Invariant
//!
//! The buffer contents always equal the concatenation, in call order, of
//! every command emitted since the last flush. A command that fails
//! validation appends nothing; the buffer is cleared only after a
//! successful write.
//!
//! ## Debug Echo
//!
//! The session tracks underline/emphasis flags purely to support
//! [`DebugMode::Visual`], which mirrors printed text to the terminal with
//! ANSI styling. The flags are a debug aid, never read by the encoders, and
//! reset by [`Session::initialize`].
//!
//! A session is used by exactly one caller sequence at a time; concurrent
//! producers need their own sessions or external serialization.

use tracing::{debug, trace};

use crate::error::TirillaError;
use crate::protocol::barcode::{self, BarcodeSystem, HriFont, HriPosition};
use crate::protocol::codepage::Codepage;
use crate::protocol::commands::{self, CutMode};
use crate::protocol::graphics::{self, BitImageMode, DownloadedImageMode, RasterMode};
use crate::protocol::nv_graphics;
use crate::protocol::page::{self, PrintDirection};
use crate::protocol::text::{self, Charset, Font, PrintMode, Underline};
use crate::render::raster::RasterImage;
use crate::transport::Transport;

/// How a session mirrors emitted commands for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugMode {
    /// No echo
    #[default]
    Off,
    /// Hex dump of every emitted payload to stdout
    Hexdump,
    /// ANSI rendering of printed text, with markers for cuts, barcodes
    /// and images
    Visual,
}

/// A printing session: output buffer, code page, debug state, transport.
///
/// ## Example
///
/// ```
/// use tirilla::printer::Session;
/// use tirilla::protocol::commands::CutMode;
/// use tirilla::transport::MemoryTransport;
///
/// let mut session = Session::new(MemoryTransport::default());
/// session.initialize();
/// session.println("Hello, world!");
/// session.cut(CutMode::FeedAndCut, Some(40));
/// session.send()?;
/// # Ok::<(), tirilla::TirillaError>(())
/// ```
pub struct Session<T: Transport> {
    transport: T,
    buffer: Vec<u8>,
    codepage: Codepage,
    debug: DebugMode,
    echo_underline: bool,
    echo_emphasized: bool,
}

impl<T: Transport> Session<T> {
    /// Create a session over a transport with CP437 text encoding and no
    /// debug echo.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buffer: Vec::new(),
            codepage: Codepage::default(),
            debug: DebugMode::default(),
            echo_underline: false,
            echo_emphasized: false,
        }
    }

    /// Select the debug echo mode.
    pub fn with_debug(mut self, debug: DebugMode) -> Self {
        self.debug = debug;
        self
    }

    /// Select the code page used by [`Session::print`].
    pub fn with_codepage(mut self, codepage: Codepage) -> Self {
        self.codepage = codepage;
        self
    }

    /// Bytes accumulated since the last flush.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The underlying transport (handy for inspecting a
    /// [`MemoryTransport`](crate::transport::MemoryTransport) in tests).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ------------------------------------------------------------------
    // Buffer plumbing
    // ------------------------------------------------------------------

    /// Append an already-encoded payload, echoing per the debug mode.
    /// Every operation below funnels through here.
    pub fn raw(&mut self, payload: Vec<u8>) -> Vec<u8> {
        if self.debug == DebugMode::Hexdump {
            hexdump(&payload);
        }
        trace!(len = payload.len(), "command emitted");
        self.buffer.extend_from_slice(&payload);
        payload
    }

    fn emit(&mut self, result: Result<Vec<u8>, TirillaError>) -> Result<Vec<u8>, TirillaError> {
        Ok(self.raw(result?))
    }

    /// # Flush the Buffer to the Device
    ///
    /// Writes the whole accumulated buffer through the transport exactly
    /// once, then clears it. On a transport error the buffer is left
    /// intact so the caller can retry or inspect it.
    pub fn send(&mut self) -> Result<(), TirillaError> {
        debug!(bytes = self.buffer.len(), "flushing buffer to transport");
        self.transport.write_all(&self.buffer)?;
        self.buffer.clear();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Print text in the session's code page.
    pub fn print(&mut self, text: &str) -> Vec<u8> {
        if self.debug == DebugMode::Visual {
            let mut styled = String::new();
            if self.echo_underline {
                styled.push_str("\u{1b}[4m");
            }
            if self.echo_emphasized {
                styled.push_str("\u{1b}[1m");
            }
            print!("{styled}{text}\u{1b}[0m");
        }
        let payload = self.codepage.encode(text);
        self.raw(payload)
    }

    /// Print text followed by a line feed.
    pub fn println(&mut self, text: &str) -> Vec<u8> {
        let mut payload = self.print(text);
        payload.extend(self.line_feed());
        payload
    }

    // ------------------------------------------------------------------
    // Control bytes
    // ------------------------------------------------------------------

    pub fn horizontal_tab(&mut self) -> Vec<u8> {
        self.echo_literal("\t");
        self.raw(commands::horizontal_tab())
    }

    pub fn line_feed(&mut self) -> Vec<u8> {
        self.echo_literal("\n");
        self.raw(commands::line_feed())
    }

    pub fn carriage_return(&mut self) -> Vec<u8> {
        self.echo_literal("\r");
        self.raw(commands::carriage_return())
    }

    pub fn real_time_status(&mut self, n: u8) -> Result<Vec<u8>, TirillaError> {
        self.emit(commands::real_time_status(n))
    }

    pub fn real_time_request(&mut self, n: u8) -> Result<Vec<u8>, TirillaError> {
        self.emit(commands::real_time_request(n))
    }

    // ------------------------------------------------------------------
    // Initialization, spacing, positioning
    // ------------------------------------------------------------------

    /// Initialize the printer and reset the debug echo flags, mirroring
    /// the printer's own mode reset.
    pub fn initialize(&mut self) -> Vec<u8> {
        self.echo_underline = false;
        self.echo_emphasized = false;
        self.raw(commands::initialize())
    }

    pub fn right_side_character_spacing(&mut self, n: u8) -> Vec<u8> {
        self.raw(commands::right_side_character_spacing(n))
    }

    pub fn set_absolute_print_position(&mut self, position: u16) -> Vec<u8> {
        self.raw(commands::set_absolute_print_position(position))
    }

    pub fn set_relative_print_position(&mut self, distance: u16) -> Vec<u8> {
        self.raw(commands::set_relative_print_position(distance))
    }

    pub fn set_horizontal_tab_positions(&mut self, positions: &[u8]) -> Vec<u8> {
        self.raw(commands::set_horizontal_tab_positions(positions))
    }

    pub fn set_peripheral_device(&mut self, n: u8) -> Vec<u8> {
        self.raw(commands::set_peripheral_device(n))
    }

    pub fn select_user_defined_character_set(&mut self, n: u8) -> Vec<u8> {
        self.raw(commands::select_user_defined_character_set(n))
    }

    pub fn define_user_defined_characters(&mut self) -> Result<Vec<u8>, TirillaError> {
        self.emit(commands::define_user_defined_characters())
    }

    pub fn cancel_user_defined_characters(&mut self, n: u8) -> Result<Vec<u8>, TirillaError> {
        self.emit(commands::cancel_user_defined_characters(n))
    }

    pub fn select_default_line_spacing(&mut self) -> Vec<u8> {
        self.raw(commands::select_default_line_spacing())
    }

    pub fn set_line_spacing(&mut self, n: u8) -> Vec<u8> {
        self.raw(commands::set_line_spacing(n))
    }

    pub fn print_and_feed(&mut self, n: u8) -> Vec<u8> {
        self.raw(commands::print_and_feed(n))
    }

    pub fn print_and_feed_lines(&mut self, n: u8) -> Vec<u8> {
        if self.debug == DebugMode::Visual {
            print!("{}", "\n".repeat(n as usize));
        }
        self.raw(commands::print_and_feed_lines(n))
    }

    /// Cut the paper, optionally feeding first. See
    /// [`commands::cut`] for the two wire shapes.
    pub fn cut(&mut self, mode: CutMode, feed: Option<u8>) -> Vec<u8> {
        self.echo_marker("CUT", 14);
        self.raw(commands::cut(mode, feed))
    }

    // ------------------------------------------------------------------
    // Text styling
    // ------------------------------------------------------------------

    /// Select print modes; updates the underline/emphasis echo flags since
    /// the composite byte toggles both.
    pub fn select_print_mode(&mut self, mode: PrintMode) -> Vec<u8> {
        self.echo_underline = mode.underline;
        self.echo_emphasized = mode.emphasized;
        self.raw(text::select_print_mode(mode))
    }

    pub fn underline(&mut self, mode: Underline) -> Vec<u8> {
        self.echo_underline = mode != Underline::Off;
        self.raw(text::underline(mode))
    }

    pub fn emphasize(&mut self, on: bool) -> Vec<u8> {
        self.echo_emphasized = on;
        self.raw(text::emphasize(on))
    }

    pub fn double_strike(&mut self, on: bool) -> Vec<u8> {
        self.echo_emphasized = on;
        self.raw(text::double_strike(on))
    }

    pub fn select_character_size(&mut self, width: u8, height: u8) -> Result<Vec<u8>, TirillaError> {
        self.emit(text::select_character_size(width, height))
    }

    pub fn select_font(&mut self, font: Font) -> Vec<u8> {
        self.raw(text::select_font(font))
    }

    pub fn select_charset(&mut self, charset: Charset) -> Vec<u8> {
        self.raw(text::select_charset(charset))
    }

    pub fn clockwise_rotation(&mut self, on: bool) -> Vec<u8> {
        self.raw(text::clockwise_rotation(on))
    }

    pub fn inverse(&mut self, on: bool) -> Vec<u8> {
        self.raw(text::inverse(on))
    }

    pub fn smoothing(&mut self, on: bool) -> Vec<u8> {
        self.raw(text::smoothing(on))
    }

    // ------------------------------------------------------------------
    // Page mode
    // ------------------------------------------------------------------

    pub fn select_page_mode(&mut self) -> Vec<u8> {
        self.raw(page::select_page_mode())
    }

    pub fn select_standard_mode(&mut self) -> Vec<u8> {
        self.raw(page::select_standard_mode())
    }

    pub fn print_in_page_mode(&mut self) -> Vec<u8> {
        self.raw(page::print_in_page_mode())
    }

    pub fn print_and_return_to_standard_mode(&mut self) -> Vec<u8> {
        self.raw(page::print_and_return_to_standard_mode())
    }

    pub fn cancel_print_data(&mut self) -> Vec<u8> {
        self.raw(page::cancel_print_data())
    }

    pub fn print_direction(&mut self, direction: PrintDirection) -> Vec<u8> {
        self.raw(page::print_direction(direction))
    }

    pub fn set_printing_area(&mut self) -> Result<Vec<u8>, TirillaError> {
        self.emit(page::set_printing_area())
    }

    // ------------------------------------------------------------------
    // Barcodes
    // ------------------------------------------------------------------

    pub fn set_barcode_height(&mut self, n: u8) -> Vec<u8> {
        self.raw(barcode::set_height(n))
    }

    pub fn set_barcode_width(&mut self, n: u8) -> Vec<u8> {
        self.raw(barcode::set_width(n))
    }

    pub fn hri_position(&mut self, position: HriPosition) -> Vec<u8> {
        self.raw(barcode::hri_position(position))
    }

    pub fn hri_font(&mut self, font: HriFont) -> Vec<u8> {
        self.raw(barcode::hri_font(font))
    }

    /// Print a barcode. Validation (ASCII, shape-specific length) happens
    /// before anything is buffered.
    pub fn print_barcode(
        &mut self,
        system: BarcodeSystem,
        data: &str,
    ) -> Result<Vec<u8>, TirillaError> {
        let payload = barcode::print_barcode(system, data)?;
        if self.debug == DebugMode::Visual {
            self.echo_marker("BARCODE", 6);
            println!("{data}");
        }
        Ok(self.raw(payload))
    }

    // ------------------------------------------------------------------
    // Graphics
    // ------------------------------------------------------------------

    pub fn select_bit_image(
        &mut self,
        mode: BitImageMode,
        width: u16,
        data: &[u8],
    ) -> Result<Vec<u8>, TirillaError> {
        self.emit(graphics::select_bit_image(mode, width, data))
    }

    pub fn define_downloaded_bit_image(
        &mut self,
        x: u8,
        y: u8,
        data: &[u8],
    ) -> Result<Vec<u8>, TirillaError> {
        self.emit(graphics::define_downloaded_bit_image(x, y, data))
    }

    pub fn print_downloaded_bit_image(&mut self, mode: DownloadedImageMode) -> Vec<u8> {
        self.raw(graphics::print_downloaded_bit_image(mode))
    }

    /// Print an already-quantized raster.
    pub fn print_raster(
        &mut self,
        raster: &RasterImage,
        mode: RasterMode,
    ) -> Result<Vec<u8>, TirillaError> {
        let payload = raster.to_command(mode)?;
        self.echo_marker("IMAGE", 8);
        Ok(self.raw(payload))
    }

    /// Run the raster pipeline on a bitmap and print the result at normal
    /// scale. `center` pads narrow bitmaps to the full print width.
    pub fn print_image(
        &mut self,
        img: &image::DynamicImage,
        center: bool,
    ) -> Result<Vec<u8>, TirillaError> {
        let raster = RasterImage::from_image(img, center)?;
        self.print_raster(&raster, RasterMode::Normal)
    }

    // ------------------------------------------------------------------
    // NV bit images
    // ------------------------------------------------------------------

    pub fn define_nv_bit_image(&mut self, blocks: &[Vec<u8>]) -> Result<Vec<u8>, TirillaError> {
        self.emit(nv_graphics::define_nv_bit_image(blocks))
    }

    pub fn print_nv_bit_image(&mut self) -> Result<Vec<u8>, TirillaError> {
        self.emit(nv_graphics::print_nv_bit_image())
    }

    // ------------------------------------------------------------------
    // Echo helpers
    // ------------------------------------------------------------------

    fn echo_literal(&self, s: &str) {
        if self.debug == DebugMode::Visual {
            print!("{s}");
        }
    }

    fn echo_marker(&self, label: &str, repeat: usize) {
        if self.debug == DebugMode::Visual {
            println!("\n{}", label.repeat(repeat));
        }
    }
}

/// Print a payload as hex bytes, 63 per line.
fn hexdump(payload: &[u8]) {
    for chunk in payload.chunks(63) {
        let line: String = chunk.iter().map(|b| format!("{b:02x} ")).collect();
        println!("{}", line.trim_end());
    }
}

// ============================================================================
// TESTS
// ============================================================================
