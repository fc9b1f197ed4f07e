//! # Serial / USB Character-Device Transport
//!
//! Writes command streams to a printer attached as a Unix character device.
//! The SRP-350 usually appears as a USB line printer (`/dev/usb/lp0`); over
//! RS-232 it is a real serial port (`/dev/ttyS0`, `/dev/ttyUSB0`).
//!
//! ## TTY Configuration
//!
//! Serial ports must be switched to raw mode so the line discipline does not
//! mangle binary data:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR,
//!   ICRNL are cleared
//! - **No software flow control**: IXON, IXOFF, IXANY are cleared (0x11 and
//!   0x13 occur freely in raster payloads)
//! - **No output processing**: OPOST is cleared (no LF to CRLF translation)
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN cleared
//! - **8-bit characters**: CS8, no parity
//!
//! USB line-printer devices are not TTYs; for those the configuration step
//! is skipped (`isatty` check) and bytes pass through the lp driver as-is.
//!
//! ## Chunked Writes
//!
//! Raster-heavy jobs can outrun the device buffer. Writes larger than the
//! chunk size are split with a small delay between chunks.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::TirillaError;
use crate::transport::Transport;

/// Default device path for a USB-attached SRP-350
pub const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Serial Printer Transport
///
/// Owns an open character device and delivers flushed buffers to it.
///
/// ## Example
///
/// ```no_run
/// use tirilla::transport::{SerialTransport, Transport};
/// use tirilla::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/usb/lp0")?;
/// transport.write_all(&commands::initialize())?;
/// # Ok::<(), tirilla::TirillaError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open a printer character device.
    ///
    /// If the device is a TTY it is reconfigured for raw 8-bit transfer
    /// (see the module docs); USB line-printer nodes are left alone.
    ///
    /// ## Errors
    ///
    /// Returns [`TirillaError::Transport`] when the device does not exist,
    /// the process lacks permission (`lp` group on most distros), or the
    /// TTY configuration fails.
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, TirillaError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            TirillaError::Transport(format!("failed to open {}: {e}", path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::io::AsRawFd;
            let fd = file.as_raw_fd();
            if unsafe { libc::isatty(fd) } == 1 {
                configure_tty_raw(fd)?;
            }
        }

        debug!(device = %path.display(), "opened printer device");

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Open the default device path (`/dev/usb/lp0`).
    pub fn open_default() -> Result<Self, TirillaError> {
        Self::open(DEFAULT_DEVICE)
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size;
    }

    /// Set the delay between chunks. Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), TirillaError> {
        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| TirillaError::Transport(format!("write failed: {e}")))?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| TirillaError::Transport(format!("write failed: {e}")))?;
                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file
            .flush()
            .map_err(|e| TirillaError::Transport(format!("flush failed: {e}")))?;

        Ok(())
    }
}

/// Switch a file descriptor to raw TTY mode so binary data passes through
/// unmodified.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), TirillaError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(TirillaError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: no break/parity handling, no CR/LF mapping, no XON/XOFF
    // (0x11/0x13 occur in raster data)
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: no post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: no echo, no canonical mode, no signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8 data bits, no parity
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(TirillaError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
