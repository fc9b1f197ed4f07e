//! # Transport Layer
//!
//! Moving encoded bytes to the printer.
//!
//! - [`serial`]: Unix character-device transport (USB line printer or
//!   serial port), with raw TTY configuration and chunked writes
//! - [`MemoryTransport`]: in-memory sink for tests and previews
//!
//! The [`Transport`] trait is the seam a
//! [`Session`](crate::printer::Session) flushes through; anything that can
//! deliver a byte slice intact qualifies.

pub mod serial;

pub use serial::SerialTransport;

use crate::error::TirillaError;

/// A byte sink that delivers command streams to a printer.
pub trait Transport {
    /// Deliver the whole slice, in order, without modification.
    fn write_all(&mut self, data: &[u8]) -> Result<(), TirillaError>;
}

/// # In-Memory Transport
///
/// Records every flush instead of writing to hardware. Each call to
/// `write_all` appends one entry to [`writes`](Self::writes), so tests can
/// assert both the bytes and the flush boundaries.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    /// One entry per `write_all` call, in order.
    pub writes: Vec<Vec<u8>>,
}

impl Transport for MemoryTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), TirillaError> {
        self.writes.push(data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_transport_records_flush_boundaries() {
        let mut transport = MemoryTransport::default();
        transport.write_all(&[0x1B, 0x40]).unwrap();
        transport.write_all(&[0x0A]).unwrap();
        assert_eq!(transport.writes, vec![vec![0x1B, 0x40], vec![0x0A]]);
    }
}
