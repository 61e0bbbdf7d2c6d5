//! Serial transport session (producer side).

use std::io::{Read, Write};
use std::thread;
use std::time::Duration;

use serialport::{DataBits, Parity, SerialPort, StopBits};
use tracing::{debug, trace};

use super::{Error, PacketReader, Result};

/// How long a single blocking port read may wait for bytes.
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Delay after opening the port, letting the line settle before writing.
const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Fixed interval to wait for response bytes after a send.
const ACK_WAIT: Duration = Duration::from_millis(500);

/// An open serial connection, exclusively owned.
///
/// The session assumes single-producer, single-consumer use of one physical
/// link: it either writes packets ([`SerialSession::send`]) or is converted
/// into a [`PacketReader`] for the consumer side, never both at once.
pub struct SerialSession {
    port: Box<dyn SerialPort>,
    port_name: String,
}

impl SerialSession {
    /// Open the serial port at 8N1 with a short read timeout.
    ///
    /// Failure to open is [`Error::LinkUnavailable`]; it is reported, not
    /// retried, since a physical link fault does not heal on its own.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(port_name, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(POLL_SLICE)
            .open()
            .map_err(|source| Error::LinkUnavailable {
                port: port_name.to_string(),
                source,
            })?;

        debug!(port = port_name, baud_rate, "serial port opened");
        thread::sleep(SETTLE_DELAY);

        Ok(Self {
            port,
            port_name: port_name.to_string(),
        })
    }

    /// Probe whether the port can be opened at all, then close it again.
    ///
    /// A pure connectivity check; no data is written.
    #[must_use]
    pub fn check_available(port_name: &str, baud_rate: u32) -> bool {
        serialport::new(port_name, baud_rate)
            .timeout(POLL_SLICE)
            .open()
            .is_ok()
    }

    /// Write one framed packet, flush, then briefly wait and drain any
    /// response bytes.
    ///
    /// The response is returned for diagnostic display only; its content is
    /// not validated as an acknowledgment protocol. Write failures are
    /// [`Error::LinkUnavailable`] and never retried here.
    pub fn send(&mut self, packet: &[u8]) -> Result<Option<Vec<u8>>> {
        self.port
            .write_all(packet)
            .and_then(|()| self.port.flush())
            .map_err(|err| Error::LinkUnavailable {
                port: self.port_name.clone(),
                source: err.into(),
            })?;
        debug!(port = %self.port_name, len = packet.len(), "packet written");

        thread::sleep(ACK_WAIT);

        let pending = self.port.bytes_to_read().map_err(|source| Error::LinkUnavailable {
            port: self.port_name.clone(),
            source,
        })? as usize;
        if pending == 0 {
            trace!(port = %self.port_name, "no response bytes");
            return Ok(None);
        }

        let mut response = vec![0u8; pending];
        self.port.read_exact(&mut response)?;
        debug!(port = %self.port_name, len = pending, "response bytes drained");
        Ok(Some(response))
    }

    /// The name of the port this session owns.
    #[must_use]
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Hand the owned port to a consumer-side packet reader.
    ///
    /// `timeout` bounds each whole read-packet operation on the reader.
    #[must_use]
    pub fn into_reader(self, timeout: Duration) -> PacketReader<Box<dyn SerialPort>> {
        PacketReader::new(self.port, timeout)
    }
}

impl std::fmt::Debug for SerialSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialSession")
            .field("port_name", &self.port_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_available_missing_port() {
        assert!(!SerialSession::check_available("/dev/ttyNOPE99", 115_200));
    }

    #[test]
    fn test_open_missing_port_is_link_unavailable() {
        let result = SerialSession::open("/dev/ttyNOPE99", 115_200);
        assert!(matches!(result, Err(Error::LinkUnavailable { .. })));
    }
}
