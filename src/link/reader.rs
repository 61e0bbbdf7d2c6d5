//! Packet reader (consumer side).
//!
//! Reconstructs one framed packet from a live byte stream: discard until the
//! start marker, read the 3-byte header, then the payload, checksum, and end
//! marker, each under a single absolute deadline computed when the read
//! begins. Every sub-read is a bounded poll; the reader never blocks
//! indefinitely.

use std::io;
use std::time::{Duration, Instant};

use bytes::{Bytes, BytesMut};
use serialport::SerialPort;
use tracing::{debug, warn};

use super::{END_BYTE, Error, PACKET_VERSION, Result, START_BYTE, checksum};

/// A byte-stream source supporting short bounded reads.
///
/// `poll_read` returns whatever bytes are available within the source's small
/// time slice, or `Ok(0)` when nothing arrived; it must never block
/// indefinitely. The [`PacketReader`] loops over such polls until its deadline.
pub trait ByteSource {
    /// Read available bytes into `buf`, waiting at most the source's poll
    /// slice. Returns the number of bytes read (possibly zero).
    fn poll_read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Serial ports poll with the read timeout configured at open time; a timed
/// out read simply means no bytes arrived in this slice.
impl ByteSource for Box<dyn SerialPort> {
    fn poll_read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match io::Read::read(self.as_mut(), buf) {
            Ok(read) => Ok(read),
            Err(err)
                if err.kind() == io::ErrorKind::TimedOut
                    || err.kind() == io::ErrorKind::WouldBlock =>
            {
                Ok(0)
            }
            Err(err) => Err(err),
        }
    }
}

/// Reads framed packets from a byte source with a per-packet deadline.
#[derive(Debug)]
pub struct PacketReader<S> {
    source: S,
    timeout: Duration,
}

impl<S: ByteSource> PacketReader<S> {
    /// Create a reader over `source`. `timeout` bounds each whole
    /// packet-read operation, not each byte.
    pub fn new(source: S, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Read exactly one framed packet and return its payload (single-shot
    /// mode: any framing fault terminates the call).
    ///
    /// The deadline is fixed once at entry; seeking the start marker, the
    /// header, the payload, and the trailer all share it.
    pub fn read_packet(&mut self) -> Result<Bytes> {
        let deadline = Instant::now() + self.timeout;

        self.seek_start(deadline)?;

        let header = self.read_exact(3, deadline, "packet header")?;
        let version = header[0];
        if version != PACKET_VERSION {
            // A definite framing fault, reported immediately rather than
            // waiting out the deadline
            return Err(Error::UnsupportedVersion {
                expected: PACKET_VERSION,
                found: version,
            });
        }
        let length = usize::from(u16::from_be_bytes([header[1], header[2]]));

        let payload = self.read_exact(length, deadline, "payload")?;
        let stored = self.read_exact(1, deadline, "checksum")?[0];
        let end = self.read_exact(1, deadline, "end marker")?[0];

        if end != END_BYTE {
            return Err(Error::InvalidEndMarker {
                expected: END_BYTE,
                found: end,
            });
        }

        let calculated = checksum(&payload);
        if stored != calculated {
            return Err(Error::ChecksumMismatch { stored, calculated });
        }

        Ok(payload.freeze())
    }

    /// Read the next valid payload, recovering from per-packet framing faults
    /// (continuous-receive mode).
    ///
    /// Corrupted or interrupted packets are logged and the reader re-enters
    /// start-marker seeking with a fresh deadline, so a single bad
    /// transmission never requires the link to be reset. Link faults
    /// propagate.
    pub fn next_payload(&mut self) -> Result<Bytes> {
        loop {
            match self.read_packet() {
                Ok(payload) => return Ok(payload),
                Err(err @ Error::Timeout { .. }) => {
                    debug!("no packet before deadline: {err}");
                }
                Err(err) if err.is_recoverable() => {
                    warn!("dropping corrupted packet: {err}");
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Consume the reader, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Discard bytes one at a time until the start marker is seen.
    fn seek_start(&mut self, deadline: Instant) -> Result<()> {
        let mut byte = [0u8; 1];
        loop {
            if Instant::now() >= deadline {
                return Err(Error::Timeout {
                    stage: "start marker",
                    needed: 1,
                    got: 0,
                });
            }
            if self.source.poll_read(&mut byte)? == 1 && byte[0] == START_BYTE {
                return Ok(());
            }
        }
    }

    /// Accumulate exactly `needed` bytes using bounded partial reads.
    fn read_exact(&mut self, needed: usize, deadline: Instant, stage: &'static str) -> Result<BytesMut> {
        let mut acc = BytesMut::with_capacity(needed);
        let mut chunk = [0u8; 256];

        while acc.len() < needed {
            if Instant::now() >= deadline {
                return Err(Error::Timeout {
                    stage,
                    needed,
                    got: acc.len(),
                });
            }
            let want = (needed - acc.len()).min(chunk.len());
            let read = self.source.poll_read(&mut chunk[..want])?;
            acc.extend_from_slice(&chunk[..read]);
        }

        Ok(acc)
    }
}
