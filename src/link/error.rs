//! Link-level error types covering framing and serial faults.

use thiserror::Error;

/// Errors from framing, packet reading, or the serial session.
#[derive(Error, Debug)]
pub enum Error {
    /// Deadline elapsed before enough bytes arrived
    #[error("timed out waiting for {stage} ({got}/{needed} bytes)")]
    Timeout {
        /// What the reader was waiting for
        stage: &'static str,
        /// Bytes required to leave this stage
        needed: usize,
        /// Bytes accumulated before the deadline
        got: usize,
    },

    /// Packet version byte is not supported
    #[error("unsupported packet version: {found:#04x} (expected {expected:#04x})")]
    UnsupportedVersion {
        /// Expected packet version
        expected: u8,
        /// Found version byte
        found: u8,
    },

    /// End marker byte is not 0x55
    #[error("invalid end marker: {found:#04x} (expected {expected:#04x})")]
    InvalidEndMarker {
        /// Expected end marker
        expected: u8,
        /// Found byte
        found: u8,
    },

    /// Packet checksum does not match the payload
    #[error("packet checksum mismatch: stored={stored:#04x}, calculated={calculated:#04x}")]
    ChecksumMismatch {
        /// Checksum byte from the packet
        stored: u8,
        /// Mod-256 sum of the received payload
        calculated: u8,
    },

    /// Serial connection could not be opened or written to
    #[error("serial link unavailable on {port}: {source}")]
    LinkUnavailable {
        /// Port name
        port: String,
        /// Underlying serial error
        source: serialport::Error,
    },

    /// IO error from the byte source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a per-packet framing fault a continuous receive
    /// loop may log and recover from by re-seeking the next start marker.
    ///
    /// Link faults are excluded: a physical link failure is not self-healing
    /// and must reach the caller.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::UnsupportedVersion { .. }
                | Self::InvalidEndMarker { .. }
                | Self::ChecksumMismatch { .. }
        )
    }
}

/// Result type alias for link operations.
pub type Result<T> = std::result::Result<T, Error>;
