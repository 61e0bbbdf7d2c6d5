//! Record-level error types.

use thiserror::Error;

/// Errors from decoding a binary record or parsing the compact text form.
#[derive(Error, Debug)]
pub enum Error {
    /// Record buffer is not exactly 32 bytes
    #[error("invalid record length: {found} bytes (expected {expected})")]
    InvalidLength {
        /// Expected record size
        expected: usize,
        /// Actual buffer size
        found: usize,
    },

    /// Magic bytes are not "RFCF"
    #[error("invalid magic bytes: {found:02X?}")]
    InvalidMagic {
        /// Found magic bytes
        found: [u8; 4],
    },

    /// Record format version is not supported
    #[error("unsupported record version: {found:#04x} (expected {expected:#04x})")]
    UnsupportedVersion {
        /// Expected format version
        expected: u8,
        /// Found version byte
        found: u8,
    },

    /// Stored CRC32 does not match the recomputed one
    #[error("CRC mismatch: stored={stored:#010X}, calculated={calculated:#010X}")]
    ChecksumMismatch {
        /// CRC32 stored in the record
        stored: u32,
        /// CRC32 recomputed over the record body
        calculated: u32,
    },

    /// Compact line does not have exactly 8 pipe-delimited fields
    #[error("invalid compact string: {found} fields (expected 8)")]
    CompactFieldCount {
        /// Number of fields found
        found: usize,
    },

    /// A numeric field in the compact line failed to parse
    #[error("invalid compact value for {field}: {value:?}")]
    CompactField {
        /// Field name
        field: &'static str,
        /// Offending text
        value: String,
    },
}

/// Result type alias for record operations.
pub type Result<T> = std::result::Result<T, Error>;
