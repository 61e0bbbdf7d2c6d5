//! The 32-byte binary configuration record.
//!
//! ## Record Format
//!
//! ```text
//! ┌────────┬──────┬─────────────────────────────────────┐
//! │ Offset │ Size │ Field                               │
//! ├────────┼──────┼─────────────────────────────────────┤
//! │ 0x00   │ 4    │ Magic bytes "RFCF"                  │
//! │ 0x04   │ 1    │ Format version (0x01)               │
//! │ 0x05   │ 1    │ Device mode (0=RX, 1=TX)            │
//! │ 0x06   │ 1    │ Streaming protocol                  │
//! │ 0x07   │ 1    │ Modulation scheme                   │
//! │ 0x08   │ 8    │ Carrier frequency (Hz, u64)         │
//! │ 0x10   │ 4    │ Sampling frequency (Hz, u32)        │
//! │ 0x14   │ 2    │ RF gain (dB x 10, u16)              │
//! │ 0x16   │ 2    │ IF gain (dB x 10, u16)              │
//! │ 0x18   │ 2    │ Baseband gain (dB x 10, u16)        │
//! │ 0x1A   │ 2    │ Reserved (zero)                     │
//! │ 0x1C   │ 4    │ CRC32 over bytes [0, 28)            │
//! └────────┴──────┴─────────────────────────────────────┘
//! ```
//!
//! All multi-byte values are big-endian. Gains carry one decimal digit of
//! precision via the x10 scaling.

mod codec;
mod compact;
mod config;
mod error;
mod hex;
mod types;

pub use codec::{DecodedRecord, decode, encode};
pub use compact::{parse_compact, to_compact};
pub use config::RfConfig;
pub use error::{Error, Result};
pub use hex::hex_dump;
pub use types::{DeviceMode, Modulation, StreamingProtocol};

/// Record magic bytes: "RFCF" (RF Config File).
pub const MAGIC: [u8; 4] = *b"RFCF";

/// Record format version.
pub const FORMAT_VERSION: u8 = 0x01;

/// Total record size in bytes.
pub const RECORD_SIZE: usize = 32;

/// Offset of the trailing CRC32; the CRC covers everything before it.
pub const CRC_OFFSET: usize = 28;

/// Calculate the CRC32 checksum (standard zlib polynomial).
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
