//! Packet framing and the serial link.
//!
//! ## Packet Format
//!
//! ```text
//! ┌───────┬─────────┬──────────┬─────────┬──────────┬─────┐
//! │ START │ VERSION │ LENGTH   │ PAYLOAD │ CHECKSUM │ END │
//! │ 0xAA  │ 0x01    │ u16 (BE) │ ...     │ 1 byte   │0x55 │
//! └───────┴─────────┴──────────┴─────────┴──────────┴─────┘
//! ```
//!
//! The checksum is the sum of all payload bytes mod 256. A packet is entirely
//! transient: built, written, and discarded on the producer side; detected,
//! validated, and unwrapped on the consumer side.

mod error;
mod frame;
mod reader;
mod session;

pub use error::{Error, Result};
pub use frame::frame;
pub use reader::{ByteSource, PacketReader};
pub use session::SerialSession;

/// Packet start marker.
pub const START_BYTE: u8 = 0xAA;

/// Packet end marker.
pub const END_BYTE: u8 = 0x55;

/// Packet framing version.
pub const PACKET_VERSION: u8 = 0x01;

/// Maximum payload size, bounded by the 16-bit length field.
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize;

/// Framing overhead in bytes (start, version, length, checksum, end).
pub const FRAME_OVERHEAD: usize = 6;

/// Calculate the packet checksum: sum of all bytes mod 256.
#[must_use]
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}
