//! rfcfg - Binary RF configuration records and serial packet framing
//!
//! This library implements the wire representation used to push an SDR
//! configuration from a host to an embedded companion computer: a fixed 32-byte
//! binary record with an embedded CRC32, and the delimited packet format that
//! carries it over a raw serial byte stream.
//!
//! # Quick Start
//!
//! ```rust
//! use rfcfg::{DeviceMode, RfConfig};
//!
//! // Describe a configuration
//! let config = RfConfig {
//!     device_mode: DeviceMode::Transmit,
//!     carrier_freq_hz: 915_000_000,
//!     sampling_freq_hz: 2_000_000,
//!     ..RfConfig::default()
//! };
//!
//! // Encode to the 32-byte record and frame it for the serial link
//! let record = rfcfg::record::encode(&config);
//! let packet = rfcfg::link::frame(&record);
//! assert_eq!(packet.len(), record.len() + rfcfg::link::FRAME_OVERHEAD);
//!
//! // Decode the record back
//! let decoded = rfcfg::record::decode(&record)?;
//! assert_eq!(decoded.config.device_mode, DeviceMode::Transmit);
//! # Ok::<(), rfcfg::RecordError>(())
//! ```
//!
//! # Wire Formats
//!
//! - **Record**: 32 bytes, big-endian, magic `"RFCF"`, CRC32 over the first
//!   28 bytes. See [`record`].
//! - **Packet**: `0xAA` start marker, version, 16-bit big-endian length,
//!   payload, mod-256 checksum, `0x55` end marker. See [`link`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod link;
pub mod record;

pub use link::{ByteSource, Error as LinkError, PacketReader, SerialSession};
pub use record::{
    DecodedRecord, DeviceMode, Error as RecordError, Modulation, RfConfig, StreamingProtocol,
};

/// Default serial baud rate used by the host and the companion computer.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
