//! Record codec (encode/decode).
//!
//! Encoding is a total function: every well-typed [`RfConfig`] produces
//! exactly 32 bytes. Decoding validates length, magic, format version, and
//! CRC32 before any field is interpreted; unknown symbolic codes decode to
//! their default variant rather than failing, mirroring the encoder's
//! permissive policy.

use super::{
    CRC_OFFSET, DeviceMode, Error, FORMAT_VERSION, MAGIC, Modulation, RECORD_SIZE, Result,
    RfConfig, StreamingProtocol, crc32,
};

/// A record decoded from bytes, along with its diagnostic trailer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedRecord {
    /// The decoded configuration.
    pub config: RfConfig,
    /// Format version byte found at offset 4.
    pub version: u8,
    /// CRC32 actually stored in the record, for diagnostic display.
    pub crc: u32,
}

/// Encode a configuration into the 32-byte binary record.
#[must_use]
pub fn encode(config: &RfConfig) -> [u8; RECORD_SIZE] {
    let mut bytes = [0u8; RECORD_SIZE];

    bytes[0..4].copy_from_slice(&MAGIC);
    bytes[4] = FORMAT_VERSION;
    bytes[5] = config.device_mode.as_code();
    bytes[6] = config.streaming_protocol.as_code();
    bytes[7] = config.modulation.as_code();
    bytes[8..16].copy_from_slice(&config.carrier_freq_hz.to_be_bytes());
    bytes[16..20].copy_from_slice(&config.sampling_freq_hz.to_be_bytes());
    bytes[20..22].copy_from_slice(&scale_gain(config.rf_gain_db).to_be_bytes());
    bytes[22..24].copy_from_slice(&scale_gain(config.if_gain_db).to_be_bytes());
    bytes[24..26].copy_from_slice(&scale_gain(config.baseband_gain_db).to_be_bytes());
    // bytes[26..28] reserved, must stay zero

    let crc = crc32(&bytes[..CRC_OFFSET]);
    bytes[CRC_OFFSET..].copy_from_slice(&crc.to_be_bytes());

    bytes
}

/// Decode a binary record.
///
/// Validation order: length, magic, format version, CRC32 over bytes
/// `[0, 28)`. Fields are only extracted once the CRC has been verified, so a
/// corrupted stream cannot yield plausible-looking but wrong values.
pub fn decode(bytes: &[u8]) -> Result<DecodedRecord> {
    if bytes.len() != RECORD_SIZE {
        return Err(Error::InvalidLength {
            expected: RECORD_SIZE,
            found: bytes.len(),
        });
    }

    if bytes[0..4] != MAGIC {
        return Err(Error::InvalidMagic {
            found: bytes[0..4].try_into().unwrap(),
        });
    }

    let version = bytes[4];
    if version != FORMAT_VERSION {
        return Err(Error::UnsupportedVersion {
            expected: FORMAT_VERSION,
            found: version,
        });
    }

    let stored = u32::from_be_bytes(bytes[CRC_OFFSET..RECORD_SIZE].try_into().unwrap());
    let calculated = crc32(&bytes[..CRC_OFFSET]);
    if stored != calculated {
        return Err(Error::ChecksumMismatch { stored, calculated });
    }

    let config = RfConfig {
        device_mode: DeviceMode::from_code(bytes[5]).unwrap_or_default(),
        streaming_protocol: StreamingProtocol::from_code(bytes[6]).unwrap_or_default(),
        modulation: Modulation::from_code(bytes[7]).unwrap_or_default(),
        carrier_freq_hz: u64::from_be_bytes(bytes[8..16].try_into().unwrap()),
        sampling_freq_hz: u32::from_be_bytes(bytes[16..20].try_into().unwrap()),
        rf_gain_db: unscale_gain(u16::from_be_bytes(bytes[20..22].try_into().unwrap())),
        if_gain_db: unscale_gain(u16::from_be_bytes(bytes[22..24].try_into().unwrap())),
        baseband_gain_db: unscale_gain(u16::from_be_bytes(bytes[24..26].try_into().unwrap())),
    };

    Ok(DecodedRecord {
        config,
        version,
        crc: stored,
    })
}

/// Scale a decibel value to the x10 wire representation, truncating.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_gain(db: f64) -> u16 {
    (db * 10.0) as u16
}

fn unscale_gain(raw: u16) -> f64 {
    f64::from(raw) / 10.0
}
