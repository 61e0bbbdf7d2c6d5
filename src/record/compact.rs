//! Compact pipe-delimited text form of a configuration.
//!
//! `MODE|PROTOCOL|MOD|FC|FS|RFG|IFG|BBG` - a human-readable serialization of
//! the same record, convertible losslessly to and from the binary form.

use super::{DeviceMode, Error, Modulation, Result, RfConfig, StreamingProtocol};

/// Serialize a configuration to a compact pipe-delimited line.
///
/// Symbolic fields are uppercase names, frequencies are decimal integers, and
/// gains carry exactly one fractional digit.
#[must_use]
pub fn to_compact(config: &RfConfig) -> String {
    format!(
        "{}|{}|{}|{}|{}|{:.1}|{:.1}|{:.1}",
        config.device_mode,
        config.streaming_protocol,
        config.modulation,
        config.carrier_freq_hz,
        config.sampling_freq_hz,
        config.rf_gain_db,
        config.if_gain_db,
        config.baseband_gain_db,
    )
}

/// Parse a compact pipe-delimited line into a configuration.
///
/// Symbolic names are matched case-insensitively; unknown names fall back to
/// the default variant, matching the binary decoder's permissive policy.
/// Numeric fields that fail to parse are rejected.
pub fn parse_compact(line: &str) -> Result<RfConfig> {
    let parts: Vec<&str> = line.trim().split('|').collect();
    if parts.len() != 8 {
        return Err(Error::CompactFieldCount { found: parts.len() });
    }

    Ok(RfConfig {
        device_mode: DeviceMode::from_name(parts[0]).unwrap_or_default(),
        streaming_protocol: StreamingProtocol::from_name(parts[1]).unwrap_or_default(),
        modulation: Modulation::from_name(parts[2]).unwrap_or_default(),
        carrier_freq_hz: parse_field(parts[3], "carrier frequency")?,
        sampling_freq_hz: parse_field(parts[4], "sampling frequency")?,
        rf_gain_db: parse_field(parts[5], "RF gain")?,
        if_gain_db: parse_field(parts[6], "IF gain")?,
        baseband_gain_db: parse_field(parts[7], "baseband gain")?,
    })
}

fn parse_field<T: std::str::FromStr>(text: &str, field: &'static str) -> Result<T> {
    text.trim().parse().map_err(|_| Error::CompactField {
        field,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{decode, encode};

    #[test]
    fn test_format() {
        let config = RfConfig {
            device_mode: DeviceMode::Transmit,
            streaming_protocol: StreamingProtocol::Uart,
            modulation: Modulation::Qpsk,
            carrier_freq_hz: 915_000_000,
            sampling_freq_hz: 2_000_000,
            rf_gain_db: 14.5,
            if_gain_db: 20.0,
            baseband_gain_db: 30.5,
        };

        assert_eq!(
            to_compact(&config),
            "TRANSMIT|UART|QPSK|915000000|2000000|14.5|20.0|30.5"
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        let line = "TRANSMIT|SPI|FSK|433920000|1000000|12.0|24.5|0.0";
        let config = parse_compact(line).unwrap();

        assert_eq!(config.device_mode, DeviceMode::Transmit);
        assert_eq!(config.streaming_protocol, StreamingProtocol::Spi);
        assert_eq!(config.modulation, Modulation::Fsk);
        assert_eq!(config.carrier_freq_hz, 433_920_000);
        assert_eq!(to_compact(&config), line);
    }

    #[test]
    fn test_parse_lowercase() {
        let config = parse_compact("receive|uart|bpsk|100|200|1.5|2.5|3.5").unwrap();
        assert_eq!(config.device_mode, DeviceMode::Receive);
        assert_eq!(config.modulation, Modulation::Bpsk);
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let config = parse_compact("standby|can|GMSK|0|0|0.0|0.0|0.0").unwrap();
        assert_eq!(config.device_mode, DeviceMode::Receive);
        assert_eq!(config.streaming_protocol, StreamingProtocol::Uart);
        assert_eq!(config.modulation, Modulation::Qpsk);
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            parse_compact("RECEIVE|UART|QPSK|0|0|0.0|0.0"),
            Err(Error::CompactFieldCount { found: 7 })
        ));
    }

    #[test]
    fn test_bad_numeric_field() {
        assert!(matches!(
            parse_compact("RECEIVE|UART|QPSK|abc|0|0.0|0.0|0.0"),
            Err(Error::CompactField {
                field: "carrier frequency",
                ..
            })
        ));
    }

    #[test]
    fn test_lossless_through_binary() {
        let line = "RECEIVE|FILE|BPSK|2400000000|20000000|40.0|62.0|47.0";
        let config = parse_compact(line).unwrap();
        let decoded = decode(&encode(&config)).unwrap();
        assert_eq!(to_compact(&decoded.config), line);
    }
}
