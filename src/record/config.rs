//! The RF configuration value object.

use super::{DeviceMode, Modulation, StreamingProtocol};

/// One complete SDR configuration.
///
/// Constructed from validated user input on the producer side, or by decoding
/// a binary record on the consumer side; treated as immutable once built.
/// Range-checking the RF parameters (frequency limits, physical gain ranges)
/// is the producer's responsibility; the only invariant enforced here is the
/// wire format's: gains must fit in 16 bits after x10 scaling (0.0 to
/// 6553.5 dB).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfConfig {
    /// Device mode (RX or TX).
    pub device_mode: DeviceMode,
    /// Sample streaming protocol.
    pub streaming_protocol: StreamingProtocol,
    /// Modulation scheme.
    pub modulation: Modulation,
    /// Carrier frequency in Hz.
    pub carrier_freq_hz: u64,
    /// Sampling frequency in Hz.
    pub sampling_freq_hz: u32,
    /// RF (LNA) gain in dB, one decimal digit of precision.
    pub rf_gain_db: f64,
    /// IF (VGA) gain in dB, one decimal digit of precision.
    pub if_gain_db: f64,
    /// Baseband gain in dB, one decimal digit of precision.
    pub baseband_gain_db: f64,
}
