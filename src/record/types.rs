//! Symbolic record fields and their wire codes.
//!
//! Each enum is a partial mapping from bytes (and symbolic names) made
//! explicit: `from_code`/`from_name` return `None` for unknown input and the
//! caller decides whether to fall back to the default variant or reject.

use std::fmt;

/// SDR device mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DeviceMode {
    /// Receive (RX)
    #[default]
    Receive = 0x00,
    /// Transmit (TX)
    Transmit = 0x01,
}

impl DeviceMode {
    /// Convert to the wire code.
    #[must_use]
    pub const fn as_code(self) -> u8 {
        self as u8
    }

    /// Convert from a wire code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Receive),
            0x01 => Some(Self::Transmit),
            _ => None,
        }
    }

    /// Look up by symbolic name (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("receive") {
            Some(Self::Receive)
        } else if name.eq_ignore_ascii_case("transmit") {
            Some(Self::Transmit)
        } else {
            None
        }
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Receive => "RECEIVE",
            Self::Transmit => "TRANSMIT",
        };
        write!(f, "{name}")
    }
}

/// Protocol used to stream samples between the companion computer and the radio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum StreamingProtocol {
    /// UART serial stream
    #[default]
    Uart = 0x00,
    /// I2C bus
    I2c = 0x01,
    /// SPI bus
    Spi = 0x02,
    /// File on disk
    File = 0x03,
}

impl StreamingProtocol {
    /// Convert to the wire code.
    #[must_use]
    pub const fn as_code(self) -> u8 {
        self as u8
    }

    /// Convert from a wire code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Uart),
            0x01 => Some(Self::I2c),
            0x02 => Some(Self::Spi),
            0x03 => Some(Self::File),
            _ => None,
        }
    }

    /// Look up by symbolic name (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("uart") {
            Some(Self::Uart)
        } else if name.eq_ignore_ascii_case("i2c") {
            Some(Self::I2c)
        } else if name.eq_ignore_ascii_case("spi") {
            Some(Self::Spi)
        } else if name.eq_ignore_ascii_case("file") {
            Some(Self::File)
        } else {
            None
        }
    }
}

impl fmt::Display for StreamingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uart => "UART",
            Self::I2c => "I2C",
            Self::Spi => "SPI",
            Self::File => "FILE",
        };
        write!(f, "{name}")
    }
}

/// Modulation scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Modulation {
    /// Binary phase-shift keying
    Bpsk = 0x00,
    /// Quadrature phase-shift keying
    #[default]
    Qpsk = 0x01,
    /// Frequency-shift keying
    Fsk = 0x02,
}

impl Modulation {
    /// Convert to the wire code.
    #[must_use]
    pub const fn as_code(self) -> u8 {
        self as u8
    }

    /// Convert from a wire code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Bpsk),
            0x01 => Some(Self::Qpsk),
            0x02 => Some(Self::Fsk),
            _ => None,
        }
    }

    /// Look up by symbolic name (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("bpsk") {
            Some(Self::Bpsk)
        } else if name.eq_ignore_ascii_case("qpsk") {
            Some(Self::Qpsk)
        } else if name.eq_ignore_ascii_case("fsk") {
            Some(Self::Fsk)
        } else {
            None
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bpsk => "BPSK",
            Self::Qpsk => "QPSK",
            Self::Fsk => "FSK",
        };
        write!(f, "{name}")
    }
}
