//! End-to-end tests: record codec through packet framing and back over an
//! in-memory byte stream.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use rfcfg::link::{ByteSource, PacketReader, frame};
use rfcfg::record::{decode, encode, parse_compact, to_compact};
use rfcfg::{DeviceMode, LinkError, Modulation, RfConfig, StreamingProtocol};

const TIMEOUT: Duration = Duration::from_millis(100);

/// In-memory stand-in for a serial line: yields one queued chunk per poll.
struct Wire {
    chunks: VecDeque<Vec<u8>>,
}

impl Wire {
    fn new(stream: &[u8]) -> Self {
        Self {
            chunks: VecDeque::from([stream.to_vec()]),
        }
    }
}

impl ByteSource for Wire {
    fn poll_read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(front) = self.chunks.front_mut() else {
            return Ok(0);
        };
        let take = front.len().min(buf.len());
        buf[..take].copy_from_slice(&front[..take]);
        front.drain(..take);
        if front.is_empty() {
            self.chunks.pop_front();
        }
        Ok(take)
    }
}

fn sample_config() -> RfConfig {
    RfConfig {
        device_mode: DeviceMode::Transmit,
        streaming_protocol: StreamingProtocol::Uart,
        modulation: Modulation::Qpsk,
        carrier_freq_hz: 915_000_000,
        sampling_freq_hz: 2_000_000,
        rf_gain_db: 14.5,
        if_gain_db: 20.0,
        baseband_gain_db: 30.5,
    }
}

#[test]
fn config_travels_end_to_end() {
    // Producer: encode, frame, "transmit"
    let config = sample_config();
    let record = encode(&config);
    let packet = frame(&record);

    // Consumer: read the packet, unwrap, decode the record
    let mut reader = PacketReader::new(Wire::new(&packet), TIMEOUT);
    let payload = reader.read_packet().expect("packet should parse");
    let decoded = decode(&payload).expect("record should decode");

    assert_eq!(decoded.config, config);
}

#[test]
fn receive_loop_recovers_after_corrupted_packet() {
    let record = encode(&sample_config());

    // First transmission corrupted in the payload, second one clean
    let mut bad = frame(&record);
    bad[10] ^= 0xFF;
    let mut stream = bad;
    stream.extend_from_slice(&frame(&record));

    let mut reader = PacketReader::new(Wire::new(&stream), TIMEOUT);

    // Single-shot sees the fault...
    let err = reader.read_packet().expect_err("corrupted packet must fail");
    assert!(err.is_recoverable());

    // ...and the very next read yields the clean packet
    let payload = reader.read_packet().expect("second packet should parse");
    assert_eq!(decode(&payload).unwrap().config, sample_config());
}

#[test]
fn truncated_stream_times_out() {
    let record = encode(&sample_config());
    let packet = frame(&record);

    // Drop everything after the first 10 bytes mid-payload
    let mut reader = PacketReader::new(Wire::new(&packet[..10]), TIMEOUT);

    assert!(matches!(
        reader.read_packet(),
        Err(LinkError::Timeout {
            stage: "payload",
            ..
        })
    ));
}

#[test]
fn compact_and_binary_forms_agree() {
    let line = "TRANSMIT|UART|QPSK|915000000|2000000|14.5|20.0|30.5";
    let config = parse_compact(line).expect("compact line should parse");
    assert_eq!(config, sample_config());

    let decoded = decode(&encode(&config)).unwrap();
    assert_eq!(to_compact(&decoded.config), line);
}

#[test]
fn stored_crc_is_surfaced_for_display() {
    let record = encode(&sample_config());
    let decoded = decode(&record).unwrap();
    let stored = u32::from_be_bytes(record[28..32].try_into().unwrap());
    assert_eq!(decoded.crc, stored);
}
