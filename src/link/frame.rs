//! Packet framer (producer side).

use super::{END_BYTE, FRAME_OVERHEAD, MAX_PAYLOAD_SIZE, PACKET_VERSION, START_BYTE, checksum};

/// Wrap a payload into a delimited packet for transmission.
///
/// The payload length must fit the 16-bit length field
/// ([`MAX_PAYLOAD_SIZE`] bytes); respecting that bound is the caller's
/// responsibility. In practice the payload is always one 32-byte record.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn frame(payload: &[u8]) -> Vec<u8> {
    debug_assert!(payload.len() <= MAX_PAYLOAD_SIZE, "payload exceeds u16 length field");

    let mut packet = Vec::with_capacity(payload.len() + FRAME_OVERHEAD);
    packet.push(START_BYTE);
    packet.push(PACKET_VERSION);
    packet.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    packet.extend_from_slice(payload);
    packet.push(checksum(payload));
    packet.push(END_BYTE);

    packet
}
