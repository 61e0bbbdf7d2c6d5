//! Hex dump formatting for diagnostic display.

use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// Format binary data as a hex dump: offset, hex bytes, ASCII column.
///
/// ```text
/// 0000  52 46 43 46 01 01 00 01 00 00 00 00 36 8F 95 80  RFCF........6...
/// 0010  00 1E 84 80 00 91 00 C8 01 31 00 00 89 4C 6B 04  .........1...Lk.
/// ```
#[must_use]
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        let mut hex = String::with_capacity(BYTES_PER_LINE * 3);
        for byte in chunk {
            let _ = write!(hex, "{byte:02X} ");
        }

        let ascii: String = chunk
            .iter()
            .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
            .collect();

        let offset = line * BYTES_PER_LINE;
        let _ = writeln!(out, "{offset:04X}  {hex:<width$} {ascii}", width = BYTES_PER_LINE * 3);
    }

    out
}
