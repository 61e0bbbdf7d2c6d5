//! Companion-side receiver: listen on the serial link, decode each
//! configuration record, and print it.
//!
//! Usage: receive_config <port> [baud] [--once]

use std::env;
use std::error::Error;
use std::time::Duration;

use rfcfg::DEFAULT_BAUD_RATE;
use rfcfg::link::SerialSession;
use rfcfg::record::{decode, to_compact};

const PACKET_TIMEOUT: Duration = Duration::from_secs(2);

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let Some(port) = args.get(1) else {
        eprintln!("usage: receive_config <port> [baud] [--once]");
        std::process::exit(2);
    };
    let baud = args
        .iter()
        .skip(2)
        .find(|a| *a != "--once")
        .map(|b| b.parse::<u32>())
        .transpose()?
        .unwrap_or(DEFAULT_BAUD_RATE);
    let once = args.iter().any(|a| a == "--once");

    println!("Listening on {port} @ {baud} baud...");
    let session = SerialSession::open(port, baud)?;
    let mut reader = session.into_reader(PACKET_TIMEOUT);

    loop {
        let payload = reader.next_payload()?;

        match decode(&payload) {
            Ok(record) => {
                println!("\nPacket received and decoded:");
                println!("  {}", to_compact(&record.config));
                println!("  CRC: {:#010X}", record.crc);
            }
            Err(err) => {
                // Valid packet framing around an invalid record; keep listening
                eprintln!("[!] record decode error: {err}");
            }
        }

        if once {
            return Ok(());
        }
    }
}
