//! Host-side sender: load a configuration file and push it over the serial
//! link as one framed packet.
//!
//! Usage:
//!   send_config <port> <config-file> [baud]
//!   send_config <port> --check [baud]
//!
//! The configuration file is either a raw 32-byte `.bin` record or a compact
//! pipe-delimited text line (`MODE|PROTOCOL|MOD|FC|FS|RFG|IFG|BBG`).

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use rfcfg::DEFAULT_BAUD_RATE;
use rfcfg::link::{SerialSession, frame};
use rfcfg::record::{decode, encode, hex_dump, parse_compact};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let (port, target) = match args.as_slice() {
        [_, port, target, ..] => (port.clone(), target.clone()),
        _ => {
            eprintln!("usage: send_config <port> <config-file | --check> [baud]");
            std::process::exit(2);
        }
    };
    let baud = args
        .get(3)
        .map(|b| b.parse::<u32>())
        .transpose()?
        .unwrap_or(DEFAULT_BAUD_RATE);

    if target == "--check" {
        if SerialSession::check_available(&port, baud) {
            println!("[*] {port} opened successfully");
            return Ok(());
        }
        eprintln!("[X] could not open {port}");
        std::process::exit(1);
    }

    let record = load_record(Path::new(&target))?;

    let decoded = decode(&record)?;
    println!("Configuration to send:");
    println!("  Device:        {}", decoded.config.device_mode);
    println!("  Protocol:      {}", decoded.config.streaming_protocol);
    println!("  Modulation:    {}", decoded.config.modulation);
    println!("  Carrier freq:  {} Hz", decoded.config.carrier_freq_hz);
    println!("  Sampling freq: {} Hz", decoded.config.sampling_freq_hz);
    println!(
        "  Gains:         RF={:.1} dB, IF={:.1} dB, BB={:.1} dB",
        decoded.config.rf_gain_db, decoded.config.if_gain_db, decoded.config.baseband_gain_db
    );
    println!("  CRC:           {:#010X}", decoded.crc);
    println!("\nRecord bytes:\n{}", hex_dump(&record));

    let packet = frame(&record);
    println!("Packet: {} bytes", packet.len());

    let mut session = SerialSession::open(&port, baud)?;
    match session.send(&packet)? {
        Some(response) => {
            println!("Response: {}", String::from_utf8_lossy(&response));
        }
        None => println!("No response received"),
    }

    println!("Configuration sent");
    Ok(())
}

/// Load a record from a raw `.bin` file or a compact text file.
fn load_record(path: &Path) -> Result<Vec<u8>, Box<dyn Error>> {
    if path.extension().is_some_and(|ext| ext == "bin") {
        return Ok(fs::read(path)?);
    }
    let line = fs::read_to_string(path)?;
    let config = parse_compact(&line)?;
    Ok(encode(&config).to_vec())
}
