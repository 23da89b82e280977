// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the packet_atoms extractors.
//!
//! ```text
//! packet-atoms json temp hum --file reading.json
//! echo '{"temp": 22.5}' | packet-atoms json temp
//! packet-atoms tlv 0x02 --hex 0104aabbccdd02021122
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use packet_atoms::{extract_field, find_tlv_record, FieldBuffer};

/// Extract values from flat JSON objects and TLV records
#[derive(Parser, Debug)]
#[command(name = "packet-atoms", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the raw value of each key in a flat JSON object
    Json {
        /// Key names, without quotes
        #[arg(required = true)]
        keys: Vec<String>,

        /// Read the document from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output buffer size per value, including the terminator
        #[arg(short, long, value_enum, default_value = "32")]
        capacity: Capacity,
    },
    /// Print the value of one tag in a binary TLV buffer as hex
    Tlv {
        /// Tag to look up, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_tag)]
        tag: u8,

        /// Read the buffer from a file instead of stdin
        #[arg(short, long, conflicts_with = "hex")]
        file: Option<PathBuf>,

        /// Take the buffer from a hex string
        #[arg(long)]
        hex: Option<String>,
    },
}

/// Buffer sizes are compile-time constants, so only a fixed set is offered.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Capacity {
    #[value(name = "16")]
    Bytes16,
    #[value(name = "32")]
    Bytes32,
    #[value(name = "64")]
    Bytes64,
    #[value(name = "128")]
    Bytes128,
}

fn parse_tag(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid tag '{s}': {e}"))
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    let data = match file {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .context("reading stdin")?;
            data
        }
    };
    debug!("read {} input bytes", data.len());
    Ok(data)
}

/// Prints one line per key. Returns true if every key extracted in full.
fn print_fields<const N: usize>(text: &[u8], keys: &[String]) -> bool {
    let mut buf = FieldBuffer::<N>::new();
    let mut all_ok = true;

    for key in keys {
        match extract_field(text, key, &mut buf) {
            Ok(_) => println!("{key}={buf}"),
            Err(e) if e.is_truncated() => {
                all_ok = false;
                println!("{key}={buf}");
                warn!(
                    "{key}: value truncated to {} bytes",
                    FieldBuffer::<N>::DATA_CAPACITY
                );
            }
            Err(e) => {
                all_ok = false;
                eprintln!("{key}: {e}");
            }
        }
    }
    all_ok
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::Json {
            keys,
            file,
            capacity,
        } => {
            let text = read_input(file.as_deref())?;
            Ok(match capacity {
                Capacity::Bytes16 => print_fields::<16>(&text, &keys),
                Capacity::Bytes32 => print_fields::<32>(&text, &keys),
                Capacity::Bytes64 => print_fields::<64>(&text, &keys),
                Capacity::Bytes128 => print_fields::<128>(&text, &keys),
            })
        }
        Command::Tlv {
            tag,
            file,
            hex: hex_input,
        } => {
            let buffer = match hex_input {
                Some(digits) => hex::decode(digits.trim()).context("decoding --hex")?,
                None => read_input(file.as_deref())?,
            };
            match find_tlv_record(&buffer, tag) {
                Some(value) => {
                    println!("{}", hex::encode(value));
                    Ok(true)
                }
                None => {
                    eprintln!("tag {tag:#04x}: not found");
                    Ok(false)
                }
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
