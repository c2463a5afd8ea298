//! Command-line disassembler for RV32I flat binary images.
//!
//! Loads a raw binary into simulated memory, prints a full hex dump of the
//! memory, then walks it in 4-byte steps printing one decoded instruction
//! per word.

use anyhow::{Context, Result};
use clap::Parser;

use rv32i::{hex, Memory};

#[derive(Parser)]
#[command(author, about, long_about = None)]
struct Disasm {
    /// Memory size in hex bytes, rounded up to a multiple of 16
    #[clap(short = 'm', default_value = "100", value_parser = parse_hex32)]
    memory_size: u32,

    /// Raw binary image to load at address 0
    infile: String,
}

fn parse_hex32(s: &str) -> Result<u32, String> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(s, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

impl Disasm {
    fn run(&self) -> Result<()> {
        let mut mem = Memory::new(self.memory_size);
        mem.load_file(&self.infile)
            .with_context(|| format!("failed to load image '{}'", self.infile))?;
        tracing::debug!(size = mem.size(), infile = %self.infile, "image loaded");

        print!("{}", mem.dump());

        let mut pc = 0;
        while pc < mem.size() {
            let word = mem.get32(pc);
            println!("{}: {}  {}", hex::to_hex32(pc), hex::to_hex32(word), rv32i::decode(pc, word));
            pc += 4;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    Disasm::parse().run()
}
