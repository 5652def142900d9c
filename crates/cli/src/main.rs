//! RV32I function emulator CLI.
//!
//! This binary is the front-end for the emulator core. It performs:
//! 1. **Disassembly:** Prints a per-word listing (address, raw word,
//!    assembly text, branch/jump target) of a function image.
//! 2. **Emulation:** Executes a function image with up to eight integer
//!    arguments and prints the returned a0 (or a1:a0 with `--wide`).
//! 3. **Codec:** File-to-file obfuscation and restoration of stored images.
//!
//! All errors print a single `[!]` line to stderr and exit with code 1.

use clap::{Parser, Subcommand};
use std::process;
use std::{fs, path::Path};

use rvcall_core::isa::decode::decode;
use rvcall_core::isa::disasm::disassemble;
use rvcall_core::{obf, Config, Cpu};

#[derive(Parser, Debug)]
#[command(
    name = "rvcall",
    version,
    about = "RV32I function emulator",
    long_about = "Disassemble, execute, or (de)obfuscate a raw RV32I function image.\n\nAn image is a headerless little-endian binary whose whole content is one\nfunction body following the integer calling convention.\n\nExamples:\n  rvcall disassemble only_fn.rv32i\n  rvcall emulate only_fn.rv32i 5 3\n  rvcall emulate --obfuscated protected.rv32i 0x2a\n  rvcall obfuscate only_fn.rv32i protected.rv32i"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a disassembly listing of an image.
    Disassemble {
        /// Image file to disassemble.
        file: String,

        /// Base address for the printed listing (hex, default 0).
        #[arg(long, value_name = "HEX")]
        base: Option<String>,

        /// Restore the obfuscation transform before decoding.
        #[arg(long)]
        obfuscated: bool,
    },

    /// Execute an image and print the value it returns in a0.
    Emulate {
        /// Image file to execute.
        file: String,

        /// Up to eight integer arguments (decimal or 0x-prefixed hex).
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,

        /// Restore the obfuscation transform before decoding.
        #[arg(long)]
        obfuscated: bool,

        /// Print the 64-bit a1:a0 pair instead of a0 alone.
        #[arg(long)]
        wide: bool,

        /// JSON file overriding the memory layout or execution policy.
        #[arg(long, value_name = "FILE")]
        config: Option<String>,

        /// Print one line per retired instruction to stderr.
        #[arg(long)]
        trace: bool,
    },

    /// Apply the obfuscation transform to a file.
    Obfuscate {
        /// Cleartext input file.
        input: String,
        /// Obfuscated output file.
        output: String,
    },

    /// Restore an obfuscated file.
    Deobfuscate {
        /// Obfuscated input file.
        input: String,
        /// Cleartext output file.
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Disassemble {
            file,
            base,
            obfuscated,
        } => cmd_disassemble(&file, base.as_deref(), obfuscated),
        Commands::Emulate {
            file,
            args,
            obfuscated,
            wide,
            config,
            trace,
        } => cmd_emulate(&file, &args, obfuscated, wide, config.as_deref(), trace),
        Commands::Obfuscate { input, output } => cmd_transform(&input, &output, obf::obfuscate),
        Commands::Deobfuscate { input, output } => cmd_transform(&input, &output, obf::deobfuscate),
    };

    if let Err(message) = result {
        eprintln!("[!] {message}");
        process::exit(1);
    }
}

/// Prints the listing: one line per word; undecodable words become
/// diagnostics on stderr and are skipped.
fn cmd_disassemble(file: &str, base: Option<&str>, obfuscated: bool) -> Result<(), String> {
    let mut bytes = read_file(file)?;
    if obfuscated {
        bytes = obf::deobfuscate(&bytes).map_err(|fault| fault.to_string())?;
    }

    if bytes.len() % 4 != 0 {
        eprintln!(
            "[!] warning: image length {} is not a multiple of 4 bytes; trailing bytes ignored",
            bytes.len()
        );
    }

    let mut addr = match base {
        Some(text) => parse_hex(text)?,
        None => 0,
    };

    for chunk in bytes.chunks_exact(4) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        match decode(word) {
            Ok(inst) => {
                print!("{addr:08x}:  {word:08x}  {}", disassemble(&inst));
                if let Some(offset) = inst.pc_relative_target() {
                    print!("  # target: {:#x}", addr.wrapping_add(offset as u32));
                }
                println!();
            }
            Err(fault) => {
                eprintln!("[!] warning at {addr:#010x}: {fault} (raw: {word:#010x})");
            }
        }
        addr = addr.wrapping_add(4);
    }

    Ok(())
}

/// Executes the image and prints the returned value as decimal.
fn cmd_emulate(
    file: &str,
    arg_texts: &[String],
    obfuscated: bool,
    wide: bool,
    config_path: Option<&str>,
    trace: bool,
) -> Result<(), String> {
    let config = load_config(config_path, trace)?;

    let mut bytes = read_file(file)?;
    if obfuscated {
        bytes = obf::deobfuscate(&bytes).map_err(|fault| fault.to_string())?;
    }

    let args = arg_texts
        .iter()
        .map(|text| parse_arg(text))
        .collect::<Result<Vec<u32>, String>>()?;

    let mut cpu = Cpu::new(&config);
    if wide {
        let value = cpu.call64(&bytes, &args).map_err(|fault| fault.to_string())?;
        println!("{}", value as i64);
    } else {
        let value = cpu.call(&bytes, &args).map_err(|fault| fault.to_string())?;
        println!("{}", value as i32);
    }

    Ok(())
}

/// Runs a file-to-file codec pass.
fn cmd_transform(
    input: &str,
    output: &str,
    transform: fn(&[u8]) -> Result<Vec<u8>, rvcall_core::Fault>,
) -> Result<(), String> {
    let bytes = read_file(input)?;
    let transformed = transform(&bytes).map_err(|fault| fault.to_string())?;
    fs::write(Path::new(output), transformed)
        .map_err(|e| format!("could not write '{output}': {e}"))?;
    Ok(())
}

/// Reads a whole file, mapping I/O failures to a printable message.
fn read_file(path: &str) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("could not read '{path}': {e}"))
}

/// Builds the configuration from an optional JSON override file.
fn load_config(path: Option<&str>, trace: bool) -> Result<Config, String> {
    let mut config = match path {
        Some(p) => {
            let text =
                fs::read_to_string(p).map_err(|e| format!("could not read config '{p}': {e}"))?;
            serde_json::from_str(&text).map_err(|e| format!("invalid config '{p}': {e}"))?
        }
        None => Config::default(),
    };
    if trace {
        config.execution.trace = true;
    }
    Ok(config)
}

/// Parses one call argument: decimal, `0x`-prefixed hex, or negative
/// decimal (stored two's-complement).
fn parse_arg(text: &str) -> Result<u32, String> {
    let value = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16)
    } else {
        text.parse::<i64>()
    }
    .map_err(|_| format!("invalid integer argument '{text}'"))?;

    if !(-(1i64 << 31)..(1i64 << 32)).contains(&value) {
        return Err(format!("argument '{text}' is outside the 32-bit range"));
    }
    Ok(value as u32)
}

/// Parses a listing base address, with or without a `0x` prefix.
fn parse_hex(text: &str) -> Result<u32, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).map_err(|_| format!("invalid base address '{text}'"))
}
