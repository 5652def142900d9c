//! RV32I function emulator core.
//!
//! This crate implements a software CPU for the unprivileged RV32I base
//! integer instruction set, specialized for executing one function image
//! under the standard integer calling convention. It provides:
//! 1. **ISA:** Encoding tables, a bit-exact decoder for all six immediate
//!    layouts, and a disassembler.
//! 2. **Core:** Register file, program counter and the interpreter loop
//!    with the host-to-guest argument bridge.
//! 3. **Memory:** A flat byte-addressable address space with little-endian
//!    typed access and zero-filled on-demand growth.
//! 4. **Codec:** The invertible obfuscation transform applied to stored
//!    binaries.
//! 5. **Configuration:** Per-instance memory layout and execution policy.

/// Per-instance configuration (memory layout, execution policy).
pub mod config;
/// CPU core (register file, interpreter, calling convention).
pub mod core;
/// Terminal fault definitions.
pub mod fault;
/// Instruction-set architecture (tables, decoder, disassembler, ABI).
pub mod isa;
/// Flat auto-growing virtual memory.
pub mod mem;
/// Obfuscation codec for stored binaries.
pub mod obf;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The software CPU; one instance per emulated call.
pub use crate::core::Cpu;
/// Terminal emulation fault.
pub use crate::fault::Fault;
/// Decoded instruction record and operation model.
pub use crate::isa::instruction::{Instruction, Op};
