//! Instruction-set architecture layer.
//!
//! Everything that is a pure function of instruction encodings: field
//! extraction, the encoding tables, the decoder, the disassembler and the
//! ABI register assignments.

/// ABI register-index constants.
pub mod abi;

/// Word-to-record decoder and immediate reconstruction.
pub mod decode;

/// Record-to-text disassembler.
pub mod disasm;

/// Field extraction and the decoded instruction model.
pub mod instruction;

/// RV32I encoding tables (opcodes, funct3, funct7, system).
pub mod rv32i;
