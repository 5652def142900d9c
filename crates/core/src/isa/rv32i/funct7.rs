//! RV32I Base Integer Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects between standard and alternate
//! encodings sharing an opcode/funct3 pair (ADD vs SUB, SRL vs SRA). For the
//! shift-immediate instructions the same bits sit above the 5-bit shift
//! amount, so they also bound the legal shift range.

/// Standard encoding (ADD, SLL, SLT, SLTU, XOR, SRL, OR, AND, SLLI, SRLI).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding for subtraction (SUB).
pub const SUB: u32 = 0b0100000;

/// Alternate encoding for arithmetic right shift (SRA, SRAI).
pub const SRA: u32 = 0b0100000;
