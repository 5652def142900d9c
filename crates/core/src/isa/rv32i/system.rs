//! System and Memory-Ordering Encodings.
//!
//! Raw encodings for the SYSTEM opcode (ECALL, EBREAK) and the field values
//! of the three legal MISC-MEM variants. SYSTEM and MISC-MEM instructions
//! have most of their fields fixed to zero; a word with any other bit set is
//! malformed.

/// Full encoding of ECALL (imm[11:0] = 0, all other fields zero).
pub const ECALL: u32 = 0x0000_0073;

/// Full encoding of EBREAK (imm[11:0] = 1, all other fields zero).
pub const EBREAK: u32 = 0x0010_0073;

/// SYSTEM immediate selecting ECALL.
pub const ECALL_IMM: u32 = 0;

/// SYSTEM immediate selecting EBREAK.
pub const EBREAK_IMM: u32 = 1;

/// Fence mode (bits 31-28) of a plain FENCE.
pub const FM_NONE: u32 = 0b0000;

/// Fence mode (bits 31-28) of FENCE.TSO.
pub const FM_TSO: u32 = 0b1000;

/// Empty predecessor/successor set.
pub const SET_NONE: u32 = 0b0000;

/// Read+write predecessor/successor set, as used by FENCE.TSO.
pub const SET_RW: u32 = 0b0011;

/// Write-only predecessor set, as used by PAUSE.
pub const SET_W: u32 = 0b0001;
