//! RV32I base integer instruction set encoding tables.
//!
//! Named constants for every field value the decoder dispatches on. Keeping
//! them in one place makes the decoder easy to diff against the RV32I
//! encoding listings.

/// Major opcodes (bits 6-0).
pub mod opcodes;

/// funct3 function codes (bits 14-12).
pub mod funct3;

/// funct7 function codes (bits 31-25).
pub mod funct7;

/// SYSTEM and MISC-MEM fixed encodings.
pub mod system;
