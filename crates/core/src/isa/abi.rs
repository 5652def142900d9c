//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! Defines the register indices the integer calling convention assigns
//! special roles to, plus the argument-count limit of that convention.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument / high half of a 64-bit return, a1).
pub const REG_A1: usize = 11;
/// Register x17 (eighth argument, a7).
pub const REG_A7: usize = 17;

/// Maximum number of integer call arguments (a0 through a7).
pub const MAX_CALL_ARGS: usize = 8;
