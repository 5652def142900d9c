//! Fault definitions.
//!
//! This module defines the single error type of the emulator core. It covers:
//! 1. **Decode Faults:** Malformed instruction encodings, one variant per
//!    rejection rule.
//! 2. **Image Faults:** Byte buffers whose length breaks the stride-4 word
//!    format.
//! 3. **Runtime Faults:** Program-counter violations, memory-ceiling
//!    exhaustion, the instruction budget and calling-convention misuse.
//!
//! Faults are terminal: the caller reports them and stops; nothing is
//! retried.

use std::fmt;

/// A terminal emulation fault.
///
/// Each variant carries the datum a user needs to locate the problem: the
/// offending instruction word, address, or count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// The major opcode (bits 6-0) is not one of the eleven legal values.
    UnknownOpcode(u32),

    /// The funct3 field selects no mnemonic for this opcode.
    UnknownFunct3(u32),

    /// The funct7 field (or shift-immediate upper bits) is non-canonical.
    UnknownFunct7(u32),

    /// A SYSTEM word with fields outside the two legal encodings.
    InvalidSystemFields(u32),

    /// A MISC-MEM word that is none of FENCE, FENCE.TSO or PAUSE.
    InvalidFenceVariant(u32),

    /// A byte buffer whose length is not a multiple of four.
    MisalignedImage(usize),

    /// The program counter fell below the code base.
    PcUnderflow(u32),

    /// The program counter is not a multiple of four.
    PcMisaligned(u32),

    /// The program counter moved beyond one slot past the loaded code.
    PcOverflow(u32),

    /// A memory access would grow the backing store past its ceiling.
    MemoryLimit {
        /// The faulting address.
        addr: u32,
        /// The configured capacity ceiling in bytes.
        limit: usize,
    },

    /// The instruction budget was exhausted before the guest returned.
    InstructionBudget(u64),

    /// More call arguments than the calling convention's eight registers.
    TooManyArguments(usize),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::UnknownOpcode(word) => {
                write!(f, "unknown major opcode in word {:#010x}", word)
            }
            Fault::UnknownFunct3(word) => {
                write!(f, "unknown funct3 in word {:#010x}", word)
            }
            Fault::UnknownFunct7(word) => {
                write!(f, "unknown funct7 in word {:#010x}", word)
            }
            Fault::InvalidSystemFields(word) => {
                write!(f, "malformed system instruction {:#010x}", word)
            }
            Fault::InvalidFenceVariant(word) => {
                write!(f, "malformed fence instruction {:#010x}", word)
            }
            Fault::MisalignedImage(len) => {
                write!(f, "image length {} is not a multiple of 4 bytes", len)
            }
            Fault::PcUnderflow(pc) => {
                write!(f, "program counter {:#010x} below the code segment", pc)
            }
            Fault::PcMisaligned(pc) => {
                write!(f, "program counter {:#010x} not aligned to 4 bytes", pc)
            }
            Fault::PcOverflow(pc) => {
                write!(f, "program counter {:#010x} beyond the loaded code", pc)
            }
            Fault::MemoryLimit { addr, limit } => {
                write!(
                    f,
                    "access at {:#010x} exceeds the memory ceiling of {} bytes",
                    addr, limit
                )
            }
            Fault::InstructionBudget(executed) => {
                write!(
                    f,
                    "instruction budget exhausted after {} instructions",
                    executed
                )
            }
            Fault::TooManyArguments(count) => {
                write!(f, "{} call arguments exceed the 8-register convention", count)
            }
        }
    }
}

impl std::error::Error for Fault {}
