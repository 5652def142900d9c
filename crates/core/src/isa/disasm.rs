//! Instruction Disassembler.
//!
//! Converts a decoded instruction into a human-readable assembly string for
//! listings, tracing and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvcall_core::isa::decode::decode;
//! use rvcall_core::isa::disasm::disassemble;
//!
//! let inst = decode(0x00A00513).unwrap(); // ADDI x10, x0, 10
//! assert_eq!(disassemble(&inst), "addi a0, zero, 10");
//! ```

use crate::isa::instruction::{Instruction, Op};

/// ABI register names for x0-x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a decoded instruction into assembly text.
///
/// Branch and jump offsets are printed as signed byte offsets relative to
/// the instruction's own address; U-type immediates as the upper-20-bit
/// value in hex, matching assembler input syntax.
pub fn disassemble(inst: &Instruction) -> String {
    let mn = inst.mnemonic();
    match inst.op {
        // ── U-type ────────────────────────────────────────
        Op::Lui { rd, imm } | Op::Auipc { rd, imm } => {
            format!("{mn} {}, {:#x}", xreg(rd), (imm as u32) >> 12)
        }

        // ── Jumps ─────────────────────────────────────────
        Op::Jal { rd, imm } => format!("{mn} {}, {imm}", xreg(rd)),
        Op::Jalr { rd, rs1, imm } => {
            format!("{mn} {}, {imm}({})", xreg(rd), xreg(rs1))
        }

        // ── Branches ──────────────────────────────────────
        Op::Beq { rs1, rs2, imm }
        | Op::Bne { rs1, rs2, imm }
        | Op::Blt { rs1, rs2, imm }
        | Op::Bge { rs1, rs2, imm }
        | Op::Bltu { rs1, rs2, imm }
        | Op::Bgeu { rs1, rs2, imm } => {
            format!("{mn} {}, {}, {imm}", xreg(rs1), xreg(rs2))
        }

        // ── Loads ─────────────────────────────────────────
        Op::Lb { rd, rs1, imm }
        | Op::Lh { rd, rs1, imm }
        | Op::Lw { rd, rs1, imm }
        | Op::Lbu { rd, rs1, imm }
        | Op::Lhu { rd, rs1, imm } => {
            format!("{mn} {}, {imm}({})", xreg(rd), xreg(rs1))
        }

        // ── Stores ────────────────────────────────────────
        Op::Sb { rs1, rs2, imm } | Op::Sh { rs1, rs2, imm } | Op::Sw { rs1, rs2, imm } => {
            format!("{mn} {}, {imm}({})", xreg(rs2), xreg(rs1))
        }

        // ── Immediate arithmetic ──────────────────────────
        Op::Addi { rd, rs1, imm }
        | Op::Slti { rd, rs1, imm }
        | Op::Sltiu { rd, rs1, imm }
        | Op::Xori { rd, rs1, imm }
        | Op::Ori { rd, rs1, imm }
        | Op::Andi { rd, rs1, imm } => {
            format!("{mn} {}, {}, {imm}", xreg(rd), xreg(rs1))
        }
        Op::Slli { rd, rs1, shamt } | Op::Srli { rd, rs1, shamt } | Op::Srai { rd, rs1, shamt } => {
            format!("{mn} {}, {}, {shamt}", xreg(rd), xreg(rs1))
        }

        // ── Register arithmetic ───────────────────────────
        Op::Add { rd, rs1, rs2 }
        | Op::Sub { rd, rs1, rs2 }
        | Op::Sll { rd, rs1, rs2 }
        | Op::Slt { rd, rs1, rs2 }
        | Op::Sltu { rd, rs1, rs2 }
        | Op::Xor { rd, rs1, rs2 }
        | Op::Srl { rd, rs1, rs2 }
        | Op::Sra { rd, rs1, rs2 }
        | Op::Or { rd, rs1, rs2 }
        | Op::And { rd, rs1, rs2 } => {
            format!("{mn} {}, {}, {}", xreg(rd), xreg(rs1), xreg(rs2))
        }

        // ── Fence / System ────────────────────────────────
        Op::Fence { .. } | Op::FenceTso | Op::Pause | Op::Ecall | Op::Ebreak => mn.to_string(),
    }
}
