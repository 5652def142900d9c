//! RV32I Instruction Decoder.
//!
//! This module turns raw 32-bit instruction words into typed `Instruction`
//! records. It performs:
//! 1. **Dispatch:** Major-opcode routing to the encoding class, then
//!    funct3/funct7 disambiguation to the concrete mnemonic.
//! 2. **Immediate Reconstruction:** Reassembly and sign-extension of the
//!    I, S, B, U and J immediate layouts from their interleaved bit fields.
//! 3. **Validation:** Rejection of malformed encodings (unknown opcodes and
//!    function codes, out-of-range shift amounts, non-canonical SYSTEM and
//!    MISC-MEM words).
//!
//! Decoding is per-word: a failure on one word never affects the words
//! around it.

use crate::fault::Fault;
use crate::isa::instruction::{Instruction, InstructionBits, Op};
use crate::isa::rv32i::{funct3, funct7, opcodes, system};

/// Total width of an instruction word in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Size of one encoded instruction in bytes.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Bit shift for the I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// The immediate occupies the upper 12 bits; an arithmetic right shift of
/// the raw word both aligns and sign-extends it.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for the S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for the S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for combining the S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total number of bits in an S-Type immediate.
const S_IMM_BITS: u32 = 12;

/// Bit shift for B-Type immediate bit 11 (bit 7 of the instruction).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// The immediate is an even offset; bit 0 is implicitly zero.
const B_IMM_11_SHIFT: u32 = 7;

/// Bit shift for B-Type immediate bits 4-1 (bits 8-11 of the instruction).
const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask for B-Type immediate bits 4-1 (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift for B-Type immediate bits 10-5 (bits 25-30 of the instruction).
const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask for B-Type immediate bits 10-5 (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Bit shift for B-Type immediate bit 12 (bit 31, the sign bit).
const B_IMM_12_SHIFT: u32 = 31;

/// Total number of bits in a B-Type immediate.
const B_IMM_BITS: u32 = 13;

/// Bit mask for the U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// The low 12 bits of the value are zero; no further extension is needed.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Bit shift for J-Type immediate bits 19-12 (bits 12-19 of the instruction).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_19_12_SHIFT: u32 = 12;

/// Bit mask for J-Type immediate bits 19-12 (8 bits).
const J_IMM_19_12_MASK: u32 = 0xFF;

/// Bit shift for J-Type immediate bit 11 (bit 20 of the instruction).
const J_IMM_11_SHIFT: u32 = 20;

/// Bit shift for J-Type immediate bits 10-1 (bits 21-30 of the instruction).
const J_IMM_10_1_SHIFT: u32 = 21;

/// Bit mask for J-Type immediate bits 10-1 (10 bits).
const J_IMM_10_1_MASK: u32 = 0x3FF;

/// Bit shift for J-Type immediate bit 20 (bit 31, the sign bit).
const J_IMM_20_SHIFT: u32 = 31;

/// Total number of bits in a J-Type immediate.
const J_IMM_BITS: u32 = 21;

/// Bit shift for the fence mode field (bits 28-31).
const FENCE_FM_SHIFT: u32 = 28;

/// Bit shift for the fence predecessor set (bits 24-27).
const FENCE_PRED_SHIFT: u32 = 24;

/// Bit shift for the fence successor set (bits 20-23).
const FENCE_SUCC_SHIFT: u32 = 20;

/// Bit mask for the 4-bit fence fields.
const FENCE_FIELD_MASK: u32 = 0xF;

/// Bit shift for the SYSTEM immediate (bits 20-31).
const SYSTEM_IMM_SHIFT: u32 = 20;

/// Decodes a 32-bit instruction word into a typed `Instruction` record.
///
/// # Arguments
///
/// * `word` - The raw 32-bit little-endian instruction encoding.
///
/// # Returns
///
/// The decoded record, or a decode fault describing how the word is
/// malformed.
pub fn decode(word: u32) -> Result<Instruction, Fault> {
    let op = decode_op(word)?;
    Ok(Instruction { raw: word, op })
}

/// Decodes a stride-4 little-endian byte buffer into an instruction
/// sequence.
///
/// The buffer length must be a multiple of four bytes; the resulting
/// sequence is parallel to the words of the buffer.
pub fn decode_program(bytes: &[u8]) -> Result<Vec<Instruction>, Fault> {
    if bytes.len() % INSTRUCTION_BYTES as usize != 0 {
        return Err(Fault::MisalignedImage(bytes.len()));
    }
    let mut program = Vec::with_capacity(bytes.len() / INSTRUCTION_BYTES as usize);
    for chunk in bytes.chunks_exact(INSTRUCTION_BYTES as usize) {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        program.push(decode(word)?);
    }
    Ok(program)
}

/// Routes a word through major-opcode dispatch and funct3/funct7
/// disambiguation.
fn decode_op(word: u32) -> Result<Op, Fault> {
    let rd = word.rd();
    let rs1 = word.rs1();
    let rs2 = word.rs2();

    match word.opcode() {
        opcodes::OP_LUI => Ok(Op::Lui {
            rd,
            imm: decode_u_type_imm(word),
        }),
        opcodes::OP_AUIPC => Ok(Op::Auipc {
            rd,
            imm: decode_u_type_imm(word),
        }),
        opcodes::OP_JAL => Ok(Op::Jal {
            rd,
            imm: decode_j_type_imm(word),
        }),

        opcodes::OP_JALR => {
            if word.funct3() != 0 {
                return Err(Fault::UnknownFunct3(word));
            }
            Ok(Op::Jalr {
                rd,
                rs1,
                imm: decode_i_type_imm(word),
            })
        }

        opcodes::OP_BRANCH => {
            let imm = decode_b_type_imm(word);
            match word.funct3() {
                funct3::BEQ => Ok(Op::Beq { rs1, rs2, imm }),
                funct3::BNE => Ok(Op::Bne { rs1, rs2, imm }),
                funct3::BLT => Ok(Op::Blt { rs1, rs2, imm }),
                funct3::BGE => Ok(Op::Bge { rs1, rs2, imm }),
                funct3::BLTU => Ok(Op::Bltu { rs1, rs2, imm }),
                funct3::BGEU => Ok(Op::Bgeu { rs1, rs2, imm }),
                _ => Err(Fault::UnknownFunct3(word)),
            }
        }

        opcodes::OP_LOAD => {
            let imm = decode_i_type_imm(word);
            match word.funct3() {
                funct3::LB => Ok(Op::Lb { rd, rs1, imm }),
                funct3::LH => Ok(Op::Lh { rd, rs1, imm }),
                funct3::LW => Ok(Op::Lw { rd, rs1, imm }),
                funct3::LBU => Ok(Op::Lbu { rd, rs1, imm }),
                funct3::LHU => Ok(Op::Lhu { rd, rs1, imm }),
                _ => Err(Fault::UnknownFunct3(word)),
            }
        }

        opcodes::OP_STORE => {
            let imm = decode_s_type_imm(word);
            match word.funct3() {
                funct3::SB => Ok(Op::Sb { rs1, rs2, imm }),
                funct3::SH => Ok(Op::Sh { rs1, rs2, imm }),
                funct3::SW => Ok(Op::Sw { rs1, rs2, imm }),
                _ => Err(Fault::UnknownFunct3(word)),
            }
        }

        opcodes::OP_IMM => decode_op_imm(word, rd, rs1),
        opcodes::OP_REG => decode_op_reg(word, rd, rs1, rs2),
        opcodes::OP_MISC_MEM => decode_misc_mem(word),
        opcodes::OP_SYSTEM => decode_system(word),

        _ => Err(Fault::UnknownOpcode(word)),
    }
}

/// Disambiguates OP_IMM (immediate arithmetic and shift-immediate)
/// instructions.
///
/// The shift instructions reuse the I-Type layout with the shift amount in
/// the rs2 field position; the upper immediate bits act as a funct7 and must
/// be canonical, which also rejects shift amounts of 32 or more.
fn decode_op_imm(word: u32, rd: usize, rs1: usize) -> Result<Op, Fault> {
    let imm = decode_i_type_imm(word);
    match word.funct3() {
        funct3::ADD_SUB => Ok(Op::Addi { rd, rs1, imm }),
        funct3::SLT => Ok(Op::Slti { rd, rs1, imm }),
        funct3::SLTU => Ok(Op::Sltiu { rd, rs1, imm }),
        funct3::XOR => Ok(Op::Xori { rd, rs1, imm }),
        funct3::OR => Ok(Op::Ori { rd, rs1, imm }),
        funct3::AND => Ok(Op::Andi { rd, rs1, imm }),

        funct3::SLL => {
            if word.funct7() != funct7::DEFAULT {
                return Err(Fault::UnknownFunct7(word));
            }
            Ok(Op::Slli {
                rd,
                rs1,
                shamt: word.rs2() as u32,
            })
        }
        funct3::SRL_SRA => {
            let shamt = word.rs2() as u32;
            match word.funct7() {
                funct7::DEFAULT => Ok(Op::Srli { rd, rs1, shamt }),
                funct7::SRA => Ok(Op::Srai { rd, rs1, shamt }),
                _ => Err(Fault::UnknownFunct7(word)),
            }
        }

        // funct3 is a 3-bit field and every value is assigned above.
        _ => unreachable!("funct3 is three bits"),
    }
}

/// Disambiguates OP_REG (register-register arithmetic) instructions.
///
/// Every funct3 value is legal for this opcode; the only malformed words are
/// those with a non-canonical funct7.
fn decode_op_reg(word: u32, rd: usize, rs1: usize, rs2: usize) -> Result<Op, Fault> {
    match (word.funct3(), word.funct7()) {
        (funct3::ADD_SUB, funct7::DEFAULT) => Ok(Op::Add { rd, rs1, rs2 }),
        (funct3::ADD_SUB, funct7::SUB) => Ok(Op::Sub { rd, rs1, rs2 }),
        (funct3::SLL, funct7::DEFAULT) => Ok(Op::Sll { rd, rs1, rs2 }),
        (funct3::SLT, funct7::DEFAULT) => Ok(Op::Slt { rd, rs1, rs2 }),
        (funct3::SLTU, funct7::DEFAULT) => Ok(Op::Sltu { rd, rs1, rs2 }),
        (funct3::XOR, funct7::DEFAULT) => Ok(Op::Xor { rd, rs1, rs2 }),
        (funct3::SRL_SRA, funct7::DEFAULT) => Ok(Op::Srl { rd, rs1, rs2 }),
        (funct3::SRL_SRA, funct7::SRA) => Ok(Op::Sra { rd, rs1, rs2 }),
        (funct3::OR, funct7::DEFAULT) => Ok(Op::Or { rd, rs1, rs2 }),
        (funct3::AND, funct7::DEFAULT) => Ok(Op::And { rd, rs1, rs2 }),
        _ => Err(Fault::UnknownFunct7(word)),
    }
}

/// Decodes the MISC-MEM opcode into one of the three legal fence variants.
///
/// funct3, rd and rs1 must all be zero, and the (fm, pred, succ) tuple must
/// be exactly one of FENCE, FENCE.TSO or PAUSE.
fn decode_misc_mem(word: u32) -> Result<Op, Fault> {
    if word.funct3() != funct3::FENCE || word.rd() != 0 || word.rs1() != 0 {
        return Err(Fault::InvalidFenceVariant(word));
    }

    let fm = (word >> FENCE_FM_SHIFT) & FENCE_FIELD_MASK;
    let pred = (word >> FENCE_PRED_SHIFT) & FENCE_FIELD_MASK;
    let succ = (word >> FENCE_SUCC_SHIFT) & FENCE_FIELD_MASK;

    match (fm, pred, succ) {
        (system::FM_NONE, system::SET_NONE, system::SET_NONE) => Ok(Op::Fence {
            pred: pred as u8,
            succ: succ as u8,
        }),
        (system::FM_TSO, system::SET_RW, system::SET_RW) => Ok(Op::FenceTso),
        (system::FM_NONE, system::SET_W, system::SET_NONE) => Ok(Op::Pause),
        _ => Err(Fault::InvalidFenceVariant(word)),
    }
}

/// Decodes the SYSTEM opcode into ECALL or EBREAK.
///
/// rd, rs1 and funct3 must be zero; the 12-bit immediate selects the
/// mnemonic.
fn decode_system(word: u32) -> Result<Op, Fault> {
    if word.funct3() != funct3::PRIV || word.rd() != 0 || word.rs1() != 0 {
        return Err(Fault::InvalidSystemFields(word));
    }
    match word >> SYSTEM_IMM_SHIFT {
        system::ECALL_IMM => Ok(Op::Ecall),
        system::EBREAK_IMM => Ok(Op::Ebreak),
        _ => Err(Fault::InvalidSystemFields(word)),
    }
}

/// Decodes the immediate value of an I-Type instruction.
///
/// An arithmetic right shift of the raw word aligns the field and
/// sign-extends it in one step.
fn decode_i_type_imm(word: u32) -> i32 {
    (word as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value of an S-Type instruction.
fn decode_s_type_imm(word: u32) -> i32 {
    let low = (word >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (word >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << S_IMM_COMBINED_SHIFT) | low, S_IMM_BITS)
}

/// Decodes the immediate value of a B-Type instruction.
///
/// The 13-bit even offset is scattered across four fields; bit 0 is always
/// zero.
fn decode_b_type_imm(word: u32) -> i32 {
    let bit_11 = (word >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (word >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (word >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (word >> B_IMM_12_SHIFT) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value of a U-Type instruction.
///
/// The value occupies bits 31-12 of the word directly; the low 12 bits are
/// zero.
fn decode_u_type_imm(word: u32) -> i32 {
    (word & U_IMM_MASK) as i32
}

/// Decodes the immediate value of a J-Type instruction.
///
/// The 21-bit even offset is scattered across four fields; bit 0 is always
/// zero.
fn decode_j_type_imm(word: u32) -> i32 {
    let bits_19_12 = (word >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (word >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (word >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (word >> J_IMM_20_SHIFT) & 1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
