//! Disassembler text checks.
//!
//! One representative per operand shape, plus the mnemonic accessor and the
//! control-flow target helper used by the listing front-end.

use rvcall_core::isa::decode::decode;
use rvcall_core::isa::disasm::disassemble;
use rvcall_core::isa::rv32i::{funct3, funct7, opcodes};

use crate::common::builder::{b_type, i_type, j_type, r_type, s_type, u_type};

fn text(word: u32) -> String {
    disassemble(&decode(word).unwrap())
}

#[test]
fn disasm_addi() {
    assert_eq!(text(0x00A00513), "addi a0, zero, 10");
}

#[test]
fn disasm_register_arithmetic() {
    let word = r_type(opcodes::OP_REG, 10, funct3::ADD_SUB, 11, 12, funct7::DEFAULT);
    assert_eq!(text(word), "add a0, a1, a2");
    let word = r_type(opcodes::OP_REG, 10, funct3::ADD_SUB, 11, 12, funct7::SUB);
    assert_eq!(text(word), "sub a0, a1, a2");
}

#[test]
fn disasm_load_store() {
    let lw = i_type(opcodes::OP_LOAD, 10, funct3::LW, 2, 8);
    assert_eq!(text(lw), "lw a0, 8(sp)");
    let sw = s_type(opcodes::OP_STORE, funct3::SW, 2, 11, -4);
    assert_eq!(text(sw), "sw a1, -4(sp)");
}

#[test]
fn disasm_branch() {
    let word = b_type(opcodes::OP_BRANCH, funct3::BEQ, 10, 11, 16);
    assert_eq!(text(word), "beq a0, a1, 16");
}

#[test]
fn disasm_jumps() {
    let jal = j_type(opcodes::OP_JAL, 1, -8);
    assert_eq!(text(jal), "jal ra, -8");
    let jalr = i_type(opcodes::OP_JALR, 0, 0, 1, 0);
    assert_eq!(text(jalr), "jalr zero, 0(ra)");
}

#[test]
fn disasm_upper_immediates() {
    let lui = u_type(opcodes::OP_LUI, 10, 0x12345);
    assert_eq!(text(lui), "lui a0, 0x12345");
    let auipc = u_type(opcodes::OP_AUIPC, 10, 0x1);
    assert_eq!(text(auipc), "auipc a0, 0x1");
}

#[test]
fn disasm_shift_immediates() {
    let word = i_type(opcodes::OP_IMM, 10, funct3::SLL, 10, 3);
    assert_eq!(text(word), "slli a0, a0, 3");
}

#[test]
fn disasm_fence_and_system() {
    assert_eq!(text(0x0000_000F), "fence");
    assert_eq!(text(0x8330_000F), "fence.tso");
    assert_eq!(text(0x0100_000F), "pause");
    assert_eq!(text(0x0000_0073), "ecall");
    assert_eq!(text(0x0010_0073), "ebreak");
}

#[test]
fn mnemonic_matches_text_prefix() {
    let words = [
        0x00A00513, // addi
        j_type(opcodes::OP_JAL, 1, 16),
        b_type(opcodes::OP_BRANCH, funct3::BLTU, 1, 2, 8),
        0x8330_000F,
    ];
    for &word in &words {
        let inst = decode(word).unwrap();
        assert!(disassemble(&inst).starts_with(inst.mnemonic()));
    }
}

#[test]
fn pc_relative_target_covers_branches_and_jal() {
    let branch = decode(b_type(opcodes::OP_BRANCH, funct3::BGE, 1, 2, -64)).unwrap();
    assert_eq!(branch.pc_relative_target(), Some(-64));
    let jal = decode(j_type(opcodes::OP_JAL, 0, 2048)).unwrap();
    assert_eq!(jal.pc_relative_target(), Some(2048));
    let jalr = decode(i_type(opcodes::OP_JALR, 0, 0, 1, 0)).unwrap();
    assert_eq!(jalr.pc_relative_target(), None);
    let addi = decode(0x00A00513).unwrap();
    assert_eq!(addi.pc_relative_target(), None);
}
