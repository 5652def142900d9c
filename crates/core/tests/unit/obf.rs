//! Obfuscation codec properties.
//!
//! Round-trip identities in both directions, exact byte expectations on
//! known vectors (including one showing the reversal crossing word
//! boundaries), and length validation.

use rvcall_core::obf::{deobfuscate, obfuscate, OBFUSCATION_KEY};
use rvcall_core::Fault;

#[test]
fn key_is_the_documented_constant() {
    assert_eq!(OBFUSCATION_KEY, 0xDEAD_BEEF);
}

#[test]
fn deobfuscate_inverts_obfuscate() {
    let data: Vec<u8> = (0u8..32).collect();
    let restored = deobfuscate(&obfuscate(&data).unwrap()).unwrap();
    assert_eq!(restored, data);
}

#[test]
fn obfuscate_inverts_deobfuscate() {
    let data: Vec<u8> = (100u8..132).rev().collect();
    let round = obfuscate(&deobfuscate(&data).unwrap()).unwrap();
    assert_eq!(round, data);
}

#[test]
fn known_vector_single_word() {
    // 0x00000000 ^ key = 0xDEADBEEF, little-endian EF BE AD DE, reversed.
    let out = obfuscate(&[0, 0, 0, 0]).unwrap();
    assert_eq!(out, vec![0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn known_vector_reversal_crosses_word_boundaries() {
    // Words 0x00000000 and 0xFFFFFFFF: XOR gives EF BE AD DE | 10 41 52 21;
    // the whole-buffer reversal then interleaves the two words' bytes.
    let out = obfuscate(&[0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
    assert_eq!(out, vec![0x21, 0x52, 0x41, 0x10, 0xDE, 0xAD, 0xBE, 0xEF]);

    let back = deobfuscate(&out).unwrap();
    assert_eq!(back, vec![0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn empty_image_round_trips() {
    assert_eq!(obfuscate(&[]).unwrap(), Vec::<u8>::new());
    assert_eq!(deobfuscate(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn misaligned_lengths_are_rejected() {
    for len in [1usize, 2, 3, 5, 7] {
        let data = vec![0u8; len];
        assert_eq!(obfuscate(&data), Err(Fault::MisalignedImage(len)));
        assert_eq!(deobfuscate(&data), Err(Fault::MisalignedImage(len)));
    }
}
