//! Virtual memory behaviour.
//!
//! Round-trips at every access width, byte-order checks, growth and the
//! capacity ceiling. Layouts are scaled down so growth boundaries are easy
//! to hit.

use rvcall_core::config::MemoryLayout;
use rvcall_core::mem::Memory;
use rvcall_core::Fault;

/// A 64-byte memory with a 4 KiB ceiling and a low code base.
fn small_memory() -> Memory {
    Memory::new(&MemoryLayout {
        code_base: 0x10,
        initial_capacity: 64,
        capacity_limit: 4096,
        ..MemoryLayout::default()
    })
}

// ══════════════════════════════════════════════════════════
// 1. Typed round-trips
// ══════════════════════════════════════════════════════════

#[test]
fn byte_round_trip() {
    let mut mem = small_memory();
    mem.write8(0, 0xAB).unwrap();
    assert_eq!(mem.read8(0), Ok(0xAB));
}

#[test]
fn halfword_round_trip() {
    let mut mem = small_memory();
    mem.write16(2, 0xBEEF).unwrap();
    assert_eq!(mem.read16(2), Ok(0xBEEF));
}

#[test]
fn word_round_trip() {
    let mut mem = small_memory();
    mem.write32(4, 0xDEAD_BEEF).unwrap();
    assert_eq!(mem.read32(4), Ok(0xDEAD_BEEF));
}

#[test]
fn multi_byte_access_is_little_endian() {
    let mut mem = small_memory();
    mem.write32(0, 0x1122_3344).unwrap();
    assert_eq!(mem.read8(0), Ok(0x44));
    assert_eq!(mem.read8(1), Ok(0x33));
    assert_eq!(mem.read8(2), Ok(0x22));
    assert_eq!(mem.read8(3), Ok(0x11));
    assert_eq!(mem.read16(0), Ok(0x3344));
    assert_eq!(mem.read16(2), Ok(0x1122));
}

#[test]
fn unaligned_access_succeeds() {
    let mut mem = small_memory();
    mem.write32(1, 0xCAFE_BABE).unwrap();
    assert_eq!(mem.read32(1), Ok(0xCAFE_BABE));
    mem.write16(7, 0x0102).unwrap();
    assert_eq!(mem.read16(7), Ok(0x0102));
}

// ══════════════════════════════════════════════════════════
// 2. Growth
// ══════════════════════════════════════════════════════════

#[test]
fn store_past_capacity_grows_and_reads_back() {
    let mut mem = small_memory();
    assert_eq!(mem.capacity(), 64);
    mem.write8(100, 0x5A).unwrap();
    assert_eq!(mem.read8(100), Ok(0x5A));
    assert!(mem.capacity() > 100);
}

#[test]
fn growth_doubles_capacity() {
    let mut mem = small_memory();
    mem.write8(64, 1).unwrap();
    // max(65, 64 * 2) = 128.
    assert_eq!(mem.capacity(), 128);
}

#[test]
fn growth_covers_large_jumps_past_doubling() {
    let mut mem = small_memory();
    mem.write8(1000, 1).unwrap();
    assert_eq!(mem.capacity(), 1001);
}

#[test]
fn grown_memory_is_zero_filled() {
    let mut mem = small_memory();
    mem.write8(200, 1).unwrap();
    assert_eq!(mem.read8(199), Ok(0));
    assert_eq!(mem.read32(150), Ok(0));
}

#[test]
fn read_past_capacity_also_grows() {
    let mut mem = small_memory();
    assert_eq!(mem.read32(500), Ok(0));
    assert!(mem.capacity() >= 504);
}

#[test]
fn growth_is_capped_by_the_ceiling() {
    let mut mem = small_memory();
    assert_eq!(mem.write32(4092, 7), Ok(()));
    assert_eq!(
        mem.write32(4093, 7),
        Err(Fault::MemoryLimit {
            addr: 4093,
            limit: 4096
        })
    );
}

#[test]
fn access_at_end_of_address_space_faults_instead_of_wrapping() {
    let mut mem = small_memory();
    assert_eq!(
        mem.read32(u32::MAX - 1),
        Err(Fault::MemoryLimit {
            addr: u32::MAX - 1,
            limit: 4096
        })
    );
}

// ══════════════════════════════════════════════════════════
// 3. Code loading
// ══════════════════════════════════════════════════════════

#[test]
fn load_code_places_bytes_at_the_code_base() {
    let mut mem = small_memory();
    mem.load_code(&[0x01, 0x02, 0x03, 0x04]).unwrap();
    assert_eq!(mem.code_base(), 0x10);
    assert_eq!(mem.code_size(), 4);
    assert_eq!(mem.read32(0x10), Ok(0x0403_0201));
}

#[test]
fn load_code_grows_when_needed() {
    let mut mem = Memory::new(&MemoryLayout {
        code_base: 0x100,
        initial_capacity: 16,
        capacity_limit: 4096,
        ..MemoryLayout::default()
    });
    mem.load_code(&[0xAA; 8]).unwrap();
    assert_eq!(mem.read8(0x100), Ok(0xAA));
    assert_eq!(mem.read8(0x107), Ok(0xAA));
    assert!(mem.capacity() >= 0x108);
}

#[test]
fn load_code_past_ceiling_faults() {
    let mut mem = Memory::new(&MemoryLayout {
        code_base: 4090,
        initial_capacity: 16,
        capacity_limit: 4096,
        ..MemoryLayout::default()
    });
    assert!(matches!(
        mem.load_code(&[0; 8]),
        Err(Fault::MemoryLimit { .. })
    ));
}
