//! Flat Virtual Memory.
//!
//! A byte-addressable 32-bit address space backed by a growable, zero-filled
//! vector. It provides:
//! 1. **Typed Access:** Little-endian 8/16/32-bit loads and stores; unaligned
//!    accesses are allowed and succeed.
//! 2. **Auto-Growth:** Any access past the current capacity doubles the
//!    backing store (or extends it to cover the access, whichever is larger),
//!    up to a configured ceiling. New bytes are zero.
//! 3. **Code Loading:** Placement of an instruction byte stream at the code
//!    base, recording its size for program-counter bounds checks.
//!
//! Memory is owned by exactly one interpreter instance and is never shrunk.

use crate::config::MemoryLayout;
use crate::fault::Fault;

/// Flat byte-addressable storage with a fixed segment layout.
pub struct Memory {
    bytes: Vec<u8>,
    code_base: u32,
    code_size: u32,
    capacity_limit: usize,
}

impl Memory {
    /// Creates a memory covering `[0, initial_capacity)`, zero-filled.
    pub fn new(layout: &MemoryLayout) -> Self {
        Self {
            bytes: vec![0; layout.initial_capacity],
            code_base: layout.code_base,
            code_size: 0,
            capacity_limit: layout.capacity_limit,
        }
    }

    /// Grows the backing store to cover `[addr, addr + width)`.
    ///
    /// The new capacity is the larger of the access end and double the
    /// current capacity, clamped to the configured ceiling. Widening to u64
    /// keeps end-of-address-space accesses from wrapping.
    fn ensure_capacity(&mut self, addr: u32, width: u32) -> Result<(), Fault> {
        let end = addr as u64 + width as u64;
        if end <= self.bytes.len() as u64 {
            return Ok(());
        }
        if end > self.capacity_limit as u64 {
            return Err(Fault::MemoryLimit {
                addr,
                limit: self.capacity_limit,
            });
        }
        let doubled = (self.bytes.len() as u64).saturating_mul(2);
        let new_len = end.max(doubled).min(self.capacity_limit as u64);
        self.bytes.resize(new_len as usize, 0);
        Ok(())
    }

    /// Copies an instruction byte stream to the code base and records its
    /// size.
    pub fn load_code(&mut self, code: &[u8]) -> Result<(), Fault> {
        self.code_size = code.len() as u32;
        self.ensure_capacity(self.code_base, code.len() as u32)?;
        let base = self.code_base as usize;
        self.bytes[base..base + code.len()].copy_from_slice(code);
        Ok(())
    }

    /// Reads one byte.
    pub fn read8(&mut self, addr: u32) -> Result<u8, Fault> {
        self.ensure_capacity(addr, 1)?;
        Ok(self.bytes[addr as usize])
    }

    /// Writes one byte.
    pub fn write8(&mut self, addr: u32, val: u8) -> Result<(), Fault> {
        self.ensure_capacity(addr, 1)?;
        self.bytes[addr as usize] = val;
        Ok(())
    }

    /// Reads a little-endian halfword.
    pub fn read16(&mut self, addr: u32) -> Result<u16, Fault> {
        self.ensure_capacity(addr, 2)?;
        let i = addr as usize;
        Ok(u16::from_le_bytes([self.bytes[i], self.bytes[i + 1]]))
    }

    /// Writes a little-endian halfword.
    pub fn write16(&mut self, addr: u32, val: u16) -> Result<(), Fault> {
        self.ensure_capacity(addr, 2)?;
        let i = addr as usize;
        self.bytes[i..i + 2].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Reads a little-endian word.
    pub fn read32(&mut self, addr: u32) -> Result<u32, Fault> {
        self.ensure_capacity(addr, 4)?;
        let i = addr as usize;
        Ok(u32::from_le_bytes([
            self.bytes[i],
            self.bytes[i + 1],
            self.bytes[i + 2],
            self.bytes[i + 3],
        ]))
    }

    /// Writes a little-endian word.
    pub fn write32(&mut self, addr: u32, val: u32) -> Result<(), Fault> {
        self.ensure_capacity(addr, 4)?;
        let i = addr as usize;
        self.bytes[i..i + 4].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Base address of the code segment.
    pub fn code_base(&self) -> u32 {
        self.code_base
    }

    /// Size in bytes of the loaded code.
    pub fn code_size(&self) -> u32 {
        self.code_size
    }

    /// Current capacity of the backing store in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }
}
