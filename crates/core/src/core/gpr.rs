//! General-Purpose Register File.
//!
//! This module implements the integer register file. It performs:
//! 1. **Storage:** Maintains 32 registers (`x0`-`x31`) of 32 bits each.
//! 2. **Invariant Enforcement:** Register `x0` is hardwired to zero; reads
//!    return 0 and writes are discarded, no matter what was written.
//! 3. **Debugging:** A utility for dumping the complete register state.

/// General-purpose register file.
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a register file with every register initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value of the register. Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register. Writes to `x0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all registers to stderr.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            eprintln!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
