//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, a single interface over the
//! three pieces of architectural register state:
//! 1. **Integer Registers:** 32 signed 32-bit registers, `r0` hard-wired to zero.
//! 2. **Floating-Point Registers:** 32 single-precision slots, paired for doubles.
//! 3. **FP Status Flag:** The boolean written by FP comparisons and tested by `BFPT`/`BFPF`.

use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;

/// Unified register file containing integer, floating-point and status state.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
    fp_status: bool,
}

impl RegisterFile {
    /// Creates a new register file with all registers cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an integer register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `r0` always returns 0.
    pub fn read(&self, idx: usize) -> i32 {
        self.gpr.read(idx)
    }

    /// Writes an integer register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `r0` are ignored.
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: i32) {
        self.gpr.write(idx, val);
    }

    /// Reads the raw bits of a single-precision register slot.
    pub fn read_f(&self, idx: usize) -> u32 {
        self.fpr.read(idx)
    }

    /// Writes the raw bits of a single-precision register slot.
    pub fn write_f(&mut self, idx: usize, bits: u32) {
        self.fpr.write(idx, bits);
    }

    /// Reads the double-precision pair starting at `idx`.
    ///
    /// # Returns
    ///
    /// `slot[idx]` as the low word and `slot[idx + 1]` as the high word.
    pub fn read_d(&self, idx: usize) -> u64 {
        self.fpr.read_double(idx)
    }

    /// Writes the double-precision pair starting at `idx`.
    pub fn write_d(&mut self, idx: usize, bits: u64) {
        self.fpr.write_double(idx, bits);
    }

    /// Returns the floating-point status flag.
    pub const fn fp_status(&self) -> bool {
        self.fp_status
    }

    /// Sets the floating-point status flag.
    pub const fn set_fp_status(&mut self, val: bool) {
        self.fp_status = val;
    }

    /// Dumps the register state to the trace log.
    pub fn dump(&self) {
        self.gpr.dump();
        self.fpr.dump();
        tracing::trace!("fpsr={}", u8::from(self.fp_status));
    }
}
