//! DLX Integer Register File.
//!
//! This module implements the 32 integer registers. It performs the following:
//! 1. **Storage:** Maintains registers `r0`-`r31` as signed 32-bit words.
//! 2. **Invariant Enforcement:** Register `r0` is hard-wired to zero.
//! 3. **Debugging:** Dumps the register state to the trace log.

use crate::common::constants::NUM_GPRS;

/// Integer register file.
///
/// Indices are taken modulo 32, matching the 5-bit register fields of the
/// instruction word.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [i32; NUM_GPRS],
}

impl Gpr {
    /// Creates a new register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an integer register. Register `r0` always returns 0.
    pub fn read(&self, idx: usize) -> i32 {
        let idx = idx % NUM_GPRS;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes an integer register. Writes to `r0` are discarded.
    pub fn write(&mut self, idx: usize, val: i32) {
        let idx = idx % NUM_GPRS;
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the register state to the trace log, two registers per line.
    pub fn dump(&self) {
        for i in (0..NUM_GPRS).step_by(2) {
            tracing::trace!(
                "r{:<2}={:#010x} r{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}
