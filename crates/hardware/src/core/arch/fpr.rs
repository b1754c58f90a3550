//! DLX Floating-Point Register File.
//!
//! This module implements the floating-point register file. It performs the following:
//! 1. **Storage:** Maintains 32 single-precision slots (`f0`-`f31`) as raw bit patterns.
//! 2. **Pairing:** A double occupies two adjacent slots, low word first.
//! 3. **Debugging:** Dumps the register state to the trace log.

use crate::common::constants::NUM_FPRS;

/// Floating-point register file.
///
/// Slots hold bit patterns, not host floats, so values move between the
/// register file and the pipeline without reinterpretation.
#[derive(Clone, Debug, Default)]
pub struct Fpr {
    slots: [u32; NUM_FPRS],
}

impl Fpr {
    /// Creates a new register file with every slot set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the raw bits of slot `idx`.
    pub fn read(&self, idx: usize) -> u32 {
        self.slots[idx % NUM_FPRS]
    }

    /// Writes the raw bits of slot `idx`.
    pub fn write(&mut self, idx: usize, bits: u32) {
        self.slots[idx % NUM_FPRS] = bits;
    }

    /// Reads the double stored in slots `idx` (low word) and `idx + 1` (high word).
    ///
    /// The high slot wraps from `f31` to `f0`.
    pub fn read_double(&self, idx: usize) -> u64 {
        let lo = u64::from(self.read(idx));
        let hi = u64::from(self.read(idx + 1));
        lo | (hi << 32)
    }

    /// Writes a double into slots `idx` (low word) and `idx + 1` (high word).
    pub fn write_double(&mut self, idx: usize, bits: u64) {
        self.write(idx, bits as u32);
        self.write(idx + 1, (bits >> 32) as u32);
    }

    /// Dumps the register state to the trace log, two slots per line.
    pub fn dump(&self) {
        for i in (0..NUM_FPRS).step_by(2) {
            tracing::trace!(
                "f{:<2}={:#010x} ({:e}) f{:<2}={:#010x} ({:e})",
                i,
                self.slots[i],
                f32::from_bits(self.slots[i]),
                i + 1,
                self.slots[i + 1],
                f32::from_bits(self.slots[i + 1])
            );
        }
    }
}
