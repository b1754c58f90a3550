//! Global System Constants.
//!
//! This module defines values shared across the simulator:
//! 1. **Architectural Constants:** Register counts, the link register and word size.
//! 2. **Encoding Constants:** The NOP word the latches are cleared to.
//! 3. **Simulation Constants:** The latency of the integer ALU.

/// Number of integer registers (`r0`..`r31`).
pub const NUM_GPRS: usize = 32;

/// Number of single-precision floating-point register slots (`f0`..`f31`).
pub const NUM_FPRS: usize = 32;

/// Register that receives the return address of `JAL` and `JALR`.
pub const LINK_REG: u8 = 31;

/// Size of one instruction word in bytes.
pub const WORD_SIZE: u32 = 4;

/// The all-zero word, decoded as `NOP`.
pub const NOP_WORD: u32 = 0;

/// Cycles an integer ALU operation spends in its unit. Not configurable.
pub const INT_ALU_LATENCY: u32 = 1;

/// Default memory size in bytes (32 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 0x8000;
