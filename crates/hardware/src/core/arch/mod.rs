//! DLX architectural register state.
//!
//! This module contains the two register files of the machine:
//! 1. **GPRs:** 32 integer registers with `r0` hard-wired to zero.
//! 2. **FPRs:** 32 single-precision slots, paired for double precision.

/// Floating-point register file.
pub mod fpr;

/// Integer register file.
pub mod gpr;
