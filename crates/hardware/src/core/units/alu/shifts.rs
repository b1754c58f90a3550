//! ALU shift operations.
//!
//! Shift amounts are masked to 5 bits (0-31).

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount.
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount; bits above the low five are ignored.
///
/// # Returns
///
/// The 32-bit result, zero-extended. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    let sh = b as u32 & SHAMT_MASK;
    match op {
        AluOp::Sll => u64::from((a as u32) << sh),
        AluOp::Srl => u64::from((a as u32) >> sh),
        AluOp::Sra => u64::from(((a as i32) >> sh) as u32),
        _ => 0,
    }
}
