//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap at 32 bits. `LoadHigh` places the low
//! half-word of operand B in the upper half of the result.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    let (x, y) = (a as u32, b as u32);
    match op {
        AluOp::Add => u64::from(x.wrapping_add(y)),
        AluOp::Sub => u64::from(x.wrapping_sub(y)),
        AluOp::LoadHigh => u64::from(y << 16),
        AluOp::Move => a,
        _ => 0,
    }
}
