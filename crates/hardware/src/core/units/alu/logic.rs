//! ALU logical and comparison operations.
//!
//! Comparisons are signed and produce 0 or 1.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or set-on-compare operation.
///
/// # Arguments
///
/// * `op` - The ALU operation (must be a logic or comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 32-bit result, zero-extended. Returns `0` for other opcodes.
pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    let (x, y) = (a as u32, b as u32);
    let (sx, sy) = (x as i32, y as i32);
    match op {
        AluOp::And => u64::from(x & y),
        AluOp::Or => u64::from(x | y),
        AluOp::Xor => u64::from(x ^ y),
        AluOp::Seq => u64::from(sx == sy),
        AluOp::Sne => u64::from(sx != sy),
        AluOp::Slt => u64::from(sx < sy),
        AluOp::Sgt => u64::from(sx > sy),
        AluOp::Sle => u64::from(sx <= sy),
        AluOp::Sge => u64::from(sx >= sy),
        _ => 0,
    }
}
