//! Integer multiply and divide on the FP units.
//!
//! `MULT`, `MULTU`, `DIV` and `DIVU` read their operands from FP registers
//! as 32-bit integers, compute in `f64`, and truncate toward zero. A product
//! keeps the low 32 bits of its `f64` value, which equal the exact low word
//! only while the product fits in 53 bits. A quotient that does not fit
//! saturates, and `0 / 0` yields zero.

use crate::core::pipeline::signals::{FpuOp, Precision};

/// Executes an integer operation on the FP datapath.
///
/// # Returns
///
/// The 32-bit result, zero-extended. Non-multiply/divide kinds return `0`.
pub fn execute(kind: FpuOp, precision: Precision, a: u64, b: u64) -> u64 {
    let signed = precision == Precision::Int;
    let (x, y) = if signed {
        (f64::from(a as u32 as i32), f64::from(b as u32 as i32))
    } else {
        (f64::from(a as u32), f64::from(b as u32))
    };
    match kind {
        FpuOp::Mul => {
            let p = (x * y).trunc();
            if signed {
                u64::from(p as i64 as u32)
            } else {
                u64::from(p as u64 as u32)
            }
        }
        FpuOp::Div => {
            let q = (x / y).trunc();
            if signed {
                u64::from(q as i32 as u32)
            } else {
                u64::from(q as u32)
            }
        }
        _ => 0,
    }
}
