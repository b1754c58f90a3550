//! Floating-Point Unit (FPU).
//!
//! This module implements the operation rules of the three FP unit classes.
//! Operands arrive as raw bit patterns and are reinterpreted per the
//! operation's [`Precision`]:
//! 1. **Single:** the low 32 bits as an `f32`.
//! 2. **Double:** all 64 bits as an `f64` (a register pair).
//! 3. **Int / UInt:** the low 32 bits as an integer, for `MULT`, `DIV`,
//!    `MULTU`, `DIVU` and the integer conversions.
//!
//! Arithmetic results are returned in the operand format. Comparisons return
//! 0 or 1 and are written to the FP status flag.

/// Conversions between single, double and integer formats.
pub mod convert;

/// Integer multiply and divide computed through the `f64` datapath.
pub mod integer;

use super::Operation;
use crate::core::pipeline::signals::{FpOp, FpuOp, Precision};

/// Floating-Point Unit (FPU) operation rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fpu;

impl Fpu {
    /// Executes an FPU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation and its operand format.
    /// * `a`  - First operand bits.
    /// * `b`  - Second operand bits (ignored by conversions).
    ///
    /// # Returns
    ///
    /// The result bits, zero-extended to 64 bits for 32-bit formats.
    pub fn execute(op: FpOp, a: u64, b: u64) -> u64 {
        if let FpuOp::Convert(to) = op.kind {
            return convert::execute(op.precision, to, a);
        }
        match op.precision {
            Precision::Single => {
                let (x, y) = (f32::from_bits(a as u32), f32::from_bits(b as u32));
                match arith(op.kind, f64::from(x), f64::from(y), |x, y| {
                    compute_f32(op.kind, x as f32, y as f32)
                }) {
                    Outcome::Value(v) => u64::from(v.to_bits()),
                    Outcome::Flag(f) => u64::from(f),
                }
            }
            Precision::Double => {
                let (x, y) = (f64::from_bits(a), f64::from_bits(b));
                match arith(op.kind, x, y, |x, y| compute_f64(op.kind, x, y)) {
                    Outcome::Value(v) => v.to_bits(),
                    Outcome::Flag(f) => u64::from(f),
                }
            }
            Precision::Int | Precision::UInt => integer::execute(op.kind, op.precision, a, b),
        }
    }
}

impl Operation for FpOp {
    fn evaluate(self, a: u64, b: u64) -> u64 {
        Fpu::execute(self, a, b)
    }
}

/// Result of an arithmetic or comparison operation.
enum Outcome<V> {
    Value(V),
    Flag(bool),
}

/// Evaluates comparisons directly and defers arithmetic to `compute`.
fn arith<V>(kind: FpuOp, x: f64, y: f64, compute: impl FnOnce(f64, f64) -> V) -> Outcome<V> {
    match kind {
        FpuOp::Eq => Outcome::Flag(x == y),
        FpuOp::Ne => Outcome::Flag(x != y),
        FpuOp::Lt => Outcome::Flag(x < y),
        FpuOp::Gt => Outcome::Flag(x > y),
        FpuOp::Le => Outcome::Flag(x <= y),
        FpuOp::Ge => Outcome::Flag(x >= y),
        _ => Outcome::Value(compute(x, y)),
    }
}

fn compute_f32(kind: FpuOp, x: f32, y: f32) -> f32 {
    match kind {
        FpuOp::Add => x + y,
        FpuOp::Sub => x - y,
        FpuOp::Mul => x * y,
        FpuOp::Div => x / y,
        _ => 0.0,
    }
}

fn compute_f64(kind: FpuOp, x: f64, y: f64) -> f64 {
    match kind {
        FpuOp::Add => x + y,
        FpuOp::Sub => x - y,
        FpuOp::Mul => x * y,
        FpuOp::Div => x / y,
        _ => 0.0,
    }
}
