//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer operation rules of the Execute stage.
//! Operands and results are two's-complement 32-bit words carried in the low
//! half of a `u64`; the upper half of every result is zero except for
//! [`AluOp::Move`], which passes a double-precision register pair through
//! untouched.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, LoadHigh, Move
//! - [`logic`]:      And, Or, Xor and the six set-on-compare operations
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations.
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use super::Operation;
use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand; the low 32 bits are used.
    /// * `b`  - Second operand, shift amount or immediate.
    ///
    /// # Returns
    ///
    /// The result, zero-extended from 32 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlxsim_core::core::pipeline::signals::AluOp;
    /// use dlxsim_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 7), 12);
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 31), 0xFFFF_FFFF);
    /// assert_eq!(Alu::execute(AluOp::Sle, 3, 3), 1);
    /// ```
    pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::LoadHigh | AluOp::Move => {
                arithmetic::execute(op, a, b)
            }

            AluOp::And
            | AluOp::Or
            | AluOp::Xor
            | AluOp::Seq
            | AluOp::Sne
            | AluOp::Slt
            | AluOp::Sgt
            | AluOp::Sle
            | AluOp::Sge => logic::execute(op, a, b),

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}

impl Operation for AluOp {
    fn evaluate(self, a: u64, b: u64) -> u64 {
        Alu::execute(self, a, b)
    }
}
