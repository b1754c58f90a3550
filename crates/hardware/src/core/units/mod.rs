//! Execution units and functional components.
//!
//! This module contains the functional units the Execute stage dispatches to:
//! 1. **Operation Rules:** Integer ALU ([`alu`]) and floating-point ([`fpu`]) arithmetic.
//! 2. **Unit State Machine:** [`Unit`], one multi-cycle resource moving through
//!    Idle, Busy and Done.
//! 3. **Pools:** [`UnitPool`], a fixed-order group of identical units of one class.
//!
//! Every unit shares the [`FunctionalUnit`] capability interface; the classes
//! differ only in the [`Operation`] they evaluate and the latency they are
//! loaded with.

/// Integer ALU operation rules.
pub mod alu;

/// Floating-point operation rules.
pub mod fpu;

/// Groups of identical units tried in a stable order.
pub mod pool;

/// The single-unit Idle/Busy/Done state machine.
pub mod unit;

use std::fmt;

use crate::common::SimError;

pub use pool::UnitPool;
pub use unit::{Unit, UnitState};

/// Class of functional unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitClass {
    /// Integer ALU, fixed one-cycle latency.
    IntAlu,
    /// FP adder: add, subtract, compare, convert.
    FpAdd,
    /// FP multiplier, including integer multiply.
    FpMul,
    /// FP divider, including integer divide.
    FpDiv,
}

impl UnitClass {
    /// Every class, in the order results are scanned.
    pub const ALL: [Self; 4] = [Self::IntAlu, Self::FpAdd, Self::FpMul, Self::FpDiv];
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IntAlu => "int-alu",
            Self::FpAdd => "fp-add",
            Self::FpMul => "fp-mul",
            Self::FpDiv => "fp-div",
        };
        f.write_str(name)
    }
}

/// An operation code a functional unit knows how to evaluate.
pub trait Operation: Copy + fmt::Debug {
    /// Computes the result from two raw operand bit patterns.
    fn evaluate(self, a: u64, b: u64) -> u64;
}

/// Capability interface shared by every functional unit.
///
/// A unit must be ticked exactly once per clock whether or not it is loaded.
pub trait FunctionalUnit {
    /// Operation code accepted by [`FunctionalUnit::load`].
    type Op: Operation;

    /// Identifies the instruction that owns the result.
    type Tag;

    /// Starts an operation.
    ///
    /// # Arguments
    ///
    /// * `tag` - Owner of the result.
    /// * `a` - First operand bits.
    /// * `b` - Second operand bits.
    /// * `op` - Operation to evaluate.
    /// * `latency` - Cycles until the result is ready; at least one.
    ///
    /// # Returns
    ///
    /// [`SimError::UnitBusy`] if the unit is not idle. The engine never
    /// loads a unit without checking, so this is a programming error.
    fn load(
        &mut self,
        tag: Self::Tag,
        a: u64,
        b: u64,
        op: Self::Op,
        latency: u32,
    ) -> Result<(), SimError>;

    /// Advances one clock.
    fn tick(&mut self);

    /// Takes the finished result, returning the unit to Idle.
    fn take_result(&mut self) -> Option<(u64, Self::Tag)>;

    /// Returns `true` if the unit can accept a new operation.
    fn is_idle(&self) -> bool;
}
