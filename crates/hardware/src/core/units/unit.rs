//! Single functional unit.
//!
//! A unit is a three-state machine:
//! 1. **Idle:** Accepts a `load`.
//! 2. **Busy:** Holds operands and counts down its remaining cycles on each tick.
//! 3. **Done:** Holds the computed result until the engine takes it.
//!
//! The result is computed on the tick that brings the countdown to zero, so
//! a unit loaded with latency `n` reports Done after `n` ticks.

use super::{FunctionalUnit, Operation, UnitClass};
use crate::common::SimError;

/// State of one functional unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitState<O, T> {
    /// No operation in progress.
    Idle,

    /// Operation in progress.
    Busy {
        /// First operand bits.
        a: u64,
        /// Second operand bits.
        b: u64,
        /// Operation.
        op: O,
        /// Ticks until the result is computed.
        remaining: u32,
        /// Owner of the result.
        tag: T,
    },

    /// Result ready and not yet taken.
    Done {
        /// Result bits.
        result: u64,
        /// Owner of the result.
        tag: T,
    },
}

impl<O, T> Default for UnitState<O, T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// One functional unit of a given class.
#[derive(Clone, Debug)]
pub struct Unit<O, T> {
    class: UnitClass,
    state: UnitState<O, T>,
}

impl<O: Operation, T> Unit<O, T> {
    /// Creates an idle unit.
    pub const fn new(class: UnitClass) -> Self {
        Self {
            class,
            state: UnitState::Idle,
        }
    }

    /// Returns the unit class.
    pub const fn class(&self) -> UnitClass {
        self.class
    }

    /// Returns the current state.
    pub const fn state(&self) -> &UnitState<O, T> {
        &self.state
    }

    /// Returns the tag of the operation held in Busy or Done.
    pub const fn tag(&self) -> Option<&T> {
        match &self.state {
            UnitState::Idle => None,
            UnitState::Busy { tag, .. } | UnitState::Done { tag, .. } => Some(tag),
        }
    }

    /// Returns the tag if the unit is Done.
    pub const fn done_tag(&self) -> Option<&T> {
        match &self.state {
            UnitState::Done { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Returns `true` if the unit holds a finished result.
    pub const fn is_done(&self) -> bool {
        matches!(self.state, UnitState::Done { .. })
    }

    /// Discards any operation in progress.
    pub fn reset(&mut self) {
        self.state = UnitState::Idle;
    }
}

impl<O: Operation, T> FunctionalUnit for Unit<O, T> {
    type Op = O;
    type Tag = T;

    fn load(&mut self, tag: T, a: u64, b: u64, op: O, latency: u32) -> Result<(), SimError> {
        if !self.is_idle() {
            return Err(SimError::UnitBusy { class: self.class });
        }
        self.state = UnitState::Busy {
            a,
            b,
            op,
            remaining: latency.max(1),
            tag,
        };
        Ok(())
    }

    fn tick(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            UnitState::Busy {
                a,
                b,
                op,
                remaining,
                tag,
            } => {
                if remaining <= 1 {
                    UnitState::Done {
                        result: op.evaluate(a, b),
                        tag,
                    }
                } else {
                    UnitState::Busy {
                        a,
                        b,
                        op,
                        remaining: remaining - 1,
                        tag,
                    }
                }
            }
            other => other,
        };
    }

    fn take_result(&mut self) -> Option<(u64, T)> {
        match std::mem::take(&mut self.state) {
            UnitState::Done { result, tag } => Some((result, tag)),
            other => {
                self.state = other;
                None
            }
        }
    }

    fn is_idle(&self) -> bool {
        matches!(self.state, UnitState::Idle)
    }
}
