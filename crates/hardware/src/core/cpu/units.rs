//! Functional-unit complement of the CPU.
//!
//! Groups the integer ALU pool and the three floating-point pools so the
//! Execute stage can address them by [`UnitClass`].

use crate::common::SimError;
use crate::common::constants::INT_ALU_LATENCY;
use crate::config::Config;
use crate::core::pipeline::latches::{InFlight, InstTag};
use crate::core::pipeline::signals::{AluOp, FpOp, FpuOp};
use crate::core::units::{UnitClass, UnitPool};

/// Every functional unit of the engine, one pool per class.
#[derive(Clone, Debug)]
pub struct ExecutionUnits {
    /// Integer ALUs.
    pub int_alu: UnitPool<AluOp, InFlight>,
    /// FP adders.
    pub fp_add: UnitPool<FpOp, InFlight>,
    /// FP multipliers.
    pub fp_mul: UnitPool<FpOp, InFlight>,
    /// FP dividers.
    pub fp_div: UnitPool<FpOp, InFlight>,
}

impl ExecutionUnits {
    /// Builds the pools described by `config`.
    pub fn new(config: &Config) -> Self {
        let units = &config.units;
        Self {
            int_alu: UnitPool::new(UnitClass::IntAlu, units.int_alu.count, INT_ALU_LATENCY),
            fp_add: UnitPool::new(UnitClass::FpAdd, units.fp_add.count, units.fp_add.latency),
            fp_mul: UnitPool::new(UnitClass::FpMul, units.fp_mul.count, units.fp_mul.latency),
            fp_div: UnitPool::new(UnitClass::FpDiv, units.fp_div.count, units.fp_div.latency),
        }
    }

    fn fp_pool_mut(&mut self, fp: FpOp) -> &mut UnitPool<FpOp, InFlight> {
        match fp.kind {
            FpuOp::Mul => &mut self.fp_mul,
            FpuOp::Div => &mut self.fp_div,
            _ => &mut self.fp_add,
        }
    }

    /// Advances every unit one clock.
    pub fn tick_all(&mut self) {
        self.int_alu.tick_all();
        self.fp_add.tick_all();
        self.fp_mul.tick_all();
        self.fp_div.tick_all();
    }

    /// Returns `true` if a unit of `class` can accept an operation.
    pub fn has_idle(&self, class: UnitClass) -> bool {
        match class {
            UnitClass::IntAlu => self.int_alu.has_idle(),
            UnitClass::FpAdd => self.fp_add.has_idle(),
            UnitClass::FpMul => self.fp_mul.has_idle(),
            UnitClass::FpDiv => self.fp_div.has_idle(),
        }
    }

    /// Returns `true` if no unit of any class is Busy or Done.
    pub fn all_idle(&self) -> bool {
        self.int_alu.all_idle()
            && self.fp_add.all_idle()
            && self.fp_mul.all_idle()
            && self.fp_div.all_idle()
    }

    /// Number of units of `class` that are Busy or Done.
    pub fn occupied(&self, class: UnitClass) -> usize {
        match class {
            UnitClass::IntAlu => self.int_alu.occupied(),
            UnitClass::FpAdd => self.fp_add.occupied(),
            UnitClass::FpMul => self.fp_mul.occupied(),
            UnitClass::FpDiv => self.fp_div.occupied(),
        }
    }

    /// Loads an integer ALU.
    pub fn dispatch_int(&mut self, op: InFlight, a: u64, b: u64, alu: AluOp) -> Result<(), SimError> {
        self.int_alu.dispatch(op, a, b, alu)
    }

    /// Loads the FP unit class that executes `fp`.
    pub fn dispatch_fp(&mut self, op: InFlight, a: u64, b: u64, fp: FpOp) -> Result<(), SimError> {
        self.fp_pool_mut(fp).dispatch(op, a, b, fp)
    }

    /// Returns the class's first finished instruction, if any.
    pub fn peek_done(&self, class: UnitClass) -> Option<&InFlight> {
        match class {
            UnitClass::IntAlu => self.int_alu.peek_done(),
            UnitClass::FpAdd => self.fp_add.peek_done(),
            UnitClass::FpMul => self.fp_mul.peek_done(),
            UnitClass::FpDiv => self.fp_div.peek_done(),
        }
    }

    /// Takes the class's first finished result.
    pub fn take_done(&mut self, class: UnitClass) -> Option<(u64, InFlight)> {
        match class {
            UnitClass::IntAlu => self.int_alu.take_done(),
            UnitClass::FpAdd => self.fp_add.take_done(),
            UnitClass::FpMul => self.fp_mul.take_done(),
            UnitClass::FpDiv => self.fp_div.take_done(),
        }
    }

    /// Discards every operation younger than `tag`.
    ///
    /// # Returns
    ///
    /// The number of operations discarded.
    pub fn squash_younger(&mut self, tag: InstTag) -> usize {
        let younger = |op: &InFlight| op.tag > tag;
        self.int_alu.squash(younger)
            + self.fp_add.squash(younger)
            + self.fp_mul.squash(younger)
            + self.fp_div.squash(younger)
    }

    /// Iterates over every instruction held by a unit.
    pub fn in_flight(&self) -> impl Iterator<Item = &InFlight> {
        self.int_alu
            .tags()
            .chain(self.fp_add.tags())
            .chain(self.fp_mul.tags())
            .chain(self.fp_div.tags())
    }
}
