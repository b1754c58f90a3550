//! Functional unit pools.
//!
//! A pool owns every unit of one class. Units are always scanned in index
//! order: dispatch uses the first idle unit, and the first Done unit is the
//! class's candidate for the single EX/MEM slot each cycle.

use super::unit::Unit;
use super::{FunctionalUnit, Operation, UnitClass};
use crate::common::SimError;

/// Fixed-size group of identical functional units.
#[derive(Clone, Debug)]
pub struct UnitPool<O, T> {
    class: UnitClass,
    latency: u32,
    units: Vec<Unit<O, T>>,
}

impl<O: Operation, T> UnitPool<O, T> {
    /// Creates a pool of `count` idle units loaded with `latency`.
    pub fn new(class: UnitClass, count: usize, latency: u32) -> Self {
        Self {
            class,
            latency,
            units: (0..count).map(|_| Unit::new(class)).collect(),
        }
    }

    /// Returns the pool class.
    pub const fn class(&self) -> UnitClass {
        self.class
    }

    /// Returns the latency every operation is loaded with.
    pub const fn latency(&self) -> u32 {
        self.latency
    }

    /// Returns the units in scan order.
    pub fn units(&self) -> &[Unit<O, T>] {
        &self.units
    }

    /// Ticks every unit once.
    pub fn tick_all(&mut self) {
        for unit in &mut self.units {
            unit.tick();
        }
    }

    /// Returns `true` if some unit can accept an operation.
    pub fn has_idle(&self) -> bool {
        self.units.iter().any(Unit::is_idle)
    }

    /// Returns `true` if every unit is idle.
    pub fn all_idle(&self) -> bool {
        self.units.iter().all(Unit::is_idle)
    }

    /// Number of units currently Busy or Done.
    pub fn occupied(&self) -> usize {
        self.units.iter().filter(|u| !u.is_idle()).count()
    }

    /// Loads the first idle unit.
    ///
    /// # Returns
    ///
    /// [`SimError::UnitBusy`] if no unit is idle. Callers check
    /// [`UnitPool::has_idle`] first and stall instead.
    pub fn dispatch(&mut self, tag: T, a: u64, b: u64, op: O) -> Result<(), SimError> {
        let latency = self.latency;
        match self.units.iter_mut().find(|u| u.is_idle()) {
            Some(unit) => unit.load(tag, a, b, op, latency),
            None => Err(SimError::UnitBusy { class: self.class }),
        }
    }

    /// Returns the tag of the first Done unit.
    pub fn peek_done(&self) -> Option<&T> {
        self.units.iter().find_map(Unit::done_tag)
    }

    /// Takes the result of the first Done unit.
    pub fn take_done(&mut self) -> Option<(u64, T)> {
        self.units
            .iter_mut()
            .find(|u| u.is_done())
            .and_then(|u| u.take_result())
    }

    /// Resets every unit whose operation matches `pred`.
    ///
    /// # Returns
    ///
    /// The number of operations discarded.
    pub fn squash(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let mut squashed = 0;
        for unit in &mut self.units {
            if unit.tag().is_some_and(&pred) {
                unit.reset();
                squashed += 1;
            }
        }
        squashed
    }

    /// Iterates over the tags of every Busy or Done unit.
    pub fn tags(&self) -> impl Iterator<Item = &T> {
        self.units.iter().filter_map(Unit::tag)
    }
}
