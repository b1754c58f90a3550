//! Tag-based scoreboard for register dependency tracking.
//!
//! Maps each architectural register slot to the tag of its youngest in-flight
//! writer, or `None` if the register file holds the current value. Dispatch
//! marks a destination, and Writeback clears it only if the committing tag
//! still matches, so an older writer never unmarks a younger one.

use crate::common::constants::{NUM_FPRS, NUM_GPRS};
use crate::core::pipeline::latches::InstTag;
use crate::core::pipeline::signals::{Dest, RegSlot};

/// Tag-based scoreboard over integer registers, FP slots and the FP status flag.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    /// Integer registers (`r0` always `None`).
    gpr: [Option<InstTag>; NUM_GPRS],
    /// FP register slots.
    fpr: [Option<InstTag>; NUM_FPRS],
    /// FP status flag.
    fp_status: Option<InstTag>,
}

impl Scoreboard {
    /// Create a new scoreboard with no pending writers.
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, slot: RegSlot) -> Option<&mut Option<InstTag>> {
        match slot {
            RegSlot::Int(0) => None,
            RegSlot::Int(r) => self.gpr.get_mut(usize::from(r)),
            RegSlot::Float(f) => self.fpr.get_mut(usize::from(f)),
            RegSlot::FpStatus => Some(&mut self.fp_status),
        }
    }

    /// Returns the tag of the youngest pending writer of `slot`.
    pub fn producer(&self, slot: RegSlot) -> Option<InstTag> {
        match slot {
            RegSlot::Int(0) => None,
            RegSlot::Int(r) => self.gpr.get(usize::from(r)).copied().flatten(),
            RegSlot::Float(f) => self.fpr.get(usize::from(f)).copied().flatten(),
            RegSlot::FpStatus => self.fp_status,
        }
    }

    /// Marks every slot of `dest` as written by `tag`.
    pub fn set_producer(&mut self, dest: Dest, tag: InstTag) {
        for slot in dest.slots().iter() {
            if let Some(e) = self.entry(slot) {
                *e = Some(tag);
            }
        }
    }

    /// Clears the slots of `dest`, but only where `tag` is still the producer.
    pub fn clear_if_match(&mut self, dest: Dest, tag: InstTag) {
        for slot in dest.slots().iter() {
            if let Some(e) = self.entry(slot) {
                if *e == Some(tag) {
                    *e = None;
                }
            }
        }
    }

    /// Returns `true` if no register has a pending writer.
    pub fn is_clear(&self) -> bool {
        self.fp_status.is_none()
            && self.gpr.iter().all(Option::is_none)
            && self.fpr.iter().all(Option::is_none)
    }

    /// Clears all entries.
    pub fn flush(&mut self) {
        *self = Self::default();
    }

    /// Rebuilds the scoreboard from the surviving in-flight instructions.
    ///
    /// Writers are applied oldest first so the youngest wins each slot.
    pub fn rebuild<I>(&mut self, survivors: I)
    where
        I: IntoIterator<Item = (InstTag, Dest)>,
    {
        self.flush();
        let mut all: Vec<_> = survivors.into_iter().collect();
        all.sort_by_key(|(tag, _)| *tag);
        for (tag, dest) in all {
            self.set_producer(dest, tag);
        }
    }
}
