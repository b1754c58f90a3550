//! Data Hazard Detection and Forwarding.
//!
//! This module decides whether an operand can be read this cycle. It provides:
//! 1. **Operand Resolution:** Reads the register file when no write is
//!    pending, otherwise looks the producer up by tag in the forwarding view.
//! 2. **Forwarding View:** Read-only access to the EX/MEM and MEM/WB latches.
//!    EX/MEM supplies every result except load data, and only while
//!    forwarding is enabled. MEM/WB is always visible: its entry commits in
//!    the first half of the next cycle, so a reader behind it sees the value
//!    either way.
//! 3. **WAW Detection:** A destination whose previous writer is still inside
//!    a functional unit cannot be claimed yet.

use crate::common::RegisterFile;
use crate::core::pipeline::latches::{ExMem, InstTag, MemWb, Operand};
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::signals::{Dest, RegSlot, Src};

/// Read-only view of the latches results can be forwarded from.
#[derive(Clone, Copy, Debug)]
pub struct ForwardingView<'a> {
    /// EX/MEM latch.
    pub ex_mem: &'a ExMem,
    /// MEM/WB latch.
    pub mem_wb: &'a MemWb,
    /// Enables the EX/MEM bypass.
    pub enabled: bool,
}

impl ForwardingView<'_> {
    /// Returns the bits of `slot` produced by `tag`, if forwardable.
    ///
    /// # Arguments
    ///
    /// * `tag` - Producer recorded by the scoreboard.
    /// * `slot` - The register slot being read.
    ///
    /// # Returns
    ///
    /// `None` if the producer is not in either latch, is a load still in
    /// EX/MEM, or sits in EX/MEM while forwarding is disabled.
    pub fn lookup(&self, tag: InstTag, slot: RegSlot) -> Option<u64> {
        if let Some(e) = &self.ex_mem.entry {
            if self.enabled && e.op.tag == tag && !e.op.is_load() {
                return Some(e.op.dest().slot_bits(slot, e.result));
            }
        }
        if let Some(e) = &self.mem_wb.entry {
            if e.op.tag == tag {
                return Some(e.op.dest().slot_bits(slot, e.value()));
            }
        }
        None
    }

    /// Returns `true` if `tag` has left Execute and sits in EX/MEM or MEM/WB.
    pub fn holds(&self, tag: InstTag) -> bool {
        self.ex_mem.entry.as_ref().is_some_and(|e| e.op.tag == tag)
            || self.mem_wb.entry.as_ref().is_some_and(|e| e.op.tag == tag)
    }
}

/// Reads the committed bits of one register slot.
pub fn read_slot(regs: &RegisterFile, slot: RegSlot) -> u64 {
    match slot {
        RegSlot::Int(r) => u64::from(regs.read(usize::from(r)) as u32),
        RegSlot::Float(f) => u64::from(regs.read_f(usize::from(f))),
        RegSlot::FpStatus => u64::from(regs.fp_status()),
    }
}

/// Resolves an operand from the register file or the forwarding view.
///
/// # Returns
///
/// [`Operand::Ready`] with the value, or [`Operand::Pending`] if some slot's
/// producer has not produced a forwardable value yet.
pub fn resolve(
    src: Src,
    regs: &RegisterFile,
    scoreboard: &Scoreboard,
    view: &ForwardingView<'_>,
) -> Operand {
    if let Src::Imm(imm) = src {
        return Operand::Ready(u64::from(imm as u32));
    }
    let mut words = [0u64; 2];
    for (word, slot) in words.iter_mut().zip(src.slots().iter()) {
        *word = match scoreboard.producer(slot) {
            None => read_slot(regs, slot),
            Some(tag) => match view.lookup(tag, slot) {
                Some(v) => v,
                None => return Operand::Pending(src),
            },
        };
    }
    Operand::Ready(words[0] | (words[1] << 32))
}

/// Returns `true` if claiming `dest` now would be a WAW hazard.
///
/// The previous writer of each slot must at least have reached EX/MEM so the
/// two writes commit in program order.
pub fn waw_pending(dest: Dest, scoreboard: &Scoreboard, view: &ForwardingView<'_>) -> bool {
    dest.slots()
        .iter()
        .filter_map(|slot| scoreboard.producer(slot))
        .any(|tag| !view.holds(tag))
}
