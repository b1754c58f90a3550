//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the pipeline. It reads the word
//! at the program counter into the IF/ID latch, assigns the instruction its
//! sequence tag and advances the PC by one word. Fetch holds while the
//! pipeline is stalled.
//!
//! A fetch outside memory is not an error yet: the fetch may be on a path a
//! branch is about to squash. The fault travels with a NOP and is raised if
//! it reaches Writeback.

use crate::common::constants::{NOP_WORD, WORD_SIZE};
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::core::pipeline::traits::PipelineLatch;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.stall || !cpu.if_id.is_empty() {
        return;
    }

    let pc = cpu.pc;
    let (inst, fault) = match cpu.memory.read_word(pc) {
        Ok(word) => (word, None),
        Err(e) => {
            tracing::trace!("IF pc={pc:#010x} fault: {e}");
            (NOP_WORD, Some(e))
        }
    };
    let tag = cpu.next_tag();

    tracing::trace!("IF pc={pc:#010x} inst={inst:#010x}");

    cpu.if_id.entry = Some(IfIdEntry {
        tag,
        pc,
        inst,
        fault,
    });
    cpu.pc = pc.wrapping_add(WORD_SIZE);
}
