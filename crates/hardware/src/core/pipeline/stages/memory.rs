//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It performs:
//! 1. **Data Access:** Services the head of the pending-access queue. A write
//!    copies the payload bytes to memory; a read loads the typed value into
//!    the load-memory-data latches (two for a double).
//! 2. **Control Resolution:** A taken branch or jump redirects the PC and
//!    squashes every younger instruction still in the pipeline.
//!
//! Data accesses are never speculative here, so an out-of-range access is a
//! fatal error.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{InFlight, MemWbEntry};
use crate::core::pipeline::pending::MemAccess;
use crate::core::pipeline::traits::PipelineLatch;

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// [`SimError::MemoryOutOfRange`] if the access falls outside memory.
pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(entry) = cpu.ex_mem.entry.take() else {
        return Ok(());
    };
    let access = cpu.pending.pop().unwrap_or_default();

    let mut lmd = [0u32; 2];
    if entry.op.fault.is_none() {
        match access {
            MemAccess::None => {}
            MemAccess::Read { addr, kind, .. } => {
                let value = kind.extend(cpu.memory.read(addr, kind.width())?);
                tracing::trace!("MEM load [{addr:#010x}] -> {value:#x}");
                lmd = [value as u32, (value >> 32) as u32];
                cpu.stats.loads += 1;
            }
            MemAccess::Write {
                addr,
                width,
                payload,
            } => {
                tracing::trace!("MEM store [{addr:#010x}] <- {:02x?}", access.bytes());
                cpu.memory.write(addr, width, u64::from_le_bytes(payload))?;
                cpu.stats.stores += 1;
            }
        }
    }

    let redirect = entry.op.taken.then_some(entry.op.target);
    let tag = entry.op.tag;
    cpu.mem_wb.entry = Some(MemWbEntry {
        op: entry.op,
        result: entry.result,
        lmd,
    });

    if let Some(target) = redirect {
        flush_younger(cpu, target);
        tracing::debug!("MEM redirect to {target:#010x}, flushed younger than {}", tag.0);
    }
    Ok(())
}

/// Squashes everything younger than the instruction in MEM/WB and redirects
/// fetch to `target`.
fn flush_younger(cpu: &mut Cpu, target: u32) {
    let Some(tag) = cpu.mem_wb.entry.as_ref().map(|e| e.op.tag) else {
        return;
    };

    let mut squashed = usize::from(!cpu.if_id.is_empty()) + usize::from(!cpu.id_ex.is_empty());
    cpu.if_id.flush();
    cpu.id_ex.flush();
    if cpu.address_reg.as_ref().is_some_and(|e| e.op.tag > tag) {
        cpu.address_reg = None;
        squashed += 1;
    }
    squashed += cpu.units.squash_younger(tag);

    let survivors = cpu
        .units
        .in_flight()
        .chain(cpu.address_reg.as_ref().map(|e| &e.op))
        .chain(cpu.mem_wb.entry.as_ref().map(|e| &e.op))
        .map(|op: &InFlight| (op.tag, op.dest()));
    cpu.scoreboard.rebuild(survivors);

    cpu.pc = target;
    cpu.stall = false;
    cpu.stats.flushes += 1;
    cpu.stats.branches_taken += 1;
    cpu.stats.squashed += squashed as u64;
}
