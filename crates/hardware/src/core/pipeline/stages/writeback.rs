//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the pipeline. It commits the
//! result in MEM/WB (unit output, link address or load data) to the register
//! file slot named by the instruction's destination, releases that slot in
//! the scoreboard, and counts the instruction as retired.
//!
//! A trap reaching this stage halts the program instead of writing state.
//! A fetch fault carried by the entry surfaces here as an error.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::signals::{Dest, InstClass};

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// `Ok(true)` if a trap retired and the program halted, or the fetch fault
/// the retiring instruction carried.
pub fn wb_stage(cpu: &mut Cpu) -> Result<bool, SimError> {
    let Some(entry) = cpu.mem_wb.entry.take() else {
        return Ok(false);
    };
    if let Some(fault) = &entry.op.fault {
        return Err(fault.clone());
    }

    let value = entry.value();
    let op = &entry.op;
    match op.decoded.class {
        InstClass::Nop => return Ok(false),
        InstClass::Trap { code } => {
            tracing::debug!("WB trap #{code} at pc={:#010x}, halting", op.pc);
            cpu.halted = Some(code);
            cpu.stats.instructions_retired += 1;
            return Ok(true);
        }
        _ => {}
    }

    let dest = op.dest();
    match dest {
        Dest::None => {}
        Dest::Int(r) => {
            tracing::trace!("WB r{r} <= {:#x}", value as u32);
            cpu.regs.write(usize::from(r), value as u32 as i32);
        }
        Dest::Float(f) => {
            tracing::trace!("WB f{f} <= {:#010x}", value as u32);
            cpu.regs.write_f(usize::from(f), value as u32);
        }
        Dest::FloatPair(f) => {
            tracing::trace!("WB f{f}:f{} <= {value:#018x}", f.wrapping_add(1) & 31);
            cpu.regs.write_d(usize::from(f), value);
        }
        Dest::FpStatus => {
            tracing::trace!("WB fpsr <= {}", value != 0);
            cpu.regs.set_fp_status(value != 0);
        }
    }
    cpu.scoreboard.clear_if_match(dest, op.tag);
    cpu.stats.instructions_retired += 1;
    Ok(false)
}
