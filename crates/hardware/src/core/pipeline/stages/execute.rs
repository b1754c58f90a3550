//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. Each cycle it:
//! 1. **Advances Units:** Ticks every functional unit once.
//! 2. **Drains One Result:** Moves the oldest finished instruction (from any
//!    unit class or the address/branch register) into EX/MEM and enqueues its
//!    pending memory access. Other finished units keep their result for a
//!    later cycle.
//! 3. **Dispatches:** Retries pending operands against the forwarding view,
//!    then sends the ID/EX instruction to a free unit of its class, or through
//!    the address/branch register if it needs no unit. Any missing operand or
//!    resource stalls the front of the pipeline for the cycle.

use std::fmt;

use crate::common::SimError;
use crate::common::constants::WORD_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{self, ForwardingView};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, InFlight, Operand};
use crate::core::pipeline::pending::MemAccess;
use crate::core::pipeline::signals::{InstClass, JumpTarget};
use crate::core::units::UnitClass;
use crate::isa::disasm::disassemble;

/// Why an instruction could not leave ID/EX this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StallReason {
    /// A source operand is still being computed.
    DataHazard,
    /// The destination's previous writer is still inside a unit.
    WawHazard,
    /// Every unit of the class is Busy or holding a result.
    UnitBusy(UnitClass),
    /// The address/branch register still holds the previous instruction.
    AddressBusy,
    /// A trap waits for every functional unit to drain.
    TrapDrain,
}

impl StallReason {
    /// Returns `true` for stalls caused by data dependencies.
    pub const fn is_data(self) -> bool {
        matches!(self, Self::DataHazard | Self::WawHazard)
    }
}

impl fmt::Display for StallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataHazard => f.write_str("raw"),
            Self::WawHazard => f.write_str("waw"),
            Self::UnitBusy(class) => write!(f, "{class} busy"),
            Self::AddressBusy => f.write_str("address unit busy"),
            Self::TrapDrain => f.write_str("trap drain"),
        }
    }
}

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
///
/// # Returns
///
/// An error only if a functional unit is loaded while busy.
pub fn execute_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    cpu.units.tick_all();
    drain_one(cpu);

    let Some(entry) = cpu.id_ex.entry.take() else {
        cpu.stall = false;
        return Ok(());
    };

    match dispatch(cpu, entry)? {
        None => cpu.stall = false,
        Some((entry, reason)) => {
            tracing::trace!(
                reason = %reason,
                "EX stall pc={:#010x} {}",
                entry.pc,
                disassemble(entry.decoded.raw)
            );
            if reason.is_data() {
                cpu.stats.stalls_data += 1;
            } else {
                cpu.stats.stalls_structural += 1;
            }
            cpu.id_ex.entry = Some(entry);
            cpu.stall = true;
        }
    }
    Ok(())
}

/// Where a finished instruction is waiting.
#[derive(Clone, Copy, Debug)]
enum Source {
    Address,
    Unit(UnitClass),
}

/// Moves the oldest finished instruction into EX/MEM.
fn drain_one(cpu: &mut Cpu) {
    if cpu.ex_mem.entry.is_some() {
        return;
    }

    let address = cpu
        .address_reg
        .as_ref()
        .map(|e| (Source::Address, e.op.tag));
    let units = UnitClass::ALL.into_iter().filter_map(|class| {
        cpu.units
            .peek_done(class)
            .map(|op| (Source::Unit(class), op.tag))
    });
    let Some((source, _)) = address.into_iter().chain(units).min_by_key(|&(_, tag)| tag) else {
        return;
    };

    let taken = match source {
        Source::Address => cpu.address_reg.take(),
        Source::Unit(class) => cpu
            .units
            .take_done(class)
            .map(|(result, op)| ExMemEntry { op, result }),
    };
    if let Some(entry) = taken {
        cpu.pending.push(entry.op.access);
        cpu.ex_mem.entry = Some(entry);
    }
}

/// Attempts to dispatch the ID/EX instruction.
///
/// # Returns
///
/// `None` once the instruction has left ID/EX, or the entry handed back with
/// the reason it must wait.
fn dispatch(
    cpu: &mut Cpu,
    mut entry: IdExEntry,
) -> Result<Option<(IdExEntry, StallReason)>, SimError> {
    let class = entry.decoded.class;
    let dest = class.dest();

    {
        let view = ForwardingView {
            ex_mem: &cpu.ex_mem,
            mem_wb: &cpu.mem_wb,
            enabled: cpu.forwarding,
        };
        for operand in &mut entry.operands {
            if let Operand::Pending(src) = *operand {
                *operand = hazards::resolve(src, &cpu.regs, &cpu.scoreboard, &view);
            }
        }
        if entry.operands.iter().any(|o| o.value().is_none()) {
            return Ok(Some((entry, StallReason::DataHazard)));
        }
        if hazards::waw_pending(dest, &cpu.scoreboard, &view) {
            return Ok(Some((entry, StallReason::WawHazard)));
        }
    }

    match class.unit_class() {
        Some(class) if !cpu.units.has_idle(class) => {
            return Ok(Some((entry, StallReason::UnitBusy(class))));
        }
        None if cpu.address_reg.is_some() => {
            return Ok(Some((entry, StallReason::AddressBusy)));
        }
        None if matches!(class, InstClass::Trap { .. }) && !cpu.units.all_idle() => {
            return Ok(Some((entry, StallReason::TrapDrain)));
        }
        _ => {}
    }

    let [a, b] = entry.operands.map(|o| o.value().unwrap_or_default());
    let IdExEntry {
        tag,
        pc,
        decoded,
        taken,
        fault,
        ..
    } = entry;
    let mut op = InFlight {
        tag,
        pc,
        decoded,
        taken: false,
        target: 0,
        access: MemAccess::None,
        fault,
    };
    let next_pc = pc.wrapping_add(WORD_SIZE);

    tracing::trace!("EX dispatch pc={pc:#010x} {}", disassemble(decoded.raw));

    let result = match class {
        InstClass::RegisterAlu { op: alu, .. } | InstClass::ImmediateAlu { op: alu, .. } => {
            cpu.units.dispatch_int(op, a, b, alu)?;
            cpu.scoreboard.set_producer(dest, tag);
            return Ok(None);
        }
        InstClass::RegisterFpu { op: fp, .. } => {
            cpu.units.dispatch_fp(op, a, b, fp)?;
            cpu.scoreboard.set_producer(dest, tag);
            cpu.stats.fp_ops += 1;
            return Ok(None);
        }
        InstClass::Branch { cond, offset, .. } => {
            op.taken = taken.unwrap_or_else(|| cond.holds(a));
            op.target = next_pc.wrapping_add(offset as u32);
            0
        }
        InstClass::Jump { target, .. } => {
            op.taken = true;
            op.target = match target {
                JumpTarget::Relative(offset) => next_pc.wrapping_add(offset as u32),
                JumpTarget::Register(_) => a as u32,
            };
            u64::from(next_pc)
        }
        InstClass::Load { kind, offset, .. } => {
            let addr = (a as u32).wrapping_add(offset as u32);
            op.access = MemAccess::Read { dest, addr, kind };
            u64::from(addr)
        }
        InstClass::Store { kind, offset, .. } => {
            let addr = (a as u32).wrapping_add(offset as u32);
            op.access = MemAccess::write(addr, kind.width(), b);
            u64::from(addr)
        }
        InstClass::Unimplemented { raw } => {
            tracing::warn!(
                "unimplemented instruction {raw:#010x} ({}) at pc={pc:#010x} executed as no-op",
                disassemble(raw)
            );
            0
        }
        InstClass::Nop | InstClass::Trap { .. } => 0,
    };

    cpu.scoreboard.set_producer(dest, tag);
    cpu.address_reg = Some(ExMemEntry { op, result });
    Ok(None)
}
