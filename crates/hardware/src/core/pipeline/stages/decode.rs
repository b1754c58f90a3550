//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs:
//! 1. **Decoding:** Turns the fetched word into a [`Decoded`](crate::isa::decode::Decoded)
//!    instruction class.
//! 2. **Operand Staging:** Reads each source from the register file, or
//!    forwards it from EX/MEM or MEM/WB when a write is pending. Sources that
//!    are not available yet stay pending and Execute retries them.
//! 3. **Branch Condition:** Jumps are always taken; a branch's condition is
//!    evaluated here when its operand is already available.

use crate::core::Cpu;
use crate::core::pipeline::hazards::{self, ForwardingView};
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::InstClass;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

/// Executes the instruction decode stage.
///
/// Holds while the pipeline is stalled; the ID/EX entry Execute could not
/// dispatch stays in place and the IF/ID entry waits behind it.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
pub fn decode_stage(cpu: &mut Cpu) {
    if cpu.stall || !cpu.id_ex.is_empty() {
        return;
    }
    let Some(IfIdEntry {
        tag,
        pc,
        inst,
        fault,
    }) = cpu.if_id.entry.take()
    else {
        return;
    };

    let decoded = decode(inst);
    let view = ForwardingView {
        ex_mem: &cpu.ex_mem,
        mem_wb: &cpu.mem_wb,
        enabled: cpu.forwarding,
    };
    let operands = decoded
        .class
        .sources()
        .map(|src| hazards::resolve(src, &cpu.regs, &cpu.scoreboard, &view));

    let taken = match decoded.class {
        InstClass::Branch { cond, .. } => operands[0].value().map(|v| cond.holds(v)),
        InstClass::Jump { .. } => Some(true),
        _ => Some(false),
    };

    tracing::trace!("ID pc={pc:#010x} {}", disassemble(inst));

    cpu.id_ex.entry = Some(IdExEntry {
        tag,
        pc,
        decoded,
        operands,
        taken,
        fault,
    });
}
