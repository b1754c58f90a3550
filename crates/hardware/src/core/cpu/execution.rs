//! Main Execution Loop.
//!
//! This module implements one clock cycle of the engine. It performs the following:
//! 1. **Halt Check:** A halted CPU ignores further clocks.
//! 2. **Stage Ordering:** Runs Writeback, Memory, Execute, Decode and Fetch in
//!    that order, so each stage reads what its successor left in the latch
//!    this cycle and register writes are visible to operand reads.
//! 3. **Timing Management:** Counts cycles.

use super::Cpu;
use crate::common::SimError;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Advances the engine exactly one clock cycle.
    ///
    /// When a trap reaches Writeback the rest of that cycle is not evaluated.
    ///
    /// # Returns
    ///
    /// `Ok(true)` once the program has halted, or the fatal error raised by
    /// a stage (out-of-range memory access, or a fetch fault reaching
    /// Writeback).
    pub fn step(&mut self) -> Result<bool, SimError> {
        if self.is_halted() {
            return Ok(true);
        }
        self.stats.cycles += 1;

        if wb_stage(self)? {
            return Ok(true);
        }
        mem_stage(self)?;
        execute_stage(self)?;
        decode_stage(self);
        fetch_stage(self);

        if tracing::enabled!(tracing::Level::TRACE) {
            self.print_pipeline_diagram();
        }
        Ok(false)
    }

    /// Logs the word held by each latch at the end of the cycle.
    pub fn print_pipeline_diagram(&self) {
        use crate::core::pipeline::traits::PipelineLatch;
        use crate::isa::disasm::disassemble;

        tracing::trace!(
            cycle = self.stats.cycles,
            stall = self.stall,
            "[Pipeline] IF/ID: {} | ID/EX: {} | EX/MEM: {} | MEM/WB: {}",
            disassemble(self.if_id.word()),
            disassemble(self.id_ex.word()),
            disassemble(self.ex_mem.word()),
            disassemble(self.mem_wb.word())
        );
    }
}
