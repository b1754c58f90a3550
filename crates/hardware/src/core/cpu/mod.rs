//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! engine state. It coordinates the following:
//! 1. **Architectural State:** Register files, program counter and memory.
//! 2. **Pipeline Control:** The four stage latches, the stall flag and the
//!    sequence counter that tags every fetched instruction.
//! 3. **Execution Resources:** Functional-unit pools, the address/branch
//!    register, the pending-access queue and the scoreboard.

/// Clock-cycle orchestration of the five stages.
pub mod execution;

/// Functional-unit pools grouped by class.
pub mod units;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::{ExMem, ExMemEntry, IdEx, IfId, InstTag, MemWb};
use crate::core::pipeline::pending::PendingQueue;
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::soc::Memory;
use crate::stats::SimStats;

pub use self::units::ExecutionUnits;

/// Main CPU structure containing all engine state.
///
/// Everything here is owned by the engine and mutated only by the stage
/// running in the current cycle. Callers inspect it between cycles.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Integer and floating-point registers.
    pub regs: RegisterFile,
    /// Program Counter of the next fetch.
    pub pc: u32,
    /// Instruction and data memory.
    pub memory: Memory,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,

    /// Functional units.
    pub units: ExecutionUnits,
    /// One-cycle register for instructions that need no functional unit.
    pub address_reg: Option<ExMemEntry>,
    /// Memory accesses waiting for the Memory stage.
    pub pending: PendingQueue,
    /// Youngest in-flight writer of each register.
    pub scoreboard: Scoreboard,

    /// Enables the EX/MEM bypass.
    pub forwarding: bool,
    /// Set while the ID/EX instruction cannot dispatch; holds Fetch and Decode.
    pub stall: bool,
    /// Trap code once a trap has retired.
    pub halted: Option<u32>,
    /// Performance statistics.
    pub stats: SimStats,

    next_tag: u64,
}

impl Cpu {
    /// Creates a CPU with cleared registers and memory.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with the PC at the configured code base.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.memory.code_base,
            memory: Memory::new(config.memory.size),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            units: ExecutionUnits::new(config),
            address_reg: None,
            pending: PendingQueue::new(),
            scoreboard: Scoreboard::new(),
            forwarding: config.pipeline.forwarding,
            stall: false,
            halted: None,
            stats: SimStats::default(),
            next_tag: 0,
        }
    }

    /// Allocates the sequence number of the next fetched instruction.
    pub fn next_tag(&mut self) -> InstTag {
        let tag = InstTag(self.next_tag);
        self.next_tag += 1;
        tag
    }

    /// Returns `true` once a trap has retired.
    pub const fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    /// Dumps the current CPU state (PC and registers) to the trace log.
    pub fn dump_state(&self) {
        tracing::trace!("PC = {:#010x}", self.pc);
        self.regs.dump();
    }
}
