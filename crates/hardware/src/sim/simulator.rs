//! Simulator: owns the configured engine and exposes the debugger interface.
//!
//! This module provides the entry point a driver uses:
//! 1. **Setup:** Configuration, reconfiguration before the run, image loading.
//! 2. **Execution:** Single clock steps, or a full run up to a cycle budget.
//! 3. **Inspection:** Side-effect free reads of registers, memory and statistics.

use crate::common::{AccessWidth, SimError};
use crate::config::{Config, UnitsConfig};
use crate::core::Cpu;
use crate::sim::loader::ProgramImage;
use crate::stats::SimStats;

/// How a full run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A trap reached Writeback.
    Halted {
        /// Trap code.
        code: u32,
        /// Cycles elapsed.
        cycles: u64,
    },
    /// The cycle budget ran out first.
    CycleLimit {
        /// Cycles elapsed.
        cycles: u64,
    },
}

/// Top-level simulator: configuration plus the engine built from it.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: Config,
    cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    ///
    /// # Returns
    ///
    /// [`SimError::InvalidConfig`] if the configuration fails validation.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        let cpu = Cpu::new(&config);
        Ok(Self { config, cpu })
    }

    /// Replaces forwarding, unit pools and memory size, rebuilding the engine
    /// with cleared registers and memory.
    ///
    /// # Arguments
    ///
    /// * `forwarding` - Forward in-flight results to waiting operands.
    /// * `units` - Unit count per class and latency per FP class.
    /// * `memory_size` - Memory size in bytes.
    ///
    /// # Returns
    ///
    /// [`SimError::InvalidConfig`] if the values are invalid or execution
    /// has already begun.
    pub fn configure(
        &mut self,
        forwarding: bool,
        units: UnitsConfig,
        memory_size: usize,
    ) -> Result<(), SimError> {
        if self.cpu.stats.cycles > 0 {
            return Err(SimError::InvalidConfig(
                "configuration cannot change after execution has begun".to_string(),
            ));
        }
        let mut config = self.config.clone();
        config.pipeline.forwarding = forwarding;
        config.units = units;
        config.memory.size = memory_size;
        *self = Self::new(config)?;
        Ok(())
    }

    /// Resets the engine and loads `image`, setting the PC to its entry.
    ///
    /// Registers written before the load are cleared with the rest of the
    /// engine state.
    pub fn load_image(&mut self, image: &ProgramImage) -> Result<(), SimError> {
        let mut cpu = Cpu::new(&self.config);
        image.load_into(&mut cpu.memory)?;
        cpu.pc = image.entry();
        self.cpu = cpu;
        tracing::debug!("[Loader] entry {:#010x}", image.entry());
        Ok(())
    }

    /// Loads `code` at the configured code base and `data` at the
    /// configured data base, entering at the code base.
    ///
    /// # Returns
    ///
    /// [`SimError::ImageOutOfRange`] if either segment does not fit.
    pub fn load_program(&mut self, code: &[u32], data: &[u8]) -> Result<(), SimError> {
        let memory = &self.config.memory;
        let mut image = ProgramImage::from_words(memory.code_base, code);
        if !data.is_empty() {
            image = image.with_data(memory.data_base, data);
        }
        self.load_image(&image)
    }

    /// Advances exactly one clock cycle.
    ///
    /// # Returns
    ///
    /// `Ok(true)` once the program has halted; further calls change nothing.
    pub fn step(&mut self) -> Result<bool, SimError> {
        self.cpu.step()
    }

    /// Steps until the program halts or `general.max_cycles` have elapsed.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        let budget = self.config.general.max_cycles;
        while !self.cpu.step()? {
            if self.cpu.stats.cycles >= budget {
                tracing::debug!("cycle budget of {budget} exhausted at pc={:#010x}", self.cpu.pc);
                return Ok(RunOutcome::CycleLimit {
                    cycles: self.cpu.stats.cycles,
                });
            }
        }
        Ok(RunOutcome::Halted {
            code: self.cpu.halted.unwrap_or_default(),
            cycles: self.cpu.stats.cycles,
        })
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the engine for detailed inspection.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Reads integer register `index`.
    pub fn read_register(&self, index: usize) -> i32 {
        self.cpu.regs.read(index)
    }

    /// Reads FP register `index` as a single.
    pub fn read_float_register(&self, index: usize) -> f32 {
        f32::from_bits(self.cpu.regs.read_f(index))
    }

    /// Reads the FP register pair starting at `index` as a double.
    pub fn read_double_register(&self, index: usize) -> f64 {
        f64::from_bits(self.cpu.regs.read_d(index))
    }

    /// Reads the FP status flag.
    pub const fn read_fp_status(&self) -> bool {
        self.cpu.regs.fp_status()
    }

    /// Reads `width` bytes of memory at `address`, zero-extended.
    pub fn read_memory(&self, address: u32, width: AccessWidth) -> Result<u64, SimError> {
        self.cpu.memory.read(address, width)
    }

    /// Writes integer register `index`. Writes to `r0` are discarded.
    pub fn write_register(&mut self, index: usize, value: i32) {
        self.cpu.regs.write(index, value);
    }

    /// Writes FP register `index` with a single.
    pub fn write_float_register(&mut self, index: usize, value: f32) {
        self.cpu.regs.write_f(index, value.to_bits());
    }

    /// Returns the address of the next fetch.
    pub const fn pc(&self) -> u32 {
        self.cpu.pc
    }

    /// Returns the number of cycles elapsed.
    pub const fn cycles(&self) -> u64 {
        self.cpu.stats.cycles
    }

    /// Returns the performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns `true` once a trap has retired.
    pub const fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }
}
