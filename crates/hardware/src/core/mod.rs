//! Core processor implementation.
//!
//! This module contains the pipelined DLX engine: the register files, the
//! functional units, the five-stage pipeline, and the `Cpu` that owns them
//! and runs one clock per `step`.

/// Architectural register files.
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Functional units (integer ALU, FP adder, multiplier, divider).
pub mod units;

pub use self::cpu::Cpu;
