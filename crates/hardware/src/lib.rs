//! DLX pipeline simulator library.
//!
//! This crate implements a cycle-level emulator of the five-stage DLX pipeline:
//! 1. **Core:** Pipeline stages, hazard detection and forwarding, register files.
//! 2. **Functional Units:** Integer ALUs and pools of FP adders, multipliers and
//!    dividers with configurable counts and latencies.
//! 3. **ISA:** Encoding, decoding and disassembly of 32-bit DLX instruction words.
//! 4. **Memory:** Flat byte-addressable little-endian memory.
//! 5. **Simulation:** Program images, configuration, and statistics collection.
//!
//! # Examples
//!
//! ```
//! use dlxsim_core::isa::{Mnemonic, Operands, encode};
//! use dlxsim_core::sim::{ProgramImage, RunOutcome, Simulator};
//! use dlxsim_core::Config;
//!
//! let program = [
//!     encode(Mnemonic::Addi, &Operands::rri(1, 0, 5)),
//!     encode(Mnemonic::Add, &Operands::rrr(2, 1, 1)),
//!     encode(Mnemonic::Trap, &Operands::imm(0)),
//! ];
//! let mut sim = Simulator::new(Config::default()).unwrap();
//! sim.load_image(&ProgramImage::from_words(0, &program)).unwrap();
//!
//! assert!(matches!(sim.run().unwrap(), RunOutcome::Halted { code: 0, .. }));
//! assert_eq!(sim.read_register(2), 10);
//! ```

/// Common types and constants (access widths, errors, registers).
pub mod common;
/// Simulator configuration (defaults, unit pools, memory layout).
pub mod config;
/// CPU core (register files, functional units, pipeline).
pub mod core;
/// Instruction set (opcodes, encode, decode, disassembly).
pub mod isa;
/// Simulator façade and program loading.
pub mod sim;
/// Memory subsystem.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline, functional units and stats.
pub use crate::core::Cpu;
/// Top-level simulator façade.
pub use crate::sim::Simulator;
