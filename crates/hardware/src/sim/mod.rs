//! Simulation front end and program loading.
//!
//! Provides the [`Simulator`] a debugger or driver uses to configure the
//! engine, load a program image, and run or step it while inspecting state.

/// Memory image assembly.
pub mod loader;

/// The simulator façade.
pub mod simulator;

pub use loader::ProgramImage;
pub use simulator::{RunOutcome, Simulator};
