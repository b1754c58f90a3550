//! System-on-Chip (SoC) Components.
//!
//! The simulated machine has no devices or bus: its only off-core component
//! is the flat byte-addressable memory shared by instruction fetch and the
//! Memory stage.

/// Flat byte-addressable memory.
pub mod memory;

pub use memory::Memory;
