//! Common utilities and types used throughout the DLX pipeline simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Word size, register counts and the NOP encoding.
//! 2. **Access Widths:** Width classification for typed memory accesses.
//! 3. **Error Handling:** The crate-wide `SimError` type.
//! 4. **Register Management:** A unified interface for integer and FP registers.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access width definitions.
pub mod data;

/// Crate-wide error type.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::AccessWidth;
pub use error::SimError;
pub use reg::RegisterFile;
