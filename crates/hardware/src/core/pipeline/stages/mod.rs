//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! pipeline. [`Cpu::step`](crate::core::Cpu::step) runs them in reverse order
//! so each stage sees the latch contents its successor left this cycle:
//! 1. **Fetch:** Reads the word at the PC into IF/ID.
//! 2. **Decode:** Classifies the instruction and stages its operands.
//! 3. **Execute:** Advances the functional units and dispatches the next instruction.
//! 4. **Memory:** Services the pending access and resolves taken branches.
//! 5. **Writeback:** Commits results to the register files and detects the halt.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
