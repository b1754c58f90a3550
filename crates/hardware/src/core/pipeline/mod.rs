//! Instruction pipeline implementation.
//!
//! This module contains the five-stage in-order pipeline. It includes:
//! 1. **Hazards:** Operand resolution, forwarding and WAW detection.
//! 2. **Latches:** Inter-stage buffers between the stages.
//! 3. **Pending Accesses:** The descriptor queue between Execute and Memory.
//! 4. **Scoreboard:** Youngest in-flight writer per register.
//! 5. **Signals:** Instruction classes and control signals produced by decode.
//! 6. **Stages:** Fetch, Decode, Execute, Memory and Writeback.
//! 7. **Traits:** The common latch interface.

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Pending memory access queue.
pub mod pending;

/// Register dependency scoreboard.
pub mod scoreboard;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline latches.
pub mod traits;
