//! Pipeline Latch Interface.
//!
//! Every inter-stage latch supports the same small set of operations, so the
//! flush path and the debugger view treat them uniformly.

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Clears the latch to a bubble.
    ///
    /// Called on a taken branch or jump for every latch holding younger work.
    fn flush(&mut self);

    /// Returns `true` if the latch holds a bubble.
    fn is_empty(&self) -> bool;

    /// Returns the instruction word held, or the NOP word for a bubble.
    fn word(&self) -> u32;
}
