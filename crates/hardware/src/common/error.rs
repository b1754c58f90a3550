//! Simulator error definitions.
//!
//! Every fallible operation in the crate returns `Result<_, SimError>`. The
//! variants fall into three groups:
//! 1. **Run Errors:** Out-of-range memory accesses that terminate a run.
//! 2. **Engine Errors:** Loading a functional unit that is not idle.
//! 3. **Setup Errors:** Rejected configurations and program images.
//!
//! Running out of functional units is not an error; the pipeline stalls.

use thiserror::Error;

use super::data::AccessWidth;
use crate::core::units::UnitClass;

/// Errors raised by the simulator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A fetch or data access touched bytes beyond the configured memory.
    #[error("{width} access at {addr:#010x} is outside memory of {size:#x} bytes")]
    MemoryOutOfRange {
        /// First byte of the access.
        addr: u32,
        /// Width of the access.
        width: AccessWidth,
        /// Configured memory size in bytes.
        size: usize,
    },

    /// A functional unit was loaded while not idle.
    #[error("{class} unit loaded while busy")]
    UnitBusy {
        /// Class of the offending unit.
        class: UnitClass,
    },

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration text could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ConfigIo(String),

    /// A program image file could not be read.
    #[error("failed to read program image: {0}")]
    ImageIo(String),

    /// A program image segment does not fit in memory.
    #[error("segment at {base:#010x} of {len} bytes does not fit in {size:#x} bytes of memory")]
    ImageOutOfRange {
        /// Base address of the segment.
        base: u32,
        /// Segment length in bytes.
        len: usize,
        /// Configured memory size in bytes.
        size: usize,
    },
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        Self::ConfigIo(err.to_string())
    }
}
