//! Configuration system for the DLX simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! engine. It provides:
//! 1. **Defaults:** Baseline unit counts, latencies and memory layout.
//! 2. **Structures:** Hierarchical config for general, memory, pipeline and units.
//! 3. **Loading:** JSON parsing from text or a file, and validation.
//!
//! Configuration is fixed once the engine is built; changing it mid-run means
//! building a new engine.

use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants::DEFAULT_MEMORY_SIZE;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of integer ALUs.
    pub const INT_ALU_COUNT: usize = 1;

    /// Number of FP adders.
    pub const FP_ADD_COUNT: usize = 1;

    /// FP adder latency in cycles.
    pub const FP_ADD_LATENCY: u32 = 2;

    /// Number of FP multipliers.
    pub const FP_MUL_COUNT: usize = 1;

    /// FP multiplier latency in cycles.
    pub const FP_MUL_LATENCY: u32 = 5;

    /// Number of FP dividers.
    pub const FP_DIV_COUNT: usize = 1;

    /// FP divider latency in cycles.
    pub const FP_DIV_LATENCY: u32 = 19;

    /// Address where code segments are placed.
    pub const CODE_BASE: u32 = 0x0000;

    /// Address where data segments are placed.
    pub const DATA_BASE: u32 = 0x1000;

    /// Cycle budget of [`Simulator::run`](crate::sim::Simulator::run).
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Largest addressable memory: the full 32-bit address space.
const MAX_MEMORY_SIZE: u64 = 1 << 32;

/// Root configuration structure.
///
/// Every section and field is optional in JSON; missing values take their
/// defaults.
///
/// # Examples
///
/// ```
/// use dlxsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(config.pipeline.forwarding);
/// assert_eq!(config.units.fp_mul.latency, 5);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use dlxsim_core::config::Config;
///
/// let json = r#"{
///     "pipeline": { "forwarding": false },
///     "units": {
///         "fp_mul": { "count": 2, "latency": 7 }
///     },
///     "memory": { "size": 65536 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(!config.pipeline.forwarding);
/// assert_eq!(config.units.fp_mul.count, 2);
/// assert_eq!(config.units.fp_div.latency, 19);
/// assert_eq!(config.memory.size, 65536);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Memory size and segment layout
    pub memory: MemoryConfig,
    /// Pipeline behavior
    pub pipeline: PipelineConfig,
    /// Functional unit counts and latencies
    pub units: UnitsConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Arguments
    ///
    /// * `json` - Configuration text.
    ///
    /// # Returns
    ///
    /// [`SimError::ConfigParse`] for malformed JSON, or
    /// [`SimError::InvalidConfig`] if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that every unit class has at least one unit with a non-zero
    /// latency and that memory fits the 32-bit address space.
    pub fn validate(&self) -> Result<(), SimError> {
        let classes = [
            ("int_alu", self.units.int_alu.count, 1),
            ("fp_add", self.units.fp_add.count, self.units.fp_add.latency),
            ("fp_mul", self.units.fp_mul.count, self.units.fp_mul.latency),
            ("fp_div", self.units.fp_div.count, self.units.fp_div.latency),
        ];
        for (name, count, latency) in classes {
            if count == 0 {
                return Err(SimError::InvalidConfig(format!(
                    "units.{name}.count must be at least 1"
                )));
            }
            if latency == 0 {
                return Err(SimError::InvalidConfig(format!(
                    "units.{name}.latency must be at least 1"
                )));
            }
        }

        let size = self.memory.size;
        if size == 0 || size as u64 > MAX_MEMORY_SIZE {
            return Err(SimError::InvalidConfig(format!(
                "memory.size {size:#x} outside 1..={MAX_MEMORY_SIZE:#x}"
            )));
        }
        for (name, base) in [
            ("code_base", self.memory.code_base),
            ("data_base", self.memory.data_base),
        ] {
            if base as usize >= size {
                return Err(SimError::InvalidConfig(format!(
                    "memory.{name} {base:#x} beyond memory size {size:#x}"
                )));
            }
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Cycle budget for a full run before it reports a timeout.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Memory size and segment layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// Memory size in bytes
    pub size: usize,
    /// Base address of the code segment
    pub code_base: u32,
    /// Base address of the data segment placed by `Simulator::load_program`
    pub data_base: u32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MEMORY_SIZE,
            code_base: defaults::CODE_BASE,
            data_base: defaults::DATA_BASE,
        }
    }
}

/// Pipeline behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Forward results from EX/MEM to waiting operands. When off, operands
    /// wait until their producer reaches MEM/WB.
    pub forwarding: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { forwarding: true }
    }
}

/// Integer ALU pool. Its latency is fixed at one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AluConfig {
    /// Number of units
    pub count: usize,
}

impl Default for AluConfig {
    fn default() -> Self {
        Self {
            count: defaults::INT_ALU_COUNT,
        }
    }
}

/// One floating-point unit pool. Both fields are required when the section
/// is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FpUnitConfig {
    /// Number of units
    pub count: usize,
    /// Cycles from dispatch until the result can leave the unit
    pub latency: u32,
}

impl FpUnitConfig {
    /// Creates a pool description.
    pub const fn new(count: usize, latency: u32) -> Self {
        Self { count, latency }
    }
}

/// Functional unit counts and latencies per class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitsConfig {
    /// Integer ALUs
    pub int_alu: AluConfig,
    /// FP adders (add, subtract, compare, convert)
    #[serde(default = "UnitsConfig::default_fp_add")]
    pub fp_add: FpUnitConfig,
    /// FP multipliers (including integer multiply)
    #[serde(default = "UnitsConfig::default_fp_mul")]
    pub fp_mul: FpUnitConfig,
    /// FP dividers (including integer divide)
    #[serde(default = "UnitsConfig::default_fp_div")]
    pub fp_div: FpUnitConfig,
}

impl UnitsConfig {
    /// Returns the default FP adder pool.
    fn default_fp_add() -> FpUnitConfig {
        FpUnitConfig::new(defaults::FP_ADD_COUNT, defaults::FP_ADD_LATENCY)
    }

    /// Returns the default FP multiplier pool.
    fn default_fp_mul() -> FpUnitConfig {
        FpUnitConfig::new(defaults::FP_MUL_COUNT, defaults::FP_MUL_LATENCY)
    }

    /// Returns the default FP divider pool.
    fn default_fp_div() -> FpUnitConfig {
        FpUnitConfig::new(defaults::FP_DIV_COUNT, defaults::FP_DIV_LATENCY)
    }
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            int_alu: AluConfig::default(),
            fp_add: Self::default_fp_add(),
            fp_mul: Self::default_fp_mul(),
            fp_div: Self::default_fp_div(),
        }
    }
}
