use dlxsim_core::common::{AccessWidth, SimError};
use dlxsim_core::config::Config;
use dlxsim_core::core::Cpu;
use dlxsim_core::sim::{ProgramImage, RunOutcome, Simulator};
use dlxsim_core::stats::SimStats;
use tracing_subscriber::EnvFilter;

/// Address test programs place their data at.
pub const DATA_BASE: u32 = 0x1000;

pub struct TestContext {
    pub sim: Simulator,
    image: ProgramImage,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let sim = Simulator::new(config).expect("test configuration must be valid");
        Self {
            sim,
            image: ProgramImage::new(0),
        }
    }

    /// Builds a context with forwarding switched on or off.
    pub fn forwarding(enabled: bool) -> Self {
        let mut config = Config::default();
        config.pipeline.forwarding = enabled;
        Self::with_config(config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        self.sim.cpu()
    }

    pub fn stats(&self) -> &SimStats {
        self.sim.stats()
    }

    /// Load a sequence of 32-bit instructions at `addr` and set the PC.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        let segments = self.image.segments().to_vec();
        let mut image = ProgramImage::from_words(addr, instructions);
        for seg in segments {
            image = image.with_data(seg.base, seg.bytes);
        }
        self.image = image;
        self.reload();
        self
    }

    pub fn with_words(mut self, addr: u32, words: &[u32]) -> Self {
        self.image = std::mem::take(&mut self.image).with_words(addr, words);
        self.reload();
        self
    }

    pub fn with_singles(mut self, addr: u32, values: &[f32]) -> Self {
        self.image = std::mem::take(&mut self.image).with_singles(addr, values);
        self.reload();
        self
    }

    pub fn with_doubles(mut self, addr: u32, values: &[f64]) -> Self {
        self.image = std::mem::take(&mut self.image).with_doubles(addr, values);
        self.reload();
        self
    }

    fn reload(&mut self) {
        self.sim
            .load_image(&self.image)
            .expect("test image must fit in memory");
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: i32) {
        self.sim.write_register(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> i32 {
        self.sim.read_register(reg)
    }

    pub fn set_freg(&mut self, reg: usize, val: f32) {
        self.sim.write_float_register(reg, val);
    }

    pub fn get_freg(&self, reg: usize) -> f32 {
        self.sim.read_float_register(reg)
    }

    pub fn get_dreg(&self, reg: usize) -> f64 {
        self.sim.read_double_register(reg)
    }

    pub fn read_mem(&self, addr: u32, width: AccessWidth) -> u64 {
        self.sim
            .read_memory(addr, width)
            .expect("address must be in range")
    }

    /// Run for at most `cycles` cycles, stopping early at a halt.
    pub fn run(&mut self, cycles: u64) -> Result<bool, SimError> {
        for _ in 0..cycles {
            if self.sim.step()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Run to the halting trap and return the cycle count.
    pub fn run_to_halt(&mut self) -> u64 {
        match self.sim.run() {
            Ok(RunOutcome::Halted { cycles, .. }) => cycles,
            other => panic!("program did not halt: {other:?}"),
        }
    }
}
