//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the DLX pipeline. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics.
//! 2. **Stalls:** Data-hazard and structural stall counts.
//! 3. **Control flow:** Taken branches, pipeline flushes and squashed instructions.
//! 4. **Instruction mix:** Loads, stores and floating-point-unit operations.

use std::time::Instant;

/// Simulation statistics structure.
///
/// Counters are updated by the pipeline stages as instructions move through
/// them; none of them influence execution.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that completed Writeback, the halting trap included.
    pub instructions_retired: u64,

    /// Cycles the ID/EX instruction waited on an operand or a WAW hazard.
    pub stalls_data: u64,
    /// Cycles the ID/EX instruction waited on a busy unit or a trap drain.
    pub stalls_structural: u64,

    /// Taken branches and jumps resolved in Memory.
    pub branches_taken: u64,
    /// Pipeline flushes.
    pub flushes: u64,
    /// Younger instructions discarded by flushes.
    pub squashed: u64,

    /// Memory reads serviced.
    pub loads: u64,
    /// Memory writes serviced.
    pub stores: u64,
    /// Operations dispatched to the FP adder, multiplier or divider pools.
    pub fp_ops: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls_data: 0,
            stalls_structural: 0,
            branches_taken: 0,
            flushes: 0,
            squashed: 0,
            loads: 0,
            stores: 0,
            fp_ops: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"pipeline"`, `"instruction_mix"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline", "instruction_mix"];

impl SimStats {
    /// Cycles per retired instruction, or zero before anything retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        if want("summary") {
            println!("\n==========================================================");
            println!("DLX PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {:.4}", self.instructions_retired as f64 / cyc);
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("pipeline") {
            println!("PIPELINE");
            println!(
                "  stalls.data            {} ({:.2}%)",
                self.stalls_data,
                pct(self.stalls_data, cyc)
            );
            println!(
                "  stalls.structural      {} ({:.2}%)",
                self.stalls_structural,
                pct(self.stalls_structural, cyc)
            );
            println!("  branches.taken         {}", self.branches_taken);
            println!("  flushes                {}", self.flushes);
            println!("  squashed               {}", self.squashed);
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            println!("INSTRUCTION MIX");
            println!(
                "  op.load                {} ({:.2}%)",
                self.loads,
                pct(self.loads, instr)
            );
            println!(
                "  op.store               {} ({:.2}%)",
                self.stores,
                pct(self.stores, instr)
            );
            println!(
                "  op.fp                  {} ({:.2}%)",
                self.fp_ops,
                pct(self.fp_ops, instr)
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
