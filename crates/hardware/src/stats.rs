//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, committed instructions, and derived IPC/CPI.
//! 2. **Pipeline flow:** Instructions fetched, dispatched, issued and completed.
//! 3. **Recovery:** Exceptions raised, instructions rolled back, backpressure cycles.

use std::time::Instant;

/// Simulation statistics tracking per-stage instruction flow.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulated cycles.
    pub cycles: u64,
    /// Instructions delivered by the instruction source into the decode buffer.
    pub instructions_fetched: u64,
    /// Instructions renamed and placed in the integer queue and active list.
    pub instructions_dispatched: u64,
    /// Instructions sent from the integer queue to an ALU.
    pub instructions_issued: u64,
    /// Results (faulting ones included) published on the forwarding network.
    pub instructions_completed: u64,
    /// Instructions retired from the active list head.
    pub instructions_committed: u64,
    /// Active list entries unwound during exception recovery.
    pub instructions_rolled_back: u64,
    /// Exceptions taken at commit.
    pub exceptions: u64,
    /// Cycles in which rename could not admit the head group.
    pub backpressure_cycles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_fetched: 0,
            instructions_dispatched: 0,
            instructions_issued: 0,
            instructions_completed: 0,
            instructions_committed: 0,
            instructions_rolled_back: 0,
            exceptions: 0,
            backpressure_cycles: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline", "recovery"];

impl SimStats {
    /// Committed instructions per cycle; 0 before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_committed as f64 / self.cycles as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty slice
    /// prints everything.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);

        if want("summary") {
            let instr = self.instructions_committed.max(1);
            println!("\n==========================================================");
            println!("OUT-OF-ORDER PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_committed);
            println!("sim_ipc                  {:.4}", self.ipc());
            println!("sim_cpi                  {:.4}", cyc as f64 / instr as f64);
            println!("----------------------------------------------------------");
        }
        if want("pipeline") {
            println!("PIPELINE FLOW");
            println!("  fetched                {}", self.instructions_fetched);
            println!("  dispatched             {}", self.instructions_dispatched);
            println!("  issued                 {}", self.instructions_issued);
            println!("  completed              {}", self.instructions_completed);
            println!("  committed              {}", self.instructions_committed);
            println!("----------------------------------------------------------");
        }
        if want("recovery") {
            println!("RECOVERY AND STALLS");
            println!("  exceptions             {}", self.exceptions);
            println!("  rolled_back            {}", self.instructions_rolled_back);
            println!(
                "  backpressure           {} ({:.2}%)",
                self.backpressure_cycles,
                (self.backpressure_cycles as f64 / cyc as f64) * 100.0
            );
        }
        println!("==========================================================");
    }
}
