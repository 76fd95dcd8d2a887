//! Issue Stage: operand wake-up and selection.
//!
//! Does nothing while an exception is being recovered. Otherwise, operands waiting
//! on a register produced this cycle (without fault) take the forwarded value; then
//! up to `issue_width` ready instructions are selected oldest first and sent to the
//! least-occupied ALU.

use crate::common::error::SimError;
use crate::config::PipelineConfig;
use crate::core::pipeline::state::PipelineState;
use crate::core::units::alu::AluOp;

/// Executes the issue stage.
pub fn issue_stage(state: &mut PipelineState, config: &PipelineConfig) -> Result<(), SimError> {
    if state.exception {
        return Ok(());
    }

    for (dest, value) in state.forwarding.results() {
        let _ = state.integer_queue.wake(dest, value);
    }

    for entry in state.integer_queue.take_ready(config.issue_width) {
        let (Some(a), Some(b)) = (entry.op_a.value(), entry.op_b.value()) else {
            return Err(SimError::invariant(format!(
                "pc {} selected with an unresolved operand",
                entry.pc
            )));
        };
        let unit = state.alus.enqueue(AluOp {
            pc: entry.pc,
            opcode: entry.opcode,
            dest: entry.dest,
            a,
            b,
        })?;
        state.stats.instructions_issued += 1;
        tracing::debug!(pc = entry.pc, opcode = %entry.opcode, unit, "issue");
    }
    Ok(())
}
