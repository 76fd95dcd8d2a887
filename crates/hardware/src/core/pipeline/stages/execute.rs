//! Execute Stage: advance the ALUs.
//!
//! Every ALU pipeline moves forward one slot. Operations leaving a pipeline are
//! evaluated and their results (faults included) are published on the forwarding
//! network for the rest of the cycle.

use crate::common::error::SimError;
use crate::core::pipeline::state::PipelineState;

/// Executes the execute stage.
pub fn execute_stage(state: &mut PipelineState) -> Result<(), SimError> {
    for result in state.alus.tick() {
        tracing::trace!(
            pc = result.pc,
            dest = %result.dest,
            value = result.value,
            exception = result.exception,
            "complete"
        );
        state.forwarding.publish(result)?;
        state.stats.instructions_completed += 1;
    }
    Ok(())
}
