//! Fetch Stage: fill the decode buffer.
//!
//! Runs last in the cycle. It performs:
//! 1. **Redirect:** While an exception is being recovered, points the fetch cursor at
//!    the exception vector and discards everything in the decode buffer.
//! 2. **Fetch:** Otherwise, unless rename asserted backpressure, pulls up to
//!    `fetch_width` instructions from the source and advances the cursor.

use crate::config::Config;
use crate::core::pipeline::state::PipelineState;
use crate::core::pipeline::traits::InstructionSource;

/// Executes the fetch stage.
pub fn fetch_stage<S>(state: &mut PipelineState, source: &mut S, config: &Config)
where
    S: InstructionSource + ?Sized,
{
    if state.exception {
        state.pc = config.general.exception_vector;
        state.decode_buffer.clear();
        return;
    }
    if state.decode_buffer.backpressure {
        tracing::trace!(pc = state.pc, "fetch stalled by backpressure");
        return;
    }

    let batch = source.fetch(state.pc, config.pipeline.fetch_width);
    let fetched = batch.len() as u64;
    if fetched > 0 {
        tracing::trace!(pc = state.pc, fetched, "fetch");
    }
    state.pc += fetched;
    state.stats.instructions_fetched += fetched;
    state.decode_buffer.fill(batch);
}
