//! Commit Stage: in-order retirement and precise exception recovery.
//!
//! Each cycle this stage does exactly one of the following:
//! 1. **Recovery complete:** With an empty active list, clears the exception flag.
//! 2. **Rollback:** While recovering, unwinds up to `rollback_width` of the youngest
//!    entries, returning their registers to the free list and restoring the map table.
//! 3. **Retire:** Frees the old mapping of up to `commit_width` consecutive done
//!    entries at the head. A done entry that faulted is not retired: it raises the
//!    exception, discarding the integer queue and all ALU work.
//!
//! After retiring (including in the cycle an exception is raised), every active list
//! entry with a result on the forwarding network is marked done.

use crate::common::error::SimError;
use crate::config::PipelineConfig;
use crate::core::pipeline::state::PipelineState;

/// Executes the commit stage.
pub fn commit_stage(state: &mut PipelineState, config: &PipelineConfig) -> Result<(), SimError> {
    if state.active_list.is_empty() {
        if state.exception {
            tracing::debug!(pc = state.exception_pc, "exception recovery complete");
        }
        state.exception = false;
        return Ok(());
    }

    if state.exception {
        return rollback(state, config.rollback_width);
    }

    for _ in 0..config.commit_width {
        let (pc, exception) = match state.active_list.peek_head() {
            Some(head) if head.done => (head.pc, head.exception),
            _ => break,
        };
        if exception {
            raise_exception(state, pc);
            break;
        }
        if let Some(entry) = state.active_list.pop_head() {
            state.free_list.release(entry.old_dest)?;
            state.stats.instructions_committed += 1;
            tracing::debug!(pc, freed = %entry.old_dest, "commit");
        }
    }

    for result in state.forwarding.iter() {
        state.active_list.complete(result.pc, result.exception)?;
    }
    Ok(())
}

/// Enters exception mode for the faulting instruction at `pc`.
fn raise_exception(state: &mut PipelineState, pc: u64) {
    tracing::debug!(
        pc,
        in_flight = state.active_list.len(),
        "arithmetic exception"
    );
    state.exception = true;
    state.exception_pc = pc;
    state.integer_queue.clear();
    state.alus.flush();
    state.stats.exceptions += 1;
}

/// Unwinds up to `width` of the youngest active list entries, youngest first.
fn rollback(state: &mut PipelineState, width: usize) -> Result<(), SimError> {
    for _ in 0..width {
        let Some(entry) = state.active_list.pop_tail() else {
            break;
        };
        state.free_list.release(entry.phys_dest)?;
        let _ = state.map_table.set(entry.logical_dest, entry.old_dest)?;
        state.busy_table.clear(entry.phys_dest);
        state.stats.instructions_rolled_back += 1;
        tracing::trace!(pc = entry.pc, restored = %entry.old_dest, "rollback");
    }
    Ok(())
}
