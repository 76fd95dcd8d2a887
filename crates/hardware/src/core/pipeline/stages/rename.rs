//! Rename & Dispatch Stage: writeback, register renaming, queue insertion.
//!
//! This stage does nothing while an exception is being recovered. Otherwise it:
//! 1. **Writeback:** Writes every non-faulting forwarded result into the physical
//!    register file and clears its busy bit.
//! 2. **Admission:** Takes the next group of up to `dispatch_width` instructions only
//!    if the free list, active list and integer queue can all hold the whole group;
//!    otherwise asserts backpressure and leaves the group in the decode buffer.
//! 3. **Renaming:** Allocates a destination register per instruction, reads source
//!    mappings before the destination mapping changes, and records the old mapping
//!    for rollback.
//! 4. **Dispatch:** Appends an integer queue entry and an active list entry.

use crate::common::error::SimError;
use crate::common::reg::PhysReg;
use crate::config::PipelineConfig;
use crate::core::pipeline::active_list::ActiveListEntry;
use crate::core::pipeline::integer_queue::{IntegerQueueEntry, Operand};
use crate::core::pipeline::state::PipelineState;
use crate::isa::instruction::{DecodedInstruction, Source2};

/// Executes the rename & dispatch stage.
pub fn rename_stage(state: &mut PipelineState, config: &PipelineConfig) -> Result<(), SimError> {
    if state.exception {
        return Ok(());
    }

    for (dest, value) in state.forwarding.results() {
        state.prf.write(dest, value);
        state.busy_table.clear(dest);
    }

    let size = config.dispatch_width.min(state.decode_buffer.len());
    let fits = state.free_list.has_at_least(size)
        && state.active_list.free_slots() >= size
        && state.integer_queue.len() + size <= state.integer_queue.capacity();
    if !fits {
        tracing::debug!(
            size,
            free = state.free_list.len(),
            active = state.active_list.len(),
            queued = state.integer_queue.len(),
            "rename backpressure"
        );
        state.decode_buffer.backpressure = true;
        state.stats.backpressure_cycles += 1;
        return Ok(());
    }
    state.decode_buffer.backpressure = false;

    for inst in state.decode_buffer.take(size) {
        dispatch(state, &inst)?;
    }
    Ok(())
}

/// Renames one instruction and places it in the integer queue and active list.
fn dispatch(state: &mut PipelineState, inst: &DecodedInstruction) -> Result<(), SimError> {
    let op_a = read_operand(state, state.map_table.get(inst.rs1)?);
    let op_b = match inst.src2 {
        Source2::Reg(rs2) => read_operand(state, state.map_table.get(rs2)?),
        Source2::Imm(imm) => Operand::Ready(imm),
    };
    // Checked before allocation so a bad destination leaves the free list untouched.
    let _ = state.map_table.get(inst.rd)?;

    let dest = state.free_list.allocate()?;
    let old_dest = state.map_table.set(inst.rd, dest)?;
    state.busy_table.set(dest);

    state.integer_queue.push(IntegerQueueEntry {
        dest,
        op_a,
        op_b,
        opcode: inst.opcode,
        pc: inst.pc,
    })?;
    state
        .active_list
        .push(ActiveListEntry::new(inst.rd, old_dest, inst.pc, dest))?;
    state.stats.instructions_dispatched += 1;

    tracing::debug!(pc = inst.pc, %inst, %dest, %old_dest, "dispatch");
    Ok(())
}

/// Resolves a source register to its value, or to a wait on its producer.
fn read_operand(state: &PipelineState, reg: PhysReg) -> Operand {
    if state.busy_table.is_busy(reg) {
        Operand::Waiting(reg)
    } else {
        Operand::Ready(state.prf.read(reg))
    }
}
