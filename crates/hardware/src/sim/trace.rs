//! Per-cycle state snapshots.
//!
//! This module defines the externally visible view of the pipeline. It provides:
//! 1. **Snapshots:** A serializable copy of the architectural and micro-architectural
//!    state, with the field names used by the JSON trace format.
//! 2. **Sinks:** The [`StateSink`] interface the cycle driver reports snapshots to.
//! 3. **Output:** Writing a collected trace as a JSON array.
//!
//! In the integer queue view a ready operand has tag 0 and its value; a waiting
//! operand has its producer's tag and value 0.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::SimError;
use crate::common::reg::PhysReg;
use crate::core::pipeline::integer_queue::{IntegerQueueEntry, Operand};
use crate::core::pipeline::state::PipelineState;
use crate::isa::opcode::Opcode;

/// Active list entry as it appears in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveListRecord {
    /// Execution finished.
    #[serde(rename = "Done")]
    pub done: bool,
    /// Execution faulted.
    #[serde(rename = "Exception")]
    pub exception: bool,
    /// Logical destination register.
    #[serde(rename = "LogicalDestination")]
    pub logical_destination: usize,
    /// Physical register the destination mapped to before this instruction.
    #[serde(rename = "OldDestination")]
    pub old_destination: usize,
    /// Program address.
    #[serde(rename = "PC")]
    pub pc: u64,
}

/// Integer queue entry as it appears in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerQueueRecord {
    /// Physical destination register.
    #[serde(rename = "DestRegister")]
    pub dest_register: usize,
    /// First operand is available.
    #[serde(rename = "OpAIsReady")]
    pub op_a_is_ready: bool,
    /// First operand producer tag (0 when ready).
    #[serde(rename = "OpARegTag")]
    pub op_a_reg_tag: usize,
    /// First operand value (0 while waiting).
    #[serde(rename = "OpAValue")]
    pub op_a_value: u64,
    /// Second operand is available.
    #[serde(rename = "OpBIsReady")]
    pub op_b_is_ready: bool,
    /// Second operand producer tag (0 when ready).
    #[serde(rename = "OpBRegTag")]
    pub op_b_reg_tag: usize,
    /// Second operand value (0 while waiting).
    #[serde(rename = "OpBValue")]
    pub op_b_value: u64,
    /// Operation mnemonic.
    #[serde(rename = "OpCode")]
    pub op_code: Opcode,
    /// Program address.
    #[serde(rename = "PC")]
    pub pc: u64,
}

impl From<&IntegerQueueEntry> for IntegerQueueRecord {
    fn from(entry: &IntegerQueueEntry) -> Self {
        let (op_a_is_ready, op_a_reg_tag, op_a_value) = operand_fields(entry.op_a);
        let (op_b_is_ready, op_b_reg_tag, op_b_value) = operand_fields(entry.op_b);
        Self {
            dest_register: entry.dest.index(),
            op_a_is_ready,
            op_a_reg_tag,
            op_a_value,
            op_b_is_ready,
            op_b_reg_tag,
            op_b_value,
            op_code: entry.opcode,
            pc: entry.pc,
        }
    }
}

fn operand_fields(op: Operand) -> (bool, usize, u64) {
    (
        op.is_ready(),
        op.tag().map_or(0, PhysReg::index),
        op.value().unwrap_or(0),
    )
}

/// Complete visible state at the end of one cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// In-flight instructions, oldest first.
    #[serde(rename = "ActiveList")]
    pub active_list: Vec<ActiveListRecord>,
    /// Busy flag per physical register.
    #[serde(rename = "BusyBitTable")]
    pub busy_bit_table: Vec<bool>,
    /// Program addresses waiting in the decode buffer.
    #[serde(rename = "DecodedPCs")]
    pub decoded_pcs: Vec<u64>,
    /// Exception recovery in progress.
    #[serde(rename = "Exception")]
    pub exception: bool,
    /// Address of the faulting instruction.
    #[serde(rename = "ExceptionPC")]
    pub exception_pc: u64,
    /// Free physical registers, allocation order.
    #[serde(rename = "FreeList")]
    pub free_list: Vec<usize>,
    /// Waiting instructions, sorted by program address.
    #[serde(rename = "IntegerQueue")]
    pub integer_queue: Vec<IntegerQueueRecord>,
    /// Fetch cursor.
    #[serde(rename = "PC")]
    pub pc: u64,
    /// Physical register values.
    #[serde(rename = "PhysicalRegisterFile")]
    pub physical_register_file: Vec<u64>,
    /// Physical register of each logical register.
    #[serde(rename = "RegisterMapTable")]
    pub register_map_table: Vec<usize>,
}

impl StateSnapshot {
    /// Copies the visible parts of `state`.
    pub fn capture(state: &PipelineState) -> Self {
        let mut integer_queue: Vec<IntegerQueueRecord> =
            state.integer_queue.iter().map(IntegerQueueRecord::from).collect();
        integer_queue.sort_by_key(|e| e.pc);

        Self {
            active_list: state
                .active_list
                .iter()
                .map(|e| ActiveListRecord {
                    done: e.done,
                    exception: e.exception,
                    logical_destination: e.logical_dest,
                    old_destination: e.old_dest.index(),
                    pc: e.pc,
                })
                .collect(),
            busy_bit_table: state.busy_table.iter().collect(),
            decoded_pcs: state.decode_buffer.pcs(),
            exception: state.exception,
            exception_pc: state.exception_pc,
            free_list: state.free_list.iter().map(|r| r.index()).collect(),
            integer_queue,
            pc: state.pc,
            physical_register_file: state.prf.iter().collect(),
            register_map_table: state.map_table.iter().map(|r| r.index()).collect(),
        }
    }
}

/// Receives one snapshot per cycle, starting with the state before the first cycle.
pub trait StateSink {
    /// Records a snapshot.
    fn record(&mut self, snapshot: StateSnapshot) -> Result<(), SimError>;
}

impl StateSink for Vec<StateSnapshot> {
    fn record(&mut self, snapshot: StateSnapshot) -> Result<(), SimError> {
        self.push(snapshot);
        Ok(())
    }
}

/// Writes `snapshots` to `writer` as a compact JSON array.
pub fn write_json_to<W: Write>(writer: W, snapshots: &[StateSnapshot]) -> Result<(), SimError> {
    serde_json::to_writer(writer, snapshots)?;
    Ok(())
}

/// Writes `snapshots` to the file at `path` as a JSON array.
pub fn write_json(path: impl AsRef<Path>, snapshots: &[StateSnapshot]) -> Result<(), SimError> {
    let path = path.as_ref();
    let io_err = |source| SimError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_json_to(&mut writer, snapshots)?;
    writer.flush().map_err(io_err)
}
