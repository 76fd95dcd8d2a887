//! Aggregate pipeline state.
//!
//! Every stage receives `&mut PipelineState` and mutates the structures it owns in
//! place. Changes are visible to stages that run later in the same cycle and to
//! earlier stages in the next cycle.

use crate::common::error::SimError;
use crate::common::reg::PhysReg;
use crate::config::PipelineConfig;
use crate::core::arch::{BusyBitTable, FreeList, PhysicalRegisterFile, RegisterMapTable};
use crate::core::units::alu::AluPool;
use crate::stats::SimStats;

use super::active_list::ActiveList;
use super::forwarding::ForwardingNetwork;
use super::integer_queue::IntegerQueue;
use super::latches::DecodeBuffer;

/// All micro-architectural state of the modeled core.
#[derive(Clone, Debug)]
pub struct PipelineState {
    /// Next program address to fetch.
    pub pc: u64,
    /// Decoded instructions awaiting rename.
    pub decode_buffer: DecodeBuffer,
    /// Unallocated physical registers.
    pub free_list: FreeList,
    /// Logical to physical register mapping.
    pub map_table: RegisterMapTable,
    /// Physical registers whose producer has not written back.
    pub busy_table: BusyBitTable,
    /// Physical register values.
    pub prf: PhysicalRegisterFile,
    /// In-flight instructions in program order.
    pub active_list: ActiveList,
    /// Instructions waiting to issue.
    pub integer_queue: IntegerQueue,
    /// Results completed this cycle.
    pub forwarding: ForwardingNetwork,
    /// ALU pipelines.
    pub alus: AluPool,
    /// Exception recovery in progress.
    pub exception: bool,
    /// Program address of the instruction that raised the current (or last) exception.
    pub exception_pc: u64,
    /// Counters.
    pub stats: SimStats,
}

impl PipelineState {
    /// Creates the boot state: identity register mapping, every register zero, empty queues.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            pc: 0,
            decode_buffer: DecodeBuffer::new(),
            free_list: FreeList::new(),
            map_table: RegisterMapTable::new(),
            busy_table: BusyBitTable::new(),
            prf: PhysicalRegisterFile::new(),
            active_list: ActiveList::new(config.active_list_size),
            integer_queue: IntegerQueue::new(config.integer_queue_size),
            forwarding: ForwardingNetwork::new(),
            alus: AluPool::new(config.alu_count, config.alu_depth),
            exception: false,
            exception_pc: 0,
            stats: SimStats::default(),
        }
    }

    /// Returns true when nothing is left to rename or retire and no exception is pending.
    pub fn is_drained(&self) -> bool {
        self.decode_buffer.is_empty() && self.active_list.is_empty() && !self.exception
    }

    /// Returns the physical register currently holding logical register `idx`.
    pub fn mapping(&self, idx: usize) -> Result<PhysReg, SimError> {
        self.map_table.get(idx)
    }

    /// Returns the value of logical register `idx` through the current mapping.
    ///
    /// Once the pipeline has drained this is the committed architectural value.
    pub fn logical_value(&self, idx: usize) -> Result<u64, SimError> {
        Ok(self.prf.read(self.map_table.get(idx)?))
    }
}
