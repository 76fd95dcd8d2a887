//! Arithmetic Logic Units (ALU).
//!
//! This module implements the integer functional units used by the Execute stage.
//! It provides:
//! 1. **Evaluation:** Opcode semantics in [`arithmetic`].
//! 2. **Pipelines:** Fixed-depth ALU pipelines that hold issued work until it completes.
//! 3. **Load Balancing:** A pool that sends each operation to the least-occupied unit.
//!
//! An idle unit inserts a latency placeholder ahead of the first operation it
//! receives, so work issued in cycle N into an idle unit completes in cycle N+2.
//! Work issued behind an operation already in flight completes one cycle after it.

/// Integer arithmetic operations (add, sub, mulu, divu, remu).
pub mod arithmetic;

use std::collections::VecDeque;

use crate::common::error::SimError;
use crate::common::reg::PhysReg;
use crate::core::pipeline::forwarding::ForwardingEntry;
use crate::isa::opcode::Opcode;

/// An issued operation with both operand values resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOp {
    /// Program address of the instruction.
    pub pc: u64,
    /// Operation to perform.
    pub opcode: Opcode,
    /// Physical destination register.
    pub dest: PhysReg,
    /// First operand value.
    pub a: u64,
    /// Second operand value.
    pub b: u64,
}

impl AluOp {
    /// Computes the forwarding entry this operation produces.
    ///
    /// A faulting operation produces value 0 with the exception flag set.
    pub fn evaluate(&self) -> ForwardingEntry {
        let (value, exception) = match arithmetic::execute(self.opcode, self.a, self.b) {
            Ok(value) => (value, false),
            Err(_) => (0, true),
        };
        ForwardingEntry {
            pc: self.pc,
            dest: self.dest,
            value,
            exception,
        }
    }
}

/// A single fixed-depth ALU pipeline.
///
/// Slots hold either an operation or a latency placeholder (`None`).
#[derive(Clone, Debug)]
pub struct AluPipeline {
    slots: VecDeque<Option<AluOp>>,
    depth: usize,
}

impl AluPipeline {
    /// Creates an idle pipeline with `depth` slots.
    pub fn new(depth: usize) -> Self {
        Self {
            slots: VecDeque::with_capacity(depth),
            depth,
        }
    }

    /// Returns the number of occupied slots, placeholders included.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the pipeline holds nothing.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.slots.is_empty()
    }

    /// Accepts an operation.
    ///
    /// Exceeding the pipeline depth is an invariant violation.
    pub fn enqueue(&mut self, op: AluOp) -> Result<(), SimError> {
        if self.slots.is_empty() {
            self.slots.push_back(None);
        }
        if self.slots.len() >= self.depth {
            return Err(SimError::invariant(format!(
                "ALU depth {} exceeded by pc {}",
                self.depth, op.pc
            )));
        }
        self.slots.push_back(Some(op));
        Ok(())
    }

    /// Advances one cycle, returning the result of the operation leaving the pipeline.
    pub fn tick(&mut self) -> Option<ForwardingEntry> {
        let op = self.slots.pop_front().flatten()?;
        Some(op.evaluate())
    }

    /// Drops all in-flight work.
    pub fn flush(&mut self) {
        self.slots.clear();
    }
}

/// The set of ALU pipelines fed by the Issue stage.
#[derive(Clone, Debug)]
pub struct AluPool {
    units: Vec<AluPipeline>,
}

impl AluPool {
    /// Creates `count` idle pipelines of `depth` slots each.
    pub fn new(count: usize, depth: usize) -> Self {
        Self {
            units: (0..count).map(|_| AluPipeline::new(depth)).collect(),
        }
    }

    /// Sends `op` to the least-occupied pipeline; ties go to the lowest index.
    ///
    /// Returns the index of the chosen pipeline.
    pub fn enqueue(&mut self, op: AluOp) -> Result<usize, SimError> {
        let (idx, unit) = self
            .units
            .iter_mut()
            .enumerate()
            .min_by_key(|(_, unit)| unit.occupancy())
            .ok_or_else(|| SimError::invariant("ALU pool has no units"))?;
        unit.enqueue(op)?;
        Ok(idx)
    }

    /// Advances every pipeline one cycle and collects completed results in unit order.
    pub fn tick(&mut self) -> Vec<ForwardingEntry> {
        self.units.iter_mut().filter_map(AluPipeline::tick).collect()
    }

    /// Drops all in-flight work in every pipeline.
    pub fn flush(&mut self) {
        self.units.iter_mut().for_each(AluPipeline::flush);
    }

    /// Returns true if every pipeline is idle.
    pub fn is_idle(&self) -> bool {
        self.units.iter().all(AluPipeline::is_idle)
    }

    /// Iterates the pipelines in index order.
    pub fn iter(&self) -> impl Iterator<Item = &AluPipeline> + '_ {
        self.units.iter()
    }
}
