//! Integer Queue (issue queue).
//!
//! Holds renamed instructions until both operands are available. Each operand is
//! either a resolved value or a tag naming the physical register whose producer it
//! waits for. Results broadcast on the forwarding network wake matching tags.
//!
//! Entries are kept in dispatch (program) order; selection scans oldest first.

use crate::common::error::SimError;
use crate::common::reg::PhysReg;
use crate::isa::opcode::Opcode;

/// Source operand state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Value is available.
    Ready(u64),
    /// Waiting for the producer of this physical register.
    Waiting(PhysReg),
}

impl Operand {
    /// Returns true once the value is available.
    #[inline]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns the value, if available.
    #[inline]
    pub const fn value(self) -> Option<u64> {
        match self {
            Self::Ready(v) => Some(v),
            Self::Waiting(_) => None,
        }
    }

    /// Returns the producing register tag while waiting.
    #[inline]
    pub const fn tag(self) -> Option<PhysReg> {
        match self {
            Self::Ready(_) => None,
            Self::Waiting(r) => Some(r),
        }
    }

    /// Resolves the operand if it waits on `reg`. Returns true if it woke up.
    fn wake(&mut self, reg: PhysReg, value: u64) -> bool {
        if *self == Self::Waiting(reg) {
            *self = Self::Ready(value);
            true
        } else {
            false
        }
    }
}

/// An instruction waiting to issue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerQueueEntry {
    /// Physical destination register.
    pub dest: PhysReg,
    /// First source operand.
    pub op_a: Operand,
    /// Second source operand.
    pub op_b: Operand,
    /// ALU operation.
    pub opcode: Opcode,
    /// Program address.
    pub pc: u64,
}

impl IntegerQueueEntry {
    /// Returns true if both operands are available.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        self.op_a.is_ready() && self.op_b.is_ready()
    }
}

/// Bounded pool of instructions awaiting issue.
#[derive(Clone, Debug)]
pub struct IntegerQueue {
    entries: Vec<IntegerQueueEntry>,
    capacity: usize,
}

impl IntegerQueue {
    /// Creates an empty queue with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the queue capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of waiting instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no instruction is waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a renamed instruction.
    pub fn push(&mut self, entry: IntegerQueueEntry) -> Result<(), SimError> {
        if self.entries.len() >= self.capacity {
            return Err(SimError::invariant(format!(
                "integer queue overflow at pc {}",
                entry.pc
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Resolves every operand waiting on `reg` to `value`. Returns the number woken.
    pub fn wake(&mut self, reg: PhysReg, value: u64) -> usize {
        let mut woken = 0;
        for entry in &mut self.entries {
            woken += usize::from(entry.op_a.wake(reg, value));
            woken += usize::from(entry.op_b.wake(reg, value));
        }
        woken
    }

    /// Removes and returns up to `limit` ready entries, oldest first.
    ///
    /// Ready entries beyond the limit stay queued with their operand state intact.
    pub fn take_ready(&mut self, limit: usize) -> Vec<IntegerQueueEntry> {
        let mut selected = Vec::with_capacity(limit);
        let mut kept = Vec::with_capacity(self.capacity);
        for entry in self.entries.drain(..) {
            if selected.len() < limit && entry.is_ready() {
                selected.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;
        selected
    }

    /// Discards every waiting instruction.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates entries in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &IntegerQueueEntry> + '_ {
        self.entries.iter()
    }
}
