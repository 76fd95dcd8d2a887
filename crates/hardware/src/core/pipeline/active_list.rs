//! Active List (reorder buffer) for in-order commit.
//!
//! The active list tracks in-flight instructions from rename through commit. It provides:
//! 1. **Allocation:** Appends entries in program order at dispatch.
//! 2. **Completion:** Marks entries done (and possibly excepted) by program address.
//! 3. **In-order Commit:** Retires entries from the head.
//! 4. **Rollback:** Unwinds entries from the tail during exception recovery.
//!
//! The program address is the entry's identity. Addresses strictly increase from head
//! to tail, which lets lookup by address use a binary search.

use std::collections::VecDeque;

use crate::common::error::SimError;
use crate::common::reg::PhysReg;

/// A single entry in the active list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveListEntry {
    /// Logical destination register.
    pub logical_dest: usize,
    /// Physical register the logical destination mapped to before this instruction.
    pub old_dest: PhysReg,
    /// Program address.
    pub pc: u64,
    /// Physical register allocated to this instruction's result.
    pub phys_dest: PhysReg,
    /// Execution finished (result or fault published).
    pub done: bool,
    /// Execution faulted; the fault is taken when the entry reaches the head.
    pub exception: bool,
}

impl ActiveListEntry {
    /// Creates a not-yet-done entry.
    pub const fn new(logical_dest: usize, old_dest: PhysReg, pc: u64, phys_dest: PhysReg) -> Self {
        Self {
            logical_dest,
            old_dest,
            pc,
            phys_dest,
            done: false,
            exception: false,
        }
    }
}

/// Active list: bounded program-order queue of in-flight instructions.
#[derive(Clone, Debug)]
pub struct ActiveList {
    entries: VecDeque<ActiveListEntry>,
    capacity: usize,
}

impl ActiveList {
    /// Creates an empty active list with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the active list capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of in-flight entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the active list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity - self.entries.len()
    }

    /// Appends an entry at the tail.
    ///
    /// Overflowing the capacity or breaking program order is an invariant violation.
    pub fn push(&mut self, entry: ActiveListEntry) -> Result<(), SimError> {
        if self.entries.len() >= self.capacity {
            return Err(SimError::invariant(format!(
                "active list overflow at pc {}",
                entry.pc
            )));
        }
        if let Some(tail) = self.entries.back() {
            if tail.pc >= entry.pc {
                return Err(SimError::invariant(format!(
                    "active list order: pc {} dispatched after pc {}",
                    entry.pc, tail.pc
                )));
            }
        }
        self.entries.push_back(entry);
        Ok(())
    }

    /// Returns the oldest entry, if any.
    pub fn peek_head(&self) -> Option<&ActiveListEntry> {
        self.entries.front()
    }

    /// Removes and returns the oldest entry.
    pub fn pop_head(&mut self) -> Option<ActiveListEntry> {
        self.entries.pop_front()
    }

    /// Removes and returns the youngest entry.
    pub fn pop_tail(&mut self) -> Option<ActiveListEntry> {
        self.entries.pop_back()
    }

    /// Finds the entry for program address `pc`.
    pub fn find_by_pc(&self, pc: u64) -> Option<&ActiveListEntry> {
        let idx = self.entries.binary_search_by_key(&pc, |e| e.pc).ok()?;
        self.entries.get(idx)
    }

    /// Finds the entry for program address `pc` mutably.
    pub fn find_by_pc_mut(&mut self, pc: u64) -> Option<&mut ActiveListEntry> {
        let idx = self.entries.binary_search_by_key(&pc, |e| e.pc).ok()?;
        self.entries.get_mut(idx)
    }

    /// Marks the entry for `pc` as done, recording whether it faulted.
    pub fn complete(&mut self, pc: u64, exception: bool) -> Result<(), SimError> {
        let entry = self.find_by_pc_mut(pc).ok_or_else(|| {
            SimError::invariant(format!("completion for pc {pc} which is not in flight"))
        })?;
        entry.done = true;
        entry.exception = exception;
        Ok(())
    }

    /// Iterates entries from oldest to youngest.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveListEntry> + '_ {
        self.entries.iter()
    }
}
