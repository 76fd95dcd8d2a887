//! Physical register free list.
//!
//! A FIFO pool: allocation takes the front, release appends to the back. The order
//! does not affect correctness, but it decides which register id is reused next and
//! therefore shows up in every state snapshot.

use std::collections::VecDeque;

use crate::common::constants::{FIRST_RENAME_REG, NUM_PHYS_REGS};
use crate::common::error::SimError;
use crate::common::reg::PhysReg;

/// FIFO pool of unallocated physical registers.
#[derive(Clone, Debug)]
pub struct FreeList {
    regs: VecDeque<PhysReg>,
}

impl Default for FreeList {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeList {
    /// Creates the boot-time free list holding the renaming pool `[32, 64)` in order.
    pub fn new() -> Self {
        Self {
            regs: (FIRST_RENAME_REG..NUM_PHYS_REGS).map(PhysReg).collect(),
        }
    }

    /// Number of free registers.
    #[inline]
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns true if no register is free.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Capacity predicate used by dispatch admission control.
    #[inline]
    pub fn has_at_least(&self, n: usize) -> bool {
        self.regs.len() >= n
    }

    /// Takes the register at the front of the pool.
    ///
    /// Callers check [`FreeList::has_at_least`] first, so an empty pool is an invariant violation.
    pub fn allocate(&mut self) -> Result<PhysReg, SimError> {
        self.regs
            .pop_front()
            .ok_or_else(|| SimError::invariant("allocation from an empty free list"))
    }

    /// Returns a register to the back of the pool.
    pub fn release(&mut self, reg: PhysReg) -> Result<(), SimError> {
        if !reg.is_valid() {
            return Err(SimError::invariant(format!("release of out-of-range register {reg}")));
        }
        if self.contains(reg) {
            return Err(SimError::invariant(format!("double free of {reg}")));
        }
        self.regs.push_back(reg);
        Ok(())
    }

    /// Returns true if `reg` is currently free.
    pub fn contains(&self, reg: PhysReg) -> bool {
        self.regs.contains(&reg)
    }

    /// Iterates the free registers front to back.
    pub fn iter(&self) -> impl Iterator<Item = PhysReg> + '_ {
        self.regs.iter().copied()
    }
}
