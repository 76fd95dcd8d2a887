//! Busy-bit table: one flag per physical register, set while its value is pending.

use crate::common::constants::NUM_PHYS_REGS;
use crate::common::reg::PhysReg;

/// Per physical register "value not yet produced" flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusyBitTable {
    bits: [bool; NUM_PHYS_REGS],
}

impl Default for BusyBitTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyBitTable {
    /// Creates a table with every register ready.
    pub const fn new() -> Self {
        Self {
            bits: [false; NUM_PHYS_REGS],
        }
    }

    /// Returns true while `reg`'s producer has not written back.
    #[inline]
    pub fn is_busy(&self, reg: PhysReg) -> bool {
        self.bits[reg.index()]
    }

    /// Marks `reg` as awaiting its producer.
    #[inline]
    pub fn set(&mut self, reg: PhysReg) {
        self.bits[reg.index()] = true;
    }

    /// Marks `reg`'s value as available.
    #[inline]
    pub fn clear(&mut self, reg: PhysReg) {
        self.bits[reg.index()] = false;
    }

    /// Iterates the flags in register order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}
