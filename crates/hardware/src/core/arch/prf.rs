//! Physical Register File.
//!
//! This module implements the value storage behind the renaming layer.
//! It performs the following:
//! 1. **Storage:** Maintains 64 unsigned 64-bit registers, all zero at boot.
//! 2. **Writeback:** Accepts forwarded results from the rename stage's writeback step.
//!
//! Unlike an architectural register file there is no hardwired zero register: the
//! logical `x0` is renamed like any other register.

use crate::common::constants::NUM_PHYS_REGS;
use crate::common::reg::PhysReg;

/// Physical register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhysicalRegisterFile {
    regs: [u64; NUM_PHYS_REGS],
}

impl Default for PhysicalRegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicalRegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_PHYS_REGS],
        }
    }

    /// Reads a physical register.
    #[inline]
    pub fn read(&self, reg: PhysReg) -> u64 {
        self.regs[reg.index()]
    }

    /// Writes a physical register.
    #[inline]
    pub fn write(&mut self, reg: PhysReg, val: u64) {
        self.regs[reg.index()] = val;
    }

    /// Iterates the register values in register order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.regs.iter().copied()
    }
}
