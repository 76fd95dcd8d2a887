//! Register map table.
//!
//! Maps each logical register to the physical register holding its most recent
//! (possibly still in-flight) value. Mutated only by rename (forward mapping) and by
//! exception rollback (restoring the previous mapping).

use crate::common::constants::NUM_LOGICAL_REGS;
use crate::common::error::SimError;
use crate::common::reg::PhysReg;

/// Logical-to-physical register mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterMapTable {
    map: [PhysReg; NUM_LOGICAL_REGS],
}

impl Default for RegisterMapTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterMapTable {
    /// Creates the boot-time identity mapping `x_i -> p_i`.
    pub fn new() -> Self {
        Self {
            map: std::array::from_fn(PhysReg),
        }
    }

    /// Returns the physical register currently mapped to logical register `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Result<PhysReg, SimError> {
        self.map.get(idx).copied().ok_or_else(|| out_of_range(idx))
    }

    /// Maps logical register `idx` to `reg`, returning the previous mapping.
    #[inline]
    pub fn set(&mut self, idx: usize, reg: PhysReg) -> Result<PhysReg, SimError> {
        let slot = self.map.get_mut(idx).ok_or_else(|| out_of_range(idx))?;
        Ok(std::mem::replace(slot, reg))
    }

    /// Iterates the mapping in logical register order.
    pub fn iter(&self) -> impl Iterator<Item = PhysReg> + '_ {
        self.map.iter().copied()
    }
}

fn out_of_range(idx: usize) -> SimError {
    SimError::invariant(format!("logical register x{idx} out of range"))
}
