//! Physical register identifiers.
//!
//! Logical registers are plain `usize` indices validated at decode time; physical
//! registers get a newtype so the renaming tables cannot mix the two up.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::NUM_PHYS_REGS;

/// Identifier of a physical register in the range `[0, 64)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysReg(pub usize);

impl PhysReg {
    /// Returns the register id as a table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns true if the id addresses a real physical register.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 < NUM_PHYS_REGS
    }
}

impl fmt::Display for PhysReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}
