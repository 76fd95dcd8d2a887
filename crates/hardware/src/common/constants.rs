//! Global Simulator Constants.
//!
//! This module defines the fixed geometry of the modeled machine. It includes:
//! 1. **Register Space:** Logical and physical register counts.
//! 2. **Renaming Pool:** The range of physical registers that cycle through the free list.
//! 3. **Exception Vector:** The program address fetch resumes from after an exception.

/// Number of logical (architectural) integer registers, `x0`..`x31`.
pub const NUM_LOGICAL_REGS: usize = 32;

/// Number of physical registers backing the renaming layer.
pub const NUM_PHYS_REGS: usize = 64;

/// First physical register id handed out by the free list at boot.
///
/// Ids below this value start out as the identity mapping of the logical registers.
pub const FIRST_RENAME_REG: usize = NUM_LOGICAL_REGS;

/// Program address fetch is redirected to once an exception is taken.
pub const EXCEPTION_VECTOR: u64 = 0x1_0000;
