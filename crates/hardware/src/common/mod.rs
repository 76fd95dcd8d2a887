//! Common types and constants shared by every part of the simulator.
//!
//! This module provides:
//! 1. **Constants:** Register-space sizes and the exception vector.
//! 2. **Error Handling:** The simulator error type, decode errors and arithmetic faults.
//! 3. **Register Identifiers:** A strong type for physical register ids.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and arithmetic fault definitions.
pub mod error;

/// Physical register identifier.
pub mod reg;

pub use constants::{EXCEPTION_VECTOR, NUM_LOGICAL_REGS, NUM_PHYS_REGS};
pub use error::{ArithmeticFault, DecodeError, SimError};
pub use reg::PhysReg;
