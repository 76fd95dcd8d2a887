//! Execution units.
//!
//! The modeled core has a single kind of functional unit: the integer ALU.

/// Arithmetic Logic Units and their pipelines.
pub mod alu;
