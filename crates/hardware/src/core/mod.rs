//! Core processor implementation.
//!
//! This module contains the renaming resource tables, the out-of-order pipeline
//! structures and stages, and the functional units they feed.

/// Renaming resources (free list, map table, busy bits, physical registers).
pub mod arch;

/// Out-of-order pipeline (active list, integer queue, forwarding, stages).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::pipeline::{InstructionSource, PipelineState};
