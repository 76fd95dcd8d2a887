//! Out-of-order pipeline simulator library.
//!
//! This crate implements a cycle-by-cycle model of an out-of-order integer core
//! with the following:
//! 1. **Renaming:** Free list, register map table, busy bits and a 64-entry physical register file.
//! 2. **Scheduling:** Active list, integer queue and a per-cycle forwarding network.
//! 3. **Execution:** Four pipelined ALUs with greedy load balancing.
//! 4. **Recovery:** In-order commit with precise rollback of arithmetic exceptions.
//! 5. **Simulation:** Program loading, configuration, per-cycle state snapshots and statistics.
//!
//! # Examples
//!
//! ```
//! use oosim_core::{Config, Program, Simulator, StateSnapshot};
//!
//! let program = Program::from_json_str(r#"["addi x1, x0, 6", "mulu x2, x1, x1"]"#).unwrap();
//! let mut sim = Simulator::new(program, Config::default()).unwrap();
//! let mut trace: Vec<StateSnapshot> = Vec::new();
//! let stats = sim.run(&mut trace).unwrap();
//!
//! assert_eq!(stats.instructions_committed, 2);
//! assert_eq!(sim.state().logical_value(2).unwrap(), 36);
//! assert_eq!(trace.len() as u64, stats.cycles + 1);
//! ```

/// Common types and constants (register ids, error types, machine sizes).
pub mod common;
/// Simulator configuration (defaults, pipeline geometry, validation).
pub mod config;
/// Processor core (renaming resources, pipeline, functional units).
pub mod core;
/// Instruction set (opcodes, decoded instruction, text decoder).
pub mod isa;
/// Cycle driver, program loader and trace output.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Error type returned by every fallible operation.
pub use crate::common::SimError;
/// Decoded program; feeds the fetch stage.
pub use crate::sim::Program;
/// Cycle driver.
pub use crate::sim::Simulator;
/// Per-cycle visible state.
pub use crate::sim::{StateSink, StateSnapshot};
/// Run counters.
pub use crate::stats::SimStats;
