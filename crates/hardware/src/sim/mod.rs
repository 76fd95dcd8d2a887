//! Simulation driver, program loading and trace output.
//!
//! Provides the cycle driver, the JSON program loader and the per-cycle snapshot
//! types written to the output trace.

pub mod loader;
pub mod simulator;
pub mod trace;

pub use self::loader::Program;
pub use self::simulator::Simulator;
pub use self::trace::{StateSink, StateSnapshot};
