//! Out-of-order instruction pipeline.
//!
//! This module contains the structures and stages of the renaming pipeline.
//! It includes the following components:
//! 1. **Active List:** Program-order record of in-flight instructions for commit and rollback.
//! 2. **Integer Queue:** Instructions waiting for operands before issue.
//! 3. **Forwarding:** Per-cycle broadcast of completed results.
//! 4. **Latches:** The decode buffer between fetch and rename.
//! 5. **State:** The aggregate every stage operates on.
//! 6. **Stages:** Fetch, Rename & Dispatch, Issue, Execute and Commit.
//! 7. **Traits:** The instruction source feeding fetch.

/// Active list (reorder buffer).
pub mod active_list;

/// Result forwarding network.
pub mod forwarding;

/// Integer (issue) queue and operand state.
pub mod integer_queue;

/// Decode buffer between fetch and rename.
pub mod latches;

/// Pipeline stage implementations.
pub mod stages;

/// Aggregate micro-architectural state.
pub mod state;

/// Instruction source interface.
pub mod traits;

pub use self::state::PipelineState;
pub use self::traits::InstructionSource;
