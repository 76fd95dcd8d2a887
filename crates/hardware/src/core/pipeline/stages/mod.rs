//! Pipeline stage implementations.
//!
//! Each stage is a free function over the shared [`PipelineState`]. The cycle
//! driver calls them in this order every cycle:
//! 1. **Execute:** Advances the ALUs and publishes completed results.
//! 2. **Commit:** Retires done instructions, raises exceptions, unwinds after one.
//! 3. **Issue:** Wakes waiting operands and sends ready instructions to the ALUs.
//! 4. **Rename & Dispatch:** Writes results back and renames the next group.
//! 5. **Fetch:** Fills the decode buffer or redirects to the exception vector.
//!
//! [`PipelineState`]: crate::core::pipeline::state::PipelineState

/// Active list retirement and exception recovery.
pub mod commit;

/// ALU advance and result broadcast.
pub mod execute;

/// Instruction fetch into the decode buffer.
pub mod fetch;

/// Operand wake-up and instruction selection.
pub mod issue;

/// Register writeback, renaming and dispatch.
pub mod rename;

/// Commit stage entry point.
pub use commit::commit_stage;
/// Execute stage entry point.
pub use execute::execute_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Issue stage entry point.
pub use issue::issue_stage;
/// Rename & Dispatch stage entry point.
pub use rename::rename_stage;
