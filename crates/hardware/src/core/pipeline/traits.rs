//! Pipeline front-end interface.
//!
//! The Fetch stage pulls decoded instructions through [`InstructionSource`], which
//! keeps the pipeline independent of where the program comes from (a parsed file,
//! a generated test program, a mock).

use crate::isa::instruction::DecodedInstruction;

/// Supplies decoded instructions by program address.
pub trait InstructionSource {
    /// Returns up to `max` instructions starting at program address `cursor`, in
    /// program order. Returns an empty vector once the program is exhausted.
    fn fetch(&mut self, cursor: u64, max: usize) -> Vec<DecodedInstruction>;
}

