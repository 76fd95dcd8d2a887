//! Front-end latch between Fetch/Decode and Rename.
//!
//! The decode buffer holds decoded instructions that have not been renamed yet,
//! ordered by program address. Rename raises backpressure when the back end cannot
//! accept the next group, which stops Fetch from appending more.

use std::collections::VecDeque;

use crate::isa::instruction::DecodedInstruction;

/// Decoded-but-not-renamed instructions plus the backpressure signal.
#[derive(Clone, Debug, Default)]
pub struct DecodeBuffer {
    instructions: VecDeque<DecodedInstruction>,
    /// Rename could not admit the head group in the most recent attempt.
    pub backpressure: bool,
}

impl DecodeBuffer {
    /// Creates an empty buffer without backpressure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of buffered instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if no instruction is buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Appends freshly decoded instructions, keeping the buffer sorted by address.
    pub fn fill(&mut self, batch: impl IntoIterator<Item = DecodedInstruction>) {
        self.instructions.extend(batch);
        self.instructions.make_contiguous().sort_by_key(|inst| inst.pc);
    }

    /// Removes up to `n` instructions from the head.
    pub fn take(&mut self, n: usize) -> Vec<DecodedInstruction> {
        let n = n.min(self.instructions.len());
        self.instructions.drain(..n).collect()
    }

    /// Discards the buffered instructions and releases backpressure.
    pub fn clear(&mut self) {
        self.instructions.clear();
        self.backpressure = false;
    }

    /// Program addresses of the buffered instructions, oldest first.
    pub fn pcs(&self) -> Vec<u64> {
        self.instructions.iter().map(|inst| inst.pc).collect()
    }

    /// Iterates buffered instructions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DecodedInstruction> + '_ {
        self.instructions.iter()
    }
}
