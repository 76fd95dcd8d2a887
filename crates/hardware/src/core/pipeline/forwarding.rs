//! Forwarding network.
//!
//! Completed results are published here by the Execute stage and consumed within the
//! same cycle by Commit (completion marking), Issue (operand wake-up) and Rename
//! (register-file writeback). The cycle driver clears the network at the end of
//! every cycle, so an entry is visible for exactly one cycle.

use crate::common::error::SimError;
use crate::common::reg::PhysReg;

/// A result broadcast by a functional unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardingEntry {
    /// Program address of the producing instruction.
    pub pc: u64,
    /// Physical destination register.
    pub dest: PhysReg,
    /// Result value (0 when the operation faulted).
    pub value: u64,
    /// The operation raised an arithmetic fault.
    pub exception: bool,
}

/// Per-cycle table of completed results.
#[derive(Clone, Debug, Default)]
pub struct ForwardingNetwork {
    entries: Vec<ForwardingEntry>,
}

impl ForwardingNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a result.
    ///
    /// Two results for the same program address or the same destination register
    /// within one cycle are an invariant violation.
    pub fn publish(&mut self, entry: ForwardingEntry) -> Result<(), SimError> {
        if let Some(dup) = self
            .entries
            .iter()
            .find(|e| e.pc == entry.pc || e.dest == entry.dest)
        {
            return Err(SimError::invariant(format!(
                "duplicate forwarding for pc {} / {} (already holds pc {} / {})",
                entry.pc, entry.dest, dup.pc, dup.dest
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Returns the number of results published this cycle.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was published this cycle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the result produced by the instruction at `pc`.
    pub fn by_pc(&self, pc: u64) -> Option<&ForwardingEntry> {
        self.entries.iter().find(|e| e.pc == pc)
    }

    /// Iterates every published entry, faulting ones included.
    pub fn iter(&self) -> impl Iterator<Item = &ForwardingEntry> + '_ {
        self.entries.iter()
    }

    /// Iterates `(dest, value)` for results that did not fault.
    pub fn results(&self) -> impl Iterator<Item = (PhysReg, u64)> + '_ {
        self.entries
            .iter()
            .filter(|e| !e.exception)
            .map(|e| (e.dest, e.value))
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
