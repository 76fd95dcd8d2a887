//! Renaming-layer storage.
//!
//! This module contains the primitive tables register renaming is built from:
//! 1. **Free List:** FIFO pool of unallocated physical registers.
//! 2. **Register Map Table:** Logical-to-physical mapping.
//! 3. **Busy-Bit Table:** Per physical register "value not yet produced" flags.
//! 4. **Physical Register File:** Values of all physical registers.
//!
//! None of these tables has behavior beyond bounded storage; the stages in
//! [`crate::core::pipeline::stages`] enforce the protocol between them.

/// Busy-bit table.
pub mod busy_table;

/// Physical register free list.
pub mod free_list;

/// Register map table.
pub mod map_table;

/// Physical register file.
pub mod prf;

pub use busy_table::BusyBitTable;
pub use free_list::FreeList;
pub use map_table::RegisterMapTable;
pub use prf::PhysicalRegisterFile;
