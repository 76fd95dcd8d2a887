//! Instruction Set Definitions.
//!
//! The modeled instruction set is a flat sequence of integer ALU operations:
//! `add`, `sub`, `mulu`, `divu` and `remu`, each in a register-register form and an
//! immediate form (mnemonic suffixed with `i`). There is no control transfer.

/// Instruction text decoding.
pub mod decode;

/// Decoded instruction record.
pub mod instruction;

/// Opcode enumeration.
pub mod opcode;

pub use decode::parse_instruction;
pub use instruction::{DecodedInstruction, Source2};
pub use opcode::Opcode;
