//! Opcodes of the modeled instruction set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::DecodeError;

/// Integer ALU operation.
///
/// All operations treat their operands as unsigned 64-bit values. Evaluation lives in
/// [`crate::core::units::alu::arithmetic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping unsigned multiplication (low 64 bits).
    Mulu,
    /// Unsigned division; faults on a zero divisor.
    Divu,
    /// Unsigned remainder; faults on a zero divisor.
    Remu,
}

impl Opcode {
    /// Every opcode, in declaration order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mulu, Self::Divu, Self::Remu];

    /// Returns the register-form mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mulu => "mulu",
            Self::Divu => "divu",
            Self::Remu => "remu",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic() == s)
            .ok_or_else(|| DecodeError::UnknownMnemonic(s.to_string()))
    }
}
