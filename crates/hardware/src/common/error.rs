//! Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Simulator Errors:** Everything that can end a run (I/O, malformed input, invariant violations).
//! 2. **Decode Errors:** Problems found while parsing instruction text.
//! 3. **Arithmetic Faults:** The recoverable fault an ALU raises instead of producing a value.
//!
//! Arithmetic faults never leave the pipeline as `SimError`: they travel through the
//! forwarding network and the active list and are handled by the commit stage.

use std::path::PathBuf;

use thiserror::Error;

/// Faults raised by a functional unit in place of a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticFault {
    /// `divu` or `remu` with a zero divisor.
    #[error("division by zero")]
    DivideByZero,
}

/// Errors produced while decoding a textual instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The instruction text was empty.
    #[error("empty instruction")]
    Empty,

    /// The mnemonic is not part of the modeled instruction set.
    #[error("unknown mnemonic '{0}'")]
    UnknownMnemonic(String),

    /// The operand list does not have exactly three operands.
    #[error("expected 3 operands, found {found}")]
    OperandCount {
        /// Number of operands present.
        found: usize,
    },

    /// An operand that should name a register does not.
    #[error("malformed register operand '{0}'")]
    BadRegister(String),

    /// A register index outside `x0`..`x31`.
    #[error("register x{0} out of range")]
    RegisterOutOfRange(usize),

    /// An immediate that is not a decimal or `0x` hexadecimal integer.
    #[error("malformed immediate '{0}'")]
    BadImmediate(String),
}

/// Errors that end a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction of the input program could not be decoded.
    #[error("instruction {pc}: {source}")]
    Decode {
        /// Program address of the offending instruction.
        pc: u64,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Program, configuration or trace JSON was malformed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration describes a machine the pipeline cannot model.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A pipeline structure was driven into an impossible state.
    ///
    /// This is a simulator defect, never a property of the simulated program.
    #[error("pipeline invariant violated: {0}")]
    Invariant(String),

    /// The run exceeded the configured cycle limit without draining.
    #[error("simulation did not drain within {0} cycles")]
    CycleLimit(u64),
}

impl SimError {
    /// Shorthand for building an [`SimError::Invariant`].
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }
}
