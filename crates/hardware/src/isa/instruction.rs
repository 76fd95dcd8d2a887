//! Decoded instruction record.
//!
//! A decoded instruction is immutable. Renaming does not rewrite it; the physical
//! destination is carried by the integer queue and active list entries instead.

use std::fmt;

use super::opcode::Opcode;

/// Second source operand: a logical register or an immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source2 {
    /// Logical register `x0`..`x31`.
    Reg(usize),
    /// 64-bit unsigned immediate.
    Imm(u64),
}

/// One instruction of the input program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Program address; unique and the instruction's identity in the pipeline.
    pub pc: u64,
    /// ALU operation.
    pub opcode: Opcode,
    /// Logical destination register.
    pub rd: usize,
    /// Logical first source register.
    pub rs1: usize,
    /// Second source operand.
    pub src2: Source2,
}

impl DecodedInstruction {
    /// Creates a register-register instruction.
    pub const fn reg(pc: u64, opcode: Opcode, rd: usize, rs1: usize, rs2: usize) -> Self {
        Self {
            pc,
            opcode,
            rd,
            rs1,
            src2: Source2::Reg(rs2),
        }
    }

    /// Creates a register-immediate instruction.
    pub const fn imm(pc: u64, opcode: Opcode, rd: usize, rs1: usize, imm: u64) -> Self {
        Self {
            pc,
            opcode,
            rd,
            rs1,
            src2: Source2::Imm(imm),
        }
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.src2 {
            Source2::Reg(rs2) => write!(
                f,
                "{} x{}, x{}, x{}",
                self.opcode, self.rd, self.rs1, rs2
            ),
            Source2::Imm(imm) => write!(f, "{}i x{}, x{}, {}", self.opcode, self.rd, self.rs1, imm),
        }
    }
}
