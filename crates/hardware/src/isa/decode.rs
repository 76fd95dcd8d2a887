//! Instruction text decoding.
//!
//! Accepted forms:
//!
//! ```text
//! <op>  x<rd>, x<rs1>, x<rs2>
//! <op>i x<rd>, x<rs1>, <imm>
//! ```
//!
//! where `<op>` is one of `add`, `sub`, `mulu`, `divu`, `remu`. Operands are separated
//! by commas and/or whitespace. Immediates are decimal (a leading `-` wraps to the
//! two's complement 64-bit value) or `0x`-prefixed hexadecimal.

use crate::common::constants::NUM_LOGICAL_REGS;
use crate::common::error::DecodeError;

use super::instruction::DecodedInstruction;
use super::opcode::Opcode;

/// Decodes one line of instruction text located at program address `pc`.
///
/// # Examples
///
/// ```
/// use oosim_core::isa::{parse_instruction, Opcode, Source2};
///
/// let inst = parse_instruction(3, "addi x1, x0, -1").unwrap();
/// assert_eq!(inst.pc, 3);
/// assert_eq!(inst.opcode, Opcode::Add);
/// assert_eq!(inst.src2, Source2::Imm(u64::MAX));
/// ```
pub fn parse_instruction(pc: u64, text: &str) -> Result<DecodedInstruction, DecodeError> {
    let mut tokens = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let mnemonic = tokens.next().ok_or(DecodeError::Empty)?;
    let operands: Vec<&str> = tokens.collect();
    if operands.len() != 3 {
        return Err(DecodeError::OperandCount {
            found: operands.len(),
        });
    }

    let (opcode, immediate_form) = match mnemonic.parse::<Opcode>() {
        Ok(op) => (op, false),
        Err(err) => {
            let op = mnemonic
                .strip_suffix('i')
                .and_then(|base| base.parse::<Opcode>().ok())
                .ok_or(err)?;
            (op, true)
        }
    };

    let rd = parse_register(operands[0])?;
    let rs1 = parse_register(operands[1])?;
    if immediate_form {
        let imm = parse_immediate(operands[2])?;
        Ok(DecodedInstruction::imm(pc, opcode, rd, rs1, imm))
    } else {
        let rs2 = parse_register(operands[2])?;
        Ok(DecodedInstruction::reg(pc, opcode, rd, rs1, rs2))
    }
}

/// Parses `x<n>` into a logical register index.
fn parse_register(token: &str) -> Result<usize, DecodeError> {
    let digits = token
        .strip_prefix('x')
        .ok_or_else(|| DecodeError::BadRegister(token.to_string()))?;
    let idx: usize = digits
        .parse()
        .map_err(|_| DecodeError::BadRegister(token.to_string()))?;
    if idx >= NUM_LOGICAL_REGS {
        return Err(DecodeError::RegisterOutOfRange(idx));
    }
    Ok(idx)
}

/// Parses a decimal or hexadecimal immediate, wrapping negatives to 64 bits.
fn parse_immediate(token: &str) -> Result<u64, DecodeError> {
    let bad = || DecodeError::BadImmediate(token.to_string());

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16).map_err(|_| bad());
    }
    if let Some(magnitude) = token.strip_prefix('-') {
        let value: u64 = magnitude.parse().map_err(|_| bad())?;
        return Ok(value.wrapping_neg());
    }
    token.parse().map_err(|_| bad())
}
