//! Program Loader.
//!
//! This module turns program text into decoded instructions. It performs:
//! 1. **File loading:** Reads a JSON array of instruction strings from disk.
//! 2. **Decoding:** Decodes every line up front; the array index is the program address.
//! 3. **Fetch:** Serves decoded instructions to the Fetch stage by address.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;
use crate::core::pipeline::traits::InstructionSource;
use crate::isa::decode::parse_instruction;
use crate::isa::instruction::DecodedInstruction;

/// A fully decoded program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<DecodedInstruction>,
}

impl Program {
    /// Builds a program from already decoded instructions.
    ///
    /// Instructions are renumbered so that each one's program address is its position.
    pub fn from_instructions(instructions: impl IntoIterator<Item = DecodedInstruction>) -> Self {
        let instructions = instructions
            .into_iter()
            .zip(0u64..)
            .map(|(inst, pc)| DecodedInstruction { pc, ..inst })
            .collect();
        Self { instructions }
    }

    /// Decodes a sequence of instruction strings.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let instructions = lines
            .into_iter()
            .zip(0u64..)
            .map(|(line, pc)| {
                parse_instruction(pc, line.as_ref()).map_err(|source| SimError::Decode { pc, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { instructions })
    }

    /// Decodes a JSON array of instruction strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use oosim_core::sim::loader::Program;
    ///
    /// let program = Program::from_json_str(r#"["addi x1, x0, 5", "mulu x2, x1, x1"]"#).unwrap();
    /// assert_eq!(program.len(), 2);
    /// assert_eq!(program.get(1).unwrap().rs1, 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let lines: Vec<String> = serde_json::from_str(json)?;
        Self::from_lines(lines)
    }

    /// Reads and decodes a program file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let program = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), instructions = program.len(), "program loaded");
        Ok(program)
    }

    /// Returns the number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true for an empty program.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns the instruction at program address `pc`.
    pub fn get(&self, pc: u64) -> Option<&DecodedInstruction> {
        usize::try_from(pc)
            .ok()
            .and_then(|idx| self.instructions.get(idx))
    }

    /// Iterates instructions in program order.
    pub fn iter(&self) -> impl Iterator<Item = &DecodedInstruction> + '_ {
        self.instructions.iter()
    }
}

impl InstructionSource for Program {
    fn fetch(&mut self, cursor: u64, max: usize) -> Vec<DecodedInstruction> {
        let Ok(start) = usize::try_from(cursor) else {
            return Vec::new();
        };
        self.instructions
            .iter()
            .skip(start)
            .take(max)
            .copied()
            .collect()
    }
}
