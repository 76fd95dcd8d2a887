use oosim_core::Program;
use oosim_core::common::NUM_LOGICAL_REGS;
use oosim_core::core::units::alu::arithmetic;
use oosim_core::isa::Source2;

/// Architectural outcome of running a program one instruction at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceResult {
    /// Logical register values after the last committed instruction.
    pub regs: [u64; NUM_LOGICAL_REGS],
    /// Address of the first faulting instruction, if any.
    pub fault_pc: Option<u64>,
    /// Number of instructions that completed without fault.
    pub committed: u64,
}

/// Executes `program` sequentially, stopping before the first faulting instruction.
pub fn execute(program: &Program) -> ReferenceResult {
    let mut regs = [0u64; NUM_LOGICAL_REGS];
    let mut committed = 0;
    for inst in program.iter() {
        let a = regs[inst.rs1];
        let b = match inst.src2 {
            Source2::Reg(rs2) => regs[rs2],
            Source2::Imm(imm) => imm,
        };
        match arithmetic::execute(inst.opcode, a, b) {
            Ok(value) => {
                regs[inst.rd] = value;
                committed += 1;
            }
            Err(_) => {
                return ReferenceResult {
                    regs,
                    fault_pc: Some(inst.pc),
                    committed,
                };
            }
        }
    }
    ReferenceResult {
        regs,
        fault_pc: None,
        committed,
    }
}
