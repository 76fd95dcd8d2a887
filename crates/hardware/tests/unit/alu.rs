//! # ALU Tests
//!
//! Opcode semantics and the latency of the ALU pool.

use oosim_core::common::{ArithmeticFault, PhysReg};
use oosim_core::core::units::alu::arithmetic::execute;
use oosim_core::core::units::alu::{AluOp, AluPool};
use oosim_core::isa::Opcode;
use rstest::rstest;

#[rstest]
#[case::add(Opcode::Add, 2, 3, 5)]
#[case::add_wraps(Opcode::Add, u64::MAX, 1, 0)]
#[case::sub(Opcode::Sub, 10, 4, 6)]
#[case::sub_wraps(Opcode::Sub, 0, 1, u64::MAX)]
#[case::mulu(Opcode::Mulu, 6, 7, 42)]
#[case::mulu_wraps(Opcode::Mulu, 1 << 32, 1 << 32, 0)]
#[case::divu(Opcode::Divu, 100, 7, 14)]
#[case::divu_truncates(Opcode::Divu, 1, 2, 0)]
#[case::remu(Opcode::Remu, 100, 7, 2)]
#[case::remu_large(Opcode::Remu, u64::MAX, 10, 5)]
fn test_opcode_semantics(#[case] op: Opcode, #[case] a: u64, #[case] b: u64, #[case] expected: u64) {
    assert_eq!(execute(op, a, b), Ok(expected));
}

#[rstest]
#[case(Opcode::Divu)]
#[case(Opcode::Remu)]
fn test_zero_divisor_faults(#[case] op: Opcode) {
    assert_eq!(execute(op, 12345, 0), Err(ArithmeticFault::DivideByZero));
}

fn op(pc: u64) -> AluOp {
    AluOp {
        pc,
        opcode: Opcode::Add,
        dest: PhysReg(32 + pc as usize),
        a: pc,
        b: 1,
    }
}

#[test]
fn test_pool_spreads_a_full_issue_group() {
    let mut pool = AluPool::new(4, 3);
    let units: Vec<usize> = (0..4).map(|pc| pool.enqueue(op(pc)).unwrap()).collect();
    assert_eq!(units, vec![0, 1, 2, 3]);

    // Placeholder cycle, then all four complete together.
    assert!(pool.tick().is_empty());
    let done: Vec<u64> = pool.tick().iter().map(|f| f.pc).collect();
    assert_eq!(done, vec![0, 1, 2, 3]);
    assert!(pool.is_idle());
}

#[test]
fn test_pool_prefers_least_occupied_unit() {
    let mut pool = AluPool::new(4, 3);
    let _ = pool.enqueue(op(0)).unwrap();
    let _ = pool.tick();
    // Unit 0 holds one slot; idle units take a placeholder plus the operation.
    assert_eq!(pool.enqueue(op(1)).unwrap(), 1);
    assert_eq!(pool.enqueue(op(2)).unwrap(), 2);
    assert_eq!(pool.enqueue(op(3)).unwrap(), 3);
    assert_eq!(pool.enqueue(op(4)).unwrap(), 0);
    let occupancy: Vec<usize> = pool.iter().map(|alu| alu.occupancy()).collect();
    assert_eq!(occupancy, vec![2, 2, 2, 2]);
}
