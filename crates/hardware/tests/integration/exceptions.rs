//! # Exception Tests
//!
//! Arithmetic faults reaching the commit head, rollback and recovery.

use oosim_core::common::EXCEPTION_VECTOR;
use pretty_assertions::assert_eq;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_divide_by_zero_episode() {
    let mut ctx = TestContext::new(&["divui x1, x2, 0"]);
    let stats = ctx.run_checked();

    // Cycle 5: the fault is published and recorded in the active list.
    let c5 = ctx.cycle(5);
    assert!(c5.active_list[0].done);
    assert!(c5.active_list[0].exception);
    assert!(!c5.exception);
    // A faulting result is never written back.
    assert!(c5.busy_bit_table[32]);

    // Cycle 6: raised at the commit head; fetch is redirected.
    let c6 = ctx.cycle(6);
    assert!(c6.exception);
    assert_eq!(c6.exception_pc, 0);
    assert_eq!(c6.pc, EXCEPTION_VECTOR);
    assert_eq!(c6.active_list.len(), 1);

    // Cycle 7: rolled back.
    let c7 = ctx.cycle(7);
    assert!(c7.exception);
    assert!(c7.active_list.is_empty());
    assert_eq!(c7.register_map_table[1], 1);
    assert!(!c7.busy_bit_table[32]);
    assert_eq!(c7.free_list, (33..64).chain([32]).collect::<Vec<_>>());

    // Cycle 8: recovery complete.
    assert!(!ctx.cycle(8).exception);
    assert_eq!(stats.cycles, 8);
    assert_eq!(stats.exceptions, 1);
    assert_eq!(stats.instructions_rolled_back, 1);
    assert_eq!(stats.instructions_committed, 0);
}

#[test]
fn test_older_instructions_commit_younger_roll_back() {
    let program = ProgramBuilder::new()
        .addi(1, 0, 9)
        .addi(2, 0, 3)
        .divu(3, 1, 0)
        .addi(4, 0, 1)
        .addi(5, 0, 1)
        .addi(1, 1, 1)
        .build();
    let mut ctx = TestContext::with_program(program);
    let stats = ctx.run_checked();

    assert_eq!(stats.exceptions, 1);
    assert_eq!(ctx.sim.state().exception_pc, 2);
    assert_eq!(stats.instructions_committed, 2);
    assert_eq!(stats.instructions_rolled_back, 4);
    assert_eq!(ctx.reg(1), 9);
    assert_eq!(ctx.reg(2), 3);
    for r in [3, 4, 5] {
        assert_eq!(ctx.reg(r), 0, "x{r} was written by a rolled-back instruction");
    }
    // Nothing after the fault was fetched once the exception was raised.
    assert_eq!(ctx.sim.state().pc, EXCEPTION_VECTOR);
}

#[test]
fn test_rollback_restores_map_table() {
    let program = ProgramBuilder::new()
        .addi(1, 0, 1)
        .addi(2, 0, 2)
        .divui(3, 0, 0)
        .addi(1, 0, 7)
        .addi(2, 2, 5)
        .build();
    let mut ctx = TestContext::with_program(program);
    ctx.run_checked();

    // Mapping just before the faulting instruction was renamed: x1 -> p32, x2 -> p33.
    let mut expected: Vec<usize> = (0..32).collect();
    expected[1] = 32;
    expected[2] = 33;
    let last = ctx.trace.last().unwrap();
    assert_eq!(last.register_map_table, expected);
    // Registers renamed after the fault went back to the free list.
    for reg in [34, 35, 36] {
        assert!(last.free_list.contains(&reg));
    }
    assert_eq!(ctx.reg(1), 1);
    assert_eq!(ctx.reg(2), 2);
}

#[test]
fn test_remainder_by_zero_register() {
    let mut ctx = TestContext::new(&["addi x1, x0, 10", "remu x2, x1, x5", "addi x3, x0, 1"]);
    let stats = ctx.run_checked();
    assert_eq!(stats.exceptions, 1);
    assert_eq!(ctx.sim.state().exception_pc, 1);
    assert_eq!(ctx.reg(1), 10);
    assert_eq!(ctx.reg(3), 0);
}
