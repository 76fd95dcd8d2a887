//! # Backpressure Tests
//!
//! Rename stalls when a whole dispatch group does not fit, and fetch stalls with it.

use oosim_core::Config;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::{TestContext, test_config};

#[test]
fn test_serial_chain_fills_active_list() {
    let program = ProgramBuilder::new().chain(1, 1, 40).build();
    let mut ctx = TestContext::with_program(program);
    let stats = ctx.run_checked();

    assert!(stats.backpressure_cycles > 0);
    assert_eq!(stats.instructions_committed, 40);
    assert_eq!(stats.instructions_fetched, 40);
    assert_eq!(ctx.reg(1), 40);

    let size = ctx.sim.config().pipeline.active_list_size;
    assert!(
        ctx.trace
            .iter()
            .any(|s| s.active_list.len() == size && !s.decoded_pcs.is_empty()),
        "active list never filled while work was waiting"
    );
}

#[test]
fn test_fetch_holds_while_stalled() {
    let program = ProgramBuilder::new().chain(1, 1, 40).build();
    let mut ctx = TestContext::with_program(program);
    ctx.run_checked();

    // A full active list blocks the group, so the fetch cursor and buffer hold still.
    let size = ctx.sim.config().pipeline.active_list_size;
    let stalled = ctx
        .trace
        .windows(2)
        .find(|w| w[0].active_list.len() == size && w[1].active_list.len() == size)
        .expect("no stalled cycle");
    assert_eq!(stalled[0].pc, stalled[1].pc);
    assert_eq!(stalled[0].decoded_pcs, stalled[1].decoded_pcs);
}

#[test]
fn test_small_integer_queue() {
    let mut config: Config = test_config();
    config.pipeline.integer_queue_size = 4;
    let program = ProgramBuilder::new()
        .chain(1, 2, 12)
        .addi(2, 0, 5)
        .build();
    let mut ctx = TestContext::with_config(program, config);
    let stats = ctx.run_checked();

    assert!(stats.backpressure_cycles > 0);
    assert!(ctx.trace.iter().all(|s| s.integer_queue.len() <= 4));
    assert_eq!(ctx.reg(1), 24);
    assert_eq!(ctx.reg(2), 5);
}

#[test]
fn test_no_backpressure_for_short_program() {
    let mut ctx = TestContext::new(&["addi x1, x0, 1", "addi x2, x0, 2", "addi x3, x0, 3"]);
    let stats = ctx.run();
    assert_eq!(stats.backpressure_cycles, 0);
}

#[test]
fn test_independent_adds_stay_within_queue() {
    let mut builder = ProgramBuilder::new();
    for i in 0..40 {
        builder = builder.addi(1 + i % 8, 0, i as u64);
    }
    let mut ctx = TestContext::with_program(builder.build());
    let stats = ctx.run_checked();

    let cap = ctx.sim.config().pipeline.integer_queue_size;
    assert!(ctx.trace.iter().all(|s| s.integer_queue.len() <= cap));
    assert_eq!(stats.instructions_committed, 40);
    assert_eq!(ctx.reg(8), 39);
}
