//! # Interface Tests
//!
//! The driver against mocked instruction sources and state sinks.

use oosim_core::isa::{DecodedInstruction, Opcode};
use oosim_core::{Config, Program, SimError, Simulator, StateSnapshot};

use crate::common::harness::test_config;
use crate::common::mocks::sink::MockSink;
use crate::common::mocks::source::MockSource;

#[test]
fn test_fetch_requests_follow_cursor() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .withf(|cursor, max| *cursor == 0 && *max == 4)
        .times(1)
        .returning(|_, _| vec![DecodedInstruction::reg(0, Opcode::Add, 1, 0, 0)]);
    source
        .expect_fetch()
        .withf(|cursor, _| *cursor == 1)
        .times(5)
        .returning(|_, _| Vec::new());

    let mut sim = Simulator::new(source, test_config()).unwrap();
    let mut trace: Vec<StateSnapshot> = Vec::new();
    let stats = sim.run(&mut trace).unwrap();
    assert_eq!(stats.cycles, 6);
}

#[test]
fn test_fetch_redirects_to_exception_vector() {
    let config = test_config();
    let vector = config.general.exception_vector;

    let mut source = MockSource::new();
    source
        .expect_fetch()
        .withf(|cursor, _| *cursor == 0)
        .times(1)
        .returning(|_, _| vec![DecodedInstruction::imm(0, Opcode::Divu, 1, 2, 0)]);
    source
        .expect_fetch()
        .withf(|cursor, _| *cursor == 1)
        .times(4)
        .returning(|_, _| Vec::new());
    source
        .expect_fetch()
        .withf(move |cursor, _| *cursor == vector)
        .times(1)
        .returning(|_, _| Vec::new());

    let mut sim = Simulator::new(source, config).unwrap();
    let mut trace: Vec<StateSnapshot> = Vec::new();
    let stats = sim.run(&mut trace).unwrap();
    assert_eq!(stats.cycles, 8);
    assert_eq!(stats.exceptions, 1);
}

#[test]
fn test_sink_receives_every_cycle() {
    let program = Program::from_lines(["add x1, x0, x0"]).unwrap();
    let mut sink = MockSink::new();
    sink.expect_record().times(7).returning(|_| Ok(()));

    let mut sim = Simulator::new(program, test_config()).unwrap();
    let stats = sim.run(&mut sink).unwrap();
    assert_eq!(stats.cycles, 6);
}

#[test]
fn test_sink_sees_boot_state_first() {
    let program = Program::from_lines(["add x1, x0, x0"]).unwrap();
    let mut sink = MockSink::new();
    let mut seq = mockall::Sequence::new();
    sink.expect_record()
        .withf(|s| s.pc == 0 && s.decoded_pcs.is_empty() && s.free_list.len() == 32)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    sink.expect_record()
        .times(6)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let mut sim = Simulator::new(program, test_config()).unwrap();
    sim.run(&mut sink).unwrap();
}

#[test]
fn test_sink_failure_stops_run() {
    let mut source = MockSource::new();
    source.expect_fetch().never();
    let mut sink = MockSink::new();
    sink.expect_record()
        .times(1)
        .returning(|_| Err(SimError::Config("sink closed".into())));

    let mut sim = Simulator::new(source, test_config()).unwrap();
    let err = sim.run(&mut sink).unwrap_err();
    assert!(matches!(err, SimError::Config(msg) if msg == "sink closed"));
    assert_eq!(sim.stats().cycles, 0);
}

#[test]
fn test_cycle_limit() {
    let mut config: Config = test_config();
    config.general.max_cycles = Some(3);
    let program = Program::from_lines(["add x1, x0, x0"]).unwrap();

    let mut sim = Simulator::new(program, config).unwrap();
    let mut trace: Vec<StateSnapshot> = Vec::new();
    let err = sim.run(&mut trace).unwrap_err();
    assert!(matches!(err, SimError::CycleLimit(3)));
    assert_eq!(trace.len(), 4);
}

#[test]
fn test_invalid_config_rejected_by_driver() {
    let mut config = Config::default();
    config.pipeline.issue_width = 0;
    let source = MockSource::new();
    assert!(matches!(
        Simulator::new(source, config),
        Err(SimError::Config(_))
    ));
}

#[test]
fn test_out_of_range_destination_aborts_run() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .withf(|cursor, _| *cursor == 0)
        .times(1)
        .returning(|_, _| vec![DecodedInstruction::reg(0, Opcode::Add, 40, 0, 0)]);

    let mut sim = Simulator::new(source, test_config()).unwrap();
    let mut trace: Vec<StateSnapshot> = Vec::new();
    let err = sim.run(&mut trace).unwrap_err();
    assert!(matches!(err, SimError::Invariant(_)));
    // Nothing was renamed.
    assert_eq!(sim.state().free_list.len(), 32);
    assert!(sim.state().active_list.is_empty());
}

#[test]
fn test_out_of_range_source_aborts_run() {
    let program = Program::from_instructions([DecodedInstruction::reg(0, Opcode::Sub, 1, 2, 32)]);
    let mut sim = Simulator::new(program, test_config()).unwrap();
    let mut trace: Vec<StateSnapshot> = Vec::new();
    assert!(matches!(sim.run(&mut trace), Err(SimError::Invariant(_))));
    assert_eq!(trace.len(), 2);
}
