//! # Trace Output Tests
//!
//! JSON shape of the per-cycle state snapshots.

use std::fs;

use oosim_core::sim::trace::{StateSnapshot, write_json};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use crate::common::harness::TestContext;

#[test]
fn test_waiting_operand_serialization() {
    let mut ctx = TestContext::new(&["addi x1, x0, 5", "add x2, x1, x0"]);
    ctx.run();

    // Cycle 2: both dispatched; the second waits on the first's register.
    let value = serde_json::to_value(ctx.cycle(2)).unwrap();
    assert_eq!(
        value["IntegerQueue"],
        json!([
            {
                "DestRegister": 32, "OpAIsReady": true, "OpARegTag": 0, "OpAValue": 0,
                "OpBIsReady": true, "OpBRegTag": 0, "OpBValue": 5, "OpCode": "add", "PC": 0
            },
            {
                "DestRegister": 33, "OpAIsReady": false, "OpARegTag": 32, "OpAValue": 0,
                "OpBIsReady": true, "OpBRegTag": 0, "OpBValue": 0, "OpCode": "add", "PC": 1
            }
        ])
    );
    assert_eq!(
        value["ActiveList"],
        json!([
            { "Done": false, "Exception": false, "LogicalDestination": 1, "OldDestination": 1, "PC": 0 },
            { "Done": false, "Exception": false, "LogicalDestination": 2, "OldDestination": 2, "PC": 1 }
        ])
    );
}

#[test]
fn test_write_and_read_back() {
    let mut ctx = TestContext::new(&["mulu x3, x0, x0"]);
    ctx.run();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trace.json");
    write_json(&path, &ctx.trace).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let back: Vec<StateSnapshot> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, ctx.trace);
}
