//! # Program Loader Tests
//!
//! Loading program files from disk.

use std::fs;

use oosim_core::isa::{Opcode, Source2};
use oosim_core::{Program, SimError};
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.json");
    fs::write(&path, r#"["addi x1, x0, 0x20", "remu x2, x1, x1", "subi x3, x3, -4"]"#).unwrap();

    let program = Program::load(&path).unwrap();
    assert_eq!(program.len(), 3);

    let pcs: Vec<u64> = program.iter().map(|i| i.pc).collect();
    assert_eq!(pcs, vec![0, 1, 2]);
    assert_eq!(program.get(0).unwrap().src2, Source2::Imm(32));
    assert_eq!(program.get(1).unwrap().opcode, Opcode::Remu);
    assert_eq!(program.get(2).unwrap().src2, Source2::Imm(4u64.wrapping_neg()));
    assert!(program.get(3).is_none());
}

#[test]
fn test_empty_program() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();
    assert!(Program::load(&path).unwrap().is_empty());
}

#[test]
fn test_decode_failure_points_at_instruction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"["add x1, x0, x0", "add x1, x0, x0", "shl x1, x1, 1"]"#).unwrap();

    let err = Program::load(&path).unwrap_err();
    assert!(matches!(err, SimError::Decode { pc: 2, .. }));
    assert!(err.to_string().contains("shl"));
}

#[test]
fn test_missing_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = Program::load(&path).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
