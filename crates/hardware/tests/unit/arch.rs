//! # Renaming Table Tests
//!
//! Boot state and protocol errors of the free list and friends.

use oosim_core::SimError;
use oosim_core::common::PhysReg;
use oosim_core::core::arch::{BusyBitTable, FreeList, PhysicalRegisterFile, RegisterMapTable};
use pretty_assertions::assert_eq;

#[test]
fn test_boot_state() {
    let free = FreeList::new();
    assert_eq!(
        free.iter().collect::<Vec<_>>(),
        (32..64).map(PhysReg).collect::<Vec<_>>()
    );

    let map = RegisterMapTable::new();
    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        (0..32).map(PhysReg).collect::<Vec<_>>()
    );

    assert!(BusyBitTable::new().iter().all(|b| !b));
    assert!(PhysicalRegisterFile::new().iter().all(|v| v == 0));
}

#[test]
fn test_free_list_is_fifo() {
    let mut free = FreeList::new();
    let first = free.allocate().unwrap();
    assert_eq!(first, PhysReg(32));
    free.release(first).unwrap();
    assert_eq!(free.iter().last(), Some(PhysReg(32)));
    assert_eq!(free.allocate().unwrap(), PhysReg(33));
}

#[test]
fn test_free_list_exhaustion() {
    let mut free = FreeList::new();
    for _ in 0..32 {
        let _ = free.allocate().unwrap();
    }
    assert!(free.is_empty());
    assert!(!free.has_at_least(1));
    assert!(matches!(free.allocate(), Err(SimError::Invariant(_))));
}

#[test]
fn test_double_free_rejected() {
    let mut free = FreeList::new();
    assert!(matches!(free.release(PhysReg(40)), Err(SimError::Invariant(_))));
    assert!(matches!(free.release(PhysReg(64)), Err(SimError::Invariant(_))));
}

#[test]
fn test_map_table_set_returns_previous() {
    let mut map = RegisterMapTable::new();
    assert_eq!(map.set(5, PhysReg(40)).unwrap(), PhysReg(5));
    assert_eq!(map.get(5).unwrap(), PhysReg(40));
}

#[test]
fn test_map_table_rejects_unknown_register() {
    let mut map = RegisterMapTable::new();
    assert!(matches!(map.get(32), Err(SimError::Invariant(_))));
    assert!(matches!(map.set(40, PhysReg(40)), Err(SimError::Invariant(_))));
}
