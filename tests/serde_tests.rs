#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! `PersistentList` serializes as a plain sequence.

use corelude::persistent::PersistentList;
use rstest::rstest;

#[rstest]
fn test_list_json_roundtrip() {
    let list: PersistentList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    let restored: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_list_serializes_as_array_in_order() {
    let list = PersistentList::of(&[3, 1, 2]);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[3,1,2]");
}

#[rstest]
fn test_empty_list_roundtrip() {
    let restored: PersistentList<String> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_list_nested_structures() {
    let outer = PersistentList::of(&[PersistentList::of(&[1, 2]), PersistentList::of(&[3])]);
    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[1,2],[3]]");
    let restored: PersistentList<PersistentList<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(outer, restored);
}

#[rstest]
fn test_invalid_element_is_rejected() {
    let result: Result<PersistentList<i32>, _> = serde_json::from_str("[1, \"two\"]");
    assert!(result.is_err());
}
