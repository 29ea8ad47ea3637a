//! Push/pop at both ends and length bookkeeping.

use proplist::{Entry, PropertyList};

use crate::helpers::*;

// ===== ROUND TRIPS =====

#[test]
fn test_push_back_pop_back_round_trip() {
    let mut list = abc_list();

    list.push_back("d", 4);
    let popped = list.pop_back().expect("list cannot be empty");

    assert_eq!(popped, Entry::new("d", 4));
    assert_entries(&list, &[("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_push_front_pop_front_round_trip() {
    let mut list = abc_list();

    list.push_front("z", 0);
    let popped = list.pop_front().expect("list cannot be empty");

    assert_eq!(popped, Entry::new("z", 0));
    assert_entries(&list, &[("a", 1), ("b", 2), ("c", 3)]);
}

// ===== EMPTY LIST BEHAVIOR =====

#[test]
fn test_pop_front_on_empty_returns_none() {
    let mut list: PropertyList<i32> = PropertyList::new();

    assert!(list.pop_front().is_none());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_pop_back_on_empty_returns_none() {
    let mut list: PropertyList<String> = PropertyList::new();

    assert!(list.pop_back().is_none());
    assert!(list.is_empty());
}

// ===== ORDER OF END OPERATIONS =====

#[test]
fn test_push_front_prepends() {
    let mut list = PropertyList::new();
    list.push_back("middle", 2);
    list.push_front("first", 1);
    list.push_back("last", 3);

    assert_entries(&list, &[("first", 1), ("middle", 2), ("last", 3)]);
}

#[test]
fn test_duplicate_keys_are_kept() {
    let mut list = PropertyList::new();
    list.push_back("k", 1);
    list.push_back("k", 2);
    list.push_front("k", 0);

    assert_entries(&list, &[("k", 0), ("k", 1), ("k", 2)]);
}

// ===== LENGTH BOOKKEEPING =====

#[test]
fn test_len_tracks_pushes_and_removals() {
    let mut list = numbered_list(10);
    assert_eq!(list.len(), 10);

    list.push_back("extra", -1);
    list.push_front("lead", -2);
    assert_eq!(list.len(), 12);

    list.pop_front();
    list.pop_back();
    assert_eq!(list.len(), 10);

    list.retain(|_, index| index < 4);
    assert_eq!(list.len(), 4);

    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
}

// ===== STRICT POSITIONAL OPERATIONS =====

#[test]
fn test_insert_at_within_bounds() {
    let mut list = abc_list();

    list.insert_at(1, "between", 9).expect("index 1 is valid");
    assert_entries(&list, &[("a", 1), ("between", 9), ("b", 2), ("c", 3)]);

    // Inserting at len() appends
    list.insert_at(4, "end", 10).expect("index len() is valid");
    assert_eq!(list.last().map(|e| e.key.as_str()), Some("end"));
}

#[test]
fn test_insert_at_past_end_fails_and_leaves_list_unchanged() {
    let mut list = abc_list();

    let err = list.insert_at(4, "far", 9).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_entries(&list, &[("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_insert_at_error_converts_to_crate_error() {
    let mut list = abc_list();

    let err: proplist::Error = list.insert_at(9, "x", 0).unwrap_err().into();
    assert!(err.is_out_of_bounds());
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn test_remove_at() {
    let mut list = abc_list();

    let removed = list.remove_at(1).expect("index 1 exists");
    assert_eq!(removed, Entry::new("b", 2));
    assert_entries(&list, &[("a", 1), ("c", 3)]);

    assert!(list.remove_at(5).is_none());
    assert_eq!(list.len(), 2);
}
