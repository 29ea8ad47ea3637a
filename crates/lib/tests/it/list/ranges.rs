//! Clamping range surgery: slice_in_place and splice.

use proplist::{Entry, PropertyList};

use crate::helpers::*;

fn five() -> PropertyList<i32> {
    [("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]
        .into_iter()
        .collect()
}

// ===== SLICE IN PLACE =====

#[test]
fn test_slice_keeps_middle_range() {
    let mut list = five();
    list.slice_in_place(1, Some(4));
    assert_entries(&list, &[("b", 2), ("c", 3), ("d", 4)]);
}

#[test]
fn test_slice_negative_start_keeps_tail() {
    // truncating to the last two entries of a five-entry list
    let mut list = five();
    list.slice_in_place(-2, None);
    assert_entries(&list, &[("d", 4), ("e", 5)]);
}

#[test]
fn test_slice_open_end_drops_prefix() {
    let mut list = five();
    list.slice_in_place(2, None);
    assert_entries(&list, &[("c", 3), ("d", 4), ("e", 5)]);
}

#[test]
fn test_slice_clamps_instead_of_failing() {
    // Start past the end: nothing survives
    let mut list = five();
    list.slice_in_place(42, None);
    assert!(list.is_empty());

    // Very negative start clamps to the beginning: everything survives
    let mut list = five();
    list.slice_in_place(-42, None);
    assert_eq!(list.len(), 5);

    // Inverted range: nothing survives
    let mut list = five();
    list.slice_in_place(4, Some(2));
    assert!(list.is_empty());

    // Negative end counts from the end
    let mut list = five();
    list.slice_in_place(1, Some(-1));
    assert_entries(&list, &[("b", 2), ("c", 3), ("d", 4)]);
}

#[test]
fn test_slice_on_empty_list_is_a_no_op() {
    let mut list: PropertyList<i32> = PropertyList::new();
    list.slice_in_place(-3, Some(7));
    assert!(list.is_empty());
}

// ===== SPLICE =====

#[test]
fn test_splice_replaces_middle_entry() {
    // Replacing ("b", 2) with ("x", 9) at index 1
    let mut list = abc_list();

    let removed = list.splice(1, 1, [Entry::new("x", 9)]);

    assert_eq!(removed, [Entry::new("b", 2)]);
    assert_entries(&list, &[("a", 1), ("x", 9), ("c", 3)]);
}

#[test]
fn test_splice_pure_insert() {
    let mut list = abc_list();

    let removed = list.splice(1, 0, [Entry::new("x", 8), Entry::new("y", 9)]);

    assert!(removed.is_empty());
    assert_entries(&list, &[("a", 1), ("x", 8), ("y", 9), ("b", 2), ("c", 3)]);
}

#[test]
fn test_splice_pure_delete_returns_removed_in_order() {
    let mut list = five();

    let removed = list.splice(1, 3, []);

    assert_eq!(
        removed,
        [Entry::new("b", 2), Entry::new("c", 3), Entry::new("d", 4)]
    );
    assert_entries(&list, &[("a", 1), ("e", 5)]);
}

#[test]
fn test_splice_negative_start_counts_from_end() {
    let mut list = five();

    let removed = list.splice(-1, 1, [Entry::new("tail", 9)]);

    assert_eq!(removed, [Entry::new("e", 5)]);
    assert_entries(&list, &[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("tail", 9)]);
}

#[test]
fn test_splice_clamps_start_and_delete_count() {
    // Start past the end: no deletion, insertion at the end
    let mut list = abc_list();
    let removed = list.splice(99, 5, [Entry::new("z", 26)]);
    assert!(removed.is_empty());
    assert_entries(&list, &[("a", 1), ("b", 2), ("c", 3), ("z", 26)]);

    // Delete count past the tail clamps to the tail
    let mut list = abc_list();
    let removed = list.splice(1, 99, []);
    assert_eq!(removed.len(), 2);
    assert_entries(&list, &[("a", 1)]);

    // Very negative start clamps to the beginning
    let mut list = abc_list();
    let removed = list.splice(-99, 1, []);
    assert_eq!(removed, [Entry::new("a", 1)]);
    assert_entries(&list, &[("b", 2), ("c", 3)]);
}

#[test]
fn test_splice_on_empty_list_inserts() {
    let mut list: PropertyList<i32> = PropertyList::new();

    let removed = list.splice(0, 3, [Entry::new("only", 1)]);

    assert!(removed.is_empty());
    assert_entries(&list, &[("only", 1)]);
}
