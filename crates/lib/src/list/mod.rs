//! Ordered property list container.
//!
//! This module provides [`PropertyList`], an ordered sequence of key/value
//! [`Entry`] pairs that behaves like an array of pairs while also supporting
//! key- and value-based lookup.
//!
//! # Core behavior
//!
//! - **Explicit order**: entries stay in insertion/operation order and are
//!   never reordered behind the caller's back. Only the sort operations
//!   rearrange entries.
//! - **Duplicates allowed**: nothing enforces key or value uniqueness; this
//!   is a list of pairs, not a map.
//! - **Absence is data**: lookups and pops return `Option` instead of
//!   failing, and the range operations clamp out-of-range indices the way
//!   array slicing conventionally does.
//!
//! # Usage
//!
//! ```
//! use proplist::PropertyList;
//!
//! let mut list: PropertyList<i64> = [("a", 1), ("b", 2), ("c", 3)]
//!     .into_iter()
//!     .collect();
//!
//! list.push_back("d", 4);
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.get("b"), Some(&2));
//! assert_eq!(list.key_of(&3), Some("c"));
//!
//! let first = list.pop_front().unwrap();
//! assert_eq!((first.key.as_str(), first.value), ("a", 1));
//! ```

pub mod entry;
pub mod errors;

use std::cmp::Ordering;
use std::fmt;
use std::slice;
use std::vec;

pub use entry::Entry;
pub use errors::ListError;

/// An ordered sequence of key/value entries with array-like operations.
///
/// `PropertyList` keeps entries in the exact order they were inserted (or the
/// order the last sort produced) and exposes four groups of operations:
///
/// - **End operations**: [`push_back`](Self::push_back),
///   [`push_front`](Self::push_front), [`pop_back`](Self::pop_back),
///   [`pop_front`](Self::pop_front)
/// - **Lookup**: [`find`](Self::find), [`get`](Self::get),
///   [`key_of`](Self::key_of), [`index_of`](Self::index_of)
/// - **Range surgery**: [`slice_in_place`](Self::slice_in_place),
///   [`splice`](Self::splice)
/// - **Bulk transforms**: [`sort`](Self::sort), [`sort_by`](Self::sort_by),
///   [`map_in_place`](Self::map_in_place), [`retain`](Self::retain),
///   [`for_each`](Self::for_each)
///
/// Keys are not unique: pushing the same key twice stores two entries, and
/// the key-based lookups return the first match in list order.
///
/// # Examples
///
/// ```
/// use proplist::PropertyList;
///
/// let mut list = PropertyList::new();
/// list.push_back("host", "localhost");
/// list.push_back("port", "8080");
/// list.push_front("scheme", "http");
///
/// let keys: Vec<_> = list.keys().collect();
/// assert_eq!(keys, ["scheme", "host", "port"]);
/// ```
///
/// Entries are read through shared references or returned by value; the list
/// never hands out mutable aliases, so its contents change only through its
/// own operations.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PropertyList<T> {
    /// Entries in explicit order
    entries: Vec<Entry<T>>,
}

impl<T> PropertyList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty list that can hold `capacity` entries without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Appends an entry at the end of the list.
    ///
    /// No uniqueness check is performed; pushing an existing key adds a
    /// second entry for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let mut list = PropertyList::new();
    /// list.push_back("a", 1);
    /// list.push_back("a", 2);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_back(&mut self, key: impl Into<String>, value: T) {
        self.entries.push(Entry::new(key, value));
    }

    /// Prepends an entry at the start of the list.
    pub fn push_front(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(0, Entry::new(key, value));
    }

    /// Removes and returns the first entry, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<Entry<T>> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Removes and returns the last entry, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<Entry<T>> {
        self.entries.pop()
    }

    /// Inserts an entry at a specific position, shifting everything after it.
    ///
    /// Unlike the clamping range operations, this is strict: an index past
    /// the end of the list is an error. `insert_at(len, ..)` appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let mut list = PropertyList::new();
    /// list.push_back("a", 1);
    /// list.push_back("c", 3);
    ///
    /// assert!(list.insert_at(1, "b", 2).is_ok());
    /// assert!(list.insert_at(9, "x", 0).is_err());
    ///
    /// let keys: Vec<_> = list.keys().collect();
    /// assert_eq!(keys, ["a", "b", "c"]);
    /// ```
    pub fn insert_at(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: T,
    ) -> Result<(), ListError> {
        let len = self.entries.len();
        if index > len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }
        self.entries.insert(index, Entry::new(key, value));
        Ok(())
    }

    /// Removes and returns the entry at `index`, or `None` if the index is
    /// past the end of the list.
    pub fn remove_at(&mut self, index: usize) -> Option<Entry<T>> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Returns the first entry whose key matches, or `None`.
    ///
    /// Linear scan in list order; with duplicate keys the entry at the
    /// lowest index wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let mut list = PropertyList::new();
    /// list.push_back("a", 1);
    /// list.push_back("a", 2);
    ///
    /// assert_eq!(list.find("a").map(|e| e.value), Some(1));
    /// assert!(list.find("missing").is_none());
    /// ```
    pub fn find(&self, key: &str) -> Option<&Entry<T>> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Returns the value of the first entry whose key matches, or `None`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.find(key).map(|entry| &entry.value)
    }

    /// Returns true if any entry has the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns the position of the first entry whose key matches, or `None`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Returns the entry at `index`, or `None` if the index is past the end.
    pub fn entry_at(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }

    /// Returns the first entry, or `None` if the list is empty.
    pub fn first(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }

    /// Returns the last entry, or `None` if the list is empty.
    pub fn last(&self) -> Option<&Entry<T>> {
        self.entries.last()
    }

    /// Iterates over all keys in list order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Iterates over all values in list order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Iterates over all entries in list order.
    pub fn iter(&self) -> slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Keeps only the sub-range `[start, end)`, discarding the rest.
    ///
    /// Indices follow array-slice conventions: negative values count from
    /// the end, `None` for `end` means "to the end of the list", and
    /// anything out of range is clamped rather than treated as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let mut list: PropertyList<i32> =
    ///     [("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]
    ///         .into_iter()
    ///         .collect();
    ///
    /// // Keep the last two entries
    /// list.slice_in_place(-2, None);
    /// let keys: Vec<_> = list.keys().collect();
    /// assert_eq!(keys, ["d", "e"]);
    /// ```
    pub fn slice_in_place(&mut self, start: isize, end: Option<isize>) {
        let len = self.entries.len();
        let start = clamp_index(start, len);
        let end = end.map_or(len, |end| clamp_index(end, len));
        if start >= end {
            self.entries.clear();
        } else {
            self.entries.truncate(end);
            self.entries.drain(..start);
        }
    }

    /// Removes `delete_count` entries starting at `start`, inserts `items`
    /// in their place, and returns the removed entries in their original
    /// order.
    ///
    /// `start` follows array-splice conventions: negative values count from
    /// the end and out-of-range values clamp to the nearest bound.
    /// `delete_count` is clamped to the number of entries available after
    /// `start`. The inserted item count is independent of the deleted count,
    /// so this can grow or shrink the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::{Entry, PropertyList};
    ///
    /// let mut list: PropertyList<i32> = [("a", 1), ("b", 2), ("c", 3)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let removed = list.splice(1, 1, [Entry::new("x", 9)]);
    /// assert_eq!(removed.len(), 1);
    /// assert_eq!(removed[0].key, "b");
    ///
    /// let keys: Vec<_> = list.keys().collect();
    /// assert_eq!(keys, ["a", "x", "c"]);
    /// ```
    pub fn splice(
        &mut self,
        start: isize,
        delete_count: usize,
        items: impl IntoIterator<Item = Entry<T>>,
    ) -> Vec<Entry<T>> {
        let len = self.entries.len();
        let start = clamp_index(start, len);
        let delete_count = delete_count.min(len - start);
        self.entries
            .splice(start..start + delete_count, items)
            .collect()
    }

    /// Sorts entries by key, lexicographically.
    ///
    /// This is the default order: it is deterministic and needs nothing from
    /// the value type. Entries with equal keys keep their relative order.
    /// Use [`sort_by`](Self::sort_by) for any other order.
    pub fn sort(&mut self) {
        self.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Sorts entries with a caller-supplied comparator.
    ///
    /// The sort is stable: entries the comparator reports as equal keep
    /// their relative order. A comparator that does not implement a total
    /// order leaves the final order unspecified, but the sort still
    /// terminates with the same entries the list held before.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let mut list: PropertyList<i32> = [("b", 2), ("c", 3), ("a", 1)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// list.sort_by(|x, y| y.value.cmp(&x.value));
    /// let values: Vec<_> = list.values().copied().collect();
    /// assert_eq!(values, [3, 2, 1]);
    /// ```
    pub fn sort_by(&mut self, mut compare: impl FnMut(&Entry<T>, &Entry<T>) -> Ordering) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = merge_sort_by(entries, &mut compare);
    }

    /// Calls `visit` once per entry, in list order, with the entry and its
    /// index. The list itself is not touched.
    pub fn for_each(&self, mut visit: impl FnMut(&Entry<T>, usize)) {
        for (index, entry) in self.entries.iter().enumerate() {
            visit(entry, index);
        }
    }

    /// Replaces every entry with `transform(entry, index)`.
    ///
    /// Each call sees only its own entry and index, so evaluation order
    /// cannot affect the result. The length never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let mut list: PropertyList<i32> = [("a", 1), ("b", 2)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// list.map_in_place(|mut entry, _index| {
    ///     entry.value *= 10;
    ///     entry
    /// });
    /// let values: Vec<_> = list.values().copied().collect();
    /// assert_eq!(values, [10, 20]);
    /// ```
    pub fn map_in_place(&mut self, mut transform: impl FnMut(Entry<T>, usize) -> Entry<T>) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| transform(entry, index))
            .collect();
    }

    /// Keeps only the entries for which `pred` returns true, preserving
    /// their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let mut list: PropertyList<i32> = [("a", 1), ("b", 2), ("c", 3)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// list.retain(|entry, _index| entry.value % 2 == 1);
    /// let keys: Vec<_> = list.keys().collect();
    /// assert_eq!(keys, ["a", "c"]);
    /// ```
    pub fn retain(&mut self, mut pred: impl FnMut(&Entry<T>, usize) -> bool) {
        let mut index = 0;
        self.entries.retain(|entry| {
            let keep = pred(entry, index);
            index += 1;
            keep
        });
    }

    /// Builds a new list by transforming every entry, leaving this list
    /// untouched. The transform may change the value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::{Entry, PropertyList};
    ///
    /// let list: PropertyList<i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let rendered = list.map(|entry, _| Entry::new(entry.key.clone(), entry.value.to_string()));
    ///
    /// assert_eq!(rendered.get("b").map(String::as_str), Some("2"));
    /// assert_eq!(list.get("b"), Some(&2));
    /// ```
    pub fn map<U>(
        &self,
        mut transform: impl FnMut(&Entry<T>, usize) -> Entry<U>,
    ) -> PropertyList<U> {
        PropertyList {
            entries: self
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| transform(entry, index))
                .collect(),
        }
    }
}

impl<T: PartialEq> PropertyList<T> {
    /// Returns the key of the first entry whose value equals `value`, or
    /// `None`.
    ///
    /// Linear scan in list order; with duplicate values the entry at the
    /// lowest index wins. Equality is whatever the element type's
    /// `PartialEq` says it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use proplist::PropertyList;
    ///
    /// let list: PropertyList<i32> = [("a", 1), ("b", 2), ("d", 2)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(list.key_of(&2), Some("b"));
    /// assert_eq!(list.key_of(&7), None);
    /// ```
    pub fn key_of(&self, value: &T) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.value == *value)
            .map(|entry| entry.key.as_str())
    }
}

impl<T: Clone> PropertyList<T> {
    /// Returns a new list holding only the entries for which `pred` returns
    /// true, leaving this list untouched.
    pub fn filter(&self, mut pred: impl FnMut(&Entry<T>, usize) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .enumerate()
                .filter(|(index, entry)| pred(entry, *index))
                .map(|(_, entry)| entry.clone())
                .collect(),
        }
    }

    /// Returns a copy of this list sorted by key, lexicographically.
    pub fn sorted(&self) -> Self {
        let mut out = self.clone();
        out.sort();
        out
    }

    /// Returns a copy of this list sorted with a caller-supplied comparator.
    pub fn sorted_by(&self, compare: impl FnMut(&Entry<T>, &Entry<T>) -> Ordering) -> Self {
        let mut out = self.clone();
        out.sort_by(compare);
        out
    }

    /// Copies the entries into a plain vector, in list order.
    pub fn to_vec(&self) -> Vec<Entry<T>> {
        self.entries.clone()
    }
}

impl<T: fmt::Debug> PropertyList<T> {
    /// Emits the current entries as `tracing` debug events, one per entry.
    ///
    /// For human inspection only; the rendering is not a stable format.
    pub fn dump(&self) {
        tracing::debug!(len = self.entries.len(), "property list state");
        for (index, entry) in self.entries.iter().enumerate() {
            tracing::debug!(index, key = entry.key.as_str(), value = ?entry.value, "entry");
        }
    }
}

/// Resolves a possibly negative index against `len` with array-slice
/// tolerance: negative counts back from the end, and both directions clamp
/// to `0..=len`.
fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

/// Stable merge sort by moves.
///
/// `Vec::sort_by` panics when it detects a comparator that is not a total
/// order; the sort contract here is that any comparator terminates with the
/// entry multiset intact. Split and merge steps advance regardless of what
/// the comparator returns, so the result order degrades under an
/// inconsistent comparator but termination does not.
fn merge_sort_by<T>(items: Vec<T>, compare: &mut impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }
    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);
    merge_by(left, right, compare)
}

/// Merges two sorted runs, taking from the left on ties to keep the sort
/// stable.
fn merge_by<T>(
    left: Vec<T>,
    right: Vec<T>,
    compare: &mut impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut next_left = left.next();
    let mut next_right = right.next();

    loop {
        match (next_left.take(), next_right.take()) {
            (Some(l), Some(r)) => {
                if compare(&r, &l) == Ordering::Less {
                    merged.push(r);
                    next_left = Some(l);
                    next_right = right.next();
                } else {
                    merged.push(l);
                    next_left = left.next();
                    next_right = Some(r);
                }
            }
            (Some(l), None) => {
                merged.push(l);
                merged.extend(left);
                break;
            }
            (None, Some(r)) => {
                merged.push(r);
                merged.extend(right);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}

impl<T> Default for PropertyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for PropertyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "}}")
    }
}

impl<T> FromIterator<Entry<T>> for PropertyList<T> {
    fn from_iter<I: IntoIterator<Item = Entry<T>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for PropertyList<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        iter.into_iter().map(Entry::from).collect()
    }
}

impl<T> Extend<Entry<T>> for PropertyList<T> {
    fn extend<I: IntoIterator<Item = Entry<T>>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K: Into<String>, T> Extend<(K, T)> for PropertyList<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Entry::from));
    }
}

impl<T> IntoIterator for PropertyList<T> {
    type Item = Entry<T>;
    type IntoIter = vec::IntoIter<Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PropertyList<T> {
    type Item = &'a Entry<T>;
    type IntoIter = slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
