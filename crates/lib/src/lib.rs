//!
//! Proplist: an ordered key/value property list with array-style operations.
//!
//! The single data structure this crate provides, [`PropertyList`], keeps
//! key/value [`Entry`] pairs in explicit order (the order callers inserted
//! them, or the order the last sort produced) while supporting both
//! array-style mutation (push/pop at either end, splice, slice) and
//! key/value lookup. Duplicate keys and values are allowed throughout: the
//! container is a list of pairs, not a map.
//!
//! ## Design
//!
//! * **Absence is data, not failure**: lookups and pops return `Option`,
//!   and the range operations clamp out-of-range indices the way array
//!   slicing conventionally does. The only fallible operation is the strict
//!   [`PropertyList::insert_at`].
//! * **Explicit ownership of order**: lists are built from explicitly
//!   ordered sources (pair iterators, entry iterators), never from an
//!   unordered mapping whose iteration order the host happens to choose.
//! * **No mutable aliasing**: queries hand out shared references or owned
//!   copies; entries change only through list operations.
//!
//! ## Example
//!
//! ```
//! use proplist::PropertyList;
//!
//! let mut list: PropertyList<i64> = [("a", 1), ("b", 2), ("c", 3)]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(list.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
//! assert_eq!(list.key_of(&2), Some("b"));
//!
//! let removed = list.splice(1, 1, [proplist::Entry::new("x", 9)]);
//! assert_eq!(removed[0].key, "b");
//! assert_eq!(list.values().copied().collect::<Vec<_>>(), [1, 9, 3]);
//! ```

pub mod list;

pub use list::{Entry, ListError, PropertyList};

/// Result type used throughout the proplist library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the proplist library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured list errors from the list module
    #[error(transparent)]
    List(ListError),
}

impl Error {
    /// Check if this error was caused by an index past the end of a list.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::List(err) => err.is_out_of_bounds(),
        }
    }
}
