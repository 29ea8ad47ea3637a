//! The key/value pair stored by a property list.

use std::fmt;

/// A single key/value pair held by a [`PropertyList`](crate::PropertyList).
///
/// Entries are plain data: the key is always a `String`, the value is the
/// list's element type. Nothing about an entry is unique; a list may hold
/// many entries with the same key, the same value, or both.
///
/// # Examples
///
/// ```
/// use proplist::Entry;
///
/// let entry = Entry::new("port", 8080);
/// assert_eq!(entry.key, "port");
/// assert_eq!(entry.value, 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Entry<T> {
    /// Lookup key; duplicates are allowed
    pub key: String,
    /// The value carried by this entry
    pub value: T,
}

impl<T> Entry<T> {
    /// Creates an entry from a key and a value.
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Splits the entry back into its key and value.
    pub fn into_pair(self) -> (String, T) {
        (self.key, self.value)
    }
}

// Convenient conversions from and to plain pairs
impl<K: Into<String>, T> From<(K, T)> for Entry<T> {
    fn from((key, value): (K, T)) -> Self {
        Entry::new(key, value)
    }
}

impl<T> From<Entry<T>> for (String, T) {
    fn from(entry: Entry<T>) -> Self {
        entry.into_pair()
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
