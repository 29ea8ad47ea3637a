//! Error types for property list operations.
//!
//! Absence ("no such entry") and out-of-range indices on the clamping range
//! operations are modeled as data, not errors: lookups return `Option` and
//! range arguments are clamped. The variants here cover the strict positional
//! operations only.

use thiserror::Error;

/// Structured error type for property list operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ListError {
    /// A strict positional operation referenced an index past the end of the list
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl ListError {
    /// Check if this error is related to positional access
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ListError::IndexOutOfBounds { .. })
    }
}

// Conversion from ListError to the main Error type
impl From<ListError> for crate::Error {
    fn from(err: ListError) -> Self {
        crate::Error::List(err)
    }
}
