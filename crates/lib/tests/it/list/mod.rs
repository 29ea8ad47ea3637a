//! PropertyList integration tests
//!
//! Tests are organized by operation area for better maintainability:
//! - ends: push/pop at both ends, length bookkeeping
//! - lookup: key/value/index lookups and ordered views
//! - ranges: slice_in_place and splice clamping behavior
//! - transforms: sort, for_each, map, retain and their owning variants
//! - serialization: JSON round-trips through serde

mod ends;
mod ranges;
