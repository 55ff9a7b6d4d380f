//! Error types shared by the container structures.
//!
//! Each failure mode gets its own type so callers can distinguish them
//! without inspecting message strings. "Not found" is never an error:
//! lookups return `Option` and membership checks return `bool`.

use core::fmt;

/// Requested capacity was zero.
///
/// Every container in this crate keeps at least one allocated slot, so
/// explicit-capacity constructors reject zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity cannot be zero")
    }
}

impl std::error::Error for CapacityError {}

/// Index was out of bounds for the attempted operation.
///
/// Carries the offending index and the length the container had at the
/// time of the call. The failed operation mutates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// The index that was passed in.
    pub index: usize,
    /// Container length when the check failed.
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds for length {}", self.index, self.len)
    }
}

impl std::error::Error for IndexError {}

/// Removal or peek was attempted on an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is empty")
    }
}

impl std::error::Error for EmptyError {}
