//! Error types for segment tree operations
//!
//! Every failure is an index outside the logical space `[0, n)`.
//! Validation always happens before any write, so an error never
//! leaves the tree half-updated.

use std::fmt;

use thiserror::Error;

/// Operation that rejected an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Range query (forward or wraparound)
    Query,

    /// Point update
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Query => f.write_str("query"),
            Operation::Update => f.write_str("update"),
        }
    }
}

/// Errors raised by [`SegmentTree`](crate::SegmentTree)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentTreeError {
    /// An index fell outside `[0, len)`
    #[error("{operation} received out of range index {index} (len {len})")]
    IndexOutOfRange {
        /// Operation that was attempted
        operation: Operation,
        /// Offending index (the first bound that failed validation)
        index: usize,
        /// Logical length of the tree
        len: usize,
    },
}

impl SegmentTreeError {
    /// Helper for constructing out-of-range errors.
    pub fn out_of_range(operation: Operation, index: usize, len: usize) -> Self {
        SegmentTreeError::IndexOutOfRange {
            operation,
            index,
            len,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SegmentTreeError>;
