//! # Range aggregation over a fixed index space
//!
//! `segfold` implements a segment tree: a fixed-length sequence that
//! supports point updates and the combined value of any inclusive range
//! under a caller-supplied associative operation with an identity.
//!
//! ## Core Algorithm
//!
//! 1. **Implicit layout**: a `4n` buffer, children of node `i` at `2i+1`
//!    and `2i+2`, split point `l + (r - l) / 2`
//! 2. **Identity-aware merging**: every combination goes through
//!    [`MergeAdapter`], which never hands the identity to the combiner
//! 3. **Pruned descent**: queries stop at nodes fully inside or fully
//!    outside the range, visiting `O(log n)` nodes
//! 4. **Wraparound**: `query(l, r)` with `l > r` covers `[l, n-1]` and
//!    `[0, r]`, merged low segment first
//!
//! ## Usage Example
//!
//! ```
//! use segfold::{algebra::Concat, SegmentTree};
//!
//! let words: Vec<String> = ["mon", "tue", "wed", "thu", "fri"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//! let mut week = SegmentTree::with_monoid(&words, Concat::new(","));
//!
//! assert_eq!(week.query(1, 3)?, "tue,wed,thu");
//! assert_eq!(week.query(3, 0)?, "mon,thu,fri");
//!
//! week.update(2, String::new())?;
//! assert_eq!(week.query(1, 3)?, "tue,thu");
//! # Ok::<(), segfold::SegmentTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // Combiners and the merge adapter
pub mod error; // Index validation errors
pub mod tree; // Array-backed tree, build/update/query/traversal

// Re-exports for convenience
pub use algebra::{Combiner, MergeAdapter, Monoid};
pub use error::{Operation, Result, SegmentTreeError};
pub use tree::{QueryRange, SegmentTree, TreeNode};
