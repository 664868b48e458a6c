//! Range queries
//!
//! Forward range [ql, qr] (ql <= qr), on node [l, r]:
//!   1. [l, r] ⊆ [ql, qr]  → stored value, no descent
//!   2. [l, r] ∩ [ql, qr] = ∅ → identity
//!   3. otherwise           → merge(left child, right child)
//!
//! Wraparound range (left > right) stands for [left, n-1] ∪ [0, right]
//! and is answered as merge(forward(0, right), forward(left, n-1)).
//! The low half is the LEFT operand, which matters for non-commutative
//! combiners.

use std::ops::{Bound, RangeBounds};

use tracing::trace;

use super::{SegmentTree, TreeNode};
use crate::algebra::Combiner;
use crate::error::{Operation, Result, SegmentTreeError};

/// Classified query bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryRange {
    /// `left <= right`: the elements `left..=right`
    Forward {
        /// First element (inclusive)
        left: usize,
        /// Last element (inclusive)
        right: usize,
    },

    /// `left > right`: the elements `left..n` followed by `0..=right`
    Wraparound {
        /// Start of the high segment
        left: usize,
        /// End of the low segment
        right: usize,
    },
}

impl QueryRange {
    /// Pick the mode by comparing bounds
    pub fn classify(left: usize, right: usize) -> Self {
        if left <= right {
            QueryRange::Forward { left, right }
        } else {
            QueryRange::Wraparound { left, right }
        }
    }

    /// Check both bounds against a tree of `len` elements
    ///
    /// Forward needs `right < len`; wraparound needs `left < len`. In each
    /// mode the other bound is then in range as well.
    pub fn validate(self, len: usize) -> Result<Self> {
        let upper = match self {
            QueryRange::Forward { right, .. } => right,
            QueryRange::Wraparound { left, .. } => left,
        };
        if upper >= len {
            return Err(SegmentTreeError::out_of_range(Operation::Query, upper, len));
        }
        Ok(self)
    }
}

impl<T, C> SegmentTree<T, C>
where
    T: Clone + PartialEq,
    C: Combiner<T>,
{
    /// Combined value over `left..=right`, or the wraparound range when
    /// `left > right`
    pub fn query(&self, left: usize, right: usize) -> Result<T> {
        let range = QueryRange::classify(left, right).validate(self.len)?;
        trace!(?range, "query");

        let value = match range {
            QueryRange::Forward { left, right } => self.forward(left, right),
            QueryRange::Wraparound { left, right } => {
                let low = self.forward(0, right);
                let high = self.forward(left, self.len - 1);
                self.adapter.merge(&low, &high)
            }
        };
        Ok(value)
    }

    /// Combined value over every element (identity when empty)
    pub fn query_all(&self) -> T {
        match self.root() {
            Some(root) => self.tree[root.index].clone(),
            None => self.adapter.identity().clone(),
        }
    }

    /// Forward query using range syntax
    ///
    /// Never wraps: an empty range such as `3..3` yields the identity, a
    /// reversed one such as `5..3` is rejected.
    ///
    /// ```
    /// use segfold::SegmentTree;
    ///
    /// let tree = SegmentTree::summing(&[1, 2, 3, 4]);
    /// assert_eq!(tree.query_range(1..3)?, 5);
    /// assert_eq!(tree.query_range(..)?, 10);
    /// assert_eq!(tree.query_range(2..2)?, 0);
    /// # Ok::<(), segfold::SegmentTreeError>(())
    /// ```
    pub fn query_range<R>(&self, range: R) -> Result<T>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len,
        };

        if end > self.len {
            return Err(SegmentTreeError::out_of_range(Operation::Query, end - 1, self.len));
        }
        if start > end {
            return Err(SegmentTreeError::out_of_range(Operation::Query, start, self.len));
        }
        if start == end {
            return Ok(self.adapter.identity().clone());
        }

        trace!(start, end, "query_range");
        Ok(self.forward(start, end - 1))
    }

    /// Read a single element without cloning
    pub fn get(&self, index: usize) -> Result<&T> {
        let mut node = self
            .root()
            .filter(|root| root.contains(index))
            .ok_or_else(|| SegmentTreeError::out_of_range(Operation::Query, index, self.len))?;

        while !node.is_leaf() {
            let (left, right) = node.children();
            node = if left.contains(index) { left } else { right };
        }
        Ok(&self.tree[node.index])
    }

    /// Forward query on validated bounds
    fn forward(&self, left: usize, right: usize) -> T {
        match self.root() {
            Some(root) => self.query_node(root, left, right),
            None => self.adapter.identity().clone(),
        }
    }

    fn query_node(&self, node: TreeNode, left: usize, right: usize) -> T {
        if node.covered_by(left, right) {
            return self.tree[node.index].clone();
        }
        if node.disjoint_from(left, right) {
            return self.adapter.identity().clone();
        }

        // A leaf is always covered or disjoint, so `node` has children here.
        let (left_child, right_child) = node.children();
        let left_value = self.query_node(left_child, left, right);
        let right_value = self.query_node(right_child, left, right);
        self.adapter.merge(&left_value, &right_value)
    }
}
