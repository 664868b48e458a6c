//! Implicit tree node representation
//!
//! Node = (storage index i, interval [left, right] ⊆ [0, n-1])
//! Children computed via midpoint: m = left + (right - left) / 2
//!   Left child:  2i + 1 covering [left, m]
//!   Right child: 2i + 2 covering [m+1, right]

use std::fmt;

/// Tree node (implicit - a storage slot plus the interval it covers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Position in the storage buffer
    pub index: usize,

    /// Left element index (inclusive)
    pub left: usize,

    /// Right element index (inclusive)
    pub right: usize,
}

impl TreeNode {
    /// Root spanning `[0, len-1]`, or `None` for an empty sequence
    pub fn root(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: 0,
            left: 0,
            right: len - 1,
        })
    }

    /// Check if leaf (unit interval)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == self.right
    }

    /// Interval length
    #[inline]
    pub fn length(&self) -> usize {
        self.right - self.left + 1
    }

    /// Split point, written to avoid overflow near `usize::MAX`
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.left + (self.right - self.left) / 2
    }

    /// Get children via midpoint split
    ///
    /// Returns: (2i+1 over [left, mid], 2i+2 over [mid+1, right])
    #[inline]
    pub fn children(&self) -> (TreeNode, TreeNode) {
        debug_assert!(!self.is_leaf(), "Leaf has no children");

        let mid = self.midpoint();
        let left_child = TreeNode {
            index: 2 * self.index + 1,
            left: self.left,
            right: mid,
        };
        let right_child = TreeNode {
            index: 2 * self.index + 2,
            left: mid + 1,
            right: self.right,
        };

        (left_child, right_child)
    }

    /// Element `position` lies inside this node's interval
    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        self.left <= position && position <= self.right
    }

    /// Interval lies entirely inside `[query_left, query_right]`
    #[inline]
    pub fn covered_by(&self, query_left: usize, query_right: usize) -> bool {
        query_left <= self.left && self.right <= query_right
    }

    /// Interval shares no element with `[query_left, query_right]`
    #[inline]
    pub fn disjoint_from(&self, query_left: usize, query_right: usize) -> bool {
        query_right < self.left || self.right < query_left
    }

    /// Levels between this node and its deepest leaf
    ///
    /// The left child is never shorter than the right one, so following
    /// left children reaches the deepest leaf.
    pub fn depth_to_leaf(&self) -> usize {
        let mut node = *self;
        let mut depth = 0;

        while !node.is_leaf() {
            let (left_child, _) = node.children();
            node = left_child;
            depth += 1;
        }

        depth
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "#{} [{}]", self.index, self.left)
        } else {
            write!(f, "#{} [{}, {}]", self.index, self.left, self.right)
        }
    }
}
