//! Point updates
//!
//! Descend from the root into the child containing the target, write the
//! leaf, then recompute each ancestor on the way back up. Only the
//! `O(log n)` nodes on that path are touched.

use tracing::trace;

use super::{SegmentTree, TreeNode};
use crate::algebra::Combiner;
use crate::error::{Operation, Result, SegmentTreeError};

impl<T, C> SegmentTree<T, C>
where
    T: Clone + PartialEq,
    C: Combiner<T>,
{
    /// Replace the element at `index` with `value`
    ///
    /// Fails with `IndexOutOfRange` when `index >= len`; the tree is left
    /// untouched in that case.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        let root = self
            .root()
            .filter(|root| root.contains(index))
            .ok_or_else(|| SegmentTreeError::out_of_range(Operation::Update, index, self.len))?;

        trace!(index, "update");
        self.update_node(root, index, value);
        Ok(())
    }

    fn update_node(&mut self, node: TreeNode, index: usize, value: T) {
        if node.is_leaf() {
            self.tree[node.index] = value;
            return;
        }

        let (left, right) = node.children();
        if left.contains(index) {
            self.update_node(left, index, value);
        } else {
            self.update_node(right, index, value);
        }
        self.pull(node, left, right);
    }
}
