//! Bottom-up construction
//!
//! Depth-first over the midpoint split. Leaves are reached in increasing
//! element order, so the initial sequence is consumed as a plain iterator:
//! each leaf takes the next element, each internal node merges its
//! children once both are built.

use super::{SegmentTree, TreeNode};
use crate::algebra::Combiner;

impl<T, C> SegmentTree<T, C>
where
    T: Clone + PartialEq,
    C: Combiner<T>,
{
    /// Populate storage from `data` (exactly `len` elements)
    pub(super) fn populate<I>(&mut self, mut data: I)
    where
        I: Iterator<Item = T>,
    {
        if let Some(root) = self.root() {
            self.build(root, &mut data);
        }
        debug_assert!(data.next().is_none(), "more elements than leaves");
    }

    fn build<I>(&mut self, node: TreeNode, data: &mut I)
    where
        I: Iterator<Item = T>,
    {
        if node.is_leaf() {
            if let Some(value) = data.next() {
                self.tree[node.index] = value;
            }
            return;
        }

        let (left, right) = node.children();
        self.build(left, data);
        self.build(right, data);
        self.pull(node, left, right);
    }

    /// Recompute an internal node from its two children
    #[inline]
    pub(super) fn pull(&mut self, node: TreeNode, left: TreeNode, right: TreeNode) {
        self.tree[node.index] = self
            .adapter
            .merge(&self.tree[left.index], &self.tree[right.index]);
    }
}

#[cfg(test)]
mod tests {
    use crate::algebra::{Concat, Sum};
    use crate::SegmentTree;

    #[test]
    fn test_layout_matches_midpoint_split() {
        // [1, 2, 3, 4, 5]: root [0,4] -> [0,2] + [3,4]; [0,2] -> [0,1] + [2,2]
        let tree = SegmentTree::summing(&[1, 2, 3, 4, 5]);
        let s = tree.storage();

        assert_eq!(s[0], 15);
        assert_eq!((s[1], s[2]), (6, 9));
        assert_eq!((s[3], s[4]), (3, 3));
        assert_eq!((s[5], s[6]), (4, 5));
        assert_eq!((s[7], s[8]), (1, 2));
    }

    #[test]
    fn test_leaves_keep_input_order() {
        let words: Vec<String> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let tree = SegmentTree::from_vec(words, Concat::new(""), String::new());
        assert_eq!(tree.query_all(), "abcdef");
    }

    #[test]
    fn test_build_holds_invariant() {
        let data: Vec<i64> = (0..37).map(|i| (i * 7919) % 101 - 50).collect();
        let tree = SegmentTree::from_slice(&data, Sum, 0);
        assert!(tree.is_consistent());
        assert_eq!(tree.query_all(), data.iter().sum::<i64>());
    }

    #[test]
    fn test_empty_build() {
        let tree = SegmentTree::summing(&[] as &[i32]);
        assert!(tree.is_empty());
        assert!(tree.storage().is_empty());
        assert_eq!(tree.query_all(), 0);
    }
}
