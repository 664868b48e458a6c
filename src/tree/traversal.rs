//! Structural traversal for diagnostics
//!
//! Pre-order walk of the implicit tree. Printing needs `T: Display` and
//! simply does not exist for other element types.

use std::fmt::{self, Display, Write};

use super::{SegmentTree, TreeNode};
use crate::algebra::Combiner;

impl<T, C> SegmentTree<T, C>
where
    T: Clone + PartialEq,
    C: Combiner<T>,
{
    /// Check that every internal node equals the merge of its children
    pub fn is_consistent(&self) -> bool {
        self.root().map_or(true, |root| self.node_consistent(root))
    }

    fn node_consistent(&self, node: TreeNode) -> bool {
        if node.is_leaf() {
            return true;
        }
        let (left, right) = node.children();
        let expected = self
            .adapter
            .merge(&self.tree[left.index], &self.tree[right.index]);
        self.tree[node.index] == expected
            && self.node_consistent(left)
            && self.node_consistent(right)
    }
}

impl<T, C> SegmentTree<T, C>
where
    T: Clone + PartialEq + Display,
    C: Combiner<T>,
{
    /// Write one line per node: `indent + depth` tabs, `[value]`, and a
    /// trailing `*` on leaves
    ///
    /// ```
    /// use segfold::SegmentTree;
    ///
    /// let tree = SegmentTree::summing(&[1, 2, 3]);
    /// let mut out = String::new();
    /// tree.print(&mut out, 0).unwrap();
    /// assert_eq!(out, "[6]\n\t[3]\n\t\t[1]*\n\t\t[2]*\n\t[3]*\n");
    /// ```
    pub fn print<W>(&self, sink: &mut W, indent: usize) -> fmt::Result
    where
        W: Write + ?Sized,
    {
        match self.root() {
            Some(root) => self.print_node(sink, indent, root),
            None => Ok(()),
        }
    }

    fn print_node<W>(&self, sink: &mut W, indent: usize, node: TreeNode) -> fmt::Result
    where
        W: Write + ?Sized,
    {
        for _ in 0..indent {
            sink.write_char('\t')?;
        }
        write!(sink, "[{}]", self.tree[node.index])?;

        if node.is_leaf() {
            return sink.write_str("*\n");
        }
        sink.write_char('\n')?;

        let (left, right) = node.children();
        self.print_node(sink, indent + 1, left)?;
        self.print_node(sink, indent + 1, right)
    }
}

impl<T, C> Display for SegmentTree<T, C>
where
    T: Clone + PartialEq + Display,
    C: Combiner<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0)
    }
}
