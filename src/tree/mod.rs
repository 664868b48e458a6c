//! Array-backed segment tree
//!
//! Storage is a flat buffer of `4n` slots forming a complete binary tree:
//! node `i` covers `[l, r]`, its children sit at `2i+1` and `2i+2`, and
//! the split point is `l + (r - l) / 2`. Leaves hold raw elements; every
//! internal node holds the merge of its two children.
//!
//! The length is fixed at construction. Operations are split by concern:
//! - `build`: bottom-up population from an initial sequence
//! - `update`: point writes plus ancestor recomputation
//! - `query`: forward and wraparound range decomposition
//! - `traversal`: diagnostics and invariant checks

mod build;
mod node;
mod query;
mod traversal;
mod update;

pub use node::TreeNode;
pub use query::QueryRange;

use std::fmt;

use num_traits::Zero;
use tracing::debug;

use crate::algebra::{Combiner, MergeAdapter, Monoid, Sum};

/// Fixed-length range aggregation index
///
/// `T` is the element type, `C` the combining operation. Equality on `T`
/// is only used to recognise the identity.
///
/// ```
/// use segfold::SegmentTree;
///
/// let mut tree = SegmentTree::summing(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// assert_eq!(tree.query(1, 4)?, 14);
/// assert_eq!(tree.query(8, 2)?, 25); // 9 + 10 + 1 + 2 + 3
///
/// tree.update(5, -10)?;
/// assert_eq!(tree.query_all(), 39);
/// # Ok::<(), segfold::SegmentTreeError>(())
/// ```
pub struct SegmentTree<T, C> {
    /// Logical sequence length n
    len: usize,

    /// Implicit tree, 4n slots
    tree: Vec<T>,

    /// Combiner with identity short-circuit
    adapter: MergeAdapter<T, C>,
}

impl<T, C> SegmentTree<T, C>
where
    T: Clone + PartialEq,
    C: Combiner<T>,
{
    /// Create a tree of `size` elements, all equal to `identity`
    pub fn new(size: usize, combiner: C, identity: T) -> Self {
        Self::allocate(size, MergeAdapter::new(combiner, identity))
    }

    /// Build a tree over `data`, taking ownership of the elements
    pub fn from_vec(data: Vec<T>, combiner: C, identity: T) -> Self {
        let len = data.len();
        let mut tree = Self::allocate(len, MergeAdapter::new(combiner, identity));
        tree.populate(data.into_iter());
        tree
    }

    /// Build a tree over a copy of `data`
    pub fn from_slice(data: &[T], combiner: C, identity: T) -> Self {
        let mut tree = Self::allocate(data.len(), MergeAdapter::new(combiner, identity));
        tree.populate(data.iter().cloned());
        tree
    }

    /// Build a tree whose identity comes from the combiner itself
    ///
    /// ```
    /// use segfold::{algebra::Min, SegmentTree};
    ///
    /// let tree = SegmentTree::with_monoid(&[9_i64, 3, 8, 6, 7, 4, 10], Min);
    /// assert_eq!(tree.query(0, 6)?, 3);
    /// # Ok::<(), segfold::SegmentTreeError>(())
    /// ```
    pub fn with_monoid(data: &[T], monoid: C) -> Self
    where
        C: Monoid<T>,
    {
        let mut tree = Self::allocate(data.len(), MergeAdapter::from_monoid(monoid));
        tree.populate(data.iter().cloned());
        tree
    }

    fn allocate(len: usize, adapter: MergeAdapter<T, C>) -> Self {
        let tree = vec![adapter.identity().clone(); len * 4];
        debug!(len, slots = tree.len(), "allocated segment tree");
        Self { len, tree, adapter }
    }

    /// Logical number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree covers no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Identity element used for empty sub-ranges
    pub fn identity(&self) -> &T {
        self.adapter.identity()
    }

    /// Combiner supplied at construction
    pub fn combiner(&self) -> &C {
        self.adapter.combiner()
    }

    /// Root node, or `None` when empty
    pub fn root(&self) -> Option<TreeNode> {
        TreeNode::root(self.len)
    }

    /// Number of levels below the root (0 for a single element)
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| root.depth_to_leaf())
    }

    /// Raw storage buffer (length `4n`, unused slots hold the identity)
    pub fn storage(&self) -> &[T] {
        &self.tree
    }
}

impl<T> SegmentTree<T, Sum>
where
    T: Zero + Clone + PartialEq,
{
    /// Summing tree with zero as identity
    pub fn summing(data: &[T]) -> Self {
        Self::with_monoid(data, Sum)
    }
}

impl<T, C> fmt::Debug for SegmentTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len)
            .field("identity", self.adapter.identity())
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}
