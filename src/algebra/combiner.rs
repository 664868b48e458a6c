//! Identity-aware merge adapter
//!
//! merge(left, right) = right               if left == identity
//!                    = left                if right == identity
//!                    = combine(left, right) otherwise
//!
//! Some combiners are not well defined on an explicit "empty" marker
//! (string joins would emit a stray separator), so the identity never
//! reaches the user combiner.

use super::{Combiner, Monoid};

/// Combiner plus stored identity, used for every merge in the tree
#[derive(Debug, Clone)]
pub struct MergeAdapter<T, C> {
    combiner: C,
    identity: T,
}

impl<T, C> MergeAdapter<T, C>
where
    T: Clone + PartialEq,
    C: Combiner<T>,
{
    /// Create adapter from a combiner and an explicit identity
    pub fn new(combiner: C, identity: T) -> Self {
        Self { combiner, identity }
    }

    /// Create adapter taking the identity from the monoid itself
    pub fn from_monoid(monoid: C) -> Self
    where
        C: Monoid<T>,
    {
        let identity = monoid.identity();
        Self::new(monoid, identity)
    }

    /// Merge two partial results, `left` first
    ///
    /// Total: never fails and never calls the combiner with the identity.
    #[inline]
    pub fn merge(&self, left: &T, right: &T) -> T {
        if *left == self.identity {
            right.clone()
        } else if *right == self.identity {
            left.clone()
        } else {
            self.combiner.combine(left, right)
        }
    }

    /// Check whether `value` is the identity sentinel
    #[inline]
    pub fn is_identity(&self, value: &T) -> bool {
        *value == self.identity
    }
}

impl<T, C> MergeAdapter<T, C> {
    /// Stored identity element
    pub fn identity(&self) -> &T {
        &self.identity
    }

    /// Wrapped user combiner
    pub fn combiner(&self) -> &C {
        &self.combiner
    }
}
