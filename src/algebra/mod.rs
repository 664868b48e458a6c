//! Combining operations over tree elements
//!
//! A [`Combiner`] is any associative two-argument operation; it is not
//! assumed commutative. A [`Monoid`] is a combiner that also knows its
//! identity element. The tree never calls a combiner directly: every
//! combination goes through [`MergeAdapter`], which short-circuits on the
//! identity.

mod combiner;
pub mod ops;

pub use combiner::MergeAdapter;
pub use ops::{Concat, Max, Min, Product, Sum};

/// Associative binary operation over elements of type `T`
///
/// Implemented for every `Fn(&T, &T) -> T`, so plain closures work:
///
/// ```
/// use segfold::algebra::Combiner;
///
/// let gcd = |a: &u64, b: &u64| {
///     let (mut a, mut b) = (*a, *b);
///     while b != 0 {
///         (a, b) = (b, a % b);
///     }
///     a
/// };
/// assert_eq!(gcd.combine(&12, &18), 6);
/// ```
pub trait Combiner<T> {
    /// Combine `left` and `right`, in that order.
    fn combine(&self, left: &T, right: &T) -> T;
}

impl<T, F> Combiner<T> for F
where
    F: Fn(&T, &T) -> T,
{
    #[inline]
    fn combine(&self, left: &T, right: &T) -> T {
        self(left, right)
    }
}

/// Combiner paired with its identity element
///
/// Require for all `a`: `combine(identity, a) == combine(a, identity) == a`.
pub trait Monoid<T>: Combiner<T> {
    /// Identity element of this operation.
    fn identity(&self) -> T;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_combiner() {
        let concat = |a: &String, b: &String| format!("{a}{b}");
        assert_eq!(concat.combine(&"ab".to_string(), &"cd".to_string()), "abcd");
    }
}
