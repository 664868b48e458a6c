//! Built-in combiners
//!
//! Each operation is a zero-sized (or near zero-sized) value paired with
//! its natural identity through [`Monoid`]. Identities for numeric types
//! come from `num-traits`.

use num_traits::{Bounded, One, Zero};

use super::{Combiner, Monoid};

/// Addition; identity is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl<T> Combiner<T> for Sum
where
    T: Zero + Clone,
{
    #[inline]
    fn combine(&self, left: &T, right: &T) -> T {
        left.clone() + right.clone()
    }
}

impl<T> Monoid<T> for Sum
where
    T: Zero + Clone,
{
    fn identity(&self) -> T {
        T::zero()
    }
}

/// Multiplication; identity is one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

impl<T> Combiner<T> for Product
where
    T: One + Clone,
{
    #[inline]
    fn combine(&self, left: &T, right: &T) -> T {
        left.clone() * right.clone()
    }
}

impl<T> Monoid<T> for Product
where
    T: One + Clone,
{
    fn identity(&self) -> T {
        T::one()
    }
}

/// Minimum; identity is the largest representable value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl<T> Combiner<T> for Min
where
    T: PartialOrd + Clone,
{
    #[inline]
    fn combine(&self, left: &T, right: &T) -> T {
        // Ties keep the left operand.
        if right < left {
            right.clone()
        } else {
            left.clone()
        }
    }
}

impl<T> Monoid<T> for Min
where
    T: Bounded + PartialOrd + Clone,
{
    fn identity(&self) -> T {
        T::max_value()
    }
}

/// Maximum; identity is the smallest representable value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl<T> Combiner<T> for Max
where
    T: PartialOrd + Clone,
{
    #[inline]
    fn combine(&self, left: &T, right: &T) -> T {
        if right > left {
            right.clone()
        } else {
            left.clone()
        }
    }
}

impl<T> Monoid<T> for Max
where
    T: Bounded + PartialOrd + Clone,
{
    fn identity(&self) -> T {
        T::min_value()
    }
}

/// Ordered string concatenation with a separator; identity is `""`
///
/// Not commutative, which makes it the reference combiner for checking
/// operand order. Under [`MergeAdapter`](super::MergeAdapter) the empty
/// string never produces a dangling separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concat {
    separator: String,
}

impl Concat {
    /// Concatenation joining operands with `separator`
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Separator placed between operands
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Combiner<String> for Concat {
    fn combine(&self, left: &String, right: &String) -> String {
        let mut out = String::with_capacity(left.len() + self.separator.len() + right.len());
        out.push_str(left);
        out.push_str(&self.separator);
        out.push_str(right);
        out
    }
}

impl Monoid<String> for Concat {
    fn identity(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_identities() {
        assert_eq!(Monoid::<i64>::identity(&Sum), 0);
        assert_eq!(Monoid::<u32>::identity(&Product), 1);
        assert_eq!(Monoid::<i64>::identity(&Min), i64::MAX);
        assert_eq!(Monoid::<i8>::identity(&Max), i8::MIN);
    }

    #[test]
    fn test_min_max_select() {
        assert_eq!(Min.combine(&3, &-2), -2);
        assert_eq!(Max.combine(&3, &-2), 3);
        assert_eq!(Min.combine(&1.5f64, &2.5), 1.5);
    }

    #[test]
    fn test_concat_is_ordered() {
        let concat = Concat::new("-");
        let (a, b) = ("x".to_string(), "y".to_string());
        assert_eq!(concat.combine(&a, &b), "x-y");
        assert_eq!(concat.combine(&b, &a), "y-x");
        assert_eq!(concat.separator(), "-");
    }
}
