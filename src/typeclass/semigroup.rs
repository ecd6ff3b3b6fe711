//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use corelude::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(Sum(2).combine(Sum(40)), Sum(42));
//! assert_eq!(Some(Sum(1)).combine(None), Some(Sum(1)));
//! ```

use std::ops::Add;

use super::wrappers::Sum;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values with the associative operation.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, leaving both untouched.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

/// `None` is the identity; two `Some` combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_combine_adds() {
        assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
    }

    #[rstest]
    fn combine_ref_preserves_originals() {
        let left = Some(Sum(1));
        let right = Some(Sum(2));
        assert_eq!(left.combine_ref(&right), Some(Sum(3)));
        assert_eq!(left, Some(Sum(1)));
        assert_eq!(right, Some(Sum(2)));
    }

    #[rstest]
    #[case(Some(Sum(1)), Some(Sum(2)), Some(Sum(3)))]
    #[case(Some(Sum(1)), None, Some(Sum(1)))]
    #[case(None, Some(Sum(2)), Some(Sum(2)))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }
}
