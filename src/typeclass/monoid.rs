//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::Sum;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use corelude::typeclass::{Monoid, Semigroup, Sum};
///
/// let value = Sum(7);
/// assert_eq!(Sum::empty().combine(value), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Add<Output = A> + From<u8>> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::from(0))
    }
}
