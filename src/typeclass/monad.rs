//! Monad type class - sequencing computations that depend on earlier results.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for applicatives that support dependent sequencing.
///
/// # Examples
///
/// ```rust
/// use corelude::typeclass::Monad;
///
/// let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
/// assert_eq!(Some(8).flat_map(halve).flat_map(halve), Some(2));
/// assert_eq!(Some(6).flat_map(halve).flat_map(halve), None);
/// ```
pub trait Monad: Applicative {
    /// Binds every inner value to a new monadic value and flattens the result.
    ///
    /// Multi-element containers copy the produced values into one result,
    /// hence `B: Clone`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self` for every value of `self`, discarding
    /// those values.
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
        Self::WithType<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<B>,
    {
        function(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn safe_reciprocal(value: f64) -> Option<f64> {
        if value == 0.0 { None } else { Some(1.0 / value) }
    }

    #[rstest]
    fn option_left_identity() {
        assert_eq!(
            <Option<()>>::pure(4.0).flat_map(safe_reciprocal),
            safe_reciprocal(4.0)
        );
    }

    #[rstest]
    fn option_right_identity(#[values(Some(1), None)] value: Option<i32>) {
        assert_eq!(value.flat_map(Some), value);
    }

    #[rstest]
    fn option_then_discards_left_value() {
        assert_eq!(Some(1).then(Some("next")), Some("next"));
        assert_eq!(None::<i32>.then(Some("next")), None);
    }

    #[rstest]
    fn identity_flat_map_unwraps() {
        assert_eq!(Identity(3).flat_map(|x| Identity(x + 1)), Identity(4));
    }
}
