//! Applicative type class - lifting values and combining independent effects.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value,
//! and `map2`, which combines two wrapped values. For containers with many
//! elements `map2` pairs every element of `self` with every element of
//! `other`, left operand outermost, so `apply` on lists is the
//! function-major Cartesian product.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use corelude::typeclass::Applicative;
//!
//! let sum = Some(1).map2(Some(2), |a, b| a + b);
//! assert_eq!(sum, Some(3));
//!
//! let missing = Some(1).map2(None::<i32>, |a, b| a + b);
//! assert_eq!(missing, None);
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and combine wrapped values.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::Applicative;
    ///
    /// let wrapped: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(wrapped, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    ///
    /// Elements of `self` are cloned once per element of `other`, and vice
    /// versa, which is why both inner types must be `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::Applicative;
    ///
    /// assert_eq!(Some(3).map2(Some(4), |a, b| a * b), Some(12));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Like [`map2`](Applicative::map2), but `other` is only built when
    /// `self` holds at least one value.
    ///
    /// Strict evaluation would otherwise construct the right operand even
    /// when the left one already failed. Recursive combinators such as
    /// [`many`](super::many) rely on this to stop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::Applicative;
    ///
    /// let result = None::<i32>.map2_deferred(|| -> Option<i32> { unreachable!() }, |a, b| a + b);
    /// assert_eq!(result, None);
    /// ```
    fn map2_deferred<B, C, F, G>(self, other: G, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C,
        G: FnOnce() -> Self::WithType<B>;

    /// Pairs the values of two applicatives.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function(s) inside `self` to the value(s) inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnMut(B) -> Output + Clone,
        B: Clone,
    {
        self.map2(other, |mut function, value| function(value))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map2_deferred<B, C, F, G>(self, other: G, mut function: F) -> Option<C>
    where
        F: FnMut(A, B) -> C,
        G: FnOnce() -> Option<B>,
    {
        let a = self?;
        other().map(|b| function(a, b))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, mut function: F) -> Identity<C>
    where
        F: FnMut(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map2_deferred<B, C, F, G>(self, other: G, mut function: F) -> Identity<C>
    where
        F: FnMut(A, B) -> C,
        G: FnOnce() -> Identity<B>,
    {
        Identity(function(self.0, other().0))
    }
}
