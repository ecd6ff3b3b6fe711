//! Alternative type class - monoid structure on Applicative functors.
//!
//! `Alternative` extends [`Applicative`] with a failure value (`empty`) and a
//! choice operator (`alt`). On `Option` choice keeps the first success; on
//! `PersistentList` it concatenates, collecting every outcome.
//!
//! The repetition combinators [`many`] and [`some`] are defined once for
//! every `Alternative` and collect the repeated results into a
//! `PersistentList`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```

use super::applicative::Applicative;

#[cfg(feature = "persistent")]
use crate::persistent::PersistentList;

/// A type class for applicatives with a failure value and a choice operator.
///
/// # Examples
///
/// ```rust
/// use corelude::typeclass::Alternative;
///
/// assert_eq!(None.alt(Some(42)), Some(42));
/// assert_eq!(Some(1).alt(Some(2)), Some(1));
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::Alternative;
    ///
    /// let empty: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(empty, None);
    /// ```
    fn empty<B>() -> Self::WithType<B>;

    /// Combines two alternatives.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when the condition holds, fails otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::{Alternative, Functor};
    ///
    /// fn filter_positive(n: i32) -> Option<i32> {
    ///     <Option<()>>::guard(n > 0).fmap(move |_| n)
    /// }
    ///
    /// assert_eq!(filter_positive(5), Some(5));
    /// assert_eq!(filter_positive(-3), None);
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Turns failure into a successful `None`.
    fn optional(self) -> Self::WithType<Option<Self::Inner>>
    where
        Self: Sized;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Option<Self> {
        Some(self)
    }
}

// =============================================================================
// Repetition
// =============================================================================

/// One or more repetitions of `value`.
///
/// Runs `value` once, then [`many`] for the rest, and prepends the first
/// result to the rest. The recursive call is only built after `value`
/// succeeded, so a failing `value` fails immediately. A `value` that never
/// fails makes the recursion unbounded; avoiding that is up to the caller.
///
/// # Examples
///
/// ```rust
/// use corelude::typeclass::some;
///
/// assert_eq!(some(None::<char>), None);
/// ```
#[cfg(feature = "persistent")]
pub fn some<F>(value: F) -> F::WithType<PersistentList<F::Inner>>
where
    F: Alternative + Clone,
    F::Inner: Clone,
    F::WithType<PersistentList<F::Inner>>: Alternative,
{
    value.clone().map2_deferred(
        move || many(value),
        |head, tail: PersistentList<F::Inner>| tail.cons(head),
    )
}

/// Zero or more repetitions of `value`.
///
/// Tries [`some`] first and falls back to the empty list lifted with `pure`.
///
/// # Examples
///
/// ```rust
/// use corelude::persistent::PersistentList;
/// use corelude::typeclass::many;
///
/// assert_eq!(many(None::<char>), Some(PersistentList::new()));
/// ```
#[cfg(feature = "persistent")]
pub fn many<F>(value: F) -> F::WithType<PersistentList<F::Inner>>
where
    F: Alternative + Clone,
    F::Inner: Clone,
    F::WithType<PersistentList<F::Inner>>: Alternative,
{
    some(value).alt(F::pure(PersistentList::new()))
}
