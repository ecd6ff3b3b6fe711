//! Traversable type class - mapping with effects and collecting results.
//!
//! `traverse` applies an effectful function to every element and rebuilds
//! the structure inside the effect. It is generic over the target
//! [`Applicative`]: the function's return type `G` selects it, and the
//! result is `G` applied to the rebuilt structure.
//!
//! # Examples
//!
//! ```rust
//! use corelude::typeclass::Traversable;
//!
//! let parsed: Option<Option<i32>> = Some("42").traverse(|text| text.parse().ok());
//! assert_eq!(parsed, Some(Some(42)));
//!
//! let failed: Option<Option<i32>> = Some("x").traverse(|text| text.parse().ok());
//! assert_eq!(failed, None);
//! ```
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! xs.traverse(Identity) == Identity(xs)
//! ```
//!
//! ## Naturality
//!
//! ```text
//! transform(xs.traverse(f)) == xs.traverse(|x| transform(f(x)))
//! ```

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures that can be traversed with an applicative.
pub trait Traversable: Functor + Foldable {
    /// Applies `function` to each element and collects the results inside
    /// the applicative `G`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::{Identity, Traversable};
    ///
    /// assert_eq!(Some(2).traverse(|x| Identity(x * 3)), Identity(Some(6)));
    /// ```
    fn traverse<G, F>(self, function: F) -> G::WithType<Self::WithType<G::Inner>>
    where
        G: Applicative,
        G::Inner: Clone,
        F: FnMut(Self::Inner) -> G;

    /// Turns a structure of applicatives into an applicative of a structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::typeclass::Traversable;
    ///
    /// assert_eq!(Some(Some(1)).sequence(), Some(Some(1)));
    /// assert_eq!(Some(None::<i32>).sequence(), None);
    /// ```
    #[allow(clippy::type_complexity)]
    fn sequence(
        self,
    ) -> <Self::Inner as TypeConstructor>::WithType<
        Self::WithType<<Self::Inner as TypeConstructor>::Inner>,
    >
    where
        Self: Sized,
        Self::Inner: Applicative,
        <Self::Inner as TypeConstructor>::Inner: Clone,
    {
        self.traverse(|effect| effect)
    }

    /// Traverses with a function returning `Option`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(Self::Inner) -> Option<B>,
    {
        self.traverse(function)
    }
}

impl<A> Traversable for Option<A> {
    fn traverse<G, F>(self, mut function: F) -> G::WithType<Option<G::Inner>>
    where
        G: Applicative,
        G::Inner: Clone,
        F: FnMut(A) -> G,
    {
        match self {
            Some(element) => function(element).fmap(Some),
            None => G::pure(None),
        }
    }
}

impl<A> Traversable for Identity<A> {
    fn traverse<G, F>(self, mut function: F) -> G::WithType<Identity<G::Inner>>
    where
        G: Applicative,
        G::Inner: Clone,
        F: FnMut(A) -> G,
    {
        function(self.0).fmap(Identity)
    }
}
