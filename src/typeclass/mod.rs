//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent wrapped values
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Alternative`]: Failure and choice, plus the [`many`] / [`some`]
//!   repetition combinators
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Traversable`]: Traversing structures with any applicative
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] emulates them
//! with a Generic Associated Type, which lets the traits above talk about
//! "the same container holding another type".
//!
//! Mapping functions are `FnMut` rather than `FnOnce`, so a single
//! implementation serves both single-value containers like `Option` and
//! multi-element containers like `PersistentList`.
//!
//! # Examples
//!
//! ```rust
//! use corelude::typeclass::{Applicative, Monad, Semigroup, Sum};
//!
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//! assert_eq!(Some(4).flat_map(|x| if x > 3 { Some(x) } else { None }), Some(4));
//! assert_eq!(Sum(1).combine(Sum(2)), Sum(3));
//! ```

mod alternative;
mod applicative;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use alternative::Alternative;
#[cfg(feature = "persistent")]
pub use alternative::{many, some};
pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::Sum;
