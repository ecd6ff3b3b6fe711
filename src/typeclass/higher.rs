//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `PersistentList<_>` directly. [`TypeConstructor`] recovers that ability
//! with a GAT: every implementor names the element type it is applied to
//! (`Inner`) and how to rebuild itself around another one (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use corelude::typeclass::TypeConstructor;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = rebuild(Some(42));
//! assert_eq!(none, None);
//! ```

/// A trait representing a type constructor.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
