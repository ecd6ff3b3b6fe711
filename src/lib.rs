//! # corelude
//!
//! Two building blocks of a functional language's core library:
//! a persistent list with its algebraic instances, and a Reader effect
//! built on open effect rows.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Alternative, Foldable,
//!   Traversable, Semigroup, Monoid
//! - **Persistent Data Structures**: `PersistentList` with structural
//!   equality and ordering, `filter` and a partition-based `sort`
//! - **Effect System**: `Eff` computations over effect rows and the Reader
//!   effect (`ask`, `asks`, `local`, `run_reader`)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `persistent`: Persistent list
//! - `effect`: Effect rows and the Reader effect
//! - `serde`: Serialization support for `PersistentList`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use corelude::prelude::*;
//!
//! let list = PersistentList::of(&[3, 1, 2]);
//! assert_eq!(list.sort(), PersistentList::of(&[1, 2, 3]));
//!
//! type Row = EffectRow![ReaderEffect<i32>];
//! let computation: Eff<Row, i32> = asks(|environment: i32| environment * 2);
//! assert_eq!(run_reader(5, computation).run(), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use corelude::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "effect")]
    pub use crate::EffectRow;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "effect")]
pub mod effect;
