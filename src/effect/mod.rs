//! Algebraic effects over open effect rows.
//!
//! A computation [`Eff<R, A>`] declares the effects it may perform as a
//! type-level row `R`. Each effect is a type implementing [`Effect`].
//! Handlers discharge one effect at a time, shrinking the row; once the row
//! is empty ([`EffNil`]) the result is extracted with [`Eff::run`].
//!
//! # Building Blocks
//!
//! - [`Effect`]: declares an effect's operation and reply types
//! - [`EffectRow`], [`EffCons`], [`EffNil`] and the
//!   [`EffectRow!`](crate::EffectRow) macro: rows of effects
//! - [`Member`]: proof that a row contains an effect, with the index
//!   ([`Here`], [`There`]) inferred by the compiler
//! - [`Handler`]: discharges one effect from any row containing it
//!
//! # Reader
//!
//! - [`ask`]: retrieve the environment
//! - [`asks`]: retrieve a projection of the environment
//! - [`local`]: run a sub-computation under a modified environment
//! - [`run_reader`] / [`ReaderHandler`]: supply the environment
//!
//! ```rust
//! use corelude::EffectRow;
//! use corelude::effect::{Eff, ReaderEffect, asks, run_reader};
//!
//! type Row = EffectRow![ReaderEffect<i32>];
//!
//! let computation: Eff<Row, i32> = asks(|environment: i32| environment * 2);
//! let handled = run_reader(5, computation);
//! assert!(handled.is_pure());
//! assert_eq!(handled.run(), 10);
//! ```

mod eff;
mod error;
mod handler;
mod member;
mod reader;
mod request;
mod row;

pub use eff::Eff;
pub use error::EffectError;
pub use handler::Handler;
pub use member::{Here, Member, There};
pub use reader::{Ask, ReaderEffect, ReaderHandler, ask, asks, local, run_reader};
pub use request::{Effect, Request};
pub use row::{EffCons, EffNil, EffectRow, OpenUnion, Void};
