//! Effect handlers.
//!
//! A [`Handler`] for effect `E` answers every `E` request of a computation,
//! forwards the requests of other effects unchanged, and returns a
//! computation over the row with `E` removed.

use super::eff::Eff;
use super::member::{Here, Member};
use super::request::Effect;
use super::row::{EffCons, EffNil};

/// A handler that discharges effect `E` from any row containing it.
///
/// # Laws
///
/// ## Handler Identity Law
///
/// ```text
/// handler.handle(Eff::pure(a)) == Eff::pure(a)
/// ```
pub trait Handler<E: Effect>: Sized {
    /// Answers every `E` request and removes `E` from the row.
    fn handle<R, I, A>(self, computation: Eff<R, A>) -> Eff<R::Remainder, A>
    where
        R: Member<E, I>,
        A: 'static;

    /// Runs a computation whose only effect is `E` to its value.
    fn run<A: 'static>(self, computation: Eff<EffCons<E, EffNil>, A>) -> A {
        self.handle::<EffCons<E, EffNil>, Here, A>(computation).run()
    }
}
