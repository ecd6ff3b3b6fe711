//! The `Eff` computation type.
//!
//! `Eff<R, A>` is a computation over the effect row `R` producing an `A`.
//! It is either finished (`Pure`) or suspended on exactly one request of
//! one of the row's effects (`Impure`). The request carries the
//! continuation, so binding onto a suspended computation composes after
//! that continuation instead of running anything.
//!
//! Handlers (see [`run_reader`](super::run_reader)) walk this structure,
//! answer the requests of their effect and pass the others through.
//! A computation over the empty row [`EffNil`] can only be `Pure`, so
//! [`Eff::run`] extracts its value without any failure case.
//!
//! # Examples
//!
//! ```rust
//! use corelude::effect::{Eff, EffNil};
//!
//! let computation: Eff<EffNil, i32> = Eff::pure(20).fmap(|x| x + 1).flat_map(|x| Eff::pure(x * 2));
//! assert_eq!(computation.run(), 42);
//! ```

use std::fmt;

use super::error::EffectError;
use super::member::Member;
use super::request::{Effect, Request};
use super::row::{EffNil, EffectRow};

/// A computation over effect row `R` producing a value of type `A`.
pub enum Eff<R: EffectRow, A: 'static> {
    /// A finished computation.
    Pure(A),
    /// A computation waiting for a reply to one pending request.
    Impure(R::Union<Eff<R, A>>),
}

impl<R: EffectRow, A: 'static> Eff<R, A> {
    /// Creates a finished computation.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Pure(value)
    }

    /// Returns `true` if the computation has finished.
    #[inline]
    pub const fn is_pure(&self) -> bool {
        matches!(self, Self::Pure(_))
    }

    /// Suspends on an operation of effect `E`; the result is the reply.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corelude::EffectRow;
    /// use corelude::effect::{Ask, Eff, ReaderEffect};
    ///
    /// let computation: Eff<EffectRow![ReaderEffect<i32>], i32> = Eff::send::<ReaderEffect<i32>, _>(Ask);
    /// assert!(!computation.is_pure());
    /// ```
    pub fn send<E, I>(operation: E::Operation) -> Self
    where
        E: Effect<Reply = A>,
        R: Member<E, I>,
    {
        Self::Impure(<R as Member<E, I>>::inject(Request::new(operation, Self::Pure)))
    }

    /// Sequences a computation that depends on this one's result.
    ///
    /// On a suspended computation the binding is composed after the pending
    /// continuation.
    pub fn flat_map<B, F>(self, function: F) -> Eff<R, B>
    where
        B: 'static,
        F: FnOnce(A) -> Eff<R, B> + 'static,
    {
        match self {
            Self::Pure(value) => function(value),
            Self::Impure(union) => Eff::Impure(R::map_union(union, move |next: Self| {
                next.flat_map(function)
            })),
        }
    }

    /// Alias for [`flat_map`](Eff::flat_map).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Eff<R, B>
    where
        B: 'static,
        F: FnOnce(A) -> Eff<R, B> + 'static,
    {
        self.flat_map(function)
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> Eff<R, B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.flat_map(move |value| Eff::Pure(function(value)))
    }

    /// Runs `next` after this computation, discarding this result.
    pub fn then<B: 'static>(self, next: Eff<R, B>) -> Eff<R, B> {
        self.flat_map(move |_| next)
    }

    /// Runs both computations in order and combines their results.
    pub fn map2<B, C, F>(self, other: Eff<R, B>, function: F) -> Eff<R, C>
    where
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.flat_map(move |left| other.fmap(move |right| function(left, right)))
    }

    /// Name of the effect this computation is suspended on, if any.
    pub fn pending_effect(&self) -> Option<&'static str> {
        match self {
            Self::Pure(_) => None,
            Self::Impure(union) => Some(R::operation_name(union)),
        }
    }

    /// Extracts the result of a finished computation.
    ///
    /// # Errors
    ///
    /// Returns [`EffectError::Unhandled`] naming the pending effect when the
    /// computation is still suspended.
    pub fn into_pure(self) -> Result<A, EffectError> {
        match self {
            Self::Pure(value) => Ok(value),
            Self::Impure(union) => Err(EffectError::Unhandled {
                effect: R::operation_name(&union),
            }),
        }
    }
}

impl<A: 'static> Eff<EffNil, A> {
    /// Extracts the result of a computation with no effects left.
    ///
    /// The empty row has no requests, so this cannot fail.
    pub fn run(self) -> A {
        match self {
            Self::Pure(value) => value,
            Self::Impure(union) => match union {},
        }
    }
}

impl<R: EffectRow, A: fmt::Debug + 'static> fmt::Debug for Eff<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(value) => formatter.debug_tuple("Pure").field(value).finish(),
            Self::Impure(union) => formatter
                .debug_tuple("Impure")
                .field(&R::operation_name(union))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Here;
    use rstest::rstest;

    struct Input;

    impl Effect for Input {
        const NAME: &'static str = "Input";
        type Operation = ();
        type Reply = i32;
    }

    type Row = crate::EffectRow![Input];

    fn read() -> Eff<Row, i32> {
        Eff::send::<Input, Here>(())
    }

    /// Answers every `Input` request with `reply`.
    fn feed(reply: i32, computation: Eff<Row, i32>) -> i32 {
        let mut current = computation;
        loop {
            match current {
                Eff::Pure(value) => return value,
                Eff::Impure(union) => match <Row as Member<Input, Here>>::project(union) {
                    Ok(request) => current = request.resume(reply),
                    Err(never) => match never {},
                },
            }
        }
    }

    #[rstest]
    fn pure_runs_to_value() {
        assert_eq!(Eff::<EffNil, _>::pure("done").run(), "done");
    }

    #[rstest]
    fn send_suspends() {
        let computation = read();
        assert!(!computation.is_pure());
        assert_eq!(computation.pending_effect(), Some("Input"));
    }

    #[rstest]
    fn flat_map_composes_after_pending_request() {
        let computation = read().flat_map(|x| read().fmap(move |y| x * 10 + y));
        assert_eq!(feed(3, computation), 33);
    }

    #[rstest]
    fn map2_combines_in_order() {
        let computation = read().map2(Eff::pure(5), |x, y| x - y);
        assert_eq!(feed(8, computation), 3);
    }

    #[rstest]
    fn then_discards_first_result() {
        let computation = read().then(Eff::pure(1));
        assert_eq!(feed(100, computation), 1);
    }

    #[rstest]
    fn into_pure_reports_unhandled_effect() {
        assert_eq!(
            read().into_pure(),
            Err(EffectError::Unhandled { effect: "Input" })
        );
        assert_eq!(Eff::<Row, i32>::pure(4).into_pure(), Ok(4));
    }

    #[rstest]
    fn debug_shows_state() {
        assert_eq!(format!("{:?}", Eff::<Row, i32>::pure(1)), "Pure(1)");
        assert_eq!(format!("{:?}", read()), "Impure(\"Input\")");
    }
}
