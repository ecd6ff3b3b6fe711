//! Reader effect: an implicit, read-only environment.
//!
//! # Operations
//!
//! - [`ask`]: the whole environment
//! - [`asks`]: a projection of the environment
//! - [`local`]: runs a computation under a modified environment, leaving
//!   Reader in the row
//! - [`run_reader`]: supplies the environment and removes Reader from the
//!   row
//!
//! Each operation is generic over the row `R` and the index `I` of the
//! Reader effect inside it, so Reader composes with any other effects.
//!
//! # Examples
//!
//! ```rust
//! use corelude::EffectRow;
//! use corelude::effect::{Eff, ReaderEffect, ask, asks, local, run_reader};
//!
//! type Row = EffectRow![ReaderEffect<i32>];
//!
//! let computation: Eff<Row, (i32, i32)> =
//!     local(|environment: i32| environment + 1, asks(|environment: i32| environment))
//!         .flat_map(|inner| ask().fmap(move |outer: i32| (inner, outer)));
//!
//! assert_eq!(run_reader(5, computation).run(), (6, 5));
//! ```

use std::marker::PhantomData;

use super::eff::Eff;
use super::handler::Handler;
use super::member::Member;
use super::request::Effect;
use super::row::EffectRow;

/// The Reader effect over an environment of type `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReaderEffect<S>(PhantomData<S>);

/// The single Reader operation: request the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ask;

impl<S: 'static> Effect for ReaderEffect<S> {
    const NAME: &'static str = "Reader";
    type Operation = Ask;
    type Reply = S;
}

/// Retrieves the environment.
pub fn ask<S, R, I>() -> Eff<R, S>
where
    S: 'static,
    R: Member<ReaderEffect<S>, I>,
{
    Eff::send::<ReaderEffect<S>, I>(Ask)
}

/// Retrieves the environment and applies `projection` to it.
///
/// # Examples
///
/// ```rust
/// use corelude::EffectRow;
/// use corelude::effect::{Eff, ReaderEffect, asks, run_reader};
///
/// let computation: Eff<EffectRow![ReaderEffect<String>], usize> = asks(|text: String| text.len());
/// assert_eq!(run_reader("hello".to_string(), computation).run(), 5);
/// ```
pub fn asks<S, R, I, A, F>(projection: F) -> Eff<R, A>
where
    S: 'static,
    R: Member<ReaderEffect<S>, I>,
    A: 'static,
    F: FnOnce(S) -> A + 'static,
{
    ask::<S, R, I>().fmap(projection)
}

/// Runs `computation` with the environment replaced by `modify(environment)`.
///
/// The modified environment is computed once, by an `asks(modify)` issued
/// before `computation` starts, and then answers every `Ask` of
/// `computation`, including the ones only reached after earlier requests
/// were resumed. Requests of other effects are passed through with their
/// continuations still under `local`. Reader stays in the row: the outer
/// environment must still be supplied by an enclosing handler.
///
/// # Examples
///
/// ```rust
/// use corelude::EffectRow;
/// use corelude::effect::{Eff, ReaderEffect, asks, local, run_reader};
///
/// let computation: Eff<EffectRow![ReaderEffect<i32>], i32> =
///     local(|environment: i32| environment * 10, asks(|environment: i32| environment + 1));
/// assert_eq!(run_reader(4, computation).run(), 41);
/// ```
pub fn local<S, R, I, A, F>(modify: F, computation: Eff<R, A>) -> Eff<R, A>
where
    S: Clone + 'static,
    R: Member<ReaderEffect<S>, I>,
    A: 'static,
    F: FnOnce(S) -> S + 'static,
{
    asks::<S, R, I, S, F>(modify).flat_map(move |environment| {
        respond::<S, R, I, A>(environment, computation)
    })
}

/// Answers the `Ask` requests of `computation` with `environment`, keeping
/// Reader in the row.
fn respond<S, R, I, A>(environment: S, computation: Eff<R, A>) -> Eff<R, A>
where
    S: Clone + 'static,
    R: Member<ReaderEffect<S>, I>,
    A: 'static,
{
    let mut current = computation;
    loop {
        match current {
            Eff::Pure(value) => return Eff::Pure(value),
            Eff::Impure(union) => match R::project(union) {
                Ok(request) => {
                    tracing::trace!(scope = "local", "answering Ask");
                    current = request.resume(environment.clone());
                }
                Err(rest) => {
                    tracing::trace!(
                        effect = <R::Remainder as EffectRow>::operation_name(&rest),
                        scope = "local",
                        "forwarding request"
                    );
                    let resumed =
                        <R::Remainder as EffectRow>::map_union(rest, move |next: Eff<R, A>| {
                            respond::<S, R, I, A>(environment, next)
                        });
                    return Eff::Impure(R::reinject(resumed));
                }
            },
        }
    }
}

/// Supplies `environment` to every `Ask` of `computation` and removes
/// Reader from its row.
///
/// Requests of other effects stay pending in the returned computation;
/// once resumed, the rest of the computation is handled the same way.
///
/// # Examples
///
/// ```rust
/// use corelude::EffectRow;
/// use corelude::effect::{Eff, ReaderEffect, asks, run_reader};
///
/// let computation: Eff<EffectRow![ReaderEffect<i32>], i32> = asks(|environment: i32| environment * 2);
/// assert_eq!(run_reader(5, computation).run(), 10);
/// ```
pub fn run_reader<S, R, I, A>(environment: S, computation: Eff<R, A>) -> Eff<R::Remainder, A>
where
    S: Clone + 'static,
    R: Member<ReaderEffect<S>, I>,
    A: 'static,
{
    let mut current = computation;
    loop {
        match current {
            Eff::Pure(value) => return Eff::Pure(value),
            Eff::Impure(union) => match R::project(union) {
                Ok(request) => {
                    tracing::trace!(scope = "run_reader", "answering Ask");
                    current = request.resume(environment.clone());
                }
                Err(rest) => {
                    tracing::trace!(
                        effect = <R::Remainder as EffectRow>::operation_name(&rest),
                        scope = "run_reader",
                        "forwarding request"
                    );
                    return Eff::Impure(<R::Remainder as EffectRow>::map_union(
                        rest,
                        move |next: Eff<R, A>| run_reader::<S, R, I, A>(environment, next),
                    ));
                }
            },
        }
    }
}

/// Handler that discharges [`ReaderEffect<S>`] by supplying a fixed
/// environment.
///
/// # Examples
///
/// ```rust
/// use corelude::EffectRow;
/// use corelude::effect::{Eff, Handler, ReaderEffect, ReaderHandler, asks};
///
/// let computation: Eff<EffectRow![ReaderEffect<i32>], i32> = asks(|x: i32| x + 1);
/// assert_eq!(ReaderHandler::new(41).run(computation), 42);
/// ```
#[derive(Debug, Clone)]
pub struct ReaderHandler<S> {
    environment: S,
}

impl<S> ReaderHandler<S> {
    /// Creates a handler supplying `environment`.
    pub const fn new(environment: S) -> Self {
        Self { environment }
    }

    /// The environment this handler supplies.
    pub const fn environment(&self) -> &S {
        &self.environment
    }
}

impl<S: Clone + 'static> Handler<ReaderEffect<S>> for ReaderHandler<S> {
    fn handle<R, I, A>(self, computation: Eff<R, A>) -> Eff<R::Remainder, A>
    where
        R: Member<ReaderEffect<S>, I>,
        A: 'static,
    {
        run_reader::<S, R, I, A>(self.environment, computation)
    }
}
