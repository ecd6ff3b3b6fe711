//! Effect declarations and suspended requests.
//!
//! An [`Effect`] names a capability and fixes the shape of its operations:
//! what a computation sends (`Operation`) and what it gets back when a
//! handler answers (`Reply`). A [`Request`] is one such operation together
//! with the continuation that consumes the reply.
//!
//! # Examples
//!
//! ```rust
//! use corelude::effect::{Effect, Request};
//!
//! struct LogEffect;
//!
//! impl Effect for LogEffect {
//!     const NAME: &'static str = "Log";
//!     type Operation = String;
//!     type Reply = ();
//! }
//!
//! let request: Request<LogEffect, usize> =
//!     Request::new("hello".to_string(), |()| 1);
//! assert_eq!(request.operation(), "hello");
//! assert_eq!(request.resume(()), 1);
//! ```

use std::fmt;

/// A trait for defining effects.
///
/// Each effect has a single operation type and a single reply type. Effects
/// with several operations use an enum for `Operation`.
pub trait Effect: 'static {
    /// The name of this effect, used in diagnostics and error messages.
    const NAME: &'static str;

    /// What a computation sends to the handler.
    type Operation: 'static;

    /// What the handler sends back.
    type Reply: 'static;
}

/// An operation of effect `E` suspended until a handler supplies the reply.
///
/// `K` is whatever the continuation produces once resumed; for an `Eff`
/// computation it is the rest of that computation.
pub struct Request<E: Effect, K> {
    operation: E::Operation,
    resume: Box<dyn FnOnce(E::Reply) -> K>,
}

impl<E: Effect, K: 'static> Request<E, K> {
    /// Creates a request from an operation and its continuation.
    pub fn new<F>(operation: E::Operation, resume: F) -> Self
    where
        F: FnOnce(E::Reply) -> K + 'static,
    {
        Self {
            operation,
            resume: Box::new(resume),
        }
    }

    /// The operation being requested.
    #[must_use]
    pub const fn operation(&self) -> &E::Operation {
        &self.operation
    }

    /// Answers the request and runs the continuation.
    pub fn resume(self, reply: E::Reply) -> K {
        (self.resume)(reply)
    }

    /// Composes `function` after the continuation, keeping the operation.
    pub fn map<K2, F>(self, function: F) -> Request<E, K2>
    where
        K2: 'static,
        F: FnOnce(K) -> K2 + 'static,
    {
        let resume = self.resume;
        Request {
            operation: self.operation,
            resume: Box::new(move |reply| function(resume(reply))),
        }
    }
}

impl<E: Effect, K> fmt::Debug for Request<E, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Request")
            .field("effect", &E::NAME)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Counter;

    impl Effect for Counter {
        const NAME: &'static str = "Counter";
        type Operation = i32;
        type Reply = i32;
    }

    #[rstest]
    fn resume_feeds_reply_to_continuation() {
        let request: Request<Counter, i32> = Request::new(1, |reply| reply * 2);
        assert_eq!(*request.operation(), 1);
        assert_eq!(request.resume(21), 42);
    }

    #[rstest]
    fn map_runs_after_continuation() {
        let request: Request<Counter, i32> = Request::new(0, |reply| reply + 1);
        let mapped = request.map(|value| value.to_string());
        assert_eq!(mapped.resume(9), "10");
    }

    #[rstest]
    fn debug_names_effect() {
        let request: Request<Counter, ()> = Request::new(0, |_| ());
        assert_eq!(format!("{request:?}"), "Request { effect: \"Counter\", .. }");
    }
}
