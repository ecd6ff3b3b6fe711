//! Effect rows: type-level lists of effects.
//!
//! A row is built from [`EffNil`] and [`EffCons`], usually through the
//! [`EffectRow!`](crate::EffectRow) macro. Every row knows the type of a
//! single pending request drawn from any of its effects, its [`Union`]:
//! an [`OpenUnion`] with one arm per effect, terminated by the uninhabited
//! [`Void`].
//!
//! [`Union`]: EffectRow::Union
//!
//! # Examples
//!
//! ```rust
//! use corelude::EffectRow;
//! use corelude::effect::{EffCons, EffNil, ReaderEffect};
//!
//! type Row = EffectRow![ReaderEffect<i32>, ReaderEffect<String>];
//! type Manual = EffCons<ReaderEffect<i32>, EffCons<ReaderEffect<String>, EffNil>>;
//!
//! fn same<T>(_: std::marker::PhantomData<T>, _: std::marker::PhantomData<T>) {}
//! same(std::marker::PhantomData::<Row>, std::marker::PhantomData::<Manual>);
//! ```

use std::marker::PhantomData;

use super::request::{Effect, Request};

/// A type with no values; the union of the empty row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Void {}

/// One pending request: either from the head effect or from the rest of
/// the row.
#[derive(Debug)]
pub enum OpenUnion<H, T> {
    /// A request of the row's first effect.
    Head(H),
    /// A request of one of the remaining effects.
    Rest(T),
}

/// A type-level list of effects.
pub trait EffectRow: 'static {
    /// A single request from any effect of the row whose continuation
    /// produces `K`.
    type Union<K: 'static>: 'static;

    /// Composes `function` after the continuation of the pending request.
    fn map_union<K, K2, F>(union: Self::Union<K>, function: F) -> Self::Union<K2>
    where
        K: 'static,
        K2: 'static,
        F: FnOnce(K) -> K2 + 'static;

    /// Name of the effect the pending request belongs to.
    fn operation_name<K: 'static>(union: &Self::Union<K>) -> &'static str;
}

/// The empty effect row. Computations over it can never suspend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct EffNil;

impl EffectRow for EffNil {
    type Union<K: 'static> = Void;

    fn map_union<K, K2, F>(union: Void, _function: F) -> Void
    where
        K: 'static,
        K2: 'static,
        F: FnOnce(K) -> K2 + 'static,
    {
        match union {}
    }

    fn operation_name<K: 'static>(union: &Void) -> &'static str {
        match *union {}
    }
}

/// The row with effect `E` in front of `Tail`.
pub struct EffCons<E, Tail>(PhantomData<(E, Tail)>);

impl<E, Tail> EffCons<E, Tail> {
    /// Creates the (zero-sized) row value.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E, Tail> Default for EffCons<E, Tail> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Effect, Tail: EffectRow> EffectRow for EffCons<E, Tail> {
    type Union<K: 'static> = OpenUnion<Request<E, K>, Tail::Union<K>>;

    fn map_union<K, K2, F>(union: Self::Union<K>, function: F) -> Self::Union<K2>
    where
        K: 'static,
        K2: 'static,
        F: FnOnce(K) -> K2 + 'static,
    {
        match union {
            OpenUnion::Head(request) => OpenUnion::Head(request.map(function)),
            OpenUnion::Rest(rest) => OpenUnion::Rest(Tail::map_union(rest, function)),
        }
    }

    fn operation_name<K: 'static>(union: &Self::Union<K>) -> &'static str {
        match union {
            OpenUnion::Head(_) => E::NAME,
            OpenUnion::Rest(rest) => Tail::operation_name(rest),
        }
    }
}

/// Constructs an effect row from a list of effect types.
///
/// - `EffectRow![]` is `EffNil`
/// - `EffectRow![E1, E2, ...]` is `EffCons<E1, EffCons<E2, ... EffNil>>`
///
/// # Examples
///
/// ```rust
/// use corelude::EffectRow;
/// use corelude::effect::{EffectRow as Row, ReaderEffect};
///
/// type Empty = EffectRow![];
/// type Two = EffectRow![ReaderEffect<i32>, ReaderEffect<bool>,];
///
/// fn assert_row<T: Row>() {}
/// assert_row::<Empty>();
/// assert_row::<Two>();
/// ```
#[macro_export]
macro_rules! EffectRow {
    () => { $crate::effect::EffNil };
    ($effect:ty $(,)?) => {
        $crate::effect::EffCons<$effect, $crate::effect::EffNil>
    };
    ($effect:ty, $($rest:ty),+ $(,)?) => {
        $crate::effect::EffCons<$effect, $crate::EffectRow!($($rest),+)>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Tick;

    impl Effect for Tick {
        const NAME: &'static str = "Tick";
        type Operation = ();
        type Reply = u32;
    }

    struct Tock;

    impl Effect for Tock {
        const NAME: &'static str = "Tock";
        type Operation = ();
        type Reply = ();
    }

    type Row = crate::EffectRow![Tick, Tock];

    #[rstest]
    fn operation_name_finds_active_arm() {
        let head: <Row as EffectRow>::Union<u32> = OpenUnion::Head(Request::new((), |n| n));
        let rest: <Row as EffectRow>::Union<u32> =
            OpenUnion::Rest(OpenUnion::Head(Request::new((), |()| 0)));
        assert_eq!(Row::operation_name(&head), "Tick");
        assert_eq!(Row::operation_name(&rest), "Tock");
    }

    #[rstest]
    fn map_union_composes_after_continuation() {
        let union: <Row as EffectRow>::Union<u32> = OpenUnion::Head(Request::new((), |n| n + 1));
        let mapped = Row::map_union(union, |value: u32| value * 10);
        match mapped {
            OpenUnion::Head(request) => assert_eq!(request.resume(4), 50),
            OpenUnion::Rest(_) => panic!("expected the head arm"),
        }
    }
}
