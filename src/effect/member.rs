//! Membership proofs: where an effect sits in a row.
//!
//! `R: Member<E, I>` states that row `R` contains effect `E` at position `I`,
//! written with [`Here`] and [`There`]. The index is inferred by the
//! compiler, so callers write `R: Member<E, I>` with a free `I` and never
//! spell it out.
//!
//! A membership proof moves requests between the full row and the row with
//! `E` removed (`Remainder`):
//!
//! - `inject`: an `E` request into the full row's union
//! - `project`: the full union into either an `E` request or a remainder
//!   union
//! - `reinject`: a remainder union back into the full row's union
//!
//! # Examples
//!
//! ```rust
//! use corelude::EffectRow;
//! use corelude::effect::{Here, Member, ReaderEffect, There};
//!
//! type Row = EffectRow![ReaderEffect<i32>, ReaderEffect<bool>];
//!
//! fn has_int<R, I>() where R: Member<ReaderEffect<i32>, I> {}
//! fn has_bool<R, I>() where R: Member<ReaderEffect<bool>, I> {}
//!
//! has_int::<Row, Here>();
//! has_bool::<Row, There<Here>>();
//! ```

use std::marker::PhantomData;

use super::request::{Effect, Request};
use super::row::{EffCons, EffectRow, OpenUnion};

/// Index of the first effect of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Here;

/// Index `I` within the tail of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct There<I>(PhantomData<I>);

/// Proof that a row contains effect `E` at position `Index`.
pub trait Member<E: Effect, Index>: EffectRow {
    /// The row without `E`.
    type Remainder: EffectRow;

    /// Lifts a request of `E` into the row's union.
    fn inject<K: 'static>(request: Request<E, K>) -> Self::Union<K>;

    /// Extracts an `E` request, or hands back the request of another effect
    /// as a union of the remainder row.
    fn project<K: 'static>(
        union: Self::Union<K>,
    ) -> Result<Request<E, K>, <Self::Remainder as EffectRow>::Union<K>>;

    /// Puts a request of the remainder row back into the full row.
    fn reinject<K: 'static>(union: <Self::Remainder as EffectRow>::Union<K>) -> Self::Union<K>;
}

impl<E: Effect, Tail: EffectRow> Member<E, Here> for EffCons<E, Tail> {
    type Remainder = Tail;

    #[inline]
    fn inject<K: 'static>(request: Request<E, K>) -> Self::Union<K> {
        OpenUnion::Head(request)
    }

    #[inline]
    fn project<K: 'static>(union: Self::Union<K>) -> Result<Request<E, K>, Tail::Union<K>> {
        match union {
            OpenUnion::Head(request) => Ok(request),
            OpenUnion::Rest(rest) => Err(rest),
        }
    }

    #[inline]
    fn reinject<K: 'static>(union: Tail::Union<K>) -> Self::Union<K> {
        OpenUnion::Rest(union)
    }
}

impl<E, Other, Tail, I> Member<E, There<I>> for EffCons<Other, Tail>
where
    E: Effect,
    Other: Effect,
    Tail: Member<E, I>,
{
    type Remainder = EffCons<Other, Tail::Remainder>;

    #[inline]
    fn inject<K: 'static>(request: Request<E, K>) -> Self::Union<K> {
        OpenUnion::Rest(Tail::inject(request))
    }

    fn project<K: 'static>(
        union: Self::Union<K>,
    ) -> Result<Request<E, K>, <Self::Remainder as EffectRow>::Union<K>> {
        match union {
            OpenUnion::Head(other) => Err(OpenUnion::Head(other)),
            OpenUnion::Rest(rest) => Tail::project(rest).map_err(OpenUnion::Rest),
        }
    }

    fn reinject<K: 'static>(union: <Self::Remainder as EffectRow>::Union<K>) -> Self::Union<K> {
        match union {
            OpenUnion::Head(other) => OpenUnion::Head(other),
            OpenUnion::Rest(rest) => OpenUnion::Rest(Tail::reinject(rest)),
        }
    }
}
