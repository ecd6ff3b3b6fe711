#![cfg(all(feature = "typeclass", feature = "persistent"))]
//! Property-based tests for Alternative type class laws.
//!
//! ## Monoid Laws
//!
//! 1. **Left Identity**: `empty.alt(x) == x`
//! 2. **Right Identity**: `x.alt(empty) == x`
//! 3. **Associativity**: `(x.alt(y)).alt(z) == x.alt(y.alt(z))`
//!
//! ## Interaction with Applicative
//!
//! 4. **Left Absorption**: `empty.apply(x) == empty`
//! 5. **Left Distributivity**: `(fa.alt(fb)).fmap(f) == fa.fmap(f).alt(fb.fmap(f))`
//!
//! ## Repetition
//!
//! `many` and `some` terminate only when the repeated value fails, so they
//! are checked on failing values.

use corelude::persistent::PersistentList;
use corelude::typeclass::{Alternative, Applicative, Functor, many, some};
use proptest::prelude::*;
use rstest::rstest;

fn small_list() -> impl Strategy<Value = PersistentList<i32>> {
    prop::collection::vec(any::<i32>(), 0..10).prop_map(PersistentList::from)
}

proptest! {
    // =========================================================================
    // Option
    // =========================================================================

    #[test]
    fn prop_option_left_identity(value in any::<Option<i32>>()) {
        let empty: Option<i32> = <Option<()>>::empty();
        prop_assert_eq!(empty.alt(value), value);
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        let empty: Option<i32> = <Option<()>>::empty();
        prop_assert_eq!(value.alt(empty), value);
    }

    #[test]
    fn prop_option_associativity(
        x in any::<Option<i32>>(),
        y in any::<Option<i32>>(),
        z in any::<Option<i32>>()
    ) {
        prop_assert_eq!(x.alt(y).alt(z), x.alt(y.alt(z)));
    }

    #[test]
    fn prop_option_left_absorption(value in any::<Option<i32>>()) {
        let empty: Option<fn(i32) -> i32> = <Option<()>>::empty();
        let result: Option<i32> = empty.apply(value);
        prop_assert_eq!(result, None);
    }

    // =========================================================================
    // PersistentList
    // =========================================================================

    #[test]
    fn prop_list_left_identity(list in small_list()) {
        let empty: PersistentList<i32> = <PersistentList<()>>::empty();
        prop_assert_eq!(empty.alt(list.clone()), list);
    }

    #[test]
    fn prop_list_right_identity(list in small_list()) {
        let empty: PersistentList<i32> = <PersistentList<()>>::empty();
        prop_assert_eq!(list.clone().alt(empty), list);
    }

    #[test]
    fn prop_list_associativity(x in small_list(), y in small_list(), z in small_list()) {
        let left = x.clone().alt(y.clone()).alt(z.clone());
        let right = x.alt(y.alt(z));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_list_left_absorption(list in small_list()) {
        let empty: PersistentList<fn(i32) -> i32> = <PersistentList<()>>::empty();
        prop_assert!(empty.apply(list).is_empty());
    }

    #[test]
    fn prop_list_left_distributivity(x in small_list(), y in small_list()) {
        let function = |value: i32| value.wrapping_mul(7);
        let left = x.clone().alt(y.clone()).fmap(function);
        let right = x.fmap(function).alt(y.fmap(function));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Repetition on failing values
// =============================================================================

#[rstest]
fn many_of_none_is_some_empty() {
    assert_eq!(many(None::<i32>), Some(PersistentList::new()));
}

#[rstest]
fn some_of_none_is_none() {
    assert_eq!(some(None::<i32>), None);
}

#[rstest]
fn many_of_empty_list_is_single_empty_result() {
    let empty: PersistentList<i32> = PersistentList::new();
    assert_eq!(many(empty), PersistentList::singleton(PersistentList::new()));
}

#[rstest]
fn some_of_empty_list_has_no_results() {
    let empty: PersistentList<i32> = PersistentList::new();
    assert!(some(empty).is_empty());
}

#[rstest]
fn guard_filters_with_option() {
    assert_eq!(<Option<()>>::guard(true), Some(()));
    assert_eq!(<Option<()>>::guard(false), None);
}

#[rstest]
fn optional_on_option_never_fails() {
    assert_eq!(Some(3).optional(), Some(Some(3)));
    assert_eq!(None::<i32>.optional(), Some(None));
}
