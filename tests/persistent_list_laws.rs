//! Property-based tests for PersistentList.
//!
//! These tests verify that PersistentList satisfies the algebraic laws
//! for the type classes it implements, and the properties of `filter` and
//! `sort`.

use corelude::persistent::PersistentList;
use corelude::typeclass::{Foldable, Functor, Monoid, Semigroup};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating PersistentList
// =============================================================================

/// Generates a `PersistentList<i32>` with up to `max_size` elements.
fn persistent_list_strategy(max_size: usize) -> impl Strategy<Value = PersistentList<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(PersistentList::from)
}

/// Generates a small `PersistentList<i32>` for faster tests.
fn small_list() -> impl Strategy<Value = PersistentList<i32>> {
    persistent_list_strategy(20)
}

/// Lists drawn from a narrow value range, so duplicates are common.
fn list_with_duplicates() -> impl Strategy<Value = PersistentList<i8>> {
    prop::collection::vec(-4_i8..4, 0..30).prop_map(PersistentList::from)
}

/// `(key, position)` pairs with few distinct keys; `position` is the index
/// in the input, so the order within each run of equal keys is observable.
fn keyed_list() -> impl Strategy<Value = PersistentList<(u8, usize)>> {
    prop::collection::vec(0_u8..4, 0..30).prop_map(|keys| {
        keys.into_iter()
            .enumerate()
            .map(|(position, key)| (key, position))
            .collect()
    })
}

/// Positions carrying `key`, in list order.
fn positions_of(list: &PersistentList<(u8, usize)>, key: u8) -> Vec<usize> {
    list.iter()
        .filter(|(candidate, _)| *candidate == key)
        .map(|&(_, position)| position)
        .collect()
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_len_matches_iter_count(list in small_list()) {
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_of_preserves_order(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = PersistentList::of(&elements);
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), elements);
    }

    #[test]
    fn prop_cons_puts_element_at_head(list in small_list(), element: i32) {
        let new_list = list.cons(element);
        prop_assert_eq!(new_list.head(), Some(&element));
        prop_assert_eq!(new_list.tail(), list);
    }

    #[test]
    fn prop_reverse_is_involution(list in small_list()) {
        prop_assert_eq!(list.reverse().reverse(), list);
    }

    // =========================================================================
    // Equality and Ordering
    // =========================================================================

    #[test]
    fn prop_ordering_matches_vec(left in small_list(), right in small_list()) {
        let left_vec: Vec<i32> = left.iter().copied().collect();
        let right_vec: Vec<i32> = right.iter().copied().collect();
        prop_assert_eq!(left.cmp(&right), left_vec.cmp(&right_vec));
        prop_assert_eq!(left == right, left_vec == right_vec);
    }

    #[test]
    fn prop_prefix_is_less(list in small_list(), element: i32) {
        let longer = list.append(&PersistentList::singleton(element));
        prop_assert!(list < longer);
    }

    // =========================================================================
    // Semigroup / Monoid Laws
    // =========================================================================

    #[test]
    fn prop_append_associativity(a in small_list(), b in small_list(), c in small_list()) {
        prop_assert_eq!(a.append(&b).append(&c), a.append(&b.append(&c)));
    }

    #[test]
    fn prop_append_identity(list in small_list()) {
        let empty = <PersistentList<i32> as Monoid>::empty();
        prop_assert_eq!(list.append(&empty), list.clone());
        prop_assert_eq!(empty.append(&list), list);
    }

    #[test]
    fn prop_combine_matches_append(a in small_list(), b in small_list()) {
        prop_assert_eq!(a.clone().combine(b.clone()), a.append(&b));
    }

    #[test]
    fn prop_append_length_adds(a in small_list(), b in small_list()) {
        prop_assert_eq!(a.append(&b).len(), a.len() + b.len());
    }

    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_functor_identity(list in small_list()) {
        prop_assert_eq!(list.clone().fmap(|x| x), list);
    }

    #[test]
    fn prop_functor_composition(list in small_list()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(3);
        let composed = list.clone().fmap(move |x| function2(function1(x)));
        prop_assert_eq!(list.fmap(function1).fmap(function2), composed);
    }

    // =========================================================================
    // Foldable
    // =========================================================================

    #[test]
    fn prop_fold_left_sums_in_order(list in small_list()) {
        let expected = list.iter().fold(0_i64, |accumulator, &x| accumulator + i64::from(x));
        prop_assert_eq!(list.fold_left(0_i64, |accumulator, x| accumulator + i64::from(x)), expected);
    }

    #[test]
    fn prop_fold_right_rebuilds_list(list in small_list()) {
        let rebuilt = list.clone().fold_right(PersistentList::new(), |x, accumulator| accumulator.cons(x));
        prop_assert_eq!(rebuilt, list);
    }

    // =========================================================================
    // Filter
    // =========================================================================

    #[test]
    fn prop_filter_keeps_exactly_matching_elements(list in small_list()) {
        let filtered = list.filter(|x| x % 3 == 0);
        let expected: Vec<i32> = list.iter().copied().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(filtered.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_filter_true_is_identity(list in small_list()) {
        prop_assert_eq!(list.filter(|_| true), list);
    }

    #[test]
    fn prop_filter_false_is_empty(list in small_list()) {
        prop_assert!(list.filter(|_| false).is_empty());
    }

    // =========================================================================
    // Sort
    // =========================================================================

    #[test]
    fn prop_sort_is_non_decreasing(list in small_list()) {
        let sorted: Vec<i32> = list.sort().iter().copied().collect();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_sort_is_permutation(list in list_with_duplicates()) {
        let mut expected: Vec<i8> = list.iter().copied().collect();
        expected.sort_unstable();
        prop_assert_eq!(list.sort().iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_sort_is_idempotent(list in list_with_duplicates()) {
        let sorted = list.sort();
        prop_assert_eq!(sorted.sort(), sorted);
    }

    #[test]
    fn prop_sort_by_reverse_comparator_descends(list in small_list()) {
        let sorted: Vec<i32> = list.sort_by(|left, right| right.cmp(left)).iter().copied().collect();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn prop_sort_by_reverses_each_run_of_equal_keys(list in keyed_list()) {
        let sorted = list.sort_by(|left, right| left.0.cmp(&right.0));
        let keys: Vec<u8> = sorted.iter().map(|&(key, _)| key).collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
        for key in 0_u8..4 {
            let mut expected = positions_of(&list, key);
            expected.reverse();
            prop_assert_eq!(positions_of(&sorted, key), expected);
        }
    }
}
