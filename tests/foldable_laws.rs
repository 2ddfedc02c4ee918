//! Property-based tests for Foldable.
//!
//! - **Conversion**: folding a structure equals folding its conversion to a
//!   tuple (static structures) or to a list (runtime structures)
//! - **Aliases**: `fold == foldl`, `fold1 == foldl1`, `length == size`
//! - **Ties**: `minimum` and `maximum` return the first of equal elements

use proptest::prelude::*;
use rstest::rstest;
use tagfold::prelude::*;

/// An element ordered by `key` only, remembering where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Keyed {
    key: u8,
    origin: usize,
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

fn digits(state: i64, element: i64) -> i64 {
    state.wrapping_mul(10).wrapping_add(element)
}

fn digits_right(element: i64, state: i64) -> i64 {
    state.wrapping_mul(10).wrapping_add(element)
}

// =============================================================================
// Conversion laws
// =============================================================================

proptest! {
    /// foldl over a Maybe equals foldl over its tuple conversion
    #[test]
    fn prop_maybe_foldl_matches_tuple_conversion(value in any::<i64>(), state in any::<i64>()) {
        let direct = foldl(just(value), state, digits);
        let converted = foldl(to::<TupleTag, _>(just(value)), state, digits);
        prop_assert_eq!(direct, converted);
    }

    /// foldr over a three-element tuple equals foldr over its list conversion
    #[test]
    fn prop_tuple_foldr_matches_list_conversion(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let direct = foldr(tuple![a, b, c], 7, digits_right);
        let converted = foldr(to::<ListTag, _>(tuple![a, b, c]), 7, digits_right);
        prop_assert_eq!(direct, converted);
    }

    /// foldl over a list visits elements in iteration order
    #[test]
    fn prop_list_foldl_matches_iterator_fold(values in prop::collection::vec(any::<i64>(), 0..40)) {
        let list: List<i64> = values.iter().copied().collect();
        let expected = values.iter().copied().fold(3, digits);
        prop_assert_eq!(foldl(list, 3, digits), expected);
    }

    /// foldr over a list visits elements in reverse iteration order
    #[test]
    fn prop_list_foldr_matches_reversed_fold(values in prop::collection::vec(any::<i64>(), 0..40)) {
        let list: List<i64> = values.iter().copied().collect();
        let expected = values.iter().rev().copied().fold(3, digits);
        prop_assert_eq!(foldr(list, 3, digits_right), expected);
    }

    /// foldl over an array equals foldl over its list conversion
    #[test]
    fn prop_array_foldl_matches_list_conversion(values in any::<[i64; 6]>()) {
        let direct = foldl(values, 0, digits);
        let converted = foldl(to::<ListTag, _>(values), 0, digits);
        prop_assert_eq!(direct, converted);
    }
}

// =============================================================================
// Aliases
// =============================================================================

proptest! {
    /// length and size agree
    #[test]
    fn prop_length_equals_size(values in prop::collection::vec(any::<u16>(), 0..40)) {
        let list: List<u16> = values.into_iter().collect();
        prop_assert_eq!(length(&list), size(&list));
        prop_assert_eq!(length(&list), list.len());
    }

    /// fold is foldl
    #[test]
    fn prop_fold_equals_foldl(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let list: List<i64> = values.into_iter().collect();
        prop_assert_eq!(fold(list.clone(), 1, digits), foldl(list, 1, digits));
    }

    /// fold1 is foldl1
    #[test]
    fn prop_fold1_equals_foldl1(values in prop::collection::vec(any::<i64>(), 1..20)) {
        let list: List<i64> = values.into_iter().collect();
        prop_assert_eq!(fold1(list.clone(), digits), foldl1(list, digits));
    }

    /// reverse_fold flips the arguments of foldr
    #[test]
    fn prop_reverse_fold_equals_foldr(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let list: List<i64> = values.into_iter().collect();
        prop_assert_eq!(reverse_fold(list.clone(), 5, digits), foldr(list, 5, digits_right));
    }

    /// sum over a list equals the iterator sum
    #[test]
    fn prop_sum_matches_iterator_sum(values in prop::collection::vec(-1000_i64..1000, 0..30)) {
        let expected: i64 = values.iter().sum();
        let list: List<i64> = values.into_iter().collect();
        prop_assert_eq!(sum::<i64, _>(list), expected);
    }

    /// minimum and maximum pick the first of equal keys
    #[test]
    fn prop_extrema_prefer_first_occurrence(keys in prop::collection::vec(0_u8..4, 1..20)) {
        let list: List<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(origin, key)| Keyed { key: *key, origin })
            .collect();
        let smallest = keys.iter().copied().min().unwrap_or_default();
        let largest = keys.iter().copied().max().unwrap_or_default();
        let first_smallest = keys.iter().position(|key| *key == smallest).unwrap_or_default();
        let first_largest = keys.iter().position(|key| *key == largest).unwrap_or_default();

        prop_assert_eq!(minimum(list.clone()).origin, first_smallest);
        prop_assert_eq!(maximum(list).origin, first_largest);
    }
}

// =============================================================================
// Empty structures and scenarios
// =============================================================================

#[rstest]
fn identities_of_empty_structures() {
    assert_eq!(sum::<i32, _>(tuple![]), 0);
    assert_eq!(product::<i32, _>(tuple![]), 1);
    assert_eq!(product::<f64, _>(List::<f64>::new()), 1.0);
    assert_eq!(sum::<u8, _>(nothing()), 0);
}

#[rstest]
fn folding_an_empty_structure_never_calls_the_function() {
    let mut calls = 0;
    let result = foldl(List::<i32>::new(), "seed", |state: &'static str, _: i32| {
        calls += 1;
        state
    });
    assert_eq!(result, "seed");
    assert_eq!(calls, 0);
    assert_eq!(foldr(tuple![], 'x', Plus), 'x');
}

#[rstest]
#[should_panic(expected = "foldl1: precondition violated: empty structure")]
fn foldl1_of_an_empty_list_panics() {
    let _ = foldl1(List::<i32>::new(), |a: i32, b: i32| a + b);
}

#[rstest]
#[should_panic(expected = "foldl1: precondition violated: empty structure")]
fn maximum_of_an_empty_array_panics() {
    let _ = maximum([0_u8; 0]);
}

#[rstest]
fn count_if_counts_even_numbers() {
    let is_even = |x: &i32| x % 2 == 0;
    assert_eq!(count_if(tuple![1, 2, 3, 4], is_even), 2);
    assert_eq!(count(list!['a', 'b', 'a'], 'a'), 2);
}

#[rstest]
fn for_each_runs_left_to_right() {
    let mut seen = Vec::new();
    for_each(tuple![1, 2, 3], |x: i32| seen.push(x));
    for_each(list![4, 5], |x: i32| seen.push(x));
    for_each(just(6), |x: i32| seen.push(x));
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn unpack_spreads_every_foldable_kind() {
    assert_eq!(unpack(tuple![1, 2, 3], |a: i32, b: i32, c: i32| a + b + c), 6);
    assert!(unpack(just('q'), |c: char| c.is_alphabetic()));
    assert_eq!(unpack(nothing(), || 0), 0);
    assert_eq!(unpack([2, 5], |a: i32, b: i32| a * b), 10);
}
