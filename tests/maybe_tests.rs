//! Maybe as a value and as a data type.

use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use tagfold::prelude::*;

assert_impl_all!(Just<String>: FromJust, Maybe, Tagged);
assert_not_impl_any!(Nothing: FromJust);

// =============================================================================
// Values
// =============================================================================

#[rstest]
fn presence_is_known_from_the_type() {
    const PRESENT: bool = is_just(&Just(1));
    const ABSENT: bool = is_nothing(&Nothing);
    assert!(PRESENT);
    assert!(ABSENT);
}

#[rstest]
fn maybe_may_return_a_different_type_per_case() {
    let described: String = maybe(0, |x: i32| format!("#{x}"), just(5));
    let defaulted: i32 = maybe(0, |x: i32| format!("#{x}"), nothing());
    assert_eq!(described, "#5");
    assert_eq!(defaulted, 0);
}

#[rstest]
fn from_maybe_falls_back_to_the_default() {
    assert_eq!(from_maybe('d', just('j')), 'j');
    assert_eq!(from_maybe('d', nothing()), 'd');
    assert_eq!(from_just(just(vec![1, 2])), vec![1, 2]);
}

#[rstest]
fn nothing_orders_before_any_just() {
    assert!(nothing() < just(i64::MIN));
    assert!(just(i64::MIN) > nothing());
    assert!(just(1) < just(2));
    assert!(just(1) != nothing());
    assert_eq!(just(1), just(1));
}

#[rstest]
fn comparison_functions_accept_maybes() {
    assert!(equal(&just(3), &just(3)));
    assert!(not_equal(&just(3), &nothing()));
    assert!(less(&nothing(), &just(0)));
    assert!(greater_equal(&just(1), &just(1)));
}

// =============================================================================
// Data type
// =============================================================================

#[rstest]
fn maybe_folds_through_unpack() {
    assert!(!models::<Iterable, MaybeTag>());
    assert!(models::<Foldable, MaybeTag>());

    assert_eq!(foldl(just(2), 10, |s: i32, x: i32| s - x), 8);
    assert_eq!(foldr(just(2), 10, |x: i32, s: i32| x - s), -8);
    assert_eq!(foldl(nothing(), 10, |s: i32, x: i32| s - x), 10);
    assert_eq!(length(&just("x")), 1);
    assert_eq!(length(&nothing()), 0);
}

#[rstest]
fn seedless_folds_return_the_value() {
    assert_eq!(foldl1(just('k'), |a: char, _: char| a), 'k');
    assert_eq!(foldr1(just('k'), |_: char, b: char| b), 'k');
    assert_eq!(maximum(just(4)), 4);
}

#[rstest]
fn transform_maps_the_value_if_present() {
    assert_eq!(transform(just(20), |x: i32| x + 1), just(21));
    assert_eq!(transform(nothing(), |x: i32| x + 1), nothing());
}

#[rstest]
fn maybe_converts_to_a_tuple_of_zero_or_one_element() {
    assert_eq!(to::<TupleTag, _>(just("only")), tuple!["only"]);
    assert_eq!(to::<TupleTag, _>(nothing()), tuple![]);
    assert_eq!(to::<ListTag, _>(just(1)), list![1]);
}
