//! Iterable operations across tuples, lists and strings.

use rstest::rstest;
use tagfold::prelude::*;

// =============================================================================
// head / tail / is_empty
// =============================================================================

#[rstest]
fn head_and_tail_walk_every_iterable() {
    assert_eq!(head(tuple!['a', 2, 3.0]), 'a');
    assert_eq!(tail(tuple!['a', 2, 3.0]), tuple![2, 3.0]);

    assert_eq!(head(list![7, 8]), 7);
    assert_eq!(tail(list![7, 8]), list![8]);

    assert_eq!(head(string!("xyz")), 'x');
    assert_eq!(tail(string!("xyz")), string!("yz"));
}

#[rstest]
fn tail_of_a_singleton_is_empty() {
    assert!(is_empty(&tail(tuple![1])));
    assert!(is_empty(&tail(list![1])));
    assert!(is_empty(&tail(string!("1"))));
}

#[rstest]
fn strings_step_by_character() {
    let text = string!("né");
    assert_eq!(length(&text), 2);
    assert_eq!(head(tail(text)), 'é');
    assert_eq!(last(text), 'é');
}

#[rstest]
#[should_panic(expected = "head: precondition violated: empty structure")]
fn head_of_an_empty_list_panics() {
    let _ = head(List::<u8>::new());
}

#[rstest]
#[should_panic(expected = "tail: precondition violated: empty structure")]
fn tail_of_an_empty_string_panics() {
    let _ = tail(string!(""));
}

// =============================================================================
// Indexing
// =============================================================================

#[rstest]
#[case(0, 'h')]
#[case(1, 'e')]
#[case(4, 'o')]
fn at_indexes_strings_by_character(#[case] index: usize, #[case] expected: char) {
    assert_eq!(at(index, string!("hello")), expected);
}

#[rstest]
fn at_c_reads_heterogeneous_positions() {
    let xs = tuple![1_u8, "two", 3.5_f32];
    assert_eq!(at_c::<0, _>(xs), 1);
    assert_eq!(at_c::<1, _>(xs), "two");
    assert_eq!(at_c::<2, _>(xs), 3.5);
    assert_eq!(at_c::<1, _>(list!['p', 'q']), 'q');
}

#[rstest]
#[should_panic(expected = "at: precondition violated: index out of bounds")]
fn at_past_the_end_of_a_tuple_panics() {
    let _: i32 = at(2, tuple![1, 2]);
}

#[rstest]
fn last_is_at_length_minus_one() {
    let xs = list![4, 5, 6, 7];
    assert_eq!(last(xs.clone()), at(length(&xs) - 1, xs));
}

// =============================================================================
// Dropping
// =============================================================================

#[rstest]
#[case(0, "abc")]
#[case(1, "bc")]
#[case(3, "")]
#[case(9, "")]
fn drop_on_strings_stays_a_string(#[case] count: usize, #[case] expected: &'static str) {
    assert_eq!(iterable::drop(count, string!("abc")), Str::new(expected));
}

#[rstest]
fn glob_importing_the_prelude_keeps_std_drop() {
    let xs = list![1, 2, 3];
    let rest = xs.tail();
    drop(xs);
    assert_eq!(rest, list![2, 3]);
    assert_eq!(iterable::drop(1, rest), list![3]);
}

#[rstest]
fn drop_while_on_tuples_yields_a_list() {
    let positive = |x: &i32| *x > 0;
    assert_eq!(drop_while(tuple![3, 1, -2, 5], positive), list![-2, 5]);
    assert_eq!(drop_while(tuple![3, 1], positive), list![]);
    assert_eq!(drop_while::<_, i32, _>(tuple![], positive), list![]);
}

#[rstest]
fn drop_until_stops_at_the_first_match() {
    let is_space = |c: &char| *c == ' ';
    assert_eq!(drop_until(string!("key value"), is_space), string!(" value"));
    assert_eq!(drop_until(list![1, 2, 3], |x: &i32| *x == 9), list![]);
}
