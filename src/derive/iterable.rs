//! Operations derived from `head`, `tail` and `is_empty`.
//!
//! These serve runtime-sized data types whose `tail` has the same type as
//! the structure itself (lists, strings). Each function walks the structure
//! from the front; `head` receives a clone of the remaining structure, which
//! is cheap for the persistent and borrowed types this applies to.

use smallvec::SmallVec;

use crate::core::function::{Func1, Func2};
use crate::core::precondition_violation;
use crate::typeclass::{HeadImpl, IsEmptyImpl, TailImpl};

/// The element type of an Iterable data type `Tg` over `Xs`.
pub type ElementOf<Tg, Xs> = <Tg as HeadImpl<Xs>>::Output;

/// Moves the elements of `xs` to a buffer, in order.
fn elements<Tg, Xs>(xs: Xs) -> SmallVec<[ElementOf<Tg, Xs>; 8]>
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
{
    let mut buffer = SmallVec::new();
    let mut rest = xs;
    while !Tg::is_empty(&rest) {
        buffer.push(Tg::head(rest.clone()));
        rest = Tg::tail(rest);
    }
    buffer
}

/// `foldl` by walking from the head.
pub fn foldl<Tg, Xs, S, F>(xs: Xs, state: S, mut f: F) -> S
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
    F: Func2<S, ElementOf<Tg, Xs>, Output = S>,
{
    let mut state = state;
    let mut rest = xs;
    while !Tg::is_empty(&rest) {
        state = f.call2(state, Tg::head(rest.clone()));
        rest = Tg::tail(rest);
    }
    state
}

/// `foldr` by buffering the elements and folding them back to front.
pub fn foldr<Tg, Xs, S, F>(xs: Xs, state: S, mut f: F) -> S
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
    F: Func2<ElementOf<Tg, Xs>, S, Output = S>,
{
    elements::<Tg, Xs>(xs)
        .into_iter()
        .rev()
        .fold(state, |state, element| f.call2(element, state))
}

/// Number of elements.
pub fn length<Tg, Xs>(xs: &Xs) -> usize
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
{
    let mut count = 0;
    let mut rest = xs.clone();
    while !Tg::is_empty(&rest) {
        count += 1;
        rest = Tg::tail(rest);
    }
    count
}

/// `xs` without its first `count` elements.
pub fn drop<Tg, Xs>(count: usize, xs: Xs) -> Xs
where
    Tg: TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
{
    let mut rest = xs;
    for _ in 0..count {
        if Tg::is_empty(&rest) {
            break;
        }
        rest = Tg::tail(rest);
    }
    rest
}

/// The element at `index`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[track_caller]
pub fn at<Tg, Xs>(index: usize, xs: Xs) -> ElementOf<Tg, Xs>
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
{
    let rest = drop::<Tg, Xs>(index, xs);
    if Tg::is_empty(&rest) {
        precondition_violation("at", "index out of bounds");
    }
    Tg::head(rest)
}

/// The last element.
///
/// # Panics
///
/// Panics if `xs` is empty.
#[track_caller]
pub fn last<Tg, Xs>(xs: Xs) -> ElementOf<Tg, Xs>
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
{
    if Tg::is_empty(&xs) {
        precondition_violation("last", "empty structure");
    }
    let mut rest = xs;
    loop {
        let next = Tg::tail(rest.clone());
        if Tg::is_empty(&next) {
            return Tg::head(rest);
        }
        rest = next;
    }
}

/// `xs` from its first element failing `pred` onwards.
pub fn drop_while<Tg, Xs, P>(xs: Xs, mut pred: P) -> Xs
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
    P: for<'a> Func1<&'a ElementOf<Tg, Xs>, Output = bool>,
{
    let mut rest = xs;
    while !Tg::is_empty(&rest) && pred.call1(&Tg::head(rest.clone())) {
        rest = Tg::tail(rest);
    }
    rest
}

/// The first element satisfying `pred`.
pub fn find_if<Tg, Xs, P>(xs: Xs, mut pred: P) -> Option<ElementOf<Tg, Xs>>
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
    P: for<'a> Func1<&'a ElementOf<Tg, Xs>, Output = bool>,
{
    let mut rest = xs;
    while !Tg::is_empty(&rest) {
        let element = Tg::head(rest.clone());
        if pred.call1(&element) {
            return Some(element);
        }
        rest = Tg::tail(rest);
    }
    None
}

/// Whether some element satisfies `pred`; stops at the first that does.
pub fn any_of<Tg, Xs, P>(xs: Xs, pred: P) -> bool
where
    Tg: HeadImpl<Xs> + TailImpl<Xs, Output = Xs> + IsEmptyImpl<Xs>,
    Xs: Clone,
    P: for<'a> Func1<&'a ElementOf<Tg, Xs>, Output = bool>,
{
    find_if::<Tg, Xs, P>(xs, pred).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{List, ListTag, Str, StringTag};
    use crate::list;
    use crate::typeclass::LengthImpl;
    use rstest::rstest;

    #[rstest]
    fn derived_length_agrees_with_the_cached_one() {
        let xs: List<u8> = (0..17).collect();
        assert_eq!(length::<ListTag, _>(&xs), ListTag::length(&xs));
        assert_eq!(length::<ListTag, _>(&List::<u8>::new()), 0);
    }

    #[rstest]
    fn folds_over_string_characters() {
        let text = Str::new("abc");
        let forward = foldl::<StringTag, _, _, _>(text, String::new(), |mut s: String, c: char| {
            s.push(c);
            s
        });
        let backward = foldr::<StringTag, _, _, _>(text, String::new(), |c: char, mut s: String| {
            s.push(c);
            s
        });
        assert_eq!(forward, "abc");
        assert_eq!(backward, "cba");
    }

    #[rstest]
    #[case(0, 'x')]
    #[case(2, 'z')]
    fn at_walks_tails(#[case] index: usize, #[case] expected: char) {
        assert_eq!(at::<StringTag, _>(index, Str::new("xyz")), expected);
    }

    #[rstest]
    #[should_panic(expected = "last: precondition violated: empty structure")]
    fn last_of_an_empty_list_panics() {
        let _ = last::<ListTag, _>(List::<i32>::new());
    }

    #[rstest]
    fn drop_while_stops_at_the_first_failure() {
        let rest = drop_while::<ListTag, _, _>(list![1, 1, 2, 1], |x: &i32| *x == 1);
        assert_eq!(rest, list![2, 1]);
        assert_eq!(drop::<ListTag, _>(9, list![1, 2]), List::new());
    }
}
