//! Foldable: structures that can be reduced to a summary value.
//!
//! A data type models Foldable by providing either `foldl` and `foldr`, or
//! `unpack`. Everything else in this module is derived from `foldl`,
//! `foldr` and their seedless variants, whatever the data type.
//!
//! # Laws
//!
//! For every Foldable `xs`:
//!
//! ```text
//! foldl(xs, s, f) == foldl(to::<TupleTag>(xs), s, f)
//! foldr(xs, s, f) == foldr(to::<TupleTag>(xs), s, f)
//! length(xs)      == length(to::<TupleTag>(xs))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tagfold::prelude::*;
//! use tagfold::core::function::Plus;
//!
//! assert_eq!(foldl(tuple![1, 2, 3], 0, Plus), 6);
//! assert_eq!(foldl(just(4), 1, Plus), 5);
//! assert_eq!(sum::<i32, _>(list![1, 2, 3, 4]), 10);
//! assert_eq!(maximum(tuple![3, 9, 2]), 9);
//! ```

use crate::core::concept::Foldable;
use crate::core::function::{EqualTo, Flip, Func1, Func2, Less, Plus, Times};
use crate::core::{Tag, TagOf, Tagged, require_models};

use super::monoid::Monoid;
use super::wrappers::{Product, Sum};

// =============================================================================
// Dispatch traits
// =============================================================================

/// Left fold for the data type `Self`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `foldl` for `{Xs}`",
    label = "`foldl` needs a Foldable structure and a function accepting every element",
    note = "Foldable requires `foldl` and `foldr`, or `unpack`"
)]
pub trait FoldlImpl<Xs, S, F>: Tag {
    /// The final state.
    type Output;

    /// Folds `xs` from the left.
    fn foldl(xs: Xs, state: S, f: F) -> Self::Output;
}

/// Right fold for the data type `Self`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `foldr` for `{Xs}`",
    label = "`foldr` needs a Foldable structure and a function accepting every element",
    note = "Foldable requires `foldl` and `foldr`, or `unpack`"
)]
pub trait FoldrImpl<Xs, S, F>: Tag {
    /// The final state.
    type Output;

    /// Folds `xs` from the right.
    fn foldr(xs: Xs, state: S, f: F) -> Self::Output;
}

/// Left fold seeded with the first element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `foldl1` for `{Xs}`",
    label = "`foldl1` needs a non-empty Foldable structure",
    note = "use `foldl` with an explicit initial state"
)]
pub trait Foldl1Impl<Xs, F>: Tag {
    /// The final state.
    type Output;

    /// Folds `xs` from the left, starting at its first element.
    fn foldl1(xs: Xs, f: F) -> Self::Output;
}

/// Right fold seeded with the last element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `foldr1` for `{Xs}`",
    label = "`foldr1` needs a non-empty Foldable structure",
    note = "use `foldr` with an explicit initial state"
)]
pub trait Foldr1Impl<Xs, F>: Tag {
    /// The final state.
    type Output;

    /// Folds `xs` from the right, starting at its last element.
    fn foldr1(xs: Xs, f: F) -> Self::Output;
}

/// Calls a function with the elements as positional arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `unpack` for `{Xs}`",
    label = "`unpack` needs a structure of at most twelve elements and a function of that arity"
)]
pub trait UnpackImpl<Xs, F>: Tag {
    /// The result of the call.
    type Output;

    /// Calls `f(x0, x1, ..., xn)`.
    fn unpack(xs: Xs, f: F) -> Self::Output;
}

/// Element count.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `length` for `{Xs}`",
    note = "Foldable requires `foldl` and `foldr`, or `unpack`"
)]
pub trait LengthImpl<Xs>: Tag {
    /// Number of elements in `xs`.
    fn length(xs: &Xs) -> usize;
}

// =============================================================================
// Function adapters
// =============================================================================

/// Keeps the smaller of two elements under a strict weak order; the current
/// one wins ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinBy<P>(pub P);

impl<T, P> Func2<T, T> for MinBy<P>
where
    P: for<'a> Func2<&'a T, &'a T, Output = bool>,
{
    type Output = T;

    #[inline]
    fn call2(&mut self, current: T, candidate: T) -> T {
        if self.0.call2(&candidate, &current) {
            candidate
        } else {
            current
        }
    }
}

/// Keeps the greater of two elements under a strict weak order; the current
/// one wins ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxBy<P>(pub P);

impl<T, P> Func2<T, T> for MaxBy<P>
where
    P: for<'a> Func2<&'a T, &'a T, Output = bool>,
{
    type Output = T;

    #[inline]
    fn call2(&mut self, current: T, candidate: T) -> T {
        if self.0.call2(&current, &candidate) {
            candidate
        } else {
            current
        }
    }
}

/// Counts the elements satisfying a predicate.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountIf<P>(pub P);

impl<X, P> Func2<usize, X> for CountIf<P>
where
    P: for<'a> Func1<&'a X, Output = bool>,
{
    type Output = usize;

    #[inline]
    fn call2(&mut self, count: usize, element: X) -> usize {
        count + usize::from(self.0.call1(&element))
    }
}

/// Runs a function for its effect on every element.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForEach<F>(pub F);

impl<X, F: Func1<X>> Func2<(), X> for ForEach<F> {
    type Output = ();

    #[inline]
    fn call2(&mut self, (): (), element: X) {
        self.0.call1(element);
    }
}

/// Threads an optional state through a left fold; once a step returns
/// `None`, the remaining elements are skipped without calling the step.
#[derive(Clone, Copy, Debug, Default)]
pub struct BindLeft<F>(pub F);

impl<S, X, F> Func2<Option<S>, X> for BindLeft<F>
where
    F: Func2<S, X, Output = Option<S>>,
{
    type Output = Option<S>;

    #[inline]
    fn call2(&mut self, state: Option<S>, element: X) -> Option<S> {
        state.and_then(|state| self.0.call2(state, element))
    }
}

/// [`BindLeft`] for right folds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BindRight<F>(pub F);

impl<X, S, F> Func2<X, Option<S>> for BindRight<F>
where
    F: Func2<X, S, Output = Option<S>>,
{
    type Output = Option<S>;

    #[inline]
    fn call2(&mut self, element: X, state: Option<S>) -> Option<S> {
        state.and_then(|state| self.0.call2(element, state))
    }
}

/// A function taking a whole structure and calling the wrapped function with
/// its elements. Built by [`fuse`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Fuse<F>(pub F);

impl<Xs, F> Func1<Xs> for Fuse<F>
where
    Xs: Tagged,
    F: Clone,
    TagOf<Xs>: UnpackImpl<Xs, F>,
{
    type Output = <TagOf<Xs> as UnpackImpl<Xs, F>>::Output;

    #[inline]
    fn call1(&mut self, xs: Xs) -> Self::Output {
        unpack(xs, self.0.clone())
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Folds `xs` from the left: `f(...f(f(state, x0), x1)..., xn)`.
///
/// On an empty structure, returns `state` without calling `f`.
#[inline]
pub fn foldl<Xs, S, F>(xs: Xs, state: S, f: F) -> <TagOf<Xs> as FoldlImpl<Xs, S, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: FoldlImpl<Xs, S, F>,
{
    require_models!(Foldable, TagOf<Xs>, "foldl(xs, state, f) requires xs to be Foldable");
    <TagOf<Xs> as FoldlImpl<Xs, S, F>>::foldl(xs, state, f)
}

/// Folds `xs` from the right: `f(x0, f(x1, ... f(xn, state)))`.
///
/// On an empty structure, returns `state` without calling `f`.
#[inline]
pub fn foldr<Xs, S, F>(xs: Xs, state: S, f: F) -> <TagOf<Xs> as FoldrImpl<Xs, S, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: FoldrImpl<Xs, S, F>,
{
    require_models!(Foldable, TagOf<Xs>, "foldr(xs, state, f) requires xs to be Foldable");
    <TagOf<Xs> as FoldrImpl<Xs, S, F>>::foldr(xs, state, f)
}

/// Folds a non-empty `xs` from the left, seeded with its first element.
///
/// # Panics
///
/// Panics if a runtime-sized `xs` is empty. An empty tuple does not
/// type-check.
#[inline]
pub fn foldl1<Xs, F>(xs: Xs, f: F) -> <TagOf<Xs> as Foldl1Impl<Xs, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldl1Impl<Xs, F>,
{
    require_models!(Foldable, TagOf<Xs>, "foldl1(xs, f) requires xs to be Foldable");
    <TagOf<Xs> as Foldl1Impl<Xs, F>>::foldl1(xs, f)
}

/// Folds a non-empty `xs` from the right, seeded with its last element.
///
/// # Panics
///
/// Panics if a runtime-sized `xs` is empty.
#[inline]
pub fn foldr1<Xs, F>(xs: Xs, f: F) -> <TagOf<Xs> as Foldr1Impl<Xs, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldr1Impl<Xs, F>,
{
    require_models!(Foldable, TagOf<Xs>, "foldr1(xs, f) requires xs to be Foldable");
    <TagOf<Xs> as Foldr1Impl<Xs, F>>::foldr1(xs, f)
}

/// Same as [`foldl`].
#[inline]
pub fn fold<Xs, S, F>(xs: Xs, state: S, f: F) -> <TagOf<Xs> as FoldlImpl<Xs, S, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: FoldlImpl<Xs, S, F>,
{
    foldl(xs, state, f)
}

/// Same as [`foldl1`].
#[inline]
pub fn fold1<Xs, F>(xs: Xs, f: F) -> <TagOf<Xs> as Foldl1Impl<Xs, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldl1Impl<Xs, F>,
{
    foldl1(xs, f)
}

/// Folds from the right with a function taking the state first:
/// `f(...f(f(state, xn), xn-1)..., x0)`.
#[inline]
pub fn reverse_fold<Xs, S, F>(
    xs: Xs,
    state: S,
    f: F,
) -> <TagOf<Xs> as FoldrImpl<Xs, S, Flip<F>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: FoldrImpl<Xs, S, Flip<F>>,
{
    foldr(xs, state, Flip(f))
}

/// [`reverse_fold`] seeded with the last element.
#[inline]
pub fn reverse_fold1<Xs, F>(xs: Xs, f: F) -> <TagOf<Xs> as Foldr1Impl<Xs, Flip<F>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldr1Impl<Xs, Flip<F>>,
{
    foldr1(xs, Flip(f))
}

/// Calls `f` with the elements of `xs` as positional arguments.
///
/// ```rust
/// use tagfold::prelude::*;
///
/// assert_eq!(unpack(tuple![1, 'b'], |n: i32, c: char| format!("{n}{c}")), "1b");
/// assert_eq!(unpack(nothing(), || 0), 0);
/// ```
#[inline]
pub fn unpack<Xs, F>(xs: Xs, f: F) -> <TagOf<Xs> as UnpackImpl<Xs, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: UnpackImpl<Xs, F>,
{
    require_models!(Foldable, TagOf<Xs>, "unpack(xs, f) requires xs to be Foldable");
    <TagOf<Xs> as UnpackImpl<Xs, F>>::unpack(xs, f)
}

/// Number of elements in `xs`.
#[inline]
pub fn length<Xs>(xs: &Xs) -> usize
where
    Xs: Tagged,
    TagOf<Xs>: LengthImpl<Xs>,
{
    require_models!(Foldable, TagOf<Xs>, "length(xs) requires xs to be Foldable");
    <TagOf<Xs> as LengthImpl<Xs>>::length(xs)
}

/// Same as [`length`].
#[inline]
pub fn size<Xs>(xs: &Xs) -> usize
where
    Xs: Tagged,
    TagOf<Xs>: LengthImpl<Xs>,
{
    length(xs)
}

/// The first smallest element under the strict weak order `pred`.
///
/// # Panics
///
/// Panics if a runtime-sized `xs` is empty.
#[inline]
pub fn minimum_by<P, Xs>(pred: P, xs: Xs) -> <TagOf<Xs> as Foldl1Impl<Xs, MinBy<P>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldl1Impl<Xs, MinBy<P>>,
{
    foldl1(xs, MinBy(pred))
}

/// The first smallest element under `<`.
#[inline]
pub fn minimum<Xs>(xs: Xs) -> <TagOf<Xs> as Foldl1Impl<Xs, MinBy<Less>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldl1Impl<Xs, MinBy<Less>>,
{
    minimum_by(Less, xs)
}

/// The first greatest element under the strict weak order `pred`.
///
/// # Panics
///
/// Panics if a runtime-sized `xs` is empty.
#[inline]
pub fn maximum_by<P, Xs>(pred: P, xs: Xs) -> <TagOf<Xs> as Foldl1Impl<Xs, MaxBy<P>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldl1Impl<Xs, MaxBy<P>>,
{
    foldl1(xs, MaxBy(pred))
}

/// The first greatest element under `<`.
#[inline]
pub fn maximum<Xs>(xs: Xs) -> <TagOf<Xs> as Foldl1Impl<Xs, MaxBy<Less>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: Foldl1Impl<Xs, MaxBy<Less>>,
{
    maximum_by(Less, xs)
}

/// Adds up the elements, starting from the additive identity of `M`.
///
/// ```rust
/// use tagfold::prelude::*;
///
/// assert_eq!(sum::<i32, _>(tuple![]), 0);
/// assert_eq!(sum::<f64, _>(tuple![0.5, 2.0]), 2.5);
/// ```
#[inline]
pub fn sum<M, Xs>(xs: Xs) -> <TagOf<Xs> as FoldlImpl<Xs, M, Plus>>::Output
where
    Xs: Tagged,
    Sum<M>: Monoid,
    TagOf<Xs>: FoldlImpl<Xs, M, Plus>,
{
    foldl(xs, Sum::<M>::empty().0, Plus)
}

/// Multiplies the elements, starting from the multiplicative identity of `M`.
#[inline]
pub fn product<M, Xs>(xs: Xs) -> <TagOf<Xs> as FoldlImpl<Xs, M, Times>>::Output
where
    Xs: Tagged,
    Product<M>: Monoid,
    TagOf<Xs>: FoldlImpl<Xs, M, Times>,
{
    foldl(xs, Product::<M>::empty().0, Times)
}

/// Number of elements satisfying `pred`.
///
/// `pred` receives each element by reference and may be polymorphic, so
/// heterogeneous tuples are counted as well.
#[inline]
pub fn count_if<Xs, P>(xs: Xs, pred: P) -> usize
where
    Xs: Tagged,
    TagOf<Xs>: FoldlImpl<Xs, usize, CountIf<P>, Output = usize>,
{
    foldl(xs, 0, CountIf(pred))
}

/// Number of elements equal to `value`.
#[inline]
pub fn count<Xs, V>(xs: Xs, value: V) -> usize
where
    Xs: Tagged,
    TagOf<Xs>: FoldlImpl<Xs, usize, CountIf<EqualTo<V>>, Output = usize>,
{
    count_if(xs, EqualTo(value))
}

/// Calls `f` on every element, from left to right.
#[inline]
pub fn for_each<Xs, F>(xs: Xs, f: F)
where
    Xs: Tagged,
    TagOf<Xs>: FoldlImpl<Xs, (), ForEach<F>, Output = ()>,
{
    foldl(xs, (), ForEach(f));
}

/// Left fold whose step may fail: `f(state, x)` returns `Option<S>`.
///
/// Returns `Some(state)` untouched on an empty structure. The first `None`
/// is the result; `f` is not called on the elements after it.
///
/// ```rust
/// use tagfold::prelude::*;
///
/// let checked = |total: u8, x: u8| total.checked_add(x);
/// assert_eq!(foldl_m(tuple![1, 2, 3], 0, checked), Some(6));
/// assert_eq!(foldl_m(list![200, 100, 1], 0, checked), None);
/// ```
#[inline]
pub fn foldl_m<Xs, S, F>(
    xs: Xs,
    state: S,
    f: F,
) -> <TagOf<Xs> as FoldlImpl<Xs, Option<S>, BindLeft<F>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: FoldlImpl<Xs, Option<S>, BindLeft<F>>,
{
    foldl(xs, Some(state), BindLeft(f))
}

/// Right fold whose step may fail: `f(x, state)` returns `Option<S>`.
///
/// Elements are visited from the last one; `f` is not called on the
/// elements to the left of the first `None`.
#[inline]
pub fn foldr_m<Xs, S, F>(
    xs: Xs,
    state: S,
    f: F,
) -> <TagOf<Xs> as FoldrImpl<Xs, Option<S>, BindRight<F>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: FoldrImpl<Xs, Option<S>, BindRight<F>>,
{
    foldr(xs, Some(state), BindRight(f))
}

/// Turns a function of `n` arguments into a function of one structure of
/// `n` elements: `fuse(f).call1(xs) == unpack(xs, f)`.
///
/// ```rust
/// use tagfold::prelude::*;
///
/// let areas = transform(list![tuple![2, 3], tuple![4, 5]], fuse(|w: i32, h: i32| w * h));
/// assert_eq!(areas, list![6, 20]);
/// ```
#[inline]
pub const fn fuse<F>(f: F) -> Fuse<F> {
    Fuse(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::function::MakePair;
    use crate::data::{List, just, nothing};
    use crate::{list, tuple};
    use rstest::rstest;

    #[rstest]
    fn foldl_is_left_associative() {
        assert_eq!(foldl(tuple![1, 2, 3], 0, MakePair), (((0, 1), 2), 3));
        assert_eq!(foldl(list![1, 2, 3], 10, |state: i32, x: i32| state - x), 4);
    }

    #[rstest]
    fn foldr_is_right_associative() {
        assert_eq!(foldr(tuple![1, 2, 3], 0, MakePair), (1, (2, (3, 0))));
        assert_eq!(foldr(list![1, 2, 3], 10, |x: i32, state: i32| x - state), -8);
    }

    #[rstest]
    fn empty_folds_return_the_state_untouched() {
        let mut calls = 0;
        let result = foldl(tuple![], 7, |state: i32, _: i32| {
            calls += 1;
            state
        });
        assert_eq!(result, 7);
        assert_eq!(calls, 0);
        assert_eq!(foldr(List::<i32>::new(), 7, Plus), 7);
    }

    #[rstest]
    fn reverse_fold_takes_the_state_first() {
        let rendered = reverse_fold(tuple![1, 2, 3], String::new(), |s: String, x: i32| {
            format!("{s}{x}")
        });
        assert_eq!(rendered, "321");
        assert_eq!(reverse_fold1(tuple![1, 2, 3], |s: i32, x: i32| s - x), 0);
    }

    #[rstest]
    fn fold_and_fold1_are_foldl_and_foldl1() {
        let minus = |left: i32, right: i32| left - right;
        assert_eq!(fold(tuple![1, 2], 0, minus), foldl(tuple![1, 2], 0, minus));
        assert_eq!(fold1(tuple![9, 2, 3], minus), foldl1(tuple![9, 2, 3], minus));
    }

    #[rstest]
    fn extremes_keep_the_first_of_equal_elements() {
        let by_key = |left: &(i32, char), right: &(i32, char)| left.0 < right.0;
        let xs = tuple![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        assert_eq!(minimum_by(by_key, xs), (1, 'b'));
        assert_eq!(maximum_by(by_key, xs), (2, 'a'));
        assert_eq!(minimum(list![4, 2, 8]), 2);
        assert_eq!(maximum(tuple![4, 2, 8]), 8);
    }

    #[rstest]
    fn sum_and_product_start_from_identities() {
        assert_eq!(sum::<i32, _>(tuple![]), 0);
        assert_eq!(product::<i32, _>(tuple![]), 1);
        assert_eq!(sum::<i64, _>(list![1, 2, 3]), 6);
        assert_eq!(product::<u8, _>(tuple![2, 3, 4]), 24);
    }

    #[rstest]
    fn count_if_accepts_polymorphic_predicates() {
        struct Positive;
        impl<'a> Func1<&'a i32> for Positive {
            type Output = bool;
            fn call1(&mut self, value: &'a i32) -> bool {
                *value > 0
            }
        }
        impl<'a> Func1<&'a f64> for Positive {
            type Output = bool;
            fn call1(&mut self, value: &'a f64) -> bool {
                *value > 0.0
            }
        }
        assert_eq!(count_if(tuple![1_i32, -2.0_f64, 3.5_f64, -4_i32], Positive), 2);
        assert_eq!(count_if(tuple![1, 2, 3, 4], |x: &i32| x % 2 == 0), 2);
        assert_eq!(count(list![1, 2, 1], 1), 2);
    }

    #[rstest]
    fn for_each_runs_left_to_right() {
        let mut seen = Vec::new();
        for_each(tuple![1, 2, 3], |x: i32| seen.push(x));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn foldl_m_stops_calling_the_step_after_none() {
        let mut seen = Vec::new();
        let total = foldl_m(tuple![10_u8, 200, 100, 5], 0_u8, |total: u8, x: u8| {
            seen.push(x);
            total.checked_add(x)
        });
        assert_eq!(total, None);
        assert_eq!(seen, vec![10, 200, 100]);
        assert_eq!(foldl_m(list![1, 2, 3], 0, |s: i32, x: i32| Some(s * 10 + x)), Some(123));
    }

    #[rstest]
    fn foldr_m_visits_from_the_right() {
        let mut seen = Vec::new();
        let result = foldr_m(tuple![1, 2, 3], 0, |x: i32, s: i32| {
            seen.push(x);
            (x != 2).then_some(s + x)
        });
        assert_eq!(result, None);
        assert_eq!(seen, vec![3, 2]);
        assert_eq!(foldr_m(just(4), 1, |x: i32, s: i32| Some(x - s)), Some(3));
    }

    #[rstest]
    fn monadic_folds_of_empty_structures_return_the_state() {
        let never = |_: i32, _: i32| -> Option<i32> { unreachable!() };
        assert_eq!(foldl_m(tuple![], 7, never), Some(7));
        assert_eq!(foldr_m(List::<i32>::new(), 7, never), Some(7));
        assert_eq!(foldl_m(nothing(), 7, never), Some(7));
    }

    #[rstest]
    fn foldl_m_accepts_polymorphic_steps() {
        struct Accumulate;
        impl Func2<i64, i64> for Accumulate {
            type Output = Option<i64>;
            fn call2(&mut self, total: i64, x: i64) -> Option<i64> {
                total.checked_add(x)
            }
        }
        impl Func2<i64, &str> for Accumulate {
            type Output = Option<i64>;
            fn call2(&mut self, total: i64, x: &str) -> Option<i64> {
                total.checked_add(x.parse().ok()?)
            }
        }
        assert_eq!(foldl_m(tuple![1_i64, "2", 3_i64], 0_i64, Accumulate), Some(6));
        assert_eq!(foldl_m(tuple![1_i64, "two", 3_i64], 0_i64, Accumulate), None);
    }

    #[rstest]
    fn fuse_is_unpack_with_the_structure_supplied_later() {
        let mut add = fuse(|a: i32, b: i32| a + b);
        assert_eq!(add.call1(tuple![1, 2]), unpack(tuple![1, 2], |a: i32, b: i32| a + b));
        assert_eq!(add.call1(tuple![5, 6]), 11);
        assert_eq!(fuse(|x: i32| x + 1).call1(just(1)), 2);
        assert_eq!(fuse(|| 'z').call1(tuple![]), 'z');
    }

    #[rstest]
    fn length_and_size_agree() {
        assert_eq!(length(&tuple![1, 'a', "b"]), 3);
        assert_eq!(size(&just(1)), 1);
        assert_eq!(length(&nothing()), 0);
        assert_eq!(length(&list![1, 2]), size(&list![1, 2]));
    }
}
