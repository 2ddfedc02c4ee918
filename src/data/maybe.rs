//! Optional values whose presence is known from their type.
//!
//! [`Just<T>`] holds a value and [`Nothing`] holds none. Unlike `Option`,
//! the two are different types, so `from_just(nothing())` is rejected at
//! compile time and `maybe` may return a different type in each case.
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! assert_eq!(from_just(just(3)), 3);
//! assert_eq!(maybe("none", |x: i32| x * 2, just(21)), 42);
//! assert_eq!(maybe("none", |x: i32| x * 2, nothing()), "none");
//! assert!(is_just(&just(())) && is_nothing(&nothing()));
//! assert!(nothing() < just(0));
//! ```
//!
//! As a data type, Maybe provides `unpack` and takes `foldl`, `foldr` and
//! `length` from it.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use static_assertions::const_assert;

use crate::core::concept::{
    Comparable, Foldable, Functor, Iterable, Orderable, Searchable,
};
use crate::core::function::{Func1, FuncN};
use crate::core::{Elements, Op, Slots, Tag, Tagged, models};
use crate::derive;
use crate::derive::foldable::{CountUp, FoldlArgs, FoldrArgs};
use crate::typeclass::{
    AnyOfImpl, FindIfImpl, FoldlImpl, Foldl1Impl, FoldrImpl, Foldr1Impl, LengthImpl,
    TransformImpl, UnpackImpl,
};

/// A present value.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Just<T>(pub T);

/// An absent value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nothing;

/// Wraps `value` in [`Just`].
#[inline]
#[must_use]
pub const fn just<T>(value: T) -> Just<T> {
    Just(value)
}

/// The absent value.
#[inline]
#[must_use]
pub const fn nothing() -> Nothing {
    Nothing
}

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for super::Just<T> {}
    impl Sealed for super::Nothing {}
}

/// [`Just<T>`] or [`Nothing`].
pub trait Maybe: Tagged<Tag = MaybeTag> + sealed::Sealed {
    /// Whether the value is present.
    const IS_JUST: bool;
}

impl<T> Maybe for Just<T> {
    const IS_JUST: bool = true;
}

impl Maybe for Nothing {
    const IS_JUST: bool = false;
}

/// Whether `m` is a [`Just`]. Decided by the type alone.
#[inline]
#[must_use]
pub const fn is_just<M: Maybe>(_m: &M) -> bool {
    M::IS_JUST
}

/// Whether `m` is [`Nothing`]. Decided by the type alone.
#[inline]
#[must_use]
pub const fn is_nothing<M: Maybe>(_m: &M) -> bool {
    !M::IS_JUST
}

/// Extraction of the value of a [`Just`].
#[diagnostic::on_unimplemented(
    message = "`from_just` requires a `Just`, found `{Self}`",
    label = "this value is statically known to be absent",
    note = "use `from_maybe(default, m)` or `maybe(default, f, m)` to handle `Nothing`"
)]
pub trait FromJust: Maybe {
    /// The contained type.
    type Output;

    /// Moves the value out.
    fn from_just(self) -> Self::Output;
}

impl<T> FromJust for Just<T> {
    type Output = T;

    #[inline]
    fn from_just(self) -> T {
        self.0
    }
}

/// The value inside `m`.
#[inline]
pub fn from_just<M: FromJust>(m: M) -> M::Output {
    m.from_just()
}

/// Case analysis on a Maybe with a default and a function.
pub trait MaybeCase<D, F>: Maybe {
    /// `D` for [`Nothing`], the function's result for [`Just`].
    type Output;

    /// Applies `f` to the value or returns `default`.
    fn maybe(self, default: D, f: F) -> Self::Output;
}

impl<D, F> MaybeCase<D, F> for Nothing {
    type Output = D;

    #[inline]
    fn maybe(self, default: D, _f: F) -> D {
        default
    }
}

impl<T, D, F: FuncN<(T,)>> MaybeCase<D, F> for Just<T> {
    type Output = F::Output;

    #[inline]
    fn maybe(self, _default: D, f: F) -> F::Output {
        f.call_n((self.0,))
    }
}

/// `f(x)` for `Just(x)`, `default` for `Nothing`.
#[inline]
pub fn maybe<D, F, M: MaybeCase<D, F>>(default: D, f: F, m: M) -> M::Output {
    m.maybe(default, f)
}

/// Hands a value through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unwrapped;

impl<T> FuncN<(T,)> for Unwrapped {
    type Output = T;

    #[inline]
    fn call_n(self, (value,): (T,)) -> T {
        value
    }
}

/// The value of `Just(x)`, or `default` for `Nothing`.
#[inline]
pub fn from_maybe<D, M: MaybeCase<D, Unwrapped>>(default: D, m: M) -> M::Output {
    m.maybe(default, Unwrapped)
}

// =============================================================================
// Comparison
// =============================================================================

impl<T: PartialEq<U>, U> PartialEq<Just<U>> for Just<T> {
    #[inline]
    fn eq(&self, other: &Just<U>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Just<T> {}

impl<T: Hash> Hash for Just<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialEq<Nothing> for Just<T> {
    #[inline]
    fn eq(&self, _other: &Nothing) -> bool {
        false
    }
}

impl<T> PartialEq<Just<T>> for Nothing {
    #[inline]
    fn eq(&self, _other: &Just<T>) -> bool {
        false
    }
}

impl<T: PartialOrd<U>, U> PartialOrd<Just<U>> for Just<T> {
    #[inline]
    fn partial_cmp(&self, other: &Just<U>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord> Ord for Just<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// `Nothing` is smaller than every `Just`.
impl<T> PartialOrd<Nothing> for Just<T> {
    #[inline]
    fn partial_cmp(&self, _other: &Nothing) -> Option<Ordering> {
        Some(Ordering::Greater)
    }
}

impl<T> PartialOrd<Just<T>> for Nothing {
    #[inline]
    fn partial_cmp(&self, _other: &Just<T>) -> Option<Ordering> {
        Some(Ordering::Less)
    }
}

// =============================================================================
// Data type
// =============================================================================

/// The data type of [`Just`] and [`Nothing`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaybeTag;

impl Tag for MaybeTag {
    const NAME: &'static str = "Maybe";
    const SLOTS: Slots = Slots::of(&[
        Op::Unpack,
        Op::Length,
        Op::FindIf,
        Op::AnyOf,
        Op::Equal,
        Op::Less,
        Op::Transform,
    ]);
}

const_assert!(models::<Foldable, MaybeTag>());
const_assert!(models::<Searchable, MaybeTag>());
const_assert!(models::<Comparable, MaybeTag>());
const_assert!(models::<Orderable, MaybeTag>());
const_assert!(models::<Functor, MaybeTag>());
const_assert!(!models::<Iterable, MaybeTag>());

impl<T> Tagged for Just<T> {
    type Tag = MaybeTag;
}

impl Tagged for Nothing {
    type Tag = MaybeTag;
}

impl<T> Elements for Just<T> {
    type Item = T;
}

impl<F: FuncN<()>> UnpackImpl<Nothing, F> for MaybeTag {
    type Output = F::Output;

    #[inline]
    fn unpack(_xs: Nothing, f: F) -> F::Output {
        f.call_n(())
    }
}

impl<T, F: FuncN<(T,)>> UnpackImpl<Just<T>, F> for MaybeTag {
    type Output = F::Output;

    #[inline]
    fn unpack(xs: Just<T>, f: F) -> F::Output {
        f.call_n((xs.0,))
    }
}

impl<Xs, S, F> FoldlImpl<Xs, S, F> for MaybeTag
where
    Self: UnpackImpl<Xs, FoldlArgs<S, F>>,
{
    type Output = <Self as UnpackImpl<Xs, FoldlArgs<S, F>>>::Output;

    #[inline]
    fn foldl(xs: Xs, state: S, f: F) -> Self::Output {
        derive::foldable::foldl_via_unpack::<Self, _, _, _>(xs, state, f)
    }
}

impl<Xs, S, F> FoldrImpl<Xs, S, F> for MaybeTag
where
    Self: UnpackImpl<Xs, FoldrArgs<S, F>>,
{
    type Output = <Self as UnpackImpl<Xs, FoldrArgs<S, F>>>::Output;

    #[inline]
    fn foldr(xs: Xs, state: S, f: F) -> Self::Output {
        derive::foldable::foldr_via_unpack::<Self, _, _, _>(xs, state, f)
    }
}

impl<Xs: Clone> LengthImpl<Xs> for MaybeTag
where
    Self: FoldlImpl<Xs, usize, CountUp, Output = usize>,
{
    #[inline]
    fn length(xs: &Xs) -> usize {
        derive::foldable::length::<Self, _>(xs)
    }
}

/// A single element is its own seedless fold.
impl<T, F> Foldl1Impl<Just<T>, F> for MaybeTag {
    type Output = T;

    #[inline]
    fn foldl1(xs: Just<T>, _f: F) -> T {
        xs.0
    }
}

impl<T, F> Foldr1Impl<Just<T>, F> for MaybeTag {
    type Output = T;

    #[inline]
    fn foldr1(xs: Just<T>, _f: F) -> T {
        xs.0
    }
}

impl<T, P> FindIfImpl<Just<T>, T, P> for MaybeTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    #[inline]
    fn find_if(xs: Just<T>, mut pred: P) -> Option<T> {
        if pred.call1(&xs.0) { Some(xs.0) } else { None }
    }
}

impl<T, P> FindIfImpl<Nothing, T, P> for MaybeTag {
    #[inline]
    fn find_if(_xs: Nothing, _pred: P) -> Option<T> {
        None
    }
}

impl<T, P> AnyOfImpl<Just<T>, P> for MaybeTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    #[inline]
    fn any_of(xs: Just<T>, mut pred: P) -> bool {
        pred.call1(&xs.0)
    }
}

impl<P> AnyOfImpl<Nothing, P> for MaybeTag {
    #[inline]
    fn any_of(_xs: Nothing, _pred: P) -> bool {
        false
    }
}

impl<T, F: Func1<T>> TransformImpl<Just<T>, F> for MaybeTag {
    type Output = Just<F::Output>;

    #[inline]
    fn transform(xs: Just<T>, mut f: F) -> Self::Output {
        Just(f.call1(xs.0))
    }
}

impl<F> TransformImpl<Nothing, F> for MaybeTag {
    type Output = Nothing;

    #[inline]
    fn transform(xs: Nothing, _f: F) -> Nothing {
        xs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Just<u8>: FromJust, Maybe, Copy);
    assert_not_impl_any!(Nothing: FromJust);

    #[rstest]
    fn maybe_picks_the_branch_by_type() {
        assert_eq!(maybe(0, |x: i32| x + 1, just(1)), 2);
        assert_eq!(maybe(0, |x: i32| x + 1, nothing()), 0);
        assert_eq!(maybe('d', |x: u8| x, nothing()), 'd');
    }

    #[rstest]
    fn from_maybe_uses_the_default_only_for_nothing() {
        assert_eq!(from_maybe(7, just(1)), 1);
        assert_eq!(from_maybe(7, nothing()), 7);
    }

    #[rstest]
    #[case(just(1) == just(1), true)]
    #[case(just(1) == just(2), false)]
    #[case(just(1) == nothing(), false)]
    #[case(nothing() == just(1), false)]
    #[case(nothing() == nothing(), true)]
    fn equality(#[case] actual: bool, #[case] expected: bool) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case(nothing() < just(i32::MIN), true)]
    #[case(just(i32::MIN) < nothing(), false)]
    #[case(just(1) < just(2), true)]
    #[case(nothing() < nothing(), false)]
    fn nothing_is_smaller_than_any_just(#[case] actual: bool, #[case] expected: bool) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn folds_are_derived_from_unpack() {
        let pushed = MaybeTag::foldl(just('x'), String::from("a"), |mut s: String, c: char| {
            s.push(c);
            s
        });
        assert_eq!(pushed, "ax");
        assert_eq!(MaybeTag::foldr(Nothing, 3, |_: char, s: i32| s + 1), 3);
        assert_eq!(MaybeTag::length(&Nothing), 0);
        assert_eq!(MaybeTag::length(&just("y")), 1);
    }

    #[rstest]
    fn transform_keeps_the_shape() {
        assert_eq!(MaybeTag::transform(just(2), |x: i32| x * 10), just(20));
        assert_eq!(MaybeTag::transform(Nothing, |x: i32| x * 10), Nothing);
    }
}
