//! Built-in arrays as a data type.
//!
//! `[T; N]` provides `foldl` and `foldr` directly; `unpack` is available up
//! to twelve elements. Equality and ordering are the standard library's.
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! assert_eq!(foldl([1, 2, 3], 0, |s: i32, x: i32| s * 10 + x), 123);
//! assert_eq!(unpack([3, 4], |a: i32, b: i32| a * b), 12);
//! assert_eq!(transform([1, 2], |x: i32| x > 1), [false, true]);
//! ```

use static_assertions::const_assert;

use crate::core::concept::{Comparable, Foldable, Functor, Iterable, Orderable, Searchable};
use crate::core::function::{Func1, Func2, FuncN};
use crate::core::{Elements, Op, Slots, Tag, Tagged, models};
use crate::derive;
use crate::typeclass::{
    AnyOfImpl, FindIfImpl, FoldlImpl, Foldl1Impl, FoldrImpl, Foldr1Impl, LengthImpl,
    TransformImpl, UnpackImpl,
};

/// The data type of `[T; N]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ArrayTag;

impl Tag for ArrayTag {
    const NAME: &'static str = "Array";
    const SLOTS: Slots = Slots::of(&[
        Op::Foldl,
        Op::Foldr,
        Op::Length,
        Op::FindIf,
        Op::AnyOf,
        Op::Equal,
        Op::Less,
        Op::Transform,
    ]);
}

// Foldable through (foldl, foldr), not through unpack.
const_assert!(models::<Foldable, ArrayTag>());
const_assert!(!ArrayTag::SLOTS.contains(Op::Unpack));
const_assert!(models::<Searchable, ArrayTag>());
const_assert!(models::<Comparable, ArrayTag>());
const_assert!(models::<Orderable, ArrayTag>());
const_assert!(models::<Functor, ArrayTag>());
const_assert!(!models::<Iterable, ArrayTag>());

impl<T, const N: usize> Tagged for [T; N] {
    type Tag = ArrayTag;
}

impl<T, const N: usize> Elements for [T; N] {
    type Item = T;
}

impl<T, S, F, const N: usize> FoldlImpl<[T; N], S, F> for ArrayTag
where
    F: Func2<S, T, Output = S>,
{
    type Output = S;

    #[inline]
    fn foldl(xs: [T; N], state: S, mut f: F) -> S {
        xs.into_iter()
            .fold(state, |state, element| f.call2(state, element))
    }
}

impl<T, S, F, const N: usize> FoldrImpl<[T; N], S, F> for ArrayTag
where
    F: Func2<T, S, Output = S>,
{
    type Output = S;

    #[inline]
    fn foldr(xs: [T; N], state: S, mut f: F) -> S {
        xs.into_iter()
            .rev()
            .fold(state, |state, element| f.call2(element, state))
    }
}

impl<T, F, const N: usize> Foldl1Impl<[T; N], F> for ArrayTag
where
    F: Func2<T, T, Output = T>,
{
    type Output = T;

    #[track_caller]
    fn foldl1(xs: [T; N], f: F) -> T {
        derive::foldable::foldl1::<Self, _, _, _>(xs, f)
    }
}

impl<T, F, const N: usize> Foldr1Impl<[T; N], F> for ArrayTag
where
    F: Func2<T, T, Output = T>,
{
    type Output = T;

    #[track_caller]
    fn foldr1(xs: [T; N], f: F) -> T {
        derive::foldable::foldr1::<Self, _, _, _>(xs, f)
    }
}

impl<T, const N: usize> LengthImpl<[T; N]> for ArrayTag {
    #[inline]
    fn length(_xs: &[T; N]) -> usize {
        N
    }
}

macro_rules! element_type {
    ($element:ident) => {
        T
    };
}

macro_rules! unpack_array {
    ($length:literal; $($element:ident),*) => {
        impl<T, F> UnpackImpl<[T; $length], F> for ArrayTag
        where
            F: FuncN<($(element_type!($element),)*)>,
        {
            type Output = F::Output;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn unpack(xs: [T; $length], function: F) -> F::Output {
                let [$($element),*] = xs;
                function.call_n(($($element,)*))
            }
        }
    };
}

unpack_array!(0;);
unpack_array!(1; a);
unpack_array!(2; a, b);
unpack_array!(3; a, b, c);
unpack_array!(4; a, b, c, d);
unpack_array!(5; a, b, c, d, e);
unpack_array!(6; a, b, c, d, e, f);
unpack_array!(7; a, b, c, d, e, f, g);
unpack_array!(8; a, b, c, d, e, f, g, h);
unpack_array!(9; a, b, c, d, e, f, g, h, i);
unpack_array!(10; a, b, c, d, e, f, g, h, i, j);
unpack_array!(11; a, b, c, d, e, f, g, h, i, j, k);
unpack_array!(12; a, b, c, d, e, f, g, h, i, j, k, l);

impl<T, P, const N: usize> FindIfImpl<[T; N], T, P> for ArrayTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    #[inline]
    fn find_if(xs: [T; N], mut pred: P) -> Option<T> {
        xs.into_iter().find(|element| pred.call1(element))
    }
}

impl<T, P, const N: usize> AnyOfImpl<[T; N], P> for ArrayTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    #[inline]
    fn any_of(xs: [T; N], mut pred: P) -> bool {
        xs.iter().any(|element| pred.call1(element))
    }
}

impl<T, F: Func1<T>, const N: usize> TransformImpl<[T; N], F> for ArrayTag {
    type Output = [F::Output; N];

    #[inline]
    fn transform(xs: [T; N], mut f: F) -> Self::Output {
        xs.map(|element| f.call1(element))
    }
}
