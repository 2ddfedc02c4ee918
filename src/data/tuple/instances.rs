//! Tuples as a data type: [`TupleTag`] and its implementations.
//!
//! Operations whose result type follows from the input type (folds,
//! `head`, `at_c`, `zip`, `transform`) are computed on types and work on
//! heterogeneous tuples. Operations driven by element values (`sort`,
//! `group`, runtime `at` and `drop`) need every element to have the same
//! type and go through an inline buffer.

use std::cmp::Ordering;

use static_assertions::const_assert;

use super::{
    Buffer, CommonLen, HAt, HCons, HDrop, HFoldl, HFoldl1, HFoldr, HFoldr1, HLast, HList, HMap,
    HNil, Homogeneous, IntoHList, IntoTuple, MinLen, Prepend, Unfoldl, Unfoldr, ZipN, buffer_of,
};
use crate::core::concept::{
    Comparable, Foldable, Functor, Iterable, Orderable, Searchable, Sequence,
};
use crate::core::function::{Func1, Func2, FuncN};
use crate::core::nat::{Idx, NatOf, ToNat};
use crate::core::{Op, Slots, Tag, TagOf, Tagged, ToImpl, models, precondition_violation};
use crate::data::List;
use crate::typeclass::{
    AnyOfImpl, AtCImpl, AtImpl, DropCImpl, DropImpl, DropWhileImpl, FindIfImpl, FoldlImpl,
    Foldl1Impl, FoldrImpl, Foldr1Impl, GroupByImpl, HeadImpl, IsEmptyImpl, LastImpl, LengthImpl,
    MakeImpl, PermutationsImpl, SortByImpl, TailImpl, TransformImpl, UnfoldlImpl, UnfoldrImpl,
    UnpackImpl, ZipShortestImpl, ZipUnsafeImpl,
};

/// The data type of [`HNil`] and [`HCons`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TupleTag;

impl Tag for TupleTag {
    const NAME: &'static str = "Tuple";
    const SLOTS: Slots = Slots::of(&[
        Op::Foldl,
        Op::Foldr,
        Op::Unpack,
        Op::Length,
        Op::Foldl1,
        Op::Foldr1,
        Op::Head,
        Op::Tail,
        Op::IsEmpty,
        Op::At,
        Op::Last,
        Op::Drop,
        Op::DropWhile,
        Op::FindIf,
        Op::AnyOf,
        Op::Make,
        Op::Equal,
        Op::Less,
        Op::Transform,
    ]);
}

const_assert!(models::<Foldable, TupleTag>());
const_assert!(models::<Iterable, TupleTag>());
const_assert!(models::<Searchable, TupleTag>());
const_assert!(models::<Sequence, TupleTag>());
const_assert!(models::<Comparable, TupleTag>());
const_assert!(models::<Orderable, TupleTag>());
const_assert!(models::<Functor, TupleTag>());

// =============================================================================
// Foldable
// =============================================================================

impl<Xs: HFoldl<S, F>, S, F> FoldlImpl<Xs, S, F> for TupleTag {
    type Output = Xs::Output;

    #[inline]
    fn foldl(xs: Xs, state: S, mut f: F) -> Self::Output {
        xs.foldl_with(state, &mut f)
    }
}

impl<Xs: HFoldr<S, F>, S, F> FoldrImpl<Xs, S, F> for TupleTag {
    type Output = Xs::Output;

    #[inline]
    fn foldr(xs: Xs, state: S, mut f: F) -> Self::Output {
        xs.foldr_with(state, &mut f)
    }
}

impl<Xs: HFoldl1<F>, F> Foldl1Impl<Xs, F> for TupleTag {
    type Output = Xs::Output;

    #[inline]
    fn foldl1(xs: Xs, mut f: F) -> Self::Output {
        xs.foldl1_with(&mut f)
    }
}

impl<Xs: HFoldr1<F>, F> Foldr1Impl<Xs, F> for TupleTag {
    type Output = Xs::Output;

    #[inline]
    fn foldr1(xs: Xs, mut f: F) -> Self::Output {
        xs.foldr1_with(&mut f)
    }
}

impl<Xs, F> UnpackImpl<Xs, F> for TupleTag
where
    Xs: IntoTuple,
    F: FuncN<Xs::Tuple>,
{
    type Output = F::Output;

    #[inline]
    fn unpack(xs: Xs, f: F) -> Self::Output {
        f.call_n(xs.into_tuple())
    }
}

impl<Xs: HList> LengthImpl<Xs> for TupleTag {
    #[inline]
    fn length(_xs: &Xs) -> usize {
        Xs::LEN
    }
}

// =============================================================================
// Iterable
// =============================================================================

impl<H, T> HeadImpl<HCons<H, T>> for TupleTag {
    type Output = H;

    #[inline]
    fn head(xs: HCons<H, T>) -> H {
        xs.head
    }
}

impl<H, T> TailImpl<HCons<H, T>> for TupleTag {
    type Output = T;

    #[inline]
    fn tail(xs: HCons<H, T>) -> T {
        xs.tail
    }
}

impl<Xs: HList> IsEmptyImpl<Xs> for TupleTag {
    #[inline]
    fn is_empty(_xs: &Xs) -> bool {
        Xs::LEN == 0
    }
}

impl<Xs: Homogeneous<T>, T> AtImpl<Xs, T> for TupleTag {
    #[track_caller]
    fn at(index: usize, xs: Xs) -> T {
        xs.nth(index)
            .unwrap_or_else(|| precondition_violation("at", "index out of bounds"))
    }
}

impl<Xs, const N: usize> AtCImpl<Xs, N> for TupleTag
where
    Idx<N>: ToNat,
    Xs: HAt<NatOf<N>>,
{
    type Output = Xs::Output;

    #[inline]
    fn at_c(xs: Xs) -> Self::Output {
        xs.at_n()
    }
}

impl<Xs: HLast> LastImpl<Xs> for TupleTag {
    type Output = Xs::Output;

    #[inline]
    fn last(xs: Xs) -> Self::Output {
        xs.last()
    }
}

impl<Xs: Homogeneous<T>, T> DropImpl<Xs, T> for TupleTag {
    type Output = List<T>;

    fn drop(count: usize, xs: Xs) -> List<T> {
        buffer_of(xs).into_iter().skip(count).collect()
    }
}

impl<Xs, const N: usize> DropCImpl<Xs, N> for TupleTag
where
    Idx<N>: ToNat,
    Xs: HDrop<NatOf<N>>,
{
    type Output = Xs::Output;

    #[inline]
    fn drop_c(xs: Xs) -> Self::Output {
        xs.drop_n()
    }
}

impl<Xs, T, P> DropWhileImpl<Xs, T, P> for TupleTag
where
    Xs: Homogeneous<T>,
    P: for<'a> Func1<&'a T, Output = bool>,
{
    type Output = List<T>;

    fn drop_while(xs: Xs, mut pred: P) -> List<T> {
        buffer_of(xs)
            .into_iter()
            .skip_while(|element| pred.call1(element))
            .collect()
    }
}

// =============================================================================
// Searchable
// =============================================================================

/// `any_of` as a left fold: once an element matched, the predicate is not
/// called again.
#[derive(Clone, Copy, Debug)]
pub struct AnyStep<P>(P);

impl<X, P> Func2<bool, X> for AnyStep<P>
where
    P: for<'a> Func1<&'a X, Output = bool>,
{
    type Output = bool;

    #[inline]
    fn call2(&mut self, found: bool, element: X) -> bool {
        found || self.0.call1(&element)
    }
}

impl<Xs, P> AnyOfImpl<Xs, P> for TupleTag
where
    Xs: HFoldl<bool, AnyStep<P>, Output = bool>,
{
    #[inline]
    fn any_of(xs: Xs, pred: P) -> bool {
        xs.foldl_with(false, &mut AnyStep(pred))
    }
}

impl<Xs, T, P> FindIfImpl<Xs, T, P> for TupleTag
where
    Xs: Homogeneous<T>,
    P: for<'a> Func1<&'a T, Output = bool>,
{
    fn find_if(xs: Xs, mut pred: P) -> Option<T> {
        buffer_of(xs).into_iter().find(|element| pred.call1(element))
    }
}

// =============================================================================
// Sequence
// =============================================================================

impl<Args: IntoHList> MakeImpl<Args> for TupleTag {
    type Output = Args::HList;

    #[inline]
    fn make(args: Args) -> Self::Output {
        args.into_hlist()
    }
}

impl<Xs, T, P> SortByImpl<Xs, T, P> for TupleTag
where
    Xs: Homogeneous<T>,
    P: for<'a> Func2<&'a T, &'a T, Output = bool>,
{
    fn sort_by(mut pred: P, xs: Xs) -> Xs {
        let mut elements = buffer_of(xs);
        elements.sort_by(|left, right| {
            if pred.call2(left, right) {
                Ordering::Less
            } else if pred.call2(right, left) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        Xs::refill(&mut elements.into_iter())
    }
}

impl<Xs, T, P> GroupByImpl<Xs, T, P> for TupleTag
where
    Xs: Homogeneous<T>,
    P: for<'a> Func2<&'a T, &'a T, Output = bool>,
{
    fn group_by(mut pred: P, xs: Xs) -> List<List<T>> {
        let mut groups: Vec<List<T>> = Vec::new();
        let mut run: Buffer<T> = Buffer::new();
        for element in buffer_of(xs) {
            let continues = run.first().is_none_or(|first| pred.call2(first, &element));
            if !continues {
                groups.push(std::mem::take(&mut run).into_iter().collect());
            }
            run.push(element);
        }
        if !run.is_empty() {
            groups.push(run.into_iter().collect());
        }
        groups.into_iter().collect()
    }
}

impl<Xs, T> PermutationsImpl<Xs, T> for TupleTag
where
    Xs: Homogeneous<T>,
    T: Clone,
{
    /// Heap's algorithm: every permutation differs from the previous one by
    /// a single swap.
    fn permutations(xs: Xs) -> List<Xs> {
        let mut elements = buffer_of(xs);
        let length = elements.len();
        let mut counters: Buffer<usize> = std::iter::repeat_n(0, length).collect();
        let mut found = vec![Xs::refill(&mut elements.iter().cloned())];
        let mut position = 1;
        while position < length {
            if counters[position] < position {
                let other = if position % 2 == 0 { 0 } else { counters[position] };
                elements.swap(other, position);
                found.push(Xs::refill(&mut elements.iter().cloned()));
                counters[position] += 1;
                position = 1;
            } else {
                counters[position] = 0;
                position += 1;
            }
        }
        found.into_iter().collect()
    }
}

impl<Xss> ZipShortestImpl<Xss> for TupleTag
where
    Xss: MinLen + ZipN<<Xss as MinLen>::Len>,
{
    type Output = <Xss as ZipN<<Xss as MinLen>::Len>>::Output;

    #[inline]
    fn zip_shortest(xss: Xss) -> Self::Output {
        xss.zip_n()
    }
}

impl<Xss> ZipUnsafeImpl<Xss> for TupleTag
where
    Xss: CommonLen + ZipN<<Xss as CommonLen>::Len>,
{
    type Output = <Xss as ZipN<<Xss as CommonLen>::Len>>::Output;

    #[inline]
    fn zip_unsafe(xss: Xss) -> Self::Output {
        xss.zip_n()
    }
}

impl<G, Seed: Unfoldl<G>> UnfoldlImpl<G, Seed> for TupleTag {
    type Output = Seed::Output;

    #[inline]
    fn unfoldl(mut generator: G, seed: Seed) -> Self::Output {
        seed.unfoldl_with(&mut generator)
    }
}

impl<G, Seed: Unfoldr<G>> UnfoldrImpl<G, Seed> for TupleTag {
    type Output = Seed::Output;

    #[inline]
    fn unfoldr(mut generator: G, seed: Seed) -> Self::Output {
        seed.unfoldr_with(&mut generator)
    }
}

// =============================================================================
// Functor and conversion
// =============================================================================

impl<Xs: HMap<F>, F> TransformImpl<Xs, F> for TupleTag {
    type Output = Xs::Output;

    #[inline]
    fn transform(xs: Xs, mut f: F) -> Self::Output {
        xs.map_with(&mut f)
    }
}

/// Right fold prepending every element to the empty tuple.
impl<Xs> ToImpl<Xs> for TupleTag
where
    Xs: Tagged,
    TagOf<Xs>: FoldrImpl<Xs, HNil, Prepend>,
{
    type Output = <TagOf<Xs> as FoldrImpl<Xs, HNil, Prepend>>::Output;

    #[inline]
    fn to(xs: Xs) -> Self::Output {
        <TagOf<Xs> as FoldrImpl<Xs, HNil, Prepend>>::foldr(xs, HNil, Prepend)
    }
}
