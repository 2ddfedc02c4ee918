//! Sequence: Iterable, Foldable and Searchable structures of compile-time
//! length that can be built with `make`.
//!
//! Tuples are the sequence of this crate. Operations that keep the shape of
//! their input (`sort`, `reverse`, `zip`) return tuples; operations whose
//! result shape depends on element values (`group`, `permutations`) return a
//! [`List`].
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! assert_eq!(make::<TupleTag, _>((1, 'a')), tuple![1, 'a']);
//! assert_eq!(sort(tuple![3, 1, 2]), tuple![1, 2, 3]);
//! assert_eq!(reverse(tuple![1, 'a', "b"]), tuple!["b", 'a', 1]);
//! assert_eq!(group(tuple![1, 1, 2]), list![list![1, 1], list![2]]);
//! assert_eq!(
//!     zip(tuple![tuple![1, 2], tuple!['a', 'b', 'c']]),
//!     tuple![tuple![1, 'a'], tuple![2, 'b']],
//! );
//! ```

use crate::core::concept::{Iterable, Sequence};
use crate::core::function::{Equal, Flip, Func1, FuncN, Less};
use crate::core::{Tag, TagOf, Tagged, require_models};
use crate::data::{HAppend, HCons, HConcat, HFoldl, HList, HMap, HNil, IntoTuple, List, Prepend};

// =============================================================================
// Dispatch traits
// =============================================================================

/// Construction of a sequence from a flat Rust tuple of elements.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `make` from `{Args}`",
    note = "Sequence requires `make`; runtime-sized containers are not sequences"
)]
pub trait MakeImpl<Args>: Tag {
    /// The sequence built.
    type Output;

    /// Builds a sequence holding the elements of `args`, in order.
    fn make(args: Args) -> Self::Output;
}

/// Stable sort under a strict weak order.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `sort_by` for `{Xs}` with elements of type `{T}`",
    note = "sorting needs elements of a single type and a predicate on references"
)]
pub trait SortByImpl<Xs, T, P>: Tag {
    /// Returns `xs` sorted by `pred`.
    fn sort_by(pred: P, xs: Xs) -> Xs;
}

/// Grouping of adjacent equivalent elements.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `group_by` for `{Xs}` with elements of type `{T}`"
)]
pub trait GroupByImpl<Xs, T, P>: Tag {
    /// Returns the maximal runs of `xs` equivalent to their first element.
    fn group_by(pred: P, xs: Xs) -> List<List<T>>;
}

/// All orderings of the elements.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `permutations` for `{Xs}` with elements of type `{T}`"
)]
pub trait PermutationsImpl<Xs, T>: Tag {
    /// Returns every permutation of `xs`.
    fn permutations(xs: Xs) -> List<Xs>;
}

/// Zip truncated to the shortest input.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `zip_shortest` for `{Xss}`",
    note = "every element of `xss` must itself be a sequence"
)]
pub trait ZipShortestImpl<Xss>: Tag {
    /// The rows of the zip.
    type Output;

    /// Zips the sequences of `xss`.
    fn zip_shortest(xss: Xss) -> Self::Output;
}

/// Zip of inputs of equal length.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `zip_unsafe` for `{Xss}`",
    note = "`zip_unsafe` needs sequences of equal length; use `zip_shortest` otherwise"
)]
pub trait ZipUnsafeImpl<Xss>: Tag {
    /// The rows of the zip.
    type Output;

    /// Zips the sequences of `xss`.
    fn zip_unsafe(xss: Xss) -> Self::Output;
}

/// Construction from a seed, last element first.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot unfold the seed `{Seed}` with `{G}`",
    note = "the generator answers a stop value or a `(next_seed, element)` step"
)]
pub trait UnfoldlImpl<G, Seed>: Tag {
    /// The structure built.
    type Output;

    /// Unfolds `seed` with `generator`.
    fn unfoldl(generator: G, seed: Seed) -> Self::Output;
}

/// Construction from a seed, first element first.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot unfold the seed `{Seed}` with `{G}`",
    note = "the generator answers a stop value or an `(element, next_seed)` step"
)]
pub trait UnfoldrImpl<G, Seed>: Tag {
    /// The structure built.
    type Output;

    /// Unfolds `seed` with `generator`.
    fn unfoldr(generator: G, seed: Seed) -> Self::Output;
}

// =============================================================================
// Function adapters
// =============================================================================

/// Calls a function with the elements of a tuple row as its arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spread<F>(pub F);

impl<Row, F> Func1<Row> for Spread<F>
where
    Row: IntoTuple,
    F: Clone + FuncN<Row::Tuple>,
{
    type Output = F::Output;

    #[inline]
    fn call1(&mut self, row: Row) -> Self::Output {
        self.0.clone().call_n(row.into_tuple())
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Builds a sequence of data type `Tg` from the elements of `args`.
#[inline]
pub fn make<Tg, Args>(args: Args) -> <Tg as MakeImpl<Args>>::Output
where
    Tg: MakeImpl<Args>,
{
    require_models!(Sequence, Tg, "make<S>(args) requires S to be a Sequence");
    Tg::make(args)
}

/// `xs` with `element` in front.
#[inline]
pub fn prepend<Xs, X>(xs: Xs, element: X) -> HCons<X, Xs>
where
    Xs: HList + Tagged,
{
    require_models!(Sequence, TagOf<Xs>, "prepend(xs, x) requires xs to be a Sequence");
    xs.prepend(element)
}

/// `xs` with `element` at the end.
#[inline]
pub fn append<Xs, X>(xs: Xs, element: X) -> Xs::Output
where
    Xs: HAppend<X> + Tagged,
{
    require_models!(Sequence, TagOf<Xs>, "append(xs, x) requires xs to be a Sequence");
    xs.append(element)
}

/// `xs` followed by `ys`.
#[inline]
pub fn concat<Xs, Ys>(xs: Xs, ys: Ys) -> Xs::Output
where
    Xs: HConcat<Ys> + Tagged,
    Ys: HList,
{
    require_models!(Sequence, TagOf<Xs>, "concat(xs, ys) requires xs to be a Sequence");
    xs.concat(ys)
}

/// `xs` in reverse order.
#[inline]
pub fn reverse<Xs>(xs: Xs) -> <Xs as HFoldl<HNil, Flip<Prepend>>>::Output
where
    Xs: HFoldl<HNil, Flip<Prepend>> + Tagged,
{
    require_models!(Sequence, TagOf<Xs>, "reverse(xs) requires xs to be a Sequence");
    xs.foldl_with(HNil, &mut Flip(Prepend))
}

// =============================================================================
// Sorting and grouping
// =============================================================================

/// `xs` sorted by the strict weak order `pred`; equivalent elements keep
/// their relative order.
#[inline]
pub fn sort_by<P, Xs, T>(pred: P, xs: Xs) -> Xs
where
    Xs: Tagged,
    TagOf<Xs>: SortByImpl<Xs, T, P>,
{
    require_models!(Sequence, TagOf<Xs>, "sort_by(pred, xs) requires xs to be a Sequence");
    <TagOf<Xs> as SortByImpl<Xs, T, P>>::sort_by(pred, xs)
}

/// `xs` sorted by `<`.
#[inline]
pub fn sort<Xs, T>(xs: Xs) -> Xs
where
    Xs: Tagged,
    TagOf<Xs>: SortByImpl<Xs, T, Less>,
{
    sort_by(Less, xs)
}

/// Maximal runs of adjacent elements equivalent, under `pred`, to the first
/// element of their run.
#[inline]
pub fn group_by<P, Xs, T>(pred: P, xs: Xs) -> List<List<T>>
where
    Xs: Tagged,
    TagOf<Xs>: GroupByImpl<Xs, T, P>,
{
    require_models!(Sequence, TagOf<Xs>, "group_by(pred, xs) requires xs to be a Sequence");
    <TagOf<Xs> as GroupByImpl<Xs, T, P>>::group_by(pred, xs)
}

/// Maximal runs of equal adjacent elements.
#[inline]
pub fn group<Xs, T>(xs: Xs) -> List<List<T>>
where
    Xs: Tagged,
    TagOf<Xs>: GroupByImpl<Xs, T, Equal>,
{
    group_by(Equal, xs)
}

/// Every ordering of the elements of `xs`.
///
/// Distinct elements give `n!` distinct permutations; the empty tuple has
/// exactly one.
#[inline]
pub fn permutations<Xs, T>(xs: Xs) -> List<Xs>
where
    Xs: Tagged,
    TagOf<Xs>: PermutationsImpl<Xs, T>,
{
    require_models!(Sequence, TagOf<Xs>, "permutations(xs) requires xs to be a Sequence");
    <TagOf<Xs> as PermutationsImpl<Xs, T>>::permutations(xs)
}

// =============================================================================
// Zipping
// =============================================================================

/// Rows of the sequences in `xss`, as many as the shortest one has.
///
/// A single sequence zips to 1-tuples; no sequence zips to nothing.
#[inline]
pub fn zip_shortest<Xss>(xss: Xss) -> <TagOf<Xss> as ZipShortestImpl<Xss>>::Output
where
    Xss: Tagged,
    TagOf<Xss>: ZipShortestImpl<Xss>,
{
    require_models!(Sequence, TagOf<Xss>, "zip_shortest(xss) requires xss to be a Sequence");
    <TagOf<Xss> as ZipShortestImpl<Xss>>::zip_shortest(xss)
}

/// Same as [`zip_shortest`].
#[inline]
pub fn zip<Xss>(xss: Xss) -> <TagOf<Xss> as ZipShortestImpl<Xss>>::Output
where
    Xss: Tagged,
    TagOf<Xss>: ZipShortestImpl<Xss>,
{
    zip_shortest(xss)
}

/// Rows of sequences that all have the same length.
///
/// Sequences of different lengths do not type-check.
#[inline]
pub fn zip_unsafe<Xss>(xss: Xss) -> <TagOf<Xss> as ZipUnsafeImpl<Xss>>::Output
where
    Xss: Tagged,
    TagOf<Xss>: ZipUnsafeImpl<Xss>,
{
    require_models!(Sequence, TagOf<Xss>, "zip_unsafe(xss) requires xss to be a Sequence");
    <TagOf<Xss> as ZipUnsafeImpl<Xss>>::zip_unsafe(xss)
}

/// [`zip_shortest`], with `f` applied to the elements of every row.
#[inline]
pub fn zip_shortest_with<F, Xss>(
    f: F,
    xss: Xss,
) -> <<TagOf<Xss> as ZipShortestImpl<Xss>>::Output as HMap<Spread<F>>>::Output
where
    Xss: Tagged,
    TagOf<Xss>: ZipShortestImpl<Xss>,
    <TagOf<Xss> as ZipShortestImpl<Xss>>::Output: HMap<Spread<F>>,
{
    zip_shortest(xss).map_with(&mut Spread(f))
}

/// [`zip_unsafe`], with `f` applied to the elements of every row.
#[inline]
pub fn zip_unsafe_with<F, Xss>(
    f: F,
    xss: Xss,
) -> <<TagOf<Xss> as ZipUnsafeImpl<Xss>>::Output as HMap<Spread<F>>>::Output
where
    Xss: Tagged,
    TagOf<Xss>: ZipUnsafeImpl<Xss>,
    <TagOf<Xss> as ZipUnsafeImpl<Xss>>::Output: HMap<Spread<F>>,
{
    zip_unsafe(xss).map_with(&mut Spread(f))
}

// =============================================================================
// Unfolding
// =============================================================================

/// Builds a structure of data type `Tg` from `seed`; each step of
/// `generator` gives the next seed and an element that goes after
/// everything unfolded from that seed.
#[inline]
pub fn unfoldl<Tg, G, Seed>(generator: G, seed: Seed) -> <Tg as UnfoldlImpl<G, Seed>>::Output
where
    Tg: UnfoldlImpl<G, Seed>,
{
    require_models!(Iterable, Tg, "unfoldl<S>(g, seed) requires S to be Iterable");
    Tg::unfoldl(generator, seed)
}

/// Builds a structure of data type `Tg` from `seed`; each step of
/// `generator` gives an element and the seed for the elements after it.
#[inline]
pub fn unfoldr<Tg, G, Seed>(generator: G, seed: Seed) -> <Tg as UnfoldrImpl<G, Seed>>::Output
where
    Tg: UnfoldrImpl<G, Seed>,
{
    require_models!(Iterable, Tg, "unfoldr<S>(g, seed) requires S to be Iterable");
    Tg::unfoldr(generator, seed)
}
