//! Iterable: structures traversed one element at a time.
//!
//! The minimal complete definition is `head`, `tail` and `is_empty`. Indexing,
//! dropping and `last` follow from them, and so do Foldable and Searchable
//! for data types that do not provide their own.
//!
//! Compile-time sized structures also get compile-time variants: `at_c` and
//! `drop_c` take the index as a const generic, and for tuples the result
//! type depends on it.
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! let xs = tuple![1, 'b', "c"];
//! assert_eq!(head(xs), 1);
//! assert_eq!(at_c::<2, _>(xs), "c");
//! assert_eq!(drop_c::<1, _>(xs), tuple!['b', "c"]);
//! assert_eq!(at(1, list![5, 6, 7]), 6);
//! ```

use crate::core::concept::Iterable;
use crate::core::function::Not;
use crate::core::{Tag, TagOf, Tagged, require_models};

// =============================================================================
// Dispatch traits
// =============================================================================

/// First element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `head` for `{Xs}`",
    label = "`head` needs a non-empty Iterable structure",
    note = "Iterable requires `head`, `tail` and `is_empty`"
)]
pub trait HeadImpl<Xs>: Tag {
    /// The first element.
    type Output;

    /// Returns the first element of `xs`.
    fn head(xs: Xs) -> Self::Output;
}

/// Everything but the first element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `tail` for `{Xs}`",
    label = "`tail` needs a non-empty Iterable structure",
    note = "Iterable requires `head`, `tail` and `is_empty`"
)]
pub trait TailImpl<Xs>: Tag {
    /// The remaining structure.
    type Output;

    /// Returns `xs` without its first element.
    fn tail(xs: Xs) -> Self::Output;
}

/// Emptiness test.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `is_empty` for `{Xs}`",
    note = "Iterable requires `head`, `tail` and `is_empty`"
)]
pub trait IsEmptyImpl<Xs>: Tag {
    /// Whether `xs` has no elements.
    fn is_empty(xs: &Xs) -> bool;
}

/// Element at a runtime index.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `at` for `{Xs}` with elements of type `{T}`",
    note = "a runtime index needs elements of a single type; use `at_c` on heterogeneous tuples"
)]
pub trait AtImpl<Xs, T>: Tag {
    /// Returns the element at `index`.
    fn at(index: usize, xs: Xs) -> T;
}

/// Element at a compile-time index.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `at_c::<{N}>` for `{Xs}`",
    label = "the index may be past the end"
)]
pub trait AtCImpl<Xs, const N: usize>: Tag {
    /// The element type at `N`.
    type Output;

    /// Returns the element at `N`.
    fn at_c(xs: Xs) -> Self::Output;
}

/// Last element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `last` for `{Xs}`",
    label = "`last` needs a non-empty Iterable structure"
)]
pub trait LastImpl<Xs>: Tag {
    /// The last element.
    type Output;

    /// Returns the last element of `xs`.
    fn last(xs: Xs) -> Self::Output;
}

/// Removal of a runtime number of leading elements.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `drop` for `{Xs}` with elements of type `{T}`",
    note = "use `drop_c` on heterogeneous tuples"
)]
pub trait DropImpl<Xs, T>: Tag {
    /// The remaining structure.
    type Output;

    /// Drops the first `count` elements.
    fn drop(count: usize, xs: Xs) -> Self::Output;
}

/// Removal of a compile-time number of leading elements.
#[diagnostic::on_unimplemented(message = "`{Self}` provides no `drop_c::<{N}>` for `{Xs}`")]
pub trait DropCImpl<Xs, const N: usize>: Tag {
    /// The remaining structure.
    type Output;

    /// Drops the first `N` elements.
    fn drop_c(xs: Xs) -> Self::Output;
}

/// Removal of the longest prefix satisfying a predicate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `drop_while` for `{Xs}` with elements of type `{T}`"
)]
pub trait DropWhileImpl<Xs, T, P>: Tag {
    /// The remaining structure.
    type Output;

    /// Drops leading elements while `pred` holds.
    fn drop_while(xs: Xs, pred: P) -> Self::Output;
}

// =============================================================================
// Operations
// =============================================================================

/// The first element of `xs`.
///
/// # Panics
///
/// Panics on an empty runtime-sized structure. `head(tuple![])` does not
/// type-check.
#[inline]
pub fn head<Xs>(xs: Xs) -> <TagOf<Xs> as HeadImpl<Xs>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: HeadImpl<Xs>,
{
    require_models!(Iterable, TagOf<Xs>, "head(xs) requires xs to be Iterable");
    <TagOf<Xs> as HeadImpl<Xs>>::head(xs)
}

/// `xs` without its first element.
#[inline]
pub fn tail<Xs>(xs: Xs) -> <TagOf<Xs> as TailImpl<Xs>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: TailImpl<Xs>,
{
    require_models!(Iterable, TagOf<Xs>, "tail(xs) requires xs to be Iterable");
    <TagOf<Xs> as TailImpl<Xs>>::tail(xs)
}

/// Whether `xs` has no elements.
#[inline]
pub fn is_empty<Xs>(xs: &Xs) -> bool
where
    Xs: Tagged,
    TagOf<Xs>: IsEmptyImpl<Xs>,
{
    require_models!(Iterable, TagOf<Xs>, "is_empty(xs) requires xs to be Iterable");
    <TagOf<Xs> as IsEmptyImpl<Xs>>::is_empty(xs)
}

/// The element at `index`: the head of `index` successive tails.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
pub fn at<Xs, T>(index: usize, xs: Xs) -> T
where
    Xs: Tagged,
    TagOf<Xs>: AtImpl<Xs, T>,
{
    require_models!(Iterable, TagOf<Xs>, "at(n, xs) requires xs to be Iterable");
    <TagOf<Xs> as AtImpl<Xs, T>>::at(index, xs)
}

/// The element at the compile-time index `N`.
#[inline]
pub fn at_c<const N: usize, Xs>(xs: Xs) -> <TagOf<Xs> as AtCImpl<Xs, N>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: AtCImpl<Xs, N>,
{
    require_models!(Iterable, TagOf<Xs>, "at_c<n>(xs) requires xs to be Iterable");
    <TagOf<Xs> as AtCImpl<Xs, N>>::at_c(xs)
}

/// The last element of `xs`.
///
/// # Panics
///
/// Panics on an empty runtime-sized structure.
#[inline]
pub fn last<Xs>(xs: Xs) -> <TagOf<Xs> as LastImpl<Xs>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: LastImpl<Xs>,
{
    require_models!(Iterable, TagOf<Xs>, "last(xs) requires xs to be Iterable");
    <TagOf<Xs> as LastImpl<Xs>>::last(xs)
}

/// `xs` without its first `count` elements; empty when `count` is past the
/// end.
#[inline]
pub fn drop<Xs, T>(count: usize, xs: Xs) -> <TagOf<Xs> as DropImpl<Xs, T>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: DropImpl<Xs, T>,
{
    require_models!(Iterable, TagOf<Xs>, "drop(n, xs) requires xs to be Iterable");
    <TagOf<Xs> as DropImpl<Xs, T>>::drop(count, xs)
}

/// `xs` without its first `N` elements, `N` known at compile time.
#[inline]
pub fn drop_c<const N: usize, Xs>(xs: Xs) -> <TagOf<Xs> as DropCImpl<Xs, N>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: DropCImpl<Xs, N>,
{
    require_models!(Iterable, TagOf<Xs>, "drop_c<n>(xs) requires xs to be Iterable");
    <TagOf<Xs> as DropCImpl<Xs, N>>::drop_c(xs)
}

/// `xs` from its first element failing `pred` onwards.
#[inline]
pub fn drop_while<Xs, T, P>(xs: Xs, pred: P) -> <TagOf<Xs> as DropWhileImpl<Xs, T, P>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: DropWhileImpl<Xs, T, P>,
{
    require_models!(Iterable, TagOf<Xs>, "drop_while(xs, pred) requires xs to be Iterable");
    <TagOf<Xs> as DropWhileImpl<Xs, T, P>>::drop_while(xs, pred)
}

/// `xs` from its first element satisfying `pred` onwards.
#[inline]
pub fn drop_until<Xs, T, P>(
    xs: Xs,
    pred: P,
) -> <TagOf<Xs> as DropWhileImpl<Xs, T, Not<P>>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: DropWhileImpl<Xs, T, Not<P>>,
{
    drop_while(xs, Not(pred))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HNil, List, Str};
    use crate::{list, tuple};
    use rstest::rstest;

    #[rstest]
    fn head_and_tail_split_a_tuple() {
        let xs = tuple![1, 'b', "c"];
        assert_eq!(head(xs), 1);
        assert_eq!(tail(xs), tuple!['b', "c"]);
        assert!(!is_empty(&xs));
        assert!(is_empty(&HNil));
    }

    #[rstest]
    #[case(0, 10)]
    #[case(2, 30)]
    fn at_counts_from_zero(#[case] index: usize, #[case] expected: i32) {
        assert_eq!(at(index, tuple![10, 20, 30]), expected);
        assert_eq!(at(index, list![10, 20, 30]), expected);
    }

    #[rstest]
    #[should_panic(expected = "at: precondition violated")]
    fn at_past_the_end_panics() {
        let _: i32 = at(3, list![1, 2, 3]);
    }

    #[rstest]
    fn last_of_tuple_and_list() {
        assert_eq!(last(tuple![1, 'x', 2.5]), 2.5);
        assert_eq!(last(list![1, 2, 3]), 3);
        assert_eq!(last(Str::new("abc")), 'c');
    }

    #[rstest]
    #[case(0, list![1, 2, 3])]
    #[case(2, list![3])]
    #[case(5, list![])]
    fn drop_removes_a_prefix(#[case] count: usize, #[case] expected: List<i32>) {
        assert_eq!(drop(count, list![1, 2, 3]), expected);
        assert_eq!(drop(count, tuple![1, 2, 3]), expected);
    }

    #[rstest]
    fn drop_c_changes_the_tuple_type() {
        assert_eq!(drop_c::<2, _>(tuple![1, 'b', "c"]), tuple!["c"]);
        assert_eq!(drop_c::<4, _>(tuple![1, 'b', "c"]), HNil);
        assert_eq!(drop_c::<1, _>(list![1, 2]), list![2]);
    }

    #[rstest]
    fn drop_while_and_drop_until_are_complementary() {
        let small = |x: &i32| *x < 3;
        assert_eq!(drop_while(list![1, 2, 3, 1], small), list![3, 1]);
        assert_eq!(drop_until(list![1, 2, 3, 1], small), list![1, 2, 3, 1]);
        assert_eq!(drop_until(tuple![5, 4, 2, 1], small), list![2, 1]);
        assert_eq!(drop_while(Str::new("aab"), |c: &char| *c == 'a'), Str::new("b"));
    }
}
