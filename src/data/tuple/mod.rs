//! Heterogeneous, fixed-length tuples.
//!
//! A tuple is a cons list built from [`HNil`] and [`HCons`]. Its length is
//! part of its type ([`HList::Len`]), so it is known without looking at the
//! elements, and every position may hold a different type.
//!
//! The [`tuple!`](crate::tuple) macro builds values, [`Tuple!`](crate::Tuple)
//! spells their types and [`tuple_pat!`](crate::tuple_pat) destructures them:
//!
//! ```rust
//! use tagfold::{tuple, tuple_pat, Tuple};
//! use tagfold::data::HList;
//!
//! let xs: Tuple![i32, char, &str] = tuple![1, 'a', "b"];
//! assert_eq!(<Tuple![i32, char, &str] as HList>::LEN, 3);
//!
//! let tuple_pat![number, letter, text] = xs;
//! assert_eq!((number, letter, text), (1, 'a', "b"));
//! ```
//!
//! Tuples model every concept of this crate: Foldable, Iterable, Searchable,
//! Sequence, Comparable, Orderable and Functor.
//!
//! # Comparison
//!
//! Two tuples compare element-wise from left to right. Equality first
//! compares lengths and answers `false` on a mismatch without looking at any
//! element, so tuples of different lengths are comparable:
//!
//! ```rust
//! use tagfold::tuple;
//!
//! assert_eq!(tuple![1, 'a'], tuple![1, 'a']);
//! assert_ne!(tuple![1, 'a'], tuple![1]);
//! assert!(tuple![1, 2] < tuple![1, 3]);
//! assert!(tuple![1] < tuple![1, 0]);
//! ```

mod access;
mod fold;
mod instances;
mod unfold;
mod zip;

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::core::function::Func2;
use crate::core::nat::{Nat, S, Z};
use crate::core::{Elements, Tagged, precondition_violation};

pub use access::{HAt, HDrop, HLast};
pub use fold::{HFoldl, HFoldl1, HFoldr, HFoldr1, HMap};
pub use instances::TupleTag;
pub use unfold::{Unfoldl, UnfoldlStep, Unfoldr, UnfoldrStep};
pub use zip::{CommonLen, MinLen, SameLen, Transpose, ZipN};

/// Builds a tuple value.
#[macro_export]
macro_rules! tuple {
    () => { $crate::data::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::data::HCons { head: $head, tail: $crate::tuple!($($tail),*) }
    };
}

/// Spells a tuple type.
#[macro_export]
macro_rules! Tuple {
    () => { $crate::data::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::data::HCons<$head, $crate::Tuple!($($tail),*)>
    };
}

/// Destructures a tuple value.
#[macro_export]
macro_rules! tuple_pat {
    () => { $crate::data::HNil };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::data::HCons { head: $head, tail: $crate::tuple_pat!($($tail),*) }
    };
}

// =============================================================================
// Core types
// =============================================================================

/// The empty tuple.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HNil;

/// A tuple with first element `head` and remaining elements `tail`.
#[derive(Clone, Copy, Default, Hash)]
pub struct HCons<H, T> {
    /// The first element.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

/// A tuple type.
pub trait HList: Sized {
    /// The length as a type-level numeral.
    type Len: Nat;

    /// The length.
    const LEN: usize = <Self::Len as Nat>::VALUE;

    /// Prepends `element`.
    #[inline]
    fn prepend<X>(self, element: X) -> HCons<X, Self> {
        HCons {
            head: element,
            tail: self,
        }
    }
}

impl HList for HNil {
    type Len = Z;
}

impl<H, T: HList> HList for HCons<H, T> {
    type Len = S<T::Len>;
}

impl Tagged for HNil {
    type Tag = TupleTag;
}

impl<H, T> Tagged for HCons<H, T> {
    type Tag = TupleTag;
}

/// Prepends an element to a tuple: `(x, xs) -> (x, xs...)`.
///
/// `to::<TupleTag>` right-folds a structure with this function into `HNil`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Prepend;

impl<X, L: HList> Func2<X, L> for Prepend {
    type Output = HCons<X, L>;

    #[inline]
    fn call2(&mut self, element: X, list: L) -> HCons<X, L> {
        list.prepend(element)
    }
}

/// Appends an element at the end of a tuple.
pub trait HAppend<X>: HList {
    /// The extended tuple.
    type Output: HList;

    /// Appends `element`.
    fn append(self, element: X) -> Self::Output;
}

impl<X> HAppend<X> for HNil {
    type Output = HCons<X, Self>;

    #[inline]
    fn append(self, element: X) -> Self::Output {
        HCons {
            head: element,
            tail: self,
        }
    }
}

impl<H, T: HAppend<X>, X> HAppend<X> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    #[inline]
    fn append(self, element: X) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.append(element),
        }
    }
}

/// Concatenates two tuples.
pub trait HConcat<Ys: HList>: HList {
    /// The concatenated tuple.
    type Output: HList;

    /// Returns `self` followed by `ys`.
    fn concat(self, ys: Ys) -> Self::Output;
}

impl<Ys: HList> HConcat<Ys> for HNil {
    type Output = Ys;

    #[inline]
    fn concat(self, ys: Ys) -> Ys {
        ys
    }
}

impl<H, T: HConcat<Ys>, Ys: HList> HConcat<Ys> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    #[inline]
    fn concat(self, ys: Ys) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.concat(ys),
        }
    }
}

// =============================================================================
// Flat Rust tuples
// =============================================================================

/// Conversion of a tuple into the equivalent flat Rust tuple.
///
/// This is what `unpack` hands to its function, so it exists for lengths
/// up to twelve.
pub trait IntoTuple {
    /// The flat tuple: `()`, `(A,)`, `(A, B)`, ...
    type Tuple;

    /// Flattens `self`.
    fn into_tuple(self) -> Self::Tuple;
}

/// Conversion of a flat Rust tuple into a tuple of this crate.
pub trait IntoHList {
    /// The equivalent tuple.
    type HList: HList;

    /// Converts `self`.
    fn into_hlist(self) -> Self::HList;
}

macro_rules! flat_tuple {
    ($($element:ident),*) => {
        impl<$($element),*> IntoTuple for $crate::Tuple![$($element),*] {
            type Tuple = ($($element,)*);

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn into_tuple(self) -> Self::Tuple {
                let $crate::tuple_pat![$($element),*] = self;
                ($($element,)*)
            }
        }

        impl<$($element),*> IntoHList for ($($element,)*) {
            type HList = $crate::Tuple![$($element),*];

            #[inline]
            #[allow(non_snake_case)]
            fn into_hlist(self) -> Self::HList {
                let ($($element,)*) = self;
                $crate::tuple![$($element),*]
            }
        }
    };
}

flat_tuple!();
flat_tuple!(A);
flat_tuple!(A, B);
flat_tuple!(A, B, C);
flat_tuple!(A, B, C, D);
flat_tuple!(A, B, C, D, E);
flat_tuple!(A, B, C, D, E, F);
flat_tuple!(A, B, C, D, E, F, G);
flat_tuple!(A, B, C, D, E, F, G, H);
flat_tuple!(A, B, C, D, E, F, G, H, I);
flat_tuple!(A, B, C, D, E, F, G, H, I, J);
flat_tuple!(A, B, C, D, E, F, G, H, I, J, K);
flat_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

// =============================================================================
// Homogeneous tuples
// =============================================================================

/// Inline storage used when a tuple's elements are handled at run time.
pub(crate) type Buffer<T> = SmallVec<[T; 8]>;

/// A tuple whose elements all have type `T`.
///
/// Operations whose result shape depends on element values (sorting,
/// grouping, runtime indexing) work on homogeneous tuples only. The empty
/// tuple is homogeneous for every `T`.
pub trait Homogeneous<T>: HList {
    /// Moves the elements, in order, to the end of `buffer`.
    fn drain_into(self, buffer: &mut Buffer<T>);

    /// Builds a tuple of this type from the next `LEN` elements of `elements`.
    ///
    /// # Panics
    ///
    /// Panics if `elements` runs out first.
    fn refill<I: Iterator<Item = T>>(elements: &mut I) -> Self;

    /// Returns the element at `index`, if any.
    fn nth(self, index: usize) -> Option<T>;
}

impl<T> Homogeneous<T> for HNil {
    #[inline]
    fn drain_into(self, _buffer: &mut Buffer<T>) {}

    #[inline]
    fn refill<I: Iterator<Item = T>>(_elements: &mut I) -> Self {
        Self
    }

    #[inline]
    fn nth(self, _index: usize) -> Option<T> {
        None
    }
}

impl<T, Tail: Homogeneous<T>> Homogeneous<T> for HCons<T, Tail> {
    #[inline]
    fn drain_into(self, buffer: &mut Buffer<T>) {
        buffer.push(self.head);
        self.tail.drain_into(buffer);
    }

    fn refill<I: Iterator<Item = T>>(elements: &mut I) -> Self {
        let Some(head) = elements.next() else {
            precondition_violation("refill", "fewer elements than the tuple length")
        };
        Self {
            head,
            tail: Tail::refill(elements),
        }
    }

    #[inline]
    fn nth(self, index: usize) -> Option<T> {
        if index == 0 {
            Some(self.head)
        } else {
            self.tail.nth(index - 1)
        }
    }
}

impl<H, T: Homogeneous<H>> Elements for HCons<H, T> {
    type Item = H;
}

/// Moves the elements of a homogeneous tuple into a buffer.
pub(crate) fn buffer_of<T, Xs: Homogeneous<T>>(xs: Xs) -> Buffer<T> {
    let mut buffer = Buffer::with_capacity(Xs::LEN);
    xs.drain_into(&mut buffer);
    buffer
}

// =============================================================================
// Comparison
// =============================================================================

impl<H, T> PartialEq<HNil> for HCons<H, T> {
    #[inline]
    fn eq(&self, _other: &HNil) -> bool {
        false
    }
}

impl<H, T> PartialEq<HCons<H, T>> for HNil {
    #[inline]
    fn eq(&self, _other: &HCons<H, T>) -> bool {
        false
    }
}

impl<H1, T1, H2, T2> PartialEq<HCons<H2, T2>> for HCons<H1, T1>
where
    H1: PartialEq<H2>,
    T1: PartialEq<T2> + HList,
    T2: HList,
{
    fn eq(&self, other: &HCons<H2, T2>) -> bool {
        T1::LEN == T2::LEN && self.head == other.head && self.tail == other.tail
    }
}

impl<H: Eq, T: Eq + HList> Eq for HCons<H, T> {}

impl<H, T> PartialOrd<HNil> for HCons<H, T> {
    #[inline]
    fn partial_cmp(&self, _other: &HNil) -> Option<Ordering> {
        Some(Ordering::Greater)
    }
}

impl<H, T> PartialOrd<HCons<H, T>> for HNil {
    #[inline]
    fn partial_cmp(&self, _other: &HCons<H, T>) -> Option<Ordering> {
        Some(Ordering::Less)
    }
}

impl<H1, T1, H2, T2> PartialOrd<HCons<H2, T2>> for HCons<H1, T1>
where
    H1: PartialOrd<H2>,
    T1: PartialOrd<T2> + HList,
    T2: HList,
{
    fn partial_cmp(&self, other: &HCons<H2, T2>) -> Option<Ordering> {
        match self.head.partial_cmp(&other.head) {
            Some(Ordering::Equal) => self.tail.partial_cmp(&other.tail),
            ordering => ordering,
        }
    }
}

impl<H: Ord, T: Ord + HList> Ord for HCons<H, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head
            .cmp(&other.head)
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

// =============================================================================
// Formatting
// =============================================================================

mod debug {
    use std::fmt;

    use super::{HCons, HNil};

    pub trait DebugEntries {
        fn entries(&self, tuple: &mut fmt::DebugTuple<'_, '_>);
    }

    impl DebugEntries for HNil {
        fn entries(&self, _tuple: &mut fmt::DebugTuple<'_, '_>) {}
    }

    impl<H: fmt::Debug, T: DebugEntries> DebugEntries for HCons<H, T> {
        fn entries(&self, tuple: &mut fmt::DebugTuple<'_, '_>) {
            tuple.field(&self.head);
            self.tail.entries(tuple);
        }
    }
}

impl fmt::Debug for HNil {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl<H: fmt::Debug, T: debug::DebugEntries> fmt::Debug for HCons<H, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("");
        tuple.field(&self.head);
        self.tail.entries(&mut tuple);
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tuple, tuple, tuple_pat};
    use rstest::rstest;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(Tuple![u8, char], HCons<u8, HCons<char, HNil>>);
    assert_type_eq_all!(<(u8, char) as IntoHList>::HList, Tuple![u8, char]);
    assert_impl_all!(Tuple![i32, i32, i32]: Homogeneous<i32>, Elements);
    assert_not_impl_any!(Tuple![i32, char]: Homogeneous<i32>, Elements);

    #[rstest]
    fn length_is_part_of_the_type() {
        assert_eq!(HNil::LEN, 0);
        assert_eq!(<Tuple![u8, u16, u32]>::LEN, 3);
    }

    #[rstest]
    fn flat_tuple_round_trip_keeps_order() {
        let flat = tuple![1, 'b', "c"].into_tuple();
        assert_eq!(flat, (1, 'b', "c"));
        assert_eq!(flat.into_hlist(), tuple![1, 'b', "c"]);
    }

    #[rstest]
    fn append_and_concat_extend_at_the_end() {
        assert_eq!(tuple![1, 2].append('x'), tuple![1, 2, 'x']);
        assert_eq!(tuple![1].concat(tuple!['a', "b"]), tuple![1, 'a', "b"]);
        assert_eq!(HNil.concat(tuple![0]), tuple![0]);
    }

    #[rstest]
    fn pattern_macro_destructures_in_order() {
        let tuple_pat![first, _, third] = tuple![1, 2, 3];
        assert_eq!((first, third), (1, 3));
    }

    #[rstest]
    #[case(tuple![1, 2, 3], tuple![1, 2, 3], true)]
    #[case(tuple![1, 2, 3], tuple![1, 2, 4], false)]
    fn equality_compares_each_element(
        #[case] left: Tuple![i32, i32, i32],
        #[case] right: Tuple![i32, i32, i32],
        #[case] expected: bool,
    ) {
        assert_eq!(left == right, expected);
    }

    #[rstest]
    fn equality_checks_length_before_elements() {
        assert_ne!(tuple![1, 2], tuple![1, 2, 3]);
        assert_ne!(tuple![1], HNil);
        assert_ne!(HNil, tuple![1]);
        assert_eq!(tuple![1_u8, 'a'], tuple![1_u8, 'a']);
    }

    #[rstest]
    fn ordering_is_lexicographic() {
        assert!(tuple![1, 2] < tuple![1, 3]);
        assert!(tuple![0, 9] < tuple![1, 0]);
        assert!(HNil < tuple![0]);
        assert!(tuple![1, 2] > tuple![1]);
        assert_eq!(tuple![2, 1].cmp(&tuple![1, 2]), Ordering::Greater);
    }

    #[rstest]
    fn debug_looks_like_a_rust_tuple() {
        assert_eq!(format!("{:?}", tuple![1, 'a', "b"]), r#"(1, 'a', "b")"#);
        assert_eq!(format!("{:?}", tuple![1]), "(1,)");
        assert_eq!(format!("{HNil:?}"), "()");
    }

    #[rstest]
    fn homogeneous_tuples_refill_in_order() {
        let mut elements = vec![7, 8, 9].into_iter();
        let rebuilt = <Tuple![i32, i32, i32]>::refill(&mut elements);
        assert_eq!(rebuilt, tuple![7, 8, 9]);
        assert_eq!(tuple![4, 5, 6].nth(1), Some(5));
        assert_eq!(tuple![4, 5, 6].nth(3), None);
    }

    #[rstest]
    #[should_panic(expected = "refill: precondition violated")]
    fn refill_panics_when_elements_run_out() {
        let mut elements = vec![1].into_iter();
        let _ = <Tuple![i32, i32]>::refill(&mut elements);
    }
}
