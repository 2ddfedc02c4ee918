//! Concrete data types and their tags.
//!
//! | Type | Tag | Concepts |
//! |---|---|---|
//! | [`HNil`], [`HCons`] (`tuple!`) | [`TupleTag`] | Sequence, Comparable, Orderable, Functor |
//! | [`Just`], [`Nothing`] | [`MaybeTag`] | Foldable, Searchable, Comparable, Orderable, Functor |
//! | [`List`] (`list!`) | [`ListTag`] | Iterable, Foldable, Searchable, Comparable, Orderable, Functor |
//! | [`Set`] (`set!`) | [`SetTag`] | Foldable, Searchable, Comparable |
//! | [`Str`] (`string!`) | [`StringTag`] | Iterable, Foldable, Searchable, Comparable, Orderable |
//! | `[T; N]` | [`ArrayTag`] | Foldable, Searchable, Comparable, Orderable, Functor |

mod array;
mod list;
mod maybe;
mod set;
mod string;
mod tuple;

pub use array::ArrayTag;
pub use list::{Cons, List, ListIntoIter, ListIter, ListTag};
pub use maybe::{
    FromJust, Just, Maybe, MaybeCase, MaybeTag, Nothing, Unwrapped, from_just, from_maybe,
    is_just, is_nothing, just, maybe, nothing,
};
pub use set::{Insert, Set, SetTag};
pub use string::{Str, StringTag};
pub use tuple::{
    CommonLen, HAppend, HAt, HConcat, HCons, HDrop, HFoldl, HFoldl1, HFoldr, HFoldr1, HLast,
    HList, HMap, HNil, Homogeneous, IntoHList, IntoTuple, MinLen, Prepend, SameLen, Transpose,
    TupleTag, Unfoldl, UnfoldlStep, Unfoldr, UnfoldrStep, ZipN,
};
