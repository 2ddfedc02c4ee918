//! Concepts and their generic operations.
//!
//! Each concept module holds two things:
//!
//! - the dispatch traits (`FoldlImpl`, `HeadImpl`, ...) a data type's tag
//!   implements to provide an operation;
//! - the free functions (`foldl`, `head`, ...) that resolve the tag of their
//!   argument, check the concept when `check-models` is enabled, and call
//!   the tag's implementation.
//!
//! | Concept | Minimal complete definition | Module |
//! |---|---|---|
//! | Foldable | `foldl` + `foldr`, or `unpack` | [`foldable`] |
//! | Iterable | `head` + `tail` + `is_empty` | [`iterable`] |
//! | Searchable | `find_if` + `any_of` | [`searchable`] |
//! | Sequence | all of the above + `make` | [`sequence`] |
//! | Comparable, Orderable | `equal`, `less` | [`comparable`] |
//! | Functor | `transform` | [`functor`] |
//!
//! `sum` and `product` start from the [`Monoid`] identity of the numeric
//! wrappers [`Sum`] (`0`) and [`Product`] (`1`).

pub mod comparable;
pub mod foldable;
pub mod functor;
pub mod iterable;
mod monoid;
pub mod searchable;
mod semigroup;
pub mod sequence;
mod wrappers;

pub use comparable::{equal, greater, greater_equal, less, less_equal, max, min, not_equal};
pub use foldable::{
    FoldlImpl, Foldl1Impl, FoldrImpl, Foldr1Impl, LengthImpl, UnpackImpl, count, count_if, fold,
    fold1, foldl, foldl_m, foldl1, foldr, foldr_m, foldr1, for_each, fuse, length, maximum,
    maximum_by, minimum, minimum_by, product, reverse_fold, reverse_fold1, size, sum, unpack,
};
pub use functor::{TransformImpl, transform};
pub use iterable::{
    AtCImpl, AtImpl, DropCImpl, DropImpl, DropWhileImpl, HeadImpl, IsEmptyImpl, LastImpl,
    TailImpl, at, at_c, drop_c, drop_until, drop_while, head, is_empty, last, tail,
};
pub use monoid::Monoid;
pub use searchable::{
    AnyOfImpl, FindIfImpl, all_of, any_of, elem, find, find_if, none_of, subset,
};
pub use semigroup::Semigroup;
pub use sequence::{
    GroupByImpl, MakeImpl, PermutationsImpl, SortByImpl, UnfoldlImpl, UnfoldrImpl,
    ZipShortestImpl, ZipUnsafeImpl, append, concat, group, group_by, make, permutations,
    prepend, reverse, sort, sort_by, unfoldl, unfoldr, zip, zip_shortest, zip_shortest_with,
    zip_unsafe, zip_unsafe_with,
};
pub use wrappers::{Product, Sum};
