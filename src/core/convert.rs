//! Structural conversion between containers.
//!
//! `to::<Target>(xs)` rebuilds a Foldable `xs` as a value of the `Target`
//! data type with a right fold. Each element is prepended (tuples, lists) or
//! inserted (sets) into the target's empty value. For order-preserving
//! targets the left-to-right order of `xs` is kept.
//!
//! # Examples
//!
//! ```rust
//! use tagfold::core::to;
//! use tagfold::data::{just, ListTag, SetTag, TupleTag};
//! use tagfold::{list, set, tuple};
//!
//! assert_eq!(to::<TupleTag, _>(just('x')), tuple!['x']);
//! assert_eq!(to::<ListTag, _>(tuple![1, 2, 3]), list![1, 2, 3]);
//! assert_eq!(to::<SetTag, _>([1, 2, 1]), set![2, 1]);
//! ```

use super::dispatch::require_models;
use super::tag::{Tag, TagOf, Tagged};
use crate::core::concept::Foldable;

/// Conversion of `Xs` into the data type `Self`.
#[diagnostic::on_unimplemented(
    message = "`{Xs}` cannot be converted to `{Self}`",
    label = "the source must be Foldable with elements the target can hold",
    note = "list and set targets need a homogeneous source"
)]
pub trait ToImpl<Xs>: Tag {
    /// The converted value.
    type Output;

    /// Converts `xs`.
    fn to(xs: Xs) -> Self::Output;
}

/// Converts `xs` to the data type `Target`.
///
/// Requires `xs` to be Foldable.
#[inline]
pub fn to<Target, Xs>(xs: Xs) -> <Target as ToImpl<Xs>>::Output
where
    Xs: Tagged,
    Target: ToImpl<Xs>,
{
    require_models!(Foldable, TagOf<Xs>, "to<T>(xs) requires xs to be Foldable");
    Target::to(xs)
}

/// The single element type of a homogeneous container.
///
/// Runtime containers (lists, sets, strings, arrays) implement it directly.
/// Tuples implement it when every element has the same type, and `Just<T>`
/// always does.
pub trait Elements {
    /// The element type.
    type Item;
}
