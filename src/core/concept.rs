//! Concept markers.
//!
//! Each marker names a concept and lists its minimal complete definitions.
//! They are used with [`models`](super::models()) and
//! [`require`](super::require()); the operations themselves live in
//! [`crate::typeclass`].

use super::models::{Concept, Op, Slots};

const FOLDABLE: &[Slots] = &[Slots::of(&[Op::Foldl, Op::Foldr]), Slots::of(&[Op::Unpack])];
const ITERABLE: &[Slots] = &[Slots::of(&[Op::Head, Op::Tail, Op::IsEmpty])];
const SEARCHABLE: &[Slots] = &[Slots::of(&[Op::FindIf, Op::AnyOf])];

/// Structures that can be reduced with left and right folds.
///
/// Minimal complete definition: (`foldl` and `foldr`) or `unpack`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Foldable;

impl Concept for Foldable {
    const NAME: &'static str = "Foldable";
    const REQUIRES: &'static [&'static [Slots]] = &[FOLDABLE];
}

/// Structures traversed through `head`, `tail` and `is_empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Iterable;

impl Concept for Iterable {
    const NAME: &'static str = "Iterable";
    const REQUIRES: &'static [&'static [Slots]] = &[ITERABLE];
}

/// Structures supporting predicate lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Searchable;

impl Concept for Searchable {
    const NAME: &'static str = "Searchable";
    const REQUIRES: &'static [&'static [Slots]] = &[SEARCHABLE];
}

/// Iterable, Foldable and Searchable structures of compile-time length that
/// can also be built with `make`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence;

impl Concept for Sequence {
    const NAME: &'static str = "Sequence";
    const REQUIRES: &'static [&'static [Slots]] =
        &[ITERABLE, FOLDABLE, SEARCHABLE, &[Slots::of(&[Op::Make])]];
}

/// Types with an equivalence relation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Comparable;

impl Concept for Comparable {
    const NAME: &'static str = "Comparable";
    const REQUIRES: &'static [&'static [Slots]] = &[&[Slots::of(&[Op::Equal])]];
}

/// Types with a strict total order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orderable;

impl Concept for Orderable {
    const NAME: &'static str = "Orderable";
    const REQUIRES: &'static [&'static [Slots]] = &[&[Slots::of(&[Op::Less])]];
}

/// Structures whose elements can be mapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Functor;

impl Concept for Functor {
    const NAME: &'static str = "Functor";
    const REQUIRES: &'static [&'static [Slots]] = &[&[Slots::of(&[Op::Transform])]];
}
