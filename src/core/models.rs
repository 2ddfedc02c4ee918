//! The concept-conformance checker.
//!
//! A concept is modeled by a tag when, for each of the concept's requirement
//! groups, at least one minimal complete definition is fully overridden by
//! the tag. Overrides are read from [`Tag::SLOTS`]; an operation missing
//! from the slot set is still at its default and does not count.
//!
//! The check is a `const fn`, so it can be used in static assertions as well
//! as at run time:
//!
//! ```rust
//! use tagfold::core::{models, concept::{Foldable, Sequence}};
//! use tagfold::data::{MaybeTag, TupleTag};
//!
//! const _: () = assert!(models::<Sequence, TupleTag>());
//!
//! // Maybe only supplies `unpack`, which is one of Foldable's alternatives.
//! assert!(models::<Foldable, MaybeTag>());
//! assert!(!models::<Sequence, MaybeTag>());
//! ```

use std::fmt;

use super::tag::Tag;

// =============================================================================
// Operations and slot sets
// =============================================================================

/// An overridable operation of some concept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `foldl(xs, state, f)`
    Foldl,
    /// `foldr(xs, state, f)`
    Foldr,
    /// `unpack(xs, f)`
    Unpack,
    /// `length(xs)`
    Length,
    /// `foldl1(xs, f)`
    Foldl1,
    /// `foldr1(xs, f)`
    Foldr1,
    /// `head(xs)`
    Head,
    /// `tail(xs)`
    Tail,
    /// `is_empty(xs)`
    IsEmpty,
    /// `at(n, xs)`
    At,
    /// `last(xs)`
    Last,
    /// `drop(n, xs)`
    Drop,
    /// `drop_while(xs, pred)`
    DropWhile,
    /// `find_if(xs, pred)`
    FindIf,
    /// `any_of(xs, pred)`
    AnyOf,
    /// `make::<T>(args)`
    Make,
    /// `equal(x, y)`
    Equal,
    /// `less(x, y)`
    Less,
    /// `transform(xs, f)`
    Transform,
}

impl Op {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::Foldl,
        Self::Foldr,
        Self::Unpack,
        Self::Length,
        Self::Foldl1,
        Self::Foldr1,
        Self::Head,
        Self::Tail,
        Self::IsEmpty,
        Self::At,
        Self::Last,
        Self::Drop,
        Self::DropWhile,
        Self::FindIf,
        Self::AnyOf,
        Self::Make,
        Self::Equal,
        Self::Less,
        Self::Transform,
    ];

    /// The name of the free function implementing this operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Foldl => "foldl",
            Self::Foldr => "foldr",
            Self::Unpack => "unpack",
            Self::Length => "length",
            Self::Foldl1 => "foldl1",
            Self::Foldr1 => "foldr1",
            Self::Head => "head",
            Self::Tail => "tail",
            Self::IsEmpty => "is_empty",
            Self::At => "at",
            Self::Last => "last",
            Self::Drop => "drop",
            Self::DropWhile => "drop_while",
            Self::FindIf => "find_if",
            Self::AnyOf => "any_of",
            Self::Make => "make",
            Self::Equal => "equal",
            Self::Less => "less",
            Self::Transform => "transform",
        }
    }

    const fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A set of operations, usable in constant expressions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slots(u32);

impl Slots {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a list of operations.
    #[must_use]
    pub const fn of(ops: &[Op]) -> Self {
        let mut bits = 0;
        let mut index = 0;
        while index < ops.len() {
            bits |= ops[index].bit();
            index += 1;
        }
        Self(bits)
    }

    /// Returns this set with `op` added.
    #[must_use]
    pub const fn with(self, op: Op) -> Self {
        Self(self.0 | op.bit())
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the operations of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if `op` is in the set.
    #[must_use]
    pub const fn contains(self, op: Op) -> bool {
        self.0 & op.bit() != 0
    }

    /// Returns `true` if every operation of `other` is in the set.
    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if the set has no operations.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of operations in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the operations of the set in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Op> {
        Op::ALL.into_iter().filter(move |op| self.contains(*op))
    }
}

impl fmt::Debug for Slots {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Slots {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for op in self.iter() {
            if first {
                first = false;
            } else {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{op}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Concepts
// =============================================================================

/// A named bundle of operations with one or more minimal complete definitions.
///
/// `REQUIRES` is a conjunction of groups. Each group is a disjunction of
/// alternatives, and an alternative is satisfied when all of its operations
/// are overridden. A concept refining another one repeats the other
/// concept's groups.
pub trait Concept: 'static {
    /// Name of the concept, used in diagnostics.
    const NAME: &'static str;

    /// Requirement groups.
    const REQUIRES: &'static [&'static [Slots]];
}

/// Checks a slot set against requirement groups.
#[must_use]
pub const fn satisfies(requires: &[&[Slots]], slots: Slots) -> bool {
    let mut group = 0;
    while group < requires.len() {
        let alternatives = requires[group];
        let mut found = false;
        let mut index = 0;
        while index < alternatives.len() {
            if slots.contains_all(alternatives[index]) {
                found = true;
                break;
            }
            index += 1;
        }
        if !found {
            return false;
        }
        group += 1;
    }
    true
}

/// Returns `true` if the tag `T` models the concept `C`.
#[must_use]
pub const fn models<C: Concept, T: Tag>() -> bool {
    satisfies(C::REQUIRES, T::SLOTS)
}

/// The operations that keep `slots` from satisfying `requires`.
///
/// For each unsatisfied group, the alternative closest to completion is
/// reported.
#[must_use]
pub const fn missing(requires: &[&[Slots]], slots: Slots) -> Slots {
    let mut result = Slots::EMPTY;
    let mut group = 0;
    while group < requires.len() {
        let alternatives = requires[group];
        let mut best = Slots::EMPTY;
        let mut best_len = usize::MAX;
        let mut index = 0;
        while index < alternatives.len() {
            let lacking = alternatives[index].difference(slots);
            if lacking.len() < best_len {
                best = lacking;
                best_len = lacking.len();
            }
            index += 1;
        }
        result = result.union(best);
        group += 1;
    }
    result
}

// =============================================================================
// Run-time introspection
// =============================================================================

/// The result of checking a tag against a concept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conformance {
    /// Name of the concept.
    pub concept: &'static str,
    /// Name of the tag.
    pub tag: &'static str,
    /// Whether the tag models the concept.
    pub modeled: bool,
    /// Operations the tag would have to override to model the concept.
    pub missing: Slots,
}

impl Conformance {
    /// Checks `T` against `C`.
    #[must_use]
    pub fn of<C: Concept, T: Tag>() -> Self {
        let report = Self {
            concept: C::NAME,
            tag: T::NAME,
            modeled: models::<C, T>(),
            missing: missing(C::REQUIRES, T::SLOTS),
        };
        tracing::debug!(
            concept = report.concept,
            tag = report.tag,
            modeled = report.modeled,
            missing = %report.missing,
            "checked concept conformance"
        );
        report
    }
}

/// A tag does not model a concept.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{tag}` does not model {concept}: missing {missing}")]
pub struct NotModeled {
    /// Name of the concept.
    pub concept: &'static str,
    /// Name of the tag.
    pub tag: &'static str,
    /// Operations left at their default.
    pub missing: Slots,
}

/// Requires `T` to model `C`.
///
/// # Errors
///
/// Returns [`NotModeled`] listing the operations `T` still has to override.
///
/// # Examples
///
/// ```rust
/// use tagfold::core::{require, concept::{Iterable, Sequence}};
/// use tagfold::data::ListTag;
///
/// assert!(require::<Iterable, ListTag>().is_ok());
///
/// let error = require::<Sequence, ListTag>().unwrap_err();
/// assert_eq!(error.to_string(), "`List` does not model Sequence: missing make");
/// ```
pub fn require<C: Concept, T: Tag>() -> Result<(), NotModeled> {
    let report = Conformance::of::<C, T>();
    if report.modeled {
        Ok(())
    } else {
        tracing::warn!(
            concept = report.concept,
            tag = report.tag,
            missing = %report.missing,
            "concept not modeled"
        );
        Err(NotModeled {
            concept: report.concept,
            tag: report.tag,
            missing: report.missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FOLDS: Slots = Slots::of(&[Op::Foldl, Op::Foldr]);
    const UNPACK: Slots = Slots::of(&[Op::Unpack]);
    const FOLDABLE_LIKE: &[&[Slots]] = &[&[FOLDS, UNPACK]];

    #[rstest]
    fn slots_contains_only_added_operations() {
        let slots = Slots::EMPTY.with(Op::Head).with(Op::Tail);
        assert!(slots.contains(Op::Head));
        assert!(slots.contains(Op::Tail));
        assert!(!slots.contains(Op::IsEmpty));
        assert_eq!(slots.len(), 2);
    }

    #[rstest]
    fn slots_display_lists_operation_names() {
        let slots = Slots::of(&[Op::Tail, Op::Head]);
        assert_eq!(slots.to_string(), "head, tail");
        assert_eq!(Slots::EMPTY.to_string(), "");
    }

    #[rstest]
    #[case(Slots::of(&[Op::Foldl, Op::Foldr]), true)]
    #[case(Slots::of(&[Op::Unpack]), true)]
    #[case(Slots::of(&[Op::Foldl]), false)]
    #[case(Slots::of(&[Op::Foldl, Op::Unpack, Op::Head]), true)]
    #[case(Slots::EMPTY, false)]
    fn either_alternative_satisfies_the_group(#[case] slots: Slots, #[case] expected: bool) {
        assert_eq!(satisfies(FOLDABLE_LIKE, slots), expected);
    }

    #[rstest]
    fn every_group_must_be_satisfied() {
        let requires: &[&[Slots]] = &[&[FOLDS, UNPACK], &[Slots::of(&[Op::Make])]];
        assert!(!satisfies(requires, UNPACK));
        assert!(satisfies(requires, UNPACK.with(Op::Make)));
    }

    #[rstest]
    fn missing_reports_closest_alternative() {
        let lacking = missing(FOLDABLE_LIKE, Slots::of(&[Op::Foldl]));
        assert_eq!(lacking, Slots::of(&[Op::Foldr]));
    }

    #[rstest]
    fn missing_is_empty_when_satisfied() {
        assert!(missing(FOLDABLE_LIKE, UNPACK).is_empty());
    }

    #[rstest]
    fn no_requirements_are_trivially_satisfied() {
        assert!(satisfies(&[], Slots::EMPTY));
    }
}
