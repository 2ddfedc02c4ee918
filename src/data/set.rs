//! Unordered collections of distinct elements.
//!
//! A [`Set`] keeps its elements in a [`List`] and tells them apart with
//! `PartialEq` only, so elements need neither `Hash` nor `Ord`. Membership
//! is linear and equality quadratic.
//!
//! Whether `insert` grows a set depends on element values, so the storage is
//! the runtime-length [`List`] and not a tuple. The set only uses the list's
//! sequence operations (`cons`, iteration, folds); `List` itself does not
//! model Sequence, whose length is part of the type.
//!
//! ```rust
//! use tagfold::set;
//!
//! let xs = set![1, 2, 2, 3];
//! assert_eq!(xs.len(), 3);
//! assert_eq!(xs, set![3, 1, 2]);
//! ```

use std::fmt;

use static_assertions::const_assert;

use super::list::List;
use crate::core::concept::{Comparable, Foldable, Searchable};
use crate::core::function::{Func1, Func2};
use crate::core::{Elements, Op, Slots, Tag, TagOf, Tagged, ToImpl, models};
use crate::derive;
use crate::typeclass::{
    AnyOfImpl, FindIfImpl, FoldlImpl, Foldl1Impl, FoldrImpl, Foldr1Impl, LengthImpl,
};

/// Builds a [`Set`]; repeated elements are kept once.
#[macro_export]
macro_rules! set {
    () => { $crate::data::Set::new() };
    ($($element:expr),+ $(,)?) => {
        <$crate::data::Set<_> as ::std::iter::FromIterator<_>>::from_iter([$($element),+])
    };
}

/// A set of distinct elements.
pub struct Set<T> {
    storage: List<T>,
}

impl<T> Set<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: List::new(),
        }
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterates over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> super::list::ListIter<'_, T> {
        self.storage.iter()
    }

    /// The elements as a list, in unspecified order.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> &List<T> {
        &self.storage
    }
}

impl<T: PartialEq> Set<T> {
    /// Returns `true` if an element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.storage.contains(value)
    }

    /// Returns the set with `element` added. Unchanged if an equal element
    /// is already present.
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        if self.contains(&element) {
            self.clone()
        } else {
            Self {
                storage: self.storage.cons(element),
            }
        }
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element))
    }
}

impl<T> Clone for Set<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, element| set.insert(element))
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = super::list::ListIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Same cardinality and every element of each set found in the other.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other) && other.is_subset(self)
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Data type
// =============================================================================

/// The data type of [`Set`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SetTag;

impl Tag for SetTag {
    const NAME: &'static str = "Set";
    const SLOTS: Slots = Slots::of(&[
        Op::Foldl,
        Op::Foldr,
        Op::Length,
        Op::FindIf,
        Op::AnyOf,
        Op::Equal,
    ]);
}

const_assert!(models::<Foldable, SetTag>());
const_assert!(models::<Searchable, SetTag>());
const_assert!(models::<Comparable, SetTag>());

impl<T> Tagged for Set<T> {
    type Tag = SetTag;
}

impl<T> Elements for Set<T> {
    type Item = T;
}

/// Inserts an element into a set; the step of `to::<SetTag>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Insert;

impl<T: PartialEq> Func2<T, Set<T>> for Insert {
    type Output = Set<T>;

    #[inline]
    fn call2(&mut self, element: T, set: Set<T>) -> Set<T> {
        set.insert(element)
    }
}

impl<T: Clone, S, F> FoldlImpl<Set<T>, S, F> for SetTag
where
    F: Func2<S, T, Output = S>,
{
    type Output = S;

    #[inline]
    fn foldl(xs: Set<T>, state: S, f: F) -> S {
        <super::ListTag as FoldlImpl<List<T>, S, F>>::foldl(xs.storage, state, f)
    }
}

impl<T: Clone, S, F> FoldrImpl<Set<T>, S, F> for SetTag
where
    F: Func2<T, S, Output = S>,
{
    type Output = S;

    #[inline]
    fn foldr(xs: Set<T>, state: S, f: F) -> S {
        <super::ListTag as FoldrImpl<List<T>, S, F>>::foldr(xs.storage, state, f)
    }
}

impl<T: Clone, F> Foldl1Impl<Set<T>, F> for SetTag
where
    F: Func2<T, T, Output = T>,
{
    type Output = T;

    #[track_caller]
    fn foldl1(xs: Set<T>, f: F) -> T {
        derive::foldable::foldl1::<Self, _, _, _>(xs, f)
    }
}

impl<T: Clone, F> Foldr1Impl<Set<T>, F> for SetTag
where
    F: Func2<T, T, Output = T>,
{
    type Output = T;

    #[track_caller]
    fn foldr1(xs: Set<T>, f: F) -> T {
        derive::foldable::foldr1::<Self, _, _, _>(xs, f)
    }
}

impl<T> LengthImpl<Set<T>> for SetTag {
    #[inline]
    fn length(xs: &Set<T>) -> usize {
        xs.len()
    }
}

impl<T: Clone, P> FindIfImpl<Set<T>, T, P> for SetTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    #[inline]
    fn find_if(xs: Set<T>, pred: P) -> Option<T> {
        <super::ListTag as FindIfImpl<List<T>, T, P>>::find_if(xs.storage, pred)
    }
}

impl<T: Clone, P> AnyOfImpl<Set<T>, P> for SetTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    #[inline]
    fn any_of(xs: Set<T>, pred: P) -> bool {
        <super::ListTag as AnyOfImpl<List<T>, P>>::any_of(xs.storage, pred)
    }
}

impl<Xs> ToImpl<Xs> for SetTag
where
    Xs: Tagged + Elements,
    TagOf<Xs>: FoldrImpl<Xs, Set<Xs::Item>, Insert, Output = Set<Xs::Item>>,
{
    type Output = Set<Xs::Item>;

    #[inline]
    fn to(xs: Xs) -> Set<Xs::Item> {
        <TagOf<Xs> as FoldrImpl<Xs, Set<Xs::Item>, Insert>>::foldr(xs, Set::new(), Insert)
    }
}

// =============================================================================
// Serde support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.storage, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    /// Duplicates in the input collapse.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, set};
    use rstest::rstest;

    #[rstest]
    fn insert_ignores_present_elements() {
        let xs = set![1, 2];
        assert_eq!(xs.insert(2).len(), 2);
        assert_eq!(xs.insert(3).len(), 3);
        assert!(xs.insert(3).contains(&3));
    }

    #[rstest]
    #[case(set![1, 2, 3], set![3, 2, 1], true)]
    #[case(set![1, 2], set![1, 2, 3], false)]
    #[case(set![1, 4], set![1, 2], false)]
    #[case(set![], set![], true)]
    fn equality_ignores_order(
        #[case] left: Set<i32>,
        #[case] right: Set<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(left == right, expected);
    }

    #[rstest]
    fn folds_see_every_element_once() {
        let total = SetTag::foldl(set![1, 2, 2, 3], 0, |s: i32, x: i32| s + x);
        assert_eq!(total, 6);
    }

    #[rstest]
    fn conversion_collapses_duplicates() {
        assert_eq!(SetTag::to(list!['a', 'b', 'a']), set!['b', 'a']);
    }
}
