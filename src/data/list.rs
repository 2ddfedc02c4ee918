//! Persistent singly-linked list of runtime length.
//!
//! [`List`] is the result type of every operation whose output shape depends
//! on element values (`group`, runtime `drop`, `permutations`, ...) and the
//! storage behind [`Set`](super::Set).
//!
//! - O(1) `cons`, `head`, `tail` and `len`
//! - O(n) `get` and `append`
//!
//! Lists share structure: `cons` and `tail` never copy nodes.
//!
//! ```rust
//! use tagfold::data::List;
//! use tagfold::list;
//!
//! let xs = list![2, 3];
//! let ys = xs.cons(1);
//! assert_eq!(xs.len(), 2);
//! assert_eq!(ys, list![1, 2, 3]);
//! assert_eq!(ys.tail(), xs);
//! ```
//!
//! As a data type, a list is Iterable; its folds and searches are derived
//! from `head`, `tail` and `is_empty`. It is not a Sequence, since its
//! length is not part of its type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use static_assertions::const_assert;

use crate::core::concept::{Comparable, Foldable, Functor, Iterable, Searchable, Sequence};
use crate::core::function::{Func1, Func2};
use crate::core::{
    Elements, Op, Slots, Tag, TagOf, Tagged, ToImpl, models, precondition_violation,
};
use crate::derive;
use crate::typeclass::{
    AnyOfImpl, AtCImpl, AtImpl, DropCImpl, DropImpl, DropWhileImpl, FindIfImpl, FoldlImpl,
    Foldl1Impl, FoldrImpl, Foldr1Impl, HeadImpl, IsEmptyImpl, LastImpl, LengthImpl, TailImpl,
    TransformImpl, UnfoldlImpl, UnfoldrImpl,
};

/// Builds a [`List`] from its elements.
///
/// ```rust
/// use tagfold::list;
///
/// let xs = list![1, 2, 3];
/// assert_eq!(xs.len(), 3);
/// assert!(tagfold::data::List::<u8>::new().is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => { $crate::data::List::new() };
    ($($element:expr),+ $(,)?) => {
        <$crate::data::List<_> as ::std::iter::FromIterator<_>>::from_iter([$($element),+])
    };
}

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent singly-linked list.
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    /// Cached so that `len` is O(1).
    length: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list holding only `element`.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Returns a new list with `element` in front, sharing `self`.
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// The first element, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// The list without its first element; empty if `self` is empty.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Splits off the first element.
    ///
    /// ```rust
    /// use tagfold::list;
    ///
    /// let xs = list!['a', 'b'];
    /// let (first, rest) = xs.uncons().unwrap();
    /// assert_eq!(*first, 'a');
    /// assert_eq!(rest, list!['b']);
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, tail)
        })
    }

    /// The element at `index`, if in bounds. O(index).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates over references to the elements, front to back.
    #[inline]
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Returns `true` if some element equals `value`.
    #[must_use]
    pub fn contains<V>(&self, value: &V) -> bool
    where
        T: PartialEq<V>,
    {
        self.iter().any(|element| element == value)
    }
}

impl<T: Clone> List<T> {
    /// The elements of `self` followed by those of `other`.
    ///
    /// Copies the nodes of `self` and shares those of `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| reversed.cons(element.clone()))
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`List`].
pub struct ListIter<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

/// Owning iterator over the elements of a [`List`].
///
/// Shared nodes are cloned out; the list itself is never mutated.
pub struct ListIntoIter<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.list.uncons()?;
        let element = head.clone();
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ListIntoIter<T> {}

// =============================================================================
// Standard traits
// =============================================================================

impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

/// Unlinks uniquely owned nodes one at a time, so dropping a long list does
/// not recurse once per node. Stops at the first node another list shares.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut node) => current = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

/// Lexicographic; a proper prefix is smaller.
impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

// =============================================================================
// Data type
// =============================================================================

/// The data type of [`List`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListTag;

impl Tag for ListTag {
    const NAME: &'static str = "List";
    const SLOTS: Slots = Slots::of(&[
        Op::Head,
        Op::Tail,
        Op::IsEmpty,
        Op::Foldl,
        Op::Foldr,
        Op::Length,
        Op::FindIf,
        Op::AnyOf,
        Op::Transform,
        Op::Equal,
        Op::Less,
    ]);
}

const_assert!(models::<Iterable, ListTag>());
const_assert!(models::<Foldable, ListTag>());
const_assert!(models::<Searchable, ListTag>());
const_assert!(models::<Comparable, ListTag>());
const_assert!(models::<Functor, ListTag>());
const_assert!(!models::<Sequence, ListTag>());

impl<T> Tagged for List<T> {
    type Tag = ListTag;
}

impl<T> Elements for List<T> {
    type Item = T;
}

/// Prepends an element to a list; the step of `to::<ListTag>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cons;

impl<T> Func2<T, List<T>> for Cons {
    type Output = List<T>;

    #[inline]
    fn call2(&mut self, element: T, list: List<T>) -> List<T> {
        list.cons(element)
    }
}

impl<T: Clone> HeadImpl<List<T>> for ListTag {
    type Output = T;

    #[track_caller]
    fn head(xs: List<T>) -> T {
        xs.head()
            .cloned()
            .unwrap_or_else(|| precondition_violation("head", "empty structure"))
    }
}

impl<T> TailImpl<List<T>> for ListTag {
    type Output = List<T>;

    #[track_caller]
    fn tail(xs: List<T>) -> List<T> {
        if xs.is_empty() {
            precondition_violation("tail", "empty structure");
        }
        xs.tail()
    }
}

impl<T> IsEmptyImpl<List<T>> for ListTag {
    #[inline]
    fn is_empty(xs: &List<T>) -> bool {
        xs.is_empty()
    }
}

impl<T> LengthImpl<List<T>> for ListTag {
    #[inline]
    fn length(xs: &List<T>) -> usize {
        xs.len()
    }
}

impl<T: Clone, S, F> FoldlImpl<List<T>, S, F> for ListTag
where
    F: Func2<S, T, Output = S>,
{
    type Output = S;

    fn foldl(xs: List<T>, state: S, f: F) -> S {
        derive::iterable::foldl::<Self, _, _, _>(xs, state, f)
    }
}

impl<T: Clone, S, F> FoldrImpl<List<T>, S, F> for ListTag
where
    F: Func2<T, S, Output = S>,
{
    type Output = S;

    fn foldr(xs: List<T>, state: S, f: F) -> S {
        derive::iterable::foldr::<Self, _, _, _>(xs, state, f)
    }
}

impl<T: Clone, F> Foldl1Impl<List<T>, F> for ListTag
where
    F: Func2<T, T, Output = T>,
{
    type Output = T;

    #[track_caller]
    fn foldl1(xs: List<T>, f: F) -> T {
        derive::foldable::foldl1::<Self, _, _, _>(xs, f)
    }
}

impl<T: Clone, F> Foldr1Impl<List<T>, F> for ListTag
where
    F: Func2<T, T, Output = T>,
{
    type Output = T;

    #[track_caller]
    fn foldr1(xs: List<T>, f: F) -> T {
        derive::foldable::foldr1::<Self, _, _, _>(xs, f)
    }
}

impl<T: Clone> AtImpl<List<T>, T> for ListTag {
    #[track_caller]
    fn at(index: usize, xs: List<T>) -> T {
        derive::iterable::at::<Self, _>(index, xs)
    }
}

impl<T: Clone, const N: usize> AtCImpl<List<T>, N> for ListTag {
    type Output = T;

    #[track_caller]
    fn at_c(xs: List<T>) -> T {
        derive::iterable::at::<Self, _>(N, xs)
    }
}

impl<T: Clone> LastImpl<List<T>> for ListTag {
    type Output = T;

    #[track_caller]
    fn last(xs: List<T>) -> T {
        derive::iterable::last::<Self, _>(xs)
    }
}

impl<T> DropImpl<List<T>, T> for ListTag {
    type Output = List<T>;

    fn drop(count: usize, xs: List<T>) -> List<T> {
        derive::iterable::drop::<Self, _>(count, xs)
    }
}

impl<T, const N: usize> DropCImpl<List<T>, N> for ListTag {
    type Output = List<T>;

    fn drop_c(xs: List<T>) -> List<T> {
        derive::iterable::drop::<Self, _>(N, xs)
    }
}

impl<T: Clone, P> DropWhileImpl<List<T>, T, P> for ListTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    type Output = List<T>;

    fn drop_while(xs: List<T>, pred: P) -> List<T> {
        derive::iterable::drop_while::<Self, _, _>(xs, pred)
    }
}

impl<T: Clone, P> FindIfImpl<List<T>, T, P> for ListTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    fn find_if(xs: List<T>, pred: P) -> Option<T> {
        derive::iterable::find_if::<Self, _, _>(xs, pred)
    }
}

impl<T: Clone, P> AnyOfImpl<List<T>, P> for ListTag
where
    P: for<'a> Func1<&'a T, Output = bool>,
{
    fn any_of(xs: List<T>, pred: P) -> bool {
        derive::iterable::any_of::<Self, _, _>(xs, pred)
    }
}

impl<T: Clone, F: Func1<T>> TransformImpl<List<T>, F> for ListTag {
    type Output = List<F::Output>;

    fn transform(xs: List<T>, mut f: F) -> Self::Output {
        xs.into_iter().map(|element| f.call1(element)).collect()
    }
}

impl<T, Seed, G> UnfoldrImpl<G, Seed> for ListTag
where
    G: FnMut(Seed) -> Option<(T, Seed)>,
{
    type Output = List<T>;

    fn unfoldr(mut generator: G, seed: Seed) -> List<T> {
        let mut elements = Vec::new();
        let mut seed = seed;
        while let Some((element, next)) = generator(seed) {
            elements.push(element);
            seed = next;
        }
        List::build_from_vec(elements)
    }
}

impl<T, Seed, G> UnfoldlImpl<G, Seed> for ListTag
where
    G: FnMut(Seed) -> Option<(Seed, T)>,
{
    type Output = List<T>;

    /// Each element goes after everything unfolded from its next seed, so
    /// elements come out last to first.
    fn unfoldl(mut generator: G, seed: Seed) -> List<T> {
        let mut list = List::new();
        let mut seed = seed;
        while let Some((next, element)) = generator(seed) {
            list = list.cons(element);
            seed = next;
        }
        list
    }
}

/// Right fold consing every element onto the empty list.
impl<Xs> ToImpl<Xs> for ListTag
where
    Xs: Tagged + Elements,
    TagOf<Xs>: FoldrImpl<Xs, List<Xs::Item>, Cons, Output = List<Xs::Item>>,
{
    type Output = List<Xs::Item>;

    #[inline]
    fn to(xs: Xs) -> List<Xs::Item> {
        <TagOf<Xs> as FoldrImpl<Xs, List<Xs::Item>, Cons>>::foldr(xs, List::new(), Cons)
    }
}

// =============================================================================
// Serde support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn cons_shares_the_original() {
        let xs = list![2, 3];
        let ys = xs.cons(1);
        assert_eq!(xs.len(), 2);
        assert_eq!(ys.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ys.tail(), xs);
    }

    #[rstest]
    fn tail_of_empty_list_is_empty() {
        assert!(List::<u8>::new().tail().is_empty());
    }

    #[rstest]
    #[case(0, Some(&'a'))]
    #[case(2, Some(&'c'))]
    #[case(3, None)]
    fn get_by_index(#[case] index: usize, #[case] expected: Option<&char>) {
        let xs = list!['a', 'b', 'c'];
        assert_eq!(xs.get(index), expected);
    }

    #[rstest]
    fn append_and_reverse() {
        let xs = list![1, 2].append(&list![3]);
        assert_eq!(xs, list![1, 2, 3]);
        assert_eq!(xs.reverse(), list![3, 2, 1]);
        assert_eq!(List::new().append(&xs), xs);
    }

    #[rstest]
    #[case(list![1, 2], list![1, 3], Ordering::Less)]
    #[case(list![1], list![1, 0], Ordering::Less)]
    #[case(list![2], list![1, 9], Ordering::Greater)]
    #[case(list![], list![], Ordering::Equal)]
    fn lists_order_lexicographically(
        #[case] left: List<i32>,
        #[case] right: List<i32>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(left.cmp(&right), expected);
    }

    #[rstest]
    fn display_and_debug() {
        assert_eq!(list![1, 2].to_string(), "[1, 2]");
        assert_eq!(format!("{:?}", list!['x']), "['x']");
    }

    #[rstest]
    fn iterators_report_exact_sizes() {
        let xs = list![1, 2, 3];
        let mut iter = xs.iter();
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(xs.into_iter().len(), 3);
    }

    #[rstest]
    #[should_panic(expected = "head: precondition violated: empty structure")]
    fn head_of_empty_list_panics() {
        let _ = ListTag::head(List::<i32>::new());
    }

    #[rstest]
    fn unfolds_build_in_opposite_orders() {
        let countdown = |n: u8| (n > 0).then(|| (n, n - 1));
        let countup = |n: u8| (n > 0).then(|| (n - 1, n));
        assert_eq!(ListTag::unfoldr(countdown, 3), list![3, 2, 1]);
        assert_eq!(ListTag::unfoldl(countup, 3), list![1, 2, 3]);
    }

    #[rstest]
    #[case(list![])]
    #[case(list![7])]
    #[case(list![1, 2, 3, 4, 5])]
    fn cached_length_agrees_with_counted_length(#[case] xs: List<i32>) {
        assert_eq!(ListTag::length(&xs), derive::iterable::length::<ListTag, _>(&xs));
        assert_eq!(ListTag::length(&xs), derive::foldable::length::<ListTag, _>(&xs));
    }

    #[rstest]
    fn dropping_a_long_list_does_not_overflow_the_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(|| {
                let xs: List<u32> = (0..1_000_000).collect();
                assert_eq!(xs.len(), 1_000_000);
                std::mem::drop(xs);
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[rstest]
    fn dropping_a_list_keeps_shared_tails_alive() {
        let shared: List<String> = (0..1000).map(|n| n.to_string()).collect();
        let extended = shared.cons(String::from("front"));
        std::mem::drop(extended);
        assert_eq!(shared.len(), 1000);
        assert_eq!(shared.head().map(String::as_str), Some("0"));
        assert_eq!(shared.iter().last().map(String::as_str), Some("999"));
    }

    #[rstest]
    fn transform_maps_every_element() {
        let lengths = ListTag::transform(list!["a", "bcd"], |s: &str| s.len());
        assert_eq!(lengths, list![1, 3]);
    }
}
