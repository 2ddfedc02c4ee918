//! Fixed strings viewed as sequences of characters.
//!
//! [`Str`] wraps a `&'static str`; its elements are `char`s. Only `head`,
//! `tail` and `is_empty` are written by hand, everything else comes from
//! [`derive::iterable`](crate::derive::iterable).
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! let word = string!("abc");
//! assert_eq!(head(word), 'a');
//! assert_eq!(tail(word), string!("bc"));
//! assert!(elem(word, 'c'));
//! assert!(string!("ab") < string!("abc"));
//! ```

use std::fmt;

use static_assertions::const_assert;

use crate::core::concept::{Comparable, Foldable, Iterable, Orderable, Searchable};
use crate::core::function::{Func1, Func2};
use crate::core::{Elements, Op, Slots, Tag, Tagged, models, precondition_violation};
use crate::derive;
use crate::typeclass::{
    AnyOfImpl, AtImpl, DropImpl, DropWhileImpl, FindIfImpl, FoldlImpl, Foldl1Impl, FoldrImpl,
    Foldr1Impl, HeadImpl, IsEmptyImpl, LastImpl, LengthImpl, TailImpl,
};

/// Builds a [`Str`] from string or character literals.
///
/// ```rust
/// use tagfold::string;
///
/// assert_eq!(string!("ab", 'c'), string!("abc"));
/// assert!(string!().is_empty());
/// ```
#[macro_export]
macro_rules! string {
    ($($piece:literal),* $(,)?) => {
        $crate::data::Str::new(::std::concat!($($piece),*))
    };
}

/// A static string of characters.
///
/// Strings compare lexicographically by character; a proper prefix is
/// smaller.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Str(&'static str);

impl Str {
    /// Wraps `text`.
    #[inline]
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    /// The wrapped text.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Returns `true` if there are no characters.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The characters, front to back.
    #[inline]
    pub fn chars(self) -> std::str::Chars<'static> {
        self.0.chars()
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, formatter)
    }
}

impl fmt::Display for Str {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

impl From<&'static str> for Str {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self(text)
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Data type
// =============================================================================

/// The data type of [`Str`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringTag;

impl Tag for StringTag {
    const NAME: &'static str = "String";
    const SLOTS: Slots = Slots::of(&[
        Op::Head,
        Op::Tail,
        Op::IsEmpty,
        Op::Foldl,
        Op::Foldr,
        Op::Length,
        Op::FindIf,
        Op::AnyOf,
        Op::Equal,
        Op::Less,
    ]);
}

const_assert!(models::<Iterable, StringTag>());
const_assert!(models::<Foldable, StringTag>());
const_assert!(models::<Searchable, StringTag>());
const_assert!(models::<Comparable, StringTag>());
const_assert!(models::<Orderable, StringTag>());

impl Tagged for Str {
    type Tag = StringTag;
}

impl Elements for Str {
    type Item = char;
}

impl HeadImpl<Str> for StringTag {
    type Output = char;

    #[track_caller]
    fn head(xs: Str) -> char {
        xs.chars()
            .next()
            .unwrap_or_else(|| precondition_violation("head", "empty structure"))
    }
}

impl TailImpl<Str> for StringTag {
    type Output = Str;

    #[track_caller]
    fn tail(xs: Str) -> Str {
        let mut chars = xs.chars();
        if chars.next().is_none() {
            precondition_violation("tail", "empty structure");
        }
        Str(chars.as_str())
    }
}

impl IsEmptyImpl<Str> for StringTag {
    #[inline]
    fn is_empty(xs: &Str) -> bool {
        xs.is_empty()
    }
}

impl<S, F: Func2<S, char, Output = S>> FoldlImpl<Str, S, F> for StringTag {
    type Output = S;

    fn foldl(xs: Str, state: S, f: F) -> S {
        derive::iterable::foldl::<Self, _, _, _>(xs, state, f)
    }
}

impl<S, F: Func2<char, S, Output = S>> FoldrImpl<Str, S, F> for StringTag {
    type Output = S;

    fn foldr(xs: Str, state: S, f: F) -> S {
        derive::iterable::foldr::<Self, _, _, _>(xs, state, f)
    }
}

impl<F: Func2<char, char, Output = char>> Foldl1Impl<Str, F> for StringTag {
    type Output = char;

    #[track_caller]
    fn foldl1(xs: Str, f: F) -> char {
        derive::foldable::foldl1::<Self, _, _, _>(xs, f)
    }
}

impl<F: Func2<char, char, Output = char>> Foldr1Impl<Str, F> for StringTag {
    type Output = char;

    #[track_caller]
    fn foldr1(xs: Str, f: F) -> char {
        derive::foldable::foldr1::<Self, _, _, _>(xs, f)
    }
}

impl LengthImpl<Str> for StringTag {
    /// Counts characters, not bytes.
    fn length(xs: &Str) -> usize {
        derive::iterable::length::<Self, _>(xs)
    }
}

impl AtImpl<Str, char> for StringTag {
    #[track_caller]
    fn at(index: usize, xs: Str) -> char {
        derive::iterable::at::<Self, _>(index, xs)
    }
}

impl LastImpl<Str> for StringTag {
    type Output = char;

    #[track_caller]
    fn last(xs: Str) -> char {
        derive::iterable::last::<Self, _>(xs)
    }
}

impl DropImpl<Str, char> for StringTag {
    type Output = Str;

    fn drop(count: usize, xs: Str) -> Str {
        derive::iterable::drop::<Self, _>(count, xs)
    }
}

impl<P> DropWhileImpl<Str, char, P> for StringTag
where
    P: for<'a> Func1<&'a char, Output = bool>,
{
    type Output = Str;

    fn drop_while(xs: Str, pred: P) -> Str {
        derive::iterable::drop_while::<Self, _, _>(xs, pred)
    }
}

impl<P> FindIfImpl<Str, char, P> for StringTag
where
    P: for<'a> Func1<&'a char, Output = bool>,
{
    fn find_if(xs: Str, pred: P) -> Option<char> {
        derive::iterable::find_if::<Self, _, _>(xs, pred)
    }
}

impl<P> AnyOfImpl<Str, P> for StringTag
where
    P: for<'a> Func1<&'a char, Output = bool>,
{
    fn any_of(xs: Str, pred: P) -> bool {
        derive::iterable::any_of::<Self, _, _>(xs, pred)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Str {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0)
    }
}
