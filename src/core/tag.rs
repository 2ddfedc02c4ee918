//! Data-type tags used for static dispatch.
//!
//! Every value handled by this crate carries a nominal *tag*: a zero-sized
//! type naming the data type the value belongs to. Generic operations never
//! look at the value to decide which algorithm to run; they look at
//! `TagOf<T>` and ask the tag for an implementation.
//!
//! Different Rust types may share a tag. `HNil` and `HCons<i32, HNil>` are
//! both tuples, and `Just<u8>` and `Nothing` are both `Maybe`s.
//!
//! # Example
//!
//! ```rust
//! use tagfold::core::{Tag, TagOf};
//! use tagfold::data::{Just, Nothing, MaybeTag};
//!
//! fn name_of<T: tagfold::core::Tagged>(_: &T) -> &'static str {
//!     <TagOf<T> as Tag>::NAME
//! }
//!
//! assert_eq!(name_of(&Just(1)), "Maybe");
//! assert_eq!(name_of(&Nothing), MaybeTag::NAME);
//! ```

use super::models::Slots;

/// A nominal data type.
///
/// `SLOTS` lists the operations the tag registers an implementation for,
/// whether hand-written or explicitly taken from a derivation. Operations
/// left out of `SLOTS` count as left at their default, which is what
/// [`models`](super::models()) inspects.
pub trait Tag: 'static {
    /// Human-readable name of the data type.
    const NAME: &'static str;

    /// Operations this tag overrides.
    const SLOTS: Slots = Slots::EMPTY;
}

/// Associates a type with its data-type tag.
///
/// The tag is a function of the type alone, so it can be resolved without
/// evaluating the value.
pub trait Tagged {
    /// The data type of `Self`.
    type Tag: Tag;
}

/// Shorthand for the tag of `T`.
pub type TagOf<T> = <T as Tagged>::Tag;

/// Returns the name of the data type of `value`.
///
/// # Examples
///
/// ```rust
/// use tagfold::core::tag_name;
/// use tagfold::tuple;
///
/// assert_eq!(tag_name(&tuple![1, 'a']), "Tuple");
/// ```
#[inline]
#[must_use]
pub fn tag_name<T: Tagged>(_value: &T) -> &'static str {
    <TagOf<T> as Tag>::NAME
}
