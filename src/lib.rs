//! # tagfold
//!
//! Generic algorithms over heterogeneous and homogeneous containers,
//! dispatched statically through data-type tags.
//!
//! ## Overview
//!
//! Every value belongs to a data type named by a zero-sized *tag*
//! ([`core::Tag`]). Generic operations such as [`foldl`](typeclass::foldl)
//! or [`sort`](typeclass::sort) look up the tag of their argument, check that
//! the tag models the operation's concept and call the tag's implementation.
//! A data type provides a minimal set of primitives per concept; the rest is
//! derived from them ([`derive`]).
//!
//! - **Core** ([`core`]): tags, concept conformance, function objects,
//!   type-level naturals and container conversion
//! - **Concepts** ([`typeclass`]): Foldable, Iterable, Searchable, Sequence,
//!   Comparable, Orderable and Functor, with their free functions
//! - **Data types** ([`data`]): tuples, Maybe, lists, sets, strings and
//!   arrays
//!
//! ## Feature Flags
//!
//! - `check-models` (default): every operation statically asserts that the
//!   tag of its argument models the operation's concept
//! - `serde`: `Serialize` / `Deserialize` for the runtime containers
//! - `full`: all of the above
//!
//! ## Example
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! let xs = tuple![1, 'a', "text"];
//! assert_eq!(length(&xs), 3);
//! assert_eq!(at_c::<1, _>(xs), 'a');
//!
//! assert_eq!(foldl(tuple![1, 2, 3], 0, Plus), 6);
//! assert_eq!(sort(tuple![3, 1, 2]), tuple![1, 2, 3]);
//! assert_eq!(group(tuple![0, 0, 1]), list![list![0, 0], list![1]]);
//! assert_eq!(maximum(list![2, 9, 4]), 9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the free functions of every concept, the data types with
/// their constructors and macros, and the polymorphic function objects.
///
/// `drop(n, xs)` is left out so that a glob import keeps `std::mem::drop`
/// usable; call it as `iterable::drop`.
///
/// ```rust
/// use tagfold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::concept::{
        Comparable, Foldable, Functor, Iterable, Orderable, Searchable, Sequence,
    };
    pub use crate::core::function::{
        Equal, EqualTo, Flip, Func1, Func2, FuncN, Less, MakePair, Not, Plus, Times,
    };
    pub use crate::core::{Conformance, NotModeled, Tag, TagOf, Tagged, models, require, to};
    pub use crate::data::*;
    pub use crate::typeclass::*;
    pub use crate::{Tuple, list, set, string, tuple, tuple_pat};
}

pub mod core;
pub mod data;
pub mod derive;
pub mod typeclass;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn library_compiles() {
        assert_eq!(foldl(tuple![1, 2, 3], 0, Plus), 6);
        assert!(models::<Sequence, TupleTag>());
    }
}
