//! Default implementations derived from other primitives.
//!
//! A data type that provides only some operations of a concept delegates the
//! others to the functions here, from its own `*Impl` trait impls:
//!
//! ```text
//! impl<..> FoldlImpl<Just<T>, S, F> for MaybeTag
//!     -> derive::foldable::foldl_via_unpack::<MaybeTag, ..>
//!     -> <MaybeTag as UnpackImpl<..>>::unpack
//! ```
//!
//! The derived functions call primitives through the same dispatch traits
//! as user code, so a derivation may itself rest on another derivation.

pub mod foldable;
pub mod iterable;
