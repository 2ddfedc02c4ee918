//! The dispatch core: tags, concepts, conformance checks and the function
//! objects every algorithm is written against.
//!
//! - [`Tag`], [`Tagged`], [`TagOf`]: the data-type registry
//! - [`models`], [`Conformance`], [`require`]: the conformance checker
//! - [`concept`]: concept markers (`Foldable`, `Iterable`, ...)
//! - [`function`]: polymorphic function objects (`Func1`, `Func2`, `FuncN`)
//! - [`nat`]: type-level naturals for lengths and compile-time indices
//! - [`to`]: structural conversion between containers

pub mod concept;
mod convert;
pub(crate) mod dispatch;
pub mod function;
mod models;
pub mod nat;
mod tag;

pub use convert::{Elements, ToImpl, to};
pub use models::{
    Concept, Conformance, NotModeled, Op, Slots, missing, models, require, satisfies,
};
pub use tag::{Tag, TagOf, Tagged, tag_name};

pub(crate) use dispatch::{precondition_violation, require_models};
