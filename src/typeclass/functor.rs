//! Functor: mapping every element of a structure.
//!
//! `transform` keeps the shape of its input and replaces every element by
//! `f(element)`. On tuples `f` may be polymorphic, so the element types of
//! the result can differ from position to position.
//!
//! # Laws
//!
//! ```text
//! transform(xs, |x| x)        == xs
//! transform(xs, |x| g(f(x)))  == transform(transform(xs, f), g)
//! ```
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! assert_eq!(transform(just(2), |x: i32| x * 10), just(20));
//! assert_eq!(transform([1, 2], |x: i32| x + 1), [2, 3]);
//! assert_eq!(transform(list!['a'], |c: char| c.to_ascii_uppercase()), list!['A']);
//! ```

use crate::core::concept::Functor;
use crate::core::{Tag, TagOf, Tagged, require_models};

/// Element-wise mapping.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `transform` for `{Xs}` with `{F}`",
    label = "the function must accept every element of the structure",
    note = "Functor requires `transform`"
)]
pub trait TransformImpl<Xs, F>: Tag {
    /// The mapped structure.
    type Output;

    /// Applies `f` to every element of `xs`, left to right.
    fn transform(xs: Xs, f: F) -> Self::Output;
}

/// `xs` with `f` applied to every element.
#[inline]
pub fn transform<Xs, F>(xs: Xs, f: F) -> <TagOf<Xs> as TransformImpl<Xs, F>>::Output
where
    Xs: Tagged,
    TagOf<Xs>: TransformImpl<Xs, F>,
{
    require_models!(Functor, TagOf<Xs>, "transform(xs, f) requires xs to be a Functor");
    <TagOf<Xs> as TransformImpl<Xs, F>>::transform(xs, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::function::Func1;
    use crate::data::{HNil, Nothing};
    use crate::{list, tuple};
    use rstest::rstest;

    struct Wrap;

    impl<X> Func1<X> for Wrap {
        type Output = Option<X>;

        fn call1(&mut self, element: X) -> Option<X> {
            Some(element)
        }
    }

    #[rstest]
    fn transform_maps_heterogeneous_tuples() {
        assert_eq!(transform(tuple![1, 'a'], Wrap), tuple![Some(1), Some('a')]);
        assert_eq!(transform(HNil, Wrap), HNil);
    }

    #[rstest]
    fn transform_keeps_nothing() {
        assert_eq!(transform(Nothing, Wrap), Nothing);
    }

    #[rstest]
    fn identity_law_on_lists() {
        let xs = list![1, 2, 3];
        assert_eq!(transform(xs.clone(), |x: i32| x), xs);
    }

    #[rstest]
    fn composition_law_on_arrays() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 3;
        assert_eq!(
            transform([1, 2, 3], |x: i32| g(f(x))),
            transform(transform([1, 2, 3], f), g)
        );
    }
}
