//! Searchable: structures supporting predicate lookup.
//!
//! The minimal complete definition is `find_if` and `any_of`. Predicates
//! receive elements by reference and answer `bool`. `any_of` stops calling
//! the predicate at the first match, scanning from left to right.
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! assert_eq!(find_if(tuple![1, 4, 9], |x: &i32| *x > 3), Some(4));
//! assert!(any_of(just(3), |x: &i32| *x == 3));
//! assert!(elem(list!['a', 'b'], 'b'));
//! assert!(subset(tuple![1, 2], list![3, 2, 1]));
//! ```

use crate::core::concept::Searchable;
use crate::core::function::{EqualTo, Func1, Not};
use crate::core::{Tag, TagOf, Tagged, ToImpl, require_models};
use crate::data::{List, ListTag};

// =============================================================================
// Dispatch traits
// =============================================================================

/// First element satisfying a predicate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `find_if` for `{Xs}` with elements of type `{T}`",
    note = "Searchable requires `find_if` and `any_of`; `find_if` needs elements of a single type"
)]
pub trait FindIfImpl<Xs, T, P>: Tag {
    /// Returns the first element of `xs` satisfying `pred`.
    fn find_if(xs: Xs, pred: P) -> Option<T>;
}

/// Existence of an element satisfying a predicate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` provides no `any_of` for `{Xs}`",
    label = "the predicate must accept a reference to every element",
    note = "Searchable requires `find_if` and `any_of`"
)]
pub trait AnyOfImpl<Xs, P>: Tag {
    /// Whether some element of `xs` satisfies `pred`.
    fn any_of(xs: Xs, pred: P) -> bool;
}

// =============================================================================
// Function adapters
// =============================================================================

/// Membership in a list, for [`subset`].
#[derive(Clone, Debug)]
pub struct Within<T>(pub List<T>);

impl<'a, X, T> Func1<&'a X> for Within<T>
where
    X: PartialEq<T>,
{
    type Output = bool;

    #[inline]
    fn call1(&mut self, element: &'a X) -> bool {
        self.0.iter().any(|candidate| element == candidate)
    }
}

// =============================================================================
// Operations
// =============================================================================

/// The first element of `xs` satisfying `pred`, if any.
#[inline]
pub fn find_if<Xs, T, P>(xs: Xs, pred: P) -> Option<T>
where
    Xs: Tagged,
    TagOf<Xs>: FindIfImpl<Xs, T, P>,
{
    require_models!(Searchable, TagOf<Xs>, "find_if(xs, pred) requires xs to be Searchable");
    <TagOf<Xs> as FindIfImpl<Xs, T, P>>::find_if(xs, pred)
}

/// The first element of `xs` equal to `value`, if any.
#[inline]
pub fn find<Xs, T, V>(xs: Xs, value: V) -> Option<T>
where
    Xs: Tagged,
    TagOf<Xs>: FindIfImpl<Xs, T, EqualTo<V>>,
{
    find_if(xs, EqualTo(value))
}

/// Whether some element of `xs` satisfies `pred`.
#[inline]
pub fn any_of<Xs, P>(xs: Xs, pred: P) -> bool
where
    Xs: Tagged,
    TagOf<Xs>: AnyOfImpl<Xs, P>,
{
    require_models!(Searchable, TagOf<Xs>, "any_of(xs, pred) requires xs to be Searchable");
    <TagOf<Xs> as AnyOfImpl<Xs, P>>::any_of(xs, pred)
}

/// Whether every element of `xs` satisfies `pred`; `true` when empty.
#[inline]
pub fn all_of<Xs, P>(xs: Xs, pred: P) -> bool
where
    Xs: Tagged,
    TagOf<Xs>: AnyOfImpl<Xs, Not<P>>,
{
    !any_of(xs, Not(pred))
}

/// Whether no element of `xs` satisfies `pred`.
#[inline]
pub fn none_of<Xs, P>(xs: Xs, pred: P) -> bool
where
    Xs: Tagged,
    TagOf<Xs>: AnyOfImpl<Xs, P>,
{
    !any_of(xs, pred)
}

/// Whether `value` is an element of `xs`.
#[inline]
pub fn elem<Xs, V>(xs: Xs, value: V) -> bool
where
    Xs: Tagged,
    TagOf<Xs>: AnyOfImpl<Xs, EqualTo<V>>,
{
    any_of(xs, EqualTo(value))
}

/// Whether every element of `xs` is an element of `ys`.
///
/// `ys` is collected into a [`List`] once and searched for each element of
/// `xs`.
#[inline]
pub fn subset<Xs, Ys, T>(xs: Xs, ys: Ys) -> bool
where
    Xs: Tagged,
    Ys: Tagged,
    ListTag: ToImpl<Ys, Output = List<T>>,
    TagOf<Xs>: AnyOfImpl<Xs, Not<Within<T>>>,
{
    require_models!(Searchable, TagOf<Ys>, "subset(xs, ys) requires ys to be Searchable");
    let pool = <ListTag as ToImpl<Ys>>::to(ys);
    all_of(xs, Within(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HNil, Nothing, Str, just, nothing};
    use crate::{list, set, tuple};
    use rstest::rstest;

    #[rstest]
    fn find_if_returns_the_first_match() {
        assert_eq!(find_if(tuple![1, 6, 8], |x: &i32| x % 2 == 0), Some(6));
        assert_eq!(find_if(list![1, 3], |x: &i32| x % 2 == 0), None);
        assert_eq!(find_if(just('q'), |c: &char| c.is_alphabetic()), Some('q'));
        assert_eq!(find_if::<_, u8, _>(nothing(), |_: &u8| true), None);
    }

    #[rstest]
    fn any_of_short_circuits_left_to_right() {
        let mut visited = Vec::new();
        let found = any_of(list![1, 2, 3, 4], |x: &i32| {
            visited.push(*x);
            *x == 2
        });
        assert!(found);
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    fn any_of_accepts_heterogeneous_tuples() {
        struct IsZero;
        impl<'a> Func1<&'a i32> for IsZero {
            type Output = bool;
            fn call1(&mut self, value: &'a i32) -> bool {
                *value == 0
            }
        }
        impl<'a> Func1<&'a char> for IsZero {
            type Output = bool;
            fn call1(&mut self, value: &'a char) -> bool {
                *value == '0'
            }
        }
        assert!(any_of(tuple![1_i32, '0'], IsZero));
        assert!(!any_of(tuple![1_i32, 'x'], IsZero));
        assert!(all_of(tuple![0_i32, '0'], IsZero));
        assert!(none_of(HNil, IsZero));
    }

    #[rstest]
    fn all_of_is_vacuous_on_empty_structures() {
        assert!(all_of(HNil, |_: &i32| false));
        assert!(all_of(Nothing, |_: &i32| false));
        assert!(!all_of(list![1, 2], |x: &i32| *x > 1));
    }

    #[rstest]
    fn elem_and_find_compare_with_equality() {
        assert!(elem(Str::new("hello"), 'l'));
        assert!(!elem(set![1, 2], 3));
        assert_eq!(find(tuple![1, 2, 3], 3), Some(3));
    }

    #[rstest]
    #[case(tuple![1, 2], true)]
    #[case(tuple![1, 5], false)]
    fn subset_checks_every_element(
        #[case] xs: crate::Tuple![i32, i32],
        #[case] expected: bool,
    ) {
        assert_eq!(subset(xs, list![3, 2, 1]), expected);
        assert_eq!(subset(xs, set![1, 2, 3]), expected);
    }
}
