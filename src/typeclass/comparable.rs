//! Comparable and Orderable: equality and strict ordering.
//!
//! Every data type of this crate registers `equal` (and, when ordered,
//! `less`) through `PartialEq` and `PartialOrd`. Both relations are defined
//! across types: two tuples of different lengths are unequal, and `Nothing`
//! sorts before any `Just`. The free functions below therefore accept any
//! pair of operands the standard comparison traits accept.
//!
//! ```rust
//! use tagfold::prelude::*;
//!
//! assert!(equal(&tuple![1, 'a'], &tuple![1, 'a']));
//! assert!(not_equal(&tuple![1], &tuple![1, 2]));
//! assert!(less(&nothing(), &just(0)));
//! assert_eq!(max(just(1), just(3)), just(3));
//! ```

/// `left == right`.
#[inline]
pub fn equal<A, B>(left: &A, right: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    left == right
}

/// `left != right`.
#[inline]
pub fn not_equal<A, B>(left: &A, right: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    !equal(left, right)
}

/// `left < right`.
#[inline]
pub fn less<A, B>(left: &A, right: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    left < right
}

/// `left <= right`.
#[inline]
pub fn less_equal<A, B>(left: &A, right: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    left <= right
}

/// `left > right`.
#[inline]
pub fn greater<A, B>(left: &A, right: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    left > right
}

/// `left >= right`.
#[inline]
pub fn greater_equal<A, B>(left: &A, right: &B) -> bool
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    left >= right
}

/// The smaller operand; `left` when neither is smaller.
#[inline]
pub fn min<T: PartialOrd>(left: T, right: T) -> T {
    if less(&right, &left) { right } else { left }
}

/// The greater operand; `left` when neither is greater.
#[inline]
pub fn max<T: PartialOrd>(left: T, right: T) -> T {
    if less(&left, &right) { right } else { left }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HNil, Just, Nothing, Str};
    use crate::tuple;
    use rstest::rstest;

    #[rstest]
    fn tuples_of_different_lengths_are_unequal() {
        assert!(not_equal(&tuple![1, 2], &tuple![1, 2, 3]));
        assert!(equal(&HNil, &tuple![]));
    }

    #[rstest]
    fn maybe_orders_nothing_first() {
        assert!(less(&Nothing, &Just(i32::MIN)));
        assert!(greater(&Just(2), &Just(1)));
        assert!(less_equal(&Nothing, &Nothing));
    }

    #[rstest]
    fn strings_order_prefixes_first() {
        assert!(less(&Str::new("ab"), &Str::new("abc")));
        assert!(greater_equal(&Str::new("b"), &Str::new("abc")));
    }

    #[rstest]
    fn min_and_max_keep_the_left_operand_on_ties() {
        let left = (1, 'l');
        let right = (1, 'r');
        assert_eq!(min(Keyed(left), Keyed(right)).0, left);
        assert_eq!(max(Keyed(left), Keyed(right)).0, left);
        assert_eq!(max(3, 9), 9);
        assert_eq!(min(3, 9), 3);
    }

    /// Compares pairs by their first component only.
    #[derive(Debug)]
    struct Keyed((i32, char));

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0.0 == other.0.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.0.partial_cmp(&other.0.0)
        }
    }
}
