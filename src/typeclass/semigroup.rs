//! Semigroup: types with an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type with an associative `combine`.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, 3)]
    #[case(-4, 4, 0)]
    fn combine_is_associative_for_sums(#[case] a: i32, #[case] b: i32, #[case] c: i32) {
        assert_eq!(
            Sum(a).combine(Sum(b)).combine(Sum(c)),
            Sum(a).combine(Sum(b).combine(Sum(c)))
        );
    }
}
