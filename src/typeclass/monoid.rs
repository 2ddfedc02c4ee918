//! Monoid: semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_identity {
    ($one:literal: $($numeric:ty),*) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_identity!(1: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_identity!(1.0: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identities_are_neutral() {
        assert_eq!(Sum::<i64>::empty().combine(Sum(7)), Sum(7));
        assert_eq!(Product(7_u8).combine(Product::empty()), Product(7));
        assert_eq!(Product::<f64>::empty(), Product(1.0));
    }
}
