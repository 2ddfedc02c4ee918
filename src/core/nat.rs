//! Type-level natural numbers.
//!
//! Tuple lengths and compile-time indices are Peano numerals: [`Z`] is zero
//! and [`S<N>`] is the successor of `N`. A `const` index can be lifted to a
//! numeral with [`ToNat`] through [`Idx`], which is how `at_c::<2>(xs)`
//! finds its position:
//!
//! ```rust
//! use tagfold::core::nat::{Nat, NatOf, U3};
//!
//! assert_eq!(<NatOf<3> as Nat>::VALUE, 3);
//! assert_eq!(U3::VALUE, 3);
//! ```

/// Zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Z;

/// The successor of `N`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct S<N>(pub N);

/// A type-level natural number.
pub trait Nat: 'static {
    /// The value of the numeral.
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// The smaller of two numerals.
pub trait Min<M: Nat>: Nat {
    /// `min(Self, M)`.
    type Output: Nat;
}

impl<M: Nat> Min<M> for Z {
    type Output = Z;
}

impl<N: Nat> Min<Z> for S<N> {
    type Output = Z;
}

impl<N: Min<M>, M: Nat> Min<S<M>> for S<N> {
    type Output = S<N::Output>;
}

/// A `const` index waiting to be lifted to a numeral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Idx<const N: usize>;

/// Lifts a `const` index to its numeral.
#[diagnostic::on_unimplemented(
    message = "compile-time index `{Self}` is out of the supported range",
    note = "compile-time indices go up to 31"
)]
pub trait ToNat {
    /// The numeral.
    type Nat: Nat;
}

/// The numeral for the `const` index `N`.
pub type NatOf<const N: usize> = <Idx<N> as ToNat>::Nat;

impl ToNat for Idx<0> {
    type Nat = Z;
}

macro_rules! lift_indices {
    ($($index:literal => $previous:literal),* $(,)?) => {
        $(
            impl ToNat for Idx<$index> {
                type Nat = S<<Idx<$previous> as ToNat>::Nat>;
            }

            paste::paste! {
                #[doc = concat!("The numeral ", stringify!($index), ".")]
                pub type [<U $index>] = NatOf<$index>;
            }
        )*
    };
}

/// The numeral 0.
pub type U0 = Z;

lift_indices!(
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
    17 => 16, 18 => 17, 19 => 18, 20 => 19, 21 => 20, 22 => 21, 23 => 22, 24 => 23,
    25 => 24, 26 => 25, 27 => 26, 28 => 27, 29 => 28, 30 => 29, 31 => 30,
);
