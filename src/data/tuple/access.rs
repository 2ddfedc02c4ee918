//! Positional access resolved at compile time.

use super::{HCons, HList, HNil};
use crate::core::nat::{S, Z};

/// The element at position `N` (a Peano numeral).
#[diagnostic::on_unimplemented(
    message = "index `{N}` is out of bounds for the tuple `{Self}`",
    label = "`at_c` past the end of a tuple"
)]
pub trait HAt<N>: HList {
    /// The element type at `N`.
    type Output;

    /// Moves out the element at `N`.
    fn at_n(self) -> Self::Output;
}

impl<H, T: HList> HAt<Z> for HCons<H, T> {
    type Output = H;

    #[inline]
    fn at_n(self) -> H {
        self.head
    }
}

impl<H, T: HAt<N>, N> HAt<S<N>> for HCons<H, T> {
    type Output = T::Output;

    #[inline]
    fn at_n(self) -> Self::Output {
        self.tail.at_n()
    }
}

/// The last element of a non-empty tuple.
#[diagnostic::on_unimplemented(
    message = "`last` needs a non-empty tuple, found `{Self}`"
)]
pub trait HLast: HList {
    /// The last element type.
    type Output;

    /// Moves out the last element.
    fn last(self) -> Self::Output;
}

impl<H> HLast for HCons<H, HNil> {
    type Output = H;

    #[inline]
    fn last(self) -> H {
        self.head
    }
}

impl<H, H2, T2> HLast for HCons<H, HCons<H2, T2>>
where
    HCons<H2, T2>: HLast,
{
    type Output = <HCons<H2, T2> as HLast>::Output;

    #[inline]
    fn last(self) -> Self::Output {
        self.tail.last()
    }
}

/// The tuple without its first `N` elements.
///
/// Dropping past the end yields the empty tuple.
pub trait HDrop<N>: HList {
    /// The remaining tuple.
    type Output: HList;

    /// Drops the first `N` elements.
    fn drop_n(self) -> Self::Output;
}

impl<L: HList> HDrop<Z> for L {
    type Output = L;

    #[inline]
    fn drop_n(self) -> L {
        self
    }
}

impl<N> HDrop<S<N>> for HNil {
    type Output = Self;

    #[inline]
    fn drop_n(self) -> Self {
        self
    }
}

impl<H, T: HDrop<N>, N> HDrop<S<N>> for HCons<H, T> {
    type Output = T::Output;

    #[inline]
    fn drop_n(self) -> Self::Output {
        self.tail.drop_n()
    }
}
