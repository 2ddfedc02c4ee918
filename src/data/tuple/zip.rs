//! Zipping tuples of tuples.
//!
//! The number of rows of a zip is computed on types: [`MinLen`] for the
//! truncating zip and [`CommonLen`] for the zip that insists on equal
//! lengths. [`ZipN`] then peels that many columns off with [`Transpose`].

use super::{HCons, HList, HNil};
use crate::core::nat::{Min, Nat, S, Z};

/// Splits a tuple of non-empty tuples into their heads and their tails.
pub trait Transpose: HList {
    /// The first element of every inner tuple.
    type Heads: HList;
    /// Every inner tuple without its first element.
    type Tails: HList;

    /// Splits `self`.
    fn transpose(self) -> (Self::Heads, Self::Tails);
}

impl Transpose for HNil {
    type Heads = Self;
    type Tails = Self;

    #[inline]
    fn transpose(self) -> (Self, Self) {
        (Self, Self)
    }
}

impl<H, T: HList, Rest: Transpose> Transpose for HCons<HCons<H, T>, Rest> {
    type Heads = HCons<H, Rest::Heads>;
    type Tails = HCons<T, Rest::Tails>;

    fn transpose(self) -> (Self::Heads, Self::Tails) {
        let (heads, tails) = self.tail.transpose();
        (
            HCons {
                head: self.head.head,
                tail: heads,
            },
            HCons {
                head: self.head.tail,
                tail: tails,
            },
        )
    }
}

/// The first `N` rows of a zip.
pub trait ZipN<N>: HList {
    /// The rows.
    type Output: HList;

    /// Builds the rows.
    fn zip_n(self) -> Self::Output;
}

impl<Xss: HList> ZipN<Z> for Xss {
    type Output = HNil;

    #[inline]
    fn zip_n(self) -> HNil {
        HNil
    }
}

impl<Xss, N> ZipN<S<N>> for Xss
where
    Xss: Transpose,
    Xss::Tails: ZipN<N>,
{
    type Output = HCons<Xss::Heads, <Xss::Tails as ZipN<N>>::Output>;

    #[inline]
    fn zip_n(self) -> Self::Output {
        let (heads, tails) = self.transpose();
        HCons {
            head: heads,
            tail: tails.zip_n(),
        }
    }
}

/// The length of the shortest inner tuple; zero when there are none.
pub trait MinLen: HList {
    /// The shortest length.
    type Len: Nat;
}

impl MinLen for HNil {
    type Len = Z;
}

impl<Xs: HList> MinLen for HCons<Xs, HNil> {
    type Len = Xs::Len;
}

impl<Xs, Ys, Rest> MinLen for HCons<Xs, HCons<Ys, Rest>>
where
    Xs: HList,
    HCons<Ys, Rest>: MinLen,
    Xs::Len: Min<<HCons<Ys, Rest> as MinLen>::Len>,
{
    type Len = <Xs::Len as Min<<HCons<Ys, Rest> as MinLen>::Len>>::Output;
}

/// Every inner tuple has length `N`.
#[diagnostic::on_unimplemented(
    message = "the tuples in `{Self}` do not all have the same length",
    note = "use `zip_shortest` to truncate to the shortest tuple"
)]
pub trait SameLen<N> {}

impl<N> SameLen<N> for HNil {}

impl<Xs, Rest, N> SameLen<N> for HCons<Xs, Rest>
where
    Xs: HList<Len = N>,
    Rest: SameLen<N>,
{
}

/// The length shared by all inner tuples.
#[diagnostic::on_unimplemented(
    message = "`zip_unsafe` needs tuples of equal length, found `{Self}`",
    note = "use `zip_shortest` to truncate to the shortest tuple"
)]
pub trait CommonLen: HList {
    /// The shared length.
    type Len: Nat;
}

impl CommonLen for HNil {
    type Len = Z;
}

impl<Xs, Rest> CommonLen for HCons<Xs, Rest>
where
    Xs: HList,
    Rest: HList + SameLen<Xs::Len>,
{
    type Len = Xs::Len;
}
