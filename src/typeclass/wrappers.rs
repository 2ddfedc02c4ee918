//! Numeric wrappers selecting an algebraic operation.
//!
//! The same number combines under addition as a [`Sum`] and under
//! multiplication as a [`Product`]. `sum` and `product` start their folds
//! from the identity of the matching wrapper.

/// A value combined by addition; identity `0`.
///
/// ```rust
/// use tagfold::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// A value combined by multiplication; identity `1`.
///
/// ```rust
/// use tagfold::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<u64>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);
