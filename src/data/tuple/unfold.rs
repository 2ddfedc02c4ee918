//! Building tuples by unfolding a seed.
//!
//! The generator returns [`Nothing`] to stop or [`Just`] of a pair to emit
//! an element. Both outcomes are types, so the length and the element types
//! of the result follow from the type of the seed.

use super::{HAppend, HCons, HList, HNil};
use crate::core::function::Func1;
use crate::data::{Just, Nothing};

/// One step of a right unfold: `Just((element, next_seed))` or `Nothing`.
pub trait UnfoldrStep<G> {
    /// The elements produced from this step on.
    type Output: HList;

    /// Emits this step's element, then keeps unfolding.
    fn unfoldr_step(self, generator: &mut G) -> Self::Output;
}

impl<G> UnfoldrStep<G> for Nothing {
    type Output = HNil;

    #[inline]
    fn unfoldr_step(self, _generator: &mut G) -> HNil {
        HNil
    }
}

impl<G, X, Next> UnfoldrStep<G> for Just<(X, Next)>
where
    G: Func1<Next>,
    G::Output: UnfoldrStep<G>,
{
    type Output = HCons<X, <G::Output as UnfoldrStep<G>>::Output>;

    #[inline]
    fn unfoldr_step(self, generator: &mut G) -> Self::Output {
        let Self((element, next)) = self;
        let rest = generator.call1(next).unfoldr_step(generator);
        HCons {
            head: element,
            tail: rest,
        }
    }
}

/// Seeds that unfold to the right under `G`.
pub trait Unfoldr<G>: Sized {
    /// The resulting tuple.
    type Output: HList;

    /// Unfolds `self`; the first element produced comes first.
    fn unfoldr_with(self, generator: &mut G) -> Self::Output;
}

impl<Seed, G> Unfoldr<G> for Seed
where
    G: Func1<Seed>,
    G::Output: UnfoldrStep<G>,
{
    type Output = <G::Output as UnfoldrStep<G>>::Output;

    #[inline]
    fn unfoldr_with(self, generator: &mut G) -> Self::Output {
        generator.call1(self).unfoldr_step(generator)
    }
}

/// One step of a left unfold: `Just((next_seed, element))` or `Nothing`.
pub trait UnfoldlStep<G> {
    /// The elements produced from this step on.
    type Output: HList;

    /// Keeps unfolding, then appends this step's element.
    fn unfoldl_step(self, generator: &mut G) -> Self::Output;
}

impl<G> UnfoldlStep<G> for Nothing {
    type Output = HNil;

    #[inline]
    fn unfoldl_step(self, _generator: &mut G) -> HNil {
        HNil
    }
}

impl<G, Next, X> UnfoldlStep<G> for Just<(Next, X)>
where
    G: Func1<Next>,
    G::Output: UnfoldlStep<G>,
    <G::Output as UnfoldlStep<G>>::Output: HAppend<X>,
{
    type Output = <<G::Output as UnfoldlStep<G>>::Output as HAppend<X>>::Output;

    #[inline]
    fn unfoldl_step(self, generator: &mut G) -> Self::Output {
        let Self((next, element)) = self;
        generator
            .call1(next)
            .unfoldl_step(generator)
            .append(element)
    }
}

/// Seeds that unfold to the left under `G`.
pub trait Unfoldl<G>: Sized {
    /// The resulting tuple.
    type Output: HList;

    /// Unfolds `self`; the first element produced comes last.
    fn unfoldl_with(self, generator: &mut G) -> Self::Output;
}

impl<Seed, G> Unfoldl<G> for Seed
where
    G: Func1<Seed>,
    G::Output: UnfoldlStep<G>,
{
    type Output = <G::Output as UnfoldlStep<G>>::Output;

    #[inline]
    fn unfoldl_with(self, generator: &mut G) -> Self::Output {
        generator.call1(self).unfoldl_step(generator)
    }
}
