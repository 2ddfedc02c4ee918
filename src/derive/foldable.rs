//! Foldable operations derived from other primitives.
//!
//! - `foldl`, `foldr` from `unpack`: the unpacked elements are re-assembled
//!   as a tuple and folded at the type level, so this works for
//!   heterogeneous data as well.
//! - `foldl1`, `foldr1` and `length` of runtime-sized structures from
//!   `foldl`/`foldr`.

use crate::core::function::{Func2, FuncN};
use crate::core::precondition_violation;
use crate::data::{HFoldl, HFoldr, IntoHList};
use crate::typeclass::{FoldlImpl, FoldrImpl, UnpackImpl};

// =============================================================================
// Folds through unpack
// =============================================================================

/// The function `unpack` receives when deriving `foldl`.
#[derive(Clone, Copy, Debug)]
pub struct FoldlArgs<S, F> {
    state: S,
    f: F,
}

impl<S, F, Args> FuncN<Args> for FoldlArgs<S, F>
where
    Args: IntoHList,
    Args::HList: HFoldl<S, F>,
{
    type Output = <Args::HList as HFoldl<S, F>>::Output;

    #[inline]
    fn call_n(mut self, arguments: Args) -> Self::Output {
        arguments.into_hlist().foldl_with(self.state, &mut self.f)
    }
}

/// The function `unpack` receives when deriving `foldr`.
#[derive(Clone, Copy, Debug)]
pub struct FoldrArgs<S, F> {
    state: S,
    f: F,
}

impl<S, F, Args> FuncN<Args> for FoldrArgs<S, F>
where
    Args: IntoHList,
    Args::HList: HFoldr<S, F>,
{
    type Output = <Args::HList as HFoldr<S, F>>::Output;

    #[inline]
    fn call_n(mut self, arguments: Args) -> Self::Output {
        arguments.into_hlist().foldr_with(self.state, &mut self.f)
    }
}

/// `foldl` of a data type that provides `unpack`.
#[inline]
pub fn foldl_via_unpack<Tg, Xs, S, F>(
    xs: Xs,
    state: S,
    f: F,
) -> <Tg as UnpackImpl<Xs, FoldlArgs<S, F>>>::Output
where
    Tg: UnpackImpl<Xs, FoldlArgs<S, F>>,
{
    Tg::unpack(xs, FoldlArgs { state, f })
}

/// `foldr` of a data type that provides `unpack`.
#[inline]
pub fn foldr_via_unpack<Tg, Xs, S, F>(
    xs: Xs,
    state: S,
    f: F,
) -> <Tg as UnpackImpl<Xs, FoldrArgs<S, F>>>::Output
where
    Tg: UnpackImpl<Xs, FoldrArgs<S, F>>,
{
    Tg::unpack(xs, FoldrArgs { state, f })
}

// =============================================================================
// Seedless folds of runtime-sized structures
// =============================================================================

/// Left fold step that takes the first element as the state.
#[derive(Clone, Copy, Debug)]
pub struct Seed1<F>(F);

impl<T, F> Func2<Option<T>, T> for Seed1<F>
where
    F: Func2<T, T, Output = T>,
{
    type Output = Option<T>;

    #[inline]
    fn call2(&mut self, state: Option<T>, element: T) -> Option<T> {
        Some(match state {
            None => element,
            Some(state) => self.0.call2(state, element),
        })
    }
}

/// Right fold step that takes the last element as the state.
#[derive(Clone, Copy, Debug)]
pub struct SeedR1<F>(F);

impl<T, F> Func2<T, Option<T>> for SeedR1<F>
where
    F: Func2<T, T, Output = T>,
{
    type Output = Option<T>;

    #[inline]
    fn call2(&mut self, element: T, state: Option<T>) -> Option<T> {
        Some(match state {
            None => element,
            Some(state) => self.0.call2(element, state),
        })
    }
}

/// `foldl1` from `foldl`.
///
/// # Panics
///
/// Panics if `xs` is empty.
#[track_caller]
pub fn foldl1<Tg, Xs, T, F>(xs: Xs, f: F) -> T
where
    Tg: FoldlImpl<Xs, Option<T>, Seed1<F>, Output = Option<T>>,
{
    Tg::foldl(xs, None, Seed1(f))
        .unwrap_or_else(|| precondition_violation("foldl1", "empty structure"))
}

/// `foldr1` from `foldr`.
///
/// # Panics
///
/// Panics if `xs` is empty.
#[track_caller]
pub fn foldr1<Tg, Xs, T, F>(xs: Xs, f: F) -> T
where
    Tg: FoldrImpl<Xs, Option<T>, SeedR1<F>, Output = Option<T>>,
{
    Tg::foldr(xs, None, SeedR1(f))
        .unwrap_or_else(|| precondition_violation("foldr1", "empty structure"))
}

// =============================================================================
// Length
// =============================================================================

/// Adds one per element, whatever its type.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountUp;

impl<X> Func2<usize, X> for CountUp {
    type Output = usize;

    #[inline]
    fn call2(&mut self, count: usize, _element: X) -> usize {
        count + 1
    }
}

/// `length` by counting with `foldl`.
pub fn length<Tg, Xs>(xs: &Xs) -> usize
where
    Tg: FoldlImpl<Xs, usize, CountUp, Output = usize>,
    Xs: Clone,
{
    Tg::foldl(xs.clone(), 0, CountUp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ListTag, MaybeTag, just, nothing};
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn folds_through_unpack_see_every_element() {
        let concat = |state: String, element: char| format!("{state}{element}");
        assert_eq!(foldl_via_unpack::<MaybeTag, _, _, _>(just('x'), String::new(), concat), "x");
        assert_eq!(foldr_via_unpack::<MaybeTag, _, _, _>(nothing(), 5, |_: u8, s: i32| s), 5);
    }

    #[rstest]
    fn seedless_folds_start_at_the_ends() {
        let minus = |left: i32, right: i32| left - right;
        assert_eq!(foldl1::<ListTag, _, _, _>(list![10, 3, 2], minus), 5);
        assert_eq!(foldr1::<ListTag, _, _, _>(list![10, 3, 2], minus), 9);
    }

    #[rstest]
    #[should_panic(expected = "foldl1: precondition violated: empty structure")]
    fn foldl1_of_an_empty_list_panics() {
        let _ = foldl1::<ListTag, _, i32, _>(list![], |a: i32, b: i32| a + b);
    }

    #[rstest]
    fn counted_length_matches_the_element_count() {
        assert_eq!(length::<MaybeTag, _>(&just(1)), 1);
        assert_eq!(length::<ListTag, _>(&list!['a', 'b']), 2);
    }
}
