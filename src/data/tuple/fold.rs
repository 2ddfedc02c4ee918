//! Type-level folds and maps over tuples.
//!
//! Each trait recurses on the structure of the tuple, so the result type of
//! a fold can change at every step, as in
//! `foldl(tuple![1, 'a'], String::new(), push)` where `push` is a polymorphic
//! function accepting both an integer and a character.

use super::{HCons, HList, HNil};
use crate::core::function::{Func1, Func2};

/// `foldl` on a tuple: `f(...f(f(state, x0), x1)..., xn)`.
pub trait HFoldl<S, F>: HList {
    /// The final state.
    type Output;

    /// Folds from the left, calling `f` once per element in order.
    fn foldl_with(self, state: S, f: &mut F) -> Self::Output;
}

impl<S, F> HFoldl<S, F> for HNil {
    type Output = S;

    #[inline]
    fn foldl_with(self, state: S, _f: &mut F) -> S {
        state
    }
}

impl<H, T, S, F> HFoldl<S, F> for HCons<H, T>
where
    F: Func2<S, H>,
    T: HFoldl<F::Output, F>,
{
    type Output = T::Output;

    #[inline]
    fn foldl_with(self, state: S, f: &mut F) -> Self::Output {
        let next = f.call2(state, self.head);
        self.tail.foldl_with(next, f)
    }
}

/// `foldr` on a tuple: `f(x0, f(x1, ... f(xn, state)))`.
pub trait HFoldr<S, F>: HList {
    /// The final state.
    type Output;

    /// Folds from the right.
    fn foldr_with(self, state: S, f: &mut F) -> Self::Output;
}

impl<S, F> HFoldr<S, F> for HNil {
    type Output = S;

    #[inline]
    fn foldr_with(self, state: S, _f: &mut F) -> S {
        state
    }
}

impl<H, T, S, F> HFoldr<S, F> for HCons<H, T>
where
    T: HFoldr<S, F>,
    F: Func2<H, T::Output>,
{
    type Output = F::Output;

    #[inline]
    fn foldr_with(self, state: S, f: &mut F) -> Self::Output {
        let rest = self.tail.foldr_with(state, f);
        f.call2(self.head, rest)
    }
}

/// `foldl1` on a non-empty tuple, seeded with the first element.
///
/// There is no implementation for `HNil`: folding an empty tuple without a
/// seed does not type-check.
#[diagnostic::on_unimplemented(
    message = "`foldl1` needs a non-empty tuple, found `{Self}`",
    note = "use `foldl` with an explicit initial state"
)]
pub trait HFoldl1<F>: HList {
    /// The final state.
    type Output;

    /// Folds from the left starting at the first element.
    fn foldl1_with(self, f: &mut F) -> Self::Output;
}

impl<H, T, F> HFoldl1<F> for HCons<H, T>
where
    T: HFoldl<H, F>,
{
    type Output = T::Output;

    #[inline]
    fn foldl1_with(self, f: &mut F) -> Self::Output {
        self.tail.foldl_with(self.head, f)
    }
}

/// `foldr1` on a non-empty tuple, seeded with the last element.
#[diagnostic::on_unimplemented(
    message = "`foldr1` needs a non-empty tuple, found `{Self}`",
    note = "use `foldr` with an explicit initial state"
)]
pub trait HFoldr1<F>: HList {
    /// The final state.
    type Output;

    /// Folds from the right starting at the last element.
    fn foldr1_with(self, f: &mut F) -> Self::Output;
}

impl<H, F> HFoldr1<F> for HCons<H, HNil> {
    type Output = H;

    #[inline]
    fn foldr1_with(self, _f: &mut F) -> H {
        self.head
    }
}

impl<H, H2, T2, F> HFoldr1<F> for HCons<H, HCons<H2, T2>>
where
    HCons<H2, T2>: HFoldr1<F>,
    F: Func2<H, <HCons<H2, T2> as HFoldr1<F>>::Output>,
{
    type Output = F::Output;

    #[inline]
    fn foldr1_with(self, f: &mut F) -> Self::Output {
        let rest = self.tail.foldr1_with(f);
        f.call2(self.head, rest)
    }
}

/// Maps every element of a tuple, left to right.
pub trait HMap<F>: HList {
    /// The mapped tuple.
    type Output: HList;

    /// Applies `f` to every element.
    fn map_with(self, f: &mut F) -> Self::Output;
}

impl<F> HMap<F> for HNil {
    type Output = Self;

    #[inline]
    fn map_with(self, _f: &mut F) -> Self {
        self
    }
}

impl<H, T, F> HMap<F> for HCons<H, T>
where
    F: Func1<H>,
    T: HMap<F>,
{
    type Output = HCons<F::Output, T::Output>;

    #[inline]
    fn map_with(self, f: &mut F) -> Self::Output {
        let head = f.call1(self.head);
        HCons {
            head,
            tail: self.tail.map_with(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple;
    use rstest::rstest;

    /// Appends every element to a growing string, state first.
    struct RenderLeft;

    impl<X: std::fmt::Debug> Func2<String, X> for RenderLeft {
        type Output = String;

        fn call2(&mut self, mut state: String, element: X) -> String {
            state.push_str(&format!("{element:?};"));
            state
        }
    }

    /// Appends every element to a growing string, state last.
    struct RenderRight;

    impl<X: std::fmt::Debug> Func2<X, String> for RenderRight {
        type Output = String;

        fn call2(&mut self, element: X, mut state: String) -> String {
            state.push_str(&format!("{element:?};"));
            state
        }
    }

    #[rstest]
    fn foldl_visits_heterogeneous_elements_left_to_right() {
        let rendered = tuple![1, 'a', "b"].foldl_with(String::new(), &mut RenderLeft);
        assert_eq!(rendered, r#"1;'a';"b";"#);
    }

    #[rstest]
    fn foldr_visits_heterogeneous_elements_right_to_left() {
        let rendered = tuple![1, 'a', "b"].foldr_with(String::new(), &mut RenderRight);
        assert_eq!(rendered, r#""b";'a';1;"#);
    }

    #[rstest]
    fn foldl1_and_foldr1_seed_with_the_ends() {
        let mut minus = |left: i32, right: i32| left - right;
        assert_eq!(tuple![10, 3, 2].foldl1_with(&mut minus), 5);
        assert_eq!(tuple![10, 3, 2].foldr1_with(&mut minus), 9);
        assert_eq!(tuple![4].foldr1_with(&mut minus), 4);
    }

    #[rstest]
    fn map_changes_element_types() {
        struct Describe;
        impl<X: std::fmt::Display> Func1<X> for Describe {
            type Output = String;
            fn call1(&mut self, element: X) -> String {
                element.to_string()
            }
        }
        let mapped = tuple![1, 'x', 2.5].map_with(&mut Describe);
        assert_eq!(mapped, tuple!["1".to_owned(), "x".to_owned(), "2.5".to_owned()]);
    }
}
