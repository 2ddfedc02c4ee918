//! Polymorphic function objects.
//!
//! Folding a heterogeneous tuple calls the same function with a different
//! argument type at every position, which an ordinary closure cannot accept.
//! The traits here abstract over "something callable with these arguments":
//!
//! - [`Func1`] and [`Func2`] are called repeatedly (`&mut self`), like `FnMut`;
//! - [`FuncN`] is called once with a whole argument tuple, like `FnOnce`.
//!
//! Closures implement all of them through blanket impls. A struct
//! implementing `Func2<A, B>` for many `A`/`B` acts as a polymorphic function;
//! [`Plus`], [`Times`], [`Less`] and [`Equal`] are the ones shipped here.
//!
//! # Examples
//!
//! ```rust
//! use tagfold::core::function::{Func2, Plus};
//!
//! let mut plus = Plus;
//! assert_eq!(plus.call2(1, 2), 3);
//! assert_eq!(plus.call2(1.5, 2.0), 3.5);
//!
//! let mut concat = |left: String, right: &str| left + right;
//! assert_eq!(concat.call2(String::from("ab"), "c"), "abc");
//! ```

use std::ops::{Add, Mul};

/// A function of one argument that can be called repeatedly.
pub trait Func1<A> {
    /// Result type for argument type `A`.
    type Output;

    /// Calls the function.
    fn call1(&mut self, argument: A) -> Self::Output;
}

impl<A, R, F> Func1<A> for F
where
    F: FnMut(A) -> R,
{
    type Output = R;

    #[inline]
    fn call1(&mut self, argument: A) -> R {
        self(argument)
    }
}

/// A function of two arguments that can be called repeatedly.
pub trait Func2<A, B> {
    /// Result type for argument types `A` and `B`.
    type Output;

    /// Calls the function.
    fn call2(&mut self, first: A, second: B) -> Self::Output;
}

impl<A, B, R, F> Func2<A, B> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn call2(&mut self, first: A, second: B) -> R {
        self(first, second)
    }
}

/// A function called once with a flat tuple of arguments.
///
/// `Args` is `()`, `(A,)`, `(A, B)` and so on, up to twelve elements.
pub trait FuncN<Args> {
    /// Result type for the argument tuple `Args`.
    type Output;

    /// Calls the function with the elements of `arguments` as positional
    /// arguments.
    fn call_n(self, arguments: Args) -> Self::Output;
}

macro_rules! impl_func_n {
    ($($argument:ident),*) => {
        impl<Function, Return, $($argument),*> FuncN<($($argument,)*)> for Function
        where
            Function: FnOnce($($argument),*) -> Return,
        {
            type Output = Return;

            #[inline]
            #[allow(non_snake_case)]
            fn call_n(self, ($($argument,)*): ($($argument,)*)) -> Return {
                self($($argument),*)
            }
        }
    };
}

impl_func_n!();
impl_func_n!(A);
impl_func_n!(A, B);
impl_func_n!(A, B, C);
impl_func_n!(A, B, C, D);
impl_func_n!(A, B, C, D, E);
impl_func_n!(A, B, C, D, E, F);
impl_func_n!(A, B, C, D, E, F, G);
impl_func_n!(A, B, C, D, E, F, G, H);
impl_func_n!(A, B, C, D, E, F, G, H, I);
impl_func_n!(A, B, C, D, E, F, G, H, I, J);
impl_func_n!(A, B, C, D, E, F, G, H, I, J, K);
impl_func_n!(A, B, C, D, E, F, G, H, I, J, K, L);

// =============================================================================
// Polymorphic functions
// =============================================================================

/// `a + b` for any pair of addable types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Plus;

impl<A: Add<B>, B> Func2<A, B> for Plus {
    type Output = A::Output;

    #[inline]
    fn call2(&mut self, first: A, second: B) -> Self::Output {
        first + second
    }
}

/// `a * b` for any pair of multipliable types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Times;

impl<A: Mul<B>, B> Func2<A, B> for Times {
    type Output = A::Output;

    #[inline]
    fn call2(&mut self, first: A, second: B) -> Self::Output {
        first * second
    }
}

/// `a < b` on references, usable as a strict weak order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<'a, 'b, A: PartialOrd<B> + ?Sized, B: ?Sized> Func2<&'a A, &'b B> for Less {
    type Output = bool;

    #[inline]
    fn call2(&mut self, first: &'a A, second: &'b B) -> bool {
        first < second
    }
}

/// `a == b` on references, usable as an equivalence predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Equal;

impl<'a, 'b, A: PartialEq<B> + ?Sized, B: ?Sized> Func2<&'a A, &'b B> for Equal {
    type Output = bool;

    #[inline]
    fn call2(&mut self, first: &'a A, second: &'b B) -> bool {
        first == second
    }
}

/// The unary predicate `x == value`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EqualTo<V>(pub V);

impl<'a, X: PartialEq<V> + ?Sized, V> Func1<&'a X> for EqualTo<V> {
    type Output = bool;

    #[inline]
    fn call1(&mut self, argument: &'a X) -> bool {
        *argument == self.0
    }
}

/// The negation of a unary predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Not<P>(pub P);

impl<'a, X: ?Sized, P> Func1<&'a X> for Not<P>
where
    P: Func1<&'a X, Output = bool>,
{
    type Output = bool;

    #[inline]
    fn call1(&mut self, argument: &'a X) -> bool {
        !self.0.call1(argument)
    }
}

/// A binary function with its arguments swapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flip<F>(pub F);

impl<A, B, F: Func2<B, A>> Func2<A, B> for Flip<F> {
    type Output = F::Output;

    #[inline]
    fn call2(&mut self, first: A, second: B) -> Self::Output {
        self.0.call2(second, first)
    }
}

/// Builds the pair `(a, b)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MakePair;

impl<A, B> Func2<A, B> for MakePair {
    type Output = (A, B);

    #[inline]
    fn call2(&mut self, first: A, second: B) -> (A, B) {
        (first, second)
    }
}
