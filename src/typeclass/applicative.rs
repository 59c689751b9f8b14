//! Applicative type class: lifting values and combining independent
//! computations.
//!
//! `map2`, `map3` and `product` succeed only when every operand does. For
//! `Res` the first `Err` (left to right) is the one returned.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))                  // homomorphism
//! fa.map2(pure(()), |a, _| a) == fa              // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let lifted: Opt<i32> = <Opt<()>>::pure(42);
//! assert_eq!(lifted, Opt::Some(42));
//!
//! let sum = Opt::Some(1).map2(Opt::Some(2), |left, right| left + right);
//! assert_eq!(sum, Opt::Some(3));
//! ```

use super::functor::Functor;
use crate::option::Opt;
use crate::result::Res;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts `value` into the successful shape.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two computations with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three computations with `function`.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the payloads of two computations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// assert_eq!(Opt::Some(1).product(Opt::Some("a")), Opt::Some((1, "a")));
    /// assert_eq!(Opt::Some(1).product(Opt::<&str>::None), Opt::None);
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |left, right| (left, right))
    }
}

// =============================================================================
// Opt<A> Implementation
// =============================================================================

impl<A> Applicative for Opt<A> {
    #[inline]
    fn pure<B>(value: B) -> Opt<B> {
        Opt::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Opt<B>, function: F) -> Opt<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    fn map3<B, C, D, F>(self, second: Opt<B>, third: Opt<C>, function: F) -> Opt<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Opt::Some(first), Opt::Some(second), Opt::Some(third)) => {
                Opt::Some(function(first, second, third))
            }
            _ => Opt::None,
        }
    }
}

// =============================================================================
// Res<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Res<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Res<B, E> {
        Res::Ok(value)
    }

    fn map2<B, C, F>(self, other: Res<B, E>, function: F) -> Res<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Res::Ok(left), Res::Ok(right)) => Res::Ok(function(left, right)),
            (Res::Err(error), _) | (_, Res::Err(error)) => Res::Err(error),
        }
    }

    fn map3<B, C, D, F>(self, second: Res<B, E>, third: Res<C, E>, function: F) -> Res<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Res::Ok(first), Res::Ok(second), Res::Ok(third)) => {
                Res::Ok(function(first, second, third))
            }
            (Res::Err(error), _, _) | (_, Res::Err(error), _) | (_, _, Res::Err(error)) => {
                Res::Err(error)
            }
        }
    }
}
