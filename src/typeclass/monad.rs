//! Monad type class: sequencing computations where each step depends on the
//! previous payload.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   // left identity
//! m.flat_map(pure) == m                                         // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! fn halve(n: i32) -> Opt<i32> {
//!     if n % 2 == 0 { Opt::Some(n / 2) } else { Opt::None }
//! }
//!
//! assert_eq!(Opt::Some(8).flat_map(halve).flat_map(halve), Opt::Some(2));
//! assert_eq!(Opt::Some(6).flat_map(halve).flat_map(halve), Opt::None);
//! ```

use super::applicative::Applicative;
use crate::option::Opt;
use crate::result::Res;

/// A type class for applicatives that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Feeds the payload to `function` and returns its container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the first payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// assert_eq!(Opt::Some(1).then(Opt::Some("next")), Opt::Some("next"));
    /// assert_eq!(Opt::<i32>::None.then(Opt::Some("next")), Opt::None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Opt<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Opt<B>
    where
        F: FnOnce(A) -> Opt<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Res<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Res<B, E>
    where
        F: FnOnce(T) -> Res<B, E>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn checked_reciprocal(value: f64) -> Res<f64, String> {
        if value == 0.0 {
            Res::Err("division by zero".to_string())
        } else {
            Res::Ok(1.0 / value)
        }
    }

    #[rstest]
    fn res_flat_map_short_circuits() {
        let outcome = Res::<f64, String>::Ok(0.0).flat_map(checked_reciprocal);
        assert_eq!(outcome, Res::Err("division by zero".to_string()));
    }

    #[rstest]
    fn res_then_keeps_first_error() {
        let failed: Res<i32, &str> = Res::Err("boom");
        assert_eq!(failed.then(Res::<u8, &str>::Ok(1)), Res::Err("boom"));
    }

    #[rstest]
    #[case(Opt::Some(4))]
    #[case(Opt::None)]
    fn opt_right_identity(#[case] value: Opt<i32>) {
        assert_eq!(value.flat_map(<Opt<()>>::pure), value);
    }

    #[rstest]
    fn res_left_identity() {
        let function = |n: i32| -> Res<i32, u8> { Res::Ok(n + 1) };
        assert_eq!(<Res<(), u8>>::pure(1).flat_map(function), function(1));
    }
}
