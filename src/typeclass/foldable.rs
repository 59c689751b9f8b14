//! Foldable type class: reducing a container to a summary value.
//!
//! `Opt` and `Res` hold zero or one element, so every fold visits at most
//! one payload; an `Err` folds like an empty container.
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! assert_eq!(Opt::Some(5).fold_left(10, |total, n| total + n), 15);
//! assert_eq!(Opt::<i32>::None.fold_left(10, |total, n| total + n), 10);
//!
//! let failed: Res<i32, &str> = Res::Err("e");
//! assert_eq!(failed.length(), 0);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::option::Opt;
use crate::result::Res;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// assert_eq!(Opt::Some(7).fold_map(|n| n.to_string()), "7");
    /// assert_eq!(Opt::<i32>::None.fold_map(|n| n.to_string()), "");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Number of elements: 0 or 1.
    fn length(&self) -> usize;

    /// Returns `true` when there is no element.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// The first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Opt<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Opt::None, |accumulator, element| {
            if accumulator.is_some() || !predicate(&element) {
                accumulator
            } else {
                Opt::Some(element)
            }
        })
    }

    /// Returns `true` if some element satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Returns `true` if every element satisfies `predicate`; vacuously
    /// `true` when empty.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Opt<A> Implementation
// =============================================================================

impl<A> Foldable for Opt<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }

    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().is_some_and(|value| predicate(value))
    }
}

// =============================================================================
// Res<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Res<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Ok(value) => function(init, value),
            Self::Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Ok(value) => function(value, init),
            Self::Err(_) => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }

    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.ok_ref().is_some_and(|value| predicate(value))
    }
}
