//! Monoid type class: a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a    // left identity
//! a.combine(Monoid::empty()) == a    // right identity
//! ```
//!
//! `Opt<T>` is a monoid for every semigroup `T`, with `None` as the identity.
//! `Res<T, E>` is a monoid when `T` is, with `Ok(T::empty())` as the identity.
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let parts = vec![Opt::Some("a".to_string()), Opt::None, Opt::Some("b".to_string())];
//! assert_eq!(Opt::combine_all(parts), Opt::Some("ab".to_string()));
//! ```

use super::semigroup::Semigroup;
use crate::option::Opt;
use crate::result::Res;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for `combine`.
    fn empty() -> Self;

    /// Combines all elements, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}
}

impl<T: Semigroup> Monoid for Opt<T> {
    #[inline]
    fn empty() -> Self {
        Self::None
    }
}

impl<T: Monoid, E> Monoid for Res<T, E> {
    #[inline]
    fn empty() -> Self {
        Self::Ok(T::empty())
    }
}
