//! Semigroup type class: types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let greeting = Opt::Some("Hello, ".to_string()).combine(Opt::Some("World!".to_string()));
//! assert_eq!(greeting, Opt::Some("Hello, World!".to_string()));
//!
//! // None is the identity.
//! assert_eq!(Opt::None.combine(Opt::Some(vec![1])), Opt::Some(vec![1]));
//! ```

use crate::option::Opt;
use crate::result::Res;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements with `combine`; `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    /// assert_eq!(String::reduce_all(words), Opt::Some("abc".to_string()));
    /// assert_eq!(String::reduce_all(Vec::new()), Opt::None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Opt<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        Opt::create(iterator.into_iter().reduce(Self::combine))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Combines the payloads; `None` is the identity on either side.
impl<T: Semigroup> Semigroup for Opt<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (present @ Self::Some(_), Self::None) | (Self::None, present) => present,
        }
    }
}

/// Combines the `Ok` payloads; otherwise the first `Err` wins.
impl<T: Semigroup, E> Semigroup for Res<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Ok(left), Self::Ok(right)) => Self::Ok(left.combine(right)),
            (Self::Err(error), _) | (_, Self::Err(error)) => Self::Err(error),
        }
    }
}
