//! Conversions between `Opt`/`Res` and the standard library's `Option`/`Result`.
//!
//! Discriminants are preserved exactly: `Some`/`None` map to `Some`/`None`
//! and `Ok`/`Err` to `Ok`/`Err`, in both directions. The core types never
//! depend on this module.
//!
//! Results without a success payload use `Res<(), E>`. They convert to and
//! from an `Opt<E>` holding only the error: `Ok(())` is `None` and `Err(e)`
//! is `Some(e)`.
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let from_std: Opt<i32> = Some(3).into_opt();
//! assert_eq!(from_std, Opt::Some(3));
//!
//! let back: Result<i32, String> = Res::Ok(3).into();
//! assert_eq!(back, Ok(3));
//!
//! let outcome: Res<(), &str> = Res::Err("disk full");
//! assert_eq!(outcome.into_error_opt(), Opt::Some("disk full"));
//! ```

use crate::option::Opt;
use crate::result::Res;

impl<T> From<Option<T>> for Opt<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::create(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    #[inline]
    fn from(value: Opt<T>) -> Self {
        value.into_std()
    }
}

impl<T> From<T> for Opt<T> {
    /// Wraps a value in `Some`.
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T, E> From<Result<T, E>> for Res<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Res<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: Res<T, E>) -> Self {
        value.into_std()
    }
}

/// Converts a standard `Option` into an [`Opt`] with method syntax.
pub trait IntoOpt<T> {
    /// Performs the conversion.
    fn into_opt(self) -> Opt<T>;
}

impl<T> IntoOpt<T> for Option<T> {
    #[inline]
    fn into_opt(self) -> Opt<T> {
        Opt::create(self)
    }
}

/// Converts a standard `Result` into a [`Res`] with method syntax.
pub trait IntoRes<T, E> {
    /// Performs the conversion.
    fn into_res(self) -> Res<T, E>;
}

impl<T, E> IntoRes<T, E> for Result<T, E> {
    #[inline]
    fn into_res(self) -> Res<T, E> {
        Res::from(self)
    }
}

impl<E> Res<(), E> {
    /// Converts a unit result into its error, if any.
    #[inline]
    pub fn into_error_opt(self) -> Opt<E> {
        self.err()
    }

    /// Builds a unit result from an optional error: `None` is `Ok(())`.
    #[inline]
    pub fn from_error_opt(error: Opt<E>) -> Self {
        match error {
            Opt::Some(error) => Self::Err(error),
            Opt::None => Self::Ok(()),
        }
    }
}
