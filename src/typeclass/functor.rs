//! Functor type class: mapping over the payload while keeping the shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let transformed: Opt<String> = Opt::Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Opt::Some("5".to_string()));
//!
//! let failed: Res<i32, &str> = Res::Err("offline");
//! assert_eq!(failed.fmap(|n| n + 1), Res::Err("offline"));
//! ```

use super::higher::TypeConstructor;
use crate::option::Opt;
use crate::result::Res;

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, if there is one.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the payload without consuming
    /// the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// let name = Opt::Some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|text| text.len()), Opt::Some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the payload with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Opt<A> Implementation
// =============================================================================

impl<A> Functor for Opt<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Opt<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Opt<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Res<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Res<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Res<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Res<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Res::Ok(value) => Res::Ok(function(value)),
            Res::Err(error) => Res::Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Opt::Some(3), Opt::Some(6))]
    #[case(Opt::None, Opt::None)]
    fn opt_fmap(#[case] input: Opt<i32>, #[case] expected: Opt<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn opt_replace_and_void() {
        assert_eq!(Opt::Some(1).replace('x'), Opt::Some('x'));
        assert_eq!(Opt::<i32>::None.replace('x'), Opt::None);
        assert_eq!(Opt::Some(1).void(), Opt::Some(()));
    }

    #[rstest]
    fn res_fmap_ref_clones_error() {
        let failed: Res<String, String> = Res::Err("lost".to_string());
        assert_eq!(failed.fmap_ref(|text| text.len()), Res::Err("lost".to_string()));
        assert!(failed.is_err());
    }

    #[rstest]
    fn res_void_keeps_error() {
        let failed: Res<i32, u8> = Res::Err(7);
        assert_eq!(failed.void(), Res::Err(7));
        assert_eq!(Res::<i32, u8>::Ok(3).void(), Res::Ok(()));
    }
}
