//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Opt<_>` or `Res<_, E>` as type constructors
//! directly. [`TypeConstructor`] names the applied type (`Inner`) and the
//! same constructor applied to another type (`WithType<B>`), which is enough
//! to state `Functor`, `Applicative` and `Monad` once for both containers.
//!
//! # Example
//!
//! ```rust
//! use optres::prelude::*;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Opt<String> = emptied(Opt::Some(42));
//! assert_eq!(none_string, Opt::None);
//! ```

use crate::option::Opt;
use crate::result::Res;

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Opt<A> {
    type Inner = A;
    type WithType<B> = Opt<B>;
}

/// The error type is fixed; only the success type varies.
impl<T, E> TypeConstructor for Res<T, E> {
    type Inner = T;
    type WithType<B> = Res<B, E>;
}
