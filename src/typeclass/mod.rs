//! Type class instances for `Opt` and `Res`.
//!
//! - [`Functor`]: Mapping over the payload
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing dependent computations
//! - [`Foldable`]: Folding zero-or-one payloads to a summary value
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to emulate them, so
//! `Opt<_>` and `Res<_, E>` share one set of trait definitions.
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let lifted: Opt<i32> = <Opt<()>>::pure(42);
//! let doubled = lifted.flat_map(|n| Opt::Some(n * 2));
//! assert_eq!(doubled.fold_left(0, |total, n| total + n), 84);
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
