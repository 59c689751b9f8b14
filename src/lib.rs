//! # optres
//!
//! Algebraic `Opt<T>` (optional value) and `Res<T, E>` (fallible value)
//! containers with a large combinator surface.
//!
//! ## Overview
//!
//! - **[`Opt`](option::Opt)**: `Some(T)` or `None`; map, bind, filter, zip,
//!   xor, flatten, transpose, zero-or-one slice and iterator views.
//! - **[`Res`](result::Res)**: `Ok(T)` or `Err(E)`; the same combinators on
//!   both channels, plus [`Res::attempt`](result::Res::attempt) to capture
//!   panics as values.
//! - **Numeric lifting**: arithmetic operators and numeric predicates on
//!   `Opt<T: Numeric>`, with `None` as the absorbing element.
//! - **Collections**: `get_or_none`, `first_or_none`, `values`, `oks`, ...
//! - **Typeclasses**: `Functor`, `Applicative`, `Monad`, `Foldable`,
//!   `Semigroup` and `Monoid` instances.
//! - **Interop**: lossless conversions to and from `std::option::Option` and
//!   `std::result::Result`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their instances
//! - `collections`: Map, slice and iterator extensions
//! - `numeric`: Arithmetic lifting through `Opt`
//! - `async`: Async combinators (`futures`, `pin-project-lite`)
//! - `tracing`: Debug events when failures are captured
//! - `serde`: Serialization (`serde`)
//! - `json`: Lenient JSON decoding helpers (`serde_json`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optres::prelude::*;
//!
//! let port = Opt::<u16>::parse("8080").ok_or("missing port");
//! assert_eq!(port, Res::Ok(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, the error types and every enabled
/// extension trait.
///
/// # Usage
///
/// ```rust
/// use optres::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Exn, InvalidState};
    pub use crate::interop::{IntoOpt, IntoRes};
    pub use crate::option::Opt;
    pub use crate::result::Res;

    #[cfg(feature = "numeric")]
    pub use crate::num::Numeric;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::future::*;
}

pub mod error;
pub mod interop;
pub mod option;
pub mod result;

#[cfg(feature = "numeric")]
pub mod num;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "async")]
pub mod future;

#[cfg(feature = "serde")]
pub mod serde;
