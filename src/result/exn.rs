//! The exception channel: `Res<T, Exn>`.
//!
//! Panics and foreign `std::error::Error` values cross into the algebraic
//! model only here. Once captured, an [`Exn`] is inert data; turning it back
//! into a failure is an explicit step: [`Res::raise`] / [`Res::raise_with`]
//! return it, [`Res::unwrap_exn`] / [`Res::expect_exn`] panic with it.

use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use super::Res;
use crate::error::{Exn, InvalidState};

impl<T> Res<T, Exn> {
    /// Builds a successful `Res` on the exception channel.
    #[inline]
    pub const fn ok_exn(value: T) -> Self {
        Self::Ok(value)
    }

    /// Captures `error` as the failure of this `Res`.
    #[inline]
    pub fn err_exn<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Err(Exn::new(error))
    }

    /// Runs `function`, turning a panic into `Err(Exn)`.
    ///
    /// The panic hook still runs, so the panic message is printed as usual.
    /// Nothing is caught when the crate is built with `panic = "abort"`.
    ///
    /// `function` is wrapped in [`AssertUnwindSafe`]: state it mutated before
    /// panicking is observable afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// let fine = Res::attempt(|| 6 * 7);
    /// assert_eq!(fine.ok().unwrap(), 42);
    ///
    /// let broken = Res::attempt(|| -> i32 { panic!("index out of range") });
    /// let error = broken.err().unwrap();
    /// assert!(error.is_panic());
    /// assert_eq!(error.to_string(), "panicked: index out of range");
    /// ```
    pub fn attempt<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let exn = Exn::from_panic(payload);
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %exn, "captured panic as an error value");
                Self::Err(exn)
            }
        }
    }

    /// Runs a fallible `function`, capturing its error (or a panic) as `Exn`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// let parsed = Res::attempt_fallible(|| "12".parse::<u32>());
    /// assert_eq!(parsed.ok().unwrap(), 12);
    ///
    /// let rejected = Res::attempt_fallible(|| "twelve".parse::<u32>());
    /// assert!(rejected.err().is_some_and(|error| !error.is_panic()));
    /// ```
    pub fn attempt_fallible<F, E>(function: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: StdError + Send + Sync + 'static,
    {
        Res::<Result<T, E>, Exn>::attempt(function).and_then(|outcome| match outcome {
            Ok(value) => Self::Ok(value),
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %error, "captured error value");
                Self::err_exn(error)
            }
        })
    }

    /// Re-surfaces a captured failure as an [`InvalidState`].
    ///
    /// The message ends with `": {error}"` and the captured [`Exn`] becomes
    /// the new error's source.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error;
    /// use optres::error::Exn;
    /// use optres::result::Res;
    ///
    /// let failed: Res<i32, Exn> = Res::Err(Exn::msg("socket closed"));
    /// let raised = failed.raise().unwrap_err();
    /// assert_eq!(raised.message(), "called `Res::unwrap()` on an `Err` value: socket closed");
    /// assert_eq!(raised.source().unwrap().to_string(), "socket closed");
    /// ```
    pub fn raise(self) -> Result<T, InvalidState> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(exn) => Err(InvalidState::with_cause(
                format!("called `Res::unwrap()` on an `Err` value: {exn}"),
                exn,
            )),
        }
    }

    /// Re-surfaces a captured failure as an [`InvalidState`] reading exactly
    /// `message`, with the captured [`Exn`] as its source.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `Err`.
    pub fn raise_with(self, message: &str) -> Result<T, InvalidState> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(exn) => Err(InvalidState::with_cause(message, exn)),
        }
    }

    /// Returns the `Ok` value, or panics with the [`InvalidState`] that
    /// [`raise`](Self::raise) would return.
    ///
    /// The panic payload is the `InvalidState` itself (via
    /// [`std::panic::panic_any`]), so the captured [`Exn`] stays reachable as
    /// its source. [`Res::attempt`] recovers it unchanged.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::error::{Exn, InvalidState};
    /// use optres::result::Res;
    ///
    /// let recovered: Res<u8, Exn> =
    ///     Res::attempt(|| Res::<u8, Exn>::Err(Exn::msg("host unreachable")).unwrap_exn());
    /// let exn = recovered.err().into_std().unwrap();
    /// let state = exn.downcast_ref::<InvalidState>().unwrap();
    /// assert_eq!(state.cause().unwrap().to_string(), "host unreachable");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_exn(self) -> T {
        match self.raise() {
            Ok(value) => value,
            Err(state) => panic::panic_any(state),
        }
    }

    /// Returns the `Ok` value, or panics with an [`InvalidState`] reading
    /// exactly `message` whose source is the captured [`Exn`].
    ///
    /// This is the panicking form of [`raise_with`](Self::raise_with). The
    /// generic [`Res::expect`] formats the error into a string instead.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect_exn(self, message: &str) -> T {
        match self.raise_with(message) {
            Ok(value) => value,
            Err(state) => panic::panic_any(state),
        }
    }
}
