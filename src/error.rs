//! Error types shared by [`Opt`](crate::option::Opt) and [`Res`](crate::result::Res).
//!
//! - [`InvalidState`]: returned (or raised as a panic message) when a value is
//!   extracted from the wrong variant, e.g. `unwrap` on `None`.
//! - [`Exn`]: an opaque captured failure used as the error channel of
//!   `Res<T, Exn>`. It is produced by [`Res::attempt`](crate::result::Res::attempt)
//!   and friends and is never re-raised automatically.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Raised when an accessor is used against the wrong variant.
///
/// The panicking accessors (`unwrap`, `expect`, `unwrap_err`, ...) panic with
/// this error's message. The `try_*` accessors and [`Res::raise`] return it
/// as a value instead, and when the failing `Res` carried an [`Exn`], that
/// captured failure becomes this error's [`source`](StdError::source).
///
/// [`Res::raise`]: crate::result::Res::raise
///
/// # Examples
///
/// ```rust
/// use optres::option::Opt;
///
/// let error = Opt::<i32>::None.try_unwrap().unwrap_err();
/// assert_eq!(error.message(), "called `Opt::unwrap()` on a `None` value");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct InvalidState {
    message: String,
    #[source]
    cause: Option<Exn>,
}

impl InvalidState {
    /// Creates an `InvalidState` with the given message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an `InvalidState` whose source is a captured failure.
    pub fn with_cause(message: impl Into<String>, cause: Exn) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the captured failure this error was raised from, if any.
    pub const fn cause(&self) -> Option<&Exn> {
        self.cause.as_ref()
    }

    /// Consumes the error and returns its cause.
    pub fn into_cause(self) -> Option<Exn> {
        self.cause
    }
}

/// Message error used by [`Exn::msg`].
#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl StdError for Message {}

/// Payload of a panic captured by [`Exn::from_panic`].
#[derive(Debug)]
struct Panicked(String);

impl fmt::Display for Panicked {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "panicked: {}", self.0)
    }
}

impl StdError for Panicked {}

/// A captured failure, carried as inert data in the error channel of a `Res`.
///
/// `Exn` wraps any `std::error::Error + Send + Sync`, a plain message, or the
/// payload of a caught panic. It is cheap to clone (reference counted) so
/// `Res<T, Exn>` stays `Clone` whenever `T` is.
///
/// `Exn` deliberately has no blanket `From<E: Error>` impl, because it is an
/// `Error` itself; use [`Exn::new`].
///
/// # Examples
///
/// ```rust
/// use optres::error::Exn;
///
/// let parse_failure = "x".parse::<i32>().unwrap_err();
/// let exn = Exn::new(parse_failure);
/// assert_eq!(exn.to_string(), "invalid digit found in string");
/// assert!(exn.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
#[derive(Clone)]
pub struct Exn {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Exn {
    /// Captures an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an `Exn` from a bare message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(Message(message.to_string()))
    }

    /// Converts the payload of a caught panic into an `Exn`.
    ///
    /// An [`InvalidState`] payload (raised by `Res::unwrap_exn` or
    /// `Res::expect_exn`) is kept as the captured error, cause included.
    /// `&'static str` and `String` payloads keep their text; anything else is
    /// reported as an opaque panic.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<InvalidState>() {
            Ok(state) => return Self::new(*state),
            Err(payload) => payload,
        };
        let text = match payload.downcast::<String>() {
            Ok(text) => *text,
            Err(payload) => payload.downcast_ref::<&'static str>().map_or_else(
                || "Box<dyn Any>".to_string(),
                |text| (*text).to_string(),
            ),
        };
        Self::new(Panicked(text))
    }

    /// Returns `true` if this failure was captured from a panic.
    pub fn is_panic(&self) -> bool {
        self.inner.is::<Panicked>()
    }

    /// Attempts to view the captured error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns the captured error as a trait object.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Debug for Exn {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Exn").field(&self.inner).finish()
    }
}

impl fmt::Display for Exn {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl StdError for Exn {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn invalid_state_displays_message() {
        let error = InvalidState::new("called on the wrong variant");
        assert_eq!(error.to_string(), "called on the wrong variant");
        assert!(error.source().is_none());
    }

    #[rstest]
    fn invalid_state_exposes_cause_as_source() {
        let error = InvalidState::with_cause("lookup failed", Exn::msg("disk gone"));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk gone"));
        assert_eq!(error.cause().map(ToString::to_string).as_deref(), Some("disk gone"));
    }

    #[rstest]
    #[case(Box::new("static text") as Box<dyn Any + Send>, "panicked: static text")]
    #[case(Box::new(String::from("owned text")) as Box<dyn Any + Send>, "panicked: owned text")]
    #[case(Box::new(17_u8) as Box<dyn Any + Send>, "panicked: Box<dyn Any>")]
    fn exn_from_panic_keeps_text(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        let exn = Exn::from_panic(payload);
        assert!(exn.is_panic());
        assert_eq!(exn.to_string(), expected);
    }

    #[rstest]
    fn exn_downcasts_to_original_error() {
        let exn = Exn::new("abc".parse::<u8>().unwrap_err());
        assert!(exn.downcast_ref::<std::num::ParseIntError>().is_some());
        assert!(exn.downcast_ref::<std::num::ParseFloatError>().is_none());
        assert!(!exn.is_panic());
    }

    #[rstest]
    fn exn_clones_share_the_error() {
        let exn = Exn::msg("shared");
        let copy = exn.clone();
        assert_eq!(exn.to_string(), copy.to_string());
    }
}
