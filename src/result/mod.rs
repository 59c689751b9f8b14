//! `Res` type - the outcome of a computation that may fail.
//!
//! `Res<T, E>` is either `Ok(T)` or `Err(E)`. Like [`Opt`], it is a plain
//! value: every combinator consumes `self` and returns a new `Res`.
//!
//! `Res<T, Exn>` additionally acts as the boundary between panicking code and
//! value-based error handling; see [`Res::attempt`].
//!
//! # Examples
//!
//! ```rust
//! use optres::result::Res;
//!
//! fn checked_halve(value: i32) -> Res<i32, String> {
//!     if value % 2 == 0 {
//!         Res::Ok(value / 2)
//!     } else {
//!         Res::Err(format!("{value} is odd"))
//!     }
//! }
//!
//! assert_eq!(Res::Ok(12).and_then(checked_halve).and_then(checked_halve), Res::Ok(3));
//! assert_eq!(
//!     Res::Ok(6).and_then(checked_halve).and_then(checked_halve),
//!     Res::Err("3 is odd".to_string())
//! );
//! ```

mod exn;

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidState;
use crate::option::{IntoIter, Iter, Opt};

/// Either a success value (`Ok`) or a failure value (`Err`).
///
/// `Ok` is declared first, so the derived ordering places every `Ok` before
/// every `Err`; values of the same variant compare by payload.
///
/// # Default
///
/// `Res::default()` is **`Err(E::default())`**. A `Res` nobody assigned
/// reads as a failure, never as a success. See the [`Default`] impl.
///
/// # Examples
///
/// ```rust
/// use optres::result::Res;
///
/// let mut outcomes: Vec<Res<i32, &str>> = vec![Res::Err("b"), Res::Ok(2), Res::Err("a"), Res::Ok(1)];
/// outcomes.sort();
/// assert_eq!(outcomes, vec![Res::Ok(1), Res::Ok(2), Res::Err("a"), Res::Err("b")]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Res` may be an `Err` variant, which should be handled"]
pub enum Res<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

impl<T, E> Res<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds an `Ok`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Ok(value)
    }

    /// Builds an `Err`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Err(error)
    }

    /// Parses `text`, keeping the parser's error on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use optres::result::Res;
    ///
    /// let parsed: Res<u8, ParseIntError> = Res::parse("200");
    /// assert_eq!(parsed, Res::Ok(200));
    ///
    /// let overflow: Res<u8, ParseIntError> = Res::parse("300");
    /// assert!(overflow.is_err());
    /// ```
    pub fn parse(text: &str) -> Self
    where
        T: FromStr<Err = E>,
    {
        match text.parse() {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }

    // =========================================================================
    // Discriminant Tests
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Tests for `Ok` and borrows the value in one step.
    #[inline]
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Tests for `Err` and borrows the error in one step.
    #[inline]
    pub const fn err_ref(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Converts `&Res<T, E>` into `Res<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Res<&T, &E> {
        match self {
            Self::Ok(value) => Res::Ok(value),
            Self::Err(error) => Res::Err(error),
        }
    }

    /// Views the `Ok` value as a slice of length zero or one.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Ok(value) => std::slice::from_ref(value),
            Self::Err(_) => &[],
        }
    }

    /// Returns an iterator over the `Ok` value, if any.
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.ok_ref())
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_std(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    // =========================================================================
    // Conversion to Opt
    // =========================================================================

    /// Keeps the `Ok` value, discarding any error.
    #[inline]
    pub fn ok(self) -> Opt<T> {
        match self {
            Self::Ok(value) => Opt::Some(value),
            Self::Err(_) => Opt::None,
        }
    }

    /// Keeps the error, discarding any `Ok` value.
    #[inline]
    pub fn err(self) -> Opt<E> {
        match self {
            Self::Ok(_) => Opt::None,
            Self::Err(error) => Opt::Some(error),
        }
    }

    // =========================================================================
    // Mapping and Folding
    // =========================================================================

    /// Applies `function` to the `Ok` value; errors pass through untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Res<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Res::Ok(function(value)),
            Self::Err(error) => Res::Err(error),
        }
    }

    /// Applies `function` to the error; `Ok` values pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// let failed: Res<i32, i32> = Res::Err(404);
    /// assert_eq!(failed.map_err(|code| format!("status {code}")), Res::Err("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, function: F) -> Res<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Res::Ok(value),
            Self::Err(error) => Res::Err(function(error)),
        }
    }

    /// Applies `function` to the `Ok` value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(_) => default,
        }
    }

    /// Folds both variants into one value.
    ///
    /// `default` receives the error and is only called for `Err`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => default(error),
        }
    }

    /// Calls `function` with a reference to the `Ok` value, then returns `self`.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the error, then returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Monadic bind on the success side.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Res<U, E>
    where
        F: FnOnce(T) -> Res<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Res::Err(error),
        }
    }

    /// Monadic bind on the failure side: recovers from or rewrites an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// let recovered: Res<i32, String> = Res::<i32, &str>::Err("cold cache")
    ///     .or_else(|_| Res::Ok(0));
    /// assert_eq!(recovered, Res::Ok(0));
    /// ```
    #[inline]
    pub fn or_else<E2, F>(self, function: F) -> Res<T, E2>
    where
        F: FnOnce(E) -> Res<T, E2>,
    {
        match self {
            Self::Ok(value) => Res::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Returns `other` if this is `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: Res<U, E>) -> Res<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Res::Err(error),
        }
    }

    /// Returns this value if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn or<E2>(self, other: Res<T, E2>) -> Res<T, E2> {
        match self {
            Self::Ok(value) => Res::Ok(value),
            Self::Err(_) => other,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Ok` value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the `Ok` value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Returns the `Ok` value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Splits into a success flag, a value and an error.
    ///
    /// Only the slot matching the flag is meaningful; the other holds its
    /// type's default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// assert_eq!(Res::<i32, String>::Ok(3).deconstruct(), (true, 3, String::new()));
    /// assert_eq!(Res::<i32, String>::Err("x".into()).deconstruct(), (false, 0, "x".to_string()));
    /// ```
    #[inline]
    pub fn deconstruct(self) -> (bool, T, E)
    where
        T: Default,
        E: Default,
    {
        match self {
            Self::Ok(value) => (true, value, E::default()),
            Self::Err(error) => (false, T::default(), error),
        }
    }
}

// =============================================================================
// Checked Extraction
// =============================================================================

impl<T, E: fmt::Display> Res<T, E> {
    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Err`; the message ends with `": {error}"`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(failure) => panic!("{failure}"),
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with `"{message} - {error}"` if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(failure) => panic!("{failure}"),
        }
    }

    /// Returns the `Ok` value, or an [`InvalidState`] describing the error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// let failure = Res::<i32, &str>::Err("timeout").try_unwrap().unwrap_err();
    /// assert_eq!(failure.message(), "called `Res::unwrap()` on an `Err` value: timeout");
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, InvalidState> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(InvalidState::new(format!(
                "called `Res::unwrap()` on an `Err` value: {error}"
            ))),
        }
    }

    /// Returns the `Ok` value, or an [`InvalidState`] reading
    /// `"{message} - {error}"`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `Err`.
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, InvalidState> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(InvalidState::new(format!("{message} - {error}"))),
        }
    }
}

impl<T: fmt::Debug, E> Res<T, E> {
    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(failure) => panic!("{failure}"),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with `"{message} - {value:?}"` if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self.try_expect_err(message) {
            Ok(error) => error,
            Err(failure) => panic!("{failure}"),
        }
    }

    /// Returns the error, or an [`InvalidState`] if this is `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `Ok`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, InvalidState> {
        match self {
            Self::Ok(value) => Err(InvalidState::new(format!(
                "called `Res::unwrap_err()` on an `Ok` value: {value:?}"
            ))),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the error, or an [`InvalidState`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `Ok`.
    #[inline]
    pub fn try_expect_err(self, message: &str) -> Result<E, InvalidState> {
        match self {
            Self::Ok(value) => Err(InvalidState::new(format!("{message} - {value:?}"))),
            Self::Err(error) => Ok(error),
        }
    }
}

// =============================================================================
// Structural Operations
// =============================================================================

impl<T, E> Res<Opt<T>, E> {
    /// Swaps a `Res` of an `Opt` into an `Opt` of a `Res`.
    ///
    /// `Ok(None)` maps to `None`, `Ok(Some(x))` to `Some(Ok(x))` and `Err(e)`
    /// to `Some(Err(e))`.
    #[inline]
    pub fn transpose(self) -> Opt<Res<T, E>> {
        match self {
            Self::Ok(Opt::Some(value)) => Opt::Some(Res::Ok(value)),
            Self::Ok(Opt::None) => Opt::None,
            Self::Err(error) => Opt::Some(Res::Err(error)),
        }
    }
}

impl<T, E> Res<Res<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// let nested: Res<Res<i32, &str>, &str> = Res::Ok(Res::Err("inner"));
    /// assert_eq!(nested.flatten(), Res::Err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Res<T, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(error) => Res::Err(error),
        }
    }
}

impl<T: Clone, E> Res<&T, E> {
    /// Clones the borrowed `Ok` value.
    #[inline]
    pub fn cloned(self) -> Res<T, E> {
        self.map(T::clone)
    }
}

impl<T: Copy, E> Res<&T, E> {
    /// Copies the borrowed `Ok` value.
    #[inline]
    pub fn copied(self) -> Res<T, E> {
        self.map(|value| *value)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, E: Default> Default for Res<T, E> {
    /// Returns **`Err(E::default())`**.
    ///
    /// A default `Res` is a failure, not a success. Callers that forget to
    /// assign a `Res` observe an error rather than a fabricated value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::Res;
    ///
    /// let unset: Res<i32, String> = Res::default();
    /// assert_eq!(unset, Res::Err(String::new()));
    /// ```
    #[inline]
    fn default() -> Self {
        Self::Err(E::default())
    }
}

/// Forwards a formatting trait to whichever payload is active; the inactive
/// side is never formatted.
macro_rules! forward_format {
    ($($format:ident),* $(,)?) => {
        $(
            impl<T: fmt::$format, E: fmt::$format> fmt::$format for Res<T, E> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        Self::Ok(value) => {
                            formatter.write_str("Ok(")?;
                            fmt::$format::fmt(value, formatter)?;
                        }
                        Self::Err(error) => {
                            formatter.write_str("Err(")?;
                            fmt::$format::fmt(error, formatter)?;
                        }
                    }
                    formatter.write_str(")")
                }
            }
        )*
    };
}

forward_format!(Display, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

impl<T, E> IntoIterator for Res<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ok().into_std())
    }
}

impl<'a, T, E> IntoIterator for &'a Res<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, E, V> FromIterator<Res<A, E>> for Res<V, E>
where
    V: FromIterator<A>,
{
    /// Collects `Ok` values until the first `Err`, which becomes the result.
    fn from_iter<I: IntoIterator<Item = Res<A, E>>>(iterator: I) -> Self {
        let mut first_error = None;
        let collected: V = iterator
            .into_iter()
            .map_while(|element| match element {
                Res::Ok(value) => Some(value),
                Res::Err(error) => {
                    first_error = Some(error);
                    None
                }
            })
            .collect();
        match first_error {
            Some(error) => Self::Err(error),
            None => Self::Ok(collected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn constructors_pick_variant() {
        let success: Res<i32, String> = Res::success(1);
        let failure: Res<i32, String> = Res::failure("no".to_string());
        assert!(success.is_ok());
        assert!(failure.is_err());
        assert_eq!(success.ok_ref(), Some(&1));
        assert_eq!(failure.err_ref().map(String::as_str), Some("no"));
    }

    #[rstest]
    fn default_is_err_of_default_error() {
        let unset: Res<i32, i32> = Res::default();
        assert!(unset.is_err());
        assert_eq!(unset.err_ref(), Some(&0));
        assert_eq!(unset.deconstruct(), (false, 0, 0));
    }

    #[rstest]
    fn map_touches_only_ok() {
        let calls = Cell::new(0);
        let failure: Res<i32, &str> = Res::Err("boom");
        let mapped = failure.map(|value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(mapped, Res::Err("boom"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn map_err_touches_only_err() {
        let calls = Cell::new(0);
        let success: Res<i32, &str> = Res::Ok(1);
        let mapped = success.map_err(|error| {
            calls.set(calls.get() + 1);
            error.len()
        });
        assert_eq!(mapped, Res::Ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Res::Ok(3), 6)]
    #[case(Res::Err("four".to_string()), 4)]
    fn map_or_else_folds_both_sides(#[case] input: Res<i32, String>, #[case] expected: usize) {
        let folded = input.map_or_else(|error| error.len(), |value| usize::try_from(value * 2).unwrap_or(0));
        assert_eq!(folded, expected);
    }

    #[rstest]
    fn and_or_ignore_payloads() {
        let success: Res<i32, &str> = Res::Ok(1);
        let failure: Res<i32, &str> = Res::Err("late");
        assert_eq!(success.and(Res::<&str, &str>::Ok("next")), Res::Ok("next"));
        assert_eq!(failure.and(Res::<&str, &str>::Ok("next")), Res::Err("late"));
        assert_eq!(success.or(Res::<i32, ()>::Ok(9)), Res::Ok(1));
        assert_eq!(failure.or(Res::<i32, ()>::Ok(9)), Res::Ok(9));
    }

    #[rstest]
    fn or_else_not_called_on_ok() {
        let calls = Cell::new(0);
        let result: Res<i32, ()> = Res::<i32, &str>::Ok(5).or_else(|_| {
            calls.set(calls.get() + 1);
            Res::Ok(0)
        });
        assert_eq!(result, Res::Ok(5));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn ok_and_err_convert_to_opt() {
        assert_eq!(Res::<i32, &str>::Ok(1).ok(), Opt::Some(1));
        assert_eq!(Res::<i32, &str>::Ok(1).err(), Opt::None);
        assert_eq!(Res::<i32, &str>::Err("e").ok(), Opt::None);
        assert_eq!(Res::<i32, &str>::Err("e").err(), Opt::Some("e"));
    }

    #[rstest]
    #[should_panic(expected = "called `Res::unwrap()` on an `Err` value: disk full")]
    fn unwrap_on_err_panics_with_error_text() {
        let _ = Res::<i32, &str>::Err("disk full").unwrap();
    }

    #[rstest]
    #[should_panic(expected = "saving report - disk full")]
    fn expect_on_err_joins_message_and_error() {
        let _ = Res::<i32, &str>::Err("disk full").expect("saving report");
    }

    #[rstest]
    #[should_panic(expected = "called `Res::unwrap_err()` on an `Ok` value: 3")]
    fn unwrap_err_on_ok_panics() {
        let _ = Res::<i32, &str>::Ok(3).unwrap_err();
    }

    #[rstest]
    fn try_expect_err_reports_value() {
        let failure = Res::<i32, &str>::Ok(3).try_expect_err("wanted failure").unwrap_err();
        assert_eq!(failure.message(), "wanted failure - 3");
        assert_eq!(Res::<i32, &str>::Err("e").expect_err("wanted failure"), "e");
    }

    #[rstest]
    fn transpose_maps_every_shape() {
        assert_eq!(Res::<Opt<i32>, &str>::Ok(Opt::None).transpose(), Opt::None);
        assert_eq!(Res::<Opt<i32>, &str>::Ok(Opt::Some(2)).transpose(), Opt::Some(Res::Ok(2)));
        assert_eq!(Res::<Opt<i32>, &str>::Err("e").transpose(), Opt::Some(Res::Err("e")));
    }

    #[rstest]
    fn flatten_removes_one_level() {
        let nested: Res<Res<i32, &str>, &str> = Res::Ok(Res::Ok(1));
        assert_eq!(nested.flatten(), Res::Ok(1));
        let outer: Res<Res<i32, &str>, &str> = Res::Err("outer");
        assert_eq!(outer.flatten(), Res::Err("outer"));
    }

    #[rstest]
    fn display_formats_only_active_payload() {
        assert_eq!(format!("{:.1}", Res::<f64, f64>::Ok(2.26)), "Ok(2.3)");
        assert_eq!(format!("{}", Res::<i32, &str>::Err("bad input")), "Err(bad input)");
        assert_eq!(format!("{:X}", Res::<u8, u8>::Err(171)), "Err(AB)");
    }

    #[rstest]
    fn iteration_covers_only_ok() {
        assert_eq!(Res::<i32, &str>::Ok(4).into_iter().collect::<Vec<_>>(), vec![4]);
        assert_eq!(Res::<i32, &str>::Err("e").iter().count(), 0);
        assert!(Res::<i32, &str>::Err("e").as_slice().is_empty());
        assert_eq!(Res::<i32, &str>::Ok(4).as_slice(), &[4]);
    }

    #[rstest]
    fn collect_returns_first_error() {
        let inputs: Vec<Res<i32, String>> = vec![
            Res::Ok(1),
            Res::Err("second".to_string()),
            Res::Err("third".to_string()),
        ];
        let collected: Res<Vec<i32>, String> = inputs.into_iter().collect();
        assert_eq!(collected, Res::Err("second".to_string()));
    }

    #[rstest]
    fn collect_all_ok() {
        let collected: Res<Vec<i32>, String> = (1..=3).map(Res::Ok).collect();
        assert_eq!(collected, Res::Ok(vec![1, 2, 3]));
    }

    #[rstest]
    fn parse_keeps_parser_error() {
        let parsed: Res<i32, std::num::ParseIntError> = Res::parse("x1");
        assert!(parsed.is_err_and(|error| error.to_string() == "invalid digit found in string"));
    }
}
