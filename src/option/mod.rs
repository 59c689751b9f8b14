//! `Opt` type - a value that may be absent.
//!
//! This module provides the `Opt<T>` type, which is either `Some(T)` or
//! `None`. The discriminant and the payload live in one value: there is no
//! heap allocation, and for reference payloads rustc stores `None` as the
//! null pointer.
//!
//! Every combinator consumes `self` and returns a new value; nothing mutates a
//! payload in place.
//!
//! # Examples
//!
//! ```rust
//! use optres::option::Opt;
//!
//! let port: Opt<u16> = Opt::parse("8080");
//! let next = port.map(|port| port + 1).filter(|port| *port < 9000);
//! assert_eq!(next, Opt::Some(8081));
//!
//! let missing: Opt<u16> = Opt::parse("eighty");
//! assert_eq!(missing.unwrap_or(80), 80);
//! ```

mod iter;
#[cfg(feature = "numeric")]
mod numeric;

pub use iter::{IntoIter, Iter};

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::InvalidState;
use crate::result::Res;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `None` is declared first so the derived ordering places it before every
/// `Some`. Two `None`s are always equal, whatever `T` is.
///
/// # Type Parameters
///
/// * `T` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use optres::option::Opt;
///
/// let mut values = vec![Opt::Some(2), Opt::None, Opt::Some(1)];
/// values.sort();
/// assert_eq!(values, vec![Opt::None, Opt::Some(1), Opt::Some(2)]);
/// ```
///
/// Discarding an `Opt` is flagged by `unused_must_use`:
///
/// ```compile_fail
/// #![deny(unused_must_use)]
/// use optres::option::Opt;
///
/// fn lookup() -> Opt<u8> {
///     Opt::None
/// }
///
/// lookup();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Opt` may be `None`, which should be handled"]
pub enum Opt<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Opt<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Some`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns `None`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts a nullable value into an `Opt`.
    ///
    /// This is the boundary between external `Option`-shaped data and `Opt`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// let environment: Option<&str> = None;
    /// assert_eq!(Opt::create(environment), Opt::None);
    /// assert_eq!(Opt::create(Some("prod")), Opt::Some("prod"));
    /// ```
    #[inline]
    pub fn create(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Parses `text`, producing `None` when parsing fails.
    ///
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::<i32>::parse("42"), Opt::Some(42));
    /// assert_eq!(Opt::<i32>::parse("4 2"), Opt::None);
    /// assert_eq!(Opt::<f64>::parse("2.5"), Opt::Some(2.5));
    /// ```
    pub fn parse(text: &str) -> Self
    where
        T: FromStr,
    {
        text.parse().map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // Discriminant Tests
    // =========================================================================

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the payload satisfies `predicate`.
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `None` or the payload satisfies `predicate`.
    #[inline]
    pub fn is_none_or<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// Tests for `Some` and borrows the payload in one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// let name = Opt::Some("ada".to_string());
    /// if let Some(name) = name.some_ref() {
    ///     assert_eq!(name, "ada");
    /// }
    /// assert_eq!(Opt::<String>::None.some_ref(), None);
    /// ```
    #[inline]
    pub const fn some_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Converts `&Opt<T>` into `Opt<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Some(value) => Opt::Some(value),
            Self::None => Opt::None,
        }
    }

    /// Views the payload as a slice of length zero or one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::Some(3).as_slice(), &[3]);
    /// assert!(Opt::<i32>::None.as_slice().is_empty());
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Some(value) => std::slice::from_ref(value),
            Self::None => &[],
        }
    }

    /// Returns an iterator yielding the payload, if any.
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.some_ref())
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_std(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Mapping and Folding
    // =========================================================================

    /// Applies `function` to the payload if present.
    ///
    /// `function` is never called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::Some("four").map(str::len), Opt::Some(4));
    /// assert_eq!(Opt::<&str>::None.map(str::len), Opt::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Opt::Some(function(value)),
            Self::None => Opt::None,
        }
    }

    /// Applies `function` to the payload, or returns `default` for `None`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default,
        }
    }

    /// Applies `function` to the payload, or calls `default` for `None`.
    ///
    /// `default` is only evaluated when this is `None`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => default(),
        }
    }

    /// Calls `function` with a reference to the payload, then returns `self`.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Monadic bind: chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Opt::Some(n / 2) } else { Opt::None };
    /// assert_eq!(Opt::Some(8).and_then(half).and_then(half), Opt::Some(2));
    /// assert_eq!(Opt::Some(6).and_then(half).and_then(half), Opt::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Opt::None,
        }
    }

    /// Returns `other` if this is `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Opt<U>) -> Opt<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Opt::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns `self` if it is `Some`, otherwise calls `function`.
    ///
    /// `function` is only evaluated when this is `None`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::Some(1).xor(Opt::None), Opt::Some(1));
    /// assert_eq!(Opt::None.xor(Opt::Some(2)), Opt::Some(2));
    /// assert_eq!(Opt::Some(1).xor(Opt::Some(2)), Opt::None);
    /// assert_eq!(Opt::<i32>::None.xor(Opt::None), Opt::None);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Keeps the payload only if it satisfies `predicate`.
    ///
    /// `predicate` is never called on `None`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs two payloads; `None` unless both are `Some`.
    #[inline]
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two payloads with `function`; `None` unless both are `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// let area = Opt::Some(3).zip_with(Opt::Some(4), |width, height| width * height);
    /// assert_eq!(area, Opt::Some(12));
    /// assert_eq!(Opt::Some(3).zip_with(Opt::<i32>::None, |w, h| w * h), Opt::None);
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Opt<U>, function: F) -> Opt<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Some(left), Opt::Some(right)) => Opt::Some(function(left, right)),
            _ => Opt::None,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`InvalidState`] message if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", Self::unwrap_failure()),
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", InvalidState::new(message)),
        }
    }

    /// Returns the payload, or an [`InvalidState`] if this is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `None`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, InvalidState> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Self::unwrap_failure()),
        }
    }

    /// Returns the payload, or an [`InvalidState`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] when called on `None`.
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, InvalidState> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(InvalidState::new(message)),
        }
    }

    fn unwrap_failure() -> InvalidState {
        InvalidState::new("called `Opt::unwrap()` on a `None` value")
    }

    /// Returns the payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the payload or the result of `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Returns the payload or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Splits into a presence flag and a value.
    ///
    /// The value is only meaningful when the flag is `true`; for `None` it is
    /// `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::Some(5).deconstruct(), (true, 5));
    /// assert_eq!(Opt::<i32>::None.deconstruct(), (false, 0));
    /// ```
    #[inline]
    pub fn deconstruct(self) -> (bool, T)
    where
        T: Default,
    {
        match self {
            Self::Some(value) => (true, value),
            Self::None => (false, T::default()),
        }
    }

    // =========================================================================
    // Conversion to Res
    // =========================================================================

    /// Lifts into a `Res`, using `error` when this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    /// use optres::result::Res;
    ///
    /// assert_eq!(Opt::Some(1).ok_or("missing"), Res::Ok(1));
    /// assert_eq!(Opt::<i32>::None.ok_or("missing"), Res::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Res<T, E> {
        match self {
            Self::Some(value) => Res::Ok(value),
            Self::None => Res::Err(error),
        }
    }

    /// Lifts into a `Res`, calling `function` for the error only on `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Res<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Res::Ok(value),
            Self::None => Res::Err(function()),
        }
    }
}

// =============================================================================
// Structural Operations
// =============================================================================

impl<T> Opt<Opt<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::Some(Opt::Some(1)).flatten(), Opt::Some(1));
    /// assert_eq!(Opt::Some(Opt::<i32>::None).flatten(), Opt::None);
    /// assert_eq!(Opt::<Opt<i32>>::None.flatten(), Opt::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Opt<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Opt::None,
        }
    }
}

impl<T, E> Opt<Res<T, E>> {
    /// Swaps an `Opt` of a `Res` into a `Res` of an `Opt`.
    ///
    /// `None` maps to `Ok(None)`, `Some(Ok(x))` to `Ok(Some(x))` and
    /// `Some(Err(e))` to `Err(e)`.
    #[inline]
    pub fn transpose(self) -> Res<Opt<T>, E> {
        match self {
            Self::Some(Res::Ok(value)) => Res::Ok(Opt::Some(value)),
            Self::Some(Res::Err(error)) => Res::Err(error),
            Self::None => Res::Ok(Opt::None),
        }
    }
}

impl<A, B> Opt<(A, B)> {
    /// Splits a paired payload into two `Opt`s.
    #[inline]
    pub fn unzip(self) -> (Opt<A>, Opt<B>) {
        match self {
            Self::Some((left, right)) => (Opt::Some(left), Opt::Some(right)),
            Self::None => (Opt::None, Opt::None),
        }
    }
}

impl<T: Clone> Opt<&T> {
    /// Clones the borrowed payload.
    #[inline]
    pub fn cloned(self) -> Opt<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Opt<&T> {
    /// Copies the borrowed payload.
    #[inline]
    pub fn copied(self) -> Opt<T> {
        self.map(|value| *value)
    }
}

impl<T: Deref> Opt<T> {
    /// Converts `&Opt<T>` into `Opt<&T::Target>`.
    #[inline]
    pub fn as_deref(&self) -> Opt<&T::Target> {
        self.as_ref().map(|value| &**value)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Opt<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

/// Forwards a formatting trait to the payload, so flags such as precision,
/// width or `#` apply to the value inside `Some(...)`.
macro_rules! forward_format {
    ($($format:ident),* $(,)?) => {
        $(
            impl<T: fmt::$format> fmt::$format for Opt<T> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self {
                        Self::Some(value) => {
                            formatter.write_str("Some(")?;
                            fmt::$format::fmt(value, formatter)?;
                            formatter.write_str(")")
                        }
                        Self::None => formatter.write_str("None"),
                    }
                }
            }
        )*
    };
}

forward_format!(Display, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_std())
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, V> FromIterator<Opt<A>> for Opt<V>
where
    V: FromIterator<A>,
{
    /// Collects payloads until the first `None`, which makes the whole
    /// collection `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// let all: Opt<Vec<i32>> = vec![Opt::Some(1), Opt::Some(2)].into_iter().collect();
    /// assert_eq!(all, Opt::Some(vec![1, 2]));
    ///
    /// let gap: Opt<Vec<i32>> = vec![Opt::Some(1), Opt::None].into_iter().collect();
    /// assert_eq!(gap, Opt::None);
    /// ```
    fn from_iter<I: IntoIterator<Item = Opt<A>>>(iterator: I) -> Self {
        let mut found_none = false;
        let collected: V = iterator
            .into_iter()
            .map_while(|element| {
                let value = element.into_std();
                found_none = value.is_none();
                value
            })
            .collect();
        if found_none {
            Self::None
        } else {
            Self::Some(collected)
        }
    }
}

static_assertions::assert_eq_size!(Opt<&u64>, &u64);
static_assertions::assert_eq_size!(Opt<Box<str>>, Box<str>);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn some_constructor_produces_some() {
        let value = Opt::some(42);
        assert!(value.is_some());
        assert!(!value.is_none());
        assert_eq!(value.some_ref(), Some(&42));
    }

    #[rstest]
    fn none_constructor_produces_none() {
        let value: Opt<i32> = Opt::none();
        assert!(value.is_none());
        assert_eq!(value.some_ref(), None);
    }

    #[rstest]
    fn none_values_are_equal_regardless_of_payload_default() {
        assert_eq!(Opt::<i32>::None, Opt::<i32>::default());
        assert_eq!(Opt::<String>::None, Opt::none());
        assert_ne!(Opt::Some(0), Opt::None);
    }

    #[rstest]
    fn none_hash_is_stable() {
        assert_eq!(hash_of(&Opt::<i32>::None), hash_of(&Opt::<i32>::None));
        assert_eq!(hash_of(&Opt::Some(7)), hash_of(&Opt::Some(7)));
        assert_ne!(hash_of(&Opt::<i32>::None), hash_of(&Opt::Some(0)));
    }

    #[rstest]
    fn map_does_not_invoke_function_on_none() {
        let calls = Cell::new(0);
        let result = Opt::<i32>::None.map(|value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(result, Opt::None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn map_or_else_evaluates_default_only_for_none() {
        let calls = Cell::new(0);
        let default = || {
            calls.set(calls.get() + 1);
            0
        };
        assert_eq!(Opt::Some(3).map_or_else(default, |value| value * 2), 6);
        assert_eq!(calls.get(), 0);
        assert_eq!(Opt::<i32>::None.map_or_else(default, |value| value * 2), 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn and_then_short_circuits_after_first_none() {
        let third_calls = Cell::new(0);
        let result = Opt::Some(1)
            .and_then(|value| Opt::Some(value + 1))
            .and_then(|_| Opt::<i32>::None)
            .and_then(|value| {
                third_calls.set(third_calls.get() + 1);
                Opt::Some(value)
            });
        assert_eq!(result, Opt::None);
        assert_eq!(third_calls.get(), 0);
    }

    #[rstest]
    fn or_else_is_lazy() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            Opt::Some(9)
        };
        assert_eq!(Opt::Some(1).or_else(fallback), Opt::Some(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(Opt::None.or_else(fallback), Opt::Some(9));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    #[case(Opt::Some(1), Opt::Some(2), Opt::Some(1))]
    #[case(Opt::Some(1), Opt::None, Opt::Some(1))]
    #[case(Opt::None, Opt::Some(2), Opt::Some(2))]
    #[case(Opt::None, Opt::None, Opt::None)]
    fn or_prefers_first_some(#[case] first: Opt<i32>, #[case] second: Opt<i32>, #[case] expected: Opt<i32>) {
        assert_eq!(first.or(second), expected);
    }

    #[rstest]
    fn and_ignores_own_payload() {
        assert_eq!(Opt::Some(1).and(Opt::Some("x")), Opt::Some("x"));
        assert_eq!(Opt::<i32>::None.and(Opt::Some("x")), Opt::None);
        assert_eq!(Opt::Some(1).and(Opt::<&str>::None), Opt::None);
    }

    #[rstest]
    fn filter_predicate_not_called_on_none() {
        let calls = Cell::new(0);
        let predicate = |_: &i32| {
            calls.set(calls.get() + 1);
            true
        };
        assert_eq!(Opt::<i32>::None.filter(predicate), Opt::None);
        assert_eq!(calls.get(), 0);
        assert_eq!(Opt::Some(4).filter(|value| value % 2 == 0), Opt::Some(4));
        assert_eq!(Opt::Some(3).filter(|value| value % 2 == 0), Opt::None);
    }

    #[rstest]
    fn zip_requires_both() {
        assert_eq!(Opt::Some(1).zip(Opt::Some("a")), Opt::Some((1, "a")));
        assert_eq!(Opt::Some(1).zip(Opt::<&str>::None), Opt::None);
        assert_eq!(Opt::Some((1, "a")).unzip(), (Opt::Some(1), Opt::Some("a")));
    }

    #[rstest]
    fn transpose_maps_every_shape() {
        let none: Opt<Res<i32, String>> = Opt::None;
        assert_eq!(none.transpose(), Res::Ok(Opt::None));
        assert_eq!(Opt::Some(Res::<i32, String>::Ok(3)).transpose(), Res::Ok(Opt::Some(3)));
        assert_eq!(
            Opt::Some(Res::<i32, String>::Err("bad".to_string())).transpose(),
            Res::Err("bad".to_string())
        );
    }

    #[rstest]
    #[should_panic(expected = "called `Opt::unwrap()` on a `None` value")]
    fn unwrap_on_none_panics() {
        let _ = Opt::<i32>::None.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "configuration must be loaded")]
    fn expect_on_none_panics_with_message() {
        let _ = Opt::<i32>::None.expect("configuration must be loaded");
    }

    #[rstest]
    fn try_expect_returns_invalid_state() {
        let error = Opt::<i32>::None.try_expect("need a value").unwrap_err();
        assert_eq!(error.message(), "need a value");
        assert_eq!(Opt::Some(2).try_expect("need a value").unwrap(), 2);
    }

    #[rstest]
    fn unwrap_or_else_never_fails() {
        assert_eq!(Opt::<i32>::None.unwrap_or_else(|| 5), 5);
        assert_eq!(Opt::<String>::None.unwrap_or_default(), String::new());
    }

    #[rstest]
    fn as_deref_borrows_target() {
        let name = Opt::Some("ada".to_string());
        assert_eq!(name.as_deref(), Opt::Some("ada"));
    }

    #[rstest]
    fn cloned_and_copied_detach_from_reference() {
        let text = "copy".to_string();
        assert_eq!(Opt::Some(&text).cloned(), Opt::Some("copy".to_string()));
        assert_eq!(Opt::Some(&3).copied(), Opt::Some(3));
    }

    #[rstest]
    fn inspect_sees_payload_once() {
        let seen = Cell::new(0);
        let value = Opt::Some(7).inspect(|value| seen.set(*value));
        assert_eq!(value, Opt::Some(7));
        assert_eq!(seen.get(), 7);
    }

    #[rstest]
    #[case(Opt::Some(4200.0), "{:.2}", "Some(4200.00)")]
    #[case(Opt::Some(1.5), "{}", "Some(1.5)")]
    #[case(Opt::None, "{:.2}", "None")]
    fn display_forwards_format_flags(#[case] value: Opt<f64>, #[case] pattern: &str, #[case] expected: &str) {
        let rendered = match pattern {
            "{:.2}" => format!("{value:.2}"),
            _ => format!("{value}"),
        };
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn radix_formats_forward_to_payload() {
        assert_eq!(format!("{:x}", Opt::Some(255)), "Some(ff)");
        assert_eq!(format!("{:#b}", Opt::Some(5_u8)), "Some(0b101)");
        assert_eq!(format!("{:>4}", Opt::Some(7)), "Some(   7)");
        assert_eq!(format!("{:e}", Opt::Some(1500.0)), "Some(1.5e3)");
    }

    #[rstest]
    fn debug_matches_variant_shape() {
        assert_eq!(format!("{:?}", Opt::Some("a")), "Some(\"a\")");
        assert_eq!(format!("{:?}", Opt::<i32>::None), "None");
    }

    #[rstest]
    fn iteration_yields_zero_or_one() {
        assert_eq!(Opt::Some(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(Opt::<i32>::None.iter().count(), 0);
        let total: i32 = (&Opt::Some(5)).into_iter().sum();
        assert_eq!(total, 5);
    }

    #[rstest]
    fn slice_view_reuses_slice_algorithms() {
        let value = Opt::Some(9);
        assert_eq!(value.as_slice().iter().max(), Some(&9));
        assert!(value.as_slice().contains(&9));
    }

    #[rstest]
    fn collect_stops_at_first_none() {
        let calls = Cell::new(0);
        let values = vec![Opt::Some(1), Opt::None, Opt::Some(3)];
        let collected: Opt<Vec<i32>> = values
            .into_iter()
            .inspect(|_| calls.set(calls.get() + 1))
            .collect();
        assert_eq!(collected, Opt::None);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn collect_of_empty_iterator_is_some() {
        let collected: Opt<Vec<i32>> = Vec::<Opt<i32>>::new().into_iter().collect();
        assert_eq!(collected, Opt::Some(Vec::new()));
    }
}
