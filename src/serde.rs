//! Serde support for [`Opt`] and [`Res`].
//!
//! - `Opt<T>` uses serde's option protocol: `Some(v)` is written as `v` and
//!   `None` as `null`. Decoding accepts `null`, and a field missing from a
//!   derived struct decodes to `None`.
//! - `Res<T, E>` is written as a map with exactly one entry, `{"ok": v}` or
//!   `{"err": e}`. `Res<(), E>` writes `{"ok": null}`. Decoding anything else,
//!   including `null`, is an error.
//!
//! # Examples
//!
//! ```rust
//! use optres::prelude::*;
//!
//! assert_eq!(serde_json::to_string(&Opt::Some(17)).unwrap(), "17");
//! assert_eq!(serde_json::to_string(&Opt::<i32>::None).unwrap(), "null");
//!
//! let saved: Res<i32, String> = Res::Ok(75);
//! assert_eq!(serde_json::to_string(&saved).unwrap(), r#"{"ok":75}"#);
//!
//! let restored: Res<i32, String> = serde_json::from_str(r#"{"err":"msg"}"#).unwrap();
//! assert_eq!(restored, Res::Err("msg".to_string()));
//! ```

use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use ::serde::ser::{Serialize, SerializeMap, Serializer};

use crate::option::Opt;
use crate::result::Res;

// =============================================================================
// Opt<T>
// =============================================================================

impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

struct OptVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> OptVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for OptVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Opt<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an optional value")
    }

    fn visit_none<A: de::Error>(self) -> Result<Self::Value, A> {
        Ok(Opt::None)
    }

    fn visit_unit<A: de::Error>(self) -> Result<Self::Value, A> {
        Ok(Opt::None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Opt::Some)
    }
}

impl<'de, T> Deserialize<'de> for Opt<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptVisitor::new())
    }
}

// =============================================================================
// Res<T, E>
// =============================================================================

const OK_KEY: &str = "ok";
const ERR_KEY: &str = "err";
const KEYS: &[&str] = &[OK_KEY, ERR_KEY];

impl<T: Serialize, E: Serialize> Serialize for Res<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Ok(value) => map.serialize_entry(OK_KEY, value)?,
            Self::Err(error) => map.serialize_entry(ERR_KEY, error)?,
        }
        map.end()
    }
}

enum Key {
    Ok,
    Err,
}

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("`ok` or `err`")
    }

    fn visit_str<A: de::Error>(self, value: &str) -> Result<Self::Value, A> {
        match value {
            OK_KEY => Ok(Key::Ok),
            ERR_KEY => Ok(Key::Err),
            other => Err(A::unknown_field(other, KEYS)),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_identifier(KeyVisitor)
    }
}

struct ResVisitor<T, E> {
    marker: PhantomData<(T, E)>,
}

impl<T, E> ResVisitor<T, E> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T, E> Visitor<'de> for ResVisitor<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Res<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map with a single `ok` or `err` entry")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(key) = map.next_key::<Key>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        let result = match key {
            Key::Ok => Res::Ok(map.next_value()?),
            Key::Err => Res::Err(map.next_value()?),
        };
        if map.next_key::<Key>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }
        Ok(result)
    }
}

impl<'de, T, E> Deserialize<'de> for Res<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ResVisitor::new())
    }
}

/// Lenient decoding of optional JSON fields.
///
/// ```rust
/// use optres::prelude::*;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Settings {
///     #[serde(deserialize_with = "optres::serde::lenient::deserialize", default)]
///     retries: Opt<u32>,
/// }
///
/// let settings: Settings = serde_json::from_str(r#"{"retries": "many"}"#).unwrap();
/// assert_eq!(settings.retries, Opt::None);
///
/// let settings: Settings = serde_json::from_str(r#"{"retries": 3}"#).unwrap();
/// assert_eq!(settings.retries, Opt::Some(3));
/// ```
#[cfg(feature = "json")]
pub mod lenient {
    use ::serde::de::{Deserialize, DeserializeOwned, Deserializer};
    use serde_json::Value;

    use crate::option::Opt;

    /// Decodes `T`, turning `null` or a value of the wrong shape into `None`.
    ///
    /// Only malformed JSON is an error. Pair with `#[serde(default)]` so that
    /// a missing field also decodes to `None`.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error when the input is not valid JSON.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Opt<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Opt::None);
        }
        match serde_json::from_value(value) {
            Ok(decoded) => Ok(Opt::Some(decoded)),
            #[cfg(feature = "tracing")]
            Err(error) => {
                tracing::debug!(error = %error, "discarded value that did not decode");
                Ok(Opt::None)
            }
            #[cfg(not(feature = "tracing"))]
            Err(_) => Ok(Opt::None),
        }
    }
}
