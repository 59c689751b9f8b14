//! Map, slice and iterator extensions that answer with [`Opt`] and [`Res`].
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use optres::prelude::*;
//!
//! let names: HashMap<i32, &str> = HashMap::from([(1, "one"), (3, "three")]);
//! assert_eq!(names.get_or_none(&3), Opt::Some(&"three"));
//! assert_eq!(names.get_or_none(&7), Opt::None);
//!
//! let readings = [Opt::Some(1), Opt::None, Opt::Some(3)];
//! let present: Vec<i32> = readings.into_iter().values().collect();
//! assert_eq!(present, vec![1, 3]);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::option::Opt;
use crate::result::Res;

// =============================================================================
// Maps
// =============================================================================

/// Key lookup returning [`Opt`].
///
/// `Q` is the borrowed key type, so each map only asks for the bounds its own
/// lookup needs: `Hash + Eq` for `HashMap`, `Ord` for `BTreeMap`.
pub trait MapExt<Q: ?Sized, V> {
    /// Returns the value stored under `key`, or `None`.
    fn get_or_none(&self, key: &Q) -> Opt<&V>;
}

impl<K, Q, V, S> MapExt<Q, V> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn get_or_none(&self, key: &Q) -> Opt<&V> {
        Opt::create(self.get(key))
    }
}

impl<K, Q, V> MapExt<Q, V> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn get_or_none(&self, key: &Q) -> Opt<&V> {
        Opt::create(self.get(key))
    }
}

// =============================================================================
// Slices
// =============================================================================

/// Positional access on slices returning [`Opt`].
pub trait SliceExt<T> {
    /// The first element, or `None` when empty.
    fn first_or_none(&self) -> Opt<&T>;

    /// The last element, or `None` when empty.
    fn last_or_none(&self) -> Opt<&T>;

    /// The element at `index`, or `None` when out of range.
    fn element_at_or_none(&self, index: usize) -> Opt<&T>;

    /// The only element, or `None` when the slice is empty or holds more
    /// than one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// assert_eq!([5].single_or_none(), Opt::Some(&5));
    /// assert_eq!([5, 6].single_or_none(), Opt::None);
    /// ```
    fn single_or_none(&self) -> Opt<&T>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn first_or_none(&self) -> Opt<&T> {
        Opt::create(self.first())
    }

    #[inline]
    fn last_or_none(&self) -> Opt<&T> {
        Opt::create(self.last())
    }

    #[inline]
    fn element_at_or_none(&self, index: usize) -> Opt<&T> {
        Opt::create(self.get(index))
    }

    fn single_or_none(&self) -> Opt<&T> {
        match self {
            [only] => Opt::Some(only),
            _ => Opt::None,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator queries returning [`Opt`].
pub trait IteratorExt: Iterator + Sized {
    /// The first item satisfying `predicate`, or `None`.
    fn find_or_none<P>(mut self, predicate: P) -> Opt<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Opt::create(self.find(predicate))
    }

    /// The next item, or `None` when exhausted.
    fn next_or_none(&mut self) -> Opt<Self::Item> {
        Opt::create(self.next())
    }
}

impl<I: Iterator> IteratorExt for I {}

/// Adapters over iterators of [`Opt`].
pub trait OptIteratorExt<T>: Iterator<Item = Opt<T>> + Sized {
    /// Yields the payload of every `Some`, skipping `None`s.
    fn values(self) -> impl Iterator<Item = T> {
        self.flatten()
    }
}

impl<T, I: Iterator<Item = Opt<T>>> OptIteratorExt<T> for I {}

/// Adapters over iterators of [`Res`].
pub trait ResIteratorExt<T, E>: Iterator<Item = Res<T, E>> + Sized {
    /// Yields the payload of every `Ok`.
    fn oks(self) -> impl Iterator<Item = T> {
        self.filter_map(|result| result.ok().into_std())
    }

    /// Yields the payload of every `Err`.
    fn errs(self) -> impl Iterator<Item = E> {
        self.filter_map(|result| result.err().into_std())
    }

    /// Splits into the `Ok` payloads and the `Err` payloads, keeping order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// let outcomes = vec![Res::Ok(1), Res::Err("a"), Res::Ok(2)];
    /// let (values, errors) = outcomes.into_iter().partition_res();
    /// assert_eq!(values, vec![1, 2]);
    /// assert_eq!(errors, vec!["a"]);
    /// ```
    fn partition_res(self) -> (Vec<T>, Vec<E>) {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for result in self {
            match result {
                Res::Ok(value) => values.push(value),
                Res::Err(error) => errors.push(error),
            }
        }
        (values, errors)
    }
}

impl<T, E, I: Iterator<Item = Res<T, E>>> ResIteratorExt<T, E> for I {}
