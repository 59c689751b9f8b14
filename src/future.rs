//! Async combinators for [`Opt`] and [`Res`].
//!
//! Every combinator awaits at most one future. When the input short-circuits
//! (`None` or `Err`), or the awaited future is already complete, the returned
//! future resolves on its first poll without suspending.
//!
//! Nothing here spawns tasks, retries or times out. Cancellation is dropping
//! the future.
//!
//! # Examples
//!
//! ```rust
//! use futures::FutureExt;
//! use optres::prelude::*;
//!
//! let doubled = Opt::Some(21).map_async(|n| async move { n * 2 });
//! assert_eq!(doubled.now_or_never(), Some(Opt::Some(42)));
//!
//! let skipped = Opt::<i32>::None.map_async(|n| async move { n * 2 });
//! assert_eq!(skipped.now_or_never(), Some(Opt::None));
//! ```

use std::convert::identity;
use std::future::Future;
use std::pin::{Pin, pin};
use std::task::{Context, Poll};

use futures::future::{self, FutureExt};
use futures::stream::{Stream, StreamExt};
use futures::ready;
use pin_project_lite::pin_project;

use crate::option::Opt;
use crate::result::Res;

// =============================================================================
// Settle
// =============================================================================

pin_project! {
    /// Internal state machine for [`Settle`].
    ///
    /// - `Ready` -> `Completed` (short-circuited input, no suspension)
    /// - `Pending` -> `Completed` (once the single awaited future resolves)
    #[project = SettleStateProj]
    enum SettleState<Fut, F, Out> {
        Ready {
            value: Option<Out>,
        },
        Pending {
            #[pin]
            future: Fut,
            finish: Option<F>,
        },
        Completed,
    }
}

pin_project! {
    /// A combinator result: either settled up front, or waiting on exactly one
    /// future whose output is passed through `finish`.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    struct Settle<Fut, F, Out> {
        #[pin]
        state: SettleState<Fut, F, Out>,
    }
}

impl<Fut, F, Out> Settle<Fut, F, Out> {
    const fn ready(value: Out) -> Self {
        Self {
            state: SettleState::Ready { value: Some(value) },
        }
    }

    const fn pending(future: Fut, finish: F) -> Self {
        Self {
            state: SettleState::Pending {
                future,
                finish: Some(finish),
            },
        }
    }
}

impl<Fut, F, Out> Future for Settle<Fut, F, Out>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> Out,
{
    type Output = Out;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        let output = match this.state.as_mut().project() {
            SettleStateProj::Ready { value } => value
                .take()
                .expect("Settle internal error: ready value was already consumed"),
            SettleStateProj::Pending { future, finish } => {
                let awaited = ready!(future.poll(context));
                let finish = finish
                    .take()
                    .expect("Settle internal error: finish was already consumed");
                finish(awaited)
            }
            SettleStateProj::Completed => panic!("Settle polled after completion"),
        };
        this.state.set(SettleState::Completed);
        Poll::Ready(output)
    }
}

// =============================================================================
// Opt<T>
// =============================================================================

impl<T> Opt<T> {
    /// Maps the payload with an async function.
    pub fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Opt<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Settle::pending(function(value), Opt::Some),
            Self::None => Settle::ready(Opt::None),
        }
    }

    /// Binds the payload to an async function returning `Opt`.
    pub fn and_then_async<U, F, Fut>(self, function: F) -> impl Future<Output = Opt<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Opt<U>>,
    {
        match self {
            Self::Some(value) => Settle::pending(function(value), identity),
            Self::None => Settle::ready(Opt::None),
        }
    }

    /// Keeps the payload if the async `predicate` answers `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::FutureExt;
    /// use optres::prelude::*;
    ///
    /// let even = Opt::Some(4).filter_async(|n| {
    ///     let keep = n % 2 == 0;
    ///     async move { keep }
    /// });
    /// assert_eq!(even.now_or_never(), Some(Opt::Some(4)));
    /// ```
    pub fn filter_async<P, Fut>(self, predicate: P) -> impl Future<Output = Self>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Some(value) => {
                let verdict = predicate(&value);
                Settle::pending(verdict, move |keep: bool| {
                    if keep { Self::Some(value) } else { Self::None }
                })
            }
            Self::None => Settle::ready(Self::None),
        }
    }

    /// Returns `self` if it is `Some`, otherwise awaits `function`.
    pub fn or_else_async<F, Fut>(self, function: F) -> impl Future<Output = Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            present @ Self::Some(_) => Settle::ready(present),
            Self::None => Settle::pending(function(), identity),
        }
    }

    /// Returns the payload, or awaits `function` for a fallback.
    pub fn unwrap_or_else_async<F, Fut>(self, function: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Some(value) => Settle::ready(value),
            Self::None => Settle::pending(function(), identity),
        }
    }
}

// =============================================================================
// Res<T, E>
// =============================================================================

impl<T, E> Res<T, E> {
    /// Maps the `Ok` payload with an async function.
    pub fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Res<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Settle::pending(function(value), Res::Ok),
            Self::Err(error) => Settle::ready(Res::Err(error)),
        }
    }

    /// Maps the `Err` payload with an async function.
    pub fn map_err_async<E2, F, Fut>(self, function: F) -> impl Future<Output = Res<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Self::Ok(value) => Settle::ready(Res::Ok(value)),
            Self::Err(error) => Settle::pending(function(error), Res::Err),
        }
    }

    /// Binds the `Ok` payload to an async function returning `Res`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::prelude::*;
    ///
    /// async fn lookup(id: u32) -> Res<String, String> {
    ///     if id == 7 { Res::Ok("seven".to_string()) } else { Res::Err(format!("no user {id}")) }
    /// }
    ///
    /// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let found = runtime.block_on(Res::<u32, String>::Ok(7).and_then_async(lookup));
    /// assert_eq!(found, Res::Ok("seven".to_string()));
    /// ```
    pub fn and_then_async<U, F, Fut>(self, function: F) -> impl Future<Output = Res<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Res<U, E>>,
    {
        match self {
            Self::Ok(value) => Settle::pending(function(value), identity),
            Self::Err(error) => Settle::ready(Res::Err(error)),
        }
    }

    /// Recovers from `Err` with an async function returning `Res`.
    pub fn or_else_async<E2, F, Fut>(self, function: F) -> impl Future<Output = Res<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Res<T, E2>>,
    {
        match self {
            Self::Ok(value) => Settle::ready(Res::Ok(value)),
            Self::Err(error) => Settle::pending(function(error), identity),
        }
    }

    /// Returns the `Ok` payload, or awaits `function` on the error.
    pub fn unwrap_or_else_async<F, Fut>(self, function: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Ok(value) => Settle::ready(value),
            Self::Err(error) => Settle::pending(function(error), identity),
        }
    }
}

// =============================================================================
// Future and Stream extensions
// =============================================================================

/// Combinators on futures that resolve to [`Opt`].
pub trait OptFutureExt<T>: Future<Output = Opt<T>> + Sized {
    /// Maps the eventual payload.
    fn map_opt<U, F>(self, function: F) -> impl Future<Output = Opt<U>>
    where
        F: FnOnce(T) -> U,
    {
        self.map(move |resolved| resolved.map(function))
    }

    /// Binds the eventual payload.
    fn and_then_opt<U, F>(self, function: F) -> impl Future<Output = Opt<U>>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        self.map(move |resolved| resolved.and_then(function))
    }

    /// Resolves to the payload, or `default` when it is `None`.
    fn unwrap_or_opt(self, default: T) -> impl Future<Output = T> {
        self.map(move |resolved| resolved.unwrap_or(default))
    }
}

impl<T, Fut: Future<Output = Opt<T>>> OptFutureExt<T> for Fut {}

/// Combinators on futures that resolve to [`Res`].
pub trait ResFutureExt<T, E>: Future<Output = Res<T, E>> + Sized {
    /// Maps the eventual `Ok` payload.
    fn map_res<U, F>(self, function: F) -> impl Future<Output = Res<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        self.map(move |resolved| resolved.map(function))
    }

    /// Maps the eventual `Err` payload.
    fn map_err_res<E2, F>(self, function: F) -> impl Future<Output = Res<T, E2>>
    where
        F: FnOnce(E) -> E2,
    {
        self.map(move |resolved| resolved.map_err(function))
    }

    /// Binds the eventual `Ok` payload.
    fn and_then_res<U, F>(self, function: F) -> impl Future<Output = Res<U, E>>
    where
        F: FnOnce(T) -> Res<U, E>,
    {
        self.map(move |resolved| resolved.and_then(function))
    }

    /// Resolves to a std `Result`, so `futures::TryFutureExt` applies.
    fn into_std_result(self) -> impl Future<Output = Result<T, E>> {
        self.map(Res::into_std)
    }
}

impl<T, E, Fut: Future<Output = Res<T, E>>> ResFutureExt<T, E> for Fut {}

/// Adapters on streams of [`Opt`].
pub trait OptStreamExt<T>: Stream<Item = Opt<T>> + Sized {
    /// Yields the payload of every `Some`, skipping `None`s.
    fn values(self) -> impl Stream<Item = T> {
        self.filter_map(|item| future::ready(item.into_std()))
    }
}

impl<T, S: Stream<Item = Opt<T>>> OptStreamExt<T> for S {}

/// Adapters on streams of [`Res`].
pub trait ResStreamExt<T, E>: Stream<Item = Res<T, E>> + Sized {
    /// Collects every `Ok` payload, stopping at the first `Err`.
    ///
    /// Items after the first `Err` are not polled.
    fn collect_res(self) -> impl Future<Output = Res<Vec<T>, E>> {
        async move {
            let mut stream = pin!(self);
            let mut values = Vec::new();
            while let Some(item) = stream.next().await {
                match item {
                    Res::Ok(value) => values.push(value),
                    Res::Err(error) => return Res::Err(error),
                }
            }
            Res::Ok(values)
        }
    }
}

impl<T, E, S: Stream<Item = Res<T, E>>> ResStreamExt<T, E> for S {}
