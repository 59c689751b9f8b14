//! Integration tests for the async combinators.
//!
//! Each combinator awaits at most one future; short-circuited inputs resolve
//! on the first poll.

#![cfg(feature = "async")]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::FutureExt;
use optres::prelude::*;
use rstest::rstest;

struct Directory {
    users: HashMap<u32, &'static str>,
    lookups: AtomicUsize,
}

impl Directory {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            users: HashMap::from([(1, "ada"), (2, "grace")]),
            lookups: AtomicUsize::new(0),
        })
    }

    async fn find(&self, id: u32) -> Res<&'static str, String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(1)).await;
        self.users
            .get(&id)
            .copied()
            .map_or_else(|| Res::Err(format!("no user {id}")), Res::Ok)
    }
}

#[tokio::test]
async fn and_then_async_awaits_lookup() {
    let directory = Directory::new();
    let name = Res::<u32, String>::Ok(2)
        .and_then_async(|id| {
            let directory = Arc::clone(&directory);
            async move { directory.find(id).await }
        })
        .await;
    assert_eq!(name, Res::Ok("grace"));
    assert_eq!(directory.lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn err_skips_lookup() {
    let directory = Directory::new();
    let name = Res::<u32, String>::Err("no session".to_string())
        .and_then_async(|id| {
            let directory = Arc::clone(&directory);
            async move { directory.find(id).await }
        })
        .await;
    assert_eq!(name, Res::Err("no session".to_string()));
    assert_eq!(directory.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn chained_async_and_sync_combinators() {
    let directory = Directory::new();
    let shout = Opt::Some(1_u32)
        .and_then_async(|id| {
            let directory = Arc::clone(&directory);
            async move { directory.find(id).await.ok() }
        })
        .map_opt(str::to_uppercase)
        .await;
    assert_eq!(shout, Opt::Some("ADA".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn combinator_futures_are_send() {
    let handle = tokio::spawn(async {
        Opt::Some(20)
            .map_async(|n| async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                n + 1
            })
            .await
    });
    assert_eq!(handle.await.unwrap(), Opt::Some(21));
}

#[rstest]
#[case(Opt::None)]
#[case(Opt::Some(5))]
fn resolved_inputs_do_not_suspend(#[case] input: Opt<i32>) {
    let fallback = input.unwrap_or_else_async(|| async { 0 });
    assert_eq!(fallback.now_or_never(), Some(input.unwrap_or(0)));
}

#[rstest]
fn inputs_that_short_circuit_resolve_immediately() {
    let err: Res<i32, &str> = Res::Err("e");
    assert_eq!(
        err.map_async(|n| async move { n }).now_or_never(),
        Some(Res::Err("e"))
    );

    let ok: Res<i32, &str> = Res::Ok(1);
    assert_eq!(
        ok.or_else_async(|_| async { Res::<i32, ()>::Ok(0) }).now_or_never(),
        Some(Res::Ok(1))
    );
}
