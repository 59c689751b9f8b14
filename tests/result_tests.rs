//! Integration tests for `Res<T, E>` and the exception channel.

use std::cell::Cell;
use std::error::Error;
use std::fmt;

use optres::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Timeout {
    seconds: u32,
}

impl fmt::Display for Timeout {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "timed out after {}s", self.seconds)
    }
}

impl Error for Timeout {}

// =============================================================================
// Discriminant and conversions
// =============================================================================

#[rstest]
fn ok_and_err_project_to_opt() {
    let success: Res<i32, String> = Res::success(3);
    assert_eq!(success.clone().ok(), Opt::Some(3));
    assert_eq!(success.err(), Opt::None);

    let failure: Res<i32, String> = Res::failure("bad".to_string());
    assert_eq!(failure.clone().ok(), Opt::None);
    assert_eq!(failure.err(), Opt::Some("bad".to_string()));
}

#[rstest]
#[case("12", Res::Ok(12))]
#[case("1_2", Res::Err(()))]
fn parse_uses_from_str_error(#[case] text: &str, #[case] expected: Res<u8, ()>) {
    let parsed: Res<u8, std::num::ParseIntError> = Res::parse(text);
    assert_eq!(parsed.map_err(|_| ()), expected);
}

#[rstest]
fn default_is_err_of_default() {
    let fallback: Res<i32, String> = Res::default();
    assert_eq!(fallback, Res::Err(String::new()));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn err_short_circuits_ok_side() {
    let calls = Cell::new(0);
    let result: Res<i32, &str> = Res::Err("down");
    let chained = result
        .map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        })
        .and_then(|n| {
            calls.set(calls.get() + 1);
            Res::Ok(n)
        });
    assert_eq!(chained, Res::Err("down"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn ok_short_circuits_err_side() {
    let calls = Cell::new(0);
    let result: Res<i32, &str> = Res::Ok(1);
    let recovered = result
        .map_err(|error| {
            calls.set(calls.get() + 1);
            error.len()
        })
        .or_else(|_| {
            calls.set(calls.get() + 1);
            Res::<i32, ()>::Ok(0)
        });
    assert_eq!(recovered, Res::Ok(1));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(Res::Ok(2), 4)]
#[case(Res::Err("four"), 4)]
fn map_or_else_uses_error(#[case] input: Res<i32, &str>, #[case] expected: usize) {
    let width = input.map_or_else(str::len, |n| usize::try_from(n * 2).unwrap_or(0));
    assert_eq!(width, expected);
}

#[rstest]
fn and_or_pick_sides() {
    let ok: Res<i32, &str> = Res::Ok(1);
    let err: Res<i32, &str> = Res::Err("e");
    assert_eq!(ok.and(Res::<&str, &str>::Ok("next")), Res::Ok("next"));
    assert_eq!(err.and(Res::<&str, &str>::Ok("next")), Res::Err("e"));
    assert_eq!(err.or(Res::<i32, ()>::Ok(9)), Res::Ok(9));
    assert_eq!(ok.or(Res::<i32, ()>::Err(())), Res::Ok(1));
}

#[rstest]
fn transpose_and_flatten() {
    let nested: Res<Opt<i32>, &str> = Res::Ok(Opt::Some(1));
    assert_eq!(nested.transpose(), Opt::Some(Res::Ok(1)));
    assert_eq!(Res::<Opt<i32>, &str>::Ok(Opt::None).transpose(), Opt::None);
    assert_eq!(
        Res::<Opt<i32>, &str>::Err("e").transpose(),
        Opt::Some(Res::Err("e"))
    );

    let doubled: Res<Res<i32, &str>, &str> = Res::Ok(Res::Err("inner"));
    assert_eq!(doubled.flatten(), Res::Err("inner"));
}

#[rstest]
fn collect_returns_first_error() {
    let collected: Res<Vec<i32>, &str> = vec![Res::Ok(1), Res::Err("a"), Res::Err("b")]
        .into_iter()
        .collect();
    assert_eq!(collected, Res::Err("a"));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[should_panic(expected = "called `Res::unwrap()` on an `Err` value: timed out after 3s")]
fn unwrap_panics_with_error_text() {
    let result: Res<i32, Timeout> = Res::Err(Timeout { seconds: 3 });
    let _ = result.unwrap();
}

#[rstest]
#[should_panic(expected = "fetching - timed out after 3s")]
fn expect_appends_error_text() {
    let result: Res<i32, Timeout> = Res::Err(Timeout { seconds: 3 });
    let _ = result.expect("fetching");
}

#[rstest]
fn try_forms_return_invalid_state() {
    let result: Res<i32, Timeout> = Res::Err(Timeout { seconds: 1 });
    let error = result.clone().try_unwrap().unwrap_err();
    assert!(error.message().ends_with(": timed out after 1s"));

    assert_eq!(result.try_unwrap_err().unwrap(), Timeout { seconds: 1 });
    assert!(Res::<i32, Timeout>::Ok(5).try_expect_err("wanted a failure").is_err());
}

#[rstest]
fn deconstruct_reports_both_channels() {
    assert_eq!(Res::<i32, String>::Ok(2).deconstruct(), (true, 2, String::new()));
    assert_eq!(
        Res::<i32, String>::Err("e".to_string()).deconstruct(),
        (false, 0, "e".to_string())
    );
}

// =============================================================================
// Exception channel
// =============================================================================

#[rstest]
fn attempt_keeps_error_as_source() {
    let captured: Res<u32, Exn> = Res::attempt_fallible(|| Err(Timeout { seconds: 9 }));
    let raised = captured.raise().unwrap_err();
    let source = raised.source().unwrap();
    assert_eq!(source.to_string(), "timed out after 9s");
}

#[rstest]
fn attempt_captures_panics_from_nested_code() {
    fn divide(left: i32, right: i32) -> i32 {
        if right == 0 {
            panic!("attempt to divide by zero");
        }
        left / right
    }

    let captured = Res::attempt(|| divide(1, 0));
    assert!(captured.is_err_and(|exn| exn.is_panic()));
    assert_eq!(Res::attempt(|| divide(6, 3)).ok(), Opt::Some(2));
}

// =============================================================================
// Formatting
// =============================================================================

#[rstest]
#[case(format!("{}", Res::<i32, &str>::Ok(75)), "Ok(75)")]
#[case(format!("{}", Res::<i32, &str>::Err("msg")), "Err(msg)")]
#[case(format!("{:>4}", Res::<i32, &str>::Ok(7)), "Ok(   7)")]
#[case(format!("{:X}", Res::<u8, u8>::Err(171)), "Err(AB)")]
fn formatting_targets_active_payload(#[case] rendered: String, #[case] expected: &str) {
    assert_eq!(rendered, expected);
}
