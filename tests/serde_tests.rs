#![cfg(feature = "serde")]

//! Integration tests for serde support in optres.
//!
//! `Opt` follows serde's option protocol; `Res` is a single-entry map keyed
//! by `ok` or `err`.

use optres::prelude::*;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Score {
    #[serde(rename = "currentCount")]
    current_count: Res<i32, String>,
    bonus: Opt<i32>,
}

// =============================================================================
// Round trips
// =============================================================================

#[rstest]
#[case(Opt::Some(17), "17")]
#[case(Opt::None, "null")]
fn opt_json_round_trip(#[case] value: Opt<i32>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);
    let restored: Opt<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
#[case(Res::Ok(75), r#"{"ok":75}"#)]
#[case(Res::Err("msg".to_string()), r#"{"err":"msg"}"#)]
fn res_json_round_trip(#[case] value: Res<i32, String>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);
    let restored: Res<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn nested_containers() {
    let value: Opt<Res<Opt<u8>, String>> = Opt::Some(Res::Ok(Opt::None));
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"ok":null}"#);
    let restored: Opt<Res<Opt<u8>, String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn struct_round_trip() {
    let score = Score {
        current_count: Res::Ok(3),
        bonus: Opt::Some(1),
    };
    let json = serde_json::to_string(&score).unwrap();
    assert_eq!(json, r#"{"currentCount":{"ok":3},"bonus":1}"#);
    assert_eq!(serde_json::from_str::<Score>(&json).unwrap(), score);
}

// =============================================================================
// Structural errors
// =============================================================================

#[rstest]
fn missing_opt_field_decodes_to_none() {
    let score: Score = serde_json::from_str(r#"{"currentCount":{"err":"unset"}}"#).unwrap();
    assert_eq!(score.bonus, Opt::None);
    assert_eq!(score.current_count, Res::Err("unset".to_string()));
}

#[rstest]
fn null_res_field_is_rejected() {
    let decoded = serde_json::from_str::<Score>(r#"{"currentCount": null}"#);
    assert!(decoded.is_err());
}

#[rstest]
#[case(r#"{"currentCount": {"ok": "three"}, "bonus": 1}"#)]
#[case(r#"{"currentCount": [], "bonus": 1}"#)]
#[case(r#"{"currentCount": {"ok": 1}, "bonus": "one"}"#)]
fn mistyped_fields_are_rejected(#[case] json: &str) {
    assert!(serde_json::from_str::<Score>(json).is_err());
}

// =============================================================================
// Lenient decoding
// =============================================================================

#[cfg(feature = "json")]
mod lenient {
    use optres::prelude::*;
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Settings {
        #[serde(deserialize_with = "optres::serde::lenient::deserialize", default)]
        retries: Opt<u32>,
    }

    #[rstest]
    #[case(r#"{"retries": 5}"#, Opt::Some(5))]
    #[case(r#"{"retries": null}"#, Opt::None)]
    #[case(r#"{"retries": "five"}"#, Opt::None)]
    #[case(r#"{"retries": -1}"#, Opt::None)]
    #[case(r"{}", Opt::None)]
    fn bad_values_decode_to_none(#[case] json: &str, #[case] expected: Opt<u32>) {
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.retries, expected);
    }

    #[rstest]
    fn malformed_json_is_still_an_error() {
        assert!(serde_json::from_str::<Settings>(r#"{"retries": }"#).is_err());
    }
}
