#![cfg(all(feature = "serde", feature = "control"))]

//! Integration tests for serde support.
//!
//! Both containers use serde's externally tagged enum representation.

use monadic::control::{Maybe, Result};
use rstest::rstest;

// =============================================================================
// Maybe Integration Tests
// =============================================================================

#[rstest]
fn test_maybe_json_roundtrip() {
    let just: Maybe<i32> = Maybe::Just(42);
    let nothing: Maybe<i32> = Maybe::Nothing;

    let just_json = serde_json::to_string(&just).unwrap();
    let nothing_json = serde_json::to_string(&nothing).unwrap();

    let restored_just: Maybe<i32> = serde_json::from_str(&just_json).unwrap();
    let restored_nothing: Maybe<i32> = serde_json::from_str(&nothing_json).unwrap();

    assert_eq!(just, restored_just);
    assert_eq!(nothing, restored_nothing);
}

#[rstest]
#[case(Maybe::Just(1), r#"{"Just":1}"#)]
#[case(Maybe::Nothing, r#""Nothing""#)]
fn test_maybe_json_shape(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_maybe_nested_roundtrip() {
    let nested: Maybe<Maybe<String>> = Maybe::Just(Maybe::Just("inner".to_string()));
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Maybe<Maybe<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

// =============================================================================
// Result Integration Tests
// =============================================================================

#[rstest]
fn test_result_json_roundtrip() {
    let ok: Result<i32, String> = Result::Ok(42);
    let err: Result<i32, String> = Result::Err("error".to_string());

    let ok_json = serde_json::to_string(&ok).unwrap();
    let err_json = serde_json::to_string(&err).unwrap();

    let restored_ok: Result<i32, String> = serde_json::from_str(&ok_json).unwrap();
    let restored_err: Result<i32, String> = serde_json::from_str(&err_json).unwrap();

    assert_eq!(ok, restored_ok);
    assert_eq!(err, restored_err);
}

#[rstest]
fn test_result_json_shape() {
    let err: Result<i32, String> = Result::Err("error".to_string());
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"Err":"error"}"#);
}

#[rstest]
fn test_result_rejects_unknown_variant() {
    let parsed = serde_json::from_str::<Result<i32, String>>(r#"{"Maybe":1}"#);
    assert!(parsed.is_err());
}
