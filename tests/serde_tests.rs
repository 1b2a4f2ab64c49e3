#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Variants and `Maybe` use serde's externally tagged enum representation, so
//! the case name is part of the encoded form.

use rstest::rstest;
use varia::maybe::Maybe;
use varia::variant::{Case, Unit, Variant2, Variant3};

#[rstest]
#[case(Variant2::First(1), r#"{"First":1}"#)]
#[case(Variant2::Second("two".to_string()), r#"{"Second":"two"}"#)]
fn variant2_encoding(#[case] value: Variant2<i32, String>, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), json);
    let restored: Variant2<i32, String> = serde_json::from_str(json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn variant3_keeps_case_of_identical_payload_types() {
    let value: Variant3<u8, u8, u8> = Variant3::Third(7);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"Third":7}"#);
    let restored: Variant3<u8, u8, u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.case(), Case::Third);
}

#[rstest]
#[case(Maybe::just(5), r#"{"Just":5}"#)]
#[case(Maybe::nothing(), r#""Nothing""#)]
fn maybe_encoding(#[case] value: Maybe<i32>, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), json);
    let restored: Maybe<i32> = serde_json::from_str(json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn unit_and_case_encoding() {
    assert_eq!(serde_json::to_string(&Unit).unwrap(), "null");
    assert_eq!(serde_json::from_str::<Unit>("null").unwrap(), Unit);
    assert_eq!(serde_json::to_string(&Case::Second).unwrap(), r#""Second""#);
}

#[rstest]
fn nested_variant_with_maybe() {
    let value: Variant2<Maybe<String>, Vec<Unit>> = Variant2::First(Maybe::just("inner".to_string()));
    let json = serde_json::to_string(&value).unwrap();
    let restored: Variant2<Maybe<String>, Vec<Unit>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn unknown_case_is_rejected() {
    let result = serde_json::from_str::<Variant2<i32, i32>>(r#"{"Third":1}"#);
    assert!(result.is_err());
}
