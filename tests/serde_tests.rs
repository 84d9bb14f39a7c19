#![cfg(all(feature = "control", feature = "serde"))]

//! Serialization tests for `Either`.
//!
//! `Either` uses serde's default externally tagged enum representation.

use functional_utils::control::Either;
use rstest::rstest;

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

#[rstest]
#[case(Either::Left("missing".to_string()), r#"{"Left":"missing"}"#)]
#[case(Either::Right(7), r#"{"Right":7}"#)]
fn test_either_json_representation(#[case] value: Either<String, u8>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_either_nested_in_collection() {
    let values: Vec<Either<String, u8>> = vec![Either::Right(1), Either::Left("x".to_string())];
    let json = serde_json::to_value(&values).unwrap();

    assert_eq!(json, serde_json::json!([{ "Right": 1 }, { "Left": "x" }]));
    assert_eq!(
        serde_json::from_value::<Vec<Either<String, u8>>>(json).unwrap(),
        values
    );
}

#[rstest]
fn test_either_rejects_unknown_variant() {
    let result = serde_json::from_str::<Either<String, u8>>(r#"{"Middle":1}"#);
    assert!(result.is_err());
}
