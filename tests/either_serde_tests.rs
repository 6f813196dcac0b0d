#![cfg(feature = "serde")]

//! Integration tests for serde support of `Either`.
//!
//! `Either` is the part type of a zipped prism, so these tests also check that
//! a part read through a zipped prism can be persisted and injected back.

use focal::either::Either;
use focal::optics::Prism;
use focal::prism;
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
enum ButtonState {
    Idle,
    Processing(String),
    Completed(bool),
}

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
#[case(Either::Left(1), r#"{"Left":1}"#)]
#[case(Either::Right(true), r#"{"Right":true}"#)]
fn test_either_json_is_externally_tagged(#[case] value: Either<u8, bool>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_zipped_prism_part_survives_json() {
    let busy_or_done = prism!(ButtonState, Processing).zip(prism!(ButtonState, Completed));

    let part = busy_or_done
        .try_get(&ButtonState::Completed(true))
        .unwrap();
    let json = serde_json::to_string(&part).unwrap();
    let restored: Either<String, bool> = serde_json::from_str(&json).unwrap();

    assert_eq!(busy_or_done.inject(restored), ButtonState::Completed(true));
    assert_eq!(busy_or_done.try_get(&ButtonState::Idle), None);
}
