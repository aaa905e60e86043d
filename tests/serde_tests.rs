#![cfg(all(feature = "serde", feature = "persistent"))]
//! Serialization round trips through JSON.

use funkit::control::{Maybe, Pair, pair};
use funkit::persistent::List;
use rstest::rstest;

#[rstest]
fn test_list_serializes_as_array() {
    let list: List<&str> = vec!["a", "b"].into_iter().collect();
    assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
}

#[rstest]
fn test_nested_list_round_trip() {
    let list: List<List<i32>> = vec![(1..=2).collect(), List::nil(), (3..=3).collect()]
        .into_iter()
        .collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[[1,2],[],[3]]");
    let parsed: List<List<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, list);
}

#[rstest]
fn test_list_rejects_non_sequence() {
    let result: Result<List<i32>, _> = serde_json::from_str(r#"{"head":1}"#);
    assert!(result.is_err());
}

#[rstest]
#[case(Maybe::Just(5), r#"{"Just":5}"#)]
#[case(Maybe::Nothing, r#""Nothing""#)]
fn test_maybe_round_trip(#[case] value: Maybe<i32>, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);
    let parsed: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, value);
}

#[rstest]
fn test_pair_round_trip() {
    let original = pair(String::from("key"), vec![1, 2]);
    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, r#"{"first":"key","second":[1,2]}"#);
    let parsed: Pair<String, Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[rstest]
fn test_list_of_maybes_round_trip() {
    let list: List<Maybe<u8>> = vec![Maybe::Just(1), Maybe::Nothing].into_iter().collect();
    let json = serde_json::to_string(&list).unwrap();
    let parsed: List<Maybe<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(Maybe::cat_maybes(parsed.to_array()), vec![1]);
}
