#![cfg(feature = "record")]
//! Integration tests for the record helpers.

use funkit::control::Maybe;
use funkit::record::{Record, get, join, merge, rename, select, set};
use proptest::prelude::*;
use rstest::rstest;

fn row(fields: &[(&str, &str)]) -> Record<String, String> {
    fields
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

// =============================================================================
// Contracts
// =============================================================================

#[rstest]
fn test_get_with_borrowed_key() {
    let record = row(&[("name", "ada")]);
    assert_eq!(get("name", &record).fmap(String::as_str), Maybe::Just("ada"));
}

#[rstest]
fn test_set_mutates_in_place() {
    let mut record = row(&[("name", "ada")]);
    let previous = set(&mut record, "name".to_string(), "grace".to_string());
    assert_eq!(previous, Maybe::Just("ada".to_string()));
    assert_eq!(record, row(&[("name", "grace")]));
}

#[rstest]
fn test_select_then_rename() {
    let record = row(&[("first", "ada"), ("last", "lovelace"), ("born", "1815")]);
    let picked = select(["first", "born"], &record);
    let renamed = rename("first", "name".to_string(), &picked);
    assert_eq!(renamed, row(&[("name", "ada"), ("born", "1815")]));
}

#[rstest]
fn test_join_people_with_teams() {
    let people = vec![
        row(&[("name", "ada"), ("team", "t1")]),
        row(&[("name", "bob"), ("team", "t2")]),
        row(&[("name", "cy")]),
    ];
    let teams = vec![
        row(&[("id", "t1"), ("title", "engines")]),
        row(&[("id", "t2"), ("title", "old")]),
        row(&[("id", "t2"), ("title", "looms")]),
        row(&[("title", "orphan")]),
    ];

    let joined = join("team", "id", &people, &teams);

    assert_eq!(
        joined,
        vec![
            row(&[("name", "ada"), ("team", "t1"), ("id", "t1"), ("title", "engines")]),
            row(&[("name", "bob"), ("team", "t2"), ("id", "t2"), ("title", "looms")]),
            row(&[("name", "cy")]),
        ]
    );
}

#[rstest]
fn test_join_leaves_inputs_untouched() {
    let left = vec![row(&[("k", "1")])];
    let right = vec![row(&[("id", "1"), ("v", "x")])];
    let _ = join("k", "id", &left, &right);
    assert_eq!(left, vec![row(&[("k", "1")])]);
    assert_eq!(right, vec![row(&[("id", "1"), ("v", "x")])]);
}

// =============================================================================
// Properties
// =============================================================================

fn record_strategy() -> impl Strategy<Value = Record<u8, i32>> {
    prop::collection::hash_map(0u8..16, any::<i32>(), 0..12)
}

proptest! {
    #[test]
    fn prop_merge_right_wins(left in record_strategy(), right in record_strategy()) {
        let merged = merge(&left, &right);
        for (key, value) in &right {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &left {
            if !right.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        prop_assert!(merged.keys().all(|key| left.contains_key(key) || right.contains_key(key)));
    }

    #[test]
    fn prop_merge_with_empty_is_identity(record in record_strategy()) {
        prop_assert_eq!(merge(&record, &Record::new()), record.clone());
        prop_assert_eq!(merge(&Record::new(), &record), record);
    }

    #[test]
    fn prop_select_is_a_subset(record in record_strategy(), fields in prop::collection::vec(0u8..16, 0..8)) {
        let picked = select(fields.iter(), &record);
        for (key, value) in &picked {
            prop_assert!(fields.contains(key));
            prop_assert_eq!(record.get(key), Some(value));
        }
        for field in &fields {
            prop_assert_eq!(picked.contains_key(field), record.contains_key(field));
        }
    }

    #[test]
    fn prop_rename_preserves_value(record in record_strategy(), from in 0u8..16, to in 16u8..32) {
        let renamed = rename(&from, to, &record);
        prop_assert_eq!(renamed.get(&to), record.get(&from));
        prop_assert!(!renamed.contains_key(&from));
        prop_assert_eq!(renamed.len(), record.len());
    }

    #[test]
    fn prop_join_keeps_every_left_row(
        left in prop::collection::vec(record_strategy(), 0..6),
        right in prop::collection::vec(record_strategy(), 0..6),
    ) {
        let joined = join(&0u8, &1u8, &left, &right);
        prop_assert_eq!(joined.len(), left.len());
        for (original, result) in left.iter().zip(&joined) {
            for key in original.keys() {
                prop_assert!(result.contains_key(key));
            }
        }
    }
}
