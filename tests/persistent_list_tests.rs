#![cfg(feature = "persistent")]
//! Integration tests for `List`.

use funkit::control::{AccessError, Id, Maybe, pair};
use funkit::persistent::List;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Construction and access
// =============================================================================

#[rstest]
fn test_cons_chain_matches_collect() {
    let built = List::cons(1, List::cons(2, List::cons(3, List::nil())));
    let collected: List<i32> = (1..=3).collect();
    assert_eq!(built, collected);
}

#[rstest]
fn test_cell_is_a_pair_of_head_and_tail() {
    let list: List<char> = "abc".chars().collect();
    let cell = list.cell().from_just().unwrap().clone();
    let (head, tail) = cell.into_tuple();
    assert_eq!(head, 'a');
    assert_eq!(tail.to_array(), vec!['b', 'c']);
    assert_eq!(pair(head, tail.clone()).snd(), tail);
}

#[rstest]
fn test_walking_with_tail_reaches_nil() {
    let mut list: List<i32> = (0..10).collect();
    let mut visited = Vec::new();
    while let Ok(head) = list.head() {
        visited.push(*head);
        list = list.tail().unwrap();
    }
    assert_eq!(visited, (0..10).collect::<Vec<_>>());
    assert_eq!(list.tail(), Err(AccessError::empty_list("tail")));
}

#[rstest]
fn test_error_messages() {
    let empty: List<u8> = List::nil();
    assert_eq!(empty.head().unwrap_err().to_string(), "head on empty list");
    assert_eq!(empty.tail().unwrap_err().to_string(), "tail on empty list");
}

#[rstest]
fn test_default_is_nil() {
    assert!(List::<String>::default().is_nil());
}

// =============================================================================
// Stack safety
// =============================================================================

#[rstest]
fn test_foldr_on_a_hundred_thousand_elements() {
    let list: List<u64> = (1..=100_000).collect();
    let sum = list.foldr(0u64, |element, accumulator| element + accumulator);
    assert_eq!(sum, 5_000_050_000);
}

#[rstest]
fn test_foldr_builds_a_long_list_back() {
    let list: List<u32> = (0..100_000).collect();
    let rebuilt = list.foldr(List::nil(), List::cons);
    assert_eq!(rebuilt.len(), 100_000);
    assert_eq!(rebuilt.head(), Ok(&0));
}

#[rstest]
fn test_sequence_on_a_long_list_of_maybes() {
    let maybes: List<Maybe<u32>> = (0..100_000).map(Maybe::Just).collect();
    let sequenced = Maybe::sequence(&maybes);
    assert_eq!(sequenced.fmap(|list| list.len()), Maybe::Just(100_000));
}

#[rstest]
fn test_sequence_on_a_long_list_of_suspensions() {
    let suspensions: List<Id<u32>> = (0..100_000).map(Id::unit).collect();
    let sequenced = Id::sequence(&suspensions);
    let forced = sequenced.counit();
    assert_eq!(forced.len(), 100_000);
    assert_eq!(forced.head(), Ok(&0));
    let total = sequenced
        .counit()
        .foldr(0u64, |element, total| u64::from(element) + total);
    assert_eq!(total, 4_999_950_000);
}

#[rstest]
fn test_dropping_an_unforced_long_sequence() {
    let suspensions: List<Id<u32>> = (0..100_000).map(Id::unit).collect();
    let sequenced = Id::sequence(&suspensions);
    drop(suspensions);
    drop(sequenced);
}

#[rstest]
fn test_id_sequence_reruns_every_element_on_each_force() {
    let runs = Rc::new(Cell::new(0));
    let suspensions: List<Id<usize>> = (0..3)
        .map(|index| {
            let runs = Rc::clone(&runs);
            Id::new(move || {
                runs.set(runs.get() + 1);
                index
            })
        })
        .collect();

    let sequenced = Id::sequence(&suspensions);
    assert_eq!(runs.get(), 0);
    assert_eq!(sequenced.counit().to_array(), vec![0, 1, 2]);
    assert_eq!(sequenced.counit().to_array(), vec![0, 1, 2]);
    assert_eq!(runs.get(), 6);
}

// =============================================================================
// Sequence
// =============================================================================

#[rstest]
#[case(vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)], Maybe::Just(vec![1, 2, 3]))]
#[case(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)], Maybe::Nothing)]
#[case(vec![Maybe::Nothing], Maybe::Nothing)]
#[case(vec![], Maybe::Just(vec![]))]
fn test_maybe_sequence(#[case] input: Vec<Maybe<i32>>, #[case] expected: Maybe<Vec<i32>>) {
    let list: List<Maybe<i32>> = input.into_iter().collect();
    assert_eq!(Maybe::sequence(&list).fmap(|inner| inner.to_array()), expected);
}

#[rstest]
fn test_id_sequence_is_lazy_and_ordered() {
    let list: List<Id<&str>> = vec![Id::unit("a"), Id::new(|| "b"), Id::unit("c")]
        .into_iter()
        .collect();
    let sequenced = Id::sequence(&list);
    assert_eq!(sequenced.counit().to_array(), vec!["a", "b", "c"]);
    assert_eq!(sequenced.counit().len(), 3);
}
