//! Relational helpers over key-value records.
//!
//! A [`Record`] is a plain `HashMap`. The helpers treat records as values:
//! every function except [`set`] leaves its inputs alone and returns a fresh
//! record. Lookups that may miss return [`Maybe`].
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::record::{Record, get, join, rename};
//!
//! let people: Vec<Record<&str, &str>> = vec![
//!     Record::from([("name", "ada"), ("team", "t1")]),
//!     Record::from([("name", "bob"), ("team", "t9")]),
//! ];
//! let teams: Vec<Record<&str, &str>> = vec![
//!     Record::from([("id", "t1"), ("title", "engines")]),
//! ];
//!
//! let joined = join("team", "id", &people, &teams);
//! assert_eq!(get("title", &joined[0]), Maybe::Just(&"engines"));
//! assert_eq!(get("title", &joined[1]), Maybe::Nothing);
//!
//! let renamed = rename("name", "handle", &joined[0]);
//! assert_eq!(get("handle", &renamed), Maybe::Just(&"ada"));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::control::Maybe;

/// A record: a mapping from field names to values.
pub type Record<K, V> = HashMap<K, V>;

/// Looks up a field.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::record::{Record, get};
///
/// let record = Record::from([(String::from("size"), 3)]);
/// assert_eq!(get("size", &record), Maybe::Just(&3));
/// assert_eq!(get("colour", &record), Maybe::Nothing);
/// ```
pub fn get<'a, K, V, Q>(key: &Q, record: &'a Record<K, V>) -> Maybe<&'a V>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
{
    record.get(key).into()
}

/// Stores `value` under `key` in place, returning the value it replaced.
///
/// This is the only helper that mutates.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::record::{Record, set};
///
/// let mut record = Record::new();
/// assert_eq!(set(&mut record, "size", 1), Maybe::Nothing);
/// assert_eq!(set(&mut record, "size", 2), Maybe::Just(1));
/// assert_eq!(record["size"], 2);
/// ```
pub fn set<K, V>(record: &mut Record<K, V>, key: K, value: V) -> Maybe<V>
where
    K: Hash + Eq,
{
    let previous = Maybe::from(record.insert(key, value));
    if previous.is_just() {
        tracing::trace!("set replaced an existing field");
    }
    previous
}

/// Combines two records. Fields of `right` win on collision.
pub fn merge<K, V>(left: &Record<K, V>, right: &Record<K, V>) -> Record<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = left.clone();
    merged.extend(right.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

/// Keeps only the listed fields. Fields the record lacks are skipped.
///
/// # Examples
///
/// ```rust
/// use funkit::record::{Record, select};
///
/// let record = Record::from([("a", 1), ("b", 2), ("c", 3)]);
/// let picked = select(["a", "c", "z"].iter(), &record);
/// assert_eq!(picked, Record::from([("a", 1), ("c", 3)]));
/// ```
pub fn select<'f, K, V, Q, I>(fields: I, record: &Record<K, V>) -> Record<K, V>
where
    I: IntoIterator<Item = &'f Q>,
    K: Borrow<Q> + Hash + Eq + Clone,
    V: Clone,
    Q: Hash + Eq + ?Sized + 'f,
{
    Maybe::cat_maybes(
        fields
            .into_iter()
            .map(|field| Maybe::from(record.get_key_value(field))),
    )
    .into_iter()
    .map(|(key, value)| (key.clone(), value.clone()))
    .collect()
}

/// Renames field `from` to `to`.
///
/// If `to` is already present, the renamed value replaces it. A record
/// without `from` is returned unchanged.
pub fn rename<K, V, Q>(from: &Q, to: K, record: &Record<K, V>) -> Record<K, V>
where
    K: Borrow<Q> + Hash + Eq + Clone,
    V: Clone,
    Q: Hash + Eq + ?Sized,
{
    let mut renamed: Record<K, V> = record
        .iter()
        .filter(|(key, _)| Borrow::<Q>::borrow(*key) != from)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if let Maybe::Just(value) = get(from, record) {
        renamed.insert(to, value.clone());
    }
    renamed
}

/// Left-joins two tables of records.
///
/// `right` is indexed by its `right_key` field; when several rows share a key
/// the last one wins, and rows without the field are ignored. Each row of
/// `left`, in order, is then merged with the right row whose key equals its
/// `left_key` field. Left rows with no match are kept unchanged.
///
/// # Examples
///
/// ```rust
/// use funkit::record::{Record, join};
///
/// let orders = vec![Record::from([("customer", 1), ("total", 30)])];
/// let customers = vec![
///     Record::from([("id", 1), ("tier", 2)]),
///     Record::from([("id", 1), ("tier", 3)]),
/// ];
///
/// let joined = join("customer", "id", &orders, &customers);
/// assert_eq!(joined[0]["tier"], 3);
/// assert_eq!(joined[0]["total"], 30);
/// ```
pub fn join<K, V, Q>(
    left_key: &Q,
    right_key: &Q,
    left: &[Record<K, V>],
    right: &[Record<K, V>],
) -> Vec<Record<K, V>>
where
    K: Borrow<Q> + Hash + Eq + Clone,
    V: Hash + Eq + Clone,
    Q: Hash + Eq + ?Sized,
{
    let mut index: HashMap<&V, &Record<K, V>> = HashMap::with_capacity(right.len());
    for (position, row) in right.iter().enumerate() {
        get(right_key, row).maybe_with(
            || {
                tracing::trace!(position, "right row lacks the join key");
            },
            |key| {
                index.insert(key, row);
            },
        );
    }

    left.iter()
        .enumerate()
        .map(|(position, row)| {
            get(left_key, row)
                .flat_map(|key| Maybe::from(index.get(key).copied()))
                .maybe_with(
                    || {
                        tracing::trace!(position, "left row has no match");
                        row.clone()
                    },
                    |matched| merge(row, matched),
                )
        })
        .collect()
}
