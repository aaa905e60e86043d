//! Persistent (immutable) data structures.
//!
//! - [`List`]: a persistent singly-linked cons list whose cells are
//!   [`Pair`](crate::control::Pair)s
//!
//! # Structural Sharing
//!
//! Prepending to a list creates one new cell pointing at the old list; the
//! old list is never copied or changed.
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::List;
//!
//! let list = List::nil().prepend(3).prepend(2).prepend(1);
//! assert_eq!(list.head(), Ok(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;

pub use list::Iter;
pub use list::List;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(List<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(List<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "arc"))]
mod thread_tests {
    use super::List;
    use rstest::rstest;
    use std::thread;

    #[rstest]
    fn test_list_is_readable_from_many_threads() {
        let list: List<u64> = (1..=100).collect();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = list.clone();
                thread::spawn(move || shared.foldr(0, |element, accumulator| element + accumulator))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5050);
        }
    }
}
