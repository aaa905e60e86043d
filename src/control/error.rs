//! Error type for the partial accessors.
//!
//! Only three operations in the crate can fail, and all of them are
//! accessors on an empty structure: [`Maybe::from_just`] on `Nothing`, and
//! [`List::head`] / [`List::tail`] on the empty list.
//!
//! [`Maybe::from_just`]: crate::control::Maybe::from_just
//! [`List::head`]: crate::persistent::List::head
//! [`List::tail`]: crate::persistent::List::tail

/// Represents an attempt to read a value out of an empty structure.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{AccessError, Maybe};
///
/// let error = Maybe::<i32>::Nothing.from_just().unwrap_err();
/// assert_eq!(error, AccessError::EmptyOptionalAccess);
/// assert_eq!(error.to_string(), "from_just: Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AccessError {
    /// The contained value of a `Nothing` was requested.
    #[error("from_just: Nothing")]
    EmptyOptionalAccess,

    /// `head` or `tail` was called on the empty list.
    #[error("{operation} on empty list")]
    EmptyListAccess {
        /// The accessor that was called (`"head"` or `"tail"`).
        operation: &'static str,
    },
}

impl AccessError {
    /// Builds an [`AccessError::EmptyListAccess`] for the named accessor.
    #[inline]
    #[must_use]
    pub const fn empty_list(operation: &'static str) -> Self {
        Self::EmptyListAccess { operation }
    }
}
