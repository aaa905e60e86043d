//! Persistent (immutable) singly-linked cons list.
//!
//! A [`List`] is either empty or a shared cons cell holding a head and the
//! rest of the list. The cell is a [`Pair`], so taking a list apart is pair
//! selection:
//!
//! ```text
//! Nil          = nothing
//! Cons(h, t)   = pair(h, t)
//! head(Cons)   = fst(cell)
//! tail(Cons)   = snd(cell)
//! ```
//!
//! Cells are reference counted and never mutated, so every list built from
//! another shares its suffix:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.prepend(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::List;
//!
//! let list = List::cons(1, List::cons(2, List::cons(3, List::nil())));
//! assert_eq!(list.head(), Ok(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! // Right fold
//! let sum = list.foldr(0, |element, accumulator| element + accumulator);
//! assert_eq!(sum, 6);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;
use crate::control::{AccessError, Maybe, Pair};
use crate::typeclass::{Applicative, Functor, TypeConstructor};

/// Elements kept inline by the fold's work stack before it spills to the heap.
const FOLD_STACK_INLINE: usize = 32;

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `nil`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `foldr`   | O(n)       |
/// | `to_array`| O(n)       |
///
/// # Examples
///
/// ```rust
/// use funkit::persistent::List;
///
/// let list: List<i32> = (1..=3).collect();
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
pub struct List<T> {
    cell: Option<ReferenceCounter<Pair<T, List<T>>>>,
    length: usize,
}

impl<T> List<T> {
    /// Creates the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list: List<i32> = List::nil();
    /// assert!(list.is_nil());
    /// ```
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            cell: None,
            length: 0,
        }
    }

    /// Builds a list from a head and a tail.
    ///
    /// The tail is shared, not copied.
    #[inline]
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        let length = tail.length + 1;
        Self {
            cell: Some(ReferenceCounter::new(Pair::new(head, tail))),
            length,
        }
    }

    /// Returns a new list with `head` in front of this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let tail: List<i32> = List::nil().prepend(2);
    /// let list = tail.prepend(1);
    /// assert_eq!(list.to_array(), vec![1, 2]);
    /// assert_eq!(tail.to_array(), vec![2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn prepend(&self, head: T) -> Self {
        Self::cons(head, self.clone())
    }

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.cell.is_none()
    }

    /// Same as [`is_nil`](Self::is_nil).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_nil()
    }

    /// Returns the number of elements. O(1).
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Exposes the cons cell, or `Nothing` for the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list: List<i32> = (1..=2).collect();
    /// let cell = list.cell().from_just().unwrap();
    /// assert_eq!(cell.first(), &1);
    /// assert_eq!(cell.second().to_array(), vec![2]);
    /// ```
    #[inline]
    pub fn cell(&self) -> Maybe<&Pair<T, Self>> {
        self.cell.as_deref().into()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::EmptyListAccess`] on the empty list.
    pub fn head(&self) -> Result<&T, AccessError> {
        self.cell().maybe_with(
            || Err(empty_access("head")),
            |cell| Ok(cell.first()),
        )
    }

    /// Returns everything after the first element, sharing it.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::EmptyListAccess`] on the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::AccessError;
    /// use funkit::persistent::List;
    ///
    /// let list: List<i32> = (1..=3).collect();
    /// assert_eq!(list.tail().map(|tail| tail.to_array()), Ok(vec![2, 3]));
    /// assert_eq!(List::<i32>::nil().tail(), Err(AccessError::empty_list("tail")));
    /// ```
    pub fn tail(&self) -> Result<Self, AccessError> {
        self.cell().maybe_with(
            || Err(empty_access("tail")),
            |cell| Ok(cell.second().clone()),
        )
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.cell.as_deref(),
            remaining: self.length,
        }
    }

    /// Builds a list holding the elements of `elements`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list = List::from_enumerable(vec!['a', 'b']);
    /// assert_eq!(list.head(), Ok(&'a'));
    /// ```
    pub fn from_enumerable<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::build_from_vec(elements.into_iter().collect())
    }

    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::nil();
        while let Some(element) = elements.pop() {
            list = Self::cons(element, list);
        }
        list
    }
}

impl<T: Clone> List<T> {
    /// Right fold: `f(x1, f(x2, ... f(xn, initial)))`.
    ///
    /// The fold runs on an explicit work stack, so it does not grow the call
    /// stack with the length of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::List;
    ///
    /// let list: List<&str> = vec!["a", "b", "c"].into_iter().collect();
    /// let joined = list.foldr(String::new(), |element, accumulator| format!("({element} {accumulator})"));
    /// assert_eq!(joined, "(a (b (c )))");
    /// ```
    pub fn foldr<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let pending: SmallVec<[&T; FOLD_STACK_INLINE]> = self.iter().collect();
        pending
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| {
                function(element.clone(), accumulator)
            })
    }

    /// Copies the elements into a `Vec`, in order.
    pub fn to_array(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<M> List<M>
where
    M: Applicative + Clone + 'static,
    M::Inner: 'static,
{
    /// Turns a list of effects into an effect producing a list.
    ///
    /// This is `foldr(pure(nil), |h, t| map2(h, t, cons))`, so it works for
    /// any [`Applicative`]: for `Maybe` the result is absent as soon as one
    /// element is, and for `Id` forcing the result forces each element in
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::persistent::List;
    ///
    /// let list: List<Maybe<i32>> = vec![Maybe::Just(1), Maybe::Just(2)].into_iter().collect();
    /// let sequenced: Maybe<List<i32>> = list.sequence();
    /// assert_eq!(sequenced.fmap(|inner| inner.to_array()), Maybe::Just(vec![1, 2]));
    /// ```
    pub fn sequence(&self) -> M::WithType<List<M::Inner>> {
        self.foldr(M::pure(List::nil()), |element, accumulator| {
            element.map2::<List<M::Inner>, List<M::Inner>, _>(accumulator, List::cons)
        })
    }
}

fn empty_access(operation: &'static str) -> AccessError {
    tracing::debug!(operation, "accessor called on empty list");
    AccessError::empty_list(operation)
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`List`].
pub struct Iter<'a, T> {
    current: Option<&'a Pair<T, List<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|cell| {
            self.current = cell.second().cell.as_deref();
            self.remaining -= 1;
            cell.first()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            length: self.length,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned cells one at a time instead of recursing.
        let mut next = self.cell.take();
        while let Some(cell) = next {
            match ReferenceCounter::try_unwrap(cell) {
                Ok(mut pair) => next = pair.second_mut().cell.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_enumerable(iter)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> Functor for List<T> {
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        List::build_from_vec(self.iter().cloned().map(function).collect())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Cells are built back to front, so the elements are buffered first.
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
