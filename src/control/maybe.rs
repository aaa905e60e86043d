//! The optional-value monad.
//!
//! A `Maybe<A>` is either `Nothing` or `Just(a)`. Its Church reading is a
//! function of two handlers that invokes exactly one of them:
//!
//! ```text
//! Nothing        = default => _ => default
//! Just(v)        = _ => onJust => onJust(v)
//! ```
//!
//! Here it is a plain tagged enum, and [`Maybe::maybe`] is that eliminator.
//! Every other operation is written in terms of it or of `flat_map`, the same
//! way the encoded version derives them.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//!
//! let parsed = Maybe::from("42".parse::<i32>().ok());
//! let doubled = parsed.flat_map(|n| if n > 0 { Maybe::Just(n * 2) } else { Maybe::Nothing });
//! assert_eq!(doubled.from_maybe(0), 84);
//!
//! assert_eq!(Maybe::cat_maybes([Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]), vec![1, 3]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::error::AccessError;
use crate::compose::identity;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

#[cfg(feature = "persistent")]
use crate::persistent::List;

/// An optional value: `Nothing`, or `Just` a value.
///
/// # Laws
///
/// - **Left identity**: `Maybe::Just(x).flat_map(f) == f(x)`
/// - **Right identity**: `m.flat_map(Maybe::Just) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
/// - **Functor identity**: `m.fmap(identity) == m`
///
/// Exactly one of [`is_just`](Self::is_just) and
/// [`is_nothing`](Self::is_nothing) holds for every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    Nothing,
    /// A present value.
    Just(A),
}

/// Values that count as absent when lifted with [`Maybe::from_object`].
///
/// Empty strings, empty collections and the unit value are vacant. Scalars
/// never are, zero and `false` included.
pub trait Vacant {
    /// Returns `true` if this value carries nothing.
    fn is_vacant(&self) -> bool;
}

macro_rules! impl_never_vacant {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Vacant for $scalar {
                #[inline]
                fn is_vacant(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_never_vacant!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl Vacant for () {
    fn is_vacant(&self) -> bool {
        true
    }
}

impl Vacant for str {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl Vacant for String {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for [T] {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for Vec<T> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Vacant for HashMap<K, V, S> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Vacant for HashSet<T, S> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Vacant for BTreeMap<K, V> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacant for BTreeSet<T> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Vacant + ?Sized> Vacant for &T {
    fn is_vacant(&self) -> bool {
        (**self).is_vacant()
    }
}

impl<A> Maybe<A> {
    /// Wraps a value. The monad's `unit`.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Case analysis: `default` for `Nothing`, `function(value)` for `Just`.
    ///
    /// Exactly one branch is used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).maybe(0, |n| n + 1), 4);
    /// assert_eq!(Maybe::Nothing.maybe(0, |n: i32| n + 1), 0);
    /// ```
    #[inline]
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Nothing => default,
            Self::Just(value) => function(value),
        }
    }

    /// Like [`maybe`](Self::maybe), but the default is computed only when needed.
    #[inline]
    pub fn maybe_with<B, D, F>(self, default: D, function: F) -> B
    where
        D: FnOnce() -> B,
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Nothing => default(),
            Self::Just(value) => function(value),
        }
    }

    /// Returns the contained value, or `default` for `Nothing`. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(7).from_maybe(0), 7);
    /// assert_eq!(Maybe::Nothing.from_maybe(0), 0);
    /// ```
    #[inline]
    pub fn from_maybe(self, default: A) -> A {
        self.maybe(default, identity)
    }

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::EmptyOptionalAccess`] when called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{AccessError, Maybe};
    ///
    /// assert_eq!(Maybe::Just(7).from_just(), Ok(7));
    /// assert_eq!(Maybe::<i32>::Nothing.from_just(), Err(AccessError::EmptyOptionalAccess));
    /// ```
    pub fn from_just(self) -> Result<A, AccessError> {
        self.maybe_with(
            || {
                tracing::debug!(operation = "from_just", "value of Nothing was requested");
                Err(AccessError::EmptyOptionalAccess)
            },
            Ok,
        )
    }

    /// Lifts a host value, treating `None` and vacant values as absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_object(Some(vec![1])), Maybe::Just(vec![1]));
    /// assert_eq!(Maybe::from_object(Some(Vec::<i32>::new())), Maybe::Nothing);
    /// assert_eq!(Maybe::from_object(Some(HashMap::<u8, u8>::new())), Maybe::Nothing);
    /// assert_eq!(Maybe::<String>::from_object(None), Maybe::Nothing);
    /// ```
    pub fn from_object(value: Option<A>) -> Self
    where
        A: Vacant,
    {
        match value {
            Some(present) if !present.is_vacant() => Self::Just(present),
            _ => Self::Nothing,
        }
    }

    /// Lifts an optional string, treating `None` and `""` as absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_string(Some("cake")), Maybe::Just("cake"));
    /// assert_eq!(Maybe::from_string(Some("")), Maybe::Nothing);
    /// assert_eq!(Maybe::<&str>::from_string(None), Maybe::Nothing);
    /// ```
    pub fn from_string(value: Option<A>) -> Self
    where
        A: AsRef<str>,
    {
        Self::from(value).flat_map(|text| {
            if text.as_ref().is_empty() {
                Self::Nothing
            } else {
                Self::Just(text)
            }
        })
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn to_object(self) -> Option<A> {
        self.maybe(None, Some)
    }

    /// Takes the first element of a sequence, if there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_enumerable(vec![4, 5, 6]), Maybe::Just(4));
    /// assert_eq!(Maybe::from_enumerable(Vec::<i32>::new()), Maybe::Nothing);
    /// ```
    pub fn from_enumerable<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        elements.into_iter().next().into()
    }

    /// Converts into a sequence of zero or one elements.
    pub fn to_enumerable(self) -> Vec<A> {
        self.maybe_with(Vec::new, |value| vec![value])
    }

    /// Keeps only the present values, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let maybes = vec![Maybe::Just("a"), Maybe::Nothing, Maybe::Just("c")];
    /// assert_eq!(Maybe::cat_maybes(maybes), vec!["a", "c"]);
    /// ```
    pub fn cat_maybes<I>(maybes: I) -> Vec<A>
    where
        I: IntoIterator<Item = Self>,
    {
        maybes.into_iter().flatten().collect()
    }

    /// Monadic bind: `Nothing` stays `Nothing`, otherwise `function(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let reciprocal = |n: i32| if n == 0 { Maybe::Nothing } else { Maybe::Just(100 / n) };
    /// assert_eq!(Maybe::Just(4).flat_map(reciprocal), Maybe::Just(25));
    /// assert_eq!(Maybe::Just(0).flat_map(reciprocal), Maybe::Nothing);
    /// assert_eq!(Maybe::Nothing.flat_map(reciprocal), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.maybe(Maybe::Nothing, function)
    }

    /// Maps a plain function over the contained value, preserving absence.
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.flat_map(|value| Maybe::Just(function(value)))
    }

    /// Lifts a binary function over two optionals.
    ///
    /// Short-circuits to `Nothing` if either argument is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let add = |x: i32, y: i32| x + y;
    /// assert_eq!(Maybe::lift_m2(add, Maybe::Just(1), Maybe::Just(2)), Maybe::Just(3));
    /// assert_eq!(Maybe::lift_m2(add, Maybe::Just(1), Maybe::Nothing), Maybe::Nothing);
    /// ```
    pub fn lift_m2<B, C, F>(function: F, first: Self, second: Maybe<B>) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        first.flat_map(|a| second.fmap(|b| function(a, b)))
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(value),
        }
    }

    /// Iterates over the contained value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&A> {
        self.as_ref().to_object().into_iter()
    }
}

impl<F> Maybe<F> {
    /// Applicative application: applies a contained function to a contained value.
    ///
    /// `Nothing` on either side propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// let increment = Maybe::Just(|n: i32| n + 1);
    /// assert_eq!(increment.ap(Maybe::Just(1)), Maybe::Just(2));
    /// assert_eq!(increment.ap(Maybe::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.flat_map(|function| value.fmap(function))
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Flattens one level of nesting. The monad's `join`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(1)).mu(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).mu(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn mu(self) -> Maybe<A> {
        self.flat_map(identity)
    }
}

#[cfg(feature = "persistent")]
impl<A: Clone + 'static> Maybe<A> {
    /// Turns a list of optionals into an optional list.
    ///
    /// The result is `Nothing` as soon as any element is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::persistent::List;
    ///
    /// let present: List<Maybe<i32>> = vec![Maybe::Just(1), Maybe::Just(2)].into_iter().collect();
    /// assert_eq!(Maybe::sequence(&present).fmap(|list| list.to_array()), Maybe::Just(vec![1, 2]));
    ///
    /// let gap: List<Maybe<i32>> = vec![Maybe::Just(1), Maybe::Nothing].into_iter().collect();
    /// assert_eq!(Maybe::sequence(&gap), Maybe::Nothing);
    /// ```
    pub fn sequence(maybes: &List<Self>) -> Maybe<List<A>> {
        maybes.sequence()
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        value.to_object()
    }
}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_object().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B>
    where
        B: Clone + 'static,
    {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Self::lift_m2(function, self, other)
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.ap(other)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> Maybe<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
