//! A pair read back through the constant combinator.
//!
//! A Church pair is a value that, given a curried selector, feeds both of its
//! components to it. Choosing a component is then just choosing a selector:
//!
//! ```text
//! fst(p) = p(K)          K a b     = a
//! snd(p) = p(K I)        K I a b   = b
//! ```
//!
//! [`Pair`] stores its two components directly, but [`Pair::select`] keeps
//! that calling convention and [`Pair::fst`] / [`Pair::snd`] are defined with
//! exactly those selectors. The cons cells of
//! [`List`](crate::persistent::List) are pairs.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::pair;
//!
//! let point = pair(3, "three");
//! assert_eq!(point.fst(), 3);
//! assert_eq!(point.snd(), "three");
//!
//! // Any curried selector works
//! let sum = pair(3, 4).select(|x: i32| move |y: i32| x + y);
//! assert_eq!(sum, 7);
//! ```

use crate::compose::{constant_once, identity};

/// An immutable two-slot product.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Pair;
///
/// let cell = Pair::new(1, vec![2, 3]);
/// assert_eq!(cell.first(), &1);
/// assert_eq!(cell.second(), &vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

/// Constructs a [`Pair`] closing over `first` and `second`.
#[inline]
pub const fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::new(first, second)
}

impl<A, B> Pair<A, B> {
    /// Creates a new pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Feeds both components to a curried selector.
    ///
    /// `pair(x, y).select(s) == s(x)(y)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::pair;
    ///
    /// let described = pair(String::from("answer"), 42).select(|name: String| move |value: i32| format!("{name}={value}"));
    /// assert_eq!(described, "answer=42");
    /// ```
    #[inline]
    pub fn select<R, S, T>(self, selector: S) -> R
    where
        S: FnOnce(A) -> T,
        T: FnOnce(B) -> R,
    {
        selector(self.first)(self.second)
    }

    /// Selects the first component with the K combinator.
    #[inline]
    pub fn fst(self) -> A {
        self.select(constant_once::<A, B>)
    }

    /// Selects the second component with `K I`.
    #[inline]
    pub fn snd(self) -> B {
        self.select(|_| identity::<B>)
    }

    /// Returns a reference to the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Consumes the pair, returning both components.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Exchanges the two components.
    #[inline]
    #[must_use]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    pub(crate) const fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(value: Pair<A, B>) -> Self {
        value.into_tuple()
    }
}
