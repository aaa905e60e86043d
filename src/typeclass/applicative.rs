//! Applicative type class - applying functions within a context.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure` (the monad's `unit`): lift a plain value into the context
//! - `map2` (`liftM2`): combine two independent values in the context
//! - `apply` (`ap`): apply a function in the context to a value in the context
//!
//! `map2` together with `pure` is exactly what a list traversal needs, which
//! is why [`List::sequence`](crate::persistent::List::sequence) is written
//! against this trait.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(identity).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
///
/// # Laws
///
/// - **Identity**: `pure(identity).apply(v) == v`
/// - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
/// - **Interchange**: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::Just(42));
///
/// let sum = Applicative::map2(Maybe::Just(3), Maybe::Just(4), |x: i32, y: i32| x + y);
/// assert_eq!(sum, Maybe::Just(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// `Clone` is required because a lazy context may hand the value out
    /// every time it is forced.
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is "empty" in the sense of the specific applicative,
    /// the result is too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::typeclass::Applicative;
    ///
    /// let missing = Applicative::map2(Maybe::Just(1), Maybe::<i32>::Nothing, |x: i32, y: i32| x + y);
    /// assert_eq!(missing, Maybe::Nothing);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::typeclass::Applicative;
    ///
    /// let function = Maybe::Just(|x: i32| x + 1);
    /// assert_eq!(Applicative::apply(function, Maybe::Just(5)), Maybe::Just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> Output,
        B: 'static,
        Output: 'static;

    /// Combines two applicative values into a tuple.
    ///
    /// This is `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}
