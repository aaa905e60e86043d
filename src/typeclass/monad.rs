//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends `Applicative` with `flat_map` (bind), so the result of
//! one step can choose the next step.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::typeclass::Monad;
///
/// fn halve<M: Monad<Inner = i32>>(m: M) -> M::WithType<i32>
/// where
///     M::WithType<i32>: From<Option<i32>>,
/// {
///     m.flat_map(|n| {
///         let halved = if n % 2 == 0 { Some(n / 2) } else { None };
///         halved.into()
///     })
/// }
///
/// assert_eq!(halve(Maybe::Just(10)), Maybe::Just(5));
/// assert_eq!(halve(Maybe::Just(3)), Maybe::Nothing);
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// This is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// This is `>>`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}
