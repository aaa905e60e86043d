//! Functor type class - mapping over container values.
//!
//! A `Functor` lets a function be applied to the value(s) inside a structure
//! without changing the structure's shape: `Nothing` stays `Nothing`, a
//! suspension stays suspended, a list keeps its length.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(structure: F) -> F::WithType<String> {
//!     structure.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::Just(5)), Maybe::Just("#5".to_string()));
//! assert_eq!(describe(Maybe::Nothing), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// Functions are `Fn + 'static` rather than `FnOnce`: the lazy
/// [`Id`](crate::control::Id) keeps the function inside a suspension that may
/// be forced many times, and [`List`](crate::persistent::List) applies it once
/// per element.
///
/// # Laws
///
/// - **Identity**: `fa.fmap(|x| x) == fa`
/// - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::typeclass::Functor;
    ///
    /// let doubled = Functor::fmap(Maybe::Just(5), |n: i32| n * 2);
    /// assert_eq!(doubled, Maybe::Just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value(s) inside the functor with a constant.
    ///
    /// This is `fmap(|_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value(s) inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).void(), Maybe::Just(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
