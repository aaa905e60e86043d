//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining contexts (`pure`, `map2`, `apply`)
//! - [`Monad`]: Sequencing computations with dependency (`flat_map`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types to emulate them, so
//! one traversal can be written for every applicative at once.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Id, Maybe};
//! use funkit::typeclass::Applicative;
//!
//! fn add_in<A>(left: A, right: A::WithType<i32>) -> A::WithType<i32>
//! where
//!     A: Applicative<Inner = i32>,
//! {
//!     left.map2(right, |x, y| x + y)
//! }
//!
//! assert_eq!(add_in(Maybe::Just(1), Maybe::Just(2)), Maybe::Just(3));
//! assert_eq!(add_in(Id::unit(1), Id::unit(2)).counit(), 3);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
