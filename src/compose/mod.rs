//! Combinators and function composition.
//!
//! This module is the base layer of the crate: a handful of combinators that
//! everything else is built from.
//!
//! # Overview
//!
//! - [`identity`]: I, `identity(x) = x`
//! - [`compose`] / [`compose!`]: B, `compose(f, g)(x) = f(g(x))`
//! - [`constant`] / [`constant_once`]: K, `constant(x)(y) = x`
//! - [`flip`]: C, `flip(f)(b)(a) = f(a)(b)`
//! - [`ap`]: S, `ap(f, g)(k) = f(k)(g(k))`
//! - [`curry`] / [`curry3`] / [`uncurry`]: tupled and curried forms
//! - [`promote`]: element function to vector function
//!
//! # Examples
//!
//! ```
//! use funkit::compose::{compose, curry, flip, uncurry};
//!
//! let subtract = |x: i32| move |y: i32| x - y;
//!
//! assert_eq!(flip(subtract)(1)(10), 9);
//! assert_eq!(uncurry(subtract)(10, 1), 9);
//! assert_eq!(curry(uncurry(subtract))(10)(1), 9);
//!
//! let negate_then_double = compose(|x: i32| x * 2, |x: i32| -x);
//! assert_eq!(negate_then_double(3), -6);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`
//! - **Flip**: `flip(flip(f)) == f`
//! - **Curry**: `curry(uncurry(f)) == f` under application
//! - **SKK**: `ap(constant, constant) == identity`

mod compose_macro;
mod utils;

pub use utils::{ap, compose, constant, constant_once, curry, curry3, flip, identity, promote, uncurry};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::compose;
