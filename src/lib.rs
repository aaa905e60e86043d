//! # funkit
//!
//! A small functional programming toolkit for Rust: the classic combinators,
//! two monads, a pair selected through the constant combinator, and a
//! persistent cons list built on top of that pair.
//!
//! ## Overview
//!
//! - **Combinators**: `identity`, `compose`, `curry`/`uncurry`, `flip`,
//!   `constant` (K) and `ap` (S), plus the variadic [`compose!`] macro
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over GAT-emulated
//!   type constructors
//! - **Control Structures**: `Pair`, the optional-value monad `Maybe` and the
//!   lazy identity monad `Id`
//! - **Persistent Data Structures**: an immutable, structurally shared `List`
//!   with a stack-safe right fold and monadic `sequence`
//! - **Records**: relational helpers (`get`, `set`, `merge`, `select`,
//!   `rename`, `join`) over `HashMap` records
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `compose`: Combinators and the `compose!` macro
//! - `control`: `Pair`, `Maybe`, `Id`
//! - `persistent`: The cons `List`
//! - `record`: Record helpers
//! - `arc`: Use `Arc` instead of `Rc` inside `List`
//! - `serde`: Serialization for `Maybe`, `Pair` and `List`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let numbers: List<Maybe<i32>> = [Maybe::Just(1), Maybe::Just(2)].into_iter().collect();
//! let sequenced = Maybe::sequence(&numbers);
//! assert_eq!(sequenced.fmap(|list| list.to_array()), Maybe::Just(vec![1, 2]));
//!
//! let lazy = Id::unit(2).flat_map(|x| Id::unit(x + 1));
//! assert_eq!(lazy.counit(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and combinators.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "record")]
pub mod record;
