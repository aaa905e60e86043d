//! Control structures: the pair and the two monads.
//!
//! - [`Pair`]: an immutable product read back through a curried selector
//! - [`Maybe`]: the optional-value monad
//! - [`Id`]: the lazy identity monad
//! - [`AccessError`]: the error returned by partial accessors
//!
//! # Examples
//!
//! ## Optional values
//!
//! ```rust
//! use funkit::control::Maybe;
//!
//! let port = Maybe::from_string(Some("8080"))
//!     .flat_map(|text| Maybe::from(text.parse::<u16>().ok()));
//! assert_eq!(port.from_maybe(80), 8080);
//! ```
//!
//! ## Deferred computation
//!
//! ```rust
//! use funkit::control::Id;
//!
//! let deferred = Id::new(|| 6).fmap(|n: i32| n * 7);
//! assert_eq!(deferred.counit(), 42);
//! ```

mod error;
mod id;
mod maybe;
mod pair;

pub use error::AccessError;
pub use id::Id;
pub use maybe::{Maybe, Vacant};
pub use pair::{Pair, pair};
