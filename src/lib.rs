//! # monadic
//!
//! `Maybe` and `Result` containers that share one composition protocol,
//! modeled on the Functor / Applicative / Monad hierarchy.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and `Fallible`,
//!   implemented once per container family. Derived combinators (`map2..4`,
//!   `and_then2..4`, `m_compose`, `first`, `last`, `unwraps`) are written
//!   once on top of them.
//! - **Containers**: `Maybe` (`Just` / `Nothing`) and `Result` (`Ok` / `Err`).
//! - **Lifting**: adapters turning `Option`-returning, sentinel-returning and
//!   fallible functions into functions returning the containers.
//!
//! Every combinator is fail-fast: a chain stops at the first `Nothing` or
//! `Err`, and later functions are never called.
//!
//! ## Feature Flags
//!
//! - `typeclass`: The protocol traits
//! - `control`: `Maybe` and `Result`
//! - `lift`: Lifting adapters
//! - `serde`: `Serialize` / `Deserialize` for both containers
//! - `tracing`: Trace events from the lifting adapters
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! fn reciprocal(n: f64) -> Maybe<f64> {
//!     if n == 0.0 { Nothing } else { Just(1.0 / n) }
//! }
//!
//! assert_eq!(Just(4.0).and_then(reciprocal), Just(0.25));
//! assert_eq!(Just(0.0).and_then(reciprocal), Nothing);
//! assert_eq!(Just(2.0).map2(Just(3.0), |a, b| a * b), Just(6.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the protocol traits, `Maybe` with its `Just` / `Nothing`
/// constructors, both family markers and the lifting adapters.
///
/// The crate's `Result` is left out so that `Result`, `Ok` and `Err` keep
/// naming the standard library's; import it as `monadic::control::Result`.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::{Maybe, MaybeFamily, NothingError, ResultFamily};

    #[cfg(feature = "control")]
    pub use crate::control::Maybe::{Just, Nothing};

    #[cfg(feature = "lift")]
    pub use crate::lift::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "lift")]
pub mod lift;
