//! Type class traits for the container protocol.
//!
//! This module provides the capability protocol that every container in the
//! crate implements, and the derived combinators built on top of it:
//!
//! - [`Functor`]: Mapping over the payload
//! - [`Applicative`]: Lifting values (`pure`), applying wrapped functions
//!   (`apply`), and combining containers (`map2`..`map4`)
//! - [`Monad`]: Sequencing (`and_then`), flattening (`join`),
//!   `and_then2`..`and_then4` and Kleisli composition (`m_compose`)
//! - [`Fallible`]: The empty state (`is_empty`, `with_default`) and the
//!   fallbacks built on it (`unwraps`, `first`, `last`)
//! - [`Container`]: Method-call syntax for all of the above
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior: the protocol traits are implemented by a [`Family`] marker, and
//! every concrete container names its family through [`TypeConstructor`].
//! Derived combinators are default methods on the protocol traits, so they
//! are written once and shared by `Maybe` and `Result`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, Result};
//! use monadic::typeclass::Container;
//!
//! let sum = Maybe::Just(1).map3(Maybe::Just(2), Maybe::Just(3), |a, b, c| a + b + c);
//! assert_eq!(sum, Maybe::Just(6));
//!
//! let error: Result<i32, &str> = Result::Err("division by zero");
//! assert_eq!(error.map2(Result::Ok(3), |a, b| a + b), Result::Err("division by zero"));
//! ```

mod applicative;
mod fallible;
mod functor;
mod higher;
mod monad;
mod syntax;

pub use applicative::Applicative;
pub use fallible::Fallible;
pub use functor::Functor;
pub use higher::{Applied, Family, TypeConstructor};
pub use monad::Monad;
pub use syntax::Container;
