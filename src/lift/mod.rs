//! Adapters that lift plain functions into the containers.
//!
//! - [`as_maybe`]: `Fn(A) -> Option<T>` into `Fn(A) -> Maybe<T>`
//! - [`as_maybe_sentinel`]: `Fn(A) -> T` into `Fn(A) -> Maybe<T>`, with an
//!   explicit value standing for absence
//! - [`as_result`]: `Fn(A) -> std::result::Result<T, E>` into a function that
//!   captures the failures named by an [`Intercept`] as `Result::Err` and
//!   propagates the rest
//!
//! Lifted functions plug straight into `and_then`, `and_then2..4` and
//! `m_compose`.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use monadic::control::Maybe;
//! use monadic::lift::as_maybe;
//! use monadic::typeclass::Container;
//!
//! let names = HashMap::from([(1, "one"), (2, "two")]);
//! let ids = HashMap::from([("one", 1), ("two", 2)]);
//!
//! let name_of = as_maybe(|id: i32| names.get(&id).copied());
//! let id_of = as_maybe(|name: &str| ids.get(name).copied());
//!
//! assert_eq!(Maybe::Just(2).m_compose(&name_of, &id_of), Maybe::Just(2));
//! assert_eq!(Maybe::Just(3).m_compose(&name_of, &id_of), Maybe::Nothing);
//! ```
//!
//! # Logging
//!
//! With the `tracing` feature enabled, the adapters emit `trace` events when
//! a lifted function reports absence, and when an error is captured or
//! propagated.

mod as_maybe;
mod as_result;
mod intercept;

pub use as_maybe::{as_maybe, as_maybe_sentinel};
pub use as_result::as_result;
pub use intercept::{Classify, Intercept};
