//! The two concrete containers.
//!
//! - [`Maybe`]: A value that may be absent (`Just` / `Nothing`)
//! - [`Result`]: A success or an error (`Ok` / `Err`)
//!
//! Both implement the full container protocol from
//! [`typeclass`](crate::typeclass) through their family markers
//! ([`MaybeFamily`], [`ResultFamily`]), so every derived combinator is
//! available on either of them.
//!
//! # Examples
//!
//! ## Optional lookups
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Container;
//!
//! fn parse(text: &str) -> Maybe<i32> {
//!     text.parse().ok().into()
//! }
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(parse("8").and_then(half), Maybe::Just(4));
//! assert_eq!(parse("7").and_then(half), Maybe::Nothing);
//! assert_eq!(parse("x").and_then(half).with_default(0), 0);
//! ```
//!
//! ## Recording failures
//!
//! ```rust
//! use monadic::control::Result;
//! use monadic::typeclass::Container;
//!
//! fn divide(a: i32, b: i32) -> Result<i32, String> {
//!     if b == 0 {
//!         Result::Err(format!("cannot divide {a} by zero"))
//!     } else {
//!         Result::Ok(a / b)
//!     }
//! }
//!
//! let twelve: Result<i32, String> = Result::Ok(12);
//! assert_eq!(twelve.clone().and_then2(Result::Ok(3), divide), Result::Ok(4));
//!
//! let failed = twelve.and_then2(Result::Ok(0), divide);
//! assert_eq!(failed, Result::Err("cannot divide 12 by zero".to_string()));
//! ```

mod error;
mod maybe;
mod result;

pub use error::NothingError;
pub use maybe::{Maybe, MaybeFamily};
pub use result::{Result, ResultFamily};
