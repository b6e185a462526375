//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents containers that
//! can have a function applied to their payload while preserving the
//! structure.
//!
//! The trait is implemented by a container's [`Family`], so its operations are
//! associated functions (`MaybeFamily::map(value, f)`). Method-call syntax
//! (`value.map(f)`) comes from [`Container`](super::Container).
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeFamily};
//! use monadic::typeclass::Functor;
//!
//! let transformed: Maybe<String> = MaybeFamily::map(Maybe::Just(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Maybe::Just("5".to_string()));
//!
//! // Nothing is preserved
//! let transformed: Maybe<String> = MaybeFamily::map(Maybe::Nothing, |n: i32| n.to_string());
//! assert_eq!(transformed, Maybe::Nothing);
//! ```

use super::higher::{Applied, Family};

/// A type class for containers that can have a function mapped over their payload.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.map(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.map(f).map(g) == fa.map(|x| g(f(x)))
/// ```
pub trait Functor: Family {
    /// Applies a function to the payload, if there is one.
    ///
    /// The empty state (`Nothing`, `Err(e)`) is returned unchanged and
    /// `function` is not called. A panic raised by `function` is not caught.
    ///
    /// # Arguments
    ///
    /// * `fa` - The container to map over
    /// * `function` - A function that transforms the payload
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Result, ResultFamily};
    /// use monadic::typeclass::Functor;
    ///
    /// let ok: Result<i32, &str> = Result::Ok(5);
    /// assert_eq!(ResultFamily::map(ok, |n| n * 2), Result::Ok(10));
    ///
    /// let err: Result<i32, &str> = Result::Err("boom");
    /// assert_eq!(ResultFamily::map(err, |n| n * 2), Result::Err("boom"));
    /// ```
    fn map<A, B, F>(fa: Applied<Self, A>, function: F) -> Applied<Self, B>
    where
        F: FnOnce(A) -> B;
}
