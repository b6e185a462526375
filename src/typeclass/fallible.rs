//! Fallible type class - containers with an empty state.
//!
//! `Maybe` is empty when it is `Nothing`; `Result` is empty when it is
//! `Err(_)`. This module provides the operations that only make sense once a
//! container can tell whether it holds a value:
//!
//! - `is_empty` and `with_default` (provided by each container)
//! - `unwraps`, `first` and `last` (derived here once)
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeFamily};
//! use monadic::typeclass::Fallible;
//!
//! assert_eq!(MaybeFamily::first(Maybe::Nothing, Maybe::Just(2)), Maybe::Just(2));
//! assert_eq!(MaybeFamily::last(Maybe::Just(1), Maybe::Just(2)), Maybe::Just(2));
//! assert_eq!(MaybeFamily::with_default(Maybe::Nothing, 0), 0);
//! ```

use super::functor::Functor;
use super::higher::Applied;

/// A type class for containers that may be empty.
///
/// # Laws
///
/// ```text
/// with_default(pure(x), d) == x
/// is_empty(fa) implies with_default(fa, d) == d
/// first(fa, fb) == fa  when !is_empty(fa)
/// last(fa, fb)  == fb  when !is_empty(fb)
/// ```
pub trait Fallible: Functor {
    /// Returns `true` for the empty state (`Nothing`, `Err(_)`).
    fn is_empty<A>(fa: &Applied<Self, A>) -> bool;

    /// Returns the held value, or `default` when empty. Never panics.
    fn with_default<A>(fa: Applied<Self, A>, default: A) -> A;

    /// Returns `function(value)` when present, otherwise `default` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, MaybeFamily};
    /// use monadic::typeclass::Fallible;
    ///
    /// assert_eq!(MaybeFamily::unwraps(Maybe::Just(4), |n: i32| n * 10, -1), 40);
    /// assert_eq!(MaybeFamily::unwraps(Maybe::Nothing, |n: i32| n * 10, -1), -1);
    /// ```
    #[inline]
    fn unwraps<A, B, F>(fa: Applied<Self, A>, function: F, default: B) -> B
    where
        F: FnOnce(A) -> B,
    {
        Self::with_default::<B>(Self::map::<A, B, F>(fa, function), default)
    }

    /// Left-biased fallback: `fa` if it holds a value, otherwise `other`.
    #[inline]
    fn first<A>(fa: Applied<Self, A>, other: Applied<Self, A>) -> Applied<Self, A> {
        if Self::is_empty::<A>(&fa) { other } else { fa }
    }

    /// Right-biased fallback: `other` if it holds a value, otherwise `fa`.
    #[inline]
    fn last<A>(fa: Applied<Self, A>, other: Applied<Self, A>) -> Applied<Self, A> {
        if Self::is_empty::<A>(&other) { fa } else { other }
    }
}
