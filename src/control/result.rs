//! Result type - a success or a recorded failure.
//!
//! This module provides the `Result<S, E>` type, which is either `Ok(S)` or
//! `Err(E)`. It mirrors [`Maybe`](super::Maybe) exactly, except that the empty
//! state carries an error payload. It implements the whole container protocol
//! through [`ResultFamily`].
//!
//! The type shares its name with `std::result::Result`, so it stays out of
//! `monadic::prelude` and its variants are always written qualified
//! (`Result::Ok`). Glob-importing the prelude leaves `Result`, `Ok` and `Err`
//! naming the standard library's.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Result;
//! use monadic::typeclass::Container;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct ZeroDivision;
//!
//! let error: Result<i32, ZeroDivision> = Result::Err(ZeroDivision);
//! assert_eq!(error.map2(Result::Ok(3), |a, b| a + b), Result::Err(ZeroDivision));
//!
//! let two: Result<i32, ZeroDivision> = Result::Ok(2);
//! assert_eq!(two.map2(Result::Ok(3), |a, b| a + b), Result::Ok(5));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::maybe::Maybe;
use crate::typeclass::{Applicative, Fallible, Family, Functor, Monad, TypeConstructor};

/// A success value (`Ok`) or an error value (`Err`).
///
/// # Type Parameters
///
/// * `S` - The type of the success value
/// * `E` - The type of the error value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Result;
///
/// let success: Result<i32, String> = Result::Ok(42);
/// let failure: Result<i32, String> = Result::Err("error".to_string());
///
/// assert!(success.is_ok());
/// assert!(failure.is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<S, E> {
    /// A success value.
    Ok(S),
    /// An error value.
    Err(E),
}

/// The type-level name of `Result<_, E>`.
///
/// Implements [`Functor`], [`Applicative`], [`Monad`] and [`Fallible`].
pub struct ResultFamily<E>(PhantomData<fn() -> E>);

impl<E> fmt::Debug for ResultFamily<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ResultFamily")
    }
}

impl<E> Clone for ResultFamily<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultFamily<E> {}

impl<S, E> Result<S, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Ok`.
    ///
    /// Inherent shorthand for [`Applicative::pure`] on [`ResultFamily`].
    #[inline]
    #[must_use]
    pub const fn pure(value: S) -> Self {
        Self::Ok(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Result;
    ///
    /// let failure: Result<i32, &str> = Result::Err("boom");
    /// assert!(failure.is_err());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Borrows both payloads, producing a `Result<&S, &E>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Result<&S, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Keeps the success value as a `Maybe`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, Result};
    ///
    /// let success: Result<i32, &str> = Result::Ok(1);
    /// assert_eq!(success.ok(), Maybe::Just(1));
    ///
    /// let failure: Result<i32, &str> = Result::Err("boom");
    /// assert_eq!(failure.ok(), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn ok(self) -> Maybe<S> {
        match self {
            Self::Ok(value) => Maybe::Just(value),
            Self::Err(_) => Maybe::Nothing,
        }
    }

    /// Keeps the error value as a `Maybe`, discarding any success.
    #[inline]
    #[must_use]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::Nothing,
            Self::Err(error) => Maybe::Just(error),
        }
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_std(self) -> std::result::Result<S, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

// =============================================================================
// Protocol Implementation
// =============================================================================

impl<A, E> TypeConstructor for Result<A, E> {
    type Inner = A;
    type Family = ResultFamily<E>;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }

    #[inline]
    fn as_applied(&self) -> &Self {
        self
    }
}

impl<E> Family for ResultFamily<E> {
    type Applied<A> = Result<A, E>;
}

impl<E> Functor for ResultFamily<E> {
    #[inline]
    fn map<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match fa {
            Result::Ok(value) => Result::Ok(function(value)),
            Result::Err(error) => Result::Err(error),
        }
    }
}

impl<E> Applicative for ResultFamily<E> {
    #[inline]
    fn pure<A>(value: A) -> Result<A, E> {
        Result::Ok(value)
    }

    /// The function side's error wins when both sides failed.
    #[inline]
    fn apply<A, B, F>(fa: Result<A, E>, ff: Result<F, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match (fa, ff) {
            (Result::Ok(value), Result::Ok(function)) => Result::Ok(function(value)),
            (_, Result::Err(error)) | (Result::Err(error), Result::Ok(_)) => Result::Err(error),
        }
    }
}

impl<E> Monad for ResultFamily<E> {
    #[inline]
    fn and_then<A, B, F>(fa: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        match fa {
            Result::Ok(value) => function(value),
            Result::Err(error) => Result::Err(error),
        }
    }

    #[inline]
    fn join<A>(ffa: Result<Result<A, E>, E>) -> Result<A, E> {
        match ffa {
            Result::Ok(inner) => inner,
            Result::Err(error) => Result::Err(error),
        }
    }
}

impl<E> Fallible for ResultFamily<E> {
    #[inline]
    fn is_empty<A>(fa: &Result<A, E>) -> bool {
        fa.is_err()
    }

    #[inline]
    fn with_default<A>(fa: Result<A, E>, default: A) -> A {
        match fa {
            Result::Ok(value) => value,
            Result::Err(_) => default,
        }
    }
}

// =============================================================================
// Debug / Display Implementation
// =============================================================================

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<S, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for Result<S, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<S, E> From<std::result::Result<S, E>> for Result<S, E> {
    /// `Ok(v)` becomes `Result::Ok(v)`, `Err(e)` becomes `Result::Err(e)`.
    #[inline]
    fn from(result: std::result::Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<S, E> From<Result<S, E>> for std::result::Result<S, E> {
    #[inline]
    fn from(result: Result<S, E>) -> Self {
        result.into_std()
    }
}

static_assertions::assert_impl_all!(Result<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Result<i32, &'static str>: Copy);
static_assertions::assert_impl_all!(ResultFamily<std::rc::Rc<i32>>: fmt::Debug, Copy, Send, Sync);
