//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<T>` type, which represents a value that is
//! either present (`Just(T)`) or absent (`Nothing`). It implements the whole
//! container protocol through [`MaybeFamily`].
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Container;
//!
//! let two = Maybe::Just(2);
//! let three = Maybe::Just(3);
//! assert_eq!(two.map2(three, |x, y| x + y), Maybe::Just(5));
//!
//! // Absence propagates
//! let missing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(two.map2(missing, |x, y| x + y), Maybe::Nothing);
//!
//! // Filtering
//! assert_eq!(Maybe::Just(4).filter(|n| n % 2 == 0), Maybe::Just(4));
//! assert_eq!(Maybe::Just(3).filter(|n| n % 2 == 0), Maybe::Nothing);
//! ```

use std::fmt;

use super::error::NothingError;
use crate::typeclass::{Applicative, Fallible, Family, Functor, Monad, TypeConstructor};

/// An optional value: either `Just(value)` or `Nothing`.
///
/// Nesting is kept as is (`Just(Just(2))`); use `join` to flatten it.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(42);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert!(present.is_just());
/// assert!(absent.is_nothing());
/// assert_ne!(present, absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

/// The type-level name of `Maybe<_>`.
///
/// Implements [`Functor`], [`Applicative`], [`Monad`] and [`Fallible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeFamily {}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Just`.
    ///
    /// Inherent shorthand for [`Applicative::pure`] on [`MaybeFamily`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::pure(2), Maybe::Just(2));
    /// ```
    #[inline]
    #[must_use]
    pub const fn pure(value: T) -> Self {
        Self::Just(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Just(1).is_nothing());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Maybe-only Operations
    // =========================================================================

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// `Just(v)` becomes `Nothing` when the predicate is false; `Nothing`
    /// stays `Nothing` and the predicate is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(10).filter(|n| *n > 5), Maybe::Just(10));
    /// assert_eq!(Maybe::Just(1).filter(|n| *n > 5), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Borrows the held value, producing a `Maybe<&T>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the standard library's `Option`.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the held value, or [`NothingError`] so the absence can be
    /// propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`NothingError`] if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, NothingError};
    ///
    /// fn total(a: Maybe<i32>, b: Maybe<i32>) -> Result<i32, NothingError> {
    ///     Ok(a.ok_or_nothing()? + b.ok_or_nothing()?)
    /// }
    ///
    /// assert_eq!(total(Maybe::Just(1), Maybe::Just(2)), Ok(3));
    /// assert_eq!(total(Maybe::Just(1), Maybe::Nothing), Err(NothingError));
    /// ```
    #[inline]
    pub fn ok_or_nothing(self) -> std::result::Result<T, NothingError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(NothingError),
        }
    }
}

// =============================================================================
// Protocol Implementation
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type Family = MaybeFamily;

    #[inline]
    fn into_applied(self) -> Self {
        self
    }

    #[inline]
    fn as_applied(&self) -> &Self {
        self
    }
}

impl Family for MaybeFamily {
    type Applied<A> = Maybe<A>;
}

impl Functor for MaybeFamily {
    #[inline]
    fn map<A, B, F>(fa: Maybe<A>, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match fa {
            Maybe::Just(value) => Maybe::Just(function(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl Applicative for MaybeFamily {
    #[inline]
    fn pure<A>(value: A) -> Maybe<A> {
        Maybe::Just(value)
    }

    #[inline]
    fn apply<A, B, F>(fa: Maybe<A>, ff: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (fa, ff) {
            (Maybe::Just(value), Maybe::Just(function)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl Monad for MaybeFamily {
    #[inline]
    fn and_then<A, B, F>(fa: Maybe<A>, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match fa {
            Maybe::Just(value) => function(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn join<A>(ffa: Maybe<Maybe<A>>) -> Maybe<A> {
        match ffa {
            Maybe::Just(inner) => inner,
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl Fallible for MaybeFamily {
    #[inline]
    fn is_empty<A>(fa: &Maybe<A>) -> bool {
        fa.is_nothing()
    }

    #[inline]
    fn with_default<A>(fa: Maybe<A>, default: A) -> A {
        match fa {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }
}

// =============================================================================
// Default
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `Nothing`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Debug / Display Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Just(v)`, `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
