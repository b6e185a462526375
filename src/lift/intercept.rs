//! Failure taxonomy for [`as_result`](super::as_result).
//!
//! An [`Intercept`] is the explicit, enumerable set of failure kinds that a
//! lifted function turns into `Result::Err`. Every other failure keeps
//! propagating to the caller. Errors expose their kind through [`Classify`].
//!
//! # Examples
//!
//! ```rust
//! use std::io;
//! use monadic::lift::Intercept;
//!
//! let intercept = Intercept::only([io::ErrorKind::NotFound])
//!     .with(io::ErrorKind::PermissionDenied);
//!
//! assert!(intercept.contains(&io::ErrorKind::NotFound));
//! assert!(intercept.contains(&io::ErrorKind::PermissionDenied));
//! assert!(!intercept.contains(&io::ErrorKind::TimedOut));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::io;
use std::num::{IntErrorKind, ParseIntError};

use smallvec::SmallVec;

/// Number of kinds stored inline before spilling to the heap.
const INLINE_KINDS: usize = 4;

/// An error type that can report which kind of failure it is.
///
/// The kind is what an [`Intercept`] matches against.
///
/// # Examples
///
/// ```rust
/// use monadic::lift::Classify;
///
/// #[derive(Debug)]
/// enum LookupError {
///     Missing(String),
///     Corrupt,
/// }
///
/// #[derive(Debug, PartialEq)]
/// enum LookupErrorKind {
///     Missing,
///     Corrupt,
/// }
///
/// impl Classify for LookupError {
///     type Kind = LookupErrorKind;
///
///     fn kind(&self) -> LookupErrorKind {
///         match self {
///             Self::Missing(_) => LookupErrorKind::Missing,
///             Self::Corrupt => LookupErrorKind::Corrupt,
///         }
///     }
/// }
///
/// assert_eq!(LookupError::Missing("a".into()).kind(), LookupErrorKind::Missing);
/// ```
pub trait Classify {
    /// The failure category.
    type Kind: PartialEq + fmt::Debug;

    /// Returns the category of this error.
    fn kind(&self) -> Self::Kind;
}

impl Classify for io::Error {
    type Kind = io::ErrorKind;

    #[inline]
    fn kind(&self) -> io::ErrorKind {
        Self::kind(self)
    }
}

impl Classify for ParseIntError {
    type Kind = IntErrorKind;

    #[inline]
    fn kind(&self) -> IntErrorKind {
        *Self::kind(self)
    }
}

impl Classify for Infallible {
    type Kind = Self;

    fn kind(&self) -> Self {
        *self
    }
}

#[derive(Clone, PartialEq, Eq)]
enum InterceptInner<K> {
    All,
    Only(SmallVec<[K; INLINE_KINDS]>),
}

/// The set of failure kinds that a lifted function captures.
///
/// Kinds are kept without duplicates. [`Intercept::all`] matches every kind
/// and [`Intercept::none`] (the default) matches nothing.
#[derive(Clone, PartialEq, Eq)]
pub struct Intercept<K> {
    inner: InterceptInner<K>,
}

impl<K> Intercept<K> {
    /// Captures every failure kind.
    #[inline]
    #[must_use]
    pub const fn all() -> Self {
        Self {
            inner: InterceptInner::All,
        }
    }

    /// Captures nothing; every failure propagates.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self {
            inner: InterceptInner::Only(SmallVec::new()),
        }
    }

    /// Returns `true` if this intercept matches every kind.
    #[inline]
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self.inner, InterceptInner::All)
    }

    /// Returns the enumerated kinds, or `None` for [`Intercept::all`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::IntErrorKind;
    /// use monadic::lift::Intercept;
    ///
    /// let intercept = Intercept::only([IntErrorKind::Empty, IntErrorKind::Empty]);
    /// assert_eq!(intercept.kinds(), Some(&[IntErrorKind::Empty][..]));
    /// assert_eq!(Intercept::<IntErrorKind>::all().kinds(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn kinds(&self) -> Option<&[K]> {
        match &self.inner {
            InterceptInner::All => None,
            InterceptInner::Only(kinds) => Some(kinds.as_slice()),
        }
    }
}

impl<K: PartialEq> Intercept<K> {
    /// Captures exactly the given kinds.
    #[must_use]
    pub fn only<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        kinds.into_iter().fold(Self::none(), Self::with)
    }

    /// Adds one more kind. Adding to [`Intercept::all`] is a no-op.
    #[must_use]
    pub fn with(self, kind: K) -> Self {
        match self.inner {
            InterceptInner::All => Self::all(),
            InterceptInner::Only(mut kinds) => {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
                Self {
                    inner: InterceptInner::Only(kinds),
                }
            }
        }
    }

    /// Returns `true` if `kind` is captured.
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: &K) -> bool {
        match &self.inner {
            InterceptInner::All => true,
            InterceptInner::Only(kinds) => kinds.contains(kind),
        }
    }

    /// Returns `true` if `error` is captured.
    ///
    /// The error is not classified at all when every kind is captured.
    #[inline]
    #[must_use]
    pub fn captures<E>(&self, error: &E) -> bool
    where
        E: Classify<Kind = K>,
    {
        self.is_all() || self.contains(&error.kind())
    }
}

impl<K> Default for Intercept<K> {
    fn default() -> Self {
        Self::none()
    }
}

impl<K: PartialEq> FromIterator<K> for Intercept<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::only(iter)
    }
}

impl<K: fmt::Debug> fmt::Debug for Intercept<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            InterceptInner::All => formatter.write_str("Intercept::All"),
            InterceptInner::Only(kinds) => formatter
                .debug_tuple("Intercept::Only")
                .field(&kinds.as_slice())
                .finish(),
        }
    }
}
