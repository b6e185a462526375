//! Error types for the control module.

use std::fmt;

/// Error returned when a `Maybe` is asked for a value it does not hold.
///
/// Produced by [`Maybe::ok_or_nothing`](super::Maybe::ok_or_nothing) so that
/// absence can travel through `?` in functions returning `std::result::Result`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Maybe, NothingError};
///
/// let missing: Maybe<i32> = Maybe::Nothing;
/// let error = missing.ok_or_nothing().unwrap_err();
/// assert_eq!(error, NothingError);
/// assert_eq!(error.to_string(), "value was `Nothing`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NothingError;

impl fmt::Display for NothingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("value was `Nothing`")
    }
}

impl std::error::Error for NothingError {}
