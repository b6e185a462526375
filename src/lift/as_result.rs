//! Lifting fallible functions into `Result`.

use super::intercept::{Classify, Intercept};
use crate::control::Result;

/// Lifts a fallible function, capturing the failures named by `intercept`.
///
/// The lifted function returns `std::result::Result<Result<T, E>, E>`:
///
/// - `Ok(v)` becomes `Ok(Result::Ok(v))`
/// - an error whose [`Classify::kind`] is in `intercept` becomes
///   `Ok(Result::Err(error))`
/// - any other error comes back as the outer `Err(error)`, so it can be
///   propagated with `?`
///
/// Functions of several arguments take them as a tuple, or capture them.
///
/// # Examples
///
/// ```rust
/// use std::io;
/// use monadic::control::Maybe;
/// use monadic::lift::{as_result, Intercept};
///
/// fn open(name: &str) -> io::Result<String> {
///     match name {
///         "config" => Ok("contents".to_string()),
///         "secret" => Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
///         _ => Err(io::Error::new(io::ErrorKind::NotFound, "missing")),
///     }
/// }
///
/// fn run() -> io::Result<()> {
///     let try_open = as_result(Intercept::only([io::ErrorKind::NotFound]), open);
///
///     assert_eq!(try_open("config")?.ok(), Maybe::Just("contents".to_string()));
///     assert!(try_open("other")?.is_err());
///     assert!(try_open("secret").is_err());
///     Ok(())
/// }
///
/// run().unwrap();
/// ```
#[must_use]
pub fn as_result<A, T, E, F>(
    intercept: Intercept<E::Kind>,
    function: F,
) -> impl Fn(A) -> std::result::Result<Result<T, E>, E>
where
    F: Fn(A) -> std::result::Result<T, E>,
    E: Classify,
{
    move |argument| match function(argument) {
        Ok(value) => Ok(Result::Ok(value)),
        Err(error) if intercept.captures(&error) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(kind = ?error.kind(), "captured error from lifted function");
            Ok(Result::Err(error))
        }
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(kind = ?error.kind(), "propagating error outside the intercept set");
            Err(error)
        }
    }
}
