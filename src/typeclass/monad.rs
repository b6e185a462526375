//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! Implementors provide `and_then` (bind) and `join` (flatten one level);
//! `and_then2`..`and_then4` and `m_compose` are derived here once.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the function:
//!
//! ```text
//! and_then(pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! and_then(m, pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! and_then(and_then(m, f), g) == and_then(m, |x| and_then(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeFamily};
//! use monadic::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0).into()
//! }
//!
//! let result = MaybeFamily::m_compose(Maybe::Just("42"), parse_positive, |n| Maybe::Just(n * 2));
//! assert_eq!(result, Maybe::Just(84));
//! ```

use super::applicative::Applicative;
use super::higher::Applied;

/// A type class for containers that support sequencing of computations.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// and_then(pure(a), f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// and_then(m, pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// and_then(and_then(m, f), g) == and_then(m, |x| and_then(f(x), g))
/// ```
pub trait Monad: Applicative {
    /// Applies a container-producing function to the payload.
    ///
    /// The function's result is returned as is, with no extra wrapping. On
    /// the empty state the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, MaybeFamily};
    /// use monadic::typeclass::Monad;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing };
    /// assert_eq!(MaybeFamily::and_then(Maybe::Just(10), halve), Maybe::Just(5));
    /// assert_eq!(MaybeFamily::and_then(Maybe::Just(5), halve), Maybe::Nothing);
    /// ```
    fn and_then<A, B, F>(fa: Applied<Self, A>, function: F) -> Applied<Self, B>
    where
        F: FnOnce(A) -> Applied<Self, B>;

    /// Flattens one level of nesting.
    ///
    /// An empty outer layer absorbs whatever the inner layer would have been.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Result, ResultFamily};
    /// use monadic::typeclass::Monad;
    ///
    /// let nested: Result<Result<i32, &str>, &str> = Result::Ok(Result::Ok(2));
    /// assert_eq!(ResultFamily::join(nested), Result::Ok(2));
    ///
    /// let nested: Result<Result<i32, &str>, &str> = Result::Ok(Result::Err("inner"));
    /// assert_eq!(ResultFamily::join(nested), Result::Err("inner"));
    /// ```
    fn join<A>(ffa: Applied<Self, Applied<Self, A>>) -> Applied<Self, A>;

    /// Monadic lift of a binary container-producing function.
    ///
    /// Equivalent to `join(map2(fa, fb, function))`.
    #[inline]
    fn and_then2<A, B, C, F>(
        fa: Applied<Self, A>,
        fb: Applied<Self, B>,
        function: F,
    ) -> Applied<Self, C>
    where
        F: FnOnce(A, B) -> Applied<Self, C>,
    {
        Self::join::<C>(Self::map2::<A, B, Applied<Self, C>, F>(fa, fb, function))
    }

    /// Monadic lift of a ternary container-producing function.
    #[inline]
    fn and_then3<A, B, C, D, F>(
        fa: Applied<Self, A>,
        fb: Applied<Self, B>,
        fc: Applied<Self, C>,
        function: F,
    ) -> Applied<Self, D>
    where
        F: FnOnce(A, B, C) -> Applied<Self, D>,
    {
        Self::join::<D>(Self::map3::<A, B, C, Applied<Self, D>, F>(
            fa, fb, fc, function,
        ))
    }

    /// Monadic lift of a quaternary container-producing function.
    #[inline]
    fn and_then4<A, B, C, D, E, F>(
        fa: Applied<Self, A>,
        fb: Applied<Self, B>,
        fc: Applied<Self, C>,
        fd: Applied<Self, D>,
        function: F,
    ) -> Applied<Self, E>
    where
        F: FnOnce(A, B, C, D) -> Applied<Self, E>,
    {
        Self::join::<E>(Self::map4::<A, B, C, D, Applied<Self, E>, F>(
            fa, fb, fc, fd, function,
        ))
    }

    /// Kleisli composition: binds `first`, then `second`.
    ///
    /// Stops at the first empty result; `second` is not called after an
    /// empty `first`.
    #[inline]
    fn m_compose<A, B, C, F, G>(fa: Applied<Self, A>, first: F, second: G) -> Applied<Self, C>
    where
        F: FnOnce(A) -> Applied<Self, B>,
        G: FnOnce(B) -> Applied<Self, C>,
    {
        Self::and_then::<B, C, G>(Self::and_then::<A, B, F>(fa, first), second)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Maybe, MaybeFamily, Result, ResultFamily};
    use rstest::rstest;

    fn halve(n: i32) -> Maybe<i32> {
        if n % 2 == 0 {
            Maybe::Just(n / 2)
        } else {
            Maybe::Nothing
        }
    }

    fn checked_divide(numerator: i32, denominator: i32) -> Result<i32, &'static str> {
        if denominator == 0 {
            Result::Err("division by zero")
        } else {
            Result::Ok(numerator / denominator)
        }
    }

    // =========================================================================
    // Maybe Tests
    // =========================================================================

    #[rstest]
    #[case(Maybe::Just(10), Maybe::Just(5))]
    #[case(Maybe::Just(5), Maybe::Nothing)]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn maybe_and_then(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(MaybeFamily::and_then(input, halve), expected);
    }

    #[rstest]
    #[case(Maybe::Just(Maybe::Just(2)), Maybe::Just(2))]
    #[case(Maybe::Just(Maybe::Nothing), Maybe::Nothing)]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn maybe_join(#[case] nested: Maybe<Maybe<i32>>, #[case] expected: Maybe<i32>) {
        assert_eq!(MaybeFamily::join(nested), expected);
    }

    #[rstest]
    fn maybe_m_compose_stops_at_first_nothing() {
        let result = MaybeFamily::m_compose(Maybe::Just(3), halve, |_| -> Maybe<i32> {
            panic!("second step must not run")
        });
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn maybe_and_then3_joins_result() {
        let result = MaybeFamily::and_then3(Maybe::Just(4), Maybe::Just(6), Maybe::Just(2), |a, b, c| {
            halve(a + b + c)
        });
        assert_eq!(result, Maybe::Just(6));
    }

    // =========================================================================
    // Result Tests
    // =========================================================================

    #[rstest]
    fn result_and_then2_divides() {
        let result = ResultFamily::and_then2(Result::Ok(12), Result::Ok(4), checked_divide);
        assert_eq!(result, Result::Ok(3));
    }

    #[rstest]
    fn result_and_then2_surfaces_inner_error() {
        let result = ResultFamily::and_then2(Result::Ok(12), Result::Ok(0), checked_divide);
        assert_eq!(result, Result::Err("division by zero"));
    }

    #[rstest]
    #[case(Result::Ok(Result::Ok(2)), Result::Ok(2))]
    #[case(Result::Ok(Result::Err("inner")), Result::Err("inner"))]
    #[case(Result::Err("outer"), Result::Err("outer"))]
    fn result_join(
        #[case] nested: Result<Result<i32, &'static str>, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        assert_eq!(ResultFamily::join(nested), expected);
    }

    #[rstest]
    fn result_and_then4_reports_left_most_error() {
        let result = ResultFamily::and_then4(
            Result::Ok(1),
            Result::Err("second"),
            Result::Err("third"),
            Result::Ok(4),
            |a: i32, b: i32, c: i32, d: i32| checked_divide(a + b, c + d),
        );
        assert_eq!(result, Result::Err("second"));
    }
}
