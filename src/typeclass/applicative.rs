//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the container (`pure`)
//! - Apply a function held in one container to a value held in another (`apply`)
//! - Combine several containers using an n-ary function (`map2`, `map3`, `map4`)
//!
//! `map2`..`map4` are written once here, in terms of `map` and `apply`, and are
//! shared by every container.
//!
//! # Argument order of `apply`
//!
//! `apply` is called with the *value* container first and the *function*
//! container second, so that `map2` reads as
//! `other.apply(self.map(|a| move |b| f(a, b)))`. When both sides are empty,
//! the function side's empty state is the one returned. For `Result` this means
//! `map2`..`map4` surface the left-most `Err` among their arguments.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! apply(v, pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! apply(pure(x), pure(f)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeFamily};
//! use monadic::typeclass::Applicative;
//!
//! let x: Maybe<i32> = MaybeFamily::pure(42);
//! assert_eq!(x, Maybe::Just(42));
//!
//! let sum = MaybeFamily::map2(Maybe::Just(1), Maybe::Just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

use super::functor::Functor;
use super::higher::Applied;

/// A type class for containers that support lifting values and combining contexts.
///
/// Implementors provide `pure` and `apply`; everything else has a default.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// apply(v, pure(|x| x)) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// apply(pure(x), pure(f)) == pure(f(x))
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the present/success variant.
    ///
    /// Callable without an instance, so generic code can build containers
    /// from nothing but the family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Result, ResultFamily};
    /// use monadic::typeclass::Applicative;
    ///
    /// let y: Result<String, ()> = ResultFamily::pure("hello".to_string());
    /// assert_eq!(y, Result::Ok("hello".to_string()));
    /// ```
    fn pure<A>(value: A) -> Applied<Self, A>;

    /// Applies the function held by `ff` to the value held by `fa`.
    ///
    /// If either side is empty the result is empty. If both are, the empty
    /// state of `ff` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, MaybeFamily};
    /// use monadic::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x + 1);
    /// assert_eq!(MaybeFamily::apply(Maybe::Just(5), function), Maybe::Just(6));
    /// ```
    fn apply<A, B, F>(fa: Applied<Self, A>, ff: Applied<Self, F>) -> Applied<Self, B>
    where
        F: FnOnce(A) -> B;

    /// Combines two containers using a binary function.
    ///
    /// The function runs only when both containers hold a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Maybe, MaybeFamily};
    /// use monadic::typeclass::Applicative;
    ///
    /// let sum = MaybeFamily::map2(Maybe::Just(2), Maybe::Just(3), |x, y| x + y);
    /// assert_eq!(sum, Maybe::Just(5));
    ///
    /// let sum = MaybeFamily::map2(Maybe::Just(2), Maybe::<i32>::Nothing, |x, y| x + y);
    /// assert_eq!(sum, Maybe::Nothing);
    /// ```
    #[inline]
    fn map2<A, B, C, F>(fa: Applied<Self, A>, fb: Applied<Self, B>, function: F) -> Applied<Self, C>
    where
        F: FnOnce(A, B) -> C,
    {
        let partial = Self::map::<A, _, _>(fa, move |a| move |b| function(a, b));
        Self::apply::<B, C, _>(fb, partial)
    }

    /// Combines three containers using a ternary function.
    #[inline]
    fn map3<A, B, C, D, F>(
        fa: Applied<Self, A>,
        fb: Applied<Self, B>,
        fc: Applied<Self, C>,
        function: F,
    ) -> Applied<Self, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        let partial = Self::map2::<A, B, _, _>(fa, fb, move |a, b| move |c| function(a, b, c));
        Self::apply::<C, D, _>(fc, partial)
    }

    /// Combines four containers using a quaternary function.
    #[inline]
    fn map4<A, B, C, D, E, F>(
        fa: Applied<Self, A>,
        fb: Applied<Self, B>,
        fc: Applied<Self, C>,
        fd: Applied<Self, D>,
        function: F,
    ) -> Applied<Self, E>
    where
        F: FnOnce(A, B, C, D) -> E,
    {
        let partial = Self::map3::<A, B, C, _, _>(fa, fb, fc, move |a, b, c| {
            move |d| function(a, b, c, d)
        });
        Self::apply::<D, E, _>(fd, partial)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Maybe, MaybeFamily, Result, ResultFamily};
    use rstest::rstest;

    fn never_called<T>(_: T, _: T) -> T {
        panic!("combining function must not be called")
    }

    // =========================================================================
    // Maybe Tests
    // =========================================================================

    #[rstest]
    fn maybe_pure_creates_just() {
        let result: Maybe<i32> = MaybeFamily::pure(42);
        assert_eq!(result, Maybe::Just(42));
    }

    #[rstest]
    fn maybe_apply_with_function() {
        let function: Maybe<fn(i32) -> String> = Maybe::Just(|x| x.to_string());
        assert_eq!(
            MaybeFamily::apply(Maybe::Just(2), function),
            Maybe::Just("2".to_string())
        );
    }

    #[rstest]
    fn maybe_apply_with_nothing_function() {
        let function: Maybe<fn(i32) -> String> = Maybe::Nothing;
        assert_eq!(MaybeFamily::apply(Maybe::Just(2), function), Maybe::Nothing);
    }

    #[rstest]
    #[case(Maybe::Just(2), Maybe::Just(3), Maybe::Just(5))]
    #[case(Maybe::Just(2), Maybe::Nothing, Maybe::Nothing)]
    #[case(Maybe::Nothing, Maybe::Just(3), Maybe::Nothing)]
    #[case(Maybe::Nothing, Maybe::Nothing, Maybe::Nothing)]
    fn maybe_map2(
        #[case] first: Maybe<i32>,
        #[case] second: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(MaybeFamily::map2(first, second, |x, y| x + y), expected);
    }

    #[rstest]
    fn maybe_map3_and_map4_all_just() {
        let three = MaybeFamily::map3(Maybe::Just(2), Maybe::Just(3), Maybe::Just(5), |x, y, z| {
            x + y + z
        });
        assert_eq!(three, Maybe::Just(10));

        let four = MaybeFamily::map4(
            Maybe::Just(2),
            Maybe::Just(3),
            Maybe::Just(5),
            Maybe::Just(10),
            |x, y, z, w| x + y + z + w,
        );
        assert_eq!(four, Maybe::Just(20));
    }

    #[rstest]
    fn maybe_map2_short_circuits_without_calling_function() {
        let result = MaybeFamily::map2(Maybe::Just(2), Maybe::Nothing, never_called);
        assert_eq!(result, Maybe::Nothing);
    }

    // =========================================================================
    // Result Tests
    // =========================================================================

    #[rstest]
    fn result_apply_function_side_error_wins() {
        let value: Result<i32, &str> = Result::Err("value side");
        let function: Result<fn(i32) -> i32, &str> = Result::Err("function side");
        assert_eq!(ResultFamily::apply(value, function), Result::Err("function side"));
    }

    #[rstest]
    fn result_apply_value_side_error_surfaces_alone() {
        let value: Result<i32, &str> = Result::Err("value side");
        let function: Result<fn(i32) -> i32, &str> = Result::Ok(|x| x + 1);
        assert_eq!(ResultFamily::apply(value, function), Result::Err("value side"));
    }

    #[rstest]
    fn result_map2_surfaces_left_most_error() {
        let first: Result<i32, &str> = Result::Err("first");
        let second: Result<i32, &str> = Result::Err("second");
        assert_eq!(ResultFamily::map2(first, second, never_called), Result::Err("first"));
    }

    #[rstest]
    fn result_map4_surfaces_left_most_error() {
        let result = ResultFamily::map4(
            Result::<i32, &str>::Ok(1),
            Result::Err("second"),
            Result::Ok(3),
            Result::Err("fourth"),
            |_: i32, _: i32, _: i32, _: i32| -> i32 { panic!("combining function must not be called") },
        );
        assert_eq!(result, Result::Err("second"));
    }
}
