#![cfg(feature = "control")]
//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).and_then(f) == f(a)`
//! - **Right Identity**: `m.and_then(pure) == m`
//! - **Associativity**: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
//!
//! Also checks that `and_then2..4` agree with `map2..4` followed by `join`.

use monadic::control::{Maybe, MaybeFamily, Result, ResultFamily};
use monadic::typeclass::{Applicative, Container};
use proptest::prelude::*;

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn any_result() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{1,8}").prop_map(Result::from)
}

fn even_half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
}

fn positive_decrement(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::Just(n - 1) } else { Maybe::Nothing }
}

fn checked_divide(numerator: i32, denominator: i32) -> Result<i32, String> {
    numerator
        .checked_div(denominator)
        .map_or_else(|| Result::Err(format!("{numerator} / {denominator}")), Result::Ok)
}

fn checked_negate(n: i32) -> Result<i32, String> {
    n.checked_neg()
        .map_or_else(|| Result::Err(format!("-{n}")), Result::Ok)
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(MaybeFamily::pure(value).and_then(even_half), even_half(value));
    }

    #[test]
    fn prop_maybe_right_identity(monad in any_maybe()) {
        prop_assert_eq!(monad.and_then(MaybeFamily::pure), monad);
    }

    #[test]
    fn prop_maybe_associativity(monad in any_maybe()) {
        let left = monad.and_then(even_half).and_then(positive_decrement);
        let right = monad.and_then(|x| even_half(x).and_then(positive_decrement));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_and_then2_is_map2_then_join(first in any_maybe(), second in any_maybe()) {
        let combine = |a: i32, b: i32| even_half(a.wrapping_add(b));
        let bound = first.and_then2(second, combine);
        let joined = first.map2(second, combine).join();
        prop_assert_eq!(bound, joined);
    }
}

// =============================================================================
// Result<A, E> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        let left: Result<i32, String> = ResultFamily::pure(value).and_then(checked_negate);
        prop_assert_eq!(left, checked_negate(value));
    }

    #[test]
    fn prop_result_right_identity(monad in any_result()) {
        prop_assert_eq!(monad.clone().and_then(ResultFamily::pure), monad);
    }

    #[test]
    fn prop_result_associativity(monad in any_result(), divisor in -3_i32..=3) {
        let divide = |n: i32| checked_divide(n, divisor);
        let left = monad.clone().and_then(divide).and_then(checked_negate);
        let right = monad.and_then(|x| divide(x).and_then(checked_negate));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_and_then3_is_map3_then_join(
        first in any_result(),
        second in any_result(),
        third in any_result(),
    ) {
        let combine = |a: i32, b: i32, c: i32| checked_divide(a.wrapping_add(b), c);
        let bound = first.clone().and_then3(second.clone(), third.clone(), combine);
        let joined = first.map3(second, third, combine).join();
        prop_assert_eq!(bound, joined);
    }

    #[test]
    fn prop_result_m_compose_is_chained_and_then(monad in any_result()) {
        let composed = monad.clone().m_compose(checked_negate, |n| checked_divide(100, n));
        let chained = monad.and_then(checked_negate).and_then(|n| checked_divide(100, n));
        prop_assert_eq!(composed, chained);
    }
}
