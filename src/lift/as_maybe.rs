//! Lifting functions that may return no value into `Maybe`.

use crate::control::Maybe;

/// Lifts a function returning `Option<T>` into one returning `Maybe<T>`.
///
/// `None` becomes `Nothing` and `Some(v)` becomes `Just(v)`. Since `None` is
/// not a value of `T`, no legitimate result can be mistaken for absence.
///
/// Functions of several arguments take them as a tuple, or capture them.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use monadic::control::Maybe;
/// use monadic::lift::as_maybe;
/// use monadic::typeclass::Container;
///
/// let scores = HashMap::from([("a", 12), ("b", 15)]);
/// let safe_get = as_maybe(|key: &str| scores.get(key).copied());
///
/// assert_eq!(safe_get("a"), Maybe::Just(12));
/// assert_eq!(safe_get("c"), Maybe::Nothing);
/// assert_eq!(Maybe::Just("b").and_then(&safe_get), Maybe::Just(15));
/// ```
#[must_use]
pub fn as_maybe<A, T, F>(function: F) -> impl Fn(A) -> Maybe<T>
where
    F: Fn(A) -> Option<T>,
{
    move |argument| match function(argument) {
        Some(value) => Maybe::Just(value),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!("lifted function returned no value");
            Maybe::Nothing
        }
    }
}

/// Lifts a function that signals absence with a sentinel value.
///
/// A return value equal to `sentinel` becomes `Nothing`; anything else
/// becomes `Just`. A legitimate result that happens to equal the sentinel is
/// indistinguishable from absence, so pick a sentinel outside the function's
/// range, or prefer [`as_maybe`] with an `Option`-returning function.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
/// use monadic::lift::as_maybe_sentinel;
///
/// let position = as_maybe_sentinel(-1, |needle: char| {
///     "monad".chars().position(|c| c == needle).map_or(-1, |index| index as i64)
/// });
///
/// assert_eq!(position('n'), Maybe::Just(2));
/// assert_eq!(position('x'), Maybe::Nothing);
/// ```
#[must_use]
pub fn as_maybe_sentinel<A, T, F>(sentinel: T, function: F) -> impl Fn(A) -> Maybe<T>
where
    F: Fn(A) -> T,
    T: PartialEq,
{
    move |argument| {
        let value = function(argument);
        if value == sentinel {
            #[cfg(feature = "tracing")]
            tracing::trace!("lifted function returned its sentinel");
            Maybe::Nothing
        } else {
            Maybe::Just(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Container;
    use rstest::rstest;
    use std::collections::HashMap;

    fn scores() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 12), ("b", 15)])
    }

    #[rstest]
    fn lifts_lookup_with_tuple_argument() {
        let table = scores();
        let safe_get = as_maybe(|(table, key): (&HashMap<&str, i32>, &str)| table.get(key).copied());
        assert_eq!(safe_get((&table, "a")), Maybe::Just(12));
        assert_eq!(safe_get((&table, "c")), Maybe::Nothing);
    }

    #[rstest]
    fn lifted_function_is_reusable() {
        let table = scores();
        let safe_get = as_maybe(|key: &str| table.get(key).copied());
        let keys = ["a", "c", "b"];
        let found: Vec<Maybe<i32>> = keys.into_iter().map(&safe_get).collect();
        assert_eq!(found, vec![Maybe::Just(12), Maybe::Nothing, Maybe::Just(15)]);
    }

    #[rstest]
    fn option_payload_is_not_flattened() {
        let nested = as_maybe(|value: Option<i32>| Some(value));
        assert_eq!(nested(None), Maybe::Just(None));
    }

    #[rstest]
    #[case(0, Maybe::Nothing)]
    #[case(4, Maybe::Just(4))]
    fn sentinel_becomes_nothing(#[case] input: i32, #[case] expected: Maybe<i32>) {
        let identity = as_maybe_sentinel(0, |n: i32| n);
        assert_eq!(identity(input), expected);
    }

    #[rstest]
    fn sentinel_lifted_function_composes() {
        let halve = as_maybe_sentinel(-1, |n: i32| if n % 2 == 0 { n / 2 } else { -1 });
        assert_eq!(Maybe::Just(8).and_then(&halve).and_then(&halve), Maybe::Just(2));
        assert_eq!(Maybe::Just(6).and_then(&halve).and_then(&halve), Maybe::Nothing);
    }
}
