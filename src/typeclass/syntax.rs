//! Method-call syntax for the protocol.
//!
//! The protocol traits live on container families, which keeps every derived
//! combinator written once. [`Container`] turns those associated functions
//! into methods on the containers themselves, for every container whose
//! family implements the whole protocol:
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Container;
//!
//! let two = Maybe::Just(2);
//! let three = Maybe::Just(3);
//! assert_eq!(two.map2(three, |x, y| x + y), Maybe::Just(5));
//! assert_eq!(two.map2(Maybe::Nothing, |x, y: i32| x + y), Maybe::Nothing);
//! ```

use super::applicative::Applicative;
use super::fallible::Fallible;
use super::functor::Functor;
use super::higher::{Applied, TypeConstructor};
use super::monad::Monad;

/// Methods shared by every container that implements the full protocol.
///
/// Each method delegates to the matching associated function of
/// [`Functor`], [`Applicative`], [`Monad`] or [`Fallible`]. See those traits
/// for the laws.
pub trait Container: TypeConstructor {
    /// See [`Functor::map`].
    fn map<B, F>(self, function: F) -> Applied<Self::Family, B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies the function held by `function` to the value held by `self`.
    ///
    /// See [`Applicative::apply`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Result;
    /// use monadic::typeclass::Container;
    ///
    /// let value: Result<i32, &str> = Result::Ok(2);
    /// let function: Result<fn(i32) -> String, &str> = Result::Ok(|n| n.to_string());
    /// assert_eq!(value.apply(function), Result::Ok("2".to_string()));
    /// ```
    fn apply<B, F>(self, function: Applied<Self::Family, F>) -> Applied<Self::Family, B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// See [`Applicative::map2`].
    fn map2<B, C, F>(self, other: Applied<Self::Family, B>, function: F) -> Applied<Self::Family, C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// See [`Applicative::map3`].
    fn map3<B, C, D, F>(
        self,
        second: Applied<Self::Family, B>,
        third: Applied<Self::Family, C>,
        function: F,
    ) -> Applied<Self::Family, D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// See [`Applicative::map4`].
    fn map4<B, C, D, E, F>(
        self,
        second: Applied<Self::Family, B>,
        third: Applied<Self::Family, C>,
        fourth: Applied<Self::Family, D>,
        function: F,
    ) -> Applied<Self::Family, E>
    where
        F: FnOnce(Self::Inner, B, C, D) -> E;

    /// See [`Monad::and_then`].
    fn and_then<B, F>(self, function: F) -> Applied<Self::Family, B>
    where
        F: FnOnce(Self::Inner) -> Applied<Self::Family, B>;

    /// Flattens one level of nesting. See [`Monad::join`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Container;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(2)).join(), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).join(), Maybe::Nothing);
    /// ```
    fn join<B>(self) -> Applied<Self::Family, B>
    where
        Self::Inner: TypeConstructor<Family = Self::Family, Inner = B>;

    /// See [`Monad::and_then2`].
    fn and_then2<B, C, F>(
        self,
        other: Applied<Self::Family, B>,
        function: F,
    ) -> Applied<Self::Family, C>
    where
        F: FnOnce(Self::Inner, B) -> Applied<Self::Family, C>;

    /// See [`Monad::and_then3`].
    fn and_then3<B, C, D, F>(
        self,
        second: Applied<Self::Family, B>,
        third: Applied<Self::Family, C>,
        function: F,
    ) -> Applied<Self::Family, D>
    where
        F: FnOnce(Self::Inner, B, C) -> Applied<Self::Family, D>;

    /// See [`Monad::and_then4`].
    fn and_then4<B, C, D, E, F>(
        self,
        second: Applied<Self::Family, B>,
        third: Applied<Self::Family, C>,
        fourth: Applied<Self::Family, D>,
        function: F,
    ) -> Applied<Self::Family, E>
    where
        F: FnOnce(Self::Inner, B, C, D) -> Applied<Self::Family, E>;

    /// See [`Monad::m_compose`].
    fn m_compose<B, C, F, G>(self, first: F, second: G) -> Applied<Self::Family, C>
    where
        F: FnOnce(Self::Inner) -> Applied<Self::Family, B>,
        G: FnOnce(B) -> Applied<Self::Family, C>;

    /// See [`Fallible::is_empty`].
    fn is_empty(&self) -> bool;

    /// See [`Fallible::with_default`].
    fn with_default(self, default: Self::Inner) -> Self::Inner;

    /// See [`Fallible::unwraps`].
    fn unwraps<B, F>(self, function: F, default: B) -> B
    where
        F: FnOnce(Self::Inner) -> B;

    /// See [`Fallible::first`].
    fn first(self, other: Applied<Self::Family, Self::Inner>) -> Applied<Self::Family, Self::Inner>;

    /// See [`Fallible::last`].
    fn last(self, other: Applied<Self::Family, Self::Inner>) -> Applied<Self::Family, Self::Inner>;
}

impl<M> Container for M
where
    M: TypeConstructor,
    M::Family: Monad + Fallible,
{
    #[inline]
    fn map<B, F>(self, function: F) -> Applied<M::Family, B>
    where
        F: FnOnce(M::Inner) -> B,
    {
        <M::Family as Functor>::map::<M::Inner, B, F>(self.into_applied(), function)
    }

    #[inline]
    fn apply<B, F>(self, function: Applied<M::Family, F>) -> Applied<M::Family, B>
    where
        F: FnOnce(M::Inner) -> B,
    {
        <M::Family as Applicative>::apply::<M::Inner, B, F>(self.into_applied(), function)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Applied<M::Family, B>, function: F) -> Applied<M::Family, C>
    where
        F: FnOnce(M::Inner, B) -> C,
    {
        <M::Family as Applicative>::map2::<M::Inner, B, C, F>(self.into_applied(), other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Applied<M::Family, B>,
        third: Applied<M::Family, C>,
        function: F,
    ) -> Applied<M::Family, D>
    where
        F: FnOnce(M::Inner, B, C) -> D,
    {
        <M::Family as Applicative>::map3::<M::Inner, B, C, D, F>(
            self.into_applied(),
            second,
            third,
            function,
        )
    }

    #[inline]
    fn map4<B, C, D, E, F>(
        self,
        second: Applied<M::Family, B>,
        third: Applied<M::Family, C>,
        fourth: Applied<M::Family, D>,
        function: F,
    ) -> Applied<M::Family, E>
    where
        F: FnOnce(M::Inner, B, C, D) -> E,
    {
        <M::Family as Applicative>::map4::<M::Inner, B, C, D, E, F>(
            self.into_applied(),
            second,
            third,
            fourth,
            function,
        )
    }

    #[inline]
    fn and_then<B, F>(self, function: F) -> Applied<M::Family, B>
    where
        F: FnOnce(M::Inner) -> Applied<M::Family, B>,
    {
        <M::Family as Monad>::and_then::<M::Inner, B, F>(self.into_applied(), function)
    }

    #[inline]
    fn join<B>(self) -> Applied<M::Family, B>
    where
        M::Inner: TypeConstructor<Family = M::Family, Inner = B>,
    {
        let nested = <M::Family as Functor>::map::<M::Inner, Applied<M::Family, B>, _>(
            self.into_applied(),
            <M::Inner as TypeConstructor>::into_applied,
        );
        <M::Family as Monad>::join::<B>(nested)
    }

    #[inline]
    fn and_then2<B, C, F>(self, other: Applied<M::Family, B>, function: F) -> Applied<M::Family, C>
    where
        F: FnOnce(M::Inner, B) -> Applied<M::Family, C>,
    {
        <M::Family as Monad>::and_then2::<M::Inner, B, C, F>(self.into_applied(), other, function)
    }

    #[inline]
    fn and_then3<B, C, D, F>(
        self,
        second: Applied<M::Family, B>,
        third: Applied<M::Family, C>,
        function: F,
    ) -> Applied<M::Family, D>
    where
        F: FnOnce(M::Inner, B, C) -> Applied<M::Family, D>,
    {
        <M::Family as Monad>::and_then3::<M::Inner, B, C, D, F>(
            self.into_applied(),
            second,
            third,
            function,
        )
    }

    #[inline]
    fn and_then4<B, C, D, E, F>(
        self,
        second: Applied<M::Family, B>,
        third: Applied<M::Family, C>,
        fourth: Applied<M::Family, D>,
        function: F,
    ) -> Applied<M::Family, E>
    where
        F: FnOnce(M::Inner, B, C, D) -> Applied<M::Family, E>,
    {
        <M::Family as Monad>::and_then4::<M::Inner, B, C, D, E, F>(
            self.into_applied(),
            second,
            third,
            fourth,
            function,
        )
    }

    #[inline]
    fn m_compose<B, C, F, G>(self, first: F, second: G) -> Applied<M::Family, C>
    where
        F: FnOnce(M::Inner) -> Applied<M::Family, B>,
        G: FnOnce(B) -> Applied<M::Family, C>,
    {
        <M::Family as Monad>::m_compose::<M::Inner, B, C, F, G>(self.into_applied(), first, second)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        <M::Family as Fallible>::is_empty::<M::Inner>(self.as_applied())
    }

    #[inline]
    fn with_default(self, default: M::Inner) -> M::Inner {
        <M::Family as Fallible>::with_default::<M::Inner>(self.into_applied(), default)
    }

    #[inline]
    fn unwraps<B, F>(self, function: F, default: B) -> B
    where
        F: FnOnce(M::Inner) -> B,
    {
        <M::Family as Fallible>::unwraps::<M::Inner, B, F>(self.into_applied(), function, default)
    }

    #[inline]
    fn first(self, other: Applied<M::Family, M::Inner>) -> Applied<M::Family, M::Inner> {
        <M::Family as Fallible>::first::<M::Inner>(self.into_applied(), other)
    }

    #[inline]
    fn last(self, other: Applied<M::Family, M::Inner>) -> Applied<M::Family, M::Inner> {
        <M::Family as Fallible>::last::<M::Inner>(self.into_applied(), other)
    }
}
