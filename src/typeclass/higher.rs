//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). This is essential for defining
//! the protocol traits (`Functor`, `Applicative`, `Monad`, `Fallible`) once for
//! every container.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. We cannot write a trait
//! that abstracts over `Maybe<_>` and `Result<_, E>` as type constructors.
//! Two traits work around this limitation:
//!
//! - [`Family`]: a marker type naming a type constructor. `MaybeFamily` names
//!   `Maybe<_>`, `ResultFamily<E>` names `Result<_, E>`.
//! - [`TypeConstructor`]: implemented by every concrete container, linking it
//!   back to its family and its payload type.
//!
//! Because every member of a family reports the same family, generic code can
//! move from `Applied<F, A>` to `Applied<F, B>` without losing track of the
//! container it is working in.
//!
//! # Example
//!
//! ```rust
//! use monadic::control::{Maybe, MaybeFamily};
//! use monadic::typeclass::{Applied, TypeConstructor};
//!
//! fn assert_family<T: TypeConstructor<Family = MaybeFamily>>() {}
//! assert_family::<Maybe<i32>>();
//!
//! let nested: Applied<MaybeFamily, Applied<MaybeFamily, i32>> = Maybe::Just(Maybe::Just(1));
//! assert_eq!(nested, Maybe::Just(Maybe::Just(1)));
//! ```

/// A marker type naming a type constructor.
///
/// Implementors are never instantiated; they only exist at the type level so
/// that the protocol traits can be written against "the container" rather
/// than against one concrete `Container<A>`.
///
/// # Laws
///
/// For any `F: Family` and any `A`:
///
/// 1. **Closure**: `<F::Applied<A> as TypeConstructor>::Family == F`.
/// 2. **Payload**: `<F::Applied<A> as TypeConstructor>::Inner == A`.
///
/// Both laws are enforced by the bound on `Applied`.
pub trait Family: Sized {
    /// The type constructor applied to `A`.
    ///
    /// For `MaybeFamily`, `Applied<String>` is `Maybe<String>`.
    type Applied<A>: TypeConstructor<Family = Self, Inner = A>;
}

/// Shorthand for `<F as Family>::Applied<A>`.
pub type Applied<F, A> = <F as Family>::Applied<A>;

/// A concrete container, i.e. a type constructor applied to some type.
///
/// # Associated Types
///
/// - `Inner`: The payload type. For `Maybe<i32>` this is `i32`.
/// - `Family`: The marker naming the constructor. For `Maybe<i32>` this is
///   `MaybeFamily`.
///
/// # Example
///
/// ```rust
/// use monadic::control::Result;
/// use monadic::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = u8>>() {}
/// assert_inner::<Result<u8, String>>();
/// ```
pub trait TypeConstructor: Sized {
    /// The payload type this constructor is applied to.
    type Inner;

    /// The family this container belongs to.
    type Family: Family;

    /// Views `self` as its family's member for `Self::Inner`.
    ///
    /// This is the identity conversion; it exists because the compiler cannot
    /// see `Self == Applied<Self::Family, Self::Inner>` on its own.
    fn into_applied(self) -> Applied<Self::Family, Self::Inner>;

    /// Borrowing counterpart of [`TypeConstructor::into_applied`].
    fn as_applied(&self) -> &Applied<Self::Family, Self::Inner>;
}
