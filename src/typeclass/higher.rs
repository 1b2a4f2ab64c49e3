//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Option<_>` as type constructors.
//! [`TypeConstructor`] works around that with a generic associated type, which
//! is enough to state [`Functor`](super::Functor) and friends generically.
//!
//! # Example
//!
//! ```rust
//! use varia::maybe::Maybe;
//! use varia::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::just(42);
//! assert_eq!(emptied(present), Maybe::<String>::nothing());
//! ```

use crate::maybe::Maybe;

/// A type constructor applied to some type.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is applied to; `i32` for `Maybe<i32>`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn maybe_with_type_produces_maybe() {
        fn assert_with_type<T, B>()
        where
            Maybe<T>: TypeConstructor<Inner = T, WithType<B> = Maybe<B>>,
        {
        }

        assert_with_type::<i32, String>();
        assert_with_type::<String, Vec<u8>>();
    }

    #[test]
    fn option_with_type_produces_option() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<char>
        where
            T::WithType<char>: Default,
        {
            Default::default()
        }

        let result: Option<char> = transform(Some(1));
        assert_eq!(result, None);
    }
}
