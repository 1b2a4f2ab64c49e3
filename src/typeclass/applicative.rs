//! Applicative type class - combining independent values in a context.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value,
//! and `map2`/`map3`, which combine several values that do not depend on one
//! another.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use varia::maybe::Maybe;
//! use varia::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::just(42));
//!
//! let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::just(3));
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// Functors that can lift plain values and combine independent values.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with `function`; absent if either is absent.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values with `function`; absent if any is absent.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function in the context to a value in the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Just(function), Maybe::Just(b)) => Maybe::Just(function(b)),
            _ => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_pure_is_just() {
        assert_eq!(<Maybe<()>>::pure("value"), Maybe::just("value"));
    }

    #[rstest]
    #[case(Maybe::just(1), Maybe::just(2), Maybe::just(3))]
    #[case(Maybe::nothing(), Maybe::just(2), Maybe::nothing())]
    #[case(Maybe::just(1), Maybe::nothing(), Maybe::nothing())]
    fn maybe_map2(#[case] first: Maybe<i32>, #[case] second: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(first.map2(second, |a, b| a + b), expected);
    }

    #[rstest]
    fn maybe_map3_adds_three_values() {
        let result = Maybe::just(5).map3(Maybe::just(7), Maybe::just(3), |a, b, c| a + b + c);
        assert_eq!(result, Maybe::just(15));
    }

    #[rstest]
    fn maybe_apply_and_product() {
        let function: Maybe<fn(i32) -> i32> = Maybe::Just(|n| n * 10);
        assert_eq!(function.apply(Maybe::just(4)), Maybe::just(40));
        assert_eq!(Maybe::just(1).product(Maybe::just('a')), Maybe::just((1, 'a')));
    }

    #[rstest]
    fn option_map2_and_apply() {
        assert_eq!(Some(2).map2(Some(3), |a, b| a * b), Some(6));
        let function: Option<fn(i32) -> i32> = None;
        assert_eq!(function.apply(Some(1)), None);
    }
}
