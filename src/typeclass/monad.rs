//! Monad type class - sequencing dependent computations.
//!
//! Each step of a monadic chain may depend on the value produced by the step
//! before it. For [`Maybe`] and `Option`, a missing value ends the chain and no
//! later step runs.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use varia::maybe::Maybe;
//! use varia::typeclass::Monad;
//!
//! fn positive(n: i32) -> Maybe<i32> {
//!     if n > 0 { Maybe::just(n) } else { Maybe::nothing() }
//! }
//!
//! assert_eq!(Maybe::just(21).flat_map(positive), Maybe::just(21));
//! assert_eq!(Maybe::just(-1).flat_map(positive), Maybe::nothing());
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// Applicatives whose values can be chained with dependent steps.
pub trait Monad: Applicative {
    /// Runs `function` on the inner value and returns its result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the inner value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}
