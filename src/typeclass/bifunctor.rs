//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Variant2 and method resolution
//!
//! [`Variant2`] has inherent `first`, `second`, `first_ref` and `second_ref`
//! accessors returning [`Maybe`](crate::maybe::Maybe), and inherent methods
//! win over trait methods in `value.first(..)` syntax. Call the trait versions
//! with the trait path:
//!
//! ```rust
//! use varia::typeclass::Bifunctor;
//! use varia::variant::Variant2;
//!
//! let value: Variant2<i32, String> = Variant2::First(21);
//! let doubled = Bifunctor::first(value, |n| n * 2);
//! assert_eq!(doubled, Variant2::First(42));
//! ```
//!
//! `bimap` has the same meaning either way.

use crate::variant::Variant2;

/// Types with two type parameters that can each be mapped.
pub trait Bifunctor<A, B> {
    /// The same type constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Maps whichever side is present.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first side only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second side only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps whichever side is present, by reference.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

// =============================================================================
// Variant2<A, B> Implementation
// =============================================================================

impl<A, B> Bifunctor<A, B> for Variant2<A, B> {
    type Target<C, D> = Variant2<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Variant2<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Variant2<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

/// `Result<T, E>` maps as `Bifunctor<E, T>`: `first` is `map_err`, `second` is
/// `map`. This matches the `Result` conversions of [`Variant2`], where `Err`
/// is the first case.
impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}
