//! Variants whose alternatives all share a common view.
//!
//! A [`DiscriminatedUnion2<C, A, B>`] is a [`Variant2<A, B>`] in which both
//! alternatives can be viewed as `C`. Besides the usual matching it offers
//! [`value`](DiscriminatedUnion2::value), which returns the active payload as
//! `&C` without a match. `C` may be unsized: `str`, `[T]`, `Path`, or a trait
//! object.
//!
//! The common-type bound lives on the operations that need it rather than on
//! the type, so constructing a union never requires more than constructing the
//! underlying variant.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{Case, Cases2, Cases3, Variant2, Variant3};
use crate::maybe::Maybe;

/// A two-case variant whose alternatives share the common view `C`.
///
/// # Examples
///
/// ```rust
/// use varia::variant::DiscriminatedUnion2;
///
/// let owned: DiscriminatedUnion2<str, String, &str> = DiscriminatedUnion2::of_first("owned".to_string());
/// let borrowed: DiscriminatedUnion2<str, String, &str> = DiscriminatedUnion2::of_second("borrowed");
///
/// assert_eq!(owned.value(), "owned");
/// assert_eq!(borrowed.value().len(), 8);
/// ```
///
/// Trait objects work as the common type:
///
/// ```rust
/// use varia::variant::DiscriminatedUnion2;
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// struct Square(f64);
/// struct Circle(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
/// }
///
/// impl Shape for Circle {
///     fn area(&self) -> f64 {
///         std::f64::consts::PI * self.0 * self.0
///     }
/// }
///
/// impl AsRef<dyn Shape> for Square {
///     fn as_ref(&self) -> &(dyn Shape + 'static) {
///         self
///     }
/// }
///
/// impl AsRef<dyn Shape> for Circle {
///     fn as_ref(&self) -> &(dyn Shape + 'static) {
///         self
///     }
/// }
///
/// let shape: DiscriminatedUnion2<dyn Shape, Square, Circle> = DiscriminatedUnion2::of_first(Square(3.0));
/// assert_eq!(shape.value().area(), 9.0);
/// ```
pub struct DiscriminatedUnion2<C: ?Sized, A, B> {
    variant: Variant2<A, B>,
    common: PhantomData<fn(&C)>,
}

/// A three-case variant whose alternatives share the common view `C`.
///
/// # Examples
///
/// ```rust
/// use varia::variant::DiscriminatedUnion3;
///
/// let bytes: DiscriminatedUnion3<[u8], Vec<u8>, [u8; 2], &[u8]> = DiscriminatedUnion3::of_second([1, 2]);
/// assert_eq!(bytes.value(), &[1, 2]);
/// ```
pub struct DiscriminatedUnion3<C: ?Sized, A, B, D> {
    variant: Variant3<A, B, D>,
    common: PhantomData<fn(&C)>,
}

// =============================================================================
// DiscriminatedUnion2
// =============================================================================

impl<C: ?Sized, A, B> DiscriminatedUnion2<C, A, B> {
    /// Creates a union holding the first alternative.
    #[inline]
    pub const fn of_first(value: A) -> Self {
        Self::from_variant(Variant2::First(value))
    }

    /// Creates a union holding the second alternative.
    #[inline]
    pub const fn of_second(value: B) -> Self {
        Self::from_variant(Variant2::Second(value))
    }

    /// Wraps an unconstrained variant.
    #[inline]
    pub const fn from_variant(variant: Variant2<A, B>) -> Self {
        Self {
            variant,
            common: PhantomData,
        }
    }

    /// Unwraps into the unconstrained variant.
    #[inline]
    pub fn into_variant(self) -> Variant2<A, B> {
        self.variant
    }

    /// Borrows the underlying variant.
    #[inline]
    pub const fn as_variant(&self) -> &Variant2<A, B> {
        &self.variant
    }

    /// Returns `true` if the first alternative is active.
    #[inline]
    pub const fn is_first(&self) -> bool {
        self.variant.is_first()
    }

    /// Returns `true` if the second alternative is active.
    #[inline]
    pub const fn is_second(&self) -> bool {
        self.variant.is_second()
    }

    /// Returns the active case.
    #[inline]
    pub const fn case(&self) -> Case {
        self.variant.case()
    }

    /// Runs the handler for the active case and returns its result.
    #[inline]
    pub fn switch<R, F, G>(self, on_first: F, on_second: G) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
    {
        self.variant.switch(on_first, on_second)
    }

    /// Runs the handler for the active case over a borrowed payload.
    #[inline]
    pub fn switch_ref<R, F, G>(&self, on_first: F, on_second: G) -> R
    where
        F: FnOnce(&A) -> R,
        G: FnOnce(&B) -> R,
    {
        self.variant.switch_ref(on_first, on_second)
    }

    /// Starts a total match whose handlers are supplied one at a time.
    #[inline]
    pub fn cases<'a, R>(self) -> Cases2<'a, A, B, R> {
        self.variant.cases()
    }

    /// Returns the first payload if that case is active.
    #[inline]
    pub fn first(self) -> Maybe<A> {
        self.variant.first()
    }

    /// Returns the second payload if that case is active.
    #[inline]
    pub fn second(self) -> Maybe<B> {
        self.variant.second()
    }

    /// Borrows the first payload if that case is active.
    #[inline]
    pub const fn first_ref(&self) -> Maybe<&A> {
        self.variant.first_ref()
    }

    /// Borrows the second payload if that case is active.
    #[inline]
    pub const fn second_ref(&self) -> Maybe<&B> {
        self.variant.second_ref()
    }
}

impl<C: ?Sized, A: AsRef<C>, B: AsRef<C>> DiscriminatedUnion2<C, A, B> {
    /// Returns the active payload viewed as the common type.
    ///
    /// Never fails: every alternative has the view.
    #[inline]
    pub fn value(&self) -> &C {
        match &self.variant {
            Variant2::First(value) => value.as_ref(),
            Variant2::Second(value) => value.as_ref(),
        }
    }
}

impl<C, A: Into<C>, B: Into<C>> DiscriminatedUnion2<C, A, B> {
    /// Converts the active payload into an owned common value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::variant::DiscriminatedUnion2;
    ///
    /// let small: DiscriminatedUnion2<i64, i8, u32> = DiscriminatedUnion2::of_first(-3);
    /// assert_eq!(small.into_value(), -3_i64);
    /// ```
    #[inline]
    pub fn into_value(self) -> C {
        self.variant.switch(Into::into, Into::into)
    }
}

impl<C: ?Sized, A: AsRef<C>, B: AsRef<C>> AsRef<C> for DiscriminatedUnion2<C, A, B> {
    #[inline]
    fn as_ref(&self) -> &C {
        self.value()
    }
}

impl<C: ?Sized, A, B> From<Variant2<A, B>> for DiscriminatedUnion2<C, A, B> {
    #[inline]
    fn from(variant: Variant2<A, B>) -> Self {
        Self::from_variant(variant)
    }
}

impl<C: ?Sized, A: Clone, B: Clone> Clone for DiscriminatedUnion2<C, A, B> {
    fn clone(&self) -> Self {
        Self::from_variant(self.variant.clone())
    }
}

impl<C: ?Sized, A: Copy, B: Copy> Copy for DiscriminatedUnion2<C, A, B> {}

impl<C: ?Sized, A: PartialEq, B: PartialEq> PartialEq for DiscriminatedUnion2<C, A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant
    }
}

impl<C: ?Sized, A: Eq, B: Eq> Eq for DiscriminatedUnion2<C, A, B> {}

impl<C: ?Sized, A: Hash, B: Hash> Hash for DiscriminatedUnion2<C, A, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant.hash(state);
    }
}

impl<C: ?Sized, A: fmt::Debug, B: fmt::Debug> fmt::Debug for DiscriminatedUnion2<C, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("DiscriminatedUnion2")
            .field(&self.variant)
            .finish()
    }
}

// =============================================================================
// DiscriminatedUnion3
// =============================================================================

impl<C: ?Sized, A, B, D> DiscriminatedUnion3<C, A, B, D> {
    /// Creates a union holding the first alternative.
    #[inline]
    pub const fn of_first(value: A) -> Self {
        Self::from_variant(Variant3::First(value))
    }

    /// Creates a union holding the second alternative.
    #[inline]
    pub const fn of_second(value: B) -> Self {
        Self::from_variant(Variant3::Second(value))
    }

    /// Creates a union holding the third alternative.
    #[inline]
    pub const fn of_third(value: D) -> Self {
        Self::from_variant(Variant3::Third(value))
    }

    /// Wraps an unconstrained variant.
    #[inline]
    pub const fn from_variant(variant: Variant3<A, B, D>) -> Self {
        Self {
            variant,
            common: PhantomData,
        }
    }

    /// Unwraps into the unconstrained variant.
    #[inline]
    pub fn into_variant(self) -> Variant3<A, B, D> {
        self.variant
    }

    /// Borrows the underlying variant.
    #[inline]
    pub const fn as_variant(&self) -> &Variant3<A, B, D> {
        &self.variant
    }

    /// Returns `true` if the first alternative is active.
    #[inline]
    pub const fn is_first(&self) -> bool {
        self.variant.is_first()
    }

    /// Returns `true` if the second alternative is active.
    #[inline]
    pub const fn is_second(&self) -> bool {
        self.variant.is_second()
    }

    /// Returns `true` if the third alternative is active.
    #[inline]
    pub const fn is_third(&self) -> bool {
        self.variant.is_third()
    }

    /// Returns the active case.
    #[inline]
    pub const fn case(&self) -> Case {
        self.variant.case()
    }

    /// Runs the handler for the active case and returns its result.
    #[inline]
    pub fn switch<R, F, G, H>(self, on_first: F, on_second: G, on_third: H) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
        H: FnOnce(D) -> R,
    {
        self.variant.switch(on_first, on_second, on_third)
    }

    /// Runs the handler for the active case over a borrowed payload.
    #[inline]
    pub fn switch_ref<R, F, G, H>(&self, on_first: F, on_second: G, on_third: H) -> R
    where
        F: FnOnce(&A) -> R,
        G: FnOnce(&B) -> R,
        H: FnOnce(&D) -> R,
    {
        self.variant.switch_ref(on_first, on_second, on_third)
    }

    /// Starts a total match whose handlers are supplied one at a time.
    #[inline]
    pub fn cases<'a, R>(self) -> Cases3<'a, A, B, D, R> {
        self.variant.cases()
    }

    /// Returns the first payload if that case is active.
    #[inline]
    pub fn first(self) -> Maybe<A> {
        self.variant.first()
    }

    /// Returns the second payload if that case is active.
    #[inline]
    pub fn second(self) -> Maybe<B> {
        self.variant.second()
    }

    /// Returns the third payload if that case is active.
    #[inline]
    pub fn third(self) -> Maybe<D> {
        self.variant.third()
    }

    /// Borrows the first payload if that case is active.
    #[inline]
    pub const fn first_ref(&self) -> Maybe<&A> {
        self.variant.first_ref()
    }

    /// Borrows the second payload if that case is active.
    #[inline]
    pub const fn second_ref(&self) -> Maybe<&B> {
        self.variant.second_ref()
    }

    /// Borrows the third payload if that case is active.
    #[inline]
    pub const fn third_ref(&self) -> Maybe<&D> {
        self.variant.third_ref()
    }
}

impl<C: ?Sized, A: AsRef<C>, B: AsRef<C>, D: AsRef<C>> DiscriminatedUnion3<C, A, B, D> {
    /// Returns the active payload viewed as the common type.
    #[inline]
    pub fn value(&self) -> &C {
        match &self.variant {
            Variant3::First(value) => value.as_ref(),
            Variant3::Second(value) => value.as_ref(),
            Variant3::Third(value) => value.as_ref(),
        }
    }
}

impl<C, A: Into<C>, B: Into<C>, D: Into<C>> DiscriminatedUnion3<C, A, B, D> {
    /// Converts the active payload into an owned common value.
    #[inline]
    pub fn into_value(self) -> C {
        self.variant.switch(Into::into, Into::into, Into::into)
    }
}

impl<C: ?Sized, A: AsRef<C>, B: AsRef<C>, D: AsRef<C>> AsRef<C>
    for DiscriminatedUnion3<C, A, B, D>
{
    #[inline]
    fn as_ref(&self) -> &C {
        self.value()
    }
}

impl<C: ?Sized, A, B, D> From<Variant3<A, B, D>> for DiscriminatedUnion3<C, A, B, D> {
    #[inline]
    fn from(variant: Variant3<A, B, D>) -> Self {
        Self::from_variant(variant)
    }
}

impl<C: ?Sized, A: Clone, B: Clone, D: Clone> Clone for DiscriminatedUnion3<C, A, B, D> {
    fn clone(&self) -> Self {
        Self::from_variant(self.variant.clone())
    }
}

impl<C: ?Sized, A: Copy, B: Copy, D: Copy> Copy for DiscriminatedUnion3<C, A, B, D> {}

impl<C: ?Sized, A: PartialEq, B: PartialEq, D: PartialEq> PartialEq
    for DiscriminatedUnion3<C, A, B, D>
{
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant
    }
}

impl<C: ?Sized, A: Eq, B: Eq, D: Eq> Eq for DiscriminatedUnion3<C, A, B, D> {}

impl<C: ?Sized, A: Hash, B: Hash, D: Hash> Hash for DiscriminatedUnion3<C, A, B, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant.hash(state);
    }
}

impl<C: ?Sized, A: fmt::Debug, B: fmt::Debug, D: fmt::Debug> fmt::Debug
    for DiscriminatedUnion3<C, A, B, D>
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("DiscriminatedUnion3")
            .field(&self.variant)
            .finish()
    }
}

static_assertions::assert_impl_all!(DiscriminatedUnion2<str, String, &'static str>: Send, Sync, Clone);
static_assertions::assert_impl_all!(DiscriminatedUnion3<[u8], Vec<u8>, [u8; 4], &'static [u8]>: Send, Sync);
