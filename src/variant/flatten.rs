//! Joining a variant nested inside one case of a same-shaped variant.
//!
//! A `Variant2<Variant2<A, B>, B>` carries its nested variant in the first
//! case; flattening it yields a `Variant2<A, B>` holding whatever the inner
//! variant held, or the outer second payload unchanged. The position of the
//! nested variant is a type parameter of [`Flatten`], so one trait covers every
//! position.

use super::{DiscriminatedUnion2, DiscriminatedUnion3, Variant2, Variant3};

/// Marks the first case as holding the nested variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtFirst;

/// Marks the second case as holding the nested variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtSecond;

/// Marks the third case as holding the nested variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtThird;

/// Joins a nested same-shaped variant held at `Position`.
///
/// When only one position fits the value's type, `flatten()` infers it.
/// Otherwise name it with [`FlattenAt::flatten_at`] or
/// `Flatten::<AtSecond>::flatten(value)`.
///
/// Flattening never fails and never loses the inner case: the result holds
/// whichever case the inner variant held.
///
/// # Examples
///
/// ```rust
/// use varia::variant::{Flatten, Variant2};
///
/// let nested: Variant2<i32, Variant2<i32, &str>> = Variant2::Second(Variant2::Second("inner"));
/// assert_eq!(nested.flatten(), Variant2::Second("inner"));
///
/// let nested: Variant2<Variant2<i32, &str>, &str> = Variant2::Second("outer");
/// assert_eq!(nested.flatten(), Variant2::Second("outer"));
/// ```
pub trait Flatten<Position> {
    /// The variant produced by removing one level of nesting.
    type Output;

    /// Removes one level of nesting at `Position`.
    fn flatten(self) -> Self::Output;
}

/// Flattening with an explicitly chosen position.
///
/// Useful where the payload types are still being inferred and `flatten()`
/// alone leaves the position ambiguous.
///
/// # Examples
///
/// ```rust
/// use varia::variant::{AtSecond, FlattenAt, Variant2};
///
/// let nested = Variant2::Second(Variant2::First(1));
/// let flat: Variant2<i32, &str> = nested.flatten_at::<AtSecond>();
/// assert_eq!(flat, Variant2::First(1));
/// ```
pub trait FlattenAt: Sized {
    /// Removes one level of nesting at `Position`.
    #[inline]
    fn flatten_at<Position>(self) -> <Self as Flatten<Position>>::Output
    where
        Self: Flatten<Position>,
    {
        Flatten::<Position>::flatten(self)
    }
}

impl<A, B> FlattenAt for Variant2<A, B> {}
impl<A, B, C> FlattenAt for Variant3<A, B, C> {}
impl<Common: ?Sized, A, B> FlattenAt for DiscriminatedUnion2<Common, A, B> {}
impl<Common: ?Sized, A, B, C> FlattenAt for DiscriminatedUnion3<Common, A, B, C> {}

// =============================================================================
// Variant2
// =============================================================================

impl<A, B> Flatten<AtFirst> for Variant2<Variant2<A, B>, B> {
    type Output = Variant2<A, B>;

    #[inline]
    fn flatten(self) -> Self::Output {
        match self {
            Self::First(inner) => inner,
            Self::Second(value) => Variant2::Second(value),
        }
    }
}

impl<A, B> Flatten<AtSecond> for Variant2<A, Variant2<A, B>> {
    type Output = Variant2<A, B>;

    #[inline]
    fn flatten(self) -> Self::Output {
        match self {
            Self::First(value) => Variant2::First(value),
            Self::Second(inner) => inner,
        }
    }
}

// =============================================================================
// Variant3
// =============================================================================

impl<A, B, C> Flatten<AtFirst> for Variant3<Variant3<A, B, C>, B, C> {
    type Output = Variant3<A, B, C>;

    #[inline]
    fn flatten(self) -> Self::Output {
        match self {
            Self::First(inner) => inner,
            Self::Second(value) => Variant3::Second(value),
            Self::Third(value) => Variant3::Third(value),
        }
    }
}

impl<A, B, C> Flatten<AtSecond> for Variant3<A, Variant3<A, B, C>, C> {
    type Output = Variant3<A, B, C>;

    #[inline]
    fn flatten(self) -> Self::Output {
        match self {
            Self::First(value) => Variant3::First(value),
            Self::Second(inner) => inner,
            Self::Third(value) => Variant3::Third(value),
        }
    }
}

impl<A, B, C> Flatten<AtThird> for Variant3<A, B, Variant3<A, B, C>> {
    type Output = Variant3<A, B, C>;

    #[inline]
    fn flatten(self) -> Self::Output {
        match self {
            Self::First(value) => Variant3::First(value),
            Self::Second(value) => Variant3::Second(value),
            Self::Third(inner) => inner,
        }
    }
}

// =============================================================================
// Discriminated unions
// =============================================================================

impl<Common: ?Sized, A, B> Flatten<AtFirst>
    for DiscriminatedUnion2<Common, DiscriminatedUnion2<Common, A, B>, B>
{
    type Output = DiscriminatedUnion2<Common, A, B>;

    #[inline]
    fn flatten(self) -> Self::Output {
        let variant = self.into_variant().map_first(DiscriminatedUnion2::into_variant);
        DiscriminatedUnion2::from_variant(Flatten::<AtFirst>::flatten(variant))
    }
}

impl<Common: ?Sized, A, B> Flatten<AtSecond>
    for DiscriminatedUnion2<Common, A, DiscriminatedUnion2<Common, A, B>>
{
    type Output = DiscriminatedUnion2<Common, A, B>;

    #[inline]
    fn flatten(self) -> Self::Output {
        let variant = self.into_variant().map_second(DiscriminatedUnion2::into_variant);
        DiscriminatedUnion2::from_variant(Flatten::<AtSecond>::flatten(variant))
    }
}

impl<Common: ?Sized, A, B, C> Flatten<AtFirst>
    for DiscriminatedUnion3<Common, DiscriminatedUnion3<Common, A, B, C>, B, C>
{
    type Output = DiscriminatedUnion3<Common, A, B, C>;

    #[inline]
    fn flatten(self) -> Self::Output {
        let variant = self.into_variant().map_first(DiscriminatedUnion3::into_variant);
        DiscriminatedUnion3::from_variant(Flatten::<AtFirst>::flatten(variant))
    }
}

impl<Common: ?Sized, A, B, C> Flatten<AtSecond>
    for DiscriminatedUnion3<Common, A, DiscriminatedUnion3<Common, A, B, C>, C>
{
    type Output = DiscriminatedUnion3<Common, A, B, C>;

    #[inline]
    fn flatten(self) -> Self::Output {
        let variant = self.into_variant().map_second(DiscriminatedUnion3::into_variant);
        DiscriminatedUnion3::from_variant(Flatten::<AtSecond>::flatten(variant))
    }
}

impl<Common: ?Sized, A, B, C> Flatten<AtThird>
    for DiscriminatedUnion3<Common, A, B, DiscriminatedUnion3<Common, A, B, C>>
{
    type Output = DiscriminatedUnion3<Common, A, B, C>;

    #[inline]
    fn flatten(self) -> Self::Output {
        let variant = self.into_variant().map_third(DiscriminatedUnion3::into_variant);
        DiscriminatedUnion3::from_variant(Flatten::<AtThird>::flatten(variant))
    }
}
