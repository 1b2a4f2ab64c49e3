//! `Variant3` - a value holding exactly one of three typed alternatives.

use super::Case;
use crate::maybe::Maybe;

/// A value that holds exactly one of three alternatives.
///
/// The three-case counterpart of [`Variant2`](super::Variant2), with the same
/// matching contract: one handler per case for [`switch`](Self::switch), any
/// subset plus a default for [`match_some`](Self::match_some), and
/// [`Maybe`]-returning positional accessors.
///
/// # Examples
///
/// ```rust
/// use varia::variant::Variant3;
///
/// fn describe(value: Variant3<i32, String, bool>) -> String {
///     value.switch(
///         |number| format!("number {number}"),
///         |text| format!("text {text}"),
///         |flag| format!("flag {flag}"),
///     )
/// }
///
/// assert_eq!(describe(Variant3::First(1)), "number 1");
/// assert_eq!(describe(Variant3::Third(false)), "flag false");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant3<A, B, C> {
    /// The first alternative.
    First(A),
    /// The second alternative.
    Second(B),
    /// The third alternative.
    Third(C),
}

impl<A, B, C> Variant3<A, B, C> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the first alternative is active.
    #[inline]
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::First(_))
    }

    /// Returns `true` if the second alternative is active.
    #[inline]
    pub const fn is_second(&self) -> bool {
        matches!(self, Self::Second(_))
    }

    /// Returns `true` if the third alternative is active.
    #[inline]
    pub const fn is_third(&self) -> bool {
        matches!(self, Self::Third(_))
    }

    /// Returns the active case.
    #[inline]
    pub const fn case(&self) -> Case {
        match self {
            Self::First(_) => Case::First,
            Self::Second(_) => Case::Second,
            Self::Third(_) => Case::Third,
        }
    }

    // =========================================================================
    // Total Matching
    // =========================================================================

    /// Runs the handler for the active case and returns its result.
    #[inline]
    pub fn switch<R, F, G, H>(self, on_first: F, on_second: G, on_third: H) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
        H: FnOnce(C) -> R,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
            Self::Third(value) => on_third(value),
        }
    }

    /// Runs the handler for the active case over a borrowed payload.
    #[inline]
    pub fn switch_ref<R, F, G, H>(&self, on_first: F, on_second: G, on_third: H) -> R
    where
        F: FnOnce(&A) -> R,
        G: FnOnce(&B) -> R,
        H: FnOnce(&C) -> R,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
            Self::Third(value) => on_third(value),
        }
    }

    // =========================================================================
    // Positional Access
    // =========================================================================

    /// Returns the first payload if that case is active.
    #[inline]
    pub fn first(self) -> Maybe<A> {
        match self {
            Self::First(value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Returns the second payload if that case is active.
    #[inline]
    pub fn second(self) -> Maybe<B> {
        match self {
            Self::Second(value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Returns the third payload if that case is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    /// use varia::variant::Variant3;
    ///
    /// let value: Variant3<i32, &str, char> = Variant3::Third('x');
    /// assert_eq!(value.third(), Maybe::just('x'));
    /// assert_eq!(value.first(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn third(self) -> Maybe<C> {
        match self {
            Self::Third(value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Borrows the first payload if that case is active.
    #[inline]
    pub const fn first_ref(&self) -> Maybe<&A> {
        match self {
            Self::First(value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Borrows the second payload if that case is active.
    #[inline]
    pub const fn second_ref(&self) -> Maybe<&B> {
        match self {
            Self::Second(value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Borrows the third payload if that case is active.
    #[inline]
    pub const fn third_ref(&self) -> Maybe<&C> {
        match self {
            Self::Third(value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Converts `&Variant3<A, B, C>` into `Variant3<&A, &B, &C>`.
    #[inline]
    pub const fn as_ref(&self) -> Variant3<&A, &B, &C> {
        match self {
            Self::First(value) => Variant3::First(value),
            Self::Second(value) => Variant3::Second(value),
            Self::Third(value) => Variant3::Third(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the first payload.
    #[inline]
    pub fn map_first<T, F>(self, function: F) -> Variant3<T, B, C>
    where
        F: FnOnce(A) -> T,
    {
        match self {
            Self::First(value) => Variant3::First(function(value)),
            Self::Second(value) => Variant3::Second(value),
            Self::Third(value) => Variant3::Third(value),
        }
    }

    /// Applies a function to the second payload.
    #[inline]
    pub fn map_second<T, F>(self, function: F) -> Variant3<A, T, C>
    where
        F: FnOnce(B) -> T,
    {
        match self {
            Self::First(value) => Variant3::First(value),
            Self::Second(value) => Variant3::Second(function(value)),
            Self::Third(value) => Variant3::Third(value),
        }
    }

    /// Applies a function to the third payload.
    #[inline]
    pub fn map_third<T, F>(self, function: F) -> Variant3<A, B, T>
    where
        F: FnOnce(C) -> T,
    {
        match self {
            Self::First(value) => Variant3::First(value),
            Self::Second(value) => Variant3::Second(value),
            Self::Third(value) => Variant3::Third(function(value)),
        }
    }

    /// Applies the function matching the active case, keeping the case.
    #[inline]
    pub fn trimap<T, U, V, F, G, H>(
        self,
        first_function: F,
        second_function: G,
        third_function: H,
    ) -> Variant3<T, U, V>
    where
        F: FnOnce(A) -> T,
        G: FnOnce(B) -> U,
        H: FnOnce(C) -> V,
    {
        match self {
            Self::First(value) => Variant3::First(first_function(value)),
            Self::Second(value) => Variant3::Second(second_function(value)),
            Self::Third(value) => Variant3::Third(third_function(value)),
        }
    }
}

impl<A: Default, B, C> Variant3<A, B, C> {
    /// Returns the first payload, or `A::default()` if another case is active.
    #[inline]
    pub fn first_or_default(self) -> A {
        self.first().unwrap_or_default()
    }
}

impl<A, B: Default, C> Variant3<A, B, C> {
    /// Returns the second payload, or `B::default()` if another case is active.
    #[inline]
    pub fn second_or_default(self) -> B {
        self.second().unwrap_or_default()
    }
}

impl<A, B, C: Default> Variant3<A, B, C> {
    /// Returns the third payload, or `C::default()` if another case is active.
    #[inline]
    pub fn third_or_default(self) -> C {
        self.third().unwrap_or_default()
    }
}

impl<T> Variant3<T, T, T> {
    /// Returns the payload when all alternatives have the same type.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::First(value) | Self::Second(value) | Self::Third(value) => value,
        }
    }
}

static_assertions::assert_impl_all!(Variant3<i32, String, Vec<u8>>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Variant3<i32, i32, std::cell::Cell<i32>>: Sync);
