//! `Variant2` - a value holding exactly one of two typed alternatives.

use super::{Case, Unit};
use crate::maybe::Maybe;

/// A value that holds exactly one of two alternatives.
///
/// The active case is fixed at construction and the value is never mutated.
/// Consume it with the total match [`switch`](Self::switch), the partial match
/// [`match_some`](Self::match_some), or the positional accessors, which
/// return [`Maybe`] so that asking for the inactive case yields `Nothing`
/// rather than a meaningless default.
///
/// The enum constructors `Variant2::First` and `Variant2::Second` are the
/// factories; the type parameters not fixed by the payload are inferred from
/// context.
///
/// # Type Parameters
///
/// * `A` - The type of the first alternative
/// * `B` - The type of the second alternative
///
/// # Examples
///
/// ```rust
/// use varia::variant::Variant2;
///
/// let value: Variant2<i32, String> = Variant2::Second("hello".to_string());
///
/// let length = value.switch(|number| number as usize, |text| text.len());
/// assert_eq!(length, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant2<A, B> {
    /// The first alternative.
    First(A),
    /// The second alternative.
    Second(B),
}

impl<A, B> Variant2<A, B> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the first alternative is active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::variant::Variant2;
    ///
    /// let value: Variant2<i32, &str> = Variant2::First(1);
    /// assert!(value.is_first());
    /// assert!(!value.is_second());
    /// ```
    #[inline]
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::First(_))
    }

    /// Returns `true` if the second alternative is active.
    #[inline]
    pub const fn is_second(&self) -> bool {
        matches!(self, Self::Second(_))
    }

    /// Returns the active case.
    #[inline]
    pub const fn case(&self) -> Case {
        match self {
            Self::First(_) => Case::First,
            Self::Second(_) => Case::Second,
        }
    }

    // =========================================================================
    // Total Matching
    // =========================================================================

    /// Runs the handler for the active case and returns its result.
    ///
    /// Exactly one handler is invoked, exactly once, with the payload that was
    /// stored at construction. For effect-only handlers use `R = ()` or
    /// `R = Unit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::variant::Variant2;
    ///
    /// let value: Variant2<i32, String> = Variant2::First(21);
    /// let result = value.switch(|number| number * 2, |text| text.len() as i32);
    /// assert_eq!(result, 42);
    /// ```
    #[inline]
    pub fn switch<R, F, G>(self, on_first: F, on_second: G) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
        }
    }

    /// Runs the handler for the active case over a borrowed payload.
    #[inline]
    pub fn switch_ref<R, F, G>(&self, on_first: F, on_second: G) -> R
    where
        F: FnOnce(&A) -> R,
        G: FnOnce(&B) -> R,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
        }
    }

    // =========================================================================
    // Positional Access
    // =========================================================================

    /// Returns the first payload if that case is active, consuming the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    /// use varia::variant::Variant2;
    ///
    /// let value: Variant2<i32, String> = Variant2::First(42);
    /// assert_eq!(value.first(), Maybe::just(42));
    ///
    /// let value: Variant2<i32, String> = Variant2::Second("hello".to_string());
    /// assert_eq!(value.first(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn first(self) -> Maybe<A> {
        match self {
            Self::First(value) => Maybe::Just(value),
            Self::Second(_) => Maybe::Nothing,
        }
    }

    /// Returns the second payload if that case is active, consuming the variant.
    #[inline]
    pub fn second(self) -> Maybe<B> {
        match self {
            Self::First(_) => Maybe::Nothing,
            Self::Second(value) => Maybe::Just(value),
        }
    }

    /// Borrows the first payload if that case is active.
    #[inline]
    pub const fn first_ref(&self) -> Maybe<&A> {
        match self {
            Self::First(value) => Maybe::Just(value),
            Self::Second(_) => Maybe::Nothing,
        }
    }

    /// Borrows the second payload if that case is active.
    #[inline]
    pub const fn second_ref(&self) -> Maybe<&B> {
        match self {
            Self::First(_) => Maybe::Nothing,
            Self::Second(value) => Maybe::Just(value),
        }
    }

    /// Converts `&Variant2<A, B>` into `Variant2<&A, &B>`.
    #[inline]
    pub const fn as_ref(&self) -> Variant2<&A, &B> {
        match self {
            Self::First(value) => Variant2::First(value),
            Self::Second(value) => Variant2::Second(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the first payload, leaving the second untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::variant::Variant2;
    ///
    /// let value: Variant2<i32, String> = Variant2::First(4);
    /// assert_eq!(value.map_first(|n| n * 10), Variant2::First(40));
    /// ```
    #[inline]
    pub fn map_first<T, F>(self, function: F) -> Variant2<T, B>
    where
        F: FnOnce(A) -> T,
    {
        match self {
            Self::First(value) => Variant2::First(function(value)),
            Self::Second(value) => Variant2::Second(value),
        }
    }

    /// Applies a function to the second payload, leaving the first untouched.
    #[inline]
    pub fn map_second<T, F>(self, function: F) -> Variant2<A, T>
    where
        F: FnOnce(B) -> T,
    {
        match self {
            Self::First(value) => Variant2::First(value),
            Self::Second(value) => Variant2::Second(function(value)),
        }
    }

    /// Applies the function matching the active case, keeping the case.
    #[inline]
    pub fn bimap<T, U, F, G>(self, first_function: F, second_function: G) -> Variant2<T, U>
    where
        F: FnOnce(A) -> T,
        G: FnOnce(B) -> U,
    {
        match self {
            Self::First(value) => Variant2::First(first_function(value)),
            Self::Second(value) => Variant2::Second(second_function(value)),
        }
    }

    /// Exchanges the two alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::variant::Variant2;
    ///
    /// let value: Variant2<i32, &str> = Variant2::First(1);
    /// assert_eq!(value.swap(), Variant2::Second(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Variant2<B, A> {
        match self {
            Self::First(value) => Variant2::Second(value),
            Self::Second(value) => Variant2::First(value),
        }
    }
}

// =============================================================================
// Default-based Access
// =============================================================================

impl<A: Default, B> Variant2<A, B> {
    /// Returns the first payload, or `A::default()` if the second case is active.
    ///
    /// Prefer [`first`](Self::first): this accessor cannot tell an inactive case
    /// apart from a stored default value.
    #[inline]
    pub fn first_or_default(self) -> A {
        self.first().unwrap_or_default()
    }
}

impl<A, B: Default> Variant2<A, B> {
    /// Returns the second payload, or `B::default()` if the first case is active.
    #[inline]
    pub fn second_or_default(self) -> B {
        self.second().unwrap_or_default()
    }
}

impl<T> Variant2<T, T> {
    /// Returns the payload when both alternatives have the same type.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::First(value) | Self::Second(value) => value,
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, B> From<Result<B, A>> for Variant2<A, B> {
    /// Converts a `Result`: `Err(a)` becomes `First(a)`, `Ok(b)` becomes `Second(b)`.
    #[inline]
    fn from(result: Result<B, A>) -> Self {
        match result {
            Ok(value) => Self::Second(value),
            Err(error) => Self::First(error),
        }
    }
}

impl<A, B> From<Variant2<A, B>> for Result<B, A> {
    #[inline]
    fn from(variant: Variant2<A, B>) -> Self {
        match variant {
            Variant2::First(value) => Err(value),
            Variant2::Second(value) => Ok(value),
        }
    }
}

impl<T> From<Maybe<T>> for Variant2<T, Unit> {
    /// `Just(t)` becomes `First(t)`; `Nothing` becomes `Second(Unit)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    /// use varia::variant::{Unit, Variant2};
    ///
    /// assert_eq!(Variant2::from(Maybe::just(3)), Variant2::<i32, Unit>::First(3));
    /// assert_eq!(Variant2::from(Maybe::<i32>::nothing()), Variant2::Second(Unit));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Self::First(value),
            Maybe::Nothing => Self::Second(Unit),
        }
    }
}

impl<T> From<Variant2<T, Unit>> for Maybe<T> {
    #[inline]
    fn from(variant: Variant2<T, Unit>) -> Self {
        variant.first()
    }
}

static_assertions::assert_impl_all!(Variant2<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Variant2<i32, char>: Copy);
static_assertions::assert_not_impl_any!(Variant2<std::rc::Rc<i32>, i32>: Send, Sync);
