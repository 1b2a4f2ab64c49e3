//! The `Maybe` type - an optional value with monadic chaining.

use std::iter::FromIterator;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// `Maybe<T>` is a two-case variant specialised to presence and absence. It is
/// consumed with [`match_with`](Self::match_with) or chained with
/// [`bind`](Self::bind) and [`map`](Self::map): each step runs only when every
/// previous step produced `Just`, so a `Nothing` anywhere short-circuits the
/// rest of the chain.
///
/// `Nothing` is declared first so that ordering agrees with [`Option`]
/// (`Nothing < Just(_)`).
///
/// # Examples
///
/// ```rust
/// use varia::maybe::Maybe;
///
/// fn parse(text: &str) -> Maybe<i32> {
///     text.parse().ok().into()
/// }
///
/// let sum = parse("5")
///     .bind(|a| parse("7").map(move |b| a + b))
///     .bind(|ab| parse("3").map(move |c| ab + c));
/// assert_eq!(sum, Maybe::Just(15));
///
/// let missing = parse("5").bind(|a| parse("seven").map(move |b| a + b));
/// assert_eq!(missing, Maybe::Nothing);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns the absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    ///
    /// let empty: Maybe<String> = Maybe::nothing();
    /// assert!(empty.is_nothing());
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Total match: runs `on_just` with the value or `on_nothing`, never both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    ///
    /// let describe = |value: Maybe<i32>| {
    ///     value.match_with(|number| format!("got {number}"), || "nothing".to_string())
    /// };
    /// assert_eq!(describe(Maybe::just(4)), "got 4");
    /// assert_eq!(describe(Maybe::nothing()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<R, J, N>(self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Total match over a borrowed value.
    #[inline]
    pub fn match_ref<R, J, N>(&self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(&T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    // =========================================================================
    // Monadic Chaining
    // =========================================================================

    /// Chains a computation that may itself produce nothing.
    ///
    /// `function` runs only for `Just`; for `Nothing` it is never called and
    /// the result is `Nothing` of the new type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() };
    /// assert_eq!(Maybe::just(8).bind(half).bind(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(6).bind(half).bind(half), Maybe::nothing());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Transforms a present value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Binds a dependent computation and projects both values into a result.
    ///
    /// This is one clause of a comprehension: `x <- self; y <- binder(x);
    /// yield projection(x, y)`. The binder borrows `x` so it can be handed to
    /// the projection afterwards without cloning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    ///
    /// let greeting = Maybe::just("Ada".to_string())
    ///     .bind_map(|name| Maybe::just(name.len()), |name, length| format!("{name}:{length}"));
    /// assert_eq!(greeting, Maybe::just("Ada:3".to_string()));
    /// ```
    #[inline]
    pub fn bind_map<U, V, F, P>(self, binder: F, projection: P) -> Maybe<V>
    where
        F: FnOnce(&T) -> Maybe<U>,
        P: FnOnce(T, U) -> V,
    {
        match self {
            Self::Just(value) => match binder(&value) {
                Maybe::Just(bound) => Maybe::Just(projection(value, bound)),
                Maybe::Nothing => Maybe::Nothing,
            },
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Just(value) = self
            && predicate(&value)
        {
            return Self::Just(value);
        }
        Self::Nothing
    }

    /// Returns `other` if `self` is present, otherwise `Nothing`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Just(_) => other,
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => function(),
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just((first, second)),
            _ => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the value or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Returns the value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(3).expect_just("configured"), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_just(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Borrows the value: `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Iterates over the value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => T::default(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
    /// assert_eq!(Maybe::just(Maybe::<i32>::nothing()).flatten(), Maybe::nothing());
    /// assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, V: FromIterator<T>> FromIterator<Maybe<T>> for Maybe<V> {
    /// Collects present values, stopping at the first `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use varia::maybe::Maybe;
    ///
    /// let all: Maybe<Vec<i32>> = vec![Maybe::just(1), Maybe::just(2)].into_iter().collect();
    /// assert_eq!(all, Maybe::just(vec![1, 2]));
    ///
    /// let gap: Maybe<Vec<i32>> = vec![Maybe::just(1), Maybe::nothing()].into_iter().collect();
    /// assert_eq!(gap, Maybe::nothing());
    /// ```
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
