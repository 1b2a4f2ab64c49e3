//! The `Unit` type - a value that carries no information.

use std::fmt;

/// The single, stateless value used as the result of effect-only handlers.
///
/// `Unit` lets procedures and value-producing functions share one generic
/// matching contract: a handler that only performs side effects returns
/// `Unit`, and `switch` is called with `R = Unit`. It is also the payload of
/// the absent case when a [`Maybe`](crate::maybe::Maybe) is viewed as a
/// [`Variant2<T, Unit>`](crate::variant::Variant2).
///
/// There is exactly one value, [`Unit::VALUE`]; every `Unit` equals every other.
/// It converts freely to and from `()`.
///
/// # Examples
///
/// ```rust
/// use varia::variant::{Unit, Variant2};
///
/// let mut seen = Vec::new();
/// let value: Variant2<i32, &str> = Variant2::First(3);
/// let result = value.switch(
///     |number| {
///         seen.push(number);
///         Unit::VALUE
///     },
///     |_| Unit::VALUE,
/// );
/// assert_eq!(result, Unit::VALUE);
/// assert_eq!(seen, vec![3]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The only `Unit` value.
    pub const VALUE: Self = Self;
}

impl fmt::Debug for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Unit")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
