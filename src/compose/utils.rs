//! Small combinators used alongside composition and currying.

/// Returns its argument unchanged.
///
/// The unit of composition: `compose!(identity, f)` and `compose!(f, identity)`
/// behave as `f`.
///
/// # Examples
///
/// ```
/// use varia::compose::identity;
///
/// assert_eq!(identity(7), 7);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its argument and yields a clone of `value`.
///
/// # Examples
///
/// ```
/// use varia::compose::constant;
/// use varia::variant::Variant2;
///
/// let value: Variant2<i32, &str> = Variant2::Second("ignored");
/// let label = value.switch(constant("number"), constant("text"));
/// assert_eq!(label, "text");
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Examples
///
/// ```
/// use varia::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
