//! The `maybe!` comprehension macro.
//!
//! A thin layer of syntax over [`Maybe::bind`](crate::maybe::Maybe::bind) and
//! [`Maybe::map`](crate::maybe::Maybe::map). Everything it expresses can be
//! written with those two methods directly.

/// Writes a chain of dependent `Maybe` computations as a flat sequence.
///
/// # Syntax
///
/// ```text
/// maybe! {
///     pattern <= maybe_expression;   // bind: continue only on Just
///     let pattern = expression;      // pure let binding
///     yield expression               // final value, wrapped in Just
/// }
/// ```
///
/// Each `pattern <= m;` clause expands to `Maybe::bind(m, move |pattern| ...)`,
/// except the last bind before `yield`, which expands to `Maybe::map`. Clauses
/// run strictly top to bottom and a `Nothing` stops evaluation: expressions in
/// later clauses are never evaluated.
///
/// Supported patterns are identifiers, tuples, and `_`.
///
/// # Examples
///
/// ```rust
/// use varia::maybe;
/// use varia::maybe::Maybe;
///
/// let result = maybe! {
///     a <= Maybe::just(5);
///     b <= Maybe::just(7);
///     c <= Maybe::just(3);
///     yield (a + b + c).to_string()
/// };
/// assert_eq!(result, Maybe::just("15".to_string()));
///
/// let missing: Maybe<i32> = maybe! {
///     a <= Maybe::just(5);
///     b <= Maybe::<i32>::nothing();
///     yield a + b
/// };
/// assert_eq!(missing, Maybe::nothing());
/// ```
///
/// ## Let bindings and tuple patterns
///
/// ```rust
/// use varia::maybe;
/// use varia::maybe::Maybe;
///
/// let result = maybe! {
///     (low, high) <= Maybe::just((2, 10));
///     let span = high - low;
///     step <= if span > 0 { Maybe::just(span / 4) } else { Maybe::nothing() };
///     yield step
/// };
/// assert_eq!(result, Maybe::just(2));
/// ```
#[macro_export]
macro_rules! maybe {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    (yield $result:expr) => {
        $crate::maybe::Maybe::Just($result)
    };

    // ==========================================================================
    // Last bind before yield: map
    // ==========================================================================

    ($pattern:ident <= $maybe:expr ; yield $result:expr) => {
        $crate::maybe::Maybe::map($maybe, move |$pattern| $result)
    };

    (($($pattern:tt)*) <= $maybe:expr ; yield $result:expr) => {
        $crate::maybe::Maybe::map($maybe, move |($($pattern)*)| $result)
    };

    (_ <= $maybe:expr ; yield $result:expr) => {
        $crate::maybe::Maybe::map($maybe, move |_| $result)
    };

    // ==========================================================================
    // Bind: pattern <= maybe; rest
    // ==========================================================================

    ($pattern:ident <= $maybe:expr ; $($rest:tt)+) => {
        $crate::maybe::Maybe::bind($maybe, move |$pattern| {
            $crate::maybe!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $maybe:expr ; $($rest:tt)+) => {
        $crate::maybe::Maybe::bind($maybe, move |($($pattern)*)| {
            $crate::maybe!($($rest)+)
        })
    };

    (_ <= $maybe:expr ; $($rest:tt)+) => {
        $crate::maybe::Maybe::bind($maybe, move |_| {
            $crate::maybe!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expression:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expression;
            $crate::maybe!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expression:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expression;
            $crate::maybe!($($rest)+)
        }
    };

    // ==========================================================================
    // Final expression already of type Maybe
    // ==========================================================================

    ($result:expr) => {
        $result
    };
}
