//! The `compose!` macro for right-to-left composition of unary functions.

/// Composes unary functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs first.
///
/// - `compose!(f)` returns `f` unchanged
/// - `compose!(f, g)` returns `move |x| f(g(x))`
/// - longer chains nest: `compose!(f, compose!(g, h))`
///
/// The composed closure is `Fn` when every part is. For an innermost function
/// taking zero, two or three arguments, use [`compose0`](crate::compose::compose0),
/// [`compose2`](crate::compose::compose2) or [`compose3`](crate::compose::compose3).
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use varia::compose;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn add_five(x: i32) -> i32 { x + 5 }
///
/// let composed = compose!(square, add_five);
/// assert_eq!(composed(4), 81);
///
/// let chain = compose!(|x: i32| x - 1, square, add_five);
/// assert_eq!(chain(4), 80);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |input| outer(inner(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn square(x: i32) -> i32 {
        x * x
    }

    #[rstest]
    fn single_function_is_unchanged() {
        let composed = compose!(square);
        assert_eq!(composed(3), 9);
    }

    #[rstest]
    #[case(4, 81)]
    #[case(0, 25)]
    #[case(-5, 0)]
    fn square_after_add_five(#[case] input: i32, #[case] expected: i32) {
        let composed = compose!(square, |x: i32| x + 5);
        assert_eq!(composed(input), expected);
    }

    #[rstest]
    fn innermost_runs_first() {
        let composed = compose!(|s: String| s.len(), |n: i32| n.to_string(), square);
        assert_eq!(composed(12), 3);
    }

    #[rstest]
    fn composed_closure_is_reusable() {
        let composed = compose!(square, square);
        assert_eq!(composed(2), 16);
        assert_eq!(composed(3), 81);
    }
}
