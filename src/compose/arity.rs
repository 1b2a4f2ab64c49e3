//! Composition with an inner function of fixed arity.
//!
//! `composeN(outer, inner)` returns a function of `N` arguments that passes
//! them to `inner` and its result to the unary `outer`. The returned closure
//! is `Fn`, so it can be called any number of times.

macro_rules! define_compose {
    (
        $(#[$meta:meta])*
        $arity:literal; $($argument:ident: $type:ident),*
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[inline]
            pub fn [<compose $arity>]<$($type,)* B, C, F, G>(
                outer: F,
                inner: G,
            ) -> impl Fn($($type),*) -> C
            where
                F: Fn(B) -> C,
                G: Fn($($type),*) -> B,
            {
                move |$($argument),*| outer(inner($($argument),*))
            }
        }
    };
}

define_compose! {
    /// Composes `outer` with a supplier: the result calls `outer(inner())`.
    ///
    /// `inner` runs again on every call; nothing is cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use varia::compose::compose0;
    ///
    /// let square = |x: i32| x * x;
    /// let composed = compose0(square, || 5);
    /// assert_eq!(composed(), 25);
    /// ```
    0;
}

define_compose! {
    /// Composes two unary functions: the result calls `outer(inner(a))`.
    ///
    /// The function form of `compose!(outer, inner)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use varia::compose::compose1;
    ///
    /// let composed = compose1(|x: i32| x * x, |x: i32| x + 5);
    /// assert_eq!(composed(4), 81);
    /// ```
    1; first: A1
}

define_compose! {
    /// Composes `outer` with a binary `inner`: the result calls `outer(inner(a, b))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use varia::compose::compose2;
    ///
    /// let composed = compose2(|x: i32| x * x, |a: i32, b: i32| a + b);
    /// assert_eq!(composed(5, 3), 64);
    /// ```
    2; first: A1, second: A2
}

define_compose! {
    /// Composes `outer` with a ternary `inner`.
    3; first: A1, second: A2, third: A3
}
