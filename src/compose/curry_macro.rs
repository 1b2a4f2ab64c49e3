//! The curry macro family for functions of two to six arguments.
//!
//! Each macro turns an `n`-argument function into `n` nested single-argument
//! closures. The function and every argument except the last are held in
//! `Rc`, so every closure in the chain is `Fn`: a partial application can be
//! stored and saturated any number of times. Arguments other than the last are
//! cloned on each saturation and therefore need [`Clone`].
//!
//! The `Rc` sharing makes curried closures neither `Send` nor `Sync`.
//!
//! For other arities, or to curry a closure with annotated parameters, use the
//! procedural `curry!` macro (feature `derive`).

/// Builds the nested closure chain for the `curryN!` macros.
///
/// Not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __curry_chain {
    ($function:expr; $($argument:ident),+) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry_chain!(@nest function; []; $($argument),+)
    }};

    (@nest $function:ident; [$($captured:ident)*]; $last:ident) => {
        move |$last| $function(
            $(::std::clone::Clone::clone(&*$captured),)*
            $last
        )
    };

    (@nest $function:ident; [$($captured:ident)*]; $next:ident, $($rest:ident),+) => {
        move |$next| {
            let $function = ::std::rc::Rc::clone(&$function);
            $(let $captured = ::std::rc::Rc::clone(&$captured);)*
            let $next = ::std::rc::Rc::new($next);
            $crate::__curry_chain!(@nest $function; [$($captured)* $next]; $($rest),+)
        }
    };
}

/// Converts a 2-argument function into curried form.
///
/// `curry2!(f)(a)(b)` is `f(a, b)`.
///
/// # Examples
///
/// ```
/// use varia::curry2;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// let add_five = curry2!(add)(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {
        $crate::__curry_chain!($function; first, second)
    };
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```
/// use varia::curry3;
///
/// let volume = curry3!(|width: u32, height: u32, depth: u32| width * height * depth);
/// let square_base = volume(2)(2);
/// assert_eq!(square_base(5), 20);
/// assert_eq!(square_base(1), 4);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {
        $crate::__curry_chain!($function; first, second, third)
    };
}

/// Converts a 4-argument function into curried form.
///
/// # Examples
///
/// ```
/// use varia::curry4;
///
/// fn add(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry4!(add);
/// assert_eq!(curried(5)(3)(1)(2), 11);
///
/// let five_and_three = curried(5)(3);
/// assert_eq!(five_and_three(3)(4), 15);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {
        $crate::__curry_chain!($function; first, second, third, fourth)
    };
}

/// Converts a 5-argument function into curried form.
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {
        $crate::__curry_chain!($function; first, second, third, fourth, fifth)
    };
}

/// Converts a 6-argument function into curried form.
///
/// # Examples
///
/// ```
/// use varia::curry6;
///
/// let label = curry6!(|a: &str, b: &str, c: &str, d: &str, e: &str, f: &str| {
///     [a, b, c, d, e, f].concat()
/// });
/// assert_eq!(label("v")("a")("r")("i")("a")("!"), "varia!");
/// ```
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {
        $crate::__curry_chain!($function; first, second, third, fourth, fifth, sixth)
    };
}
