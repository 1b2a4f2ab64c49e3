//! Procedural macros for varia.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a closure or function of any arity (at least 2) into
//!   curried form
//!
//! The declarative `curry2!` .. `curry6!` macros in `varia::compose` cover the
//! common fixed arities; `curry!` is the general form.
//!
//! # Example
//!
//! ```rust,ignore
//! use varia::curry;
//!
//! let add = curry!(|a: i32, b: i32, c: i32| a + b + c);
//! let add_three = add(1)(2);
//! assert_eq!(add_three(3), 6);
//! assert_eq!(add_three(10), 13);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a multi-argument closure or function into curried form.
///
/// # Syntax
///
/// - `curry!(|a, b, ..| body)`: arity taken from the closure parameters
/// - `curry!(function_path, arity)`: arity given as an integer literal
///
/// The result is a chain of `Fn` closures taking one argument each. Partial
/// applications can be stored and saturated repeatedly; every argument except
/// the last is shared through `Rc` and cloned on each call, so those argument
/// types must implement [`Clone`]. Because of the `Rc` sharing the curried
/// closures are neither `Send` nor `Sync`.
///
/// # Errors
///
/// Fails to compile when the arity is below 2, when the arity is not an
/// integer literal, or when the input is neither a closure nor a path.
///
/// # Examples
///
/// ```rust,ignore
/// use varia::curry;
///
/// fn add(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry!(add, 4);
/// let five_and_three = curried(5)(3);
/// assert_eq!(five_and_three(1)(2), 11);
/// assert_eq!(five_and_three(3)(4), 15);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as curry::CurryInput);
    curry::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
