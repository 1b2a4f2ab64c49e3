//! Function composition and currying.
//!
//! - [`compose!`]: right-to-left composition of unary functions
//! - [`compose0`], [`compose1`], [`compose2`], [`compose3`]: composition with
//!   an inner function of zero to three arguments
//! - [`curry2!`] through [`curry6!`]: fixed-arity currying
//! - `curry!` (feature `derive`): currying of any arity from 2 up
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`flip`]: swaps the arguments of a binary function
//!
//! Function values cannot be null in Rust, so none of these operations has a
//! runtime precondition: every argument is checked by the compiler.
//!
//! # Examples
//!
//! ```
//! use varia::compose::{compose0, compose2};
//! use varia::{compose, curry4};
//!
//! fn square(x: i32) -> i32 { x * x }
//!
//! assert_eq!(compose0(square, || 5)(), 25);
//! assert_eq!(compose!(square, |x: i32| x + 5)(4), 81);
//! assert_eq!(compose2(square, |a: i32, b: i32| a + b)(5, 3), 64);
//!
//! let add = |a: i32, b: i32, c: i32, d: i32| a + b + c + d;
//! let five_and_three = curry4!(add)(5)(3);
//! assert_eq!(five_and_three(1)(2), 11);
//! assert_eq!(five_and_three(3)(4), 15);
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//!
//! ## Currying
//!
//! - **Equivalence**: `curryN!(f)(a1)..(aN) == f(a1, .., aN)`
//! - **Reuse**: a stored partial application gives the same result as a fresh
//!   chain for every saturation
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod arity;
mod compose_macro;
mod curry_macro;
mod utils;

pub use arity::{compose0, compose1, compose2, compose3};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;

#[cfg(feature = "derive")]
pub use varia_derive::curry;
