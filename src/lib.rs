//! # varia
//!
//! Closed variants, discriminated unions, a Maybe monad, and function
//! combinators for Rust.
//!
//! ## Overview
//!
//! - **Variants**: [`Variant2`](variant::Variant2) and
//!   [`Variant3`](variant::Variant3) hold exactly one of two or three typed
//!   alternatives, consumed by total matching (`switch`), partial matching with
//!   a default (`match_some`), or `Maybe`-returning accessors.
//! - **Discriminated unions**: [`DiscriminatedUnion2`](variant::DiscriminatedUnion2)
//!   and [`DiscriminatedUnion3`](variant::DiscriminatedUnion3) add a
//!   common-type view of the active payload.
//! - **Maybe**: [`Maybe`](maybe::Maybe), an optional value whose chains stop at
//!   the first absence, with the [`maybe!`] comprehension macro.
//! - **Type Classes**: Functor, Applicative, Monad, Bifunctor.
//! - **Function Composition**: `compose!`, `compose0`..`compose3`,
//!   `curry2!`..`curry6!` and the procedural `curry!`.
//!
//! ## Feature Flags
//!
//! - `variant`: variants, unions, matching builders, flattening
//! - `maybe`: the Maybe monad
//! - `typeclass`: type class traits
//! - `compose`: composition and currying
//! - `derive`: the procedural `curry!` macro
//! - `serde`: `Serialize`/`Deserialize` for variants, `Maybe`, `Unit` and `Case`
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use varia::prelude::*;
//!
//! fn parse(text: &str) -> Variant2<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("5")
//!     .second()
//!     .bind(|a| parse("7").second().map(move |b| a + b))
//!     .bind(|sum| parse("3").second().map(move |c| sum + c));
//! assert_eq!(total, Maybe::just(15));
//!
//! let described = parse("x").switch(|error| format!("error: {error}"), |n| n.to_string());
//! assert!(described.starts_with("error"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use varia::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "maybe")]
    pub use crate::maybe::Maybe;

    #[cfg(feature = "variant")]
    pub use crate::variant::*;

    #[cfg(feature = "variant")]
    pub use crate::error::VariantError;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "variant")]
pub mod variant;

#[cfg(feature = "variant")]
pub mod error;

#[cfg(feature = "variant")]
pub mod diagnostics;

#[cfg(feature = "derive")]
pub use varia_derive::curry;
