//! The Maybe monad.
//!
//! [`Maybe<T>`] holds either a value (`Just`) or nothing (`Nothing`). Its
//! purpose is sequencing: a chain of dependent steps, each of which may fail to
//! produce a value, written so that the first absence ends the chain.
//!
//! - [`Maybe::bind`]: chain a step that may produce nothing
//! - [`Maybe::map`]: transform a present value
//! - [`Maybe::bind_map`]: bind and project in one step
//! - [`maybe!`](crate::maybe!): flat comprehension syntax over `bind`/`map`
//!
//! `Maybe` also implements the [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative) and
//! [`Monad`](crate::typeclass::Monad) type classes, and converts to and from
//! [`Option`].
//!
//! # Examples
//!
//! Three dependent steps projected into a value of a different type:
//!
//! ```rust
//! use varia::maybe::Maybe;
//!
//! let text = Maybe::just(5)
//!     .bind(|a| Maybe::just(7).map(move |b| (a, b)))
//!     .bind(|(a, b)| Maybe::just(3).map(move |c| (a, b, c)))
//!     .map(|(a, b, c)| (a + b + c).to_string());
//! assert_eq!(text, Maybe::just("15".to_string()));
//! ```
//!
//! # Laws
//!
//! - **Left identity**: `Maybe::just(a).bind(f) == f(a)`
//! - **Right identity**: `m.bind(Maybe::just) == m`
//! - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`

mod maybe_macro;
mod value;

pub use value::Maybe;

// Re-export the macro (already at crate root via #[macro_export])
pub use crate::maybe;
