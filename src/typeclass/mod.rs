//! Type class traits for the library's value types.
//!
//! - [`Functor`]: mapping over a value in a context
//! - [`Applicative`]: lifting plain values and combining independent ones
//! - [`Monad`]: sequencing dependent computations
//! - [`Bifunctor`]: mapping over either side of a two-parameter type
//!
//! `Functor`, `Applicative` and `Monad` are implemented for
//! [`Maybe`](crate::maybe::Maybe) and `Option`; `Bifunctor` for
//! [`Variant2`](crate::variant::Variant2) and `Result`.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] emulates them
//! with a generic associated type, which is what lets `Functor::fmap` return
//! "the same container holding a different type".
//!
//! # Examples
//!
//! ```rust
//! use varia::maybe::Maybe;
//! use varia::typeclass::{Applicative, Functor, Monad};
//!
//! fn total<M>(a: M, b: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     a.map2(b, |x, y| x + y)
//! }
//!
//! assert_eq!(total(Maybe::just(1), Maybe::just(2)), Maybe::just(3));
//! assert_eq!(total(Some(1), None), None);
//!
//! let chained = Maybe::just(4).flat_map(|n| Maybe::just(n + 1)).fmap(|n| n * 2);
//! assert_eq!(chained, Maybe::just(10));
//! ```

mod applicative;
#[cfg(feature = "variant")]
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
#[cfg(feature = "variant")]
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
