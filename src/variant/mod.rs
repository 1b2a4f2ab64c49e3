//! Closed variants: values holding exactly one of N typed alternatives.
//!
//! - [`Variant2`], [`Variant3`]: the unconstrained variants, plain enums
//! - [`DiscriminatedUnion2`], [`DiscriminatedUnion3`]: variants whose
//!   alternatives share a common view, with the [`value`](DiscriminatedUnion2::value)
//!   projection
//! - [`Unit`]: the result type of effect-only handlers
//! - [`Case`]: the discriminant
//!
//! # Consuming a variant
//!
//! | Form | Handlers | Missing handler |
//! |------|----------|-----------------|
//! | `switch` / `switch_ref` | one argument per case | impossible |
//! | `cases().on_*(..).try_run()` | supplied one at a time | [`VariantError::MissingHandler`](crate::error::VariantError) |
//! | `match_some(default).on_*(..).run()` | any subset | the default runs |
//! | `first()`, `second()`, `third()` | none | `Maybe::Nothing` |
//!
//! # Examples
//!
//! ```rust
//! use varia::maybe::Maybe;
//! use varia::variant::{Flatten, Variant2};
//!
//! fn parse(text: &str) -> Variant2<String, i64> {
//!     text.parse().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! assert_eq!(parse("42").second(), Maybe::just(42));
//! assert!(parse("x").is_first());
//!
//! let nested: Variant2<String, Variant2<String, i64>> = Variant2::Second(parse("7"));
//! assert_eq!(nested.flatten(), Variant2::Second(7));
//! ```

mod case;
mod cases;
mod flatten;
mod partial;
mod union;
mod unit;
mod variant2;
mod variant3;

pub use case::Case;
pub use cases::{Cases2, Cases3};
pub use flatten::{AtFirst, AtSecond, AtThird, Flatten, FlattenAt};
pub use partial::{PartialMatch2, PartialMatch3};
pub use union::{DiscriminatedUnion2, DiscriminatedUnion3};
pub use unit::Unit;
pub use variant2::Variant2;
pub use variant3::Variant3;

/// Another name for [`DiscriminatedUnion2`].
pub type VariantWithCommon2<C, A, B> = DiscriminatedUnion2<C, A, B>;

/// Another name for [`DiscriminatedUnion3`].
pub type VariantWithCommon3<C, A, B, D> = DiscriminatedUnion3<C, A, B, D>;
