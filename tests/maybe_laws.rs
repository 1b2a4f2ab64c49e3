//! Property-based tests for the Maybe monad.
//!
//! - **Functor Identity**: `m.fmap(|x| x) == m`
//! - **Functor Composition**: `m.fmap(f).fmap(g) == m.fmap(|x| g(f(x)))`
//! - **Monad Left Identity**: `Maybe::pure(a).flat_map(f) == f(a)`
//! - **Monad Right Identity**: `m.flat_map(Maybe::just) == m`
//! - **Monad Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - **Agreement with Option**: every operation matches its `Option` counterpart

#![cfg(feature = "typeclass")]

use proptest::prelude::*;
use varia::maybe::Maybe;
use varia::typeclass::{Applicative, Functor, Monad};

fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn halve(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::just(n) } else { Maybe::nothing() }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_functor_identity(value in any_maybe()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_functor_composition(value in any_maybe()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<i32>>::pure(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_monad_right_identity(value in any_maybe()) {
        prop_assert_eq!(value.flat_map(Maybe::just), value);
    }

    #[test]
    fn prop_monad_associativity(value in any_maybe()) {
        let left = value.flat_map(halve).flat_map(positive);
        let right = value.flat_map(|x| halve(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_bind_map_equals_nested_bind(value in any_maybe()) {
        let projected = value.bind_map(|x| halve(*x), |x, half| x.wrapping_add(half));
        let nested = value.bind(|x| halve(x).map(move |half| x.wrapping_add(half)));
        prop_assert_eq!(projected, nested);
    }
}

// =============================================================================
// Agreement with Option
// =============================================================================

proptest! {
    #[test]
    fn prop_map_agrees_with_option(option in any::<Option<i32>>()) {
        let maybe = Maybe::from(option).map(|n| n.wrapping_mul(3));
        prop_assert_eq!(maybe.into_option(), option.map(|n| n.wrapping_mul(3)));
    }

    #[test]
    fn prop_bind_agrees_with_option(option in any::<Option<i32>>()) {
        let maybe = Maybe::from(option).bind(halve);
        let expected = option.and_then(|n| halve(n).into_option());
        prop_assert_eq!(maybe.into_option(), expected);
    }

    #[test]
    fn prop_map2_agrees_with_option(left in any::<Option<i16>>(), right in any::<Option<i16>>()) {
        let add = |a: i16, b: i16| i32::from(a) + i32::from(b);
        let maybe = Maybe::from(left).map2(Maybe::from(right), add);
        prop_assert_eq!(maybe.into_option(), left.map2(right, add));
    }
}
