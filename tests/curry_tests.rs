//! Integration tests for the curry macros.
//!
//! The declarative `curry2!`..`curry6!` macros and the procedural `curry!`
//! must agree with direct application, and every partial application must be
//! reusable.

#![cfg(feature = "compose")]

use std::cell::Cell;

use rstest::rstest;
use varia::{curry2, curry3, curry4, curry5, curry6};

fn add4(a: i32, b: i32, c: i32, d: i32) -> i32 {
    a + b + c + d
}

// =============================================================================
// Fixed-arity Macros
// =============================================================================

#[rstest]
fn full_application_of_four() {
    assert_eq!(curry4!(add4)(5)(3)(1)(2), 11);
}

#[rstest]
fn stored_partial_is_reusable() {
    let five_and_three = curry4!(add4)(5)(3);
    assert_eq!(five_and_three(1)(2), 11);
    assert_eq!(five_and_three(3)(4), 15);
    assert_eq!(five_and_three(1)(2), 11);
}

#[rstest]
#[case(1, 2, 3)]
#[case(-4, 4, 0)]
#[case(10, 0, 10)]
fn curry2_equals_direct_call(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    let add = |x: i32, y: i32| x + y;
    assert_eq!(curry2!(add)(a)(b), expected);
    assert_eq!(add(a, b), expected);
}

#[rstest]
fn curry3_with_owned_strings() {
    let join = curry3!(|a: String, b: String, c: String| format!("{a}-{b}-{c}"));
    let prefix = join("x".to_string())("y".to_string());
    assert_eq!(prefix("z".to_string()), "x-y-z");
    assert_eq!(prefix("w".to_string()), "x-y-w");
}

#[rstest]
fn curry5_and_curry6() {
    let sum5 = curry5!(|a: u8, b: u8, c: u8, d: u8, e: u8| u32::from(a + b + c + d + e));
    assert_eq!(sum5(1)(2)(3)(4)(5), 15);

    let digits = curry6!(|a: u32, b: u32, c: u32, d: u32, e: u32, f: u32| {
        [a, b, c, d, e, f].iter().fold(0, |number, digit| number * 10 + digit)
    });
    let prefix = digits(1)(2)(3);
    assert_eq!(prefix(4)(5)(6), 123_456);
    assert_eq!(prefix(0)(0)(0), 123_000);
}

#[rstest]
fn function_runs_only_when_saturated() {
    let calls = Cell::new(0);
    let counted = |a: i32, b: i32, c: i32| {
        calls.set(calls.get() + 1);
        a * b * c
    };
    let curried = curry3!(counted);
    let partial = curried(2)(3);
    assert_eq!(calls.get(), 0);
    assert_eq!(partial(4), 24);
    assert_eq!(partial(5), 30);
    assert_eq!(calls.get(), 2);
}

#[derive(Debug)]
struct Tracked<'a> {
    clones: &'a Cell<u32>,
    value: i32,
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            clones: self.clones,
            value: self.value,
        }
    }
}

#[rstest]
fn captured_argument_is_cloned_once_per_saturation() {
    let clones = Cell::new(0);
    let offset = |base: Tracked<'_>, delta: i32| base.value + delta;
    let from_ten = curry2!(offset)(Tracked {
        clones: &clones,
        value: 10,
    });

    assert_eq!(clones.get(), 0);
    assert_eq!(from_ten(1), 11);
    assert_eq!(from_ten(2), 12);
    assert_eq!(clones.get(), 2);
}

// =============================================================================
// Procedural Macro
// =============================================================================

#[cfg(feature = "derive")]
mod procedural {
    use rstest::rstest;
    use varia::curry;

    use super::add4;

    #[rstest]
    fn path_form_matches_fixed_arity_macro() {
        let curried = curry!(add4, 4);
        let five_and_three = curried(5)(3);
        assert_eq!(five_and_three(1)(2), 11);
        assert_eq!(five_and_three(3)(4), 15);
    }

    #[rstest]
    fn closure_form() {
        let volume = curry!(|w: u32, h: u32, d: u32| w * h * d);
        let base = volume(2)(3);
        assert_eq!(base(4), 24);
        assert_eq!(base(1), 6);
    }

    #[rstest]
    fn arity_beyond_fixed_macros() {
        let sum = curry!(|a: i64, b: i64, c: i64, d: i64, e: i64, f: i64, g: i64| a + b + c + d + e + f + g);
        assert_eq!(sum(1)(2)(3)(4)(5)(6)(7), 28);
    }
}
