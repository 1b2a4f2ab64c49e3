//! Integration tests for the Maybe monad and the `maybe!` macro.

#![cfg(feature = "maybe")]

use std::cell::Cell;

use rstest::rstest;
use varia::maybe;
use varia::maybe::Maybe;

fn parse(text: &str) -> Maybe<i32> {
    text.parse().ok().into()
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn three_step_chain_sums() {
    let total = parse("5")
        .bind(|a| parse("7").map(move |b| a + b))
        .bind(|sum| parse("3").map(move |c| sum + c));
    assert_eq!(total, Maybe::just(15));
}

#[rstest]
fn three_step_chain_projects_to_string() {
    let text = parse("5")
        .bind(|a| parse("7").map(move |b| (a, b)))
        .bind(|(a, b)| parse("3").map(move |c| (a + b + c).to_string()));
    assert_eq!(text, Maybe::just("15".to_string()));
}

#[rstest]
#[case("x", "7", "3")]
#[case("5", "x", "3")]
#[case("5", "7", "x")]
fn absence_at_any_step_short_circuits(#[case] first: &str, #[case] second: &str, #[case] third: &str) {
    let projections = Cell::new(0);
    let total = parse(first)
        .bind(|a| parse(second).map(move |b| a + b))
        .bind(|sum| parse(third).map(move |c| sum + c))
        .map(|sum| {
            projections.set(projections.get() + 1);
            sum
        });
    assert_eq!(total, Maybe::nothing());
    assert_eq!(projections.get(), 0);
}

#[rstest]
fn later_steps_are_never_evaluated_after_nothing() {
    let evaluated = Cell::new(false);
    let result = Maybe::<i32>::nothing().bind(|value| {
        evaluated.set(true);
        Maybe::just(value)
    });
    assert_eq!(result, Maybe::nothing());
    assert!(!evaluated.get());
}

#[rstest]
fn bind_map_projects_both_values() {
    let result = parse("5").bind_map(|a| parse("7").map(|b| a * b), |a, product| a + product);
    assert_eq!(result, Maybe::just(40));
}

// =============================================================================
// Comprehension Macro
// =============================================================================

#[rstest]
fn macro_chain_yields_string() {
    let result = maybe! {
        a <= parse("5");
        b <= parse("7");
        c <= parse("3");
        yield (a + b + c).to_string()
    };
    assert_eq!(result, Maybe::just("15".to_string()));
}

#[rstest]
fn macro_stops_at_first_nothing() {
    let calls = Cell::new(0);
    let counted = |text: &str| {
        calls.set(calls.get() + 1);
        parse(text)
    };
    let result = maybe! {
        a <= counted("5");
        b <= counted("seven");
        c <= counted("3");
        yield a + b + c
    };
    assert_eq!(result, Maybe::nothing());
    assert_eq!(calls.get(), 2);
}

// =============================================================================
// Agreement with Option
// =============================================================================

#[rstest]
#[case(Some(4))]
#[case(None)]
fn option_round_trip(#[case] option: Option<i32>) {
    let maybe = Maybe::from(option);
    assert_eq!(maybe.is_just(), option.is_some());
    assert_eq!(maybe.into_option(), option);
}

#[rstest]
fn collects_all_or_nothing() {
    let all: Maybe<Vec<i32>> = ["1", "2", "3"].iter().map(|text| parse(text)).collect();
    let some: Maybe<Vec<i32>> = ["1", "x", "3"].iter().map(|text| parse(text)).collect();
    assert_eq!(all, Maybe::just(vec![1, 2, 3]));
    assert_eq!(some, Maybe::nothing());
}

#[rstest]
fn iterates_zero_or_one_item() {
    assert_eq!(Maybe::just(3).into_iter().count(), 1);
    assert_eq!(Maybe::<i32>::nothing().iter().count(), 0);
}

#[rstest]
#[case(Maybe::just(2), Maybe::just(2))]
#[case(Maybe::just(3), Maybe::nothing())]
#[case(Maybe::nothing(), Maybe::nothing())]
fn filter_keeps_matching_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(input.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn defaults_and_alternatives() {
    assert_eq!(Maybe::<i32>::nothing().unwrap_or(9), 9);
    assert_eq!(Maybe::<i32>::nothing().unwrap_or_default(), 0);
    assert_eq!(Maybe::nothing().or(Maybe::just(1)), Maybe::just(1));
    assert_eq!(Maybe::just(1).zip(Maybe::just('a')), Maybe::just((1, 'a')));
    assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
}

#[rstest]
#[should_panic(expected = "expected a parsed number")]
fn expect_just_panics_on_nothing() {
    let _ = parse("nope").expect_just("expected a parsed number");
}
