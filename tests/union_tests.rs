//! Integration tests for discriminated unions (variants with a common view).

#![cfg(feature = "variant")]

use std::fmt::Display;
use std::path::{Path, PathBuf};

use rstest::rstest;
use varia::maybe::Maybe;
use varia::variant::{Case, DiscriminatedUnion2, DiscriminatedUnion3, Flatten, Variant2, VariantWithCommon2};

// =============================================================================
// Common Types
// =============================================================================

trait Animal {
    fn name(&self) -> String;
    fn legs(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq)]
struct Dog {
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Bird;

impl Animal for Dog {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn legs(&self) -> u32 {
        4
    }
}

impl Animal for Bird {
    fn name(&self) -> String {
        "bird".to_string()
    }

    fn legs(&self) -> u32 {
        2
    }
}

impl AsRef<dyn Animal> for Dog {
    fn as_ref(&self) -> &(dyn Animal + 'static) {
        self
    }
}

impl AsRef<dyn Animal> for Bird {
    fn as_ref(&self) -> &(dyn Animal + 'static) {
        self
    }
}

type Pet = DiscriminatedUnion2<dyn Animal, Dog, Bird>;

// =============================================================================
// Value Projection
// =============================================================================

#[rstest]
fn value_projects_to_trait_object() {
    let dog = Pet::of_first(Dog {
        name: "rex".to_string(),
    });
    let bird = Pet::of_second(Bird);

    assert_eq!(dog.value().name(), "rex");
    assert_eq!(dog.value().legs(), 4);
    assert_eq!(bird.value().legs(), 2);
}

#[rstest]
fn value_never_fails_for_any_case() {
    let pets = [
        Pet::of_first(Dog {
            name: "a".to_string(),
        }),
        Pet::of_second(Bird),
    ];
    let legs: u32 = pets.iter().map(|pet| pet.value().legs()).sum();
    assert_eq!(legs, 6);
}

#[rstest]
#[case(DiscriminatedUnion3::of_first(PathBuf::from("/tmp/a")), "/tmp/a")]
#[case(DiscriminatedUnion3::of_second("/etc"), "/etc")]
#[case(DiscriminatedUnion3::of_third(String::from("relative")), "relative")]
fn value_over_unsized_path(
    #[case] union: DiscriminatedUnion3<Path, PathBuf, &'static str, String>,
    #[case] expected: &str,
) {
    assert_eq!(union.value(), Path::new(expected));
}

#[rstest]
fn alias_is_the_same_type() {
    let union: VariantWithCommon2<str, String, &str> = DiscriminatedUnion2::of_second("alias");
    let same: DiscriminatedUnion2<str, String, &str> = union.clone();
    assert_eq!(union, same);
    assert_eq!(same.value(), "alias");
}

#[rstest]
fn into_value_converts_owned() {
    let union: DiscriminatedUnion2<String, String, &str> = DiscriminatedUnion2::of_second("owned");
    assert_eq!(union.into_value(), "owned".to_string());
}

// =============================================================================
// Matching
// =============================================================================

#[rstest]
fn switch_matches_the_active_case() {
    let bird = Pet::of_second(Bird);
    let description = bird.switch(|dog| format!("dog {}", dog.name), |_| "bird".to_string());
    assert_eq!(description, "bird");
}

#[rstest]
fn predicates_and_accessors() {
    let dog = Pet::of_first(Dog {
        name: "fido".to_string(),
    });
    assert!(dog.is_first());
    assert!(!dog.is_second());
    assert_eq!(dog.case(), Case::First);
    assert_eq!(dog.second_ref(), Maybe::nothing());
    assert_eq!(
        dog.first(),
        Maybe::just(Dog {
            name: "fido".to_string()
        })
    );
}

#[rstest]
fn cases_require_every_handler() {
    let bird = Pet::of_second(Bird);
    let error = bird
        .cases::<u32>()
        .on_second(|bird| bird.legs())
        .try_run()
        .unwrap_err();
    assert_eq!(error.to_string(), "switch: missing handler for the first case");
}

#[rstest]
fn variant_round_trip() {
    let variant: Variant2<String, &str> = Variant2::First("x".to_string());
    let union: DiscriminatedUnion2<str, String, &str> = DiscriminatedUnion2::from_variant(variant.clone());
    assert_eq!(union.as_variant(), &variant);
    assert_eq!(union.into_variant(), variant);
}

// =============================================================================
// Nesting and Flattening
// =============================================================================

fn render<T: AsRef<str> + ?Sized>(text: &T) -> String {
    text.as_ref().to_uppercase()
}

#[rstest]
fn nested_union_is_itself_an_alternative() {
    type Inner = DiscriminatedUnion2<str, String, &'static str>;
    type Outer = DiscriminatedUnion2<str, Inner, &'static str>;

    let outer = Outer::of_first(Inner::of_second("nested"));
    assert_eq!(outer.value(), "nested");
    assert_eq!(render(&outer), "NESTED");
}

#[rstest]
#[case(DiscriminatedUnion2::of_first(DiscriminatedUnion2::of_first("inner owned".to_string())), Case::First, "inner owned")]
#[case(DiscriminatedUnion2::of_first(DiscriminatedUnion2::of_second("inner static")), Case::Second, "inner static")]
#[case(DiscriminatedUnion2::of_second("outer static"), Case::Second, "outer static")]
fn flatten_keeps_inner_case(
    #[case] nested: DiscriminatedUnion2<str, DiscriminatedUnion2<str, String, &'static str>, &'static str>,
    #[case] case: Case,
    #[case] text: &str,
) {
    let flat = nested.flatten();
    assert_eq!(flat.case(), case);
    assert_eq!(flat.value(), text);
}

#[rstest]
fn flatten_third_of_three() {
    type Inner = DiscriminatedUnion3<str, String, &'static str, Box<str>>;
    let nested: DiscriminatedUnion3<str, String, &'static str, Inner> =
        DiscriminatedUnion3::of_third(Inner::of_third("boxed".into()));
    let flat = nested.flatten();
    assert!(flat.is_third());
    assert_eq!(flat.value(), "boxed");
}

struct Celsius(i32);

impl AsRef<dyn Display> for Celsius {
    fn as_ref(&self) -> &(dyn Display + 'static) {
        &self.0
    }
}

#[rstest]
fn display_as_common_type() {
    let union: DiscriminatedUnion2<dyn Display, Celsius, Celsius> = DiscriminatedUnion2::of_second(Celsius(21));
    assert_eq!(union.value().to_string(), "21");
}
