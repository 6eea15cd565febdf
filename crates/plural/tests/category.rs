//! Tests for quantity classification.

use plural::{Category, Quantity, VariantRequest};
use proptest::prelude::*;

#[test]
fn integers_zero_and_one() {
    assert_eq!(Quantity::from(0).category(), Category::Zero);
    assert_eq!(Quantity::from(1).category(), Category::Singular);
    assert_eq!(Quantity::from(2).category(), Category::Plural);
}

#[test]
fn negative_integers_are_plural() {
    assert_eq!(Quantity::from(-1).category(), Category::Plural);
    assert_eq!(Quantity::from(i64::MIN).category(), Category::Plural);
}

#[test]
fn every_integer_width_classifies_the_same() {
    assert_eq!(Quantity::from(0_u8).category(), Category::Zero);
    assert_eq!(Quantity::from(1_u64).category(), Category::Singular);
    assert_eq!(Quantity::from(1_usize).category(), Category::Singular);
    assert_eq!(Quantity::from(0_i128).category(), Category::Zero);
    assert_eq!(Quantity::from(u64::MAX).category(), Category::Plural);
    assert_eq!(Quantity::from(1_u128).category(), Category::Singular);
}

#[test]
fn oversized_u128_saturates_to_plural() {
    assert_eq!(Quantity::from(u128::MAX), Quantity::Integer(i128::MAX));
    assert_eq!(Quantity::from(u128::MAX).category(), Category::Plural);
}

#[test]
fn floats_are_always_plural() {
    assert_eq!(Quantity::from(0.0).category(), Category::Plural);
    assert_eq!(Quantity::from(1.0).category(), Category::Plural);
    assert_eq!(Quantity::from(0.5_f32).category(), Category::Plural);
}

#[test]
fn booleans_are_plural() {
    assert_eq!(Quantity::from(false).category(), Category::Plural);
    assert_eq!(Quantity::from(true).category(), Category::Plural);
}

#[test]
fn text_is_plural() {
    assert_eq!(Quantity::from("none").category(), Category::Plural);
    assert_eq!(Quantity::from("1").category(), Category::Plural);
}

#[test]
fn category_index_and_name() {
    assert_eq!(Category::ALL.map(Category::index), [0, 1, 2]);
    assert_eq!(Category::Zero.to_string(), "zero");
    assert_eq!(Category::Singular.to_string(), "singular");
    assert_eq!(Category::Plural.as_str(), "plural");
}

#[test]
fn request_category_follows_quantity() {
    assert_eq!(VariantRequest::new(1).category(), Category::Singular);
    assert_eq!(VariantRequest::new("many").category(), Category::Plural);
}

#[test]
fn token_parsing() {
    assert_eq!(Quantity::from_token("42"), Quantity::Integer(42));
    assert_eq!(Quantity::from_token("-3"), Quantity::Integer(-3));
    assert_eq!(Quantity::from_token("true"), Quantity::Bool(true));
    assert_eq!(Quantity::from_token("1.5"), Quantity::Float(1.5));
    assert_eq!(Quantity::from_token("birds"), Quantity::Text("birds".into()));
}

#[test]
fn quantity_display() {
    assert_eq!(Quantity::from(7).to_string(), "7");
    assert_eq!(Quantity::from(false).to_string(), "false");
    assert_eq!(Quantity::from("x").to_string(), "x");
}

proptest! {
    #[test]
    fn integer_classification(n in any::<i64>()) {
        let expected = match n {
            0 => Category::Zero,
            1 => Category::Singular,
            _ => Category::Plural,
        };
        prop_assert_eq!(Quantity::from(n).category(), expected);
    }

    #[test]
    fn floats_never_select_zero_or_singular(f in any::<f64>()) {
        prop_assert_eq!(Quantity::from(f).category(), Category::Plural);
    }
}
