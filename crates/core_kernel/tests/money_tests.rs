//! Tests for Money value objects and pt-BR formatting

use core_kernel::{Currency, Money, MoneyError};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_capital_amounts_are_non_negative() {
    assert!(Money::non_negative(dec!(150000), Currency::BRL).is_ok());
    assert!(Money::non_negative(dec!(0), Currency::BRL).is_ok());
    assert!(matches!(
        Money::non_negative(dec!(-0.01), Currency::BRL),
        Err(MoneyError::NegativeAmount(_))
    ));
}

#[test]
fn test_zero_dfi_capital_means_not_applicable() {
    let capital = Money::zero(Currency::BRL);
    assert!(capital.is_zero());
}

#[test]
fn test_ceiling_comparison() {
    let requested = Money::new(dec!(800000.01), Currency::BRL);
    let ceiling = Money::new(dec!(800000), Currency::BRL);
    assert!(requested.exceeds(&ceiling).unwrap());
    assert!(!ceiling.exceeds(&ceiling).unwrap());
}

#[test]
fn test_pt_br_formatting_for_messages() {
    assert_eq!(
        Money::new(dec!(800000), Currency::BRL).display_pt_br(),
        "R$ 800.000,00"
    );
    assert_eq!(
        Money::new(dec!(1500000.75), Currency::BRL).display_pt_br_whole(),
        "R$ 1.500.001"
    );
    assert_eq!(Money::new(dec!(999), Currency::BRL).display_pt_br(), "R$ 999,00");
}

#[test]
fn test_serde_roundtrip() {
    let money = Money::new(dec!(123456.78), Currency::BRL);
    let json = serde_json::to_string(&money).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(money, back);
}

proptest! {
    #[test]
    fn prop_new_always_rounds_to_two_places(minor in -1_000_000_000i64..1_000_000_000i64) {
        let money = Money::new(Decimal::new(minor, 3), Currency::BRL);
        prop_assert!(money.amount().scale() <= 2);
    }

    #[test]
    fn prop_exceeds_is_irreflexive(minor in 0i64..1_000_000_000i64) {
        let money = Money::from_minor(minor, Currency::BRL);
        prop_assert!(!money.exceeds(&money).unwrap());
    }
}
