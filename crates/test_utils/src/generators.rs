//! Property-Based Test Generators
//!
//! Proptest strategies for generating random domain data that maintains
//! engine invariants.

use core_kernel::{Currency, Money};
use domain_proposal::StatusCode;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for risk tokens, biased toward the known vocabulary but
/// including arbitrary unknown tokens
pub fn risk_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop_oneof![
            Just("APPROVED".to_string()),
            Just("REFUSED".to_string()),
            Just("CANCELED".to_string()),
            Just("REVIEW".to_string()),
        ],
        1 => "[A-Z]{3,10}",
    ]
}

/// Strategy for nullable risk tokens as the backend delivers them
pub fn nullable_risk_token_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::weighted(0.8, risk_token_strategy())
}

/// Strategy for arbitrary status codes, including unknown ones
pub fn status_code_strategy() -> impl Strategy<Value = StatusCode> {
    any::<u16>().prop_map(StatusCode::new)
}

/// Strategy for non-negative BRL capital amounts
pub fn capital_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::BRL))
}

/// Strategy for positive BRL capital amounts
pub fn positive_capital_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::BRL))
}

/// Strategy for contract numbers as the backend assigns them
pub fn contract_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{5,9}(-[0-9])?"
}

/// Strategy for applicant ages across every exam band
pub fn age_strategy() -> impl Strategy<Value = u32> {
    0u32..110
}

/// Strategy for decimal amounts usable as configured ceilings
pub fn ceiling_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..2_000_000i64).prop_map(|units| Decimal::new(units, 0))
}
