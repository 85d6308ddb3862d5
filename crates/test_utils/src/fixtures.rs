//! Test Fixtures
//!
//! Pre-built domain data for common test scenarios. Dates are pinned so
//! age-dependent assertions stay stable.

use chrono::NaiveDate;
use core_kernel::{Currency, Customer, Gender, Money, ProductId};
use domain_product::{
    AgeConfig, CapitalConfig, FinalAgeLimit, Product, ProductConfiguration, ProductFamily,
    VariableLimit,
};
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;
use rust_decimal_macros::dec;

/// The reference "today" used by age-sensitive fixtures
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Customer fixtures with known ages relative to [`reference_date`]
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// A 34-year-old male applicant
    pub fn adult_male() -> Customer {
        Customer::new(
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            Gender::Male,
            fake_document(),
        )
    }

    /// A 52-year-old female applicant, inside the gender-exam band
    pub fn female_52() -> Customer {
        Customer::new(
            NaiveDate::from_ymd_opt(1972, 3, 10).unwrap(),
            Gender::Female,
            fake_document(),
        )
    }

    /// A 62-year-old male applicant, inside the complete-panel band
    pub fn male_62() -> Customer {
        Customer::new(
            NaiveDate::from_ymd_opt(1962, 2, 20).unwrap(),
            Gender::Male,
            fake_document(),
        )
    }
}

/// Product fixtures covering every capital configuration shape
pub struct ProductFixtures;

impl ProductFixtures {
    /// Housing family product with dual MIP/DFI ceilings and age rules
    pub fn mag_habitacional() -> Product {
        Product {
            id: ProductId::new(),
            name: "Habitacional MAG".to_string(),
            aliases: vec!["MAG Habitacional".to_string()],
            family: ProductFamily::MagHabitacional,
            configuration: Some(ProductConfiguration {
                age: Some(AgeConfig {
                    min_age: Some(18),
                    max_age: Some(75),
                    final_age_limit: Some(FinalAgeLimit {
                        years: 80,
                        months: 6,
                        days: 0,
                    }),
                }),
                capital: Some(CapitalConfig {
                    mip_limit: Some(Money::new(dec!(2_000_000), Currency::BRL)),
                    dfi_limit: Some(Money::new(dec!(5_000_000), Currency::BRL)),
                    ..Default::default()
                }),
            }),
        }
    }

    /// FHE Poupex product with a fixed flat ceiling
    pub fn fhe_poupex() -> Product {
        Product {
            id: ProductId::new(),
            name: "FHE Poupex Vida".to_string(),
            aliases: vec![],
            family: ProductFamily::FhePoupex,
            configuration: Some(ProductConfiguration {
                age: Some(AgeConfig {
                    min_age: Some(18),
                    max_age: Some(70),
                    final_age_limit: None,
                }),
                capital: Some(CapitalConfig {
                    fixed_limit: Some(Money::new(dec!(350_000), Currency::BRL)),
                    ..Default::default()
                }),
            }),
        }
    }

    /// Generic product with an age-tiered ceiling and a known alias
    pub fn home_equity() -> Product {
        Product {
            id: ProductId::new(),
            name: "Home Equity".to_string(),
            aliases: vec!["HDI Home Equity".to_string()],
            family: ProductFamily::Other("HOME_EQUITY".to_string()),
            configuration: Some(ProductConfiguration {
                age: None,
                capital: Some(CapitalConfig {
                    variable_limit: Some(VariableLimit {
                        under_60: Money::new(dec!(1_500_000), Currency::BRL),
                        over_60: Money::new(dec!(600_000), Currency::BRL),
                        age_threshold: Some(60),
                    }),
                    ..Default::default()
                }),
            }),
        }
    }

    /// Product without any declared configuration
    pub fn unconfigured() -> Product {
        Product {
            id: ProductId::new(),
            name: "Produto Sem Configuração".to_string(),
            aliases: vec![],
            family: ProductFamily::Other("GENERIC".to_string()),
            configuration: None,
        }
    }

    /// The full catalog snapshot handed to the resolver in tests
    pub fn catalog() -> Vec<Product> {
        vec![
            Self::mag_habitacional(),
            Self::fhe_poupex(),
            Self::home_equity(),
            Self::unconfigured(),
        ]
    }
}

fn fake_document() -> String {
    NumberWithFormat("###########").fake()
}
