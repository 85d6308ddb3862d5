//! Product configuration model
//!
//! Mirrors the backend product payload. Configuration values are owned by
//! the backend and passed in as a read-only snapshot; the engine never
//! fabricates a limit the product does not declare.

use serde::{Deserialize, Serialize};

use core_kernel::{AgeBreakdown, Money, ProductId};

/// Product family, driving message phrasing and configuration shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductFamily {
    /// Housing loan family with distinct MIP and DFI ceilings
    MagHabitacional,
    FhePoupex,
    Other(String),
}

impl ProductFamily {
    pub fn from_token(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("MAG_HABITACIONAL") {
            ProductFamily::MagHabitacional
        } else if trimmed.eq_ignore_ascii_case("FHE_POUPEX") {
            ProductFamily::FhePoupex
        } else {
            ProductFamily::Other(trimmed.to_string())
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            ProductFamily::MagHabitacional => "MAG_HABITACIONAL",
            ProductFamily::FhePoupex => "FHE_POUPEX",
            ProductFamily::Other(token) => token,
        }
    }
}

impl From<String> for ProductFamily {
    fn from(token: String) -> Self {
        ProductFamily::from_token(&token)
    }
}

impl From<ProductFamily> for String {
    fn from(family: ProductFamily) -> Self {
        family.as_token().to_string()
    }
}

/// The insurability ceiling at contract end, compared field-by-field:
/// years first, months only on equal years, days only on equal months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalAgeLimit {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl FinalAgeLimit {
    pub fn as_breakdown(&self) -> AgeBreakdown {
        AgeBreakdown::new(self.years, self.months, self.days)
    }
}

/// Declared age rules for a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeConfig {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub final_age_limit: Option<FinalAgeLimit>,
}

/// Age-tiered ceiling; `age >= age_threshold` selects the over tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableLimit {
    pub under_60: Money,
    pub over_60: Money,
    pub age_threshold: Option<u32>,
}

impl VariableLimit {
    pub const DEFAULT_AGE_THRESHOLD: u32 = 60;

    pub fn threshold(&self) -> u32 {
        self.age_threshold.unwrap_or(Self::DEFAULT_AGE_THRESHOLD)
    }
}

/// Declared capital ceilings; which fields are present depends on the family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CapitalConfig {
    pub fixed_limit: Option<Money>,
    pub absolute_max: Option<Money>,
    pub variable_limit: Option<VariableLimit>,
    /// MIP ceiling for the dual-ceiling housing family
    pub mip_limit: Option<Money>,
    /// DFI ceiling for the dual-ceiling housing family
    pub dfi_limit: Option<Money>,
}

/// A product's declared ruleset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductConfiguration {
    pub age: Option<AgeConfig>,
    pub capital: Option<CapitalConfig>,
}

/// A backend product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Known aliases; resolution matches any of them case-insensitively
    #[serde(default)]
    pub aliases: Vec<String>,
    pub family: ProductFamily,
    pub configuration: Option<ProductConfiguration>,
}

impl Product {
    /// The capital configuration, when declared
    pub fn capital_config(&self) -> Option<&CapitalConfig> {
        self.configuration.as_ref().and_then(|c| c.capital.as_ref())
    }

    /// The age configuration, when declared
    pub fn age_config(&self) -> Option<&AgeConfig> {
        self.configuration.as_ref().and_then(|c| c.age.as_ref())
    }
}
