//! Age and capital validation
//!
//! Every decision here fails toward "unblocked": a product without the
//! relevant configuration, or a ceiling that cannot be compared, reports
//! valid rather than inventing a restriction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{add_months, age_between, age_in_years, Money};

use crate::product::{AgeConfig, Product, ProductFamily};

/// Which coverage a capital amount belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoverageKind {
    Mip,
    Dfi,
}

/// The outcome of a validation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub valid: bool,
    /// The effective ceiling, when one applied
    pub max_allowed: Option<Money>,
    /// User-facing rationale, present on failure
    pub message: Option<String>,
}

impl Validation {
    fn pass() -> Self {
        Self {
            valid: true,
            max_allowed: None,
            message: None,
        }
    }

    fn pass_with_ceiling(ceiling: Money) -> Self {
        Self {
            valid: true,
            max_allowed: Some(ceiling),
            message: None,
        }
    }

    fn fail(ceiling: Option<Money>, message: String) -> Self {
        Self {
            valid: false,
            max_allowed: ceiling,
            message: Some(message),
        }
    }

    pub fn passed(&self) -> bool {
        self.valid
    }
}

/// Validates the applicant's current age against the product's entry bounds
pub fn validate_age(config: Option<&AgeConfig>, birthdate: NaiveDate, today: NaiveDate) -> Validation {
    let Some(config) = config else {
        return Validation::pass();
    };

    let age = age_in_years(birthdate, today);

    if let Some(min_age) = config.min_age {
        if age < min_age {
            return Validation::fail(
                None,
                format!("A idade mínima para contratação é {min_age} anos"),
            );
        }
    }
    if let Some(max_age) = config.max_age {
        if age > max_age {
            return Validation::fail(
                None,
                format!("A idade máxima para contratação é {max_age} anos"),
            );
        }
    }

    Validation::pass()
}

/// Validates the applicant's age at contract end against the final-age ceiling
///
/// The final age is the exact age attained at `today + deadline_months`,
/// compared field-by-field against the limit: years first, months only when
/// years are equal, days only when years and months are equal. Reaching the
/// limit exactly is valid; one day past it is not.
pub fn validate_final_age(
    config: Option<&AgeConfig>,
    birthdate: NaiveDate,
    deadline_months: u32,
    today: NaiveDate,
) -> Validation {
    let Some(limit) = config.and_then(|c| c.final_age_limit.as_ref()) else {
        return Validation::pass();
    };

    let contract_end = add_months(today, deadline_months);
    let final_age = age_between(birthdate, contract_end);

    if final_age <= limit.as_breakdown() {
        Validation::pass()
    } else {
        Validation::fail(
            None,
            format!(
                "A idade ao final do contrato não pode ultrapassar {} anos, {} meses e {} dias",
                limit.years, limit.months, limit.days
            ),
        )
    }
}

/// Validates a requested capital against the product's declared ceiling
///
/// Ceiling resolution, first declared shape wins:
/// 1. the dual MIP/DFI ceiling when the housing family declares one;
/// 2. the fixed flat ceiling;
/// 3. the age-tiered ceiling (`age >= threshold` selects the over tier);
/// 4. the absolute maximum;
/// 5. nothing declared: always valid.
pub fn validate_capital(
    product: Option<&Product>,
    requested: Money,
    coverage: CoverageKind,
    age: u32,
) -> Validation {
    let Some(product) = product else {
        return Validation::pass();
    };
    let Some(config) = product.capital_config() else {
        return Validation::pass();
    };

    let dual_ceiling = if product.family == ProductFamily::MagHabitacional {
        match coverage {
            CoverageKind::Mip => config.mip_limit,
            CoverageKind::Dfi => config.dfi_limit,
        }
    } else {
        None
    };

    let ceiling = dual_ceiling
        .or(config.fixed_limit)
        .or_else(|| {
            config.variable_limit.as_ref().map(|variable| {
                if age >= variable.threshold() {
                    variable.over_60
                } else {
                    variable.under_60
                }
            })
        })
        .or(config.absolute_max);

    let Some(ceiling) = ceiling else {
        return Validation::pass();
    };

    match requested.exceeds(&ceiling) {
        Ok(true) => Validation::fail(
            Some(ceiling),
            ceiling_message(&product.family, coverage, ceiling),
        ),
        Ok(false) => Validation::pass_with_ceiling(ceiling),
        Err(error) => {
            // A currency mismatch is a caller data problem, not a reason to
            // block the proposal.
            tracing::warn!(%error, product = %product.name, "capital ceiling not comparable");
            Validation::pass_with_ceiling(ceiling)
        }
    }
}

fn ceiling_message(family: &ProductFamily, coverage: CoverageKind, ceiling: Money) -> String {
    match family {
        ProductFamily::MagHabitacional => {
            let label = match coverage {
                CoverageKind::Mip => "MIP",
                CoverageKind::Dfi => "DFI",
            };
            format!(
                "O capital {label} não pode exceder {}",
                ceiling.display_pt_br_whole()
            )
        }
        ProductFamily::FhePoupex => format!(
            "O capital máximo permitido para o produto é {}",
            ceiling.display_pt_br_whole()
        ),
        ProductFamily::Other(_) => format!(
            "O capital solicitado excede o limite de {}",
            ceiling.display_pt_br()
        ),
    }
}
