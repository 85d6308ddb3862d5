//! Customer value objects shared by the proposal and validation domains

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::temporal::age_in_years;

/// Gender as declared on the health questionnaire
///
/// The backend encodes gender as a single letter; anything other than
/// `M`/`F` maps to `Unspecified` and simply opts out of gender-specific
/// exam requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    /// Parses the backend single-letter encoding
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "M" | "m" => Gender::Male,
            "F" | "f" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

/// The applicant attached to a proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Date of birth
    pub birthdate: NaiveDate,
    /// Declared gender
    pub gender: Gender,
    /// Identity document (CPF)
    pub document: String,
}

impl Customer {
    pub fn new(birthdate: NaiveDate, gender: Gender, document: impl Into<String>) -> Self {
        Self {
            birthdate,
            gender,
            document: document.into(),
        }
    }

    /// Age in completed years at the given reference date
    pub fn age_at(&self, reference: NaiveDate) -> u32 {
        age_in_years(self.birthdate, reference)
    }
}
