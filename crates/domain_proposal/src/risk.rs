//! Risk status classification
//!
//! The compliance decision token for a participant, independent of the
//! MIP/DFI workflow codes. The backend vocabulary is open-ended; the closed
//! enum keeps the fail-toward-pending policy in the type system instead of
//! string comparisons scattered across call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A participant's risk decision token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskStatus {
    Approved,
    Refused,
    Canceled,
    Review,
    /// Any token outside the known vocabulary (e.g. `REOPENED`)
    Other(String),
}

impl RiskStatus {
    /// Parses a backend token, case-insensitively
    pub fn from_token(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("APPROVED") {
            RiskStatus::Approved
        } else if trimmed.eq_ignore_ascii_case("REFUSED") {
            RiskStatus::Refused
        } else if trimmed.eq_ignore_ascii_case("CANCELED") {
            RiskStatus::Canceled
        } else if trimmed.eq_ignore_ascii_case("REVIEW") {
            RiskStatus::Review
        } else {
            RiskStatus::Other(trimmed.to_string())
        }
    }

    /// Returns the canonical backend token
    pub fn as_token(&self) -> &str {
        match self {
            RiskStatus::Approved => "APPROVED",
            RiskStatus::Refused => "REFUSED",
            RiskStatus::Canceled => "CANCELED",
            RiskStatus::Review => "REVIEW",
            RiskStatus::Other(token) => token,
        }
    }

    /// True when the underwriting decision is final
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RiskStatus::Approved | RiskStatus::Refused | RiskStatus::Canceled
        )
    }

    pub fn decision(&self) -> RiskDecision {
        match self {
            RiskStatus::Approved => RiskDecision::FinishedApproved,
            RiskStatus::Refused | RiskStatus::Canceled => RiskDecision::FinishedRejected,
            RiskStatus::Review | RiskStatus::Other(_) => RiskDecision::Unfinished,
        }
    }
}

impl From<String> for RiskStatus {
    fn from(token: String) -> Self {
        RiskStatus::from_token(&token)
    }
}

impl From<RiskStatus> for String {
    fn from(status: RiskStatus) -> Self {
        status.as_token().to_string()
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

/// The three-way outcome consumed by the single-proposal and operation views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDecision {
    FinishedApproved,
    FinishedRejected,
    Unfinished,
}

/// Classifies a nullable backend token
///
/// `None` means the decision is still pending; unknown tokens are likewise
/// unfinished by policy.
pub fn classify_risk(token: Option<&str>) -> RiskDecision {
    match token {
        None => RiskDecision::Unfinished,
        Some(raw) => RiskStatus::from_token(raw).decision(),
    }
}
