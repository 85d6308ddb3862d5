//! Operation aggregate status

use serde::{Deserialize, Serialize};

use domain_proposal::{classify_risk, RiskDecision, RiskStatus};

/// The rolled-up status of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    InProgress,
    Approved,
    Rejected,
}

/// Reduces the participants' risk tokens into one aggregate status
///
/// First match wins, in order:
/// 1. any absent decision, any `REVIEW`, or any token outside the finished
///    vocabulary (e.g. `REOPENED`) keeps the operation in progress —
///    unknown tokens must never be misreported as a final decision;
/// 2. all participants approved: approved;
/// 3. otherwise every decision is final but not unanimously approved:
///    rejected.
///
/// An empty operation has no decided participants and is in progress.
pub fn compute_operation_status<'a, I>(risk_statuses: I) -> OperationStatus
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut participants = 0usize;
    let mut approved = 0usize;

    for token in risk_statuses {
        participants += 1;
        match classify_risk(token) {
            RiskDecision::Unfinished => {
                if let Some(raw) = token {
                    if let RiskStatus::Other(other) = RiskStatus::from_token(raw) {
                        tracing::debug!(token = %other, "unmapped risk token holds operation in progress");
                    }
                }
                return OperationStatus::InProgress;
            }
            RiskDecision::FinishedApproved => approved += 1,
            RiskDecision::FinishedRejected => {}
        }
    }

    if participants == 0 {
        OperationStatus::InProgress
    } else if approved == participants {
        OperationStatus::Approved
    } else {
        OperationStatus::Rejected
    }
}
