//! Proposal domain errors

use thiserror::Error;

use crate::status::StatusCode;

/// Errors that can occur in the proposal domain
///
/// Classification is total and never errors; these variants exist only for
/// caller precondition violations the state machine surfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProposalError {
    /// Transition requested from a state that does not allow it
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// DFI transition on a proposal without DFI capital
    #[error("DFI flow not applicable: proposal carries no DFI capital")]
    DfiNotApplicable,

    /// A status history must hold at least its creation entry
    #[error("Status history cannot be empty")]
    EmptyHistory,

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),
}

impl ProposalError {
    pub fn invalid_transition(from: StatusCode, to: StatusCode) -> Self {
        ProposalError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
