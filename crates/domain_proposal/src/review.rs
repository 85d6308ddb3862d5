//! Review transitions
//!
//! Reanalysis, review and cancel are three independent one-way transitions.
//! The engine's responsibility is only to map `(action, approved)` to the
//! target code and description; eligibility is decided by the backend.

use serde::{Deserialize, Serialize};

use crate::proposal::{CoverageFlow, Proposal};
use crate::status::StatusCode;

/// The three one-way compliance actions on a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    /// Reopen the process for reanalysis
    Reopen,
    /// Record the approve/refuse decision of a review
    Decide,
    /// Cancel the process
    Cancel,
}

/// The resolved target of a review action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewTransition {
    pub code: StatusCode,
    pub description: &'static str,
}

/// Maps `(action, approved)` to the status transition it produces
pub fn review_transition(action: ReviewAction, approved: bool) -> ReviewTransition {
    let (code, description) = match (action, approved) {
        (ReviewAction::Reopen, true) => (38, "Processo reanalisado"),
        (ReviewAction::Reopen, false) => (36, "Processo reanalisado e recusado"),
        (ReviewAction::Decide, true) => (41, "Processo revisado"),
        (ReviewAction::Decide, false) => (37, "Processo revisado e recusado"),
        (ReviewAction::Cancel, true) => (42, "Processo excluído"),
        (ReviewAction::Cancel, false) => (24, "Proposta cancelada"),
    };
    ReviewTransition {
        code: StatusCode::new(code),
        description,
    }
}

impl Proposal {
    /// Applies a review action to the main flow
    pub fn apply_review(&mut self, action: ReviewAction, approved: bool) {
        let transition = review_transition(action, approved);
        // MIP is the process-level flow; review actions never target DFI, so
        // this cannot fail.
        let _ = self.apply_status(CoverageFlow::Mip, transition.code, transition.description);
    }
}
