//! Custom assertion helpers for domain types

use domain_product::Validation;
use domain_proposal::Proposal;

/// Asserts a validation passed, printing its message on failure
pub fn assert_valid(result: &Validation) {
    assert!(
        result.valid,
        "expected valid, got message: {:?}",
        result.message
    );
}

/// Asserts a validation failed and carries a user-facing message
pub fn assert_invalid(result: &Validation) {
    assert!(!result.valid, "expected invalid, got pass");
    assert!(
        result.message.is_some(),
        "failed validation must carry a message"
    );
}

/// Asserts the audit invariant: history is non-empty and most-recent-first
pub fn assert_history_invariants(proposal: &Proposal) {
    let entries = proposal.status_history.entries();
    assert!(!entries.is_empty(), "status history must never be empty");
    for window in entries.windows(2) {
        assert!(
            window[0].timestamp >= window[1].timestamp,
            "history must be ordered most recent first"
        );
    }
    assert_eq!(
        proposal.current_status(),
        &entries[0],
        "current status must be the head entry"
    );
}
