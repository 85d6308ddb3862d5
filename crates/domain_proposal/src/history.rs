//! Append-only status history
//!
//! Each proposal flow keeps a full log of applied transitions, most recent
//! first. Entries are never rewritten or removed; compliance audits replay
//! the log as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProposalError;
use crate::status::StatusCode;

/// One applied transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub code: StatusCode,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusEntry {
    pub fn new(code: StatusCode, description: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            code,
            description: description.into(),
            timestamp,
        }
    }

    /// Creates an entry timestamped now
    pub fn now(code: StatusCode, description: impl Into<String>) -> Self {
        Self::new(code, description, Utc::now())
    }
}

/// The ordered transition log of one flow, most recent first
///
/// Never empty once constructed: a proposal without at least its creation
/// status does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistory {
    entries: Vec<StatusEntry>,
}

impl StatusHistory {
    /// Creates a history from its initial entry
    pub fn new(initial: StatusEntry) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Restores a history from backend entries, most recent first
    pub fn from_entries(entries: Vec<StatusEntry>) -> Result<Self, ProposalError> {
        if entries.is_empty() {
            return Err(ProposalError::EmptyHistory);
        }
        Ok(Self { entries })
    }

    /// The current status, i.e. the latest applied transition
    pub fn current(&self) -> &StatusEntry {
        &self.entries[0]
    }

    /// Prepends a new transition timestamped now
    pub fn apply(&mut self, code: StatusCode, description: impl Into<String>) {
        self.apply_at(code, description, Utc::now());
    }

    /// Prepends a new transition with an explicit timestamp
    pub fn apply_at(
        &mut self,
        code: StatusCode,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) {
        self.entries
            .insert(0, StatusEntry::new(code, description, timestamp));
    }

    /// All entries, most recent first
    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }
}
