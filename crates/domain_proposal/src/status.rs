//! Status catalog
//!
//! The single source of truth for proposal lifecycle codes. Every screen
//! that renders a badge or decides which actions to offer derives its answer
//! from this table; there are no per-screen switch statements.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A numeric proposal lifecycle code as emitted by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Classification of a status code for UI and compliance decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// Terminal state reached by a successful step
    Success,
    /// Terminal rejection state
    Failure,
    /// Anything still open, including codes the catalog does not know
    Pending,
}

impl StatusClass {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StatusClass::Success | StatusClass::Failure)
    }
}

struct CatalogEntry {
    class: StatusClass,
    label: &'static str,
}

/// The known lifecycle codes with their class and pt-BR label
///
/// The backend enumeration is larger than this table; codes outside it are
/// in-flight states and classify as pending.
const ENTRIES: &[(u16, StatusClass, &str)] = &[
    (4, StatusClass::Pending, "DPS Em análise"),
    (5, StatusClass::Pending, "Enviado para aceitação"),
    (6, StatusClass::Success, "DPS Cadastrada"),
    (19, StatusClass::Success, "DPS Assinada"),
    (21, StatusClass::Success, "DPS Avaliada"),
    (22, StatusClass::Failure, "DPS Recusada"),
    (24, StatusClass::Failure, "Proposta cancelada"),
    (30, StatusClass::Success, "Complemento enviado"),
    (32, StatusClass::Success, "Enviado para subscrição"),
    (33, StatusClass::Success, "DFI Avaliada"),
    (34, StatusClass::Success, "MIP Avaliada"),
    (35, StatusClass::Success, "Processo finalizado"),
    (36, StatusClass::Failure, "Processo reanalisado e recusado"),
    (37, StatusClass::Failure, "Processo revisado e recusado"),
    (38, StatusClass::Success, "Processo reanalisado"),
    (41, StatusClass::Success, "Processo revisado"),
    (42, StatusClass::Success, "Processo excluído"),
    (53, StatusClass::Success, "DPS Reavaliada"),
    (56, StatusClass::Success, "Complemento avaliado"),
];

static CATALOG: Lazy<HashMap<u16, CatalogEntry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(code, class, label)| (code, CatalogEntry { class, label }))
        .collect()
});

/// Classifies a status code into {success, failure, pending}
///
/// Total over all codes: unknown codes are pending, so a code added by the
/// backend after this build can never be misreported as a final decision.
pub fn classify_status(code: StatusCode) -> StatusClass {
    match CATALOG.get(&code.value()) {
        Some(entry) => entry.class,
        None => {
            tracing::warn!(code = code.value(), "unknown status code, classifying as pending");
            StatusClass::Pending
        }
    }
}

/// Returns the pt-BR label for a known status code
pub fn status_label(code: StatusCode) -> Option<&'static str> {
    CATALOG.get(&code.value()).map(|entry| entry.label)
}

/// Iterates the codes the catalog knows, in ascending order
pub fn known_codes() -> impl Iterator<Item = StatusCode> {
    ENTRIES.iter().map(|&(code, _, _)| StatusCode::new(code))
}
