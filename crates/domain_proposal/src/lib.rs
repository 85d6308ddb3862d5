//! Proposal Domain
//!
//! This crate implements the lifecycle rules for a single DPS proposal:
//! the status catalog, the append-only status history shared by the MIP and
//! DFI sub-flows, the fixed review transitions, and the risk classifier
//! consumed by both the per-participant and the operation views.
//!
//! # Status classes
//!
//! ```text
//! Pending ──> ... ──> Success-terminal   (e.g. DPS Avaliada, Processo finalizado)
//!        \──> ... ──> Failure-terminal   (e.g. DPS Recusada)
//! ```
//!
//! Every status code is classified into exactly one of
//! {success, failure, pending}; codes the catalog does not know default to
//! pending, so a new backend code can never be misreported as a final
//! decision. The same fail-open policy applies to risk tokens.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_proposal::{Proposal, ProposalBuilder, CoverageFlow, StatusCode};
//!
//! let mut proposal = ProposalBuilder::new()
//!     .customer(customer)
//!     .product_id(product_id)
//!     .initial_status(StatusCode::new(6), "DPS Cadastrada")
//!     .build()?;
//!
//! proposal.apply_status(CoverageFlow::Mip, StatusCode::new(19), "DPS Assinada")?;
//! ```

pub mod status;
pub mod history;
pub mod risk;
pub mod proposal;
pub mod review;
pub mod error;

pub use status::{StatusCode, StatusClass, classify_status, status_label};
pub use history::{StatusEntry, StatusHistory};
pub use risk::{RiskStatus, RiskDecision, classify_risk};
pub use proposal::{Proposal, ProposalBuilder, CoverageFlow, ParticipantType};
pub use review::{ReviewAction, ReviewTransition, review_transition};
pub use error::ProposalError;
