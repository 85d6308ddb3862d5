//! Proposal aggregate
//!
//! One applicant's insurance request, carrying the MIP status history and,
//! when DFI capital is present, the independent DFI history. Both flows share
//! the proposal id; transition requests always name which flow they target.

use serde::{Deserialize, Serialize};

use core_kernel::{ContractNumber, Currency, Customer, Money, ProductId, ProposalId};

use crate::error::ProposalError;
use crate::history::{StatusEntry, StatusHistory};
use crate::risk::{classify_risk, RiskDecision};
use crate::status::{classify_status, StatusClass, StatusCode};

/// The status a proposal must hold for "send to acceptance" to be offered
pub const ACCEPTANCE_SOURCE_STATUS: StatusCode = StatusCode::new(4);
/// The status applied by "send to acceptance"
pub const ACCEPTANCE_TARGET_STATUS: StatusCode = StatusCode::new(5);
/// The fixed history description applied by "send to acceptance"
pub const ACCEPTANCE_DESCRIPTION: &str = "Enviado para aceitação";

/// Which sub-flow a transition targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoverageFlow {
    Mip,
    Dfi,
}

/// Principal borrower vs co-participant on a shared operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParticipantType {
    Principal,
    CoParticipant(String),
}

impl ParticipantType {
    pub fn from_token(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("P") {
            ParticipantType::Principal
        } else {
            ParticipantType::CoParticipant(trimmed.to_string())
        }
    }

    pub fn is_principal(&self) -> bool {
        matches!(self, ParticipantType::Principal)
    }
}

impl From<String> for ParticipantType {
    fn from(token: String) -> Self {
        ParticipantType::from_token(&token)
    }
}

impl From<ParticipantType> for String {
    fn from(participant: ParticipantType) -> Self {
        match participant {
            ParticipantType::Principal => "P".to_string(),
            ParticipantType::CoParticipant(token) => token,
        }
    }
}

/// One applicant's insurance request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique identifier, immutable after creation
    pub id: ProposalId,
    /// Links proposals into one operation; absent until the backend assigns it
    pub contract_number: Option<ContractNumber>,
    /// MIP flow history, never empty
    pub status_history: StatusHistory,
    /// DFI flow history, present only once a DFI transition has been applied
    pub dfi_history: Option<StatusHistory>,
    /// Raw underwriting decision token; `None` means decision pending
    pub risk_status: Option<String>,
    /// MIP insured capital
    pub capital_mip: Money,
    /// DFI insured capital; zero means DFI coverage not applicable
    pub capital_dfi: Money,
    /// Principal or co-participant
    pub participant_type: ParticipantType,
    /// The applicant
    pub customer: Customer,
    /// The product this proposal was filled for
    pub product_id: ProductId,
    /// Backend creation timestamp, kept raw; parsed leniently on aggregation
    pub created: Option<String>,
}

impl Proposal {
    /// The latest applied MIP transition
    pub fn current_status(&self) -> &StatusEntry {
        self.status_history.current()
    }

    /// Classification of the current MIP status
    pub fn status_class(&self) -> StatusClass {
        classify_status(self.current_status().code)
    }

    /// The latest applied DFI transition, if the flow has one
    pub fn dfi_status(&self) -> Option<&StatusEntry> {
        self.dfi_history.as_ref().map(|history| history.current())
    }

    /// True when the proposal carries DFI capital
    pub fn is_dfi_applicable(&self) -> bool {
        !self.capital_dfi.is_zero()
    }

    /// The three-way risk decision for this participant
    pub fn risk_decision(&self) -> RiskDecision {
        classify_risk(self.risk_status.as_deref())
    }

    /// Applies a status transition to the named flow
    ///
    /// The engine does not re-validate business eligibility; the backend is
    /// the authority that rejects an illegal transition. The one rule
    /// enforced here is that the DFI flow only exists alongside DFI capital.
    pub fn apply_status(
        &mut self,
        flow: CoverageFlow,
        code: StatusCode,
        description: impl Into<String>,
    ) -> Result<(), ProposalError> {
        match flow {
            CoverageFlow::Mip => {
                self.status_history.apply(code, description);
                Ok(())
            }
            CoverageFlow::Dfi => {
                if !self.is_dfi_applicable() {
                    return Err(ProposalError::DfiNotApplicable);
                }
                match self.dfi_history.as_mut() {
                    Some(history) => history.apply(code, description),
                    None => {
                        self.dfi_history =
                            Some(StatusHistory::new(StatusEntry::now(code, description)));
                    }
                }
                Ok(())
            }
        }
    }

    /// Sends the proposal to acceptance
    ///
    /// Only legal when the current MIP status is [`ACCEPTANCE_SOURCE_STATUS`];
    /// callers must not offer the action from any other state.
    pub fn send_to_acceptance(&mut self) -> Result<(), ProposalError> {
        let current = self.current_status().code;
        if current != ACCEPTANCE_SOURCE_STATUS {
            return Err(ProposalError::invalid_transition(
                current,
                ACCEPTANCE_TARGET_STATUS,
            ));
        }
        self.status_history
            .apply(ACCEPTANCE_TARGET_STATUS, ACCEPTANCE_DESCRIPTION);
        Ok(())
    }
}

/// Builder for constructing Proposal instances
///
/// Capitals default to zero BRL and the participant type to principal;
/// customer, product and the initial status are required.
#[derive(Debug, Default)]
pub struct ProposalBuilder {
    id: Option<ProposalId>,
    contract_number: Option<ContractNumber>,
    initial_status: Option<StatusEntry>,
    risk_status: Option<String>,
    capital_mip: Option<Money>,
    capital_dfi: Option<Money>,
    participant_type: Option<ParticipantType>,
    customer: Option<Customer>,
    product_id: Option<ProductId>,
    created: Option<String>,
}

impl ProposalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: ProposalId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn contract_number(mut self, number: ContractNumber) -> Self {
        self.contract_number = Some(number);
        self
    }

    pub fn initial_status(mut self, code: StatusCode, description: impl Into<String>) -> Self {
        self.initial_status = Some(StatusEntry::now(code, description));
        self
    }

    pub fn risk_status(mut self, token: impl Into<String>) -> Self {
        self.risk_status = Some(token.into());
        self
    }

    pub fn capital_mip(mut self, capital: Money) -> Self {
        self.capital_mip = Some(capital);
        self
    }

    pub fn capital_dfi(mut self, capital: Money) -> Self {
        self.capital_dfi = Some(capital);
        self
    }

    pub fn participant_type(mut self, participant: ParticipantType) -> Self {
        self.participant_type = Some(participant);
        self
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn product_id(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn build(self) -> Result<Proposal, ProposalError> {
        let initial = self
            .initial_status
            .ok_or_else(|| ProposalError::MissingRequiredField("initial_status".to_string()))?;
        let customer = self
            .customer
            .ok_or_else(|| ProposalError::MissingRequiredField("customer".to_string()))?;
        let product_id = self
            .product_id
            .ok_or_else(|| ProposalError::MissingRequiredField("product_id".to_string()))?;

        Ok(Proposal {
            id: self.id.unwrap_or_default(),
            contract_number: self.contract_number,
            status_history: StatusHistory::new(initial),
            dfi_history: None,
            risk_status: self.risk_status,
            capital_mip: self.capital_mip.unwrap_or_else(|| Money::zero(Currency::BRL)),
            capital_dfi: self.capital_dfi.unwrap_or_else(|| Money::zero(Currency::BRL)),
            participant_type: self.participant_type.unwrap_or(ParticipantType::Principal),
            customer,
            product_id,
            created: self.created,
        })
    }
}
