//! Test Data Builders
//!
//! Builder helpers for proposal sets. Tests specify only the fields they
//! care about; everything else takes a sensible default.

use core_kernel::{ContractNumber, Currency, Customer, Money, ProductId, ProposalId};
use domain_proposal::{ParticipantType, Proposal, ProposalBuilder, StatusCode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::CustomerFixtures;

/// Builder for a proposal participating in test scenarios
pub struct TestProposalBuilder {
    id: ProposalId,
    contract_number: Option<String>,
    initial_status: StatusCode,
    risk_status: Option<String>,
    capital_mip: Decimal,
    capital_dfi: Decimal,
    participant_type: ParticipantType,
    customer: Customer,
    product_id: ProductId,
    created: Option<String>,
}

impl Default for TestProposalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProposalBuilder {
    /// Creates a builder with a registered, undecided principal proposal
    pub fn new() -> Self {
        Self {
            id: ProposalId::new(),
            contract_number: None,
            initial_status: StatusCode::new(6),
            risk_status: None,
            capital_mip: dec!(250_000),
            capital_dfi: dec!(0),
            participant_type: ParticipantType::Principal,
            customer: CustomerFixtures::adult_male(),
            product_id: ProductId::new(),
            created: None,
        }
    }

    pub fn with_contract_number(mut self, number: impl Into<String>) -> Self {
        self.contract_number = Some(number.into());
        self
    }

    pub fn with_initial_status(mut self, code: u16) -> Self {
        self.initial_status = StatusCode::new(code);
        self
    }

    pub fn with_risk_status(mut self, token: impl Into<String>) -> Self {
        self.risk_status = Some(token.into());
        self
    }

    pub fn with_capital_mip(mut self, amount: Decimal) -> Self {
        self.capital_mip = amount;
        self
    }

    pub fn with_capital_dfi(mut self, amount: Decimal) -> Self {
        self.capital_dfi = amount;
        self
    }

    pub fn as_co_participant(mut self) -> Self {
        self.participant_type = ParticipantType::CoParticipant("C".to_string());
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    pub fn with_product_id(mut self, product_id: ProductId) -> Self {
        self.product_id = product_id;
        self
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn build(self) -> Proposal {
        let mut builder = ProposalBuilder::new()
            .id(self.id)
            .customer(self.customer)
            .product_id(self.product_id)
            .initial_status(self.initial_status, "DPS Cadastrada")
            .capital_mip(Money::new(self.capital_mip, Currency::BRL))
            .capital_dfi(Money::new(self.capital_dfi, Currency::BRL))
            .participant_type(self.participant_type);
        if let Some(number) = self.contract_number.and_then(ContractNumber::parse) {
            builder = builder.contract_number(number);
        }
        if let Some(token) = self.risk_status {
            builder = builder.risk_status(token);
        }
        if let Some(created) = self.created {
            builder = builder.created(created);
        }
        builder.build().expect("test proposal must build")
    }
}

/// Builds one operation's worth of proposals sharing a contract number
pub fn operation_members(
    contract: &str,
    risk_tokens: &[Option<&str>],
) -> Vec<Proposal> {
    risk_tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let mut builder = TestProposalBuilder::new().with_contract_number(contract);
            if index > 0 {
                builder = builder.as_co_participant();
            }
            if let Some(token) = token {
                builder = builder.with_risk_status(*token);
            }
            builder.build()
        })
        .collect()
}
