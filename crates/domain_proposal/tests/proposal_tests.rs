//! Tests for the proposal aggregate and its two sub-flows

use chrono::NaiveDate;
use core_kernel::{ContractNumber, Currency, Customer, Gender, Money, ProductId};
use domain_proposal::proposal::{
    ACCEPTANCE_DESCRIPTION, ACCEPTANCE_SOURCE_STATUS, ACCEPTANCE_TARGET_STATUS,
};
use domain_proposal::{
    CoverageFlow, ParticipantType, Proposal, ProposalBuilder, ProposalError, ReviewAction,
    RiskDecision, StatusClass, StatusCode,
};
use rust_decimal_macros::dec;

fn test_customer() -> Customer {
    Customer::new(
        NaiveDate::from_ymd_opt(1985, 3, 20).unwrap(),
        Gender::Male,
        "12345678909",
    )
}

fn create_test_proposal() -> Proposal {
    ProposalBuilder::new()
        .customer(test_customer())
        .product_id(ProductId::new())
        .initial_status(StatusCode::new(6), "DPS Cadastrada")
        .capital_mip(Money::new(dec!(250000), Currency::BRL))
        .build()
        .unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn test_builder_requires_customer() {
        let result = ProposalBuilder::new()
            .product_id(ProductId::new())
            .initial_status(StatusCode::new(6), "DPS Cadastrada")
            .build();
        assert!(matches!(result, Err(ProposalError::MissingRequiredField(_))));
    }

    #[test]
    fn test_builder_requires_initial_status() {
        let result = ProposalBuilder::new()
            .customer(test_customer())
            .product_id(ProductId::new())
            .build();
        assert!(matches!(result, Err(ProposalError::MissingRequiredField(_))));
    }

    #[test]
    fn test_defaults() {
        let proposal = create_test_proposal();
        assert!(proposal.contract_number.is_none());
        assert!(proposal.capital_dfi.is_zero());
        assert_eq!(proposal.participant_type, ParticipantType::Principal);
        assert!(proposal.dfi_history.is_none());
    }

    #[test]
    fn test_participant_type_tokens() {
        assert_eq!(ParticipantType::from_token("P"), ParticipantType::Principal);
        assert!(!ParticipantType::from_token("C").is_principal());
    }
}

mod status_flows {
    use super::*;

    #[test]
    fn test_mip_transition_preserves_history() {
        let mut proposal = create_test_proposal();
        proposal
            .apply_status(CoverageFlow::Mip, StatusCode::new(19), "DPS Assinada")
            .unwrap();

        assert_eq!(proposal.current_status().code, StatusCode::new(19));
        assert_eq!(proposal.status_history.entries().len(), 2);
        assert_eq!(
            proposal.status_history.entries()[1].code,
            StatusCode::new(6)
        );
    }

    #[test]
    fn test_dfi_transition_requires_dfi_capital() {
        let mut proposal = create_test_proposal();
        let result = proposal.apply_status(CoverageFlow::Dfi, StatusCode::new(33), "DFI Avaliada");
        assert_eq!(result, Err(ProposalError::DfiNotApplicable));
        assert!(proposal.dfi_history.is_none());
    }

    #[test]
    fn test_dfi_flow_is_independent_from_mip() {
        let mut proposal = ProposalBuilder::new()
            .customer(test_customer())
            .product_id(ProductId::new())
            .initial_status(StatusCode::new(6), "DPS Cadastrada")
            .capital_mip(Money::new(dec!(250000), Currency::BRL))
            .capital_dfi(Money::new(dec!(400000), Currency::BRL))
            .build()
            .unwrap();

        proposal
            .apply_status(CoverageFlow::Dfi, StatusCode::new(33), "DFI Avaliada")
            .unwrap();

        // DFI transition does not touch the MIP history.
        assert_eq!(proposal.current_status().code, StatusCode::new(6));
        assert_eq!(proposal.dfi_status().unwrap().code, StatusCode::new(33));

        proposal
            .apply_status(CoverageFlow::Mip, StatusCode::new(34), "MIP Avaliada")
            .unwrap();
        assert_eq!(proposal.dfi_status().unwrap().code, StatusCode::new(33));
    }

    #[test]
    fn test_status_class_of_current_status() {
        let mut proposal = create_test_proposal();
        assert_eq!(proposal.status_class(), StatusClass::Success);
        proposal
            .apply_status(CoverageFlow::Mip, StatusCode::new(22), "DPS Recusada")
            .unwrap();
        assert_eq!(proposal.status_class(), StatusClass::Failure);
    }
}

mod send_to_acceptance {
    use super::*;

    #[test]
    fn test_legal_from_source_status_only() {
        let mut proposal = ProposalBuilder::new()
            .customer(test_customer())
            .product_id(ProductId::new())
            .initial_status(ACCEPTANCE_SOURCE_STATUS, "DPS Em análise")
            .build()
            .unwrap();

        proposal.send_to_acceptance().unwrap();
        assert_eq!(proposal.current_status().code, ACCEPTANCE_TARGET_STATUS);
        assert_eq!(proposal.current_status().description, ACCEPTANCE_DESCRIPTION);
    }

    #[test]
    fn test_rejected_from_any_other_status() {
        let mut proposal = create_test_proposal();
        let result = proposal.send_to_acceptance();
        assert!(matches!(
            result,
            Err(ProposalError::InvalidTransition { .. })
        ));
        // Nothing was applied.
        assert_eq!(proposal.status_history.entries().len(), 1);
    }
}

mod review_actions {
    use super::*;

    #[test]
    fn test_review_applies_to_main_flow() {
        let mut proposal = create_test_proposal();
        proposal.apply_review(ReviewAction::Reopen, true);
        assert_eq!(proposal.current_status().code, StatusCode::new(38));
        assert_eq!(proposal.current_status().description, "Processo reanalisado");
    }

    #[test]
    fn test_refused_review_lands_on_failure() {
        let mut proposal = create_test_proposal();
        proposal.apply_review(ReviewAction::Decide, false);
        assert_eq!(proposal.status_class(), StatusClass::Failure);
    }
}

mod risk {
    use super::*;

    #[test]
    fn test_risk_decision_pending_when_absent() {
        let proposal = create_test_proposal();
        assert_eq!(proposal.risk_decision(), RiskDecision::Unfinished);
    }

    #[test]
    fn test_risk_decision_from_token() {
        let proposal = ProposalBuilder::new()
            .customer(test_customer())
            .product_id(ProductId::new())
            .initial_status(StatusCode::new(6), "DPS Cadastrada")
            .risk_status("APPROVED")
            .build()
            .unwrap();
        assert_eq!(proposal.risk_decision(), RiskDecision::FinishedApproved);
    }
}

mod serde_roundtrip {
    use super::*;

    #[test]
    fn test_proposal_roundtrips_through_json() {
        let mut proposal = create_test_proposal();
        proposal.contract_number = ContractNumber::parse("5501-2");
        proposal.risk_status = Some("REVIEW".to_string());

        let json = serde_json::to_string(&proposal).unwrap();
        let back: Proposal = serde_json::from_str(&json).unwrap();
        assert_eq!(proposal, back);
    }
}
