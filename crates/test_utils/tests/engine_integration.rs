//! Integration Tests for the DPS Rules Engine
//!
//! These tests verify cross-domain scenarios that involve multiple crates
//! working together: proposal lifecycle, operation roll-up, and
//! configuration-driven validation over one shared data set.

use domain_operation::{group_by_operation, OperationStatus};
use domain_product::{
    required_exams, resolve, validate_age, validate_capital, validate_final_age, CoverageKind,
    Exam,
};
use domain_proposal::{CoverageFlow, ReviewAction, StatusClass, StatusCode};
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use test_utils::{
    assert_history_invariants, assert_invalid, assert_valid, operation_members, reference_date,
    CustomerFixtures, ProductFixtures, TestProposalBuilder,
};

mod proposal_lifecycle {
    use super::*;

    /// Walks one proposal through signature, evaluation and review.
    #[test]
    fn test_full_mip_lifecycle_keeps_audit_trail() {
        let mut proposal = TestProposalBuilder::new()
            .with_capital_dfi(dec!(400_000))
            .build();

        proposal
            .apply_status(CoverageFlow::Mip, StatusCode::new(19), "DPS Assinada")
            .unwrap();
        proposal
            .apply_status(CoverageFlow::Mip, StatusCode::new(34), "MIP Avaliada")
            .unwrap();
        proposal
            .apply_status(CoverageFlow::Dfi, StatusCode::new(33), "DFI Avaliada")
            .unwrap();
        proposal.apply_review(ReviewAction::Decide, true);

        assert_history_invariants(&proposal);
        assert_eq!(proposal.status_history.entries().len(), 4);
        assert_eq!(proposal.status_class(), StatusClass::Success);
        assert_eq!(proposal.dfi_status().unwrap().code, StatusCode::new(33));
    }
}

mod operation_rollup {
    use super::*;

    /// One co-borrower still in review keeps the whole contract undecided,
    /// whatever the others look like.
    #[test]
    fn test_mixed_operation_stays_in_progress() {
        let mut proposals = operation_members(
            "7001",
            &[Some("APPROVED"), Some("REVIEW"), Some("APPROVED")],
        );
        proposals.extend(operation_members("7002", &[Some("APPROVED")]));
        // A proposal the backend has not linked yet stays out of every group.
        proposals.push(TestProposalBuilder::new().with_risk_status("APPROVED").build());

        let operations = group_by_operation(&proposals);
        assert_eq!(operations.len(), 2);

        let first = operations
            .iter()
            .find(|o| o.contract_number.as_str() == "7001")
            .unwrap();
        assert_eq!(first.status, OperationStatus::InProgress);
        assert_eq!(first.participants_count, 3);

        let second = operations
            .iter()
            .find(|o| o.contract_number.as_str() == "7002")
            .unwrap();
        assert_eq!(second.status, OperationStatus::Approved);
    }
}

mod configuration_driven_validation {
    use super::*;

    /// Resolves the product by alias, then runs the full validation battery
    /// the proposal form performs before submission.
    #[test]
    fn test_housing_proposal_validation_battery() {
        let catalog = ProductFixtures::catalog();
        let product = resolve(&catalog, "mag habitacional").unwrap();
        let customer = CustomerFixtures::male_62();
        let today = reference_date();

        assert_valid(&validate_age(
            product.age_config(),
            customer.birthdate,
            today,
        ));

        // A 300-month tenor carries a 62-year-old past the 80y6m ceiling.
        assert_invalid(&validate_final_age(
            product.age_config(),
            customer.birthdate,
            300,
            today,
        ));

        let age = customer.age_at(today);
        assert_valid(&validate_capital(
            Some(product),
            Money::new(dec!(1_800_000), Currency::BRL),
            CoverageKind::Mip,
            age,
        ));
        assert_invalid(&validate_capital(
            Some(product),
            Money::new(dec!(5_500_000), Currency::BRL),
            CoverageKind::Dfi,
            age,
        ));

        let exams = required_exams(age, customer.gender);
        assert!(exams.contains(&Exam::Psa));
        assert!(exams.contains(&Exam::Echocardiogram));
    }

    /// A product the catalog cannot resolve must never block the user.
    #[test]
    fn test_unknown_product_fails_open_end_to_end() {
        let catalog = ProductFixtures::catalog();
        let product = resolve(&catalog, "Produto Inexistente");
        assert!(product.is_none());

        let result = validate_capital(
            product,
            Money::new(dec!(99_000_000), Currency::BRL),
            CoverageKind::Mip,
            45,
        );
        assert_valid(&result);
    }
}
