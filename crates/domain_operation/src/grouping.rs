//! Grouping proposals into operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{parse_timestamp, ContractNumber};
use domain_proposal::Proposal;

use crate::status::{compute_operation_status, OperationStatus};

/// The derived view of one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub contract_number: ContractNumber,
    pub participants_count: usize,
    /// Earliest creation among members with a parseable date
    pub created_at: Option<DateTime<Utc>>,
    pub status: OperationStatus,
}

/// Partitions proposals by non-empty contract number into operations
///
/// Proposals without a contract number exist only in the per-participant
/// view and are excluded here. Unparseable `created` values are excluded
/// from the earliest-date computation rather than failing.
///
/// The result is sorted by `created_at` descending; undated operations sort
/// last (treated as epoch 0). Deterministic: the same proposal set always
/// yields the same operations in the same order.
pub fn group_by_operation(proposals: &[Proposal]) -> Vec<Operation> {
    let mut groups: BTreeMap<&ContractNumber, Vec<&Proposal>> = BTreeMap::new();
    for proposal in proposals {
        if let Some(number) = proposal.contract_number.as_ref() {
            groups.entry(number).or_default().push(proposal);
        }
    }

    let mut operations: Vec<Operation> = groups
        .into_iter()
        .map(|(number, members)| {
            let created_at = members
                .iter()
                .filter_map(|p| p.created.as_deref().and_then(parse_timestamp))
                .min();
            let status =
                compute_operation_status(members.iter().map(|p| p.risk_status.as_deref()));
            Operation {
                contract_number: number.clone(),
                participants_count: members.len(),
                created_at,
                status,
            }
        })
        .collect();

    operations.sort_by(|a, b| {
        let a_key = a.created_at.unwrap_or(DateTime::UNIX_EPOCH);
        let b_key = b.created_at.unwrap_or(DateTime::UNIX_EPOCH);
        b_key
            .cmp(&a_key)
            .then_with(|| a.contract_number.cmp(&b.contract_number))
    });
    operations
}
