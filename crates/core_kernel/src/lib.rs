//! Core Kernel - Foundational types and utilities for the DPS rules engine
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar math for ages and contract tenors
//! - Common identifiers and value objects

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod person;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{AgeBreakdown, age_between, age_in_years, add_months, parse_timestamp};
pub use identifiers::{ProposalId, ProductId, CustomerId, ContractNumber};
pub use person::{Customer, Gender};
pub use error::CoreError;
