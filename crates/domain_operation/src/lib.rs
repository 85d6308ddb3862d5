//! Operation Domain
//!
//! An operation is the set of proposals sharing one contract number, e.g.
//! co-borrowers on one loan. It is a virtual aggregate: recomputed on every
//! read from the current proposal set, never persisted, never mutated.
//!
//! The aggregate status applies a strict precedence: a single unresolved or
//! unknown participant blocks the whole operation from being reported
//! approved or rejected, so no premature commercial commitment is made on a
//! multi-party contract.

pub mod status;
pub mod grouping;

pub use status::{OperationStatus, compute_operation_status};
pub use grouping::{Operation, group_by_operation};
