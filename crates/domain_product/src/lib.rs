//! Product Domain
//!
//! Product-configuration-driven validation: every age limit, capital ceiling
//! and mandatory-exam list is derived from a product's declared
//! configuration, supplied by the backend as data. Nothing here hardcodes a
//! limit; an absent configuration means "no ceiling, do not block the user".
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_product::{resolve, validate_capital, CoverageKind};
//!
//! let product = resolve(&products, "hdi home equity");
//! let result = validate_capital(product, requested, CoverageKind::Mip, age);
//! if !result.valid {
//!     show(result.message.unwrap());
//! }
//! ```

pub mod product;
pub mod resolver;
pub mod validation;
pub mod exams;

pub use product::{
    Product, ProductFamily, ProductConfiguration, AgeConfig, FinalAgeLimit, CapitalConfig,
    VariableLimit,
};
pub use resolver::resolve;
pub use validation::{
    Validation, CoverageKind, validate_age, validate_final_age, validate_capital,
};
pub use exams::{Exam, ExamTier, ExamPanel, required_exams, required_exams_by_tier};
