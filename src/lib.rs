//! # Statement Core
//!
//! Post-processing and validation for financial statement parsers: repairs
//! statements whose previous-period balance is reported as prose rather than
//! a structural transaction, and verifies that extracted transaction totals
//! are corroborated by the source document before the extraction is trusted.
//!
//! ## Features
//!
//! - **Carry-over reconciliation**: detects prose previous-balance lines via
//!   configured patterns and injects synthetic transactions dated to the
//!   statement period start
//! - **Safety checks**: escalating corroboration strategies confirming the
//!   transaction total against numbers re-extracted from raw page text
//! - **Credit and debit variants**: two statement variants sharing one
//!   safety-check capability, with cross-variant fallback for layouts that
//!   print debit and credit totals separately
//! - **Pattern schema validation**: named capture groups are checked against
//!   known transaction fields at startup, not at match time
//! - **Collaborator seams**: number extraction and transaction coercion are
//!   trait-based, so extraction pipelines can plug in their own
//!
//! ## Quick Start
//!
//! ```rust
//! use statement_core::{EntryType, Page, Statement, StatementConfig, Transaction};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let pages = vec![Page::new(vec!["TOTAL 120.00".to_string()])];
//! let transactions = vec![Transaction::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     "PAYMENT RECEIVED".to_string(),
//!     BigDecimal::from(120),
//! )];
//!
//! let statement = Statement::new(EntryType::Credit, pages, StatementConfig::default(), transactions);
//! assert!(statement.perform_safety_check().unwrap());
//! ```

pub mod matching;
pub mod reconciliation;
pub mod safety;
pub mod statement;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use matching::*;
pub use reconciliation::*;
pub use safety::*;
pub use statement::*;
pub use traits::*;
pub use types::*;
