//! Core types and data structures for statement post-processing

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a statement or of a single transaction amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Credit statements report purchases and repayments against a card balance
    Credit,
    /// Debit statements report movements on a current or savings account
    Debit,
}

/// A single extracted transaction
///
/// Transactions belong to an ordered sequence; the first element is the
/// anchor for the start of the statement period. The amount is signed:
/// negative amounts are debits, non-negative amounts are credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date the transaction occurred
    pub transaction_date: NaiveDate,
    /// Description as it appears on the statement
    pub description: String,
    /// Signed amount; sign conveys debit/credit direction
    pub amount: BigDecimal,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(transaction_date: NaiveDate, description: String, amount: BigDecimal) -> Self {
        Self {
            transaction_date,
            description,
            amount,
        }
    }

    /// Direction of this transaction, derived from the amount sign
    pub fn entry_type(&self) -> EntryType {
        if self.amount < BigDecimal::from(0) {
            EntryType::Debit
        } else {
            EntryType::Credit
        }
    }
}

/// One physical page of the source document
///
/// Pages keep the raw text lines after structural extraction so that
/// raw-text fallback checks remain possible. Lines are read-only once the
/// page is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    /// Create a page from its text lines
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The page's text lines, in document order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Raw field values captured by a previous-balance pattern match
///
/// Named capture groups act as a loose schema over [`Transaction`] fields.
/// The captured date is never trusted: the reconciler overrides it with the
/// anchor date before a [`Transaction`] is built from these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedFields {
    /// Date string captured by the pattern, if any
    pub transaction_date: Option<String>,
    /// Captured description text
    pub description: String,
    /// Captured amount text, unparsed
    pub amount: String,
}

/// Raised when every corroboration strategy is exhausted
///
/// Carries the computed, unverified total so operators can locate the
/// discrepancy in the source document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Total amount {total} cannot be found in statement")]
pub struct SafetyCheckError {
    /// Absolute transaction total, rounded to 2 decimal places
    pub total: BigDecimal,
}

/// Errors that can occur during statement post-processing
#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error(transparent)]
    SafetyCheck(#[from] SafetyCheckError),
    #[error("Invalid previous balance pattern: {0}")]
    Pattern(String),
    #[error("Cannot reconcile carry-over balance: statement has no anchor transaction")]
    MissingAnchor,
    #[error("Invalid captured field: {0}")]
    Field(String),
}

/// Result type for statement operations
pub type StatementResult<T> = Result<T, StatementError>;
