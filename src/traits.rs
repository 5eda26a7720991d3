//! Traits for collaborator seams and extensibility

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

use crate::statement::Statement;
use crate::types::*;

/// Full-text numeric re-extraction from document pages
///
/// Safety checks corroborate transaction totals against numbers found in the
/// raw page text rather than the structurally parsed fields, because
/// bounding-box extraction configurations can clip the total line entirely.
pub trait NumberExtractor: Send + Sync {
    /// Every distinct numeric value in the document, rounded to 2 decimal
    /// places, in first-seen order.
    fn get_all_numbers_from_document(&self, pages: &[Page]) -> Vec<BigDecimal>;
}

/// Coerces raw captured field values into a typed [`Transaction`]
///
/// The caller supplies the transaction date; captured date strings are never
/// trusted for synthetic entries.
pub trait TransactionFactory: Send + Sync {
    /// Build a transaction from captured fields, dated `transaction_date`
    fn build(
        &self,
        fields: &CapturedFields,
        transaction_date: NaiveDate,
    ) -> StatementResult<Transaction>;
}

/// Probe form of a safety check
///
/// A probe only reports whether the transaction set is corroborated by the
/// document numbers; it never fails. This is the interface the credit
/// engine's last-resort strategy calls through, so a debit-style failure
/// cannot raise past that boundary.
pub trait BalanceProbe: Send + Sync {
    /// True when the transaction totals are corroborated by `numbers`
    fn corroborates(&self, transactions: &[Transaction], numbers: &[BigDecimal]) -> bool;
}

/// The safety-check capability shared by statement variants
pub trait SafetyCheck: Send + Sync {
    /// Verify that the statement's transaction total is corroborated by the
    /// source document, returning `Ok(true)` on success and
    /// [`SafetyCheckError`] once every strategy is exhausted.
    fn perform_safety_check(&self, statement: &Statement) -> StatementResult<bool>;
}

/// Default transaction factory with basic field coercion rules
pub struct DefaultTransactionFactory;

impl TransactionFactory for DefaultTransactionFactory {
    fn build(
        &self,
        fields: &CapturedFields,
        transaction_date: NaiveDate,
    ) -> StatementResult<Transaction> {
        let description = fields.description.trim();
        if description.is_empty() {
            return Err(StatementError::Field(
                "description cannot be empty".to_string(),
            ));
        }

        // amounts arrive as printed: currency symbols and digit grouping
        let raw_amount: String = fields
            .amount
            .chars()
            .filter(|c| !matches!(c, ',' | '$'))
            .collect();
        let raw_amount = raw_amount.trim();
        if raw_amount.is_empty() {
            return Err(StatementError::Field("amount cannot be empty".to_string()));
        }

        let amount = BigDecimal::from_str(raw_amount).map_err(|e| {
            StatementError::Field(format!("amount '{}' is not numeric: {e}", fields.amount))
        })?;

        Ok(Transaction::new(
            transaction_date,
            description.to_string(),
            amount,
        ))
    }
}
