//! Debit-variant safety check

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::safety::{rounded_total, side_totals};
use crate::statement::Statement;
use crate::traits::{BalanceProbe, NumberExtractor, SafetyCheck};
use crate::types::{SafetyCheckError, StatementResult, Transaction};

/// Debit-style corroboration: credit and debit totals must each appear as
/// independent numbers in the document
///
/// As a [`BalanceProbe`] this never fails; the credit engine invokes it as
/// its last-resort strategy and only the final, credit-level failure raises.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebitBalanceProbe;

impl BalanceProbe for DebitBalanceProbe {
    fn corroborates(&self, transactions: &[Transaction], numbers: &[BigDecimal]) -> bool {
        let (total_credit, total_debit) = side_totals(transactions);
        let zero = BigDecimal::from(0);

        // nothing on either side means nothing to corroborate
        if total_credit == zero && total_debit == zero {
            return false;
        }

        let credit_found = total_credit == zero || numbers.contains(&total_credit);
        let debit_found = total_debit == zero || numbers.contains(&total_debit);
        debug!(
            %total_credit,
            %total_debit,
            credit_found,
            debit_found,
            "debit-style corroboration"
        );

        credit_found && debit_found
    }
}

/// Standalone safety check for debit statements
pub struct DebitSafetyCheck<E: NumberExtractor> {
    extractor: E,
}

impl<E: NumberExtractor> DebitSafetyCheck<E> {
    /// Create a debit safety check over the given extractor
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }
}

impl<E: NumberExtractor> SafetyCheck for DebitSafetyCheck<E> {
    fn perform_safety_check(&self, statement: &Statement) -> StatementResult<bool> {
        let numbers = self
            .extractor
            .get_all_numbers_from_document(&statement.pages);

        if DebitBalanceProbe.corroborates(&statement.transactions, &numbers) {
            return Ok(true);
        }

        Err(SafetyCheckError {
            total: rounded_total(&statement.transactions).abs(),
        }
        .into())
    }
}
