//! Credit-variant safety check with escalating fallback strategies

use tracing::debug;

use crate::safety::debit::DebitBalanceProbe;
use crate::safety::rounded_total;
use crate::statement::Statement;
use crate::traits::{BalanceProbe, NumberExtractor, SafetyCheck};
use crate::types::{SafetyCheckError, StatementResult};

/// Decides whether a credit statement's transaction set is trustworthy
///
/// Three strategies are tried in order, each more permissive than the last,
/// short-circuiting on the first success:
///
/// 1. the signed transaction total is non-negative after rounding, so the
///    net sum is self-evidently the statement total;
/// 2. the absolute rounded total appears among the numbers re-extracted
///    from the full document text;
/// 3. a debit-style probe corroborates the credit and debit sides against
///    two independent document numbers, for banks that never print a single
///    combined total.
pub struct SafetyCheckEngine<E: NumberExtractor> {
    extractor: E,
    fallback: Box<dyn BalanceProbe>,
}

impl<E: NumberExtractor> SafetyCheckEngine<E> {
    /// Create an engine with the debit probe as last-resort fallback
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            fallback: Box::new(DebitBalanceProbe),
        }
    }

    /// Create an engine with a custom fallback probe
    pub fn with_fallback(extractor: E, fallback: Box<dyn BalanceProbe>) -> Self {
        Self { extractor, fallback }
    }
}

impl<E: NumberExtractor> SafetyCheck for SafetyCheckEngine<E> {
    /// Check that the total sum of all transactions is present somewhere
    /// within the document.
    ///
    /// Text is re-extracted from the pages, as some bank-specific
    /// bounding-box configurations may preclude the total from being
    /// extracted with the transactions.
    fn perform_safety_check(&self, statement: &Statement) -> StatementResult<bool> {
        let numbers = self
            .extractor
            .get_all_numbers_from_document(&statement.pages);

        let total = rounded_total(&statement.transactions);
        let total_amount = total.abs();

        // debits and credits already net to the reported total
        if total == total_amount {
            debug!(%total_amount, "net transaction total corroborates itself");
            return Ok(true);
        }

        if numbers.contains(&total_amount) {
            debug!(%total_amount, "transaction total found in document text");
            return Ok(true);
        }

        // some banks print debit and credit totals as separate numbers and
        // never a single combined sum
        debug!("running debit safety check for credit statement");
        if self
            .fallback
            .corroborates(&statement.transactions, &numbers)
        {
            return Ok(true);
        }

        Err(SafetyCheckError {
            total: total_amount,
        }
        .into())
    }
}
