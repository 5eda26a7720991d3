//! Carry-over balance reconciliation
//!
//! Some statement layouts report the previous period's closing balance as a
//! line of prose on the first page instead of a structural transaction. The
//! reconciler detects those lines and injects a synthetic transaction so the
//! balance participates in downstream totals.

use tracing::debug;

use crate::statement::StatementConfig;
use crate::traits::{DefaultTransactionFactory, TransactionFactory};
use crate::types::{Page, StatementError, StatementResult, Transaction};

/// Repairs statements whose carry-over balance was extracted as prose
pub struct CarryoverReconciler {
    factory: Box<dyn TransactionFactory>,
}

impl Default for CarryoverReconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl CarryoverReconciler {
    /// Create a reconciler with the default transaction factory
    pub fn new() -> Self {
        Self {
            factory: Box::new(DefaultTransactionFactory),
        }
    }

    /// Create a reconciler with a custom transaction factory
    pub fn with_factory(factory: Box<dyn TransactionFactory>) -> Self {
        Self { factory }
    }

    /// Prepend a synthetic transaction for every previous-balance match
    ///
    /// Returns the input unchanged when no pattern is configured or nothing
    /// matches. Every synthetic entry is dated with the anchor date (the
    /// first transaction already present): the date printed on a carry-over
    /// line is unreliable, while the first real transaction date is a
    /// dependable proxy for the start of the billing period.
    ///
    /// All synthetic entries precede the original sequence. When several
    /// lines match, the last-processed match ends up first; this is an
    /// explicit policy, kept visible by building the buffer and reversing it.
    ///
    /// Fails with [`StatementError::MissingAnchor`] when a line matches but
    /// the statement has no transactions to anchor the date on.
    pub fn post_process_transactions(
        &self,
        transactions: Vec<Transaction>,
        pages: &[Page],
        config: &StatementConfig,
    ) -> StatementResult<Vec<Transaction>> {
        let Some(pattern) = config.prev_balance_pattern.as_ref() else {
            return Ok(transactions);
        };

        let matches = pattern.find_matches(pages);
        if matches.is_empty() {
            return Ok(transactions);
        }

        let anchor = transactions
            .first()
            .map(|t| t.transaction_date)
            .ok_or(StatementError::MissingAnchor)?;

        debug!(
            matches = matches.len(),
            %anchor,
            "synthesizing carry-over transactions"
        );

        let mut synthetic = Vec::with_capacity(matches.len() + transactions.len());
        for found in &matches {
            synthetic.push(self.factory.build(&found.fields, anchor)?);
        }

        // last-processed match ends up first
        synthetic.reverse();
        synthetic.extend(transactions);
        Ok(synthetic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use std::str::FromStr;

    use crate::matching::PrevBalancePattern;

    const PATTERN: &str = r"(?P<description>PREVIOUS BALANCE)\s+(?P<amount>-?[\d,]+\.\d{2})";

    fn page(lines: &[&str]) -> Page {
        Page::new(lines.iter().map(|l| l.to_string()).collect())
    }

    fn config_with_pattern() -> StatementConfig {
        StatementConfig {
            prev_balance_pattern: Some(PrevBalancePattern::new(PATTERN).unwrap()),
            ..StatementConfig::default()
        }
    }

    fn transaction(day: u32, description: &str, amount: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            description.to_string(),
            BigDecimal::from_str(amount).unwrap(),
        )
    }

    #[test]
    fn no_pattern_is_a_no_op() {
        let transactions = vec![transaction(3, "COFFEE", "4.50")];
        let pages = vec![page(&["PREVIOUS BALANCE 1,200.00"])];

        let result = CarryoverReconciler::new()
            .post_process_transactions(transactions.clone(), &pages, &StatementConfig::default())
            .unwrap();

        assert_eq!(result, transactions);
    }

    #[test]
    fn no_match_is_a_no_op() {
        let transactions = vec![transaction(3, "COFFEE", "4.50")];
        let pages = vec![page(&["01 JUN  COFFEE  4.50"])];

        let result = CarryoverReconciler::new()
            .post_process_transactions(transactions.clone(), &pages, &config_with_pattern())
            .unwrap();

        assert_eq!(result, transactions);
    }

    #[test]
    fn synthetic_entry_takes_the_anchor_date() {
        let transactions = vec![
            transaction(3, "COFFEE", "4.50"),
            transaction(9, "GROCERIES", "82.13"),
        ];
        let pages = vec![page(&["PREVIOUS BALANCE 1,200.00"])];

        let result = CarryoverReconciler::new()
            .post_process_transactions(transactions, &pages, &config_with_pattern())
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].description, "PREVIOUS BALANCE");
        assert_eq!(result[0].amount, BigDecimal::from_str("1200.00").unwrap());
        // anchor date, not anything printed on the matched line
        assert_eq!(
            result[0].transaction_date,
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
        );
    }

    #[test]
    fn synthetics_precede_originals_last_processed_first() {
        let transactions = vec![transaction(3, "COFFEE", "4.50")];
        let pages = vec![
            page(&["PREVIOUS BALANCE 100.00"]),
            page(&["PREVIOUS BALANCE 200.00"]),
        ];

        let result = CarryoverReconciler::new()
            .post_process_transactions(transactions, &pages, &config_with_pattern())
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].amount, BigDecimal::from_str("200.00").unwrap());
        assert_eq!(result[1].amount, BigDecimal::from_str("100.00").unwrap());
        assert_eq!(result[2].description, "COFFEE");
    }

    #[test]
    fn match_without_transactions_is_a_missing_anchor() {
        let pages = vec![page(&["PREVIOUS BALANCE 1,200.00"])];

        let result = CarryoverReconciler::new().post_process_transactions(
            Vec::new(),
            &pages,
            &config_with_pattern(),
        );

        assert!(matches!(result, Err(StatementError::MissingAnchor)));
    }

    #[test]
    fn empty_transactions_without_match_stay_empty() {
        let pages = vec![page(&["01 JUN  COFFEE  4.50"])];

        let result = CarryoverReconciler::new()
            .post_process_transactions(Vec::new(), &pages, &config_with_pattern())
            .unwrap();

        assert!(result.is_empty());
    }
}
