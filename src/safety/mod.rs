//! Safety checks corroborating transaction totals against document text

pub mod credit;
pub mod debit;

pub use credit::*;
pub use debit::*;

use bigdecimal::BigDecimal;

use crate::types::{EntryType, Transaction};

/// Signed sum of all transaction amounts, rounded to 2 decimal places
pub fn rounded_total(transactions: &[Transaction]) -> BigDecimal {
    transactions
        .iter()
        .map(|t| &t.amount)
        .sum::<BigDecimal>()
        .round(2)
}

/// Credit-side total and debit-side magnitude, each rounded to 2 decimal
/// places
pub(crate) fn side_totals(transactions: &[Transaction]) -> (BigDecimal, BigDecimal) {
    let credit: BigDecimal = transactions
        .iter()
        .filter(|t| t.entry_type() == EntryType::Credit)
        .map(|t| &t.amount)
        .sum();
    let debit: BigDecimal = transactions
        .iter()
        .filter(|t| t.entry_type() == EntryType::Debit)
        .map(|t| &t.amount)
        .sum();

    (credit.round(2), debit.abs().round(2))
}
