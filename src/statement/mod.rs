//! Statement aggregate and variant wiring

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::matching::{PatternMatch, PrevBalancePattern};
use crate::reconciliation::CarryoverReconciler;
use crate::safety::{DebitSafetyCheck, SafetyCheckEngine};
use crate::traits::SafetyCheck;
use crate::types::{EntryType, Page, StatementResult, Transaction};
use crate::utils::numbers::RegexNumberExtractor;

/// Bank-specific extraction parameters for one statement layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// Pattern matching a prose previous-balance line, if the layout has one
    pub prev_balance_pattern: Option<PrevBalancePattern>,
    /// Bank identifier this configuration belongs to
    pub bank: Option<String>,
    /// Additional layout parameters, opaque to post-processing
    pub metadata: HashMap<String, String>,
}

/// One extracted statement: pages, configuration and transactions
///
/// Constructed by the extraction pipeline with all fields populated.
/// Post-processing only ever prepends to the transaction sequence; page text
/// is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement variant
    pub entry_type: EntryType,
    /// Ordered pages of source text
    pub pages: Vec<Page>,
    /// Layout configuration used to extract this statement
    pub config: StatementConfig,
    /// Extracted transactions, in document order
    pub transactions: Vec<Transaction>,
}

impl Statement {
    /// Create a statement from already-extracted parts
    pub fn new(
        entry_type: EntryType,
        pages: Vec<Page>,
        config: StatementConfig,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            entry_type,
            pages,
            config,
            transactions,
        }
    }

    /// Previous-balance matches found in this statement's pages
    pub fn prev_balance_matches(&self) -> Vec<PatternMatch> {
        self.config
            .prev_balance_pattern
            .as_ref()
            .map(|pattern| pattern.find_matches(&self.pages))
            .unwrap_or_default()
    }

    /// Run variant-specific post-processing over the transaction sequence
    ///
    /// Credit statements reconcile prose carry-over balances into synthetic
    /// transactions; debit statements have no carry-over repair and pass
    /// through unchanged.
    pub fn post_process_transactions(&mut self) -> StatementResult<()> {
        if self.entry_type == EntryType::Credit {
            self.transactions = CarryoverReconciler::new().post_process_transactions(
                self.transactions.clone(),
                &self.pages,
                &self.config,
            )?;
        }
        Ok(())
    }

    /// Run the variant's safety check over this statement
    pub fn perform_safety_check(&self) -> StatementResult<bool> {
        let extractor = RegexNumberExtractor::new()?;
        match self.entry_type {
            EntryType::Credit => SafetyCheckEngine::new(extractor).perform_safety_check(self),
            EntryType::Debit => DebitSafetyCheck::new(extractor).perform_safety_check(self),
        }
    }
}
