//! Regex-based numeric re-extraction from raw page text

use bigdecimal::BigDecimal;
use regex::Regex;
use std::str::FromStr;

use crate::traits::NumberExtractor;
use crate::types::{Page, StatementError, StatementResult};

/// Decimal tokens, with or without thousands separators. Plain integers are
/// excluded: years and reference numbers would drown out the totals.
const NUMBER_PATTERN: &str = r"\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+\.\d+";

/// Default [`NumberExtractor`] scanning page text for decimal tokens
#[derive(Debug, Clone)]
pub struct RegexNumberExtractor {
    regex: Regex,
}

impl RegexNumberExtractor {
    /// Create a new extractor
    pub fn new() -> StatementResult<Self> {
        let regex =
            Regex::new(NUMBER_PATTERN).map_err(|e| StatementError::Pattern(e.to_string()))?;
        Ok(Self { regex })
    }
}

impl NumberExtractor for RegexNumberExtractor {
    fn get_all_numbers_from_document(&self, pages: &[Page]) -> Vec<BigDecimal> {
        let mut numbers = Vec::new();

        for page in pages {
            for line in page.lines() {
                for token in self.regex.find_iter(line) {
                    let cleaned = token.as_str().replace(',', "");
                    if let Ok(value) = BigDecimal::from_str(&cleaned) {
                        let value = value.round(2);
                        if !numbers.contains(&value) {
                            numbers.push(value);
                        }
                    }
                }
            }
        }

        numbers
    }
}
