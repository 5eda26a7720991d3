//! Previous-balance pattern matching over page text

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{CapturedFields, Page, StatementError, StatementResult};

/// Capture group names recognised as transaction fields
const KNOWN_GROUPS: [&str; 3] = ["transaction_date", "description", "amount"];

/// Groups a pattern must capture to yield a usable transaction
const REQUIRED_GROUPS: [&str; 2] = ["description", "amount"];

/// A compiled previous-balance pattern
///
/// Named capture groups form a schema over [`crate::Transaction`] fields,
/// validated at construction so configuration typos fail at startup rather
/// than at match time. Serializes as its source string, so it can live in
/// bank configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrevBalancePattern {
    regex: Regex,
}

impl PrevBalancePattern {
    /// Compile a pattern and validate its capture group schema
    pub fn new(pattern: &str) -> StatementResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| StatementError::Pattern(e.to_string()))?;

        let names: Vec<&str> = regex.capture_names().flatten().collect();
        for name in &names {
            if !KNOWN_GROUPS.contains(name) {
                return Err(StatementError::Pattern(format!(
                    "unknown capture group '{name}', expected one of {KNOWN_GROUPS:?}"
                )));
            }
        }
        for required in REQUIRED_GROUPS {
            if !names.contains(&required) {
                return Err(StatementError::Pattern(format!(
                    "missing required capture group '{required}'"
                )));
            }
        }

        Ok(Self { regex })
    }

    /// The pattern's source string
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Collect every match across all pages
    ///
    /// Matches preserve document traversal order: pages in order, lines
    /// within a page in order, at most one match per line. An empty result
    /// is the common case and not an error. Disambiguation between multiple
    /// matches is the caller's responsibility.
    pub fn find_matches(&self, pages: &[Page]) -> Vec<PatternMatch> {
        let mut matches = Vec::new();

        for (page_index, page) in pages.iter().enumerate() {
            for (line_index, line) in page.lines().iter().enumerate() {
                if let Some(caps) = self.regex.captures(line) {
                    matches.push(PatternMatch {
                        page: page_index,
                        line: line_index,
                        fields: CapturedFields {
                            transaction_date: caps
                                .name("transaction_date")
                                .map(|m| m.as_str().to_string()),
                            description: caps
                                .name("description")
                                .map(|m| m.as_str().to_string())
                                .unwrap_or_default(),
                            amount: caps
                                .name("amount")
                                .map(|m| m.as_str().to_string())
                                .unwrap_or_default(),
                        },
                    });
                }
            }
        }

        matches
    }
}

impl PartialEq for PrevBalancePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl TryFrom<String> for PrevBalancePattern {
    type Error = StatementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PrevBalancePattern> for String {
    fn from(pattern: PrevBalancePattern) -> Self {
        pattern.as_str().to_string()
    }
}

/// One pattern match, with its position in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Index of the page the match was found on
    pub page: usize,
    /// Index of the line within the page
    pub line: usize,
    /// Field values captured by the match
    pub fields: CapturedFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERN: &str = r"(?P<description>PREVIOUS BALANCE)\s+(?P<amount>[\d,]+\.\d{2})";

    fn page(lines: &[&str]) -> Page {
        Page::new(lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn rejects_unknown_capture_group() {
        let result = PrevBalancePattern::new(r"(?P<description>X)\s+(?P<amnt>\d+\.\d{2})");
        assert!(matches!(result, Err(StatementError::Pattern(_))));
    }

    #[test]
    fn requires_amount_group() {
        let result = PrevBalancePattern::new(r"(?P<description>PREVIOUS BALANCE)");
        assert!(matches!(result, Err(StatementError::Pattern(_))));
    }

    #[test]
    fn rejects_invalid_regex() {
        let result = PrevBalancePattern::new(r"(?P<description>[)");
        assert!(matches!(result, Err(StatementError::Pattern(_))));
    }

    #[test]
    fn collects_matches_in_document_order() {
        let pattern = PrevBalancePattern::new(PATTERN).unwrap();
        let pages = vec![
            page(&[
                "STATEMENT OF ACCOUNT",
                "PREVIOUS BALANCE 1,200.00",
                "01 JUN  COFFEE  4.50",
            ]),
            page(&["PREVIOUS BALANCE 90.00"]),
        ];

        let matches = pattern.find_matches(&pages);

        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].page, matches[0].line), (0, 1));
        assert_eq!(matches[0].fields.amount, "1,200.00");
        assert_eq!((matches[1].page, matches[1].line), (1, 0));
        assert_eq!(matches[1].fields.amount, "90.00");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let pattern = PrevBalancePattern::new(PATTERN).unwrap();
        let pages = vec![page(&["01 JUN  COFFEE  4.50"])];

        assert!(pattern.find_matches(&pages).is_empty());
    }

    #[test]
    fn captures_optional_date_group() {
        let pattern = PrevBalancePattern::new(
            r"(?P<transaction_date>\d{2}/\d{2})?\s*(?P<description>BALANCE B/F)\s+(?P<amount>\d+\.\d{2})",
        )
        .unwrap();
        let pages = vec![page(&["01/05 BALANCE B/F 55.10"])];

        let matches = pattern.find_matches(&pages);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fields.transaction_date.as_deref(), Some("01/05"));
    }
}
