//! Read-only view over one page of statement tokens.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::amounts::{to_currency, to_percent};
use super::dates::{parse_date, DateFormat};
use super::sequence::Pattern;
use crate::error::{ExtractionError, Section};
use crate::invoice::Result;

/// Tokens of a single page, with anchor lookup and checked offset reads.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    tokens: &'a [String],
    section: Section,
    reference: NaiveDate,
}

impl<'a> Page<'a> {
    /// View `tokens` on behalf of `section`, which is named in any error.
    pub fn new(tokens: &'a [String], section: Section) -> Self {
        Self {
            tokens,
            section,
            reference: NaiveDate::default(),
        }
    }

    /// Date supplying the year for year-less date formats.
    pub fn with_reference(mut self, reference: NaiveDate) -> Self {
        self.reference = reference;
        self
    }

    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the first match of `pattern`.
    pub fn find(&self, pattern: &Pattern) -> Option<usize> {
        pattern.find(self.tokens)
    }

    /// Index of the first phrasing in `patterns` present on the page.
    pub fn find_any(&self, patterns: &[&Pattern]) -> Option<usize> {
        patterns.iter().find_map(|p| self.find(p))
    }

    /// Like [`Page::find_any`], failing with a missing-anchor error.
    pub fn require(&self, patterns: &[&Pattern]) -> Result<usize> {
        self.find_any(patterns).ok_or_else(|| {
            let anchor = patterns.first().map(|p| p.to_string()).unwrap_or_default();
            ExtractionError::missing(self.section, anchor)
        })
    }

    /// Raw token at `index`.
    pub fn token(&self, index: usize) -> Result<&'a str> {
        self.tokens.get(index).map(String::as_str).ok_or_else(|| {
            ExtractionError::incomplete(
                self.section,
                format!("expected a token at position {} but the page has {}", index, self.len()),
            )
        })
    }

    pub fn currency(&self, index: usize) -> Result<Decimal> {
        to_currency(self.token(index)?)
    }

    pub fn percent(&self, index: usize) -> Result<Decimal> {
        to_percent(self.token(index)?)
    }

    pub fn date(&self, index: usize, format: DateFormat) -> Result<NaiveDate> {
        parse_date(self.token(index)?, format, self.reference)
    }

    /// Tokens in `start..end`, clamped to the page.
    pub fn slice(&self, start: usize, end: usize) -> &'a [String] {
        let end = end.min(self.len());
        self.tokens.get(start.min(end)..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::rules::patterns::{PREVIOUS_MONTHLY_BALANCE, PRIOR_MONTHLY_BALANCE};

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_any_prefers_first_phrasing() {
        let page = tokens(&["Prior Monthly Balance", "$1.00", "Previous Monthly Balance", "$2.00"]);
        let view = Page::new(&page, Section::Balances);
        assert_eq!(
            view.find_any(&[&PREVIOUS_MONTHLY_BALANCE, &PRIOR_MONTHLY_BALANCE]),
            Some(2)
        );
    }

    #[test]
    fn test_require_reports_section() {
        let page = tokens(&["nothing here"]);
        let err = Page::new(&page, Section::Balances)
            .require(&[&PREVIOUS_MONTHLY_BALANCE])
            .unwrap_err();
        assert_eq!(err.section(), Some(Section::Balances));
        assert!(err.to_string().contains("Previous Monthly Balance"));
    }

    #[test]
    fn test_token_out_of_range_is_incomplete() {
        let page = tokens(&["Total Balance"]);
        let err = Page::new(&page, Section::Balances).currency(1).unwrap_err();
        assert!(matches!(err, ExtractionError::IncompleteRecord { .. }));
    }

    #[test]
    fn test_slice_is_clamped() {
        let page = tokens(&["a", "b", "c"]);
        let view = Page::new(&page, Section::Payments);
        assert_eq!(view.slice(1, 10), &page[1..]);
        assert!(view.slice(5, 2).is_empty());
    }
}
