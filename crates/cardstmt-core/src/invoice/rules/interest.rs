//! Interest charge summary.

use tracing::debug;

use super::page::Page;
use super::patterns::{APR, INTEREST_THIS_MONTH, INTEREST_YEAR_TO_DATE, SUBJECT_TO_INTEREST};
use crate::error::{ExtractionError, Section};
use crate::invoice::Result;
use crate::models::invoice::Interest;

/// Extract interest figures from the first page that carries all four of them.
pub fn extract_interest(pages: &[Vec<String>]) -> Result<Interest> {
    for (number, tokens) in pages.iter().enumerate() {
        let page = Page::new(tokens, Section::Interest);

        let (Some(apr), Some(subject), Some(this_month), Some(ytd)) = (
            page.find(&APR),
            page.find(&SUBJECT_TO_INTEREST),
            page.find(&INTEREST_THIS_MONTH),
            page.find(&INTEREST_YEAR_TO_DATE),
        ) else {
            continue;
        };

        debug!("Found interest information on page {}", number + 1);

        return Ok(Interest {
            apr: page.percent(apr + 1)?,
            amount_subject_to_interest: page.currency(subject + 1)?,
            amount_this_month: page.currency(this_month + 1)?,
            amount_ytd: page.currency(ytd + 1)?,
        });
    }

    Err(ExtractionError::missing(Section::Interest, &*APR))
}
