//! Payment due date and statement period.

use chrono::NaiveDate;
use tracing::debug;

use super::dates::{infer_start_year, parse_date, DateFormat, UndatedYear};
use super::page::Page;
use super::patterns::{PAYMENT_DUE_BY, STATEMENT_PERIOD};
use crate::error::Section;
use crate::invoice::Result;

/// Dates printed in the statement header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementDates {
    pub payment_due_on: NaiveDate,
    pub statement_start_date: NaiveDate,
    pub statement_end_date: NaiveDate,
}

/// Extract the due date and the statement period from the summary page.
///
/// The period reads `Apple Card Customer, <details>, Statement, Jan 1, —,
/// Jan 31, 2024`. The start is printed without a year, which is resolved
/// according to `undated_year`.
pub fn extract_statement_dates(
    tokens: &[String],
    reference: NaiveDate,
    undated_year: UndatedYear,
) -> Result<StatementDates> {
    let page = Page::new(tokens, Section::StatementDates).with_reference(reference);

    let due_index = page.require(&[&PAYMENT_DUE_BY])?;
    let payment_due_on = page.date(due_index + 2, DateFormat::ShortMonthDayYear)?;

    let period_index = page.require(&[&STATEMENT_PERIOD])?;
    let statement_end_date = page.date(period_index + 5, DateFormat::ShortMonthDayYear)?;

    let start_token = page.token(period_index + 3)?;
    let statement_start_date = match undated_year {
        UndatedYear::Clock => parse_date(start_token, DateFormat::ShortMonthDay, reference)?,
        UndatedYear::StatementEnd => infer_start_year(start_token, statement_end_date)?,
    };

    debug!(
        "Statement period {} to {}, due {}",
        statement_start_date, statement_end_date, payment_due_on
    );

    Ok(StatementDates {
        payment_due_on,
        statement_start_date,
        statement_end_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn header(start: &str, end: &str) -> Vec<String> {
        tokens(&[
            "Apple Card Customer",
            "First Last, email@example.com",
            "Statement",
            start,
            "—",
            end,
            "Total Balance",
            "$3,813.61",
            "Payment",
            "Due By",
            "Feb 29, 2024",
        ])
    }

    #[test]
    fn test_extract_statement_dates() {
        let dates =
            extract_statement_dates(&header("Jan 1", "Jan 31, 2024"), ymd(2024, 2, 10), UndatedYear::Clock)
                .unwrap();
        assert_eq!(dates.payment_due_on, ymd(2024, 2, 29));
        assert_eq!(dates.statement_start_date, ymd(2024, 1, 1));
        assert_eq!(dates.statement_end_date, ymd(2024, 1, 31));
    }

    #[test]
    fn test_clock_year_for_start_date() {
        let dates =
            extract_statement_dates(&header("Dec 1", "Jan 1, 2024"), ymd(2024, 1, 5), UndatedYear::Clock)
                .unwrap();
        assert_eq!(dates.statement_start_date, ymd(2024, 12, 1));
    }

    #[test]
    fn test_statement_end_year_for_start_date() {
        let dates = extract_statement_dates(
            &header("Dec 1", "Jan 1, 2024"),
            ymd(2024, 1, 5),
            UndatedYear::StatementEnd,
        )
        .unwrap();
        assert_eq!(dates.statement_start_date, ymd(2023, 12, 1));
    }

    #[test]
    fn test_missing_period() {
        let page = tokens(&["Payment", "Due By", "Feb 29, 2024"]);
        assert!(matches!(
            extract_statement_dates(&page, ymd(2024, 1, 1), UndatedYear::Clock),
            Err(ExtractionError::MissingAnchor { section: Section::StatementDates, .. })
        ));
    }

    #[test]
    fn test_bad_due_date() {
        let mut page = header("Jan 1", "Jan 31, 2024");
        page[10] = "soon".to_string();
        assert!(matches!(
            extract_statement_dates(&page, ymd(2024, 1, 1), UndatedYear::Clock),
            Err(ExtractionError::Parse { .. })
        ));
    }
}
