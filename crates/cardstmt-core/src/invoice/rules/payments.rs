//! Payments table.

use tracing::{debug, trace};

use super::dates::DateFormat;
use super::page::Page;
use super::patterns::{PAYMENTS_END, PAYMENTS_HEADER};
use crate::error::{ExtractionError, Section};
use crate::invoice::Result;
use crate::models::invoice::Payment;

/// Records are `date, description, amount`.
const RECORD_WIDTH: usize = 3;

/// Extract payments from every page that carries a payments table.
///
/// Each table runs from its header to `Total payments for this period`.
/// A statement without a single payment is rejected.
pub fn extract_payments(pages: &[Vec<String>]) -> Result<Vec<Payment>> {
    let mut payments = Vec::new();
    let mut tables = 0;

    for (number, tokens) in pages.iter().enumerate() {
        let page = Page::new(tokens, Section::Payments);

        let Some(header) = page.find(&PAYMENTS_HEADER) else {
            continue;
        };
        tables += 1;

        let end = page.find(&PAYMENTS_END).ok_or_else(|| {
            ExtractionError::incomplete(
                Section::Payments,
                format!("payments table on page {} has no closing total", number + 1),
            )
        })?;

        let mut index = header + PAYMENTS_HEADER.len();
        while index < end {
            let payment = Payment {
                date: page.date(index, DateFormat::MonthDayYear)?,
                description: page.token(index + 1)?.to_string(),
                amount: page.currency(index + 2)?,
            };
            trace!("Payment {} {}", payment.date, payment.amount);
            payments.push(payment);
            index += RECORD_WIDTH;
        }
    }

    if tables == 0 {
        return Err(ExtractionError::missing(Section::Payments, &*PAYMENTS_HEADER));
    }
    if payments.is_empty() {
        return Err(ExtractionError::incomplete(
            Section::Payments,
            "payments table contains no payments",
        ));
    }

    debug!("Found {} payments in {} tables", payments.len(), tables);
    Ok(payments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn payments_page(rows: &[&str]) -> Vec<String> {
        let mut page = tokens(&["Payments", "Date", "Description", "Amount"]);
        page.extend(tokens(rows));
        page.extend(tokens(&["Total payments for this period", "-$2,386.95"]));
        page
    }

    #[test]
    fn test_extract_payments() {
        let pages = vec![
            tokens(&["Summary"]),
            payments_page(&[
                "01/31/2024",
                "ACH Deposit Internet transfer from account ending in 1234",
                "-$2,386.95",
            ]),
        ];

        assert_eq!(
            extract_payments(&pages).unwrap(),
            vec![Payment {
                date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                description: "ACH Deposit Internet transfer from account ending in 1234".to_string(),
                amount: Decimal::from_str("-2386.95").unwrap(),
            }]
        );
    }

    #[test]
    fn test_payments_across_pages() {
        let pages = vec![
            payments_page(&["01/02/2024", "Transfer", "-$10.00", "01/09/2024", "Transfer", "-$20.00"]),
            payments_page(&["01/16/2024", "Transfer", "-$30.00"]),
        ];
        let payments = extract_payments(&pages).unwrap();
        assert_eq!(payments.len(), 3);
        assert_eq!(payments[2].amount, Decimal::from_str("-30").unwrap());
    }

    #[test]
    fn test_no_payments_table() {
        let pages = vec![tokens(&["Transactions"])];
        assert!(matches!(
            extract_payments(&pages),
            Err(ExtractionError::MissingAnchor { section: Section::Payments, .. })
        ));
    }

    #[test]
    fn test_empty_payments_table() {
        let pages = vec![payments_page(&[])];
        assert!(matches!(
            extract_payments(&pages),
            Err(ExtractionError::IncompleteRecord { section: Section::Payments, .. })
        ));
    }

    #[test]
    fn test_table_without_closing_total() {
        let pages = vec![tokens(&["Payments", "Date", "Description", "Amount", "01/31/2024"])];
        assert!(matches!(
            extract_payments(&pages),
            Err(ExtractionError::IncompleteRecord { .. })
        ));
    }
}
