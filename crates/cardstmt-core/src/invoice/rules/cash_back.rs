//! Daily Cash summary.

use tracing::debug;

use super::page::Page;
use super::patterns::{CASH_BACK_CARD, CASH_BACK_INSTALLMENTS, CASH_BACK_TOTAL};
use crate::error::{ExtractionError, Section};
use crate::invoice::Result;
use crate::models::invoice::CashBackSummary;

/// Extract the Daily Cash summary from the first page that carries it.
pub fn extract_cash_back(pages: &[Vec<String>]) -> Result<CashBackSummary> {
    for tokens in pages {
        let page = Page::new(tokens, Section::CashBack);

        let (Some(card), Some(total)) = (page.find(&CASH_BACK_CARD), page.find(&CASH_BACK_TOTAL))
        else {
            continue;
        };

        let summary = CashBackSummary {
            from_card: page.currency(card + 1)?,
            from_installments: page
                .find(&CASH_BACK_INSTALLMENTS)
                .map(|index| page.currency(index + 1))
                .transpose()?,
            total: page.currency(total + 1)?,
        };

        debug!("Daily Cash total {}", summary.total);
        return Ok(summary);
    }

    Err(ExtractionError::missing(Section::CashBack, &*CASH_BACK_CARD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_extract_cash_back() {
        let pages = vec![
            tokens(&["Total Balance", "$3,813.61"]),
            tokens(&[
                "Daily Cash from Apple Card",
                "$25.01",
                "Daily Cash from Apple Card Monthly Installments",
                "$0.00",
                "Total Daily Cash",
                "$25.01",
            ]),
        ];

        assert_eq!(
            extract_cash_back(&pages).unwrap(),
            CashBackSummary {
                from_card: dec("25.01"),
                from_installments: Some(Decimal::ZERO),
                total: dec("25.01"),
            }
        );
    }

    #[test]
    fn test_installments_line_is_optional() {
        let pages = vec![tokens(&[
            "Daily Cash from Apple Card",
            "$3.10",
            "Total Daily Cash",
            "$3.10",
        ])];
        assert_eq!(extract_cash_back(&pages).unwrap().from_installments, None);
    }

    #[test]
    fn test_missing_summary() {
        let pages = vec![tokens(&["Daily Cash from Apple Card", "$3.10"])];
        assert!(matches!(
            extract_cash_back(&pages),
            Err(ExtractionError::MissingAnchor { section: Section::CashBack, .. })
        ));
    }
}
