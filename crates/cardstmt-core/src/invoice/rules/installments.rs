//! Apple Card Monthly Installments table.
//!
//! Installment rows have no fixed width: the description spans a variable
//! number of lines and the Daily Cash columns are blank for purchases that
//! earned none. Rows are therefore grouped by their leading date and each
//! group is classified token by token.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::amounts::{to_currency, to_percent};
use super::dates::{is_date, parse_date, DateFormat};
use super::page::Page;
use super::patterns::{
    INSTALLMENTS_HEADER, TOTAL_FINANCED, TOTAL_INSTALLMENT_PAYMENTS, TOTAL_REMAINING,
};
use crate::error::{ExtractionError, Section};
use crate::invoice::Result;
use crate::models::invoice::{InstallmentTotals, MonthlyInstallmentItem, MonthlyInstallmentPlan};

/// Extract the installment plan from the first page that carries one.
///
/// Returns `Ok(None)` for statements without installments. A table that is
/// present but yields no items is an error.
pub fn extract_installments(pages: &[Vec<String>]) -> Result<Option<MonthlyInstallmentPlan>> {
    for tokens in pages {
        let page = Page::new(tokens, Section::Installments);

        let (Some(financed), Some(payments), Some(remaining), Some(header)) = (
            page.find(&TOTAL_FINANCED),
            page.find(&TOTAL_INSTALLMENT_PAYMENTS),
            page.find(&TOTAL_REMAINING),
            page.find(&INSTALLMENTS_HEADER),
        ) else {
            continue;
        };

        let totals = InstallmentTotals {
            financed: page.currency(financed + 1)?,
            payments: page.currency(payments + 1)?,
            remaining: page.currency(remaining + 1)?,
        };

        let rows = page.slice(header + INSTALLMENTS_HEADER.len(), financed);
        let items = bin_rows(rows)?
            .into_iter()
            .map(|row| InstallmentDraft::fold(row)?.build())
            .collect::<Result<Vec<_>>>()?;

        if items.is_empty() {
            return Err(ExtractionError::incomplete(
                Section::Installments,
                "installments table contains no items",
            ));
        }

        debug!("Found {} installment items, {} financed", items.len(), totals.financed);
        return Ok(Some(MonthlyInstallmentPlan { totals, items }));
    }

    trace!("No installments table");
    Ok(None)
}

/// Group tokens into rows, each starting at a `MM/dd/yyyy` date.
fn bin_rows(tokens: &[String]) -> Result<Vec<&[String]>> {
    let mut starts = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        if is_date(token, DateFormat::MonthDayYear) {
            starts.push(index);
        } else if starts.is_empty() {
            return Err(ExtractionError::incomplete(
                Section::Installments,
                format!("{:?} precedes the first installment date", token),
            ));
        }
    }

    let ends = starts.iter().skip(1).copied().chain(Some(tokens.len()));
    Ok(starts.iter().zip(ends).map(|(&start, end)| &tokens[start..end]).collect())
}

/// One installment row being assembled.
#[derive(Debug, Default)]
struct InstallmentDraft {
    date: Option<NaiveDate>,
    description: Vec<String>,
    cash_back_percentage: Option<Decimal>,
    cash_back_amount: Option<Decimal>,
    amount: Option<Decimal>,
}

impl InstallmentDraft {
    /// Classify the tokens of one row. The first token is the row date.
    fn fold(row: &[String]) -> Result<Self> {
        let mut draft = Self::default();
        let Some((date, rest)) = row.split_first() else {
            return Ok(draft);
        };
        draft.date = Some(parse_date(date, DateFormat::MonthDayYear, NaiveDate::default())?);
        trace!("Installment row {} with {} tokens", date, rest.len());

        let mut tokens = rest.iter();
        while let Some(token) = tokens.next() {
            if token.starts_with('$') {
                draft.amount = Some(to_currency(token)?);
            } else if token.ends_with('%') {
                draft.cash_back_percentage = Some(to_percent(token)?);
                if let Some(amount) = tokens.next() {
                    draft.cash_back_amount = Some(to_currency(amount)?);
                }
            } else {
                draft.description.push(token.clone());
            }
        }

        Ok(draft)
    }

    fn build(self) -> Result<MonthlyInstallmentItem> {
        let (Some(date), Some(amount)) = (self.date, self.amount) else {
            return Err(ExtractionError::incomplete(
                Section::Installments,
                format!("installment {:?} has no amount", self.description.join(" ")),
            ));
        };

        Ok(MonthlyInstallmentItem {
            date,
            description: self.description.join(" ").trim().to_string(),
            cash_back_amount: self.cash_back_amount.unwrap_or_default(),
            cash_back_percentage: self.cash_back_percentage.unwrap_or_default(),
            amount,
        })
    }
}
