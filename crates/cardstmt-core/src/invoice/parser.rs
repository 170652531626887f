//! Statement parser running every section extractor over a token document.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ExtractionError, Section};
use crate::models::config::ExtractionConfig;
use crate::models::invoice::Invoice;

use super::rules::{
    extract_balances, extract_cash_back, extract_customer, extract_installments,
    extract_interest, extract_minimum_payment, extract_payments, extract_statement_dates,
    extract_transactions, patterns::CUSTOMER, UndatedYear,
};
use super::{InvoiceParser, Result};

/// Result of statement extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted statement.
    pub invoice: Invoice,
    /// Consistency warnings; they never abort a parse.
    pub warnings: Vec<String>,
    /// Number of pages in the input.
    pub page_count: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser for Apple Card monthly statements.
#[derive(Debug, Clone)]
pub struct StatementParser {
    /// Supplies the year of year-less dates under [`UndatedYear::Clock`].
    reference_date: NaiveDate,
    undated_year: UndatedYear,
    validate: bool,
}

impl StatementParser {
    /// Create a parser with default settings, using today as the reference date.
    pub fn new() -> Self {
        Self {
            reference_date: Local::now().date_naive(),
            undated_year: UndatedYear::default(),
            validate: true,
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_undated_year(config.undated_year)
            .with_validation(config.validate)
    }

    /// Set the reference date.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    /// Set how the year of the statement start date is resolved.
    pub fn with_undated_year(mut self, undated_year: UndatedYear) -> Self {
        self.undated_year = undated_year;
        self
    }

    /// Enable or disable consistency checks.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    fn extract(&self, pages: &[Vec<String>]) -> Result<Invoice> {
        // Summary sections live on the first page.
        let summary = pages
            .first()
            .ok_or_else(|| ExtractionError::missing(Section::Customer, &*CUSTOMER))?;

        let customer = extract_customer(summary)?;
        let balance = extract_balances(summary)?;
        let dates = extract_statement_dates(summary, self.reference_date, self.undated_year)?;
        let interest = extract_interest(pages)?;
        let minimum_payment = extract_minimum_payment(summary)?;
        let payments = extract_payments(pages)?;
        let monthly_installments = extract_installments(pages)?;
        let cash_back = extract_cash_back(pages)?;
        let transactions = extract_transactions(pages)?;

        Ok(Invoice {
            customer,
            balance,
            payment_due_on: dates.payment_due_on,
            statement_start_date: dates.statement_start_date,
            statement_end_date: dates.statement_end_date,
            interest,
            minimum_payment,
            payments,
            monthly_installments,
            cash_back,
            transactions,
        })
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

/// wasm32-unknown-unknown has no std clock, so timing is reported as 0 there.
#[cfg(not(target_arch = "wasm32"))]
fn start_clock() -> Option<Instant> {
    Some(Instant::now())
}

#[cfg(target_arch = "wasm32")]
fn start_clock() -> Option<Instant> {
    None
}

impl InvoiceParser for StatementParser {
    fn parse(&self, pages: &[Vec<String>]) -> Result<ExtractionResult> {
        let start = start_clock();

        info!(
            "Parsing statement from {} pages ({} tokens)",
            pages.len(),
            pages.iter().map(Vec::len).sum::<usize>()
        );

        let invoice = self.extract(pages)?;

        let warnings = if self.validate { invoice.validate() } else { Vec::new() };
        for warning in &warnings {
            warn!("{}", warning);
        }

        debug!(
            "Extracted statement {} to {} with {} transactions and {} payments",
            invoice.statement_start_date,
            invoice.statement_end_date,
            invoice.transactions.len(),
            invoice.payments.len()
        );

        Ok(ExtractionResult {
            invoice,
            warnings,
            page_count: pages.len(),
            processing_time_ms: start.map_or(0, |s| s.elapsed().as_millis() as u64),
        })
    }
}
