//! Apple Card statement data model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully extracted monthly statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: Customer,

    pub balance: Balance,

    /// Date the minimum payment is due.
    pub payment_due_on: NaiveDate,

    pub statement_start_date: NaiveDate,

    pub statement_end_date: NaiveDate,

    pub interest: Interest,

    pub minimum_payment: MinimumPayment,

    /// Payments in statement order.
    pub payments: Vec<Payment>,

    /// Present only on statements with Apple Card Monthly Installments.
    #[serde(default)]
    pub monthly_installments: Option<MonthlyInstallmentPlan>,

    pub cash_back: CashBackSummary,

    /// Transactions in statement order.
    pub transactions: Vec<Transaction>,
}

/// Card holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

/// Balances from the statement summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Previous monthly balance.
    pub previous_month: Decimal,
    /// Previous total balance, including installments.
    pub previous_total: Decimal,
    /// Total balance at the end of the period.
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    /// Annual percentage rate as a fraction, e.g. `0.2724`.
    pub apr: Decimal,
    pub amount_subject_to_interest: Decimal,
    pub amount_this_month: Decimal,
    /// Interest charged so far this calendar year.
    pub amount_ytd: Decimal,
}

/// Minimum payment due and its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumPayment {
    pub total: Decimal,

    /// Portion attributable to card transactions.
    pub transaction: Decimal,

    /// Portion attributable to monthly installments.
    #[serde(default)]
    pub installment: Option<Decimal>,

    /// Projected cost of paying only the minimum.
    #[serde(default)]
    pub estimated_deferred: Option<DeferredInterestEstimate>,
}

/// Minimum Payment Warning projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredInterestEstimate {
    /// Estimated total paid.
    pub total: Decimal,
    /// Payoff duration as printed, e.g. `14 years`.
    pub time: String,
}

/// Payment or credit. Credits are negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyInstallmentPlan {
    pub totals: InstallmentTotals,
    /// Never empty.
    pub items: Vec<MonthlyInstallmentItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentTotals {
    pub financed: Decimal,
    pub payments: Decimal,
    pub remaining: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyInstallmentItem {
    /// Purchase date.
    pub date: NaiveDate,
    pub description: String,
    pub cash_back_amount: Decimal,
    /// Fraction, e.g. `0.03`.
    pub cash_back_percentage: Decimal,
    /// Financed amount.
    pub amount: Decimal,
}

/// Daily Cash earned during the period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashBackSummary {
    pub from_card: Decimal,
    #[serde(default)]
    pub from_installments: Option<Decimal>,
    pub total: Decimal,
}

/// Card transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Fraction, e.g. `0.01`.
    pub cash_back_percent: Decimal,
    pub cash_back_amount: Decimal,
    pub amount: Decimal,
}

/// Per-page token streams of a statement, as produced by a tokenizer.
///
/// Serialized as a bare JSON array of arrays of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenizedDocument {
    pub pages: Vec<Vec<String>>,
}

impl TokenizedDocument {
    /// Build a document, trimming tokens and dropping empty ones.
    pub fn new(pages: Vec<Vec<String>>) -> Self {
        Self {
            pages: pages.into_iter().map(normalize_tokens).collect(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn token_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

/// Trim every token and drop the ones left empty.
pub fn normalize_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref().trim();
            (!token.is_empty()).then(|| token.to_string())
        })
        .collect()
}

impl Invoice {
    /// Check the statement for internal inconsistencies.
    ///
    /// Returns human-readable warnings; an empty list means the figures agree.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.statement_start_date > self.statement_end_date {
            issues.push(format!(
                "Statement starts ({}) after it ends ({})",
                self.statement_start_date, self.statement_end_date
            ));
        }

        if self.payment_due_on < self.statement_end_date {
            issues.push(format!(
                "Payment due date ({}) precedes the statement end ({})",
                self.payment_due_on, self.statement_end_date
            ));
        }

        if let Some(plan) = &self.monthly_installments {
            let totals = plan.totals;
            if totals.financed - totals.payments != totals.remaining {
                issues.push(format!(
                    "Installments financed ({}) minus payments ({}) differs from remaining ({})",
                    totals.financed, totals.payments, totals.remaining
                ));
            }
        }

        let cash_back = self.cash_back;
        let components = cash_back.from_card + cash_back.from_installments.unwrap_or_default();
        if components != cash_back.total {
            issues.push(format!(
                "Daily Cash components ({}) differ from total ({})",
                components, cash_back.total
            ));
        }

        issues
    }
}
