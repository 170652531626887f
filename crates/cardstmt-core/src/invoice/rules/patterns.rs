//! Anchor phrases of the Apple Card statement layout.

use lazy_static::lazy_static;
use regex::Regex;

use super::sequence::{Matcher, Pattern};

fn phrase(tokens: &[&str]) -> Pattern {
    Pattern::from_tokens(tokens)
}

lazy_static! {
    // Customer and statement period
    pub static ref CUSTOMER: Pattern = Pattern::literal("Apple Card Customer");

    pub static ref STATEMENT_PERIOD: Pattern =
        phrase(&["Apple Card Customer", "*", "Statement", "*", "—"]);

    pub static ref PAYMENT_DUE_BY: Pattern = phrase(&["Payment", "Due By"]);

    // Balances
    pub static ref PREVIOUS_MONTHLY_BALANCE: Pattern = Pattern::literal("Previous Monthly Balance");
    pub static ref PRIOR_MONTHLY_BALANCE: Pattern = Pattern::literal("Prior Monthly Balance");
    pub static ref PREVIOUS_TOTAL_BALANCE: Pattern = Pattern::literal("Previous Total Balance");
    pub static ref PRIOR_TOTAL_BALANCE: Pattern = Pattern::literal("Prior Total Balance");
    pub static ref TOTAL_BALANCE: Pattern = Pattern::literal("Total Balance");

    // Interest
    pub static ref APR: Pattern = Pattern::literal("Annual Percentage Rate (APR)");
    pub static ref SUBJECT_TO_INTEREST: Pattern = Pattern::literal("Balance subject to interest rate");
    pub static ref INTEREST_THIS_MONTH: Pattern = Pattern::literal("Total interest for this month");
    pub static ref INTEREST_YEAR_TO_DATE: Pattern = Pattern::new(vec![Matcher::Regex(
        Regex::new(r"Total interest charged in \d{4}").unwrap()
    )]);

    // Minimum payment
    pub static ref MINIMUM_PAYMENT_DUE: Pattern = phrase(&["Minimum", "Payment Due"]);

    pub static ref MINIMUM_TRANSACTIONS: Pattern =
        phrase(&["Apple Card transactions", "*", "minimum payment"]);

    pub static ref MINIMUM_INSTALLMENTS: Pattern =
        phrase(&["Apple Card Monthly Installments", "*", "Minimum Payment Warning"]);

    pub static ref DEFERRED_ESTIMATE: Pattern = phrase(&[
        "And will end up paying an estimated total of:",
        "Only minimum payment",
    ]);

    // Payments
    pub static ref PAYMENTS_HEADER: Pattern = phrase(&["Payments", "Date", "Description", "Amount"]);
    pub static ref PAYMENTS_END: Pattern = Pattern::literal("Total payments for this period");

    // Monthly installments
    pub static ref INSTALLMENTS_HEADER: Pattern = phrase(&[
        "Apple Card Monthly Installments",
        "Dates",
        "Description",
        "Daily Cash",
        "Amounts",
    ]);
    pub static ref TOTAL_FINANCED: Pattern = Pattern::literal("Total financed");
    pub static ref TOTAL_INSTALLMENT_PAYMENTS: Pattern = Pattern::literal("Total payments and credits");
    pub static ref TOTAL_REMAINING: Pattern = Pattern::literal("Total remaining");

    // Daily Cash summary
    pub static ref CASH_BACK_CARD: Pattern = Pattern::literal("Daily Cash from Apple Card");
    pub static ref CASH_BACK_INSTALLMENTS: Pattern =
        Pattern::literal("Daily Cash from Apple Card Monthly Installments");
    pub static ref CASH_BACK_TOTAL: Pattern = Pattern::literal("Total Daily Cash");

    // Transactions
    pub static ref TRANSACTIONS_HEADER: Pattern =
        phrase(&["Transactions", "Date", "Description", "Daily Cash", "Amount"]);
    pub static ref TRANSACTIONS_END: Pattern = Pattern::literal("Total Daily Cash this month");
    pub static ref PAGE_FOOTER: Pattern = Pattern::new(vec![Matcher::Regex(
        Regex::new(r"Page \d+ /\d+").unwrap()
    )]);
}
