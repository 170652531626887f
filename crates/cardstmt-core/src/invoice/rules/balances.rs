//! Previous and current balances.

use tracing::debug;

use super::page::Page;
use super::patterns::{
    PREVIOUS_MONTHLY_BALANCE, PREVIOUS_TOTAL_BALANCE, PRIOR_MONTHLY_BALANCE, PRIOR_TOTAL_BALANCE,
    TOTAL_BALANCE,
};
use crate::error::Section;
use crate::invoice::Result;
use crate::models::invoice::Balance;

/// Extract the three balances from the summary page.
///
/// Older statements say "Prior" where newer ones say "Previous".
pub fn extract_balances(tokens: &[String]) -> Result<Balance> {
    let page = Page::new(tokens, Section::Balances);

    let previous_month = page.require(&[&PREVIOUS_MONTHLY_BALANCE, &PRIOR_MONTHLY_BALANCE])?;
    let previous_total = page.require(&[&PREVIOUS_TOTAL_BALANCE, &PRIOR_TOTAL_BALANCE])?;
    let total = page.require(&[&TOTAL_BALANCE])?;

    let balance = Balance {
        previous_month: page.currency(previous_month + 1)?,
        previous_total: page.currency(previous_total + 1)?,
        total: page.currency(total + 1)?,
    };

    debug!("Found balances, total {}", balance.total);
    Ok(balance)
}
