//! Minimum payment due and the minimum payment warning.

use tracing::{debug, trace};

use super::page::Page;
use super::patterns::{
    DEFERRED_ESTIMATE, MINIMUM_INSTALLMENTS, MINIMUM_PAYMENT_DUE, MINIMUM_TRANSACTIONS,
};
use crate::error::Section;
use crate::invoice::Result;
use crate::models::invoice::{DeferredInterestEstimate, MinimumPayment};

/// Extract the minimum payment breakdown from the summary page.
///
/// Only the total is mandatory. The transaction portion falls back to the
/// total; the installment portion and the deferred-interest projection are
/// absent on statements without installments or without the warning box.
pub fn extract_minimum_payment(tokens: &[String]) -> Result<MinimumPayment> {
    let page = Page::new(tokens, Section::MinimumPayment);

    let total_index = page.require(&[&MINIMUM_PAYMENT_DUE])?;
    let total = page.currency(total_index + 2)?;

    let transaction = match page.find(&MINIMUM_TRANSACTIONS) {
        Some(index) => page.currency(index + 1)?,
        None => {
            trace!("No transaction portion of the minimum payment, using the total");
            total
        }
    };

    let installment = page
        .find(&MINIMUM_INSTALLMENTS)
        .map(|index| page.currency(index + 1))
        .transpose()?;

    let estimated_deferred = page
        .find(&DEFERRED_ESTIMATE)
        .map(|index| -> Result<DeferredInterestEstimate> {
            Ok(DeferredInterestEstimate {
                total: page.currency(index + 3)?,
                time: page.token(index + 2)?.to_string(),
            })
        })
        .transpose()?;

    debug!(
        "Minimum payment {} (installments: {}, deferred estimate: {})",
        total,
        installment.is_some(),
        estimated_deferred.is_some()
    );

    Ok(MinimumPayment {
        total,
        transaction,
        installment,
        estimated_deferred,
    })
}
