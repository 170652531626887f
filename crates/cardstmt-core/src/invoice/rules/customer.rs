//! Customer name and e-mail.

use tracing::debug;

use super::page::Page;
use super::patterns::CUSTOMER;
use crate::error::{ExtractionError, Section};
use crate::invoice::Result;
use crate::models::invoice::Customer;

/// Extract the customer from the summary page.
///
/// The token after `Apple Card Customer` reads `"<name>, <email>"`.
pub fn extract_customer(tokens: &[String]) -> Result<Customer> {
    let page = Page::new(tokens, Section::Customer);
    let index = page.require(&[&CUSTOMER])?;
    let details = page.token(index + 1)?;

    let (name, email) = details.split_once(", ").ok_or_else(|| {
        ExtractionError::incomplete(
            Section::Customer,
            format!("expected \"<name>, <email>\" but found {:?}", details),
        )
    })?;

    debug!("Found customer {}", name);

    Ok(Customer {
        name: name.to_string(),
        email: email.to_string(),
    })
}
