//! Currency and percentage normalization.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ExtractionError;
use crate::invoice::Result;

/// Strip everything but ASCII digits, `.` and `-`.
fn numeric_part(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Parse a currency token such as `"$1,579.00"` or `"-$2,386.95"`.
///
/// Currency symbols, thousands separators and any other decoration are
/// dropped. A token with no parseable number left is an error.
pub fn to_currency(token: &str) -> Result<Decimal> {
    let cleaned = numeric_part(token);
    Decimal::from_str(&cleaned).map_err(|_| ExtractionError::parse("currency amount", token))
}

/// Parse a percentage token such as `"3%"` into a fraction (`0.03`).
pub fn to_percent(token: &str) -> Result<Decimal> {
    to_currency(token)
        .map(|value| value / Decimal::ONE_HUNDRED)
        .map_err(|_| ExtractionError::parse("percentage", token))
}
