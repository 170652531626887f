//! Date normalization for the statement's fixed date formats.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::invoice::Result;

/// Date layouts printed on the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `01/31/2024`
    MonthDayYear,
    /// `Jan 1` (no year)
    ShortMonthDay,
    /// `Jan 31, 2024`
    ShortMonthDayYear,
}

impl DateFormat {
    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::ShortMonthDay => "%b %d %Y",
            DateFormat::ShortMonthDayYear => "%b %d, %Y",
        }
    }

    pub fn has_year(&self) -> bool {
        !matches!(self, DateFormat::ShortMonthDay)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/dd/yyyy",
            DateFormat::ShortMonthDay => "MMM dd",
            DateFormat::ShortMonthDayYear => "MMM dd, yyyy",
        }
    }
}

/// Where the year of a year-less date comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndatedYear {
    /// Year of the parser's reference date (today unless overridden).
    #[default]
    Clock,
    /// Year of the statement end date, one earlier if the month is later.
    StatementEnd,
}

/// Parse `token` in `format`. Year-less formats take the year of `reference`.
pub fn parse_date(token: &str, format: DateFormat, reference: NaiveDate) -> Result<NaiveDate> {
    let token = token.trim();
    let parsed = if format.has_year() {
        NaiveDate::parse_from_str(token, format.pattern())
    } else {
        NaiveDate::parse_from_str(&format!("{} {}", token, reference.year()), format.pattern())
    };

    parsed.map_err(|_| ExtractionError::parse(format!("date ({})", format.name()), token))
}

/// Check whether `token` is a complete date in `format`.
pub fn is_date(token: &str, format: DateFormat) -> bool {
    format.has_year() && NaiveDate::parse_from_str(token.trim(), format.pattern()).is_ok()
}

/// Resolve the year of a statement start printed without one.
///
/// A period such as `Dec 1 — Jan 1, 2024` starts in the year before it ends.
pub fn infer_start_year(start_token: &str, end: NaiveDate) -> Result<NaiveDate> {
    let candidate = parse_date(start_token, DateFormat::ShortMonthDay, end)?;
    if candidate.month() > end.month() {
        let previous = NaiveDate::from_ymd_opt(end.year() - 1, 1, 1)
            .ok_or_else(|| ExtractionError::parse("statement start year", start_token))?;
        parse_date(start_token, DateFormat::ShortMonthDay, previous)
    } else {
        Ok(candidate)
    }
}
