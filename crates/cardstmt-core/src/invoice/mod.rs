//! Statement field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, StatementParser};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for statement parsers.
pub trait InvoiceParser {
    /// Parse a statement from its per-page tokens.
    fn parse(&self, pages: &[Vec<String>]) -> Result<ExtractionResult>;
}
