//! PDF tokenizing module.

mod tokenizer;

pub use tokenizer::PdfTokenizer;

use crate::error::PdfError;
use crate::models::invoice::TokenizedDocument;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for turning a statement document into per-page tokens.
pub trait PageTokenizer {
    /// Tokenize a document held in memory.
    fn tokenize(&self, data: &[u8]) -> Result<TokenizedDocument>;
}
