//! PDF text tokenizing using lopdf.

use lopdf::Document;
use tracing::{debug, trace};

use super::{PageTokenizer, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;
use crate::models::invoice::{normalize_tokens, TokenizedDocument};

/// Tokenizer turning each text line of a PDF page into one token.
#[derive(Debug, Clone, Default)]
pub struct PdfTokenizer {
    /// Maximum pages to tokenize (0 = unlimited).
    max_pages: usize,
}

impl PdfTokenizer {
    /// Create a new PDF tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new().with_max_pages(config.max_pages)
    }

    /// Limit the number of pages read from the front of the document.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    fn load(&self, data: &[u8]) -> Result<Document> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Try the empty user password
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");
        }

        Ok(doc)
    }

    /// Tokens of a single page (1-indexed).
    pub fn page_tokens(&self, doc: &Document, page: u32) -> Result<Vec<String>> {
        if !doc.get_pages().contains_key(&page) {
            return Err(PdfError::InvalidPage(page));
        }

        let text = doc.extract_text(&[page]).map_err(|e| PdfError::TextExtraction {
            page,
            reason: e.to_string(),
        })?;

        let tokens = normalize_tokens(text.lines());
        trace!("Page {}: {} tokens", page, tokens.len());
        Ok(tokens)
    }
}

impl PageTokenizer for PdfTokenizer {
    fn tokenize(&self, data: &[u8]) -> Result<TokenizedDocument> {
        let doc = self.load(data)?;

        let numbers: Vec<u32> = doc.get_pages().into_keys().collect();
        if numbers.is_empty() {
            return Err(PdfError::NoPages);
        }

        let limit = if self.max_pages == 0 { numbers.len() } else { self.max_pages };
        let pages = numbers
            .into_iter()
            .take(limit)
            .map(|page| self.page_tokens(&doc, page))
            .collect::<Result<Vec<_>>>()?;

        debug!("Tokenized {} PDF pages", pages.len());
        Ok(TokenizedDocument { pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object};

    fn empty_pdf() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_rejects_non_pdf() {
        let err = PdfTokenizer::new().tokenize(b"not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_rejects_document_without_pages() {
        let err = PdfTokenizer::new().tokenize(&empty_pdf()).unwrap_err();
        assert!(matches!(err, PdfError::NoPages));
    }

    #[test]
    fn test_invalid_page() {
        let doc = Document::load_mem(&empty_pdf()).unwrap();
        let err = PdfTokenizer::new().page_tokens(&doc, 3).unwrap_err();
        assert!(matches!(err, PdfError::InvalidPage(3)));
    }

    #[test]
    fn test_from_config() {
        let tokenizer = PdfTokenizer::from_config(&PdfConfig { max_pages: 2 });
        assert_eq!(tokenizer.max_pages, 2);
    }
}
