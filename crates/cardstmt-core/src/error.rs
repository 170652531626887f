//! Error types for the cardstmt-core library.

use std::fmt;

use thiserror::Error;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum StatementError {
    /// PDF tokenizing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Statement extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Token file or configuration JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to turning a PDF into page tokens.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from a page.
    #[error("failed to extract text from page {page}: {reason}")]
    TextExtraction { page: u32, reason: String },

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Statement section an extraction error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Customer,
    Balances,
    StatementDates,
    Interest,
    MinimumPayment,
    Payments,
    Installments,
    CashBack,
    Transactions,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Customer => "customer details",
            Section::Balances => "balances",
            Section::StatementDates => "statement dates",
            Section::Interest => "interest information",
            Section::MinimumPayment => "minimum payment",
            Section::Payments => "payments",
            Section::Installments => "monthly installments",
            Section::CashBack => "cash back summary",
            Section::Transactions => "transactions",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors related to statement field extraction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// A mandatory anchor phrase was not found on any scanned page.
    #[error("unable to find {section}: anchor {anchor} not present")]
    MissingAnchor { section: Section, anchor: String },

    /// The section was located but a required sub-field could not be resolved.
    #[error("incomplete {section}: {reason}")]
    IncompleteRecord { section: Section, reason: String },

    /// Failed to parse a value.
    #[error("failed to parse {field}: {value:?}")]
    Parse { field: String, value: String },
}

impl ExtractionError {
    pub fn missing(section: Section, anchor: impl fmt::Display) -> Self {
        Self::MissingAnchor {
            section,
            anchor: anchor.to_string(),
        }
    }

    pub fn incomplete(section: Section, reason: impl Into<String>) -> Self {
        Self::IncompleteRecord {
            section,
            reason: reason.into(),
        }
    }

    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Section the error belongs to, when it carries one.
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::MissingAnchor { section, .. } | Self::IncompleteRecord { section, .. } => {
                Some(*section)
            }
            Self::Parse { .. } => None,
        }
    }
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, StatementError>;
