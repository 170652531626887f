//! Core library for Apple Card statement parsing.
//!
//! This crate provides:
//! - Token sequence matching over flat, layout-free page tokens
//! - Rule-based extractors for every statement section
//! - Statement data models with consistency checks
//! - PDF tokenizing (feature `pdf`)

pub mod error;
pub mod invoice;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;

pub use error::{ExtractionError, PdfError, Result, Section, StatementError};
pub use invoice::rules::{find_sequence, Matcher, Pattern, UndatedYear};
pub use invoice::{ExtractionResult, InvoiceParser, StatementParser};
pub use models::config::StatementConfig;
pub use models::invoice::{
    normalize_tokens, Balance, CashBackSummary, Customer, DeferredInterestEstimate,
    InstallmentTotals, Interest, Invoice, MinimumPayment, MonthlyInstallmentItem,
    MonthlyInstallmentPlan, Payment, TokenizedDocument, Transaction,
};
#[cfg(feature = "pdf")]
pub use pdf::{PageTokenizer, PdfTokenizer};
