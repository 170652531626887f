//! WASM bindings for Apple Card statement parsing.
//!
//! Callers extract the page tokens themselves (e.g. with pdf.js) and pass
//! them in as an array of arrays of strings.

use js_sys::{Array, RegExp};
use regex::Regex;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use cardstmt_core::invoice::rules::Matcher;
use cardstmt_core::invoice::{ExtractionResult, InvoiceParser, StatementParser};
use cardstmt_core::{TokenizedDocument, UndatedYear};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn read_pages(pages: JsValue) -> Result<TokenizedDocument, JsValue> {
    let pages: Vec<Vec<String>> = serde_wasm_bindgen::from_value(pages).map_err(to_js_error)?;
    Ok(TokenizedDocument::new(pages))
}

fn run_parser(parser: &StatementParser, pages: JsValue) -> Result<ExtractionResult, JsValue> {
    let doc = read_pages(pages)?;
    let result = parser.parse(&doc.pages).map_err(to_js_error)?;

    for warning in &result.warnings {
        web_sys::console::warn_1(&JsValue::from_str(warning));
    }

    Ok(result)
}

/// Parse a statement from its page tokens.
///
/// Returns the invoice; amounts are decimal strings and dates ISO strings.
#[wasm_bindgen]
pub fn parse_statement(pages: JsValue) -> Result<JsValue, JsValue> {
    let result = run_parser(&StatementParser::new(), pages)?;
    serde_wasm_bindgen::to_value(&result.invoice).map_err(to_js_error)
}

fn to_matcher(element: JsValue) -> Result<Matcher, JsValue> {
    if let Some(re) = element.dyn_ref::<RegExp>() {
        let source = String::from(re.source());
        return Regex::new(&source).map(Matcher::Regex).map_err(to_js_error);
    }

    match element.as_string() {
        Some(token) if token == "*" => Ok(Matcher::Wildcard),
        Some(token) => Ok(Matcher::Literal(token)),
        None => Err(JsValue::from_str("pattern elements must be strings or RegExp")),
    }
}

/// Index of the first run of `tokens` matching `pattern`, or `undefined`.
///
/// Pattern elements are literal strings, `"*"` for any single token, or
/// regular expressions.
#[wasm_bindgen]
pub fn find_sequence(pattern: Array, tokens: Vec<String>) -> Result<Option<u32>, JsValue> {
    let matchers = pattern
        .iter()
        .map(to_matcher)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cardstmt_core::find_sequence(&matchers, &tokens).map(|i| i as u32))
}

/// Statement extractor class for browser use.
#[wasm_bindgen]
pub struct StatementExtractor {
    parser: StatementParser,
}

#[wasm_bindgen]
impl StatementExtractor {
    /// Create a new statement extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: StatementParser::new(),
        }
    }

    /// Take the year of a year-less start date from the statement end date
    /// instead of the current year.
    #[wasm_bindgen]
    pub fn set_undated_year_from_statement(&mut self, enabled: bool) {
        let undated_year = if enabled {
            UndatedYear::StatementEnd
        } else {
            UndatedYear::Clock
        };
        self.parser = self.parser.clone().with_undated_year(undated_year);
    }

    /// Configure consistency checks.
    #[wasm_bindgen]
    pub fn set_validate(&mut self, validate: bool) {
        self.parser = self.parser.clone().with_validation(validate);
    }

    /// Extract the invoice from page tokens.
    #[wasm_bindgen]
    pub fn extract(&self, pages: JsValue) -> Result<JsValue, JsValue> {
        let result = run_parser(&self.parser, pages)?;
        serde_wasm_bindgen::to_value(&result.invoice).map_err(to_js_error)
    }

    /// Get extraction result with warnings, page count and timing.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, pages: JsValue) -> Result<JsValue, JsValue> {
        let result = run_parser(&self.parser, pages)?;
        serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}
