//! CLI subcommands and the input/config plumbing they share.

pub mod batch;
pub mod config;
pub mod parse;
pub mod tokens;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use cardstmt_core::models::config::StatementConfig;
use cardstmt_core::pdf::{PageTokenizer, PdfTokenizer};
use cardstmt_core::TokenizedDocument;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardstmt")
        .join("config.json")
}

/// Configuration file to use: `--config` when given, the default path otherwise.
pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration, falling back to defaults when no file exists.
///
/// An explicitly requested file must exist.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<StatementConfig> {
    if let Some(path) = config_path {
        return Ok(StatementConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using configuration from {}", path.display());
        Ok(StatementConfig::from_file(&path)?)
    } else {
        Ok(StatementConfig::default())
    }
}

/// Input kinds accepted by `parse` and `batch`.
pub fn is_supported(path: &Path) -> bool {
    matches!(extension(path).as_str(), "pdf" | "json")
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Read a statement as page tokens, tokenizing PDFs and loading JSON token files.
pub fn read_document(path: &Path, config: &StatementConfig) -> anyhow::Result<TokenizedDocument> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    match extension(path).as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            let doc = PdfTokenizer::from_config(&config.pdf).tokenize(&data)?;
            Ok(doc)
        }
        "json" => {
            let content = fs::read_to_string(path)?;
            let doc: TokenizedDocument = serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Invalid token file {}: {}", path.display(), e)
            })?;
            Ok(TokenizedDocument::new(doc.pages))
        }
        other => anyhow::bail!("Unsupported file format: {}", other),
    }
}
