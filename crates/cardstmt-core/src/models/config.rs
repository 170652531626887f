//! Configuration structures for statement parsing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StatementError};
use crate::invoice::rules::UndatedYear;

/// Main configuration for cardstmt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// PDF tokenizing configuration.
    pub pdf: PdfConfig,

    /// Statement extraction configuration.
    pub extraction: ExtractionConfig,
}

/// PDF tokenizing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to tokenize (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { max_pages: 0 }
    }
}

/// Statement extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Year given to the statement start date, which is printed without one.
    pub undated_year: UndatedYear,

    /// Run consistency checks and report them as warnings.
    pub validate: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            undated_year: UndatedYear::default(),
            validate: true,
        }
    }
}

impl StatementConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| StatementError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
