//! Configuration structures for the tally pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Main configuration for the sizetally pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Label extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report output configuration.
    pub output: OutputConfig,
}

/// Label extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of lines searched above and below a label line for
    /// its quantity.
    pub quantity_radius: usize,

    /// Quantity used when no quantity line is found within the radius.
    pub default_quantity: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            quantity_radius: 5,
            default_quantity: 1,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON report.
    Json,
    /// CSV rows.
    Csv,
    /// Plain text summary and table.
    #[default]
    Text,
}

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Also write the Sweatshirts and Hoodies subsets when exporting.
    pub export_subsets: bool,
}

impl TallyConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            TallyError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
