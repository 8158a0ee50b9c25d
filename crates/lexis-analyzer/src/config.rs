//! Configuration for the analysis pipeline

use serde::{Deserialize, Serialize};

/// Configuration for the AnalysisOrchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum number of chapters a document is split into
    #[serde(default = "default_max_chapters")]
    pub max_chapters: usize,

    /// Produce per-chapter reports next to the full-document summary
    #[serde(default = "default_true")]
    pub chaptered: bool,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chapters == 0 {
            return Err("max_chapters must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Full-document report only
    pub fn single() -> Self {
        Self {
            chaptered: false,
            ..Self::default()
        }
    }

    /// Chaptered analysis with a custom chapter bound
    pub fn with_max_chapters(max_chapters: usize) -> Self {
        Self {
            max_chapters,
            chaptered: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_chapters: default_max_chapters(),
            chaptered: true,
        }
    }
}

fn default_max_chapters() -> usize {
    3
}

fn default_true() -> bool {
    true
}
