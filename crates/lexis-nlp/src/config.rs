//! Configuration for the NLP capability

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the capability keeps its data and whether it may install it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NlpConfig {
    /// Data directory; defaults to `~/.lexis/data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Lexicon file name inside the data directory
    #[serde(default = "default_lexicon_file")]
    pub lexicon_file: String,

    /// Install the bundled lexicon when the file is missing
    #[serde(default = "default_true")]
    pub provision: bool,
}

impl NlpConfig {
    /// Config rooted at an explicit data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
            ..Self::default()
        }
    }

    /// Resolve the data directory, falling back to `~/.lexis/data`
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".lexis").join("data")))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.lexicon_file.trim().is_empty() {
            return Err("lexicon_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for NlpConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            lexicon_file: default_lexicon_file(),
            provision: true,
        }
    }
}

fn default_lexicon_file() -> String {
    "lexicon.tsv".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NlpConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.provision);
        assert_eq!(config.lexicon_file, "lexicon.tsv");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = NlpConfig::with_data_dir("/srv/lexis");
        assert_eq!(config.resolved_data_dir(), Some(PathBuf::from("/srv/lexis")));
    }

    #[test]
    fn test_toml_defaults_fill_missing_fields() {
        let config: NlpConfig = toml::from_str("provision = false").unwrap();
        assert!(!config.provision);
        assert_eq!(config.lexicon_file, "lexicon.tsv");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_empty_lexicon_file_is_invalid() {
        let mut config = NlpConfig::default();
        config.lexicon_file = " ".to_string();
        assert!(config.validate().is_err());
    }
}
