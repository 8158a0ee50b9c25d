//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis error
    #[error(transparent)]
    Analysis(#[from] lexis_analyzer::AnalysisError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Background task failed to complete
    #[error("Task error: {0}")]
    Task(String),

    /// Some documents in a batch could not be analyzed
    #[error("{failed} of {total} document(s) could not be analyzed")]
    BatchFailed {
        /// Documents that failed
        failed: usize,
        /// Documents requested
        total: usize,
    },
}

impl From<lexis_nlp::NlpError> for CliError {
    fn from(e: lexis_nlp::NlpError) -> Self {
        CliError::Analysis(e.into())
    }
}
