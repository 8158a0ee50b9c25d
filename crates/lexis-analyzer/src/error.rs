//! Error types for the analysis pipeline

use lexis_extractor::ExtractionError;
use lexis_nlp::NlpError;
use std::fmt;
use thiserror::Error;

/// Errors that can end an analysis run
///
/// A run either produces its full result set or one of these; partial reports
/// are never returned.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Text could not be extracted from the document
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The tokenizer/tagger capability could not be made ready
    #[error("Capability initialization failed: {0}")]
    CapabilityInitialization(String),

    /// Tokenization, tagging or aggregation failed after initialization
    #[error("Unexpected analysis error: {0}")]
    UnexpectedAnalysis(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Kind of an [`AnalysisError`], for callers that branch on the cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The document path does not exist
    FileNotFound,
    /// The extension is not `.pdf` or `.docx`
    UnsupportedFormat,
    /// The parser failed on a supported format
    ExtractionFailure,
    /// The capability could not be provisioned (fatal)
    CapabilityInitializationFailure,
    /// Anything that failed mid-analysis
    UnexpectedAnalysisError,
    /// Invalid configuration
    Config,
}

impl AnalysisError {
    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Extraction(ExtractionError::FileNotFound(_)) => ErrorKind::FileNotFound,
            AnalysisError::Extraction(ExtractionError::UnsupportedFormat(_)) => {
                ErrorKind::UnsupportedFormat
            }
            AnalysisError::Extraction(ExtractionError::ExtractionFailure { .. }) => {
                ErrorKind::ExtractionFailure
            }
            AnalysisError::CapabilityInitialization(_) => {
                ErrorKind::CapabilityInitializationFailure
            }
            AnalysisError::UnexpectedAnalysis(_) => ErrorKind::UnexpectedAnalysisError,
            AnalysisError::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether the process should stop rather than try another document
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::CapabilityInitializationFailure)
    }

    pub(crate) fn unexpected(e: impl fmt::Display) -> Self {
        AnalysisError::UnexpectedAnalysis(e.to_string())
    }
}

impl From<NlpError> for AnalysisError {
    fn from(e: NlpError) -> Self {
        match e {
            NlpError::Initialization(_) | NlpError::Lexicon { .. } => {
                AnalysisError::CapabilityInitialization(e.to_string())
            }
            other => AnalysisError::UnexpectedAnalysis(other.to_string()),
        }
    }
}
