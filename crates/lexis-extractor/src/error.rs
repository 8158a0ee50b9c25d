//! Error types for text extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The path does not exist
    #[error("File not found at path: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The extension is neither `.pdf` nor `.docx`
    #[error("Unsupported file type: {0}. Please use .pdf or .docx")]
    UnsupportedFormat(String),

    /// The parser failed on a recognized format (corrupt, encrypted, ...)
    #[error("Error reading {format}: {message}")]
    ExtractionFailure {
        /// Format being parsed (`PDF` or `DOCX`)
        format: &'static str,
        /// Underlying parser error
        message: String,
    },
}

impl ExtractionError {
    pub(crate) fn pdf(message: impl ToString) -> Self {
        ExtractionError::ExtractionFailure {
            format: "PDF",
            message: message.to_string(),
        }
    }

    pub(crate) fn docx(message: impl ToString) -> Self {
        ExtractionError::ExtractionFailure {
            format: "DOCX",
            message: message.to_string(),
        }
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(e: lopdf::Error) -> Self {
        ExtractionError::pdf(e)
    }
}

impl From<docx_rs::ReaderError> for ExtractionError {
    fn from(e: docx_rs::ReaderError) -> Self {
        ExtractionError::docx(e)
    }
}
