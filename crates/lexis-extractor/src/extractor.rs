//! Format dispatch for text extraction

use crate::error::ExtractionError;
use crate::{docx, pdf};
use lexis_domain::{Document, DocumentFormat, ExtractedText};
use std::path::Path;
use tracing::{debug, info};

/// Extracts plain text from PDF and DOCX documents
///
/// Stateless; a single extractor can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract text from the document at `path`
    ///
    /// Fails with [`ExtractionError::FileNotFound`] before any parsing if the
    /// path does not exist, and with [`ExtractionError::UnsupportedFormat`] if
    /// the extension is not `.pdf` or `.docx`.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<ExtractedText, ExtractionError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExtractionError::FileNotFound(path.to_path_buf()));
        }

        let document = Document::new(path);
        info!("Extracting text from '{}' as {}", path.display(), document.format());

        let (text, units) = match document.format() {
            DocumentFormat::Pdf => {
                let out = pdf::extract_file(path)?;
                (out.text, out.pages)
            }
            DocumentFormat::Docx => {
                let out = docx::extract_file(path)?;
                (out.text, out.paragraphs)
            }
            DocumentFormat::Unsupported(ext) => {
                return Err(ExtractionError::UnsupportedFormat(ext.clone()));
            }
        };

        debug!("Extracted {} chars from {} units", text.len(), units);

        Ok(ExtractedText {
            document,
            text,
            units,
        })
    }

    /// Extract text from document bytes already in memory
    ///
    /// `name` is only used to label the resulting [`Document`]; the format is
    /// given explicitly.
    pub fn extract_bytes(
        &self,
        name: impl AsRef<Path>,
        format: &DocumentFormat,
        bytes: &[u8],
    ) -> Result<ExtractedText, ExtractionError> {
        let (text, units) = match format {
            DocumentFormat::Pdf => {
                let out = pdf::extract_bytes(bytes)?;
                (out.text, out.pages)
            }
            DocumentFormat::Docx => {
                let out = docx::extract_bytes(bytes)?;
                (out.text, out.paragraphs)
            }
            DocumentFormat::Unsupported(ext) => {
                return Err(ExtractionError::UnsupportedFormat(ext.clone()));
            }
        };

        Ok(ExtractedText {
            document: Document::new(name.as_ref()),
            text,
            units,
        })
    }
}
