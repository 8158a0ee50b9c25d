//! Document module - located source files and their extracted text

use std::fmt;
use std::path::{Path, PathBuf};

/// Format of a source document, resolved once from the file extension
///
/// Unknown extensions collapse into a single [`DocumentFormat::Unsupported`]
/// variant carrying the extension that was seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format (`.pdf`)
    Pdf,

    /// Office Open XML word processing document (`.docx`)
    Docx,

    /// Any other extension, including its leading dot (empty if none)
    Unsupported(String),
}

impl DocumentFormat {
    /// Resolve the format of a path from its extension, case-insensitively
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_domain::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_path("Thesis.PDF"), DocumentFormat::Pdf);
    /// assert_eq!(DocumentFormat::from_path("notes.docx"), DocumentFormat::Docx);
    /// assert_eq!(
    ///     DocumentFormat::from_path("report.txt"),
    ///     DocumentFormat::Unsupported(".txt".to_string())
    /// );
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        match ext {
            Some(ext) => match ext.to_lowercase().as_str() {
                "pdf" => DocumentFormat::Pdf,
                "docx" => DocumentFormat::Docx,
                _ => DocumentFormat::Unsupported(format!(".{}", ext)),
            },
            None => DocumentFormat::Unsupported(String::new()),
        }
    }

    /// Whether the format can be extracted
    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentFormat::Unsupported(_))
    }

    /// Short name of the format
    pub fn as_str(&self) -> &str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Unsupported(_) => "unsupported",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Unsupported(ext) if !ext.is_empty() => {
                write!(f, "unsupported ({})", ext)
            }
            other => f.write_str(other.as_str()),
        }
    }
}

/// A located source document
///
/// Immutable once created; the format is resolved at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    format: DocumentFormat,
}

impl Document {
    /// Locate a document at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    /// Path of the document as given
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolved format
    pub fn format(&self) -> &DocumentFormat {
        &self.format
    }

    /// File name component, falling back to the whole path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Plain text extracted from a document
///
/// Paragraph and page boundaries are collapsed to newlines. Owned by a single
/// pipeline invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Source document
    pub document: Document,

    /// Extracted text
    pub text: String,

    /// Number of pages (PDF) or paragraphs (DOCX) that contributed text
    pub units: usize,
}

impl ExtractedText {
    /// Whether no text (or only whitespace) was extracted
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_path("a.Pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path("a.DOCX"), DocumentFormat::Docx);
    }

    #[test]
    fn test_unsupported_keeps_extension() {
        assert_eq!(
            DocumentFormat::from_path("/tmp/archive.tar.GZ"),
            DocumentFormat::Unsupported(".GZ".to_string())
        );
        assert_eq!(
            DocumentFormat::from_path("README"),
            DocumentFormat::Unsupported(String::new())
        );
    }

    #[test]
    fn test_docx_is_not_doc() {
        assert!(!DocumentFormat::from_path("legacy.doc").is_supported());
    }

    #[test]
    fn test_document_file_name() {
        let doc = Document::new("/home/user/papers/essay.docx");
        assert_eq!(doc.file_name(), "essay.docx");
        assert_eq!(doc.format(), &DocumentFormat::Docx);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(DocumentFormat::Pdf.to_string(), "pdf");
        assert_eq!(
            DocumentFormat::Unsupported(".txt".into()).to_string(),
            "unsupported (.txt)"
        );
    }
}
