//! PDF text extraction backed by lopdf

use crate::error::ExtractionError;
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Text collected from a PDF, plus how many pages contributed
pub(crate) struct PdfText {
    pub text: String,
    pub pages: usize,
}

/// Load a PDF from disk and extract its text
pub(crate) fn extract_file(path: &Path) -> Result<PdfText, ExtractionError> {
    let document = Document::load(path)?;
    extract_document(&document)
}

/// Parse a PDF held in memory and extract its text
pub(crate) fn extract_bytes(bytes: &[u8]) -> Result<PdfText, ExtractionError> {
    let document = Document::load_mem(bytes)?;
    extract_document(&document)
}

fn extract_document(document: &Document) -> Result<PdfText, ExtractionError> {
    if document.is_encrypted() {
        return Err(ExtractionError::pdf("document is encrypted"));
    }

    let mut text = String::new();
    let mut pages = 0;

    // get_pages is a BTreeMap keyed by page number, so iteration is in page order
    for page_number in document.get_pages().keys() {
        let page_text = document.extract_text(&[*page_number])?;
        let page_text = page_text.trim_end();

        if page_text.trim().is_empty() {
            debug!("Page {} has no extractable text", page_number);
            continue;
        }

        text.push_str(page_text);
        text.push('\n');
        pages += 1;
    }

    Ok(PdfText { text, pages })
}
