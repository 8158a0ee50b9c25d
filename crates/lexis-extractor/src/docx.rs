//! DOCX text extraction backed by docx-rs
//!
//! A .docx file is a ZIP archive of XML parts. docx-rs exposes the body as a
//! tree: document children → paragraphs → runs → text. Only top-level body
//! paragraphs are read; tables, headers and footers are skipped.

use crate::error::ExtractionError;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use std::fs;
use std::path::Path;

/// Text collected from a DOCX, plus how many paragraphs it had
pub(crate) struct DocxText {
    pub text: String,
    pub paragraphs: usize,
}

/// Read a DOCX from disk and extract its text
pub(crate) fn extract_file(path: &Path) -> Result<DocxText, ExtractionError> {
    let bytes = fs::read(path).map_err(ExtractionError::docx)?;
    extract_bytes(&bytes)
}

/// Parse a DOCX held in memory and extract its text
pub(crate) fn extract_bytes(bytes: &[u8]) -> Result<DocxText, ExtractionError> {
    let docx = read_docx(bytes)?;

    let mut text = String::new();
    let mut paragraphs = 0;

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph_text(paragraph));
            text.push('\n');
            paragraphs += 1;
        }
    }

    Ok(DocxText { text, paragraphs })
}

/// Concatenate every run of a paragraph, following hyperlinks
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    collect_children(&paragraph.children, &mut out);
    out
}

fn collect_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => collect_run(run, out),
            ParagraphChild::Hyperlink(link) => collect_children(&link.children, out),
            _ => {}
        }
    }
}

fn collect_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
