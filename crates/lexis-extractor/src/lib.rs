//! Lexis Extractor
//!
//! Converts PDF and DOCX documents into plain text.
//!
//! # Overview
//!
//! The format of a document is resolved once from its extension
//! (case-insensitively) into a [`DocumentFormat`](lexis_domain::DocumentFormat),
//! then dispatched to the matching backend:
//!
//! - **PDF** (`lopdf`): page by page; pages without text contribute nothing,
//!   every other page contributes its text followed by a newline.
//! - **DOCX** (`docx-rs`): paragraph by paragraph; every body paragraph,
//!   empty ones included, contributes its text followed by a newline.
//!
//! # Architecture
//!
//! ```text
//! Path → Document (format) → PDF | DOCX backend → ExtractedText
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use lexis_extractor::TextExtractor;
//!
//! # fn example() -> Result<(), lexis_extractor::ExtractionError> {
//! let extractor = TextExtractor::new();
//! let extracted = extractor.extract("thesis.pdf")?;
//! println!("{} characters from {} pages", extracted.text.len(), extracted.units);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod docx;
mod error;
mod extractor;
mod pdf;

#[cfg(test)]
mod tests;

pub use error::ExtractionError;
pub use extractor::TextExtractor;
