//! Lexis Domain Layer
//!
//! Value types and trait interfaces shared by every other Lexis crate.
//! Like any domain layer it has no external dependencies: document parsing,
//! tokenization and tagging all live behind traits or in sibling crates.
//!
//! ## Key Concepts
//!
//! - **Document**: a located file plus its resolved [`DocumentFormat`]
//! - **Token / TaggedToken**: output of the tokenizer and POS tagger capability
//! - **AdjectiveFrequencyTable**: stable-ranked adjective counts
//! - **AnalysisResult**: word count + adjective table for one scope
//! - **Report / ReportSet**: rendered results keyed by label, insertion ordered
//!
//! ## Pipeline
//!
//! ```text
//! Document → ExtractedText → Tokens → TaggedTokens → AnalysisResult → Report
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod document;
pub mod report;
pub mod token;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AdjectiveFrequencyTable, AnalysisResult, TOP_ADJECTIVES};
pub use document::{Document, DocumentFormat, ExtractedText};
pub use report::{Report, ReportSet, FULL_DOCUMENT_LABEL};
pub use token::{Chapter, TaggedToken, Token, ADJECTIVE_TAG_PREFIX};
