//! Lexis Analyzer
//!
//! Word counts and adjective scoreboards for whole documents and for the
//! chapters they are split into.
//!
//! # Architecture
//!
//! ```text
//! Document → TextExtractor → text
//!   ├→ LexicalAnalyzer → ReportFormatter → "Full Document Summary"
//!   └→ ChapterSegmenter → chapters
//!        └→ LexicalAnalyzer → ReportFormatter → "Chapter N"
//! ```
//!
//! The tokenizer and tagger are reached through the `Tokenizer` and
//! `PosTagger` traits, so any capability (including
//! [`lexis_nlp::MockCapability`]) can drive the pipeline.
//!
//! # Example Usage
//!
//! ```
//! use lexis_analyzer::{AnalysisOrchestrator, AnalyzerConfig};
//! use lexis_nlp::NlpCapability;
//! use std::sync::Arc;
//!
//! let capability = Arc::new(NlpCapability::bundled().unwrap());
//! let orchestrator = AnalysisOrchestrator::new(capability, AnalyzerConfig::default()).unwrap();
//!
//! let reports = orchestrator
//!     .run_chaptered("The quick brown fox. The lazy dog.", "fox.pdf", 3)
//!     .unwrap();
//!
//! let labels: Vec<&str> = reports.labels().collect();
//! assert_eq!(labels, vec!["Full Document Summary", "Chapter 1", "Chapter 2", "Chapter 3"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lexical;
pub mod orchestrator;
pub mod report;
pub mod segmenter;
pub mod types;


pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ErrorKind};
pub use lexical::LexicalAnalyzer;
pub use orchestrator::AnalysisOrchestrator;
pub use report::ReportFormatter;
pub use segmenter::ChapterSegmenter;
pub use types::{ChapterAnalysis, DocumentAnalysis};
