//! Result types for analysis runs

use lexis_domain::{AnalysisResult, Chapter, ReportSet};

/// Analysis of one chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterAnalysis {
    /// The chapter that was analyzed
    pub chapter: Chapter,

    /// Statistics over the chapter's text
    pub result: AnalysisResult,
}

/// Everything produced for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAnalysis {
    /// Path or name the text came from
    pub source: String,

    /// Statistics over the whole text
    pub full: AnalysisResult,

    /// Per-chapter statistics; empty for single-report runs
    pub chapters: Vec<ChapterAnalysis>,

    /// Rendered reports, full document first
    pub reports: ReportSet,
}
