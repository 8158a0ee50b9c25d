//! End-to-end analysis: extraction, statistics, segmentation and reports

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::lexical::LexicalAnalyzer;
use crate::report::ReportFormatter;
use crate::segmenter::ChapterSegmenter;
use crate::types::{ChapterAnalysis, DocumentAnalysis};
use lexis_domain::traits::{PosTagger, Tokenizer};
use lexis_domain::{Report, ReportSet, FULL_DOCUMENT_LABEL};
use lexis_extractor::TextExtractor;
use lexis_nlp::{NlpCapability, NlpConfig};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Coordinates a full analysis run over one capability
///
/// Every run either returns its complete set of reports or an error; no
/// partial results escape.
pub struct AnalysisOrchestrator<C> {
    analyzer: LexicalAnalyzer<C>,
    segmenter: ChapterSegmenter<C>,
    formatter: ReportFormatter,
    extractor: TextExtractor,
    config: AnalyzerConfig,
}

impl AnalysisOrchestrator<NlpCapability> {
    /// Initialize the NLP capability and build an orchestrator over it
    ///
    /// Fails with [`AnalysisError::CapabilityInitialization`] when the
    /// capability's data cannot be provisioned.
    pub fn initialize(
        config: AnalyzerConfig,
        nlp_config: &NlpConfig,
    ) -> Result<Self, AnalysisError> {
        let capability = NlpCapability::initialize(nlp_config)?;
        Self::new(Arc::new(capability), config)
    }
}

impl<C> AnalysisOrchestrator<C>
where
    C: Tokenizer + PosTagger,
    <C as Tokenizer>::Error: Display,
    <C as PosTagger>::Error: Display,
{
    /// Create an orchestrator over an initialized capability
    pub fn new(capability: Arc<C>, config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::Config)?;

        Ok(Self {
            analyzer: LexicalAnalyzer::new(Arc::clone(&capability)),
            segmenter: ChapterSegmenter::new(capability),
            formatter: ReportFormatter::new(),
            extractor: TextExtractor::new(),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze the whole text and render a single report
    pub fn run_full(&self, text: &str, source: &str) -> Result<Report, AnalysisError> {
        let result = self.analyzer.analyze(text)?;
        let body = self.formatter.render_document(&result, source);
        Ok(Report::new(FULL_DOCUMENT_LABEL, body))
    }

    /// Analyze the whole text and each of up to `max_chapters` chapters
    ///
    /// The returned set holds "Full Document Summary" first, then
    /// "Chapter 1" through "Chapter K" in order.
    pub fn run_chaptered(
        &self,
        text: &str,
        source: &str,
        max_chapters: usize,
    ) -> Result<ReportSet, AnalysisError> {
        Ok(self.analyze_chaptered(text, source, max_chapters)?.reports)
    }

    /// Analyze already extracted text according to the configuration
    pub fn analyze_text(
        &self,
        text: &str,
        source: &str,
    ) -> Result<DocumentAnalysis, AnalysisError> {
        if self.config.chaptered {
            self.analyze_chaptered(text, source, self.config.max_chapters)
        } else {
            let full = self.analyzer.analyze(text)?;
            let mut reports = ReportSet::new();
            reports.insert(Report::new(
                FULL_DOCUMENT_LABEL,
                self.formatter.render_document(&full, source),
            ));

            Ok(DocumentAnalysis {
                source: source.to_string(),
                full,
                chapters: Vec::new(),
                reports,
            })
        }
    }

    /// Extract a document and analyze it
    pub fn analyze_document(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<DocumentAnalysis, AnalysisError> {
        let path = path.as_ref();
        let extracted = self.extractor.extract(path)?;

        if extracted.is_blank() {
            warn!("No text extracted from '{}'", path.display());
        }

        let source = path.display().to_string();
        let analysis = self.analyze_text(&extracted.text, &source)?;

        info!(
            "Analyzed '{}': {} words, {} reports",
            extracted.document.file_name(),
            analysis.full.word_count,
            analysis.reports.len()
        );

        Ok(analysis)
    }

    /// Analyze several documents, one result per path in input order
    ///
    /// A failing document does not stop the others.
    pub fn analyze_documents<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Vec<Result<DocumentAnalysis, AnalysisError>> {
        paths
            .iter()
            .map(|path| {
                let result = self.analyze_document(path);
                if let Err(e) = &result {
                    warn!("Analysis of '{}' failed: {}", path.as_ref().display(), e);
                }
                result
            })
            .collect()
    }

    fn analyze_chaptered(
        &self,
        text: &str,
        source: &str,
        max_chapters: usize,
    ) -> Result<DocumentAnalysis, AnalysisError> {
        let full = self.analyzer.analyze(text)?;
        let chapters = self.segmenter.segment(text, max_chapters)?;

        let mut reports = ReportSet::new();
        reports.insert(Report::new(
            FULL_DOCUMENT_LABEL,
            self.formatter.render_document(&full, source),
        ));

        let mut analyzed = Vec::with_capacity(chapters.len());
        for chapter in chapters {
            let result = self.analyzer.analyze(&chapter.text)?;
            let label = chapter.label();
            reports.insert(Report::new(
                label.as_str(),
                self.formatter.render_chapter(&result, source, &label),
            ));
            analyzed.push(ChapterAnalysis { chapter, result });
        }

        Ok(DocumentAnalysis {
            source: source.to_string(),
            full,
            chapters: analyzed,
            reports,
        })
    }
}
