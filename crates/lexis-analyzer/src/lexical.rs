//! Word counting and adjective frequency over a block of text

use crate::error::AnalysisError;
use lexis_domain::traits::{PosTagger, Tokenizer};
use lexis_domain::{AdjectiveFrequencyTable, AnalysisResult};
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

/// Computes word count and adjective frequencies for one text
///
/// The text is tokenized once; both statistics are derived from that single
/// token sequence.
pub struct LexicalAnalyzer<C> {
    capability: Arc<C>,
}

impl<C> LexicalAnalyzer<C>
where
    C: Tokenizer + PosTagger,
    <C as Tokenizer>::Error: Display,
    <C as PosTagger>::Error: Display,
{
    /// Create an analyzer over an initialized capability
    pub fn new(capability: Arc<C>) -> Self {
        Self { capability }
    }

    /// Analyze `text`
    ///
    /// Tokens made only of word characters count as words, so punctuation
    /// is excluded. Adjectives are every token whose tag starts with `JJ`,
    /// whatever its shape.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let tokens = self
            .capability
            .tokenize(text)
            .map_err(AnalysisError::unexpected)?;

        let word_count = tokens.iter().filter(|t| t.is_word()).count();

        let tagged = self
            .capability
            .tag(&tokens)
            .map_err(AnalysisError::unexpected)?;

        if tagged.len() != tokens.len() {
            return Err(AnalysisError::UnexpectedAnalysis(format!(
                "Tagger returned {} tags for {} tokens",
                tagged.len(),
                tokens.len()
            )));
        }

        let adjectives: AdjectiveFrequencyTable = tagged
            .iter()
            .filter(|t| t.is_adjective())
            .map(|t| t.token.text())
            .collect();

        debug!(
            "Analyzed {} tokens: {} words, {} distinct adjectives",
            tokens.len(),
            word_count,
            adjectives.len()
        );

        Ok(AnalysisResult {
            word_count,
            adjectives,
        })
    }
}

impl<C> Clone for LexicalAnalyzer<C> {
    fn clone(&self) -> Self {
        Self {
            capability: Arc::clone(&self.capability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use lexis_nlp::{MockCapability, NlpCapability};

    fn bundled() -> LexicalAnalyzer<NlpCapability> {
        LexicalAnalyzer::new(Arc::new(NlpCapability::bundled().unwrap()))
    }

    #[test]
    fn test_quick_brown_fox() {
        let result = bundled()
            .analyze("The quick brown fox. The lazy dog.")
            .unwrap();

        assert_eq!(result.word_count, 7);
        assert_eq!(
            result.top_adjectives(),
            vec![("quick", 1), ("brown", 1), ("lazy", 1)]
        );
    }

    #[test]
    fn test_punctuation_only() {
        let result = bundled().analyze("!!! ... ,,,").unwrap();
        assert_eq!(result.word_count, 0);
        assert!(result.adjectives.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let result = bundled().analyze("").unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_adjective_case_is_merged() {
        let mut mock = MockCapability::default();
        mock.add_tag("big", "JJ");
        let analyzer = LexicalAnalyzer::new(Arc::new(mock));

        let result = analyzer.analyze("Big big BIG house").unwrap();
        assert_eq!(result.word_count, 4);
        assert_eq!(result.adjectives.count("big"), 3);
        assert_eq!(result.adjectives.len(), 1);
    }

    #[test]
    fn test_comparative_and_superlative_tags_count() {
        let mut mock = MockCapability::default();
        mock.add_tag("bigger", "JJR");
        mock.add_tag("biggest", "JJS");
        let analyzer = LexicalAnalyzer::new(Arc::new(mock));

        let result = analyzer.analyze("bigger biggest").unwrap();
        assert_eq!(result.adjectives.total(), 2);
    }

    #[test]
    fn test_tokenizes_once() {
        let mock = MockCapability::default();
        let analyzer = LexicalAnalyzer::new(Arc::new(mock.clone()));

        analyzer.analyze("one two three").unwrap();
        assert_eq!(mock.tokenize_calls(), 1);
        assert_eq!(mock.tag_calls(), 1);
    }

    #[test]
    fn test_misaligned_tags_fail() {
        let mut mock = MockCapability::default();
        mock.drop_last_tag();
        let analyzer = LexicalAnalyzer::new(Arc::new(mock));

        let err = analyzer.analyze("one two").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedAnalysisError);
    }

    #[test]
    fn test_tagging_failure_is_unexpected() {
        let mut mock = MockCapability::default();
        mock.fail_tagging();
        let analyzer = LexicalAnalyzer::new(Arc::new(mock));

        let err = analyzer.analyze("one").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedAnalysisError);
    }
}
