//! Lexis NLP Capability Layer
//!
//! Implementations of the `Tokenizer` and `PosTagger` traits from
//! `lexis-domain`.
//!
//! # Implementations
//!
//! - [`NlpCapability`]: Treebank-style tokenizer plus lexicon tagger, built by
//!   an explicit [`NlpCapability::initialize`] step that provisions its data
//! - [`MockCapability`]: Deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use lexis_nlp::NlpCapability;
//! use lexis_domain::traits::{PosTagger, Tokenizer};
//!
//! let nlp = NlpCapability::bundled().unwrap();
//! let tokens = nlp.tokenize("A quick fox.").unwrap();
//! let tagged = nlp.tag(&tokens).unwrap();
//! assert!(tagged[1].is_adjective());
//! ```

#![warn(missing_docs)]

pub mod capability;
pub mod config;
pub mod lexicon;
pub mod provision;
pub mod tagger;
pub mod tokenizer;

use lexis_domain::traits::{PosTagger, Tokenizer};
use lexis_domain::{TaggedToken, Token};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use capability::NlpCapability;
pub use config::NlpConfig;
pub use lexicon::Lexicon;
pub use tagger::LexiconTagger;
pub use tokenizer::TreebankTokenizer;

/// Errors that can occur in the NLP capability
#[derive(Error, Debug)]
pub enum NlpError {
    /// Capability data could not be provisioned or loaded
    #[error("NLP initialization failed: {0}")]
    Initialization(String),

    /// Malformed lexicon line
    #[error("Lexicon error on line {line}: {message}")]
    Lexicon {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// Tokenization failed
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// Tagging failed
    #[error("Tagging error: {0}")]
    Tagging(String),
}

/// Mock capability for deterministic testing
///
/// Tokenizes on whitespace and tags from a fixed word → tag map, using a
/// default tag for everything else. Call counters are shared between clones.
///
/// # Examples
///
/// ```
/// use lexis_nlp::MockCapability;
/// use lexis_domain::traits::{PosTagger, Tokenizer};
///
/// let mut mock = MockCapability::new("NN");
/// mock.add_tag("shiny", "JJ");
///
/// let tokens = mock.tokenize("shiny apple").unwrap();
/// let tagged = mock.tag(&tokens).unwrap();
/// assert_eq!(tagged[0].tag, "JJ");
/// assert_eq!(tagged[1].tag, "NN");
/// assert_eq!(mock.tokenize_calls(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockCapability {
    default_tag: String,
    tags: HashMap<String, String>,
    fail_tagging: bool,
    drop_last_tag: bool,
    tokenize_calls: Arc<AtomicUsize>,
    tag_calls: Arc<AtomicUsize>,
}

impl MockCapability {
    /// Create a mock that tags every token with `default_tag`
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            default_tag: default_tag.into(),
            tags: HashMap::new(),
            fail_tagging: false,
            drop_last_tag: false,
            tokenize_calls: Arc::new(AtomicUsize::new(0)),
            tag_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Tag a specific word (case-insensitive)
    pub fn add_tag(&mut self, word: impl Into<String>, tag: impl Into<String>) {
        self.tags.insert(word.into().to_lowercase(), tag.into());
    }

    /// Make every tagging call fail
    pub fn fail_tagging(&mut self) {
        self.fail_tagging = true;
    }

    /// Return one tag fewer than the number of tokens
    pub fn drop_last_tag(&mut self) {
        self.drop_last_tag = true;
    }

    /// Number of tokenize calls so far
    pub fn tokenize_calls(&self) -> usize {
        self.tokenize_calls.load(Ordering::SeqCst)
    }

    /// Number of tag calls so far
    pub fn tag_calls(&self) -> usize {
        self.tag_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCapability {
    fn default() -> Self {
        Self::new("NN")
    }
}

impl Tokenizer for MockCapability {
    type Error = NlpError;

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        self.tokenize_calls.fetch_add(1, Ordering::SeqCst);
        Ok(text.split_whitespace().map(Token::new).collect())
    }
}

impl PosTagger for MockCapability {
    type Error = NlpError;

    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>, Self::Error> {
        self.tag_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_tagging {
            return Err(NlpError::Tagging("Mock error".to_string()));
        }

        let mut tagged: Vec<TaggedToken> = tokens
            .iter()
            .map(|token| {
                let tag = self
                    .tags
                    .get(&token.text().to_lowercase())
                    .unwrap_or(&self.default_tag);
                TaggedToken::new(token.clone(), tag.clone())
            })
            .collect();

        if self.drop_last_tag {
            tagged.pop();
        }

        Ok(tagged)
    }
}
