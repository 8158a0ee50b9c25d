//! Ready-to-use tokenizer + tagger handle

use crate::config::NlpConfig;
use crate::lexicon::Lexicon;
use crate::provision;
use crate::tagger::LexiconTagger;
use crate::tokenizer::TreebankTokenizer;
use crate::NlpError;
use lexis_domain::traits::{PosTagger, Tokenizer};
use lexis_domain::{TaggedToken, Token};
use tracing::info;

/// Initialized NLP capability
///
/// Obtained once through [`NlpCapability::initialize`] before the first
/// analysis. Immutable afterwards, so it can be shared across threads.
#[derive(Debug, Clone)]
pub struct NlpCapability {
    tokenizer: TreebankTokenizer,
    tagger: LexiconTagger,
}

impl NlpCapability {
    /// Provision the capability's data and build a ready handle
    ///
    /// Any failure here is fatal for the caller: no analysis should run
    /// without a working tokenizer and tagger.
    pub fn initialize(config: &NlpConfig) -> Result<Self, NlpError> {
        config.validate().map_err(NlpError::Initialization)?;

        let data_dir = config.resolved_data_dir().ok_or_else(|| {
            NlpError::Initialization("Could not determine a data directory".to_string())
        })?;

        let lexicon =
            provision::load_or_install(&data_dir, &config.lexicon_file, config.provision)?;
        info!(
            "NLP capability ready ({} lexicon entries from '{}')",
            lexicon.len(),
            data_dir.display()
        );

        Self::from_lexicon(lexicon)
    }

    /// Build from the lexicon compiled into the crate, without touching disk
    pub fn bundled() -> Result<Self, NlpError> {
        Self::from_lexicon(Lexicon::bundled()?)
    }

    /// Build from an already loaded lexicon
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self, NlpError> {
        if lexicon.is_empty() {
            return Err(NlpError::Initialization("Lexicon is empty".to_string()));
        }
        Ok(Self {
            tokenizer: TreebankTokenizer::new()?,
            tagger: LexiconTagger::new(lexicon),
        })
    }
}

impl Tokenizer for NlpCapability {
    type Error = NlpError;

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        self.tokenizer.tokenize(text)
    }
}

impl PosTagger for NlpCapability {
    type Error = NlpError;

    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>, Self::Error> {
        self.tagger.tag(tokens)
    }
}
