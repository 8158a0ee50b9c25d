//! Trait definitions for the tokenizer/tagger capability
//!
//! These traits mark the boundary between the analysis pipeline and the NLP
//! capability it consumes. Implementations live in lexis-nlp.

use crate::{TaggedToken, Token};

/// Splits text into tokens
///
/// Implemented by the capability layer (lexis-nlp)
pub trait Tokenizer {
    /// Error type for tokenization
    type Error;

    /// Split text into tokens, in order of appearance
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error>;
}

/// Assigns a part-of-speech tag to each token
///
/// Implemented by the capability layer (lexis-nlp)
pub trait PosTagger {
    /// Error type for tagging
    type Error;

    /// Tag a token sequence; the output is aligned positionally with the input
    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>, Self::Error>;
}
