//! Token module - lexical units produced by the tokenizer and tagger

use std::fmt;

/// Prefix shared by every adjective-family tag (JJ, JJR, JJS)
pub const ADJECTIVE_TAG_PREFIX: &str = "JJ";

/// A minimal lexical unit (roughly word- or punctuation-sized)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
}

impl Token {
    /// Create a token from its surface form
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Surface form as it appeared in the text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the lowercased surface form consists entirely of word
    /// characters (letters, digits, underscore)
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_domain::Token;
    ///
    /// assert!(Token::new("Fox").is_word());
    /// assert!(Token::new("route_66").is_word());
    /// assert!(!Token::new(".").is_word());
    /// assert!(!Token::new("well-known").is_word());
    /// assert!(!Token::new("n't").is_word());
    /// ```
    pub fn is_word(&self) -> bool {
        !self.text.is_empty()
            && self
                .text
                .to_lowercase()
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

/// A token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The tagged token
    pub token: Token,

    /// Part-of-speech code (Penn Treebank style, e.g. `JJ`, `NN`, `VBD`)
    pub tag: String,
}

impl TaggedToken {
    /// Pair a token with a tag
    pub fn new(token: Token, tag: impl Into<String>) -> Self {
        Self {
            token,
            tag: tag.into(),
        }
    }

    /// Whether the tag belongs to the adjective family
    pub fn is_adjective(&self) -> bool {
        self.tag.starts_with(ADJECTIVE_TAG_PREFIX)
    }
}

/// A contiguous slice of a document's token stream
///
/// Chapters partition the whole document with no gaps or overlaps. The text is
/// the chapter's tokens joined by single spaces, so original spacing around
/// punctuation is not preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// 1-based position in the document
    pub index: usize,

    /// Number of tokens in the chapter
    pub token_count: usize,

    /// Reconstructed chapter text
    pub text: String,
}

impl Chapter {
    /// Label used for this chapter's report
    pub fn label(&self) -> String {
        format!("Chapter {}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_shape_accepts_unicode_letters() {
        assert!(Token::new("café").is_word());
        assert!(Token::new("1999").is_word());
    }

    #[test]
    fn test_word_shape_rejects_mixed() {
        assert!(!Token::new("").is_word());
        assert!(!Token::new("3.14").is_word());
        assert!(!Token::new("'s").is_word());
        assert!(!Token::new("...").is_word());
    }

    #[test]
    fn test_adjective_family() {
        for tag in ["JJ", "JJR", "JJS"] {
            assert!(TaggedToken::new(Token::new("big"), tag).is_adjective());
        }
        assert!(!TaggedToken::new(Token::new("dog"), "NN").is_adjective());
        assert!(!TaggedToken::new(Token::new("j"), "J").is_adjective());
    }

    #[test]
    fn test_chapter_label() {
        let chapter = Chapter {
            index: 2,
            token_count: 0,
            text: String::new(),
        };
        assert_eq!(chapter.label(), "Chapter 2");
    }
}
