//! Treebank-style English tokenizer

use crate::NlpError;
use lexis_domain::traits::Tokenizer;
use lexis_domain::Token;
use regex::Regex;
use std::sync::Arc;

/// Number with internal separators, word with internal hyphens/apostrophes,
/// standalone clitic, ellipsis, double dash, or any other single non-space
/// character. The standalone clitic keeps re-tokenized output stable.
const TOKEN_PATTERN: &str =
    r"\d+(?:[.,]\d+)+|\w+(?:[-'’]\w+)*|(?i:['’](?:s|re|ve|ll|d|m))\b|\.\.\.|--|[^\s\w]";

/// Clitics split off the end of a word: `they're` → `they` + `'re`
const CLITICS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Regex-based tokenizer following Penn Treebank conventions
///
/// - punctuation becomes its own token (`fox.` → `fox`, `.`)
/// - hyphenated words stay whole (`well-known`)
/// - contractions split (`don't` → `do`, `n't`; `Alice's` → `Alice`, `'s`)
/// - numbers keep their separators (`3.14`, `1,000`)
#[derive(Debug, Clone)]
pub struct TreebankTokenizer {
    pattern: Arc<Regex>,
}

impl TreebankTokenizer {
    /// Compile the tokenizer
    pub fn new() -> Result<Self, NlpError> {
        let pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| NlpError::Initialization(format!("Invalid token pattern: {}", e)))?;
        Ok(Self {
            pattern: Arc::new(pattern),
        })
    }

    /// Tokenize into surface strings
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        for m in self.pattern.find_iter(text) {
            split_contraction(m.as_str(), &mut out);
        }
        out
    }
}

/// Push `word`, splitting a trailing `n't` or clitic into its own token
fn split_contraction<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    if !word.contains('\'') && !word.contains('’') {
        out.push(word);
        return;
    }

    let normalized = word.replace('’', "'").to_lowercase();

    let suffix_len = if normalized.ends_with("n't") && normalized.len() > 3 {
        Some(suffix_bytes(word, 3))
    } else {
        CLITICS
            .iter()
            .find(|c| normalized.ends_with(*c) && normalized.len() > c.len())
            .map(|c| suffix_bytes(word, c.chars().count()))
    };

    match suffix_len {
        Some(len) => {
            let (stem, clitic) = word.split_at(word.len() - len);
            out.push(stem);
            out.push(clitic);
        }
        None => out.push(word),
    }
}

/// Byte length of the last `chars` characters of `word`
fn suffix_bytes(word: &str, chars: usize) -> usize {
    word.chars().rev().take(chars).map(char::len_utf8).sum()
}

impl Tokenizer for TreebankTokenizer {
    type Error = NlpError;

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        Ok(self.split(text).into_iter().map(Token::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        TreebankTokenizer::new()
            .unwrap()
            .split(text)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_sentence_punctuation() {
        assert_eq!(
            split("The quick brown fox. The lazy dog."),
            vec!["The", "quick", "brown", "fox", ".", "The", "lazy", "dog", "."]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(split("I don't know"), vec!["I", "do", "n't", "know"]);
        assert_eq!(split("Alice's cat"), vec!["Alice", "'s", "cat"]);
        assert_eq!(split("they're here"), vec!["they", "'re", "here"]);
        assert_eq!(split("we’ll see"), vec!["we", "’ll", "see"]);
    }

    #[test]
    fn test_split_clitics_survive_rejoin() {
        let tokens = split("Alice's cat isn't here. They'll say we’d gone.");
        assert_eq!(split(&tokens.join(" ")), tokens);
        assert_eq!(split("Alice 's"), vec!["Alice", "'s"]);
    }

    #[test]
    fn test_quoted_word_keeps_apostrophe_separate() {
        assert_eq!(split("'sup"), vec!["'", "sup"]);
    }

    #[test]
    fn test_apostrophe_inside_word_is_kept() {
        assert_eq!(split("o'clock"), vec!["o'clock"]);
    }

    #[test]
    fn test_hyphenated_word_stays_whole() {
        assert_eq!(split("a well-known fact"), vec!["a", "well-known", "fact"]);
    }

    #[test]
    fn test_numbers_and_symbols() {
        assert_eq!(
            split("Pi is 3.14, roughly... (1,000 digits)"),
            vec!["Pi", "is", "3.14", ",", "roughly", "...", "(", "1,000", "digits", ")"]
        );
    }

    #[test]
    fn test_quotes_are_separate() {
        assert_eq!(split("\"Hello\""), vec!["\"", "Hello", "\""]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(split("   \n\t ").is_empty());
        assert!(split("").is_empty());
    }

    #[test]
    fn test_tokenize_trait() {
        let tokenizer = TreebankTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("Hi!").unwrap();
        assert_eq!(tokens, vec![Token::new("Hi"), Token::new("!")]);
    }
}
