//! Word → tag lexicon used by the tagger

use crate::NlpError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Lexicon shipped with the crate, installed into the data directory on first use
pub const BUNDLED_LEXICON: &str = include_str!("../data/lexicon.tsv");

/// Mapping from lowercased word to its most likely Penn Treebank tag
///
/// The text format is one `word<TAB>TAG` pair per line (any whitespace works as
/// the separator). Blank lines and lines starting with `#` are ignored. Later
/// entries override earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Parse lexicon text
    pub fn parse(source: &str) -> Result<Self, NlpError> {
        let mut entries = HashMap::new();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let (word, tag) = match fields.as_slice() {
                [word, tag] => (*word, *tag),
                _ => {
                    return Err(NlpError::Lexicon {
                        line: idx + 1,
                        message: format!("expected 'word<TAB>TAG', got '{}'", line),
                    })
                }
            };

            if !tag.chars().all(|c| c.is_ascii_uppercase() || c == '$') {
                return Err(NlpError::Lexicon {
                    line: idx + 1,
                    message: format!("invalid tag '{}'", tag),
                });
            }

            entries.insert(word.to_lowercase(), tag.to_string());
        }

        Ok(Self { entries })
    }

    /// Load a lexicon file
    pub fn load(path: &Path) -> Result<Self, NlpError> {
        let source = fs::read_to_string(path).map_err(|e| {
            NlpError::Initialization(format!("Cannot read lexicon '{}': {}", path.display(), e))
        })?;
        Self::parse(&source)
    }

    /// The lexicon compiled into the crate
    pub fn bundled() -> Result<Self, NlpError> {
        Self::parse(BUNDLED_LEXICON)
    }

    /// Tag for a word (case-insensitive)
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_lowercase()).map(String::as_str)
    }

    /// Whether the word is listed with an adjective tag
    pub fn is_adjective(&self, word: &str) -> bool {
        self.get(word).is_some_and(|tag| tag.starts_with("JJ"))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
