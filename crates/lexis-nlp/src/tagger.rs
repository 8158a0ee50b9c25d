//! Lexicon-driven part-of-speech tagger

use crate::lexicon::Lexicon;
use crate::NlpError;
use lexis_domain::traits::PosTagger;
use lexis_domain::{TaggedToken, Token};

/// Suffixes that mark an unknown word as an adjective
const ADJECTIVE_SUFFIXES: [&str; 9] = [
    "ous", "ful", "ive", "able", "ible", "less", "ical", "ial", "ish",
];

/// Tags tokens from a lexicon, falling back to orthographic rules
///
/// Resolution order for each token:
/// 1. punctuation and numerals by shape
/// 2. split-off clitics (`n't`, `'s`, `'ll`, ...)
/// 3. lexicon lookup
/// 4. comparative/superlative of a known adjective → `JJR`/`JJS`
/// 5. capitalized word not at the start of a sentence → `NNP`
/// 6. suffix rules, defaulting to `NN`
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: Lexicon,
}

impl LexiconTagger {
    /// Create a tagger over a loaded lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tag one surface form given whether it opens a sentence
    pub fn tag_word(&self, word: &str, sentence_start: bool) -> String {
        if let Some(tag) = punctuation_tag(word) {
            return tag.to_string();
        }
        if is_numeral(word) {
            return "CD".to_string();
        }
        if let Some(tag) = clitic_tag(word) {
            return tag.to_string();
        }
        if let Some(tag) = self.lexicon.get(word) {
            return tag.to_string();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.degree_tag(&lower) {
            return tag.to_string();
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return "NNP".to_string();
        }

        suffix_tag(&lower).to_string()
    }

    /// `JJR`/`JJS` when stripping -er/-est yields a known adjective
    fn degree_tag(&self, lower: &str) -> Option<&'static str> {
        let (stem, tag) = if let Some(stem) = lower.strip_suffix("est") {
            (stem, "JJS")
        } else if let Some(stem) = lower.strip_suffix("er") {
            (stem, "JJR")
        } else {
            return None;
        };

        if stem.len() < 2 {
            return None;
        }

        base_candidates(stem)
            .iter()
            .any(|base| self.lexicon.is_adjective(base))
            .then_some(tag)
    }
}

/// Possible base forms for a stripped comparative stem:
/// `tall` (tall-er), `nic` + e (nic-er), `happi` → happy, `bigg` → big
fn base_candidates(stem: &str) -> Vec<String> {
    let mut bases = vec![stem.to_string(), format!("{}e", stem)];

    if let Some(prefix) = stem.strip_suffix('i') {
        bases.push(format!("{}y", prefix));
    }

    let mut chars = stem.chars().rev();
    if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
        if last == prev {
            bases.push(stem[..stem.len() - last.len_utf8()].to_string());
        }
    }

    bases
}

fn punctuation_tag(word: &str) -> Option<&'static str> {
    if word.chars().any(char::is_alphanumeric) {
        return None;
    }
    let tag = match word {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "..." | "--" | "-" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "'" | "“" | "”" | "‘" | "’" | "`" => "''",
        "$" => "$",
        "#" => "#",
        _ => "SYM",
    };
    Some(tag)
}

fn is_numeral(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

fn clitic_tag(word: &str) -> Option<&'static str> {
    let normalized = word.replace('’', "'").to_lowercase();
    let tag = match normalized.as_str() {
        "n't" => "RB",
        "'s" => "POS",
        "'re" | "'m" => "VBP",
        "'ll" | "'d" => "MD",
        "'ve" => "VB",
        _ => return None,
    };
    Some(tag)
}

fn suffix_tag(lower: &str) -> &'static str {
    let long_enough = |suffix: &str| lower.len() > suffix.len() + 2;

    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|s| lower.ends_with(s) && long_enough(s))
    {
        "JJ"
    } else if lower.ends_with("ic") && long_enough("ic") {
        "JJ"
    } else if lower.ends_with("ly") && long_enough("ly") {
        "RB"
    } else if lower.ends_with("ing") && long_enough("ing") {
        "VBG"
    } else if lower.ends_with("ed") && long_enough("ed") {
        "VBD"
    } else if lower.ends_with('s') && !lower.ends_with("ss") && long_enough("s") {
        "NNS"
    } else {
        "NN"
    }
}

impl PosTagger for LexiconTagger {
    type Error = NlpError;

    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>, Self::Error> {
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut sentence_start = true;

        for token in tokens {
            let tag = self.tag_word(token.text(), sentence_start);
            sentence_start = tag == ".";
            tagged.push(TaggedToken::new(token.clone(), tag));
        }

        Ok(tagged)
    }
}
