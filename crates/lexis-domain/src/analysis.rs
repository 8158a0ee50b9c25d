//! Analysis module - lexical statistics for a document or chapter

use std::collections::HashMap;

/// Maximum number of adjectives shown in a rendered scoreboard
pub const TOP_ADJECTIVES: usize = 10;

/// Adjective occurrence counts with a stable ranking
///
/// Keys are lowercased surface forms. Entries remember the order in which each
/// adjective was first seen, so equal counts rank by first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjectiveFrequencyTable {
    /// (adjective, count) in first-seen order
    entries: Vec<(String, usize)>,

    /// adjective → position in `entries`
    index: HashMap<String, usize>,
}

impl AdjectiveFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of an adjective (lowercased before counting)
    pub fn record(&mut self, adjective: &str) {
        let key = adjective.to_lowercase();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for one adjective (case-insensitive)
    pub fn count(&self, adjective: &str) -> usize {
        self.index
            .get(&adjective.to_lowercase())
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct adjectives
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no adjective was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total adjective occurrences
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Every adjective ranked by descending count, ties in first-seen order
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        // sort_by is stable, which is what keeps first-seen order on ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-ranked adjectives
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis_domain::AdjectiveFrequencyTable;
    ///
    /// let table: AdjectiveFrequencyTable = ["red", "blue", "Blue", "green"].into_iter().collect();
    /// assert_eq!(table.top(2), vec![("blue", 2), ("red", 1)]);
    /// ```
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<'a> FromIterator<&'a str> for AdjectiveFrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for adjective in iter {
            table.record(adjective);
        }
        table
    }
}

/// Result of analyzing one scope (whole document or one chapter)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Number of word-shaped tokens
    pub word_count: usize,

    /// Adjective counts over the same tokens
    pub adjectives: AdjectiveFrequencyTable,
}

impl AnalysisResult {
    /// Adjectives that appear in a rendered scoreboard
    pub fn top_adjectives(&self) -> Vec<(&str, usize)> {
        self.adjectives.top(TOP_ADJECTIVES)
    }
}
