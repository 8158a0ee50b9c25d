//! Splitting a document into roughly equal chapters by token count

use crate::error::AnalysisError;
use lexis_domain::traits::Tokenizer;
use lexis_domain::{Chapter, Token};
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

/// Splits text into at most `max_chapters` contiguous chapters
pub struct ChapterSegmenter<C> {
    tokenizer: Arc<C>,
}

impl<C> ChapterSegmenter<C>
where
    C: Tokenizer,
    C::Error: Display,
{
    /// Create a segmenter over an initialized tokenizer
    pub fn new(tokenizer: Arc<C>) -> Self {
        Self { tokenizer }
    }

    /// Segment `text` into chapters
    ///
    /// Chapter text is its tokens joined by single spaces, so original
    /// whitespace and punctuation spacing are not preserved. Text without
    /// tokens yields one empty chapter.
    pub fn segment(&self, text: &str, max_chapters: usize) -> Result<Vec<Chapter>, AnalysisError> {
        let tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(AnalysisError::unexpected)?;

        if tokens.is_empty() {
            return Ok(vec![Chapter {
                index: 1,
                token_count: 0,
                text: String::new(),
            }]);
        }

        let chapters: Vec<Chapter> = partition(&tokens, max_chapters)
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| Chapter {
                index: i + 1,
                token_count: chunk.len(),
                text: join_tokens(chunk),
            })
            .collect();

        debug!(
            "Segmented {} tokens into {} chapters (max {})",
            tokens.len(),
            chapters.len(),
            max_chapters
        );

        Ok(chapters)
    }
}

impl<C> Clone for ChapterSegmenter<C> {
    fn clone(&self) -> Self {
        Self {
            tokenizer: Arc::clone(&self.tokenizer),
        }
    }
}

/// Partition `items` into at most `max_chunks` non-empty contiguous chunks
///
/// Every chunk but the last holds `max(1, len / max_chunks)` items; the last
/// chunk absorbs the remainder. A `max_chunks` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use lexis_analyzer::segmenter::partition;
///
/// let items: Vec<u32> = (0..10).collect();
/// let sizes: Vec<usize> = partition(&items, 3).iter().map(|c| c.len()).collect();
/// assert_eq!(sizes, vec![3, 3, 4]);
/// ```
pub fn partition<T>(items: &[T], max_chunks: usize) -> Vec<&[T]> {
    let max_chunks = max_chunks.max(1);
    let target = (items.len() / max_chunks).max(1);

    let mut chunks = Vec::with_capacity(max_chunks.min(items.len()));
    let mut start = 0;

    for end in 1..=items.len() {
        if end - start >= target && chunks.len() < max_chunks - 1 {
            chunks.push(&items[start..end]);
            start = end;
        }
    }

    if start < items.len() {
        chunks.push(&items[start..]);
    }

    chunks
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_nlp::MockCapability;
    use proptest::prelude::*;

    fn segmenter() -> ChapterSegmenter<MockCapability> {
        ChapterSegmenter::new(Arc::new(MockCapability::default()))
    }

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_three_hundred_tokens_split_evenly() {
        let chapters = segmenter().segment(&words(300), 3).unwrap();

        assert_eq!(chapters.len(), 3);
        assert!(chapters.iter().all(|c| c.token_count == 100));
        assert_eq!(chapters[0].label(), "Chapter 1");
        assert_eq!(chapters[2].label(), "Chapter 3");
        assert!(chapters[1].text.starts_with("w100 "));
    }

    #[test]
    fn test_remainder_goes_to_last_chapter() {
        let chapters = segmenter().segment(&words(10), 3).unwrap();
        let counts: Vec<usize> = chapters.iter().map(|c| c.token_count).collect();
        assert_eq!(counts, vec![3, 3, 4]);
    }

    #[test]
    fn test_fewer_tokens_than_chapters() {
        let chapters = segmenter().segment("alpha beta", 3).unwrap();
        let texts: Vec<&str> = chapters.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_chapter() {
        let chapters = segmenter().segment("   ", 3).unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].index, 1);
        assert_eq!(chapters[0].token_count, 0);
        assert!(chapters[0].text.is_empty());
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let chapters = segmenter().segment("one\n\ntwo\tthree", 1).unwrap();
        assert_eq!(chapters[0].text, "one two three");
    }

    #[test]
    fn test_zero_max_chunks_acts_as_one() {
        let items = [1, 2, 3];
        assert_eq!(partition(&items, 0), vec![&items[..]]);
    }

    proptest! {
        #[test]
        fn prop_partition_covers_input_in_order(len in 0usize..500, max in 1usize..12) {
            let items: Vec<usize> = (0..len).collect();
            let chunks = partition(&items, max);

            prop_assert!(chunks.len() <= max);
            prop_assert!(chunks.iter().all(|c| !c.is_empty()));

            let flat: Vec<usize> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
            prop_assert_eq!(flat, items.clone());

            if len >= max {
                prop_assert_eq!(chunks.len(), max);
            } else {
                prop_assert_eq!(chunks.len(), len);
            }
        }

        #[test]
        fn prop_leading_chunks_have_target_size(len in 1usize..500, max in 1usize..12) {
            let items: Vec<usize> = (0..len).collect();
            let chunks = partition(&items, max);
            let target = (len / max).max(1);

            for chunk in &chunks[..chunks.len() - 1] {
                prop_assert_eq!(chunk.len(), target);
            }
            prop_assert!(chunks[chunks.len() - 1].len() >= target);
        }
    }
}
