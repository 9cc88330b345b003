//! Top-K sentence selection
//!
//! Ranks scored sentences by descending score and joins the best K into the
//! summary text. Ties keep document order, so the result never depends on
//! hash iteration order.
//!
//! The joined text follows selection order by default, which is usually not
//! the document's reading order. Use [`SummaryOrder::Document`] to re-sort.

use crate::errors::{LuhnError, Result};
use crate::scoring::SentenceScore;
use crate::types::{Sentence, SummaryOrder};
use serde::{Deserialize, Serialize};

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Order of the joined output
    pub order: SummaryOrder,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            order: SummaryOrder::Score,
        }
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Sentence index in the document
    pub index: usize,
    /// Literal sentence text
    pub text: String,
    /// Luhn score
    pub score: f64,
}

/// Result of sentence selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected sentences in output order
    pub sentences: Vec<SelectedSentence>,
    /// Sentence texts joined with single spaces
    pub text: String,
}

/// Ranks and selects sentences
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Set output order
    pub fn with_order(mut self, order: SummaryOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Rank `scores` and select the top sentences.
    ///
    /// `scores` are keyed by [`Sentence::index`]; entries whose index has no
    /// sentence are ignored. Returns [`LuhnError::NoScorableSentences`] when
    /// nothing can be selected.
    pub fn select(&self, sentences: &[Sentence], scores: &[SentenceScore]) -> Result<Selection> {
        let mut ranked: Vec<SentenceScore> = scores
            .iter()
            .copied()
            .filter(|s| s.score.is_finite())
            .collect();
        // Stable: equal scores keep their relative order, then index breaks
        // any remaining tie so input order never matters.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));

        let mut selected: Vec<SelectedSentence> = ranked
            .iter()
            .filter_map(|s| {
                find_sentence(sentences, s.index).map(|sentence| SelectedSentence {
                    index: s.index,
                    text: sentence.text.clone(),
                    score: s.score,
                })
            })
            .take(self.config.num_sentences)
            .collect();

        if selected.is_empty() {
            return Err(LuhnError::NoScorableSentences);
        }

        if self.config.order == SummaryOrder::Document {
            selected.sort_by_key(|s| s.index);
        }

        let text = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Selection {
            sentences: selected,
            text,
        })
    }
}

/// Sentences from the tokenizer are indexed consecutively, so the direct
/// lookup almost always hits.
fn find_sentence(sentences: &[Sentence], index: usize) -> Option<&Sentence> {
    match sentences.get(index) {
        Some(s) if s.index == index => Some(s),
        _ => sentences.iter().find(|s| s.index == index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences() -> Vec<Sentence> {
        ["First one.", "Second one.", "Third one.", "Fourth one."]
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, 0, 0, i, vec!["x".into()]))
            .collect()
    }

    fn score(index: usize, score: f64) -> SentenceScore {
        SentenceScore { index, score }
    }

    #[test]
    fn test_selects_top_k_by_score() {
        let sentences = make_sentences();
        let scores = vec![score(0, 1.0), score(1, 3.0), score(2, 2.0), score(3, 0.5)];

        let result = SentenceSelector::new()
            .with_num_sentences(2)
            .select(&sentences, &scores)
            .unwrap();

        let idx: Vec<_> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(idx, vec![1, 2]);
        assert_eq!(result.text, "Second one. Third one.");
    }

    #[test]
    fn test_score_order_is_kept_in_text() {
        let sentences = make_sentences();
        let scores = vec![score(0, 1.0), score(3, 5.0)];

        let result = SentenceSelector::new().select(&sentences, &scores).unwrap();

        assert_eq!(result.text, "Fourth one. First one.");
    }

    #[test]
    fn test_document_order() {
        let sentences = make_sentences();
        let scores = vec![score(0, 1.0), score(3, 5.0), score(2, 4.0)];

        let result = SentenceSelector::new()
            .with_order(SummaryOrder::Document)
            .select(&sentences, &scores)
            .unwrap();

        for i in 1..result.sentences.len() {
            assert!(result.sentences[i].index > result.sentences[i - 1].index);
        }
        assert_eq!(result.text, "First one. Third one. Fourth one.");
    }

    #[test]
    fn test_ties_broken_by_index() {
        let sentences = make_sentences();
        // Supplied out of order on purpose
        let scores = vec![score(2, 1.0), score(0, 1.0), score(1, 1.0)];

        let result = SentenceSelector::new()
            .with_num_sentences(2)
            .select(&sentences, &scores)
            .unwrap();

        let idx: Vec<_> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn test_fewer_scores_than_k() {
        let sentences = make_sentences();
        let scores = vec![score(2, 1.0)];

        let result = SentenceSelector::new()
            .with_num_sentences(10)
            .select(&sentences, &scores)
            .unwrap();

        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.text, "Third one.");
    }

    #[test]
    fn test_identical_texts_are_distinct_entries() {
        let sentences: Vec<Sentence> = (0..3)
            .map(|i| Sentence::new("Same text.", 0, 0, i, vec!["x".into()]))
            .collect();
        let scores = vec![score(0, 1.0), score(1, 1.0), score(2, 1.0)];

        let result = SentenceSelector::new().select(&sentences, &scores).unwrap();

        assert_eq!(result.sentences.len(), 3);
        assert_eq!(result.text, "Same text. Same text. Same text.");
    }

    #[test]
    fn test_empty_scores() {
        let sentences = make_sentences();
        let err = SentenceSelector::new().select(&sentences, &[]).unwrap_err();
        assert!(matches!(err, LuhnError::NoScorableSentences));
    }

    #[test]
    fn test_unknown_index_ignored() {
        let sentences = make_sentences();
        let err = SentenceSelector::new()
            .select(&sentences, &[score(42, 1.0)])
            .unwrap_err();
        assert!(matches!(err, LuhnError::NoScorableSentences));
    }
}
