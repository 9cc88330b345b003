//! Sentence scoring
//!
//! A [`SentenceScorer`] turns one sentence's tokens plus the document's
//! significant-word set into a score. Two interchangeable strategies are
//! provided:
//!
//! - [`cluster::ClusterScorer`]: gap-bounded clusters, best `count² / span`
//! - [`whole_sentence::WholeSentenceScorer`]: the sentence as one cluster

pub mod cluster;
pub mod whole_sentence;

use crate::types::Sentence;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Scores a single sentence.
///
/// # Contract
///
/// - Returns `None` when the sentence has no significant token; such a
///   sentence is excluded from ranking.
/// - Otherwise returns a finite score `> 0`.
/// - Pure: the same input always produces the same output.
pub trait SentenceScorer {
    /// Short, stable identifier (e.g., `"clustered"`).
    fn name(&self) -> &'static str;

    /// Score one sentence's token sequence.
    fn score(&self, tokens: &[String], significant: &FxHashSet<String>) -> Option<f64>;
}

/// Score of a sentence, keyed by its position in the document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// Sentence index
    pub index: usize,
    /// Luhn score
    pub score: f64,
}

/// 0-based positions of significant tokens, in order
pub fn significant_positions(tokens: &[String], significant: &FxHashSet<String>) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| significant.contains(t.as_str()))
        .map(|(i, _)| i)
        .collect()
}

/// Score every sentence with at least `min_tokens` tokens.
///
/// Unscorable sentences are omitted; the result is in document order.
pub fn score_sentences<S: SentenceScorer + ?Sized>(
    scorer: &S,
    sentences: &[Sentence],
    significant: &FxHashSet<String>,
    min_tokens: usize,
) -> Vec<SentenceScore> {
    sentences
        .iter()
        .filter(|s| s.len() >= min_tokens)
        .filter_map(|s| {
            scorer
                .score(&s.tokens, significant)
                .map(|score| SentenceScore {
                    index: s.index,
                    score,
                })
        })
        .collect()
}
