//! Whole-sentence scoring (no clustering)

use super::SentenceScorer;
use rustc_hash::FxHashSet;

/// Treats the sentence as a single cluster:
/// `significant_count² / token_count`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WholeSentenceScorer;

impl SentenceScorer for WholeSentenceScorer {
    fn name(&self) -> &'static str {
        "whole_sentence"
    }

    fn score(&self, tokens: &[String], significant: &FxHashSet<String>) -> Option<f64> {
        let count = tokens
            .iter()
            .filter(|t| significant.contains(t.as_str()))
            .count();
        if count == 0 {
            return None;
        }
        let count = count as f64;
        Some(count * count / tokens.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn set(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_whole_sentence_score() {
        let score = WholeSentenceScorer
            .score(&words("the fox and the fox ran"), &set(&["fox"]))
            .unwrap();
        assert!((score - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_ignores_gaps() {
        // Distance between significant words does not matter
        let sig = set(&["fox", "hen"]);
        let near = WholeSentenceScorer.score(&words("fox hen x x x x"), &sig);
        let far = WholeSentenceScorer.score(&words("fox x x x x hen"), &sig);
        assert_eq!(near, far);
    }

    #[test]
    fn test_unscorable() {
        assert!(WholeSentenceScorer
            .score(&words("the cat"), &set(&["fox"]))
            .is_none());
        assert!(WholeSentenceScorer.score(&[], &set(&["fox"])).is_none());
    }
}
