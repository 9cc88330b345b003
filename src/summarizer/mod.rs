//! Summarization components
//!
//! Provides top-K sentence selection and the [`luhn::LuhnSummarizer`]
//! facade that runs the whole pipeline.

pub mod luhn;
pub mod selector;

use crate::scoring::SentenceScore;
use selector::SelectedSentence;
use serde::{Deserialize, Serialize};

/// An extractive summary and the intermediate values that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined with single spaces
    pub text: String,
    /// Selected sentences in output order
    pub sentences: Vec<SelectedSentence>,
    /// Significance threshold used for this document
    pub threshold: f64,
    /// Significant words, alphabetical
    pub significant_words: Vec<String>,
    /// Scores of every scorable sentence, in document order
    pub scores: Vec<SentenceScore>,
    /// Number of sentences the document segmented into
    pub num_sentences: usize,
}

impl Summary {
    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
