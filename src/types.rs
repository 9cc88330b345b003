//! Core types for rapid_luhn
//!
//! This module defines the sentence representation shared by every stage,
//! the policy enums that select between scoring heuristics, and the
//! summarizer configuration.

use crate::errors::{LuhnError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Normalized word tokens, stopwords included, punctuation stripped
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        index: usize,
        tokens: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            tokens,
        }
    }

    /// Number of word tokens in the sentence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no word tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ============================================================================
// Threshold Policy
// ============================================================================

/// How the significance threshold is derived from the frequency table.
///
/// The two policies select materially different significant-word sets and
/// are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// `sum(counts) / distinct_words`: a word is significant when it is at
    /// least as frequent as the average content word.
    #[default]
    Mean,
    /// `max(counts) * fraction`: a word is significant when it reaches the
    /// given fraction of the most frequent content word.
    MaxFraction { fraction: f64 },
}

impl ThresholdPolicy {
    /// Default fraction used by [`ThresholdPolicy::max_fraction_default`]
    pub const DEFAULT_FRACTION: f64 = 0.2;

    /// Max-fraction policy with the conventional 0.2 fraction
    pub fn max_fraction_default() -> Self {
        ThresholdPolicy::MaxFraction {
            fraction: Self::DEFAULT_FRACTION,
        }
    }

    /// Returns the user-facing name used in JSON and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdPolicy::Mean => "mean",
            ThresholdPolicy::MaxFraction { .. } => "max_fraction",
        }
    }
}

// ============================================================================
// Scoring Strategy
// ============================================================================

/// Sentence scoring heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Gap-bounded clusters of significant words; sentence score is the
    /// best cluster's `count² / span`.
    #[default]
    Clustered,
    /// The whole sentence is one cluster:
    /// `significant_count² / token_count`.
    WholeSentence,
}

impl ScoringStrategy {
    /// Parse a strategy name, accepting a few common spellings.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "clustered" | "cluster" | "luhn" => Ok(ScoringStrategy::Clustered),
            "whole_sentence" | "wholesentence" | "whole" | "sentence" => {
                Ok(ScoringStrategy::WholeSentence)
            }
            other => Err(LuhnError::invalid_config(format!(
                "unknown scoring strategy '{other}' (expected 'clustered' or 'whole_sentence')"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStrategy::Clustered => "clustered",
            ScoringStrategy::WholeSentence => "whole_sentence",
        }
    }
}

impl std::str::FromStr for ScoringStrategy {
    type Err = LuhnError;

    fn from_str(value: &str) -> Result<Self> {
        ScoringStrategy::parse(value)
    }
}

// ============================================================================
// Summary Order
// ============================================================================

/// Order in which selected sentences are joined into the summary text.
///
/// The default is descending score order, which generally differs from the
/// document's reading order. `Document` must be requested explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrder {
    /// Highest score first; ties keep document order
    #[default]
    Score,
    /// Selected sentences re-sorted by their position in the document
    Document,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for Luhn summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuhnConfig {
    /// Maximum number of sentences in the summary
    pub summary_length: usize,
    /// Largest position difference between two significant words that keeps
    /// them in the same cluster (clustered scoring only)
    pub max_gap: usize,
    /// Significance threshold policy
    #[serde(default)]
    pub threshold_policy: ThresholdPolicy,
    /// Sentence scoring strategy
    #[serde(default)]
    pub scoring: ScoringStrategy,
    /// Order of sentences in the joined summary
    #[serde(default)]
    pub order: SummaryOrder,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Optional additional stopwords list (extends the built-in list when provided)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Sentences with fewer word tokens are not scored
    #[serde(default = "default_min_sentence_tokens")]
    pub min_sentence_tokens: usize,
}

fn default_min_sentence_tokens() -> usize {
    1
}

impl Default for LuhnConfig {
    fn default() -> Self {
        Self {
            summary_length: 3,
            max_gap: 4,
            threshold_policy: ThresholdPolicy::Mean,
            scoring: ScoringStrategy::Clustered,
            order: SummaryOrder::Score,
            language: "en".to_string(),
            stopwords: Vec::new(),
            min_sentence_tokens: default_min_sentence_tokens(),
        }
    }
}

impl LuhnConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.summary_length == 0 {
            return Err(LuhnError::invalid_config("summary_length must be > 0"));
        }

        if self.min_sentence_tokens == 0 {
            return Err(LuhnError::invalid_config(
                "min_sentence_tokens must be > 0",
            ));
        }

        if let ThresholdPolicy::MaxFraction { fraction } = self.threshold_policy {
            if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
                return Err(LuhnError::invalid_config(format!(
                    "max_fraction must be in (0, 1], got {}",
                    fraction
                )));
            }
        }

        Ok(())
    }

    /// Builder method: set number of summary sentences
    pub fn with_summary_length(mut self, summary_length: usize) -> Self {
        self.summary_length = summary_length;
        self
    }

    /// Builder method: set cluster gap
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Builder method: set threshold policy
    pub fn with_threshold_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.threshold_policy = policy;
        self
    }

    /// Builder method: set scoring strategy
    pub fn with_scoring(mut self, scoring: ScoringStrategy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Builder method: set summary order
    pub fn with_order(mut self, order: SummaryOrder) -> Self {
        self.order = order;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set minimum scored sentence length
    pub fn with_min_sentence_tokens(mut self, min: usize) -> Self {
        self.min_sentence_tokens = min;
        self
    }
}
