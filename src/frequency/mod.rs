//! Frequency analysis
//!
//! Counts content words across the whole document and derives the set of
//! "significant" words from a [`ThresholdPolicy`].

pub mod threshold;

use crate::errors::{LuhnError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::ThresholdPolicy;
use rustc_hash::{FxHashMap, FxHashSet};

/// Word occurrence counts over a document, stopwords excluded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
        }
        self.total += 1;
    }

    /// Occurrence count of `word` (0 if absent)
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Highest count in the table (0 when empty)
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries sorted by count descending, then word ascending
    pub fn sorted_entries(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(w, &c)| (w.as_str(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Iterate over `(word, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

/// Is this token eligible for counting? Only all-alphanumeric tokens count.
pub fn is_content_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Output of [`FrequencyAnalyzer::analyze`]
#[derive(Debug, Clone)]
pub struct FrequencyAnalysis {
    /// Word counts
    pub table: FrequencyTable,
    /// Significance threshold derived from `table`
    pub threshold: f64,
    /// Words whose count meets or exceeds `threshold`
    pub significant: FxHashSet<String>,
}

impl FrequencyAnalysis {
    /// Check if `word` is significant
    pub fn is_significant(&self, word: &str) -> bool {
        self.significant.contains(word)
    }

    /// Significant words sorted alphabetically
    pub fn significant_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.significant.iter().cloned().collect();
        words.sort();
        words
    }
}

/// Builds a [`FrequencyTable`] and the significant-word set
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyAnalyzer {
    policy: ThresholdPolicy,
}

impl FrequencyAnalyzer {
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self { policy }
    }

    /// Count content tokens (stopwords and non-alphanumeric tokens skipped)
    pub fn count<'a, I>(tokens: I, stopwords: &StopwordFilter) -> FrequencyTable
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = FrequencyTable::new();
        for token in tokens {
            if is_content_token(token) && !stopwords.is_stopword(token) {
                table.add(token);
            }
        }
        table
    }

    /// Analyze a document's tokens.
    ///
    /// Returns [`LuhnError::EmptyVocabulary`] when nothing survives
    /// filtering.
    pub fn analyze<'a, I>(&self, tokens: I, stopwords: &StopwordFilter) -> Result<FrequencyAnalysis>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let table = Self::count(tokens, stopwords);
        self.analyze_table(table)
    }

    /// Derive threshold and significant words from an existing table
    pub fn analyze_table(&self, table: FrequencyTable) -> Result<FrequencyAnalysis> {
        if table.is_empty() {
            return Err(LuhnError::EmptyVocabulary);
        }

        let threshold = self.policy.threshold(&table);
        let significant: FxHashSet<String> = table
            .iter()
            .filter(|&(_, count)| count as f64 >= threshold)
            .map(|(w, _)| w.to_string())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            policy = self.policy.as_str(),
            threshold,
            distinct = table.distinct(),
            significant = significant.len(),
            "derived significance threshold"
        );

        Ok(FrequencyAnalysis {
            table,
            threshold,
            significant,
        })
    }
}
