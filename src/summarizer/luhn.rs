//! Luhn summarizer facade
//!
//! [`LuhnSummarizer`] owns a validated [`LuhnConfig`], the stopword list it
//! resolves to, and a segmenter. It picks the scorer named by the config and
//! runs the [`Pipeline`].
//!
//! ```
//! use rapid_luhn::{LuhnConfig, LuhnSummarizer};
//!
//! let summarizer = LuhnSummarizer::new(LuhnConfig::default().with_summary_length(1)).unwrap();
//! let summary = summarizer
//!     .summarize("Rust is fast. Rust is safe. Cats sleep a lot.")
//!     .unwrap();
//! assert!(summary.text.contains("Rust"));
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{SentenceSegmenter, UnicodeSegmenter};
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::Pipeline;
use crate::scoring::cluster::ClusterScorer;
use crate::scoring::whole_sentence::WholeSentenceScorer;
use crate::summarizer::Summary;
use crate::types::{LuhnConfig, ScoringStrategy};

/// Extractive summarizer using the Luhn significant-word heuristic
#[derive(Debug, Clone)]
pub struct LuhnSummarizer<Seg = UnicodeSegmenter> {
    config: LuhnConfig,
    stopwords: Arc<StopwordFilter>,
    segmenter: Seg,
}

impl LuhnSummarizer<UnicodeSegmenter> {
    /// Create a summarizer, rejecting an invalid config up front.
    ///
    /// Stopwords come from the shared built-in list for `config.language`,
    /// extended by `config.stopwords`.
    pub fn new(config: LuhnConfig) -> Result<Self> {
        Self::with_segmenter(config, UnicodeSegmenter)
    }
}

impl Default for LuhnSummarizer<UnicodeSegmenter> {
    fn default() -> Self {
        Self {
            config: LuhnConfig::default(),
            stopwords: StopwordFilter::shared("en"),
            segmenter: UnicodeSegmenter,
        }
    }
}

impl<Seg: SentenceSegmenter> LuhnSummarizer<Seg> {
    /// Create a summarizer with a custom sentence segmenter
    pub fn with_segmenter(config: LuhnConfig, segmenter: Seg) -> Result<Self> {
        config.validate()?;
        let stopwords = resolve_stopwords(&config);
        Ok(Self {
            config,
            stopwords,
            segmenter,
        })
    }

    /// Replace the stopword list entirely (ignores `language` and
    /// `stopwords` from the config).
    pub fn with_stopword_filter(mut self, filter: impl Into<Arc<StopwordFilter>>) -> Self {
        self.stopwords = filter.into();
        self
    }

    pub fn config(&self) -> &LuhnConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Summarize a document
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.summarize_with_observer(text, &mut NoopObserver)
    }

    /// Summarize raw bytes, failing with an encoding error on invalid UTF-8
    pub fn summarize_bytes(&self, bytes: &[u8]) -> Result<Summary> {
        let text = std::str::from_utf8(bytes)?;
        self.summarize(text)
    }

    /// Summarize a document, reporting each stage to `observer`
    pub fn summarize_with_observer(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        let cfg = &self.config;
        match cfg.scoring {
            ScoringStrategy::Clustered => {
                Pipeline::new(&self.segmenter, ClusterScorer::new(cfg.max_gap)).run(
                    text,
                    cfg,
                    &self.stopwords,
                    observer,
                )
            }
            ScoringStrategy::WholeSentence => Pipeline::new(&self.segmenter, WholeSentenceScorer)
                .run(text, cfg, &self.stopwords, observer),
        }
    }
}

impl<Seg: SentenceSegmenter + Sync> LuhnSummarizer<Seg> {
    /// Summarize independent documents in parallel.
    ///
    /// Results are returned in input order; one document failing does not
    /// affect the others.
    pub fn summarize_batch<T: AsRef<str> + Sync>(&self, texts: &[T]) -> Vec<Result<Summary>> {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }
}

/// Shared built-in list, copied and extended only when extra words are set.
fn resolve_stopwords(config: &LuhnConfig) -> Arc<StopwordFilter> {
    let shared = StopwordFilter::shared(&config.language);
    if config.stopwords.is_empty() {
        return shared;
    }
    let mut filter = (*shared).clone();
    filter.add_stopwords(&config.stopwords);
    Arc::new(filter)
}

/// Summarize `text` into at most `summary_length` sentences with the default
/// configuration (English stopwords, clustered scoring, mean threshold).
pub fn summarize(text: &str, summary_length: usize) -> Result<Summary> {
    LuhnSummarizer::new(LuhnConfig::default().with_summary_length(summary_length))?
        .summarize(text)
}
