//! # rapid_luhn
//!
//! Extractive summarization with the Luhn significant-word heuristic.
//!
//! Words that occur unusually often in a document (after stopword removal)
//! are "significant". Each sentence is scored by its densest run of
//! significant words, and the best sentences form the summary. No training
//! data, models, or external services are involved.
//!
//! ## Features
//!
//! - **Two scoring strategies**: gap-bounded clusters (classic Luhn) or the
//!   whole sentence as one cluster
//! - **Two threshold policies**: mean frequency or a fraction of the
//!   maximum frequency
//! - **Deterministic**: scores are keyed by sentence position and ties keep
//!   document order
//! - **Batch mode**: independent documents are summarized in parallel
//!
//! ```
//! let summary = rapid_luhn::summarize(
//!     "The fox jumps. The fox runs. A turtle watches.",
//!     1,
//! )
//! .unwrap();
//! assert!(summary.text.contains("fox"));
//! ```

pub mod errors;
pub mod frequency;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{ErrorKind, LuhnError, Result};
pub use types::{LuhnConfig, ScoringStrategy, Sentence, SummaryOrder, ThresholdPolicy};

// Re-export main functionality
pub use frequency::{FrequencyAnalysis, FrequencyAnalyzer, FrequencyTable};
pub use nlp::{
    stopwords::StopwordFilter,
    tokenizer::{SentenceSegmenter, SentenceSpan, UnicodeSegmenter},
};
pub use pipeline::{Pipeline, PipelineObserver, SummarizerSpec};
pub use scoring::{
    cluster::{Cluster, ClusterScorer},
    whole_sentence::WholeSentenceScorer,
    SentenceScore, SentenceScorer,
};
pub use summarizer::{
    luhn::{summarize, LuhnSummarizer},
    selector::{SelectedSentence, SentenceSelector},
    Summary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
