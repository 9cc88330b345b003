//! Error types for rapid_luhn
//!
//! Every failure is a value of [`LuhnError`]. Callers that need to branch on
//! the condition (rather than parse a message) should match on
//! [`LuhnError::kind`].

use serde::{Deserialize, Serialize};
use std::str::Utf8Error;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LuhnError>;

/// Errors produced while configuring or running a summarization
#[derive(Debug, Error)]
pub enum LuhnError {
    /// Configuration rejected before any computation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The document segmented into zero sentences
    #[error("document contains no sentences")]
    EmptySentenceSet,

    /// No word survived stopword and alphanumeric filtering
    #[error("document has no content words after stopword filtering")]
    EmptyVocabulary,

    /// Every sentence was excluded from ranking
    #[error("no sentence contains a significant word")]
    NoScorableSentences,

    /// Input bytes were not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// A JSON summarizer spec could not be parsed or applied
    #[error("invalid summarizer spec: {0}")]
    InvalidSpec(String),
}

impl LuhnError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        LuhnError::InvalidConfig(msg.into())
    }

    /// Create an invalid spec error
    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        LuhnError::InvalidSpec(msg.into())
    }

    /// Stable, machine-readable code for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LuhnError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            LuhnError::EmptySentenceSet => ErrorKind::EmptySentenceSet,
            LuhnError::EmptyVocabulary => ErrorKind::EmptyVocabulary,
            LuhnError::NoScorableSentences => ErrorKind::NoScorableSentences,
            LuhnError::Encoding(_) => ErrorKind::Encoding,
            LuhnError::InvalidSpec(_) => ErrorKind::InvalidSpec,
        }
    }
}

impl From<serde_json::Error> for LuhnError {
    fn from(err: serde_json::Error) -> Self {
        LuhnError::InvalidSpec(err.to_string())
    }
}

/// Machine-readable error code.
///
/// Serializes as a snake_case string (e.g. `"empty_vocabulary"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidConfig,
    EmptySentenceSet,
    EmptyVocabulary,
    NoScorableSentences,
    Encoding,
    InvalidSpec,
}

impl ErrorKind {
    /// Returns the snake_case code used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidConfig => "invalid_config",
            Self::EmptySentenceSet => "empty_sentence_set",
            Self::EmptyVocabulary => "empty_vocabulary",
            Self::NoScorableSentences => "no_scorable_sentences",
            Self::Encoding => "encoding",
            Self::InvalidSpec => "invalid_spec",
        }
    }

    /// `true` for the "could not summarize this document" outcomes, as
    /// opposed to caller mistakes (bad config, bad bytes, bad spec).
    pub fn is_degenerate_input(&self) -> bool {
        matches!(
            self,
            Self::EmptySentenceSet | Self::EmptyVocabulary | Self::NoScorableSentences
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
