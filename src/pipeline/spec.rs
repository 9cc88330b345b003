//! Summarizer specification types.
//!
//! A [`SummarizerSpec`] is the versioned JSON form of a [`LuhnConfig`].
//! Omitted fields keep their defaults.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "scoring": "clustered",
//!   "threshold": { "policy": "max_fraction", "fraction": 0.2 },
//!   "summary_length": 3,
//!   "max_gap": 4,
//!   "order": "score",
//!   "language": "en",
//!   "stopwords": ["via"],
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{LuhnError, Result};
use crate::types::{LuhnConfig, ScoringStrategy, SummaryOrder, ThresholdPolicy};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summarizer specification (v1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizerSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    #[serde(default)]
    pub scoring: Option<ScoringStrategy>,

    #[serde(default)]
    pub threshold: Option<ThresholdPolicy>,

    #[serde(default)]
    pub summary_length: Option<usize>,

    #[serde(default)]
    pub max_gap: Option<usize>,

    #[serde(default)]
    pub order: Option<SummaryOrder>,

    #[serde(default)]
    pub language: Option<String>,

    /// Extra stopwords, added to the language's built-in list.
    #[serde(default)]
    pub stopwords: Vec<String>,

    #[serde(default)]
    pub min_sentence_tokens: Option<usize>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl SummarizerSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unrecognized field names, sorted.
    pub fn unknown_field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve into a validated [`LuhnConfig`].
    ///
    /// Fails on an unsupported version, on unknown fields in strict mode,
    /// and on any value [`LuhnConfig::validate`] rejects.
    pub fn into_config(self) -> Result<LuhnConfig> {
        if self.v != SPEC_VERSION {
            return Err(LuhnError::invalid_spec(format!(
                "unsupported spec version {} (expected {})",
                self.v, SPEC_VERSION
            )));
        }

        let unknown = self.unknown_field_names();
        if !unknown.is_empty() {
            if self.strict {
                return Err(LuhnError::invalid_spec(format!(
                    "unknown field(s): {}",
                    unknown.join(", ")
                )));
            }
            #[cfg(feature = "tracing")]
            tracing::warn!(fields = ?unknown, "ignoring unknown summarizer spec fields");
        }

        let mut cfg = LuhnConfig::default().with_stopwords(self.stopwords);
        if let Some(scoring) = self.scoring {
            cfg.scoring = scoring;
        }
        if let Some(policy) = self.threshold {
            cfg.threshold_policy = policy;
        }
        if let Some(n) = self.summary_length {
            cfg.summary_length = n;
        }
        if let Some(gap) = self.max_gap {
            cfg.max_gap = gap;
        }
        if let Some(order) = self.order {
            cfg.order = order;
        }
        if let Some(language) = self.language {
            cfg.language = language;
        }
        if let Some(min) = self.min_sentence_tokens {
            cfg.min_sentence_tokens = min;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

impl TryFrom<SummarizerSpec> for LuhnConfig {
    type Error = LuhnError;

    fn try_from(spec: SummarizerSpec) -> Result<Self> {
        spec.into_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert!(spec.scoring.is_none());
        assert!(!spec.strict);

        let cfg = spec.into_config().unwrap();
        assert_eq!(cfg, LuhnConfig::default());
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "scoring": "whole_sentence",
            "threshold": { "policy": "max_fraction", "fraction": 0.25 },
            "summary_length": 5,
            "max_gap": 2,
            "order": "document",
            "language": "de",
            "stopwords": ["via"],
            "min_sentence_tokens": 4,
            "strict": true
        }"#;
        let cfg = SummarizerSpec::from_json(json)
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(cfg.scoring, ScoringStrategy::WholeSentence);
        assert_eq!(
            cfg.threshold_policy,
            ThresholdPolicy::MaxFraction { fraction: 0.25 }
        );
        assert_eq!(cfg.summary_length, 5);
        assert_eq!(cfg.max_gap, 2);
        assert_eq!(cfg.order, SummaryOrder::Document);
        assert_eq!(cfg.language, "de");
        assert_eq!(cfg.stopwords, vec!["via"]);
        assert_eq!(cfg.min_sentence_tokens, 4);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{ "v": 1, "bogus": 42, "another": "x" }"#;
        let spec = SummarizerSpec::from_json(json).unwrap();
        assert_eq!(spec.unknown_field_names(), vec!["another", "bogus"]);

        // Lenient mode: accepted
        assert!(spec.into_config().is_ok());
    }

    #[test]
    fn test_strict_rejects_unknown_fields() {
        let json = r#"{ "v": 1, "strict": true, "bogus": 42 }"#;
        let err = SummarizerSpec::from_json(json)
            .unwrap()
            .into_config()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpec);
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_wrong_version() {
        let err = SummarizerSpec::from_json(r#"{ "v": 2 }"#)
            .unwrap()
            .into_config()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpec);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SummarizerSpec::from_json(r#"{ "v": 1, "summary_length": 0 }"#)
            .unwrap()
            .into_config()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);

        // Negative gap cannot even be parsed
        let err = SummarizerSpec::from_json(r#"{ "v": 1, "max_gap": -1 }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpec);
    }

    #[test]
    fn test_malformed_json() {
        let err = SummarizerSpec::from_json("{ not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpec);
    }

    #[test]
    fn test_try_from() {
        let spec = SummarizerSpec {
            v: 1,
            summary_length: Some(2),
            ..Default::default()
        };
        let cfg = LuhnConfig::try_from(spec).unwrap();
        assert_eq!(cfg.summary_length, 2);
    }
}
