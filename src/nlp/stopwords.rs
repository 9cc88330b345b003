//! Stopword filtering
//!
//! Built-in lists come from the `stop-words` crate. Loading a list is a
//! process-wide, once-per-language operation: [`StopwordFilter::shared`]
//! caches each list on first use and hands out read-only `Arc`s afterwards.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Arc, Mutex};
use stop_words::{get, LANGUAGE};

/// Built-in lists loaded so far, keyed by canonical language code.
static SHARED: Lazy<Mutex<FxHashMap<&'static str, Arc<StopwordFilter>>>> =
    Lazy::new(|| Mutex::new(FxHashMap::default()));

/// A set of words excluded from frequency analysis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let (_, lang) = resolve_language(language);
        Self {
            stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Shared, lazily loaded built-in list for `language`.
    ///
    /// The first call for a language loads the list; later calls return the
    /// same allocation. The returned filter is never mutated.
    pub fn shared(language: &str) -> Arc<StopwordFilter> {
        let (code, _) = resolve_language(language);
        // A poisoned lock only means another thread panicked mid-insert; the
        // map itself still holds complete entries.
        let mut cache = SHARED.lock().unwrap_or_else(|e| e.into_inner());
        cache
            .entry(code)
            .or_insert_with(|| {
                #[cfg(feature = "tracing")]
                tracing::debug!(language = code, "loading built-in stopword list");
                Arc::new(StopwordFilter::new(code))
            })
            .clone()
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Map a user-supplied language name to a canonical code and crate language.
fn resolve_language(language: &str) -> (&'static str, LANGUAGE) {
    match language.to_lowercase().as_str() {
        "de" | "german" => ("de", LANGUAGE::German),
        "fr" | "french" => ("fr", LANGUAGE::French),
        "es" | "spanish" => ("es", LANGUAGE::Spanish),
        "it" | "italian" => ("it", LANGUAGE::Italian),
        "pt" | "portuguese" => ("pt", LANGUAGE::Portuguese),
        "nl" | "dutch" => ("nl", LANGUAGE::Dutch),
        "ru" | "russian" => ("ru", LANGUAGE::Russian),
        "sv" | "swedish" => ("sv", LANGUAGE::Swedish),
        "no" | "norwegian" => ("no", LANGUAGE::Norwegian),
        "da" | "danish" => ("da", LANGUAGE::Danish),
        "fi" | "finnish" => ("fi", LANGUAGE::Finnish),
        "hu" | "hungarian" => ("hu", LANGUAGE::Hungarian),
        "tr" | "turkish" => ("tr", LANGUAGE::Turkish),
        "pl" | "polish" => ("pl", LANGUAGE::Polish),
        _ => ("en", LANGUAGE::English),
    }
}
