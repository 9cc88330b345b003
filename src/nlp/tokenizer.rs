//! Sentence segmentation and word tokenization
//!
//! The summarizer only depends on the [`SentenceSegmenter`] contract. The
//! default [`UnicodeSegmenter`] uses UAX #29 sentence and word boundaries
//! from `unicode-segmentation`, then re-joins boundaries that fall right
//! after a common abbreviation or a single-letter initial.

use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

/// A sentence located in the source text (byte offsets, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

impl SentenceSpan {
    /// Slice the sentence out of the text it was segmented from
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Front end that turns raw text into sentences and normalized words.
///
/// # Contract
///
/// - `segment_sentences` returns non-overlapping spans in document order;
///   each span must lie on `char` boundaries of `text`.
/// - `tokenize_words` returns lowercased word tokens with punctuation
///   stripped, in reading order.
pub trait SentenceSegmenter {
    /// Split text into ordered sentence spans
    fn segment_sentences(&self, text: &str) -> Vec<SentenceSpan>;

    /// Split a sentence (or any text) into normalized word tokens
    fn tokenize_words(&self, text: &str) -> Vec<String>;
}

impl<T: SentenceSegmenter + ?Sized> SentenceSegmenter for &T {
    fn segment_sentences(&self, text: &str) -> Vec<SentenceSpan> {
        (**self).segment_sentences(text)
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        (**self).tokenize_words(text)
    }
}

/// Abbreviations after which a period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "e.g", "i.e", "inc", "ltd",
    "corp", "fig", "approx", "dept", "gov", "jan", "feb", "apr", "jun", "jul", "aug", "sept",
    "oct", "nov", "u.s", "u.k", "a.m", "p.m",
];

/// Unicode-aware default segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Does this raw sentence chunk end in an abbreviation or an initial?
    fn ends_with_abbreviation(chunk: &str) -> bool {
        let trimmed = chunk.trim_end();
        let Some(body) = trimmed.strip_suffix('.') else {
            return false;
        };
        let words: Vec<&str> = body
            .split(|c: char| c.is_whitespace() || c == '(' || c == '"')
            .filter(|w| !w.is_empty())
            .collect();
        let Some((&last, before)) = words.split_last() else {
            return false;
        };

        if is_initial(last) {
            // "J. Smith" opens the chunk and "J. R." follows another initial;
            // "plan A." ends a clause.
            return match before.last() {
                None => true,
                Some(prev) => prev.strip_suffix('.').is_some_and(is_initial),
            };
        }

        let lower = last.to_lowercase();
        ABBREVIATIONS.contains(&lower.as_str())
    }
}

impl SentenceSegmenter for UnicodeSegmenter {
    fn segment_sentences(&self, text: &str) -> Vec<SentenceSpan> {
        let mut spans = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, chunk) in text.split_sentence_bound_indices() {
            let start = pending.unwrap_or(offset);
            let end = offset + chunk.len();
            if Self::ends_with_abbreviation(chunk) {
                pending = Some(start);
                continue;
            }
            pending = None;
            push_trimmed(text, start, end, &mut spans);
        }

        if let Some(start) = pending {
            push_trimmed(text, start, text.len(), &mut spans);
        }

        spans
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .map(|w| w.to_lowercase())
            .collect()
    }
}

/// A single uppercase letter other than the pronoun "I"
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}

/// Record `text[start..end]` with surrounding whitespace removed, skipping
/// whitespace-only chunks.
fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let s = start + leading;
    spans.push(SentenceSpan {
        start: s,
        end: s + trimmed.len(),
    });
}

/// Segment and tokenize a whole document.
///
/// Sentences without any word token (e.g. a lone "...") are dropped and the
/// remaining sentences are indexed consecutively from 0.
pub fn tokenize_document<S: SentenceSegmenter + ?Sized>(segmenter: &S, text: &str) -> Vec<Sentence> {
    segmenter
        .segment_sentences(text)
        .into_iter()
        .filter_map(|span| {
            let slice = span.slice(text);
            let tokens = segmenter.tokenize_words(slice);
            (!tokens.is_empty()).then(|| (span, slice, tokens))
        })
        .enumerate()
        .map(|(index, (span, slice, tokens))| {
            Sentence::new(slice, span.start, span.end, index, tokens)
        })
        .collect()
}
