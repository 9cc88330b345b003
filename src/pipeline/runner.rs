//! Pipeline runner - orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed segmenter and scorer.
//! Calling [`Pipeline::run`] executes the stages in order, threading
//! artifacts between them and notifying a [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Segment sentences and tokenize words
//! 2. Count words and derive significant words
//! 3. Score sentences
//! 4. Select the top sentences and join them

use crate::errors::{LuhnError, Result};
use crate::frequency::FrequencyAnalyzer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{tokenize_document, SentenceSegmenter, UnicodeSegmenter};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_FREQUENCY, STAGE_SCORE, STAGE_SEGMENT,
    STAGE_SELECT,
};
use crate::scoring::cluster::ClusterScorer;
use crate::scoring::whole_sentence::WholeSentenceScorer;
use crate::scoring::{score_sentences, SentenceScorer};
use crate::summarizer::selector::{SelectorConfig, SentenceSelector};
use crate::summarizer::Summary;
use crate::types::LuhnConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). The span stays entered until the end of the enclosing block.
/// When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline - statically-composed stage container
// ============================================================================

/// A pipeline composed of a concrete segmenter and scorer.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Seg` | [`SentenceSegmenter`] | [`UnicodeSegmenter`] |
/// | `Sc`  | [`SentenceScorer`] | [`ClusterScorer`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Seg = UnicodeSegmenter, Sc = ClusterScorer> {
    pub segmenter: Seg,
    pub scorer: Sc,
}

/// Default pipeline: Unicode segmentation with gap-bounded clusters.
pub type ClusteredPipeline = Pipeline<UnicodeSegmenter, ClusterScorer>;

/// Unicode segmentation with whole-sentence scoring.
pub type WholeSentencePipeline = Pipeline<UnicodeSegmenter, WholeSentenceScorer>;

impl ClusteredPipeline {
    /// Build the clustered pipeline with the given cluster gap.
    pub fn clustered(max_gap: usize) -> Self {
        Pipeline {
            segmenter: UnicodeSegmenter,
            scorer: ClusterScorer::new(max_gap),
        }
    }
}

impl WholeSentencePipeline {
    /// Build the pipeline that scores whole sentences without clustering.
    pub fn whole_sentence() -> Self {
        Pipeline {
            segmenter: UnicodeSegmenter,
            scorer: WholeSentenceScorer,
        }
    }
}

impl<Seg, Sc> Pipeline<Seg, Sc> {
    pub fn new(segmenter: Seg, scorer: Sc) -> Self {
        Self { segmenter, scorer }
    }
}

// ============================================================================
// Pipeline::run - execute stages in order
// ============================================================================

impl<Seg, Sc> Pipeline<Seg, Sc>
where
    Seg: SentenceSegmenter,
    Sc: SentenceScorer,
{
    /// Execute the pipeline, producing a [`Summary`].
    ///
    /// `cfg` is validated before any stage runs. The scorer is used as
    /// given; `cfg.scoring` and `cfg.max_gap` only matter to callers that
    /// build the scorer from the config (see
    /// [`LuhnSummarizer`](crate::summarizer::luhn::LuhnSummarizer)).
    pub fn run(
        &self,
        text: &str,
        cfg: &LuhnConfig,
        stopwords: &StopwordFilter,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        cfg.validate()?;

        // Each stage runs in its own block so its span closes before the
        // next one opens.

        // Stage 1: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = tokenize_document(&self.segmenter, text);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            sentences
        };
        if sentences.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(bytes = text.len(), "document has no sentences");
            return Err(LuhnError::EmptySentenceSet);
        }
        observer.on_sentences(&sentences);

        // Stage 2: Frequency analysis
        let analysis = {
            trace_stage!(STAGE_FREQUENCY);
            observer.on_stage_start(STAGE_FREQUENCY);
            let clock = StageClock::start();
            let analysis = FrequencyAnalyzer::new(cfg.threshold_policy).analyze(
                sentences
                    .iter()
                    .flat_map(|s| s.tokens.iter().map(String::as_str)),
                stopwords,
            );
            let mut report = StageReportBuilder::new(clock.elapsed());
            if let Ok(a) = &analysis {
                report = report.items(a.table.distinct());
            }
            observer.on_stage_end(STAGE_FREQUENCY, &report.build());
            analysis?
        };
        observer.on_frequencies(&analysis);

        // Stage 3: Score
        let scores = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scores = score_sentences(
                &self.scorer,
                &sentences,
                &analysis.significant,
                cfg.min_sentence_tokens,
            );
            let report = StageReportBuilder::new(clock.elapsed())
                .items(scores.len())
                .build();
            observer.on_stage_end(STAGE_SCORE, &report);
            scores
        };
        observer.on_scores(&scores);

        // Stage 4: Select
        let selection = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selector = SentenceSelector::with_config(SelectorConfig {
                num_sentences: cfg.summary_length,
                order: cfg.order,
            });
            let selection = selector.select(&sentences, &scores);
            let mut report = StageReportBuilder::new(clock.elapsed());
            if let Ok(s) = &selection {
                report = report.items(s.sentences.len());
            }
            observer.on_stage_end(STAGE_SELECT, &report.build());
            selection?
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            scorer = self.scorer.name(),
            sentences = sentences.len(),
            scored = scores.len(),
            selected = selection.sentences.len(),
            "summary built"
        );

        Ok(Summary {
            text: selection.text,
            sentences: selection.sentences,
            threshold: analysis.threshold,
            significant_words: analysis.significant_words(),
            scores,
            num_sentences: sentences.len(),
        })
    }
}
