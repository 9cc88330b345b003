//! Pipeline observer - hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages and capturing intermediate
//! artifacts (sentences, frequency table, per-sentence scores) for
//! debugging.

use std::time::{Duration, Instant};

use crate::frequency::FrequencyAnalysis;
use crate::scoring::SentenceScore;
use crate::types::Sentence;

/// Sentence segmentation and word tokenization.
pub const STAGE_SEGMENT: &str = "segment";
/// Frequency table and significance threshold.
pub const STAGE_FREQUENCY: &str = "frequency";
/// Per-sentence scoring.
pub const STAGE_SCORE: &str = "score";
/// Top-K selection and joining.
pub const STAGE_SELECT: &str = "select";

/// All stages in execution order.
pub const STAGES: [&str; 4] = [STAGE_SEGMENT, STAGE_FREQUENCY, STAGE_SCORE, STAGE_SELECT];

// ============================================================================
// StageClock / StageReport
// ============================================================================

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What happened in one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of items the stage produced (sentences, distinct words,
    /// scored sentences, selected sentences), when reported.
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Builder for reports that carry more than a duration
#[derive(Debug, Clone, Copy)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// PipelineObserver
// ============================================================================

/// Receives callbacks as the pipeline runs.
///
/// All methods have empty default implementations; override only what you
/// need. Artifact callbacks fire only when the stage succeeded.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_frequencies(&mut self, _analysis: &FrequencyAnalysis) {}

    fn on_scores(&mut self, _scores: &[SentenceScore]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records one [`StageReport`] per finished stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order stages finished
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn get(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, r)| r)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items(7)
            .build();
        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.items(), Some(7));
        assert_eq!(StageReport::new(Duration::ZERO).items(), None);
    }

    #[test]
    fn test_timing_observer_collects() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_start(STAGE_SEGMENT);
        obs.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_millis(2)));
        obs.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::from_millis(5)));

        assert_eq!(obs.reports().len(), 2);
        assert!(obs.get(STAGE_SCORE).is_some());
        assert!(obs.get(STAGE_SELECT).is_none());
        assert_eq!(obs.total(), Duration::from_millis(7));
    }

    #[test]
    fn test_clock_monotonic() {
        let clock = StageClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
