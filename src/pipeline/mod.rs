//! Pipeline specification and execution.
//!
//! ## Submodules
//!
//! - [`spec`] - Versioned JSON configuration
//! - [`runner`] - Stage orchestration and artifact threading
//! - [`observer`] - Timing and debug hooks at stage boundaries

pub mod observer;
pub mod runner;
pub mod spec;

// Re-export observer types.
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGES, STAGE_FREQUENCY, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT,
};

// Re-export runner types.
pub use runner::{ClusteredPipeline, Pipeline, WholeSentencePipeline};

pub use spec::{SummarizerSpec, SPEC_VERSION};
