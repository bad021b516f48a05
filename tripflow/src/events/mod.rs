//! Pipeline lifecycle events.
//!
//! The pipeline reports stage starts, completions and failures through an
//! [`EventSink`]. Event payloads carry run ids, stage names, timings and
//! character counts. Generated text is never included.

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};

/// Event type names emitted by the pipeline.
pub mod types {
    /// A stage is about to call the model.
    pub const STAGE_STARTED: &str = "stage.started";
    /// A stage's model call returned text.
    pub const STAGE_COMPLETED: &str = "stage.completed";
    /// A stage's model call failed.
    pub const STAGE_FAILED: &str = "stage.failed";
    /// All four stages completed.
    pub const PIPELINE_COMPLETED: &str = "pipeline.completed";
    /// The pipeline stopped at a failed stage.
    pub const PIPELINE_FAILED: &str = "pipeline.failed";
}
