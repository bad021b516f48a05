//! # Tripflow
//!
//! Turns trip-planning preferences into a day-by-day itinerary by running
//! them through four prompt stages against a hosted text-generation model.
//!
//! The pipeline is a fixed, strictly sequential chain:
//!
//! - **Planner**: drafts a travel plan from destination, days and interests
//! - **Research**: enriches the plan with attractions and tips
//! - **Budget**: optimises the enriched plan for the requested budget
//! - **Writer**: rewrites the result as a clean day-by-day itinerary
//!
//! Each stage's text output becomes the next stage's only input.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tripflow::prelude::*;
//!
//! let client: Arc<dyn ModelClient> = Arc::new(GeminiClient::from_config(&ModelConfig::default())?);
//! let pipeline = HolidayPipeline::new(client);
//!
//! let request = TripRequest::new("Paris", 3.0, "art, food", 1500.0);
//! let itinerary = pipeline.run(&request).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod model;
pub mod observability;
pub mod pipeline;
pub mod server;
pub mod stages;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ModelConfig, ServerConfig, TripflowConfig};
    pub use crate::core::{Itinerary, RunId, StageKind, StageOutput, TripRequest};
    pub use crate::errors::{ModelError, TripflowError};
    pub use crate::events::{EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::model::{GeminiClient, ModelClient};
    pub use crate::pipeline::HolidayPipeline;
    pub use crate::server::{router, AppState};
    pub use crate::stages::{BudgetStage, PlannerStage, ResearchStage, Stage, WriterStage};
}
