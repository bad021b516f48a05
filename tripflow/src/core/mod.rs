//! Core domain model types for tripflow.
//!
//! This module contains the fundamental types used throughout the crate:
//! - The trip request consumed by the pipeline
//! - Stage kinds and their fixed ordering
//! - Stage outputs and the final itinerary
//! - Number rendering for prompt text
//! - Run identity for correlating events

mod identity;
mod number;
mod output;
mod request;
mod status;

pub use identity::RunId;
pub use number::PromptNumber;
pub use output::{Itinerary, StageOutput};
pub use request::TripRequest;
pub use status::StageKind;
