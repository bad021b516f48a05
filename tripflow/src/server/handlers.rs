//! Request handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::error::ApiError;
use super::AppState;
use crate::core::{Itinerary, TripRequest};

/// Response body for `POST /api/holiday`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayResponse {
    /// The generated itinerary.
    pub itinerary: Itinerary,
}

/// Runs the pipeline for the posted trip and returns the itinerary.
pub async fn plan_holiday(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<HolidayResponse>, ApiError> {
    debug!(destination = %request.destination, "plan_holiday: called");
    let itinerary = state.pipeline.run(&request).await?;
    Ok(Json(HolidayResponse { itinerary }))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
