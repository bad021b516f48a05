//! The four-stage holiday pipeline.

use crate::core::{Itinerary, RunId, StageKind, StageOutput, TripRequest};
use crate::errors::TripflowError;
use crate::events::{types, EventSink, NoOpEventSink};
use crate::model::ModelClient;
use crate::observability::SpanTimer;
use crate::stages::{BudgetStage, PlannerStage, ResearchStage, Stage, WriterStage};
use std::fmt;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};

/// Sequences the four stages against one shared model client.
///
/// Every call to [`run`](Self::run) is independent. The only state held
/// here is the read-only client handle and the event sink, so a pipeline
/// can be cloned freely and shared across requests.
#[derive(Clone)]
pub struct HolidayPipeline {
    client: Arc<dyn ModelClient>,
    event_sink: Arc<dyn EventSink>,
}

impl fmt::Debug for HolidayPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayPipeline")
            .field("stages", &StageKind::ORDER)
            .finish_non_exhaustive()
    }
}

impl HolidayPipeline {
    /// Creates a pipeline that calls `client` for every stage.
    #[must_use]
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            event_sink: Arc::new(NoOpEventSink),
        }
    }

    /// Sets the event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    /// Returns the stage names in execution order.
    #[must_use]
    pub fn stage_names() -> [&'static str; 4] {
        StageKind::ORDER.map(StageKind::as_str)
    }

    /// Runs all four stages for `request` and returns the writer's text.
    ///
    /// Stages run strictly one at a time. If a model call fails the error
    /// is returned immediately, tagged with the failing stage, and no
    /// later stage is invoked.
    pub async fn run(&self, request: &TripRequest) -> Result<Itinerary, TripflowError> {
        let run_id = RunId::new();
        let span = info_span!("pipeline", run_id = %run_id);

        async move {
            info!(destination = %request.destination, days = request.days, "Pipeline started");
            let timer = SpanTimer::start("pipeline");

            let result = self.run_stages(run_id, request).await;
            let duration_ms = timer.finish();

            match &result {
                Ok(itinerary) => {
                    info!(duration_ms, "Pipeline completed");
                    self.event_sink
                        .emit(
                            types::PIPELINE_COMPLETED,
                            Some(serde_json::json!({
                                "run_id": run_id,
                                "duration_ms": duration_ms,
                                "itinerary_chars": itinerary.as_str().chars().count(),
                            })),
                        )
                        .await;
                }
                Err(err) => {
                    warn!(duration_ms, error = %err, "Pipeline failed");
                    self.event_sink
                        .emit(
                            types::PIPELINE_FAILED,
                            Some(serde_json::json!({
                                "run_id": run_id,
                                "duration_ms": duration_ms,
                                "stage": err.failed_stage(),
                                "error": err.to_string(),
                            })),
                        )
                        .await;
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn run_stages(
        &self,
        run_id: RunId,
        request: &TripRequest,
    ) -> Result<Itinerary, TripflowError> {
        let plan = self
            .run_stage(run_id, &PlannerStage, &request.to_prompt())
            .await?;
        let research = self.run_stage(run_id, &ResearchStage, plan.text()).await?;
        let optimized = self
            .run_stage(run_id, &BudgetStage::new(request.budget), research.text())
            .await?;
        let itinerary = self.run_stage(run_id, &WriterStage, optimized.text()).await?;

        Ok(itinerary.into())
    }

    async fn run_stage(
        &self,
        run_id: RunId,
        stage: &dyn Stage,
        input: &str,
    ) -> Result<StageOutput, TripflowError> {
        let name = stage.name();
        self.event_sink
            .emit(
                types::STAGE_STARTED,
                Some(serde_json::json!({
                    "run_id": run_id,
                    "stage": name,
                    "input_chars": input.chars().count(),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            )
            .await;

        let timer = SpanTimer::start(name);
        match stage.execute(self.client.as_ref(), input).await {
            Ok(output) => {
                let duration_ms = timer.finish();
                info!(stage = name, duration_ms, "Stage completed");
                self.event_sink
                    .emit(
                        types::STAGE_COMPLETED,
                        Some(serde_json::json!({
                            "run_id": run_id,
                            "stage": name,
                            "duration_ms": duration_ms,
                            "output_chars": output.char_count(),
                        })),
                    )
                    .await;
                Ok(output)
            }
            Err(err) => {
                let duration_ms = timer.finish();
                warn!(stage = name, duration_ms, error = %err, "Stage failed");
                self.event_sink
                    .emit(
                        types::STAGE_FAILED,
                        Some(serde_json::json!({
                            "run_id": run_id,
                            "stage": name,
                            "duration_ms": duration_ms,
                            "error": err.to_string(),
                        })),
                    )
                    .await;
                Err(TripflowError::stage(stage.kind(), err))
            }
        }
    }
}
