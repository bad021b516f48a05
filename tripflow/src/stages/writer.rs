//! Writer stage: rewrites the plan as a day-by-day itinerary.

use super::Stage;
use crate::core::StageKind;
use async_trait::async_trait;

/// Produces the final itinerary text.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterStage;

#[async_trait]
impl Stage for WriterStage {
    fn kind(&self) -> StageKind {
        StageKind::Writer
    }

    fn build_prompt(&self, plan: &str) -> String {
        format!("\nRewrite this as a clean, day-by-day itinerary:\n\n{plan}\n  ")
    }
}
