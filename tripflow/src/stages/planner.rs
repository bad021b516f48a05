//! Planner stage: drafts a travel plan from the trip request.

use super::Stage;
use crate::core::StageKind;
use async_trait::async_trait;

/// Turns the trip request text into a first travel plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerStage;

#[async_trait]
impl Stage for PlannerStage {
    fn kind(&self) -> StageKind {
        StageKind::Planner
    }

    fn build_prompt(&self, input: &str) -> String {
        format!("\nYou are a travel planner AI.\nCreate a detailed travel plan.\n\n{input}\n  ")
    }
}
