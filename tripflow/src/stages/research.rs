//! Research stage: enriches the plan with attractions and tips.

use super::Stage;
use crate::core::StageKind;
use async_trait::async_trait;

/// Adds attractions and practical tips to a draft plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResearchStage;

#[async_trait]
impl Stage for ResearchStage {
    fn kind(&self) -> StageKind {
        StageKind::Research
    }

    fn build_prompt(&self, plan: &str) -> String {
        format!("\nEnhance this travel plan with attractions and tips:\n\n{plan}\n  ")
    }
}
