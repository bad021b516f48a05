//! Stage trait and the four pipeline stages.
//!
//! A stage is a fixed prompt template wrapped around its input, plus one
//! call to the model. The model's reply is returned untouched.

mod budget;
mod planner;
mod research;
mod writer;

pub use budget::BudgetStage;
pub use planner::PlannerStage;
pub use research::ResearchStage;
pub use writer::WriterStage;

use crate::core::{StageKind, StageOutput};
use crate::errors::ModelError;
use crate::model::ModelClient;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait for pipeline stages.
#[async_trait]
pub trait Stage: Send + Sync + Debug {
    /// Returns which of the four stages this is.
    fn kind(&self) -> StageKind;

    /// Returns the name of the stage.
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Builds the prompt sent to the model for `input`.
    fn build_prompt(&self, input: &str) -> String;

    /// Builds the prompt, sends it, and wraps the reply.
    ///
    /// Model failures are returned as-is.
    async fn execute(
        &self,
        client: &dyn ModelClient,
        input: &str,
    ) -> Result<StageOutput, ModelError> {
        let prompt = self.build_prompt(input);
        let text = client.generate(&prompt).await?;
        Ok(StageOutput::new(self.kind(), text))
    }
}
