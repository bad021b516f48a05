//! Model client capability.
//!
//! The pipeline needs exactly one thing from a text-generation provider:
//! turn a prompt into text. [`ModelClient`] is that seam; [`GeminiClient`]
//! is the production implementation.

mod gemini;

pub use gemini::GeminiClient;

use crate::errors::ModelError;
use async_trait::async_trait;

/// A handle to a generative-text API.
///
/// Implementations hold only read-only configuration (API key, model id)
/// and are shared across requests behind an `Arc`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends `prompt` to the model and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
