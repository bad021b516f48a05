//! Model client stubs.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ModelError;
use crate::model::ModelClient;

/// Returns the same text for every prompt.
#[derive(Debug)]
pub struct FixedModelClient {
    response: String,
    call_count: AtomicUsize,
}

impl FixedModelClient {
    /// Creates a client that always answers `response`.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Returns the number of calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelClient for FixedModelClient {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Returns each prompt unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoModelClient;

#[async_trait]
impl ModelClient for EchoModelClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        Ok(prompt.to_string())
    }
}

/// Records every prompt and replays queued replies.
///
/// Once the queue is empty the client echoes the prompt back. A failure can
/// be scheduled for the n-th call (zero-based).
#[derive(Debug, Default)]
pub struct ScriptedModelClient {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    fail_on_call: Option<(usize, String)>,
}

impl ScriptedModelClient {
    /// Creates a client that replays `replies` in order.
    #[must_use]
    pub fn new(replies: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
            fail_on_call: None,
        }
    }

    /// Fails the call with index `call` with `message`.
    #[must_use]
    pub fn failing_on(mut self, call: usize, message: impl Into<String>) -> Self {
        self.fail_on_call = Some((call, message.into()));
        self
    }

    /// Returns every prompt received, in order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Returns the number of calls made, including a failed one.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let call = {
            let mut prompts = self.prompts.lock();
            prompts.push(prompt.to_string());
            prompts.len() - 1
        };

        if let Some((fail_at, message)) = &self.fail_on_call {
            if *fail_at == call {
                return Err(ModelError::other(message.clone()));
            }
        }

        Ok(self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| prompt.to_string()))
    }
}
