//! Error types for tripflow.
//!
//! `ModelError` covers everything that can go wrong talking to the model
//! provider. `TripflowError` is the crate-wide error; a failed model call
//! reaches it wrapped with the stage that made the call.

use crate::core::StageKind;
use thiserror::Error;

/// Errors raised by a [`ModelClient`](crate::model::ModelClient).
#[derive(Debug, Error)]
pub enum ModelError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error message or raw body.
        message: String,
    },

    /// The provider answered but the reply carried no text.
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// No API key was found in the configured environment variable.
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(String),

    /// JSON serialization or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other provider-defined failure.
    #[error("{0}")]
    Other(String),
}

impl ModelError {
    /// Creates a provider-defined error from a message.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Returns the HTTP status for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The main error type for tripflow operations.
#[derive(Debug, Error)]
pub enum TripflowError {
    /// A stage's model call failed. No later stage ran.
    #[error("{stage} stage failed: {source}")]
    Stage {
        /// The stage whose call failed.
        stage: StageKind,
        /// The underlying model failure.
        #[source]
        source: ModelError,
    },

    /// Building the model client failed before any stage ran.
    #[error("Model client error: {0}")]
    Model(#[from] ModelError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TripflowError {
    /// Wraps a model failure with the stage that produced it.
    #[must_use]
    pub const fn stage(stage: StageKind, source: ModelError) -> Self {
        Self::Stage { stage, source }
    }

    /// Returns the failing stage, if the error came from one.
    #[must_use]
    pub const fn failed_stage(&self) -> Option<StageKind> {
        match self {
            Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
