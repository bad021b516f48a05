//! Configuration for the HTTP server and the model client.
//!
//! Values come from an optional TOML file; environment variables and CLI
//! flags are applied on top by the binary.

use crate::errors::{ModelError, TripflowError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`ServerConfig::bind`].
pub const BIND_ENV: &str = "TRIPFLOW_BIND";

/// Environment variable overriding [`ModelConfig::model`].
pub const MODEL_ENV: &str = "TRIPFLOW_MODEL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripflowConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Model client settings.
    #[serde(default)]
    pub model: ModelConfig,
}

impl TripflowConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, TripflowError> {
        toml::from_str(text).map_err(|e| TripflowError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TripflowError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies `TRIPFLOW_BIND` and `TRIPFLOW_MODEL` when they are set.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(BIND_ENV).ok(),
            std::env::var(MODEL_ENV).ok(),
        )
    }

    /// Replaces the bind address and model id when values are given.
    #[must_use]
    pub fn with_overrides(mut self, bind: Option<String>, model: Option<String>) -> Self {
        if let Some(bind) = bind.filter(|b| !b.is_empty()) {
            self.server.bind = bind;
        }
        if let Some(model) = model.filter(|m| !m.is_empty()) {
            self.model.model = model;
        }
        self
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Whether to allow cross-origin requests from any origin.
    #[serde(default = "default_cors")]
    pub cors: bool,
    /// Whether to emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors: default_cors(),
            log_json: false,
        }
    }
}

/// Model client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier, e.g. `gemini-1.5-flash`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the generative language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Optional cap on generated tokens per call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            max_output_tokens: None,
        }
    }
}

impl ModelConfig {
    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String, ModelError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ModelError::MissingApiKey(self.api_key_env.clone()))
    }
}
