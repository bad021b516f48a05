//! Stage output and itinerary types.

use super::StageKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The text produced by one stage.
///
/// `StageOutput` is immutable once created. The pipeline moves it into the
/// next stage, which reads the text as its sole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutput {
    /// The stage that produced this text.
    pub stage: StageKind,
    text: String,
}

impl StageOutput {
    /// Wraps the raw model text produced by `stage`.
    #[must_use]
    pub fn new(stage: StageKind, text: impl Into<String>) -> Self {
        Self {
            stage,
            text: text.into(),
        }
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the output and returns the text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns the text length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for StageOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The final text returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itinerary(String);

impl Itinerary {
    /// Returns the itinerary text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the itinerary and returns the text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<StageOutput> for Itinerary {
    fn from(output: StageOutput) -> Self {
        Self(output.into_text())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
