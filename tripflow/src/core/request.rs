//! The user-supplied trip parameters.

use serde::{Deserialize, Serialize};

use super::PromptNumber;

/// Trip preferences submitted by the user.
///
/// All four fields must be present in the request body. Their values are
/// interpolated into prompts as given; no range checks are applied, so a
/// negative or fractional day count reaches the planner unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Where the trip goes.
    pub destination: String,
    /// Trip length in days.
    pub days: f64,
    /// Free-form interests, e.g. "art, food".
    pub interests: String,
    /// Total budget in dollars.
    pub budget: f64,
}

impl TripRequest {
    /// Creates a new trip request.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        days: f64,
        interests: impl Into<String>,
        budget: f64,
    ) -> Self {
        Self {
            destination: destination.into(),
            days,
            interests: interests.into(),
            budget,
        }
    }

    /// Builds the text handed to the planner stage.
    #[must_use]
    pub fn to_prompt(&self) -> String {
        format!(
            "\nDestination: {}\nDays: {}\nInterests: {}\n",
            self.destination,
            PromptNumber(self.days),
            self.interests
        )
    }
}
