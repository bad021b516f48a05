//! Stage kind enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four stages of the holiday pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Drafts a travel plan from the trip request.
    Planner,
    /// Enriches the plan with attractions and tips.
    Research,
    /// Optimises the plan for the requested budget.
    Budget,
    /// Rewrites the plan as a day-by-day itinerary.
    Writer,
}

impl StageKind {
    /// All stages in the order the pipeline runs them.
    pub const ORDER: [Self; 4] = [Self::Planner, Self::Research, Self::Budget, Self::Writer];

    /// Returns the stage name used in events and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planner => "planner",
            Self::Research => "research",
            Self::Budget => "budget",
            Self::Writer => "writer",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
