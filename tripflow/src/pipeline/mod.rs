//! Pipeline orchestration.
//!
//! [`HolidayPipeline`] runs Planner, Research, Budget and Writer one after
//! another, feeding each stage's text to the next.

mod holiday;
#[cfg(test)]
mod holiday_tests;

pub use holiday::HolidayPipeline;
