//! Core data models for the Productivity Impact Engine.
//!
//! This module contains the value objects passed into and returned from
//! the two calculation engines.

mod calendar;
mod error_impact;
mod experience;
mod throughput;

pub use calendar::{STANDARD_HOURS_PER_DAY, WorkCalendar};
pub use error_impact::{ErrorImpactInput, ErrorImpactResult};
pub use experience::ExperienceLevel;
pub use throughput::{ThroughputInput, ThroughputResult};

fn default_true() -> bool {
    true
}
