//! Calculation logic for the Productivity Impact Engine.
//!
//! This module contains the two independent engines: the throughput
//! productivity engine and the error impact engine. Each has a single pure
//! entry point that validates its input and returns a complete result.
//! Each engine owns its own experience lookup table.

mod constants;
mod error_impact;
mod page_time;
mod throughput;

pub use constants::{
    MAX_INTERFACE_NAME_LEN, MAX_WEEKLY_ERRORS, MINUTES_PER_HOUR, SECONDS_PER_MINUTE,
    THROUGHPUT_WINDOW_MINUTES, VALUE_MULTIPLIER, WEEKS_PER_YEAR,
};
pub use error_impact::{compute_error_impact, distraction_minutes, validate_error_impact_input};
pub use page_time::{
    MAX_PAGE_TIME_TENTHS, MIN_PAGE_TIME_TENTHS, expected_page_time_options, is_valid_page_time,
};
pub use throughput::{
    clicks_per_minute, compute_throughput, expertise_multiplier, validate_throughput_input,
};

use crate::error::{EngineError, EngineResult};

/// Fails with `InvalidInput` on `field` unless every derived value is finite.
///
/// Inputs are only bounded below, so a large enough finite input can still
/// overflow a product to infinity.
pub(crate) fn ensure_finite(field: &str, values: &[f64]) -> EngineResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    Err(EngineError::invalid_input(
        field,
        "too large for the derived figures to stay finite",
    ))
}
