//! Throughput productivity calculation.
//!
//! This module converts role staffing and task-execution parameters into a
//! productivity ratio and its financial and time consequences. Clicks per
//! minute come from an empirical heuristic that blends the log of the inverse
//! page time with an experience-scaled theoretical maximum.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ExperienceLevel, ThroughputInput, ThroughputResult};

use super::constants::{SECONDS_PER_MINUTE, THROUGHPUT_WINDOW_MINUTES, VALUE_MULTIPLIER};
use super::ensure_finite;
use super::page_time::is_valid_page_time;

/// Returns the share of the theoretical click rate an employee achieves.
///
/// | Level    | Multiplier |
/// |----------|------------|
/// | Beginner | 0.15       |
/// | Seasoned | 0.20       |
/// | Expert   | 0.25       |
pub fn expertise_multiplier(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Beginner => 0.15,
        ExperienceLevel::Seasoned => 0.20,
        ExperienceLevel::Expert => 0.25,
    }
}

/// Returns the heuristic clicks per minute for a page time and experience level.
///
/// `ln(1 / ept) + (60 / ept) * multiplier`
///
/// # Examples
///
/// ```
/// use productivity_impact::calculation::clicks_per_minute;
/// use productivity_impact::models::ExperienceLevel;
///
/// let cpm = clicks_per_minute(2.4, ExperienceLevel::Seasoned);
/// assert!((cpm - 4.1245).abs() < 1e-4);
/// ```
pub fn clicks_per_minute(expected_page_time_seconds: f64, experience: ExperienceLevel) -> f64 {
    let theoretical_max_per_minute = SECONDS_PER_MINUTE / expected_page_time_seconds;
    let x = theoretical_max_per_minute * expertise_multiplier(experience);
    (1.0 / expected_page_time_seconds).ln() + x
}

/// Checks a throughput input against its declared domain.
///
/// # Errors
///
/// - [`EngineError::DivisionDegenerate`] when `expected_tasks_per_day` is zero.
/// - [`EngineError::InvalidInput`] for any other out-of-domain field.
pub fn validate_throughput_input(input: &ThroughputInput) -> EngineResult<()> {
    if !input.annual_cost.is_finite() || input.annual_cost < 0.0 {
        return Err(EngineError::invalid_input(
            "annual_cost",
            format!("must be a non-negative number, got {}", input.annual_cost),
        ));
    }

    if input.employees == 0 {
        return Err(EngineError::invalid_input(
            "employees",
            "must be greater than zero",
        ));
    }

    if input.expected_tasks_per_day == 0 {
        return Err(EngineError::division_degenerate(
            "expected_tasks_per_day",
            "productivity is undefined when zero tasks are expected",
        ));
    }

    if input.clicks_per_task == 0 {
        return Err(EngineError::invalid_input(
            "clicks_per_task",
            "must be greater than zero",
        ));
    }

    if !is_valid_page_time(input.expected_page_time_seconds) {
        return Err(EngineError::invalid_input(
            "expected_page_time_seconds",
            format!(
                "must be one of 0.3 to 4.0 in 0.1 steps, got {}",
                input.expected_page_time_seconds
            ),
        ));
    }

    if !input.hours_per_day.is_finite() || input.hours_per_day <= 0.0 {
        return Err(EngineError::invalid_input(
            "hours_per_day",
            format!("must be greater than zero, got {}", input.hours_per_day),
        ));
    }

    Ok(())
}

/// Computes throughput productivity metrics for one role.
///
/// Both the value-based and the hours-based figures are always computed;
/// `is_hours_mode` only tells the presentation which to emphasise.
///
/// # Arguments
///
/// * `input` - The role parameters
///
/// # Errors
///
/// Returns an error from [`validate_throughput_input`] before any
/// computation when the input is out of domain, or
/// [`EngineError::InvalidInput`] naming `annual_cost` or `hours_per_day`
/// when a value is too large for the derived figures to stay finite.
///
/// # Examples
///
/// ```
/// use productivity_impact::calculation::compute_throughput;
/// use productivity_impact::models::{ExperienceLevel, ThroughputInput};
///
/// let result = compute_throughput(ThroughputInput {
///     role: "Service Agent".to_string(),
///     annual_cost: 45000.0,
///     employees: 1000,
///     expected_tasks_per_day: 80,
///     clicks_per_task: 30,
///     expected_page_time_seconds: 2.4,
///     experience: ExperienceLevel::Seasoned,
///     is_hours_mode: false,
///     is_full_time: true,
///     hours_per_day: 8.0,
/// })
/// .unwrap();
///
/// assert_eq!(result.max_clicks_per_day, 1484);
/// assert_eq!(result.actual_tasks_per_day, 49);
/// assert!((result.productivity_percent - 61.25).abs() < 1e-9);
/// ```
pub fn compute_throughput(input: ThroughputInput) -> EngineResult<ThroughputResult> {
    validate_throughput_input(&input)?;

    let clicks_per_minute = clicks_per_minute(input.expected_page_time_seconds, input.experience);

    // Clamp only guards the integer conversion; every valid EPT yields a positive rate.
    let max_clicks = (clicks_per_minute * THROUGHPUT_WINDOW_MINUTES).floor().max(0.0);
    let actual_tasks = (max_clicks / f64::from(input.clicks_per_task)).floor();
    let productivity_percent = (actual_tasks / f64::from(input.expected_tasks_per_day)) * 100.0;
    let productivity_ratio = productivity_percent / 100.0;

    let working_days_per_year = input.calendar().working_days_per_year();
    let working_days = f64::from(working_days_per_year);

    let expected_value = input.annual_cost * VALUE_MULTIPLIER;
    let value_produced = productivity_ratio * expected_value;
    let true_cost = value_produced - expected_value;
    let total_role_value = true_cost * f64::from(input.employees);

    let actual_hours_per_day = productivity_ratio * input.hours_per_day;
    let hours_difference = actual_hours_per_day - input.hours_per_day;
    let annual_hours_difference = hours_difference * working_days;
    let expected_annual_hours = input.hours_per_day * working_days;
    let actual_annual_hours = actual_hours_per_day * working_days;

    ensure_finite(
        "annual_cost",
        &[expected_value, value_produced, true_cost, total_role_value],
    )?;
    ensure_finite(
        "hours_per_day",
        &[
            hours_difference,
            annual_hours_difference,
            expected_annual_hours,
            actual_annual_hours,
        ],
    )?;

    debug!(
        role = %input.role,
        clicks_per_minute,
        max_clicks_per_day = max_clicks,
        actual_tasks_per_day = actual_tasks,
        productivity_percent,
        true_cost,
        "Throughput calculated"
    );

    Ok(ThroughputResult {
        clicks_per_minute,
        max_clicks_per_day: max_clicks as u64,
        actual_tasks_per_day: actual_tasks as u64,
        productivity_percent,
        expected_value,
        value_produced,
        true_cost,
        total_role_value,
        hours_difference,
        annual_hours_difference,
        working_days_per_year,
        expected_annual_hours,
        actual_annual_hours,
        standard_annual_hours: input.calendar().standard_annual_hours(),
        input,
    })
}
