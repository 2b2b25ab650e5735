//! Error impact calculation.
//!
//! This module converts an interface's error rate and staffing into the
//! productivity lost to error-recovery distraction, and the wage-equivalent
//! cost of that loss.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ErrorImpactInput, ErrorImpactResult, ExperienceLevel};

use super::constants::{
    MAX_INTERFACE_NAME_LEN, MAX_WEEKLY_ERRORS, MINUTES_PER_HOUR, VALUE_MULTIPLIER, WEEKS_PER_YEAR,
};
use super::ensure_finite;

/// Returns the minutes a user needs to recover from one error.
///
/// | Level    | Minutes |
/// |----------|---------|
/// | Expert   | 15      |
/// | Seasoned | 18      |
/// | Beginner | 23      |
pub fn distraction_minutes(experience: ExperienceLevel) -> u32 {
    match experience {
        ExperienceLevel::Expert => 15,
        ExperienceLevel::Seasoned => 18,
        ExperienceLevel::Beginner => 23,
    }
}

/// Checks an error impact input against its declared domain.
///
/// # Errors
///
/// - [`EngineError::DivisionDegenerate`] when `daily_hours` is zero.
/// - [`EngineError::InvalidInput`] for any other out-of-domain field.
pub fn validate_error_impact_input(input: &ErrorImpactInput) -> EngineResult<()> {
    let name_len = input.interface_name.chars().count();
    if name_len > MAX_INTERFACE_NAME_LEN {
        return Err(EngineError::invalid_input(
            "interface_name",
            format!(
                "must be at most {} characters, got {}",
                MAX_INTERFACE_NAME_LEN, name_len
            ),
        ));
    }

    if !input.annual_wage_8hr_basis.is_finite() || input.annual_wage_8hr_basis < 0.0 {
        return Err(EngineError::invalid_input(
            "annual_wage_8hr_basis",
            format!(
                "must be a non-negative number, got {}",
                input.annual_wage_8hr_basis
            ),
        ));
    }

    if !input.daily_hours.is_finite() || input.daily_hours < 0.0 {
        return Err(EngineError::invalid_input(
            "daily_hours",
            format!("must be greater than zero, got {}", input.daily_hours),
        ));
    }

    if input.daily_hours == 0.0 {
        return Err(EngineError::division_degenerate(
            "daily_hours",
            "annual work hours would be zero",
        ));
    }

    if input.weekly_errors_all_users > MAX_WEEKLY_ERRORS {
        return Err(EngineError::invalid_input(
            "weekly_errors_all_users",
            format!(
                "must be between 0 and {}, got {}",
                MAX_WEEKLY_ERRORS, input.weekly_errors_all_users
            ),
        ));
    }

    if input.employees == 0 {
        return Err(EngineError::invalid_input(
            "employees",
            "must be greater than zero",
        ));
    }

    Ok(())
}

/// Computes error impact metrics for one interface.
///
/// # Arguments
///
/// * `input` - The interface parameters
///
/// # Errors
///
/// Returns an error from [`validate_error_impact_input`] before any
/// computation when the input is out of domain, or
/// [`EngineError::InvalidInput`] naming `daily_hours` or
/// `annual_wage_8hr_basis` when a value is too large for the derived
/// figures to stay finite.
///
/// # Examples
///
/// ```
/// use productivity_impact::calculation::compute_error_impact;
/// use productivity_impact::models::{ErrorImpactInput, ExperienceLevel};
///
/// let result = compute_error_impact(ErrorImpactInput {
///     interface_name: "Sales Console".to_string(),
///     experience: ExperienceLevel::Seasoned,
///     annual_wage_8hr_basis: 45000.0,
///     daily_hours: 7.0,
///     is_full_time: true,
///     is_hours_mode: false,
///     weekly_errors_all_users: 300,
///     employees: 1000,
/// })
/// .unwrap();
///
/// assert_eq!(result.annual_errors, 15600);
/// assert_eq!(result.distraction_time_per_error_minutes, 18);
/// assert_eq!(result.annual_work_hours, 1750.0);
/// assert_eq!(result.total_distraction_hours, 4680.0);
/// ```
pub fn compute_error_impact(input: ErrorImpactInput) -> EngineResult<ErrorImpactResult> {
    validate_error_impact_input(&input)?;

    let employees = f64::from(input.employees);
    let annual_errors = u64::from(input.weekly_errors_all_users) * WEEKS_PER_YEAR;
    let errors_per_user = annual_errors as f64 / employees;
    let distraction_time_per_error_minutes = distraction_minutes(input.experience);

    let working_days_per_year = input.calendar().working_days_per_year();
    let working_days = f64::from(working_days_per_year);
    let annual_work_hours = input.daily_hours * working_days;

    let total_distraction_hours =
        (annual_errors as f64 * f64::from(distraction_time_per_error_minutes)) / MINUTES_PER_HOUR;
    let daily_distraction_hours_per_user = (total_distraction_hours / employees) / working_days;
    let distraction_hours_per_user = total_distraction_hours / employees;

    let net_productive_hours = annual_work_hours - distraction_hours_per_user;
    let productivity_loss_percent = (distraction_hours_per_user / annual_work_hours) * 100.0;
    let max_achievable_productivity_percent = 100.0 - productivity_loss_percent;
    let retained_ratio = max_achievable_productivity_percent / 100.0;

    let wage = input.annual_wage_8hr_basis;
    let true_labor_cost = wage * retained_ratio - wage;
    let errors_per_day = errors_per_user / working_days;

    let expected_annual_value = wage * VALUE_MULTIPLIER;
    let net_annual_value = expected_annual_value * retained_ratio;
    let annual_value_impact = net_annual_value - expected_annual_value;

    ensure_finite(
        "daily_hours",
        &[annual_work_hours, net_productive_hours, productivity_loss_percent],
    )?;
    ensure_finite(
        "annual_wage_8hr_basis",
        &[
            true_labor_cost,
            expected_annual_value,
            net_annual_value,
            annual_value_impact,
        ],
    )?;

    debug!(
        interface = %input.display_name(),
        annual_errors,
        distraction_hours_per_user,
        productivity_loss_percent,
        true_labor_cost,
        "Error impact calculated"
    );

    Ok(ErrorImpactResult {
        annual_errors,
        errors_per_user,
        errors_per_day,
        distraction_time_per_error_minutes,
        working_days_per_year,
        annual_work_hours,
        total_distraction_hours,
        distraction_hours_per_user,
        daily_distraction_hours_per_user,
        net_productive_hours,
        productivity_loss_percent,
        max_achievable_productivity_percent,
        true_labor_cost,
        error_impact_hours: -distraction_hours_per_user,
        expected_annual_value,
        net_annual_value,
        annual_value_impact,
        standard_annual_hours: input.calendar().standard_annual_hours(),
        input,
    })
}
