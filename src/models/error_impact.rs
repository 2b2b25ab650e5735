//! Error impact input and result models.

use serde::{Deserialize, Serialize};

use super::{ExperienceLevel, WorkCalendar, default_true};

/// Parameters describing one interface for the error impact engine.
///
/// # Example
///
/// ```
/// use productivity_impact::models::{ErrorImpactInput, ExperienceLevel};
///
/// let input = ErrorImpactInput {
///     interface_name: "Sales Console".to_string(),
///     experience: ExperienceLevel::Seasoned,
///     annual_wage_8hr_basis: 45000.0,
///     daily_hours: 7.0,
///     is_full_time: true,
///     is_hours_mode: false,
///     weekly_errors_all_users: 300,
///     employees: 1000,
/// };
/// assert_eq!(input.display_name(), "Sales Console");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorImpactInput {
    /// Optional label for the interface, at most 255 characters.
    #[serde(default)]
    pub interface_name: String,
    /// Experience level of the users.
    pub experience: ExperienceLevel,
    /// Annual wage per user on an 8-hour-day basis.
    pub annual_wage_8hr_basis: f64,
    /// Hours worked per day.
    pub daily_hours: f64,
    /// Full-time (250 days) or part-time (175 days) calendar.
    #[serde(default = "default_true")]
    pub is_full_time: bool,
    /// Whether hours-based figures should be emphasised over value-based ones.
    #[serde(default)]
    pub is_hours_mode: bool,
    /// Errors per week across all users, 0 to 100000.
    pub weekly_errors_all_users: u32,
    /// Number of users of the interface.
    pub employees: u32,
}

impl ErrorImpactInput {
    /// Returns the working calendar selected by `is_full_time`.
    pub fn calendar(&self) -> WorkCalendar {
        WorkCalendar::from_full_time(self.is_full_time)
    }

    /// Returns the interface name, or `"Unnamed"` when blank.
    pub fn display_name(&self) -> &str {
        let name = self.interface_name.trim();
        if name.is_empty() { "Unnamed" } else { name }
    }
}

/// The derived metrics for one interface, echoing the input it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorImpactResult {
    /// The input this result was computed from.
    #[serde(flatten)]
    pub input: ErrorImpactInput,
    /// Errors per year across all users.
    pub annual_errors: u64,
    /// Errors per year per user.
    pub errors_per_user: f64,
    /// Errors per working day per user.
    pub errors_per_day: f64,
    /// Recovery time per error in minutes.
    pub distraction_time_per_error_minutes: u32,
    /// Working days per year from the calendar.
    pub working_days_per_year: u32,
    /// Daily hours times working days.
    pub annual_work_hours: f64,
    /// Distraction hours per year across all users.
    pub total_distraction_hours: f64,
    /// Distraction hours per year per user.
    pub distraction_hours_per_user: f64,
    /// Distraction hours per working day per user.
    pub daily_distraction_hours_per_user: f64,
    /// Annual work hours minus per-user distraction hours.
    pub net_productive_hours: f64,
    /// Per-user distraction hours as a percentage of annual work hours.
    pub productivity_loss_percent: f64,
    /// 100 minus the productivity loss.
    pub max_achievable_productivity_percent: f64,
    /// Wage-equivalent value lost to distraction. Negative means a loss.
    pub true_labor_cost: f64,
    /// Per-user distraction hours as a signed impact (always zero or negative).
    pub error_impact_hours: f64,
    /// Expected value per user (annual wage times 1.5).
    pub expected_annual_value: f64,
    /// Expected value scaled by the max achievable productivity.
    pub net_annual_value: f64,
    /// Net annual value minus expected annual value.
    pub annual_value_impact: f64,
    /// Fixed 8-hour day times working days.
    pub standard_annual_hours: f64,
}

impl ErrorImpactResult {
    /// True labor cost across all users.
    pub fn enterprise_labor_cost(&self) -> f64 {
        self.true_labor_cost * f64::from(self.input.employees)
    }

    /// Distraction hours lost across all users.
    pub fn enterprise_hours_lost(&self) -> f64 {
        self.distraction_hours_per_user * f64::from(self.input.employees)
    }

    /// Annual value impact across all users.
    pub fn enterprise_value_impact(&self) -> f64 {
        self.annual_value_impact * f64::from(self.input.employees)
    }
}
