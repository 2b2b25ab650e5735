//! CSV export of calculation results.
//!
//! Each result type has a fixed column order. Echoed inputs are written in
//! their shortest form, derived figures are rounded to two places and flags
//! are written as `Yes`/`No`.

use std::borrow::Cow;

use crate::models::{ErrorImpactResult, ThroughputResult};

use super::format::{fixed, plain, yes_no};

/// Column headers for throughput exports.
pub const THROUGHPUT_CSV_HEADERS: [&str; 17] = [
    "Role",
    "Cost/Employee",
    "Employees",
    "Expected Tasks/Day",
    "Actual Tasks/Day",
    "Productivity %",
    "Value Produced",
    "Expected Value",
    "True Cost",
    "Total Role Value",
    "Experience Level",
    "Hours Mode",
    "Hours/Day",
    "Hours Difference",
    "Annual Hours Difference",
    "Full Time",
    "Working Days/Year",
];

/// Column headers for error impact exports.
pub const ERROR_IMPACT_CSV_HEADERS: [&str; 16] = [
    "Interface",
    "Experience",
    "Annual Wage",
    "Daily Hours",
    "Weekly Errors",
    "Annual Errors",
    "Errors per User",
    "Distraction Time/Error",
    "Annual Work Hours",
    "Total Distraction Time",
    "Net Productive Time",
    "Productivity Loss %",
    "Max Achievable %",
    "True Labor Cost",
    "Enterprise Impact",
    "Full Time",
];

/// Serializes throughput results to CSV, one row per result after the header.
///
/// Rows are separated by `\n` with no trailing newline.
pub fn throughput_csv(results: &[ThroughputResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(csv_line(THROUGHPUT_CSV_HEADERS.iter().copied()));

    for r in results {
        let row = [
            r.input.role.clone(),
            plain(r.input.annual_cost),
            r.input.employees.to_string(),
            r.input.expected_tasks_per_day.to_string(),
            r.actual_tasks_per_day.to_string(),
            fixed(r.productivity_percent, 2),
            fixed(r.value_produced, 2),
            fixed(r.expected_value, 2),
            fixed(r.true_cost, 2),
            fixed(r.total_role_value, 2),
            r.input.experience.to_string(),
            yes_no(r.input.is_hours_mode).to_string(),
            plain(r.input.hours_per_day),
            fixed(r.hours_difference, 2),
            fixed(r.annual_hours_difference, 2),
            yes_no(r.input.is_full_time).to_string(),
            r.working_days_per_year.to_string(),
        ];
        lines.push(csv_line(row.iter().map(String::as_str)));
    }

    lines.join("\n")
}

/// Serializes error impact results to CSV, one row per result after the header.
///
/// `Enterprise Impact` is the true labor cost across all users.
pub fn error_impact_csv(results: &[ErrorImpactResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(csv_line(ERROR_IMPACT_CSV_HEADERS.iter().copied()));

    for r in results {
        let row = [
            r.input.display_name().to_string(),
            r.input.experience.to_string(),
            plain(r.input.annual_wage_8hr_basis),
            plain(r.input.daily_hours),
            r.input.weekly_errors_all_users.to_string(),
            r.annual_errors.to_string(),
            fixed(r.errors_per_user, 2),
            r.distraction_time_per_error_minutes.to_string(),
            plain(r.annual_work_hours),
            fixed(r.total_distraction_hours, 2),
            fixed(r.net_productive_hours, 2),
            fixed(r.productivity_loss_percent, 2),
            fixed(r.max_achievable_productivity_percent, 2),
            fixed(r.true_labor_cost, 2),
            fixed(r.enterprise_labor_cost(), 2),
            yes_no(r.input.is_full_time).to_string(),
        ];
        lines.push(csv_line(row.iter().map(String::as_str)));
    }

    lines.join("\n")
}

fn csv_line<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields.map(escape_field).collect::<Vec<_>>().join(",")
}

/// Quotes a field containing a delimiter, quote or line break (RFC 4180).
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
