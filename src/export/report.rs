//! Print-oriented plain text reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ErrorImpactResult, ThroughputResult};

use super::chart::{ChartSeries, error_impact_chart, throughput_chart};
use super::format::{fixed, format_currency, format_hours, format_percent};

/// Identifies a rendered report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportHeader {
    /// Unique report identifier.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Crate version that produced the figures.
    pub engine_version: String,
    /// Report title.
    pub title: String,
}

impl ReportHeader {
    /// Creates a header stamped with a fresh id and the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            title: title.into(),
        }
    }

    fn lines(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            "=".repeat(self.title.chars().count()),
            format!("Report ID: {}", self.report_id),
            format!("Generated: {}", self.generated_at.to_rfc3339()),
            format!("Engine version: {}", self.engine_version),
        ]
    }
}

/// Renders throughput results as a text report, one section per result.
pub fn render_throughput_report(header: &ReportHeader, results: &[ThroughputResult]) -> String {
    let mut lines = header.lines();

    for (i, r) in results.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("[{}] {}", i + 1, r.input.role));
        lines.push(format!(
            "Productivity: {} of expected",
            format_percent(r.productivity_percent, 1)
        ));
        lines.push(format!(
            "Experience Level: {} ({})",
            r.input.experience,
            employment_label(r.input.is_full_time)
        ));
        lines.push(format!(
            "Tasks per Day: {} / {}",
            r.actual_tasks_per_day, r.input.expected_tasks_per_day
        ));
        lines.push(format!("Max Clicks per Day: {}", r.max_clicks_per_day));
        lines.push(format!(
            "Clicks per Minute: {}",
            fixed(r.clicks_per_minute, 2)
        ));

        if r.input.is_hours_mode {
            lines.push(format!(
                "Daily Hours Difference: {}",
                format_hours(r.hours_difference)
            ));
            lines.push(format!(
                "Annual Hours Impact ({} days): {}",
                r.working_days_per_year,
                format_hours(r.enterprise_hours_difference())
            ));
        } else {
            lines.push(format!("True Cost per Employee: {}", format_currency(r.true_cost)));
            lines.push(format!(
                "Total Role Value ({} employees): {}",
                r.input.employees,
                format_currency(r.total_role_value)
            ));
        }

        push_chart(&mut lines, &throughput_chart(r));
    }

    lines.join("\n")
}

/// Renders error impact results as a text report, one section per result.
pub fn render_error_impact_report(
    header: &ReportHeader,
    results: &[ErrorImpactResult],
) -> String {
    let mut lines = header.lines();

    for (i, r) in results.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("[{}] {}", i + 1, r.input.display_name()));
        lines.push(format!(
            "Maximum Achievable Productivity: {}",
            format_percent(r.max_achievable_productivity_percent, 1)
        ));
        lines.push(format!(
            "Experience Level: {} ({})",
            r.input.experience,
            employment_label(r.input.is_full_time)
        ));
        lines.push(format!(
            "Total Annual Errors: {} ({} per user)",
            r.annual_errors,
            fixed(r.errors_per_user, 0)
        ));
        lines.push(format!(
            "Distraction Time per Error: {} minutes",
            r.distraction_time_per_error_minutes
        ));

        if r.input.is_hours_mode {
            lines.push(format!(
                "Annual Hours Lost per User: {}",
                format_hours(r.distraction_hours_per_user)
            ));
            lines.push(format!(
                "Net Productive Hours per User: {}",
                format_hours(r.net_productive_hours)
            ));
            lines.push(format!(
                "Enterprise-wide Impact: {} lost",
                format_hours(r.enterprise_hours_lost())
            ));
        } else {
            lines.push(format!(
                "Annual Value Impact per User: {}",
                format_currency(r.annual_value_impact)
            ));
            lines.push(format!(
                "Productivity Loss: {}",
                format_percent(r.productivity_loss_percent, 1)
            ));
            lines.push(format!(
                "Enterprise-wide Impact: {}",
                format_currency(r.enterprise_value_impact())
            ));
        }

        push_chart(&mut lines, &error_impact_chart(r));
    }

    lines.join("\n")
}

fn employment_label(is_full_time: bool) -> &'static str {
    if is_full_time { "Full-Time" } else { "Part-Time" }
}

fn push_chart(lines: &mut Vec<String>, chart: &ChartSeries) {
    lines.push("Per-User Annual Comparison:".to_string());
    for bar in &chart.bars {
        lines.push(format!("  {}: {}", bar.label, chart.format_value(bar.value)));
    }
}
