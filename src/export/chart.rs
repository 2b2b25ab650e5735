//! Three-bar comparison series for a single result.
//!
//! The series is chosen by the row's `is_hours_mode` flag. Bar values come
//! straight from engine fields; this module only picks and labels them.

use serde::{Deserialize, Serialize};

use crate::models::{ErrorImpactResult, ThroughputResult};

use super::format::{format_currency, format_hours};

/// Unit of every bar in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartUnit {
    /// Annual hours per user.
    Hours,
    /// Annual currency per user.
    Value,
}

/// How a bar should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarTone {
    /// The expectation the other bars are compared against.
    Baseline,
    /// At or above expectation.
    Positive,
    /// Below expectation but not a loss figure.
    Neutral,
    /// A loss.
    Negative,
}

/// A single labelled bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Display label.
    pub label: String,
    /// Bar height in the series unit.
    pub value: f64,
    /// Reading of the bar.
    pub tone: BarTone,
}

impl ChartBar {
    fn new(label: &str, value: f64, tone: BarTone) -> Self {
        Self {
            label: label.to_string(),
            value,
            tone,
        }
    }
}

/// A labelled series of exactly three bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Unit shared by all bars.
    pub unit: ChartUnit,
    /// Bars in display order.
    pub bars: Vec<ChartBar>,
}

impl ChartSeries {
    /// Formats a bar value in this series' unit.
    pub fn format_value(&self, value: f64) -> String {
        match self.unit {
            ChartUnit::Hours => format_hours(value),
            ChartUnit::Value => format_currency(value),
        }
    }
}

fn tone_for(at_or_above: bool) -> BarTone {
    if at_or_above {
        BarTone::Positive
    } else {
        BarTone::Negative
    }
}

/// Builds the comparison series for a throughput result.
///
/// Hours mode compares expected and actual annual hours per user; value mode
/// compares the annual cost with the value produced.
///
/// # Examples
///
/// ```
/// use productivity_impact::calculation::compute_throughput;
/// use productivity_impact::export::{throughput_chart, ChartUnit};
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
/// })?;
///
/// let chart = throughput_chart(&result);
/// assert_eq!(chart.unit, ChartUnit::Value);
/// assert_eq!(chart.bars.len(), 3);
/// # Ok::<(), productivity_impact::error::EngineError>(())
/// ```
pub fn throughput_chart(result: &ThroughputResult) -> ChartSeries {
    let below_expectation = if result.meets_expectation() {
        BarTone::Positive
    } else {
        BarTone::Neutral
    };

    if result.input.is_hours_mode {
        ChartSeries {
            unit: ChartUnit::Hours,
            bars: vec![
                ChartBar::new(
                    "Expected Annual Hours",
                    result.expected_annual_hours,
                    BarTone::Baseline,
                ),
                ChartBar::new(
                    "Actual Annual Hours",
                    result.actual_annual_hours,
                    below_expectation,
                ),
                ChartBar::new(
                    "Hours Difference",
                    result.annual_hours_difference,
                    tone_for(result.hours_difference >= 0.0),
                ),
            ],
        }
    } else {
        let produced_tone = if result.value_produced >= result.expected_value {
            BarTone::Positive
        } else {
            BarTone::Neutral
        };
        ChartSeries {
            unit: ChartUnit::Value,
            bars: vec![
                ChartBar::new("Average Wage", result.input.annual_cost, BarTone::Baseline),
                ChartBar::new("Value Produced", result.value_produced, produced_tone),
                ChartBar::new(
                    "Cost/Benefit",
                    result.true_cost,
                    tone_for(result.true_cost >= 0.0),
                ),
            ],
        }
    }
}

/// Builds the comparison series for an error impact result.
///
/// The lost bar is always drawn as a positive height.
pub fn error_impact_chart(result: &ErrorImpactResult) -> ChartSeries {
    if result.input.is_hours_mode {
        ChartSeries {
            unit: ChartUnit::Hours,
            bars: vec![
                ChartBar::new(
                    "Expected Annual Hours",
                    result.annual_work_hours,
                    BarTone::Baseline,
                ),
                ChartBar::new(
                    "Annual Hours Lost",
                    result.distraction_hours_per_user,
                    BarTone::Negative,
                ),
                ChartBar::new(
                    "Net Productive Hours",
                    result.net_productive_hours,
                    BarTone::Positive,
                ),
            ],
        }
    } else {
        ChartSeries {
            unit: ChartUnit::Value,
            bars: vec![
                ChartBar::new(
                    "Expected Annual Value",
                    result.expected_annual_value,
                    BarTone::Baseline,
                ),
                ChartBar::new(
                    "Annual Value Lost",
                    result.annual_value_impact.abs(),
                    BarTone::Negative,
                ),
                ChartBar::new("Net Annual Value", result.net_annual_value, BarTone::Positive),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_error_impact, compute_throughput};
    use crate::models::{ErrorImpactInput, ExperienceLevel, ThroughputInput};

    fn throughput_input() -> ThroughputInput {
        ThroughputInput {
            role: "Service Agent".to_string(),
            annual_cost: 45000.0,
            employees: 1000,
            expected_tasks_per_day: 80,
            clicks_per_task: 30,
            expected_page_time_seconds: 2.4,
            experience: ExperienceLevel::Seasoned,
            is_hours_mode: false,
            is_full_time: true,
            hours_per_day: 8.0,
        }
    }

    fn error_input() -> ErrorImpactInput {
        ErrorImpactInput {
            interface_name: "Case Console".to_string(),
            experience: ExperienceLevel::Seasoned,
            annual_wage_8hr_basis: 45000.0,
            daily_hours: 7.0,
            is_full_time: true,
            is_hours_mode: false,
            weekly_errors_all_users: 300,
            employees: 1000,
        }
    }

    fn labels(series: &ChartSeries) -> Vec<&str> {
        series.bars.iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn test_throughput_value_series() {
        let result = compute_throughput(throughput_input()).unwrap();
        let chart = throughput_chart(&result);

        assert_eq!(chart.unit, ChartUnit::Value);
        assert_eq!(labels(&chart), ["Average Wage", "Value Produced", "Cost/Benefit"]);
        assert_eq!(chart.bars[0].value, 45000.0);
        assert_eq!(chart.bars[1].value, result.value_produced);
        assert_eq!(chart.bars[1].tone, BarTone::Neutral);
        assert_eq!(chart.bars[2].value, result.true_cost);
        assert_eq!(chart.bars[2].tone, BarTone::Negative);
    }

    #[test]
    fn test_throughput_hours_series() {
        let input = ThroughputInput {
            is_hours_mode: true,
            ..throughput_input()
        };
        let result = compute_throughput(input).unwrap();
        let chart = throughput_chart(&result);

        assert_eq!(chart.unit, ChartUnit::Hours);
        assert_eq!(
            labels(&chart),
            ["Expected Annual Hours", "Actual Annual Hours", "Hours Difference"]
        );
        assert_eq!(chart.bars[0].value, 2000.0);
        assert!((chart.bars[1].value - 1225.0).abs() < 1e-9);
        assert!((chart.bars[2].value + 775.0).abs() < 1e-9);
        assert_eq!(chart.bars[2].tone, BarTone::Negative);
    }

    #[test]
    fn test_throughput_above_expectation_is_positive() {
        let input = ThroughputInput {
            experience: ExperienceLevel::Expert,
            expected_page_time_seconds: 0.3,
            clicks_per_task: 10,
            expected_tasks_per_day: 10,
            is_hours_mode: true,
            ..throughput_input()
        };
        let result = compute_throughput(input).unwrap();
        let chart = throughput_chart(&result);

        assert_eq!(chart.bars[1].tone, BarTone::Positive);
        assert_eq!(chart.bars[2].tone, BarTone::Positive);
    }

    #[test]
    fn test_exact_expectation_is_positive() {
        // 1484 clicks / 1 click per task = 1484 tasks, matching expectation exactly.
        let input = ThroughputInput {
            clicks_per_task: 1,
            expected_tasks_per_day: 1484,
            is_hours_mode: true,
            ..throughput_input()
        };
        let result = compute_throughput(input).unwrap();
        assert_eq!(result.hours_difference, 0.0);

        let chart = throughput_chart(&result);
        assert_eq!(chart.bars[2].tone, BarTone::Positive);
    }

    #[test]
    fn test_error_value_series() {
        let result = compute_error_impact(error_input()).unwrap();
        let chart = error_impact_chart(&result);

        assert_eq!(chart.unit, ChartUnit::Value);
        assert_eq!(
            labels(&chart),
            ["Expected Annual Value", "Annual Value Lost", "Net Annual Value"]
        );
        assert_eq!(chart.bars[0].value, 67500.0);
        assert!(chart.bars[1].value > 0.0);
        assert!((chart.bars[0].value - chart.bars[1].value - chart.bars[2].value).abs() < 1e-9);
    }

    #[test]
    fn test_error_hours_series() {
        let input = ErrorImpactInput {
            is_hours_mode: true,
            ..error_input()
        };
        let result = compute_error_impact(input).unwrap();
        let chart = error_impact_chart(&result);

        assert_eq!(chart.unit, ChartUnit::Hours);
        assert_eq!(chart.bars[0].value, 1750.0);
        assert!((chart.bars[1].value - 4.68).abs() < 1e-9);
        assert!((chart.bars[2].value - 1745.32).abs() < 1e-9);
        assert_eq!(chart.bars[1].tone, BarTone::Negative);
    }

    #[test]
    fn test_format_value_follows_unit() {
        let result = compute_error_impact(error_input()).unwrap();
        let chart = error_impact_chart(&result);
        assert_eq!(chart.format_value(67500.0), "$67,500.00");

        let hours = ChartSeries {
            unit: ChartUnit::Hours,
            bars: Vec::new(),
        };
        assert_eq!(hours.format_value(1745.32), "1745.3 hrs");
    }

    #[test]
    fn test_series_serializes_snake_case() {
        let result = compute_throughput(throughput_input()).unwrap();
        let json = serde_json::to_value(throughput_chart(&result)).unwrap();
        assert_eq!(json["unit"], "value");
        assert_eq!(json["bars"][0]["tone"], "baseline");
    }
}
