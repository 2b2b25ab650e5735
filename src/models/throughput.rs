//! Throughput productivity input and result models.

use serde::{Deserialize, Serialize};

use super::{ExperienceLevel, WorkCalendar, default_true};

/// Parameters describing one role for the throughput engine.
///
/// # Example
///
/// ```
/// use productivity_impact::models::{ExperienceLevel, ThroughputInput};
///
/// let input = ThroughputInput {
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
/// };
/// assert_eq!(input.calendar().working_days_per_year(), 250);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputInput {
    /// The role being modelled (e.g. "Service Agent").
    pub role: String,
    /// Annual cost (wage) per employee.
    pub annual_cost: f64,
    /// Number of employees in the role.
    pub employees: u32,
    /// Tasks each employee is expected to complete per day.
    pub expected_tasks_per_day: u32,
    /// Clicks (page loads) needed to complete one task.
    pub clicks_per_task: u32,
    /// Expected page time in seconds, one of 0.3, 0.4, ..., 4.0.
    pub expected_page_time_seconds: f64,
    /// Experience level of the employees.
    pub experience: ExperienceLevel,
    /// Whether hours-based figures should be emphasised over value-based ones.
    #[serde(default)]
    pub is_hours_mode: bool,
    /// Full-time (250 days) or part-time (175 days) calendar.
    #[serde(default = "default_true")]
    pub is_full_time: bool,
    /// Length of the working day in hours.
    pub hours_per_day: f64,
}

impl ThroughputInput {
    /// Returns the working calendar selected by `is_full_time`.
    pub fn calendar(&self) -> WorkCalendar {
        WorkCalendar::from_full_time(self.is_full_time)
    }
}

/// The derived metrics for one role, echoing the input it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputResult {
    /// The input this result was computed from.
    #[serde(flatten)]
    pub input: ThroughputInput,
    /// Heuristic clicks per minute.
    pub clicks_per_minute: f64,
    /// Clicks achievable in the fixed 360-minute window.
    pub max_clicks_per_day: u64,
    /// Whole tasks achievable per day.
    pub actual_tasks_per_day: u64,
    /// Actual tasks as a percentage of expected tasks. May exceed 100.
    pub productivity_percent: f64,
    /// Expected value per employee (annual cost times 1.5).
    pub expected_value: f64,
    /// Value produced per employee at the computed productivity.
    pub value_produced: f64,
    /// Value produced minus expected value. Negative means a deficit.
    pub true_cost: f64,
    /// True cost across all employees in the role.
    pub total_role_value: f64,
    /// Daily hours gained (positive) or lost (negative) per employee.
    pub hours_difference: f64,
    /// Annualised hours difference per employee.
    pub annual_hours_difference: f64,
    /// Working days per year from the calendar.
    pub working_days_per_year: u32,
    /// Entered hours per day times working days.
    pub expected_annual_hours: f64,
    /// Productive hours per year at the computed productivity.
    pub actual_annual_hours: f64,
    /// Fixed 8-hour day times working days.
    pub standard_annual_hours: f64,
}

impl ThroughputResult {
    /// Annual hours difference across all employees in the role.
    pub fn enterprise_hours_difference(&self) -> f64 {
        self.annual_hours_difference * f64::from(self.input.employees)
    }

    /// Returns true when the role meets or exceeds its expected task count.
    pub fn meets_expectation(&self) -> bool {
        self.productivity_percent >= 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ThroughputInput {
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

    fn sample_result() -> ThroughputResult {
        ThroughputResult {
            input: sample_input(),
            clicks_per_minute: 4.12,
            max_clicks_per_day: 1484,
            actual_tasks_per_day: 49,
            productivity_percent: 61.25,
            expected_value: 67500.0,
            value_produced: 41343.75,
            true_cost: -26156.25,
            total_role_value: -26156250.0,
            hours_difference: -3.1,
            annual_hours_difference: -775.0,
            working_days_per_year: 250,
            expected_annual_hours: 2000.0,
            actual_annual_hours: 1225.0,
            standard_annual_hours: 2000.0,
        }
    }

    #[test]
    fn test_deserialize_throughput_input() {
        let json = r#"{
            "role": "Account Executive",
            "annual_cost": 52000,
            "employees": 40,
            "expected_tasks_per_day": 60,
            "clicks_per_task": 25,
            "expected_page_time_seconds": 1.8,
            "experience": "expert",
            "is_hours_mode": true,
            "is_full_time": false,
            "hours_per_day": 6
        }"#;

        let input: ThroughputInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.role, "Account Executive");
        assert_eq!(input.employees, 40);
        assert_eq!(input.experience, ExperienceLevel::Expert);
        assert_eq!(input.calendar(), WorkCalendar::PartTime);
    }

    #[test]
    fn test_form_flags_default_to_value_mode_full_time() {
        let json = r#"{
            "role": "Service Agent",
            "annual_cost": 45000,
            "employees": 1000,
            "expected_tasks_per_day": 80,
            "clicks_per_task": 30,
            "expected_page_time_seconds": 2.4,
            "experience": "seasoned",
            "hours_per_day": 8
        }"#;

        let input: ThroughputInput = serde_json::from_str(json).unwrap();
        assert!(!input.is_hours_mode);
        assert!(input.is_full_time);
        assert_eq!(input.annual_cost, 45000.0);
        assert_eq!(input.experience, ExperienceLevel::Seasoned);
    }

    #[test]
    fn test_result_flattens_input_fields() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(json["role"], "Service Agent");
        assert_eq!(json["employees"], 1000);
        assert_eq!(json["max_clicks_per_day"], 1484);
        assert!(json.get("input").is_none());
    }

    #[test]
    fn test_serialize_result_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: ThroughputResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_enterprise_hours_difference_scales_by_employees() {
        assert_eq!(sample_result().enterprise_hours_difference(), -775000.0);
    }

    #[test]
    fn test_meets_expectation() {
        let mut result = sample_result();
        assert!(!result.meets_expectation());
        result.productivity_percent = 100.0;
        assert!(result.meets_expectation());
    }
}
