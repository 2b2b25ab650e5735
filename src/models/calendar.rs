//! Working calendar model.
//!
//! Full-time and part-time employees are annualised over different numbers
//! of working days.

use serde::{Deserialize, Serialize};

/// Fixed standard working day length, independent of any entered daily hours.
pub const STANDARD_HOURS_PER_DAY: f64 = 8.0;

/// The working-days regime selected by full-time/part-time status.
///
/// # Example
///
/// ```
/// use productivity_impact::models::WorkCalendar;
///
/// assert_eq!(WorkCalendar::from_full_time(true).working_days_per_year(), 250);
/// assert_eq!(WorkCalendar::from_full_time(false).working_days_per_year(), 175);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkCalendar {
    /// 250 working days per year.
    FullTime,
    /// 175 working days per year.
    PartTime,
}

impl WorkCalendar {
    /// Selects the calendar from an `is_full_time` flag.
    pub fn from_full_time(is_full_time: bool) -> Self {
        if is_full_time {
            WorkCalendar::FullTime
        } else {
            WorkCalendar::PartTime
        }
    }

    /// Returns the number of working days per year.
    pub fn working_days_per_year(self) -> u32 {
        match self {
            WorkCalendar::FullTime => 250,
            WorkCalendar::PartTime => 175,
        }
    }

    /// Returns the standard annual hours (8 hours times working days).
    pub fn standard_annual_hours(self) -> f64 {
        STANDARD_HOURS_PER_DAY * f64::from(self.working_days_per_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_time_has_250_days() {
        assert_eq!(WorkCalendar::FullTime.working_days_per_year(), 250);
    }

    #[test]
    fn test_part_time_has_175_days() {
        assert_eq!(WorkCalendar::PartTime.working_days_per_year(), 175);
    }

    #[test]
    fn test_from_full_time_flag() {
        assert_eq!(WorkCalendar::from_full_time(true), WorkCalendar::FullTime);
        assert_eq!(WorkCalendar::from_full_time(false), WorkCalendar::PartTime);
    }

    #[test]
    fn test_standard_annual_hours_uses_fixed_eight_hour_day() {
        assert_eq!(WorkCalendar::FullTime.standard_annual_hours(), 2000.0);
        assert_eq!(WorkCalendar::PartTime.standard_annual_hours(), 1400.0);
    }
}
