//! Caller-owned collections of calculation rows.
//!
//! A [`Workbook`] keeps one ordered list of results per engine. Every stored
//! row is a complete engine result: an update that fails validation leaves the
//! workbook exactly as it was.

use tracing::debug;

use crate::calculation::{compute_error_impact, compute_throughput};
use crate::error::{EngineError, EngineResult};
use crate::export;
use crate::models::{ErrorImpactInput, ErrorImpactResult, ThroughputInput, ThroughputResult};

/// Ordered throughput and error impact rows.
///
/// # Example
///
/// ```
/// use productivity_impact::models::{ExperienceLevel, ThroughputInput};
/// use productivity_impact::workbook::Workbook;
///
/// let defaults = ThroughputInput {
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
///
/// let mut workbook = Workbook::new();
/// let seed = workbook.seed_throughput_input(&defaults);
/// workbook.push_throughput(seed)?;
/// assert_eq!(workbook.throughput_rows()[0].actual_tasks_per_day, 49);
/// # Ok::<(), productivity_impact::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    throughput: Vec<ThroughputResult>,
    error_impact: Vec<ErrorImpactResult>,
}

impl Workbook {
    /// Creates an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes `input` and stores it at `index`.
    ///
    /// An existing row is replaced; `index == len` appends. Any larger index
    /// fails with [`EngineError::RowNotFound`].
    pub fn calculate_throughput(
        &mut self,
        index: usize,
        input: ThroughputInput,
    ) -> EngineResult<&ThroughputResult> {
        check_slot(index, self.throughput.len())?;
        let result = compute_throughput(input).map_err(|e| e.in_row(index))?;
        debug!(index, rows = self.throughput.len(), "Storing throughput row");
        Ok(store(&mut self.throughput, index, result))
    }

    /// Computes `input` and appends it as a new row.
    pub fn push_throughput(&mut self, input: ThroughputInput) -> EngineResult<&ThroughputResult> {
        self.calculate_throughput(self.throughput.len(), input)
    }

    /// Removes and returns the row at `index`.
    pub fn remove_throughput(&mut self, index: usize) -> EngineResult<ThroughputResult> {
        check_row(index, self.throughput.len())?;
        Ok(self.throughput.remove(index))
    }

    /// Returns the throughput rows in order.
    pub fn throughput_rows(&self) -> &[ThroughputResult] {
        &self.throughput
    }

    /// Returns the starting input for a new throughput row.
    ///
    /// Cost and headcount carry over from the last row so that a new role
    /// starts from the same organisation figures.
    pub fn seed_throughput_input(&self, defaults: &ThroughputInput) -> ThroughputInput {
        let mut seed = defaults.clone();
        if let Some(last) = self.throughput.last() {
            seed.annual_cost = last.input.annual_cost;
            seed.employees = last.input.employees;
        }
        seed
    }

    /// Serializes the throughput rows to CSV.
    pub fn throughput_csv(&self) -> String {
        export::throughput_csv(&self.throughput)
    }

    /// Computes `input` and stores it at `index`, as for
    /// [`calculate_throughput`](Self::calculate_throughput).
    pub fn calculate_error_impact(
        &mut self,
        index: usize,
        input: ErrorImpactInput,
    ) -> EngineResult<&ErrorImpactResult> {
        check_slot(index, self.error_impact.len())?;
        let result = compute_error_impact(input).map_err(|e| e.in_row(index))?;
        debug!(index, rows = self.error_impact.len(), "Storing error impact row");
        Ok(store(&mut self.error_impact, index, result))
    }

    /// Computes `input` and appends it as a new row.
    pub fn push_error_impact(
        &mut self,
        input: ErrorImpactInput,
    ) -> EngineResult<&ErrorImpactResult> {
        self.calculate_error_impact(self.error_impact.len(), input)
    }

    /// Removes and returns the row at `index`.
    pub fn remove_error_impact(&mut self, index: usize) -> EngineResult<ErrorImpactResult> {
        check_row(index, self.error_impact.len())?;
        Ok(self.error_impact.remove(index))
    }

    /// Returns the error impact rows in order.
    pub fn error_impact_rows(&self) -> &[ErrorImpactResult] {
        &self.error_impact
    }

    /// Returns the starting input for a new error impact row.
    ///
    /// Wage, error volume and headcount carry over from the last row.
    pub fn seed_error_impact_input(&self, defaults: &ErrorImpactInput) -> ErrorImpactInput {
        let mut seed = defaults.clone();
        if let Some(last) = self.error_impact.last() {
            seed.annual_wage_8hr_basis = last.input.annual_wage_8hr_basis;
            seed.weekly_errors_all_users = last.input.weekly_errors_all_users;
            seed.employees = last.input.employees;
        }
        seed
    }

    /// Serializes the error impact rows to CSV.
    pub fn error_impact_csv(&self) -> String {
        export::error_impact_csv(&self.error_impact)
    }

    /// Returns true when neither list holds a row.
    pub fn is_empty(&self) -> bool {
        self.throughput.is_empty() && self.error_impact.is_empty()
    }
}

/// Accepts any existing row or the append slot.
fn check_slot(index: usize, len: usize) -> EngineResult<()> {
    if index > len {
        return Err(EngineError::RowNotFound { index, len });
    }
    Ok(())
}

fn check_row(index: usize, len: usize) -> EngineResult<()> {
    if index >= len {
        return Err(EngineError::RowNotFound { index, len });
    }
    Ok(())
}

fn store<T>(rows: &mut Vec<T>, index: usize, value: T) -> &T {
    if index == rows.len() {
        rows.push(value);
    } else {
        rows[index] = value;
    }
    &rows[index]
}
