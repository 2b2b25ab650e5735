//! Request types for the Productivity Impact API.
//!
//! The calculation endpoints take the engine inputs directly; optional form
//! flags are defaulted by the models' serde attributes.

use serde::{Deserialize, Serialize};

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Plain text report for printing.
    Print,
}

/// Request body for the export endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest<T> {
    /// Rows to calculate and export, in order.
    pub rows: Vec<T>,
    /// Output format.
    #[serde(default)]
    pub format: ExportFormat,
}
