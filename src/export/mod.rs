//! Presentation of calculation results.
//!
//! Everything here reads finished results and never recomputes engine figures:
//!
//! - [`csv`] serializes rows with a fixed column order
//! - [`chart`] picks the three comparison bars for a row
//! - [`report`] renders a print-oriented text view
//! - [`format`] holds the shared number formatting

pub mod chart;
pub mod csv;
pub mod format;
pub mod report;

pub use chart::{BarTone, ChartBar, ChartSeries, ChartUnit, error_impact_chart, throughput_chart};
pub use csv::{ERROR_IMPACT_CSV_HEADERS, THROUGHPUT_CSV_HEADERS, error_impact_csv, throughput_csv};
pub use format::{fixed, format_currency, format_hours, format_percent, plain, round_dp, yes_no};
pub use report::{ReportHeader, render_error_impact_report, render_throughput_report};
