//! Calibration constants shared by the calculation engines.
//!
//! These are fixed business-model anchors. The experience lookup tables are
//! deliberately not here: each engine owns its own table.

/// Multiplier turning an annual cost or wage into the fully-loaded value an
/// employee is expected to produce.
pub const VALUE_MULTIPLIER: f64 = 1.5;

/// Fixed working window, in minutes, over which daily clicks are counted.
///
/// This is six hours regardless of the entered working day length.
pub const THROUGHPUT_WINDOW_MINUTES: f64 = 360.0;

/// Weeks per year used to annualise weekly error counts.
pub const WEEKS_PER_YEAR: u64 = 52;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Upper bound for weekly errors across all users.
pub const MAX_WEEKLY_ERRORS: u32 = 100_000;

/// Maximum length of an interface name, in characters.
pub const MAX_INTERFACE_NAME_LEN: usize = 255;
