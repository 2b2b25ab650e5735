//! Error types for the Productivity Impact Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that stops a calculation, a workbook update or a
//! configuration load.

use thiserror::Error;

/// The main error type for the Productivity Impact Engine.
///
/// Both engines validate their input before computing anything, so a call
/// either returns a fully-populated result or one of these errors.
///
/// # Example
///
/// ```
/// use productivity_impact::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "employees".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'employees': must be greater than zero");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An input value lies outside its declared domain.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// An input value would make a formula divide by zero.
    #[error("Degenerate division on '{field}': {message}")]
    DivisionDegenerate {
        /// The input field that would become a zero divisor.
        field: String,
        /// A description of the degenerate value.
        message: String,
    },

    /// A workbook row index was outside the collection.
    #[error("Row {index} not found (workbook has {len} rows)")]
    RowNotFound {
        /// The requested row index.
        index: usize,
        /// The number of rows in the collection.
        len: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidInput`] for `field`.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds an [`EngineError::DivisionDegenerate`] for `field`.
    pub fn division_degenerate(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DivisionDegenerate {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefixes the field of an input error with a row locator such as `rows[2]`.
    ///
    /// Other variants are returned unchanged.
    pub fn in_row(self, index: usize) -> Self {
        match self {
            Self::InvalidInput { field, message } => Self::InvalidInput {
                field: format!("rows[{}].{}", index, field),
                message,
            },
            Self::DivisionDegenerate { field, message } => Self::DivisionDegenerate {
                field: format!("rows[{}].{}", index, field),
                message,
            },
            other => other,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("employees", "must be greater than zero");
        assert_eq!(
            error.to_string(),
            "Invalid input 'employees': must be greater than zero"
        );
    }

    #[test]
    fn test_division_degenerate_displays_field_and_message() {
        let error = EngineError::division_degenerate("daily_hours", "annual work hours would be zero");
        assert_eq!(
            error.to_string(),
            "Degenerate division on 'daily_hours': annual work hours would be zero"
        );
    }

    #[test]
    fn test_row_not_found_displays_index_and_len() {
        let error = EngineError::RowNotFound { index: 4, len: 2 };
        assert_eq!(error.to_string(), "Row 4 not found (workbook has 2 rows)");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/calculator.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calculator.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_in_row_prefixes_input_errors() {
        let error = EngineError::invalid_input("employees", "must be greater than zero").in_row(2);
        assert_eq!(
            error,
            EngineError::InvalidInput {
                field: "rows[2].employees".to_string(),
                message: "must be greater than zero".to_string(),
            }
        );

        let error = EngineError::division_degenerate("daily_hours", "zero").in_row(0);
        assert!(error.to_string().contains("rows[0].daily_hours"));
    }

    #[test]
    fn test_in_row_leaves_other_variants_alone() {
        let error = EngineError::RowNotFound { index: 1, len: 0 };
        assert_eq!(error.clone().in_row(3), error);
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid() -> EngineResult<()> {
            Err(EngineError::invalid_input("role", "empty"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
