//! Response types for the Productivity Impact API.
//!
//! This module defines the success envelope for calculations and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::export::ChartSeries;
use crate::models::{ErrorImpactInput, ThroughputInput};

/// Envelope for a single calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse<T> {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the figures.
    pub engine_version: String,
    /// The engine result.
    pub result: T,
    /// The comparison bars for the result.
    pub chart: ChartSeries,
}

impl<T> CalculationResponse<T> {
    /// Wraps a result with a fresh id and the current time.
    pub fn new(result: T, chart: ChartSeries) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
            chart,
        }
    }
}

/// Response body for `GET /defaults`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    /// Calculator name.
    pub name: String,
    /// Calibration version.
    pub version: String,
    /// Role names offered for throughput rows.
    pub roles: Vec<String>,
    /// Starting values for a throughput row.
    pub throughput: ThroughputInput,
    /// Starting values for an error impact row.
    pub error_impact: ErrorImpactInput,
    /// Permitted expected page times, longest first.
    pub expected_page_time_options: Vec<f64>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input '{}': {}", field, message),
                    field,
                ),
            ),
            EngineError::DivisionDegenerate { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "DIVISION_DEGENERATE",
                    format!("Degenerate division on '{}': {}", field, message),
                    field,
                ),
            ),
            EngineError::RowNotFound { index, len } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "ROW_NOT_FOUND",
                    format!("Row {} not found", index),
                    format!("The request holds {} rows", len),
                ),
            ),
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
