//! HTTP request handlers for the Productivity Impact API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_error_impact, compute_throughput, expected_page_time_options};
use crate::error::EngineResult;
use crate::export::{
    ReportHeader, error_impact_chart, render_error_impact_report, render_throughput_report,
    throughput_chart,
};
use crate::models::{ErrorImpactInput, ThroughputInput};
use crate::workbook::Workbook;

use super::request::{ExportFormat, ExportRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, DefaultsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/defaults", get(defaults_handler))
        .route("/throughput", post(throughput_handler))
        .route("/error-impact", post(error_impact_handler))
        .route("/throughput/export", post(throughput_export_handler))
        .route("/error-impact/export", post(error_impact_export_handler))
        .with_state(state)
}

/// Handler for GET /defaults.
///
/// Returns the starting values for new rows of either calculator.
async fn defaults_handler(State(state): State<AppState>) -> Json<DefaultsResponse> {
    let config = state.config();
    let defaults = config.defaults();

    Json(DefaultsResponse {
        name: config.metadata().name.clone(),
        version: config.metadata().version.clone(),
        roles: defaults.roles.clone(),
        throughput: defaults.throughput.clone(),
        error_impact: defaults.error_impact.clone(),
        expected_page_time_options: expected_page_time_options(),
    })
}

/// Handler for POST /throughput.
async fn throughput_handler(
    payload: Result<Json<ThroughputInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing throughput request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let start_time = Instant::now();
    match compute_throughput(request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                role = %result.input.role,
                productivity_percent = result.productivity_percent,
                duration_us = start_time.elapsed().as_micros(),
                "Throughput calculation completed"
            );
            let chart = throughput_chart(&result);
            (StatusCode::OK, Json(CalculationResponse::new(result, chart))).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Throughput calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /error-impact.
async fn error_impact_handler(
    payload: Result<Json<ErrorImpactInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing error impact request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let start_time = Instant::now();
    match compute_error_impact(request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                interface = %result.input.display_name(),
                productivity_loss_percent = result.productivity_loss_percent,
                duration_us = start_time.elapsed().as_micros(),
                "Error impact calculation completed"
            );
            let chart = error_impact_chart(&result);
            (StatusCode::OK, Json(CalculationResponse::new(result, chart))).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Error impact calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /throughput/export.
///
/// Calculates every row and returns them as CSV or a printable report.
async fn throughput_export_handler(
    payload: Result<Json<ExportRequest<ThroughputInput>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing throughput export");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let workbook = match throughput_workbook(request.rows) {
        Ok(workbook) => workbook,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Throughput export failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        rows = workbook.throughput_rows().len(),
        format = ?request.format,
        "Throughput export completed"
    );

    let body = match request.format {
        ExportFormat::Csv => workbook.throughput_csv(),
        ExportFormat::Print => render_throughput_report(
            &ReportHeader::new("Productivity Analysis"),
            workbook.throughput_rows(),
        ),
    };
    export_response(request.format, "productivity_analysis.csv", body)
}

/// Handler for POST /error-impact/export.
async fn error_impact_export_handler(
    payload: Result<Json<ExportRequest<ErrorImpactInput>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing error impact export");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let workbook = match error_impact_workbook(request.rows) {
        Ok(workbook) => workbook,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Error impact export failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        rows = workbook.error_impact_rows().len(),
        format = ?request.format,
        "Error impact export completed"
    );

    let body = match request.format {
        ExportFormat::Csv => workbook.error_impact_csv(),
        ExportFormat::Print => render_error_impact_report(
            &ReportHeader::new("Error Impact Analysis"),
            workbook.error_impact_rows(),
        ),
    };
    export_response(request.format, "error_impact_analysis.csv", body)
}

fn throughput_workbook(rows: Vec<ThroughputInput>) -> EngineResult<Workbook> {
    let mut workbook = Workbook::new();
    for row in rows {
        workbook.push_throughput(row)?;
    }
    Ok(workbook)
}

fn error_impact_workbook(rows: Vec<ErrorImpactInput>) -> EngineResult<Workbook> {
    let mut workbook = Workbook::new();
    for row in rows {
        workbook.push_error_impact(row)?;
    }
    Ok(workbook)
}

fn export_response(format: ExportFormat, filename: &str, body: String) -> Response {
    match format {
        ExportFormat::Csv => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            body,
        )
            .into_response(),
        ExportFormat::Print => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response(),
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
