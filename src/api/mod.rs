//! HTTP API module for the Productivity Impact Engine.
//!
//! This module provides the REST endpoints for the throughput and error
//! impact calculators and their exports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportFormat, ExportRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, DefaultsResponse};
pub use state::AppState;
