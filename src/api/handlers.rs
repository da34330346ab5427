//! HTTP request handlers for the Severance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_settlement;
use crate::models::{AuditTrace, CalculationResult, SettlementInput};

use super::request::SettlementRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a settlement request and returns the settlement with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let input = match SettlementInput::try_from(request) {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request validation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, api_error.error);
        }
    };

    let result = perform_calculation(&input, &state);
    info!(
        correlation_id = %correlation_id,
        category = %input.category,
        notice_days = result.settlement.summary.notice_days,
        total_overall = %result.settlement.amounts.total_overall,
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );
    json_response(StatusCode::OK, result)
}

/// Runs the settlement rules for one input and wraps the result.
fn perform_calculation(input: &SettlementInput, state: &AppState) -> CalculationResult {
    let start_time = Instant::now();
    let calculation = calculate_settlement(input, state.rules());
    let duration_us = start_time.elapsed().as_micros() as u64;

    CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        regime_code: state.regime_code().to_string(),
        settlement: calculation.output,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            duration_us,
        },
    }
}
