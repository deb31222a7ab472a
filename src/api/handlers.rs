//! HTTP request handlers for the payroll cost engine API.
//!
//! This module contains the handler function for the `/calculate`
//! endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_backward, calculate_forward, CalculationInput};
use crate::config::CalculationConfig;
use crate::models::ColumnMapping;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the calculated cost and net
/// pay result; with `desired_net_salary` present the inverse solver runs
/// instead of the forward calculation.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
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
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let row = request.row();
    let mapping: ColumnMapping = request.column_mapping.clone().into();
    let config: CalculationConfig = request.config.clone().into();
    let input = CalculationInput {
        row: &row,
        mapping: &mapping,
        headers: &request.headers,
        config: &config,
        scheme: request.benefit_scheme,
        calculation_date: request.calculation_date,
    };

    let outcome = match request.desired_net_salary {
        Some(desired_net) => calculate_backward(&input, state.tables(), desired_net),
        None => calculate_forward(&input, state.tables()),
    };

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                mode = if request.desired_net_salary.is_some() { "inverse" } else { "forward" },
                total_cost = %result.total_cost,
                net_salary = %result.net_salary,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
