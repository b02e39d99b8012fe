//! HTTP request handlers for the Pay Cycle Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc, Weekday};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_day_sequence, build_week_grid, compute_cycle_window, resolve_roster};
use crate::models::{AttendanceRecord, Employee, Holiday, LeaveRecord, ResolutionResult};

use super::request::ResolutionRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/resolve", post(resolve_handler))
        .with_state(state)
}

/// Handler for POST /resolve endpoint.
///
/// Accepts a resolution request and returns the resolved pay cycle.
async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolutionRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing resolution request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
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
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let holidays: Vec<Holiday> = request.holidays.into_iter().map(Into::into).collect();
    let attendance: Vec<AttendanceRecord> =
        request.attendance.into_iter().map(Into::into).collect();
    let leaves: Vec<LeaveRecord> = request.leaves.into_iter().map(Into::into).collect();

    // A request override takes precedence over the configured start day
    let config = state.config();
    let cycle_start_day = request
        .cycle_start_day
        .unwrap_or_else(|| config.cycle_start_day());
    let week_start = config.week_start();

    // Perform the resolution
    let start_time = Instant::now();
    match perform_resolution(
        request.anchor_date,
        cycle_start_day,
        week_start,
        &employees,
        &holidays,
        &attendance,
        &leaves,
    ) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                window_from = %result.window.from,
                window_to = %result.window.to,
                employees_count = result.rows.len(),
                days_count = result.days.len(),
                duration_us = duration.as_micros(),
                "Resolution completed successfully"
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
                "Resolution failed"
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

/// Performs the pay cycle resolution for a roster.
fn perform_resolution(
    anchor_date: NaiveDate,
    cycle_start_day: u32,
    week_start: Weekday,
    employees: &[Employee],
    holidays: &[Holiday],
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
) -> Result<ResolutionResult, crate::error::EngineError> {
    let window = compute_cycle_window(anchor_date, cycle_start_day)?;
    let days = build_day_sequence(window.from, window.to)?;
    let weeks = build_week_grid(window.from, &days, week_start);
    let rows = resolve_roster(employees, &window, holidays, attendance, leaves)?;

    Ok(ResolutionResult {
        resolution_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        window,
        days,
        weeks,
        rows,
    })
}
