//! HTTP request handlers for the payroll API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_payroll;
use crate::config::WageTable;
use crate::report::PayrollSummary;

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for `POST /payroll`.
///
/// Prices every valid line of the request against the active wage table.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Result<Json<PayrollSummary>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let Json(request) = payload.map_err(|rejection| {
        let error = ApiError::from_rejection(&rejection);
        warn!(
            correlation_id = %correlation_id,
            code = %error.code,
            error = %error.message,
            "Rejected request body"
        );
        ApiErrorResponse::bad_request(error)
    })?;

    let start_time = Instant::now();
    let payroll = run_payroll(state.table(), &request.lines).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Payroll failed");
        ApiErrorResponse::from(err)
    })?;

    let summary = PayrollSummary::from(&payroll);
    let skipped: usize = payroll.iter().map(|e| e.payment.skipped().count()).sum();
    info!(
        correlation_id = %correlation_id,
        lines = request.lines.len(),
        employees = summary.employees.len(),
        skipped_shifts = skipped,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll completed successfully"
    );
    Ok(Json(summary))
}

/// Handler for `GET /rates`.
async fn rates_handler(State(state): State<AppState>) -> Json<WageTable> {
    Json(state.table().clone())
}
