//! HTTP API module for the payroll engine.
//!
//! This module exposes the engine over HTTP: timesheet lines in, payroll
//! summary out, plus read access to the active wage table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
