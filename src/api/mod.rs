//! HTTP API module for the Pay Cycle Engine.
//!
//! This module provides the REST API endpoints for resolving pay cycle
//! calendars and per-employee day statuses.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ResolutionRequest;
pub use response::ApiError;
pub use state::AppState;
