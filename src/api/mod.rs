//! HTTP API module for the Severance Engine.
//!
//! This module provides the REST API endpoint for calculating employment
//! termination settlements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NoticeRequest, SettlementRequest, SeveranceFundRequest, VacationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
