//! Dashboard aggregates. Fetched fresh on every view.

use crate::dispatch::{ApiRequest, Dispatcher};
use crate::error::ApiError;
use crate::types::DashboardStats;

/// `GET /dashboard/stats`
///
/// # Errors
///
/// Any dispatch or decode error.
pub async fn stats(dispatcher: &Dispatcher) -> Result<DashboardStats, ApiError> {
    dispatcher.get_json(ApiRequest::get("/dashboard/stats")).await
}
