//! Dual-series endpoints: transaction counts and revenue trends.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{RevenueTrends, TransactionSummary};

/// `GET /transactions`: Transaction counts per day and per month.
#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    tag = "Trends",
    summary = "Transaction counts",
    description = "Counts valid-date records per day and per month label. Both lists are always present, possibly empty.",
    responses(
        (status = 200, description = "Daily and monthly counts", body = TransactionSummary),
    )
)]
pub async fn transactions(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.analytics_service.transactions())
}

/// `GET /revenue`: Revenue per day and per month.
#[utoipa::path(
    get,
    path = "/api/v1/revenue",
    tag = "Trends",
    summary = "Revenue trends",
    description = "Sums `GROSS AMT` per day and per month label over valid-date records. Both lists are always present, possibly empty.",
    responses(
        (status = 200, description = "Daily and monthly revenue", body = RevenueTrends),
    )
)]
pub async fn revenue_trends(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.analytics_service.revenue_trends())
}

/// Trend routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(transactions))
        .route("/revenue", get(revenue_trends))
}
