//! Sales total endpoints: daily and monthly.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{DailySales, MonthlySales};

/// `GET /sales/daily`: Total gross sales per day.
#[utoipa::path(
    get,
    path = "/api/v1/sales/daily",
    tag = "Sales",
    summary = "Daily sales totals",
    description = "Sums `GROSS AMT` per valid `DATE`. Dates are ISO formatted; rows follow first occurrence in the dataset. Records with a malformed date are excluded, unparseable amounts count as zero.",
    responses(
        (status = 200, description = "Per-day totals", body = Vec<DailySales>),
    )
)]
pub async fn daily_sales(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.analytics_service.daily_sales())
}

/// `GET /sales/monthly`: Total gross sales per month label.
#[utoipa::path(
    get,
    path = "/api/v1/sales/monthly",
    tag = "Sales",
    summary = "Monthly sales totals",
    description = "Sums `GROSS AMT` per `Months` label. Only records with a valid `DATE` are included, even though grouping uses the month label.",
    responses(
        (status = 200, description = "Per-month totals", body = Vec<MonthlySales>),
    )
)]
pub async fn monthly_sales(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.analytics_service.monthly_sales())
}

/// Sales routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales/daily", get(daily_sales))
        .route("/sales/monthly", get(monthly_sales))
}
