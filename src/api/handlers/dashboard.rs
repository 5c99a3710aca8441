//! Dashboard composites: all metrics at once, chart payloads, and ad-hoc
//! aggregation of caller-supplied records.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::app_state::AppState;
use crate::domain::{ChartPayload, ChartWidget, Dataset};
use crate::error::{AnalyticsError, ErrorResponse};
use crate::service::{DashboardSnapshot, aggregate};

/// `GET /dashboard`: Every widget's metrics in one response.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    summary = "Full dashboard",
    description = "Daily sales, monthly sales, transaction counts, and revenue trends computed over the loaded dataset.",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardSnapshot),
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.analytics_service.dashboard())
}

/// `GET /charts`: Chart payloads for all widgets.
#[utoipa::path(
    get,
    path = "/api/v1/charts",
    tag = "Dashboard",
    summary = "All chart payloads",
    description = "Labels and datasets for each dashboard widget, in layout order.",
    responses(
        (status = 200, description = "Chart payloads", body = Vec<ChartPayload>),
    )
)]
pub async fn charts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.analytics_service.charts())
}

/// `GET /charts/:widget`: Chart payload for one widget.
///
/// # Errors
///
/// Returns [`AnalyticsError::UnknownWidget`] if `widget` is not a known id.
#[utoipa::path(
    get,
    path = "/api/v1/charts/{widget}",
    tag = "Dashboard",
    summary = "Single chart payload",
    description = "Labels and datasets for one widget: `daily-sales`, `monthly-sales`, `transactions`, or `revenue-trends`.",
    params(
        ("widget" = String, Path, description = "Widget id"),
    ),
    responses(
        (status = 200, description = "Chart payload", body = ChartPayload),
        (status = 404, description = "Unknown widget", body = ErrorResponse),
    )
)]
pub async fn chart(
    State(state): State<AppState>,
    Path(widget): Path<String>,
) -> Result<impl IntoResponse, AnalyticsError> {
    let widget: ChartWidget = widget.parse()?;
    Ok(Json(state.analytics_service.chart(widget)))
}

/// `POST /aggregate`: Compute dashboard metrics for supplied records.
///
/// Any JSON body is accepted: an array is treated as the record sequence,
/// anything else yields the empty dashboard.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidRequest`] if the body is not JSON.
#[utoipa::path(
    post,
    path = "/api/v1/aggregate",
    tag = "Dashboard",
    summary = "Aggregate supplied records",
    description = "Runs the four dashboard queries over the records in the request body instead of the loaded dataset.",
    request_body(content = serde_json::Value, description = "Array of transaction records"),
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardSnapshot),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
    )
)]
pub async fn aggregate_records(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AnalyticsError> {
    let Json(body) = payload.map_err(|e| AnalyticsError::InvalidRequest(e.body_text()))?;
    let dataset = Dataset::from_value(body);
    tracing::debug!(records = dataset.len(), "aggregating supplied records");
    Ok(Json(aggregate(dataset.records())))
}

/// Dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/charts", get(charts))
        .route("/charts/{widget}", get(chart))
        .route("/aggregate", post(aggregate_records))
}
