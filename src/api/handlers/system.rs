//! System endpoints: health check and dataset info.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dto::DatasetInfoResponse;
use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    records: usize,
}

/// `GET /health`: Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, current timestamp, and the number of loaded records.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            records: state.analytics_service.dataset().len(),
        }),
    )
}

/// `GET /config/dataset`: Describe the loaded dataset.
#[utoipa::path(
    get,
    path = "/config/dataset",
    tag = "System",
    summary = "Dataset info",
    description = "Returns the data source and record counts: total entries, entries with a valid date, and distinct dates and month labels.",
    responses(
        (status = 200, description = "Dataset description", body = DatasetInfoResponse),
    )
)]
pub async fn dataset_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(DatasetInfoResponse {
        source: state.data_source.to_string(),
        summary: state.analytics_service.dataset_summary(),
    })
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/dataset", get(dataset_handler))
}
