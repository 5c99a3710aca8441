//! REST endpoint handlers organized by dashboard widget.

pub mod dashboard;
pub mod sales;
pub mod system;
pub mod trends;

use axum::Router;

use crate::app_state::AppState;

/// Composes all query routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(sales::routes())
        .merge(trends::routes())
        .merge(dashboard::routes())
}
