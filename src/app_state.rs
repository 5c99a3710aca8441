//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::AnalyticsService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Analytics service for all dashboard queries.
    pub analytics_service: Arc<AnalyticsService>,
    /// Where the dataset was loaded from, reported by `/config/dataset`.
    pub data_source: Arc<str>,
}
