//! sales-analytics server entry point.
//!
//! Loads the transaction dataset once, then serves the dashboard REST API.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sales_analytics::api;
use sales_analytics::app_state::AppState;
use sales_analytics::config::{AnalyticsConfig, LogFormat};
use sales_analytics::domain::Dataset;
use sales_analytics::service::AnalyticsService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AnalyticsConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting sales-analytics");

    // Load the record snapshot
    let dataset = Dataset::load(&config.data_path)
        .await
        .with_context(|| format!("loading dataset from {}", config.data_path.display()))?;
    let summary = dataset.summary();
    tracing::info!(
        records = summary.total_records,
        valid_dates = summary.valid_date_records,
        months = summary.distinct_months,
        "dataset ready"
    );

    // Build service layer
    let analytics_service = Arc::new(AnalyticsService::new(Arc::new(dataset)));

    // Build application state
    let app_state = AppState {
        analytics_service,
        data_source: Arc::from(config.data_path.display().to_string()),
    };

    let app = api::build_app(app_state, config.request_timeout);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
