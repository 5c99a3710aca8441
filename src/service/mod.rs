//! Service layer: query orchestration over the loaded dataset.
//!
//! [`AnalyticsService`] wraps an immutable dataset snapshot and delegates
//! every computation to the pure functions in [`crate::domain`].

pub mod analytics_service;

pub use analytics_service::{AnalyticsService, DashboardSnapshot, aggregate};
