//! # sales-analytics
//!
//! REST backend for a sales analytics dashboard.
//!
//! Raw transaction records (a JSON array with `DATE`, `Months`, and
//! `GROSS AMT` fields) are grouped by day and by month and reduced into the
//! series behind four dashboard widgets: daily sales, monthly sales,
//! transaction counts, and revenue trends.
//!
//! ## Architecture
//!
//! ```text
//! Clients (dashboard front end)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── AnalyticsService (service/)
//!     │
//!     ├── metrics / grouping / date (domain/)
//!     │
//!     └── Dataset snapshot (JSON file, loaded once)
//! ```
//!
//! The domain layer is a family of pure functions; it can be used without
//! the HTTP stack:
//!
//! ```
//! use sales_analytics::domain::metrics;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"DATE": "01-02-23", "Months": "Jan-23", "GROSS AMT": "100"}),
//!     json!({"DATE": "01-02-23", "Months": "Jan-23", "GROSS AMT": "50"}),
//!     json!({"DATE": "bad-date", "Months": "Jan-23", "GROSS AMT": "999"}),
//! ];
//! let daily = metrics::daily_sales(&records);
//! assert_eq!(daily.len(), 1);
//! assert_eq!(daily[0].date, "2023-01-02");
//! assert_eq!(daily[0].total_sales, 150.0);
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
