//! Domain layer: record access, date validation, grouping, and metrics.
//!
//! Everything here is synchronous and pure. Queries take a borrowed record
//! slice, never fail, and absorb malformed records locally (invalid dates
//! are excluded, unparseable amounts count as zero).

pub mod chart;
pub mod dataset;
pub mod date;
pub mod grouping;
pub mod metrics;
pub mod record;

pub use chart::{ChartPayload, ChartWidget};
pub use dataset::{Dataset, DatasetSummary};
pub use date::{format_date, is_valid_date};
pub use grouping::{Bucket, Buckets, group_by};
pub use metrics::{
    DailyRevenue, DailySales, DailyTransactions, MonthlyRevenue, MonthlySales,
    MonthlyTransactions, RevenueTrends, TransactionSummary,
};
