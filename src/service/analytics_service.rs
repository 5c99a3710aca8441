//! Analytics service: answers dashboard queries over a dataset snapshot.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::chart::{
    ChartPayload, ChartWidget, daily_sales_chart, monthly_sales_chart, revenue_chart,
    transactions_chart,
};
use crate::domain::metrics::{
    self, DailySales, MonthlySales, RevenueTrends, TransactionSummary,
};
use crate::domain::{Dataset, DatasetSummary};

/// All four widget outputs computed over the same records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Per-day sales totals.
    pub daily_sales: Vec<DailySales>,
    /// Per-month sales totals.
    pub monthly_sales: Vec<MonthlySales>,
    /// Daily and monthly transaction counts.
    pub transactions: TransactionSummary,
    /// Daily and monthly revenue.
    pub revenue_trends: RevenueTrends,
}

impl DashboardSnapshot {
    /// Chart payloads for every widget, in dashboard layout order.
    #[must_use]
    pub fn charts(&self) -> Vec<ChartPayload> {
        ChartWidget::ALL.into_iter().map(|w| self.chart(w)).collect()
    }

    /// Chart payload for a single widget.
    #[must_use]
    pub fn chart(&self, widget: ChartWidget) -> ChartPayload {
        match widget {
            ChartWidget::DailySales => daily_sales_chart(&self.daily_sales),
            ChartWidget::MonthlySales => monthly_sales_chart(&self.monthly_sales),
            ChartWidget::Transactions => transactions_chart(&self.transactions),
            ChartWidget::RevenueTrends => revenue_chart(&self.revenue_trends),
        }
    }
}

/// Computes every dashboard output for records supplied at call time.
///
/// Each output re-derives its own grouping from `records`.
#[must_use]
pub fn aggregate(records: &[Value]) -> DashboardSnapshot {
    DashboardSnapshot {
        daily_sales: metrics::daily_sales(records),
        monthly_sales: metrics::monthly_sales(records),
        transactions: metrics::transactions(records),
        revenue_trends: metrics::revenue_trends(records),
    }
}

/// Query layer over an immutable [`Dataset`].
///
/// Holds no mutable state: every call recomputes from the snapshot, so the
/// service is freely shared across request handlers.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    dataset: Arc<Dataset>,
}

impl AnalyticsService {
    /// Creates a service over the given snapshot.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Returns the underlying dataset.
    #[must_use]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Total sales per day.
    #[must_use]
    pub fn daily_sales(&self) -> Vec<DailySales> {
        let rows = metrics::daily_sales(self.dataset.records());
        tracing::debug!(rows = rows.len(), "daily sales computed");
        rows
    }

    /// Total sales per month label.
    #[must_use]
    pub fn monthly_sales(&self) -> Vec<MonthlySales> {
        let rows = metrics::monthly_sales(self.dataset.records());
        tracing::debug!(rows = rows.len(), "monthly sales computed");
        rows
    }

    /// Transaction counts per day and per month.
    #[must_use]
    pub fn transactions(&self) -> TransactionSummary {
        let summary = metrics::transactions(self.dataset.records());
        tracing::debug!(
            daily = summary.daily_transactions.len(),
            monthly = summary.monthly_transactions.len(),
            "transactions computed"
        );
        summary
    }

    /// Revenue per day and per month.
    #[must_use]
    pub fn revenue_trends(&self) -> RevenueTrends {
        let trends = metrics::revenue_trends(self.dataset.records());
        tracing::debug!(
            daily = trends.daily_revenue.len(),
            monthly = trends.monthly_revenue.len(),
            "revenue trends computed"
        );
        trends
    }

    /// All four outputs at once.
    #[must_use]
    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            daily_sales: self.daily_sales(),
            monthly_sales: self.monthly_sales(),
            transactions: self.transactions(),
            revenue_trends: self.revenue_trends(),
        }
    }

    /// Chart payload for one widget. Only the metric that widget needs is
    /// computed.
    #[must_use]
    pub fn chart(&self, widget: ChartWidget) -> ChartPayload {
        match widget {
            ChartWidget::DailySales => daily_sales_chart(&self.daily_sales()),
            ChartWidget::MonthlySales => monthly_sales_chart(&self.monthly_sales()),
            ChartWidget::Transactions => transactions_chart(&self.transactions()),
            ChartWidget::RevenueTrends => revenue_chart(&self.revenue_trends()),
        }
    }

    /// Chart payloads for every widget, in dashboard layout order.
    #[must_use]
    pub fn charts(&self) -> Vec<ChartPayload> {
        self.dashboard().charts()
    }

    /// Record and key counts for the snapshot.
    #[must_use]
    pub fn dataset_summary(&self) -> DatasetSummary {
        self.dataset.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_service() -> AnalyticsService {
        let dataset = Dataset::from(vec![
            json!({"DATE": "04-30-22", "Months": "Apr-22", "GROSS AMT": "647.62"}),
            json!({"DATE": "04-30-22", "Months": "Apr-22", "GROSS AMT": "406"}),
            json!({"DATE": "05-01-22", "Months": "May-22", "GROSS AMT": 329}),
            json!({"DATE": "05-01-22", "Months": "May-22", "GROSS AMT": "n/a"}),
            json!({"DATE": "5/1/22", "Months": "May-22", "GROSS AMT": "1000"}),
            json!(null),
        ]);
        AnalyticsService::new(Arc::new(dataset))
    }

    #[test]
    fn daily_sales_over_snapshot() {
        let rows = make_service().daily_sales();
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2022-04-30", "2022-05-01"]);
        assert_eq!(rows.get(1).map(|r| r.total_sales), Some(329.0));
    }

    #[test]
    fn monthly_sales_skip_invalid_date_rows() {
        let rows = make_service().monthly_sales();
        assert_eq!(
            rows.last(),
            Some(&MonthlySales {
                month: "May-22".to_string(),
                total_sales: 329.0,
            })
        );
    }

    #[test]
    fn transactions_count_unparseable_amounts() {
        let summary = make_service().transactions();
        let counts: Vec<usize> = summary
            .monthly_transactions
            .iter()
            .map(|r| r.transactions)
            .collect();
        assert_eq!(counts, [2, 2]);
    }

    #[test]
    fn dashboard_matches_individual_queries() {
        let service = make_service();
        let snapshot = service.dashboard();
        assert_eq!(snapshot.daily_sales, service.daily_sales());
        assert_eq!(snapshot.monthly_sales, service.monthly_sales());
        assert_eq!(snapshot.transactions, service.transactions());
        assert_eq!(snapshot.revenue_trends, service.revenue_trends());
        assert_eq!(snapshot, aggregate(service.dataset().records()));
    }

    #[test]
    fn charts_follow_layout_order() {
        let service = make_service();
        let widgets: Vec<ChartWidget> = service.charts().iter().map(|c| c.widget).collect();
        assert_eq!(widgets, ChartWidget::ALL);
        assert_eq!(
            service.chart(ChartWidget::RevenueTrends),
            service.dashboard().chart(ChartWidget::RevenueTrends)
        );
    }

    #[test]
    fn empty_snapshot_yields_empty_shapes() {
        let service = AnalyticsService::new(Arc::new(Dataset::from_value(json!({"oops": 1}))));
        assert_eq!(service.dashboard(), DashboardSnapshot::default());
        assert!(service.charts().iter().all(ChartPayload::is_empty));
        assert_eq!(service.dataset_summary(), DatasetSummary::default());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let service = make_service();
        assert_eq!(service.dashboard(), service.dashboard());
    }
}
