//! Chart-ready series for the four dashboard widgets.
//!
//! Payloads carry ordered labels and numeric datasets only; drawing is left
//! to the front end.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use super::metrics::{DailySales, MonthlySales, RevenueTrends, TransactionSummary};
use crate::error::AnalyticsError;

/// Dashboard widget identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ChartWidget {
    /// Per-day sales totals.
    DailySales,
    /// Per-month sales totals.
    MonthlySales,
    /// Daily vs monthly transaction counts.
    Transactions,
    /// Daily vs monthly revenue.
    RevenueTrends,
}

impl ChartWidget {
    /// All widgets in dashboard layout order.
    pub const ALL: [Self; 4] = [
        Self::DailySales,
        Self::MonthlySales,
        Self::Transactions,
        Self::RevenueTrends,
    ];

    /// Stable kebab-case id used in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DailySales => "daily-sales",
            Self::MonthlySales => "monthly-sales",
            Self::Transactions => "transactions",
            Self::RevenueTrends => "revenue-trends",
        }
    }
}

impl fmt::Display for ChartWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartWidget {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| AnalyticsError::UnknownWidget(s.to_string()))
    }
}

/// Rendering style hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Line chart.
    Line,
    /// Bar chart.
    Bar,
}

/// One named numeric series.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    /// Legend label.
    pub label: String,
    /// Values, positionally aligned with the payload labels.
    pub data: Vec<f64>,
    /// Y axis this series is plotted against (dual-axis widgets only).
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

/// Labels plus datasets for one widget.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    /// Widget this payload feeds.
    pub widget: ChartWidget,
    /// Rendering style hint.
    pub kind: ChartKind,
    /// Chart title.
    pub title: String,
    /// X axis labels.
    pub labels: Vec<String>,
    /// Series to plot.
    pub datasets: Vec<ChartDataset>,
    /// Placeholder text when there is nothing to plot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl ChartPayload {
    fn new(widget: ChartWidget, kind: ChartKind, title: &str) -> Self {
        Self {
            widget,
            kind,
            title: title.to_string(),
            labels: Vec::new(),
            datasets: Vec::new(),
            empty_message: None,
        }
    }

    fn empty(mut self, message: &str) -> Self {
        self.empty_message = Some(message.to_string());
        self
    }

    /// Returns `true` if the widget should show its placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty_message.is_some()
    }
}

fn series(label: &str, data: Vec<f64>, y_axis_id: Option<&str>) -> ChartDataset {
    ChartDataset {
        label: label.to_string(),
        data,
        y_axis_id: y_axis_id.map(str::to_string),
    }
}

const NO_SALES: &str = "No sales data available";

/// Line chart of per-day sales.
#[must_use]
pub fn daily_sales_chart(rows: &[DailySales]) -> ChartPayload {
    let chart = ChartPayload::new(
        ChartWidget::DailySales,
        ChartKind::Line,
        "Daily Sales Overview",
    );
    if rows.is_empty() {
        return chart.empty(NO_SALES);
    }
    ChartPayload {
        labels: rows.iter().map(|r| r.date.clone()).collect(),
        datasets: vec![series(
            "Daily Sales",
            rows.iter().map(|r| r.total_sales).collect(),
            None,
        )],
        ..chart
    }
}

/// Bar chart of per-month sales.
#[must_use]
pub fn monthly_sales_chart(rows: &[MonthlySales]) -> ChartPayload {
    let chart = ChartPayload::new(
        ChartWidget::MonthlySales,
        ChartKind::Bar,
        "Monthly Sales Overview",
    );
    if rows.is_empty() {
        return chart.empty(NO_SALES);
    }
    ChartPayload {
        labels: rows.iter().map(|r| r.month.clone()).collect(),
        datasets: vec![series(
            "Monthly Sales",
            rows.iter().map(|r| r.total_sales).collect(),
            None,
        )],
        ..chart
    }
}

/// Dual-axis line chart labelled by month.
///
/// The daily series is truncated to the number of months so both series
/// share the label axis.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn transactions_chart(summary: &TransactionSummary) -> ChartPayload {
    let chart = ChartPayload::new(
        ChartWidget::Transactions,
        ChartKind::Line,
        "Transaction Overview",
    );
    let months = &summary.monthly_transactions;
    if months.is_empty() || summary.daily_transactions.is_empty() {
        return chart.empty("No transaction data available");
    }
    ChartPayload {
        labels: months.iter().map(|r| r.month.clone()).collect(),
        datasets: vec![
            series(
                "Daily Transactions",
                summary
                    .daily_transactions
                    .iter()
                    .take(months.len())
                    .map(|r| r.transactions as f64)
                    .collect(),
                Some("y"),
            ),
            series(
                "Monthly Transactions",
                months.iter().map(|r| r.transactions as f64).collect(),
                Some("y1"),
            ),
        ],
        ..chart
    }
}

/// Dual-axis bar chart labelled by month. The daily series is not truncated.
#[must_use]
pub fn revenue_chart(trends: &RevenueTrends) -> ChartPayload {
    let chart = ChartPayload::new(
        ChartWidget::RevenueTrends,
        ChartKind::Bar,
        "Revenue Overview",
    );
    if trends.daily_revenue.is_empty() || trends.monthly_revenue.is_empty() {
        return chart.empty("No revenue data available");
    }
    ChartPayload {
        labels: trends
            .monthly_revenue
            .iter()
            .map(|r| r.month.clone())
            .collect(),
        datasets: vec![
            series(
                "Daily Revenue",
                trends.daily_revenue.iter().map(|r| r.revenue).collect(),
                Some("y"),
            ),
            series(
                "Monthly Revenue",
                trends.monthly_revenue.iter().map(|r| r.revenue).collect(),
                Some("y1"),
            ),
        ],
        ..chart
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::metrics::{self, DailyTransactions, MonthlyTransactions};
    use serde_json::json;

    #[test]
    fn widget_ids_round_trip_through_from_str() {
        for widget in ChartWidget::ALL {
            let parsed: Result<ChartWidget, _> = widget.as_str().parse();
            assert!(matches!(parsed, Ok(w) if w == widget));
        }
        let unknown: Result<ChartWidget, _> = "pie".parse();
        assert!(matches!(unknown, Err(AnalyticsError::UnknownWidget(id)) if id == "pie"));
    }

    #[test]
    fn daily_chart_uses_row_order() {
        let records = vec![
            json!({"DATE": "02-01-22", "GROSS AMT": "5"}),
            json!({"DATE": "01-01-22", "GROSS AMT": "7"}),
        ];
        let chart = daily_sales_chart(&metrics::daily_sales(&records));
        assert_eq!(chart.labels, ["2022-02-01", "2022-01-01"]);
        assert_eq!(chart.datasets.first().map(|d| d.data.clone()), Some(vec![5.0, 7.0]));
        assert!(!chart.is_empty());
    }

    #[test]
    fn empty_rows_produce_placeholder() {
        let chart = monthly_sales_chart(&[]);
        assert!(chart.is_empty());
        assert!(chart.labels.is_empty());
        assert!(chart.datasets.is_empty());
        assert_eq!(chart.empty_message.as_deref(), Some(NO_SALES));
    }

    #[test]
    fn transactions_chart_truncates_daily_series_to_months() {
        let summary = TransactionSummary {
            daily_transactions: (1..=3)
                .map(|d| DailyTransactions {
                    date: format!("2022-01-0{d}"),
                    transactions: d,
                })
                .collect(),
            monthly_transactions: vec![MonthlyTransactions {
                month: "Jan-22".to_string(),
                transactions: 6,
            }],
        };
        let chart = transactions_chart(&summary);
        assert_eq!(chart.labels, ["Jan-22"]);
        let Some(daily) = chart.datasets.first() else {
            panic!("missing daily series");
        };
        assert_eq!(daily.data, [1.0]);
        assert_eq!(daily.y_axis_id.as_deref(), Some("y"));
        let Some(monthly) = chart.datasets.get(1) else {
            panic!("missing monthly series");
        };
        assert_eq!(monthly.data, [6.0]);
        assert_eq!(monthly.y_axis_id.as_deref(), Some("y1"));
    }

    #[test]
    fn dual_charts_are_empty_when_either_side_is_empty() {
        let summary = TransactionSummary {
            daily_transactions: vec![DailyTransactions {
                date: "2022-01-01".to_string(),
                transactions: 1,
            }],
            monthly_transactions: Vec::new(),
        };
        assert!(transactions_chart(&summary).is_empty());
        assert!(revenue_chart(&RevenueTrends::default()).is_empty());
    }

    #[test]
    fn revenue_chart_keeps_full_daily_series() {
        let records = vec![
            json!({"DATE": "01-01-22", "Months": "Jan-22", "GROSS AMT": 1}),
            json!({"DATE": "01-02-22", "Months": "Jan-22", "GROSS AMT": 2}),
        ];
        let chart = revenue_chart(&metrics::revenue_trends(&records));
        assert_eq!(chart.labels, ["Jan-22"]);
        assert_eq!(chart.datasets.first().map(|d| d.data.len()), Some(2));
        assert_eq!(chart.kind, ChartKind::Bar);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let chart = transactions_chart(&TransactionSummary::default());
        let value = serde_json::to_value(&chart).ok();
        assert_eq!(
            value,
            Some(json!({
                "widget": "transactions",
                "kind": "line",
                "title": "Transaction Overview",
                "labels": [],
                "datasets": [],
                "emptyMessage": "No transaction data available"
            }))
        );
    }
}
