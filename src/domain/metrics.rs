//! Derived sales metrics over a record sequence.
//!
//! Every query filters the full sequence down to records with a valid
//! `DATE`, then groups and reduces. This prefilter also applies to the
//! month-keyed outputs even though they group on `Months`: a record with a
//! good month label but a malformed date is absent from monthly totals.
//!
//! All functions are pure. Output rows follow bucket order (first
//! occurrence in the filtered input) and are never re-sorted.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::date::{format_date, is_valid_date_value};
use super::grouping::{Buckets, group_by};
use super::record::{DATE_FIELD, MONTH_FIELD, field, gross_amount};

/// Total sales for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Sum of gross amounts.
    pub total_sales: f64,
}

/// Total sales for one month label.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    /// Month label as found in the records.
    pub month: String,
    /// Sum of gross amounts.
    pub total_sales: f64,
}

/// Transaction count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DailyTransactions {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Number of records on that day.
    pub transactions: usize,
}

/// Transaction count for one month label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthlyTransactions {
    /// Month label as found in the records.
    pub month: String,
    /// Number of records in that month.
    pub transactions: usize,
}

/// Daily and monthly transaction counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    /// Per-day counts.
    pub daily_transactions: Vec<DailyTransactions>,
    /// Per-month counts.
    pub monthly_transactions: Vec<MonthlyTransactions>,
}

/// Revenue for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyRevenue {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Sum of gross amounts.
    pub revenue: f64,
}

/// Revenue for one month label.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyRevenue {
    /// Month label as found in the records.
    pub month: String,
    /// Sum of gross amounts.
    pub revenue: f64,
}

/// Daily and monthly revenue series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTrends {
    /// Per-day revenue.
    pub daily_revenue: Vec<DailyRevenue>,
    /// Per-month revenue.
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

/// Records whose `DATE` field passes validation, in source order.
#[must_use]
pub fn valid_records(records: &[Value]) -> Vec<&Value> {
    records
        .iter()
        .filter(|r| is_valid_date_value(field(r, DATE_FIELD)))
        .collect()
}

fn sum_amounts(records: &[&Value]) -> f64 {
    records.iter().fold(0.0, |total, r| total + gross_amount(r))
}

/// Maps daily buckets to rows keyed by ISO date.
fn daily_rows<T>(buckets: &Buckets<'_>, reduce: impl Fn(String, &[&Value]) -> T) -> Vec<T> {
    buckets
        .iter()
        .filter_map(|b| format_date(&b.key).map(|date| reduce(date, b.records.as_slice())))
        .collect()
}

fn monthly_rows<T>(buckets: &Buckets<'_>, reduce: impl Fn(String, &[&Value]) -> T) -> Vec<T> {
    buckets
        .iter()
        .map(|b| reduce(b.key.clone(), b.records.as_slice()))
        .collect()
}

/// Total gross sales per valid date.
#[must_use]
pub fn daily_sales(records: &[Value]) -> Vec<DailySales> {
    let valid = valid_records(records);
    daily_rows(&group_by(valid.iter().copied(), DATE_FIELD), |date, items| DailySales {
        date,
        total_sales: sum_amounts(items),
    })
}

/// Total gross sales per month label, over valid-date records only.
#[must_use]
pub fn monthly_sales(records: &[Value]) -> Vec<MonthlySales> {
    let valid = valid_records(records);
    monthly_rows(&group_by(valid.iter().copied(), MONTH_FIELD), |month, items| {
        MonthlySales {
            month,
            total_sales: sum_amounts(items),
        }
    })
}

/// Record counts per valid date and per month label.
///
/// Records with a missing or malformed amount are still counted.
#[must_use]
pub fn transactions(records: &[Value]) -> TransactionSummary {
    let valid = valid_records(records);
    let daily = group_by(valid.iter().copied(), DATE_FIELD);
    let monthly = group_by(valid.iter().copied(), MONTH_FIELD);

    TransactionSummary {
        daily_transactions: daily_rows(&daily, |date, items| DailyTransactions {
            date,
            transactions: items.len(),
        }),
        monthly_transactions: monthly_rows(&monthly, |month, items| MonthlyTransactions {
            month,
            transactions: items.len(),
        }),
    }
}

/// Gross revenue per valid date and per month label.
#[must_use]
pub fn revenue_trends(records: &[Value]) -> RevenueTrends {
    let valid = valid_records(records);
    let daily = group_by(valid.iter().copied(), DATE_FIELD);
    let monthly = group_by(valid.iter().copied(), MONTH_FIELD);

    RevenueTrends {
        daily_revenue: daily_rows(&daily, |date, items| DailyRevenue {
            date,
            revenue: sum_amounts(items),
        }),
        monthly_revenue: monthly_rows(&monthly, |month, items| MonthlyRevenue {
            month,
            revenue: sum_amounts(items),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![
            json!({"DATE": "01-02-23", "Months": "Jan-23", "GROSS AMT": "100"}),
            json!({"DATE": "01-02-23", "Months": "Jan-23", "GROSS AMT": "50"}),
            json!({"DATE": "bad-date", "Months": "Jan-23", "GROSS AMT": "999"}),
        ]
    }

    #[test]
    fn daily_sales_excludes_malformed_dates() {
        assert_eq!(
            daily_sales(&sample()),
            vec![DailySales {
                date: "2023-01-02".to_string(),
                total_sales: 150.0,
            }]
        );
    }

    #[test]
    fn monthly_sales_drops_records_with_invalid_date_even_with_good_month() {
        let rows = monthly_sales(&sample());
        assert_eq!(
            rows,
            vec![MonthlySales {
                month: "Jan-23".to_string(),
                total_sales: 150.0,
            }]
        );
    }

    #[test]
    fn malformed_amount_sums_to_zero_but_is_counted() {
        let records = vec![
            json!({"DATE": "03-01-22", "Months": "Mar-22", "GROSS AMT": "abc"}),
            json!({"DATE": "03-01-22", "Months": "Mar-22"}),
            json!({"DATE": "03-01-22", "Months": "Mar-22", "GROSS AMT": "20"}),
        ];

        let sales = daily_sales(&records);
        assert_eq!(sales.first().map(|r| r.total_sales), Some(20.0));
        assert!(sales.iter().all(|r| r.total_sales.is_finite()));

        let tx = transactions(&records);
        assert_eq!(tx.daily_transactions.first().map(|r| r.transactions), Some(3));
        assert_eq!(tx.monthly_transactions.first().map(|r| r.transactions), Some(3));
    }

    #[test]
    fn empty_input_yields_empty_shapes() {
        assert!(daily_sales(&[]).is_empty());
        assert!(monthly_sales(&[]).is_empty());
        assert_eq!(transactions(&[]), TransactionSummary::default());
        assert_eq!(revenue_trends(&[]), RevenueTrends::default());
    }

    #[test]
    fn dual_shapes_always_serialize_both_lists() {
        let tx = serde_json::to_value(transactions(&[])).ok();
        assert_eq!(
            tx,
            Some(json!({"dailyTransactions": [], "monthlyTransactions": []}))
        );
        let rev = serde_json::to_value(revenue_trends(&[])).ok();
        assert_eq!(rev, Some(json!({"dailyRevenue": [], "monthlyRevenue": []})));
    }

    #[test]
    fn rows_serialize_with_chart_field_names() {
        let rows = serde_json::to_value(daily_sales(&sample())).ok();
        assert_eq!(
            rows,
            Some(json!([{"date": "2023-01-02", "totalSales": 150.0}]))
        );
    }

    #[test]
    fn output_follows_first_occurrence_order() {
        let records = vec![
            json!({"DATE": "02-10-22", "Months": "Feb-22", "GROSS AMT": 1}),
            json!({"DATE": "bad", "Months": "Dec-21", "GROSS AMT": 1}),
            json!({"DATE": "01-05-22", "Months": "Jan-22", "GROSS AMT": 2}),
            json!({"DATE": "02-10-22", "Months": "Feb-22", "GROSS AMT": 3}),
            json!({"DATE": "03-01-22", "Months": "Mar-22", "GROSS AMT": 4}),
        ];

        let trends = revenue_trends(&records);
        let days: Vec<&str> = trends.daily_revenue.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(days, ["2022-02-10", "2022-01-05", "2022-03-01"]);
        let months: Vec<&str> = trends
            .monthly_revenue
            .iter()
            .map(|r| r.month.as_str())
            .collect();
        assert_eq!(months, ["Feb-22", "Jan-22", "Mar-22"]);
        assert_eq!(trends.daily_revenue.first().map(|r| r.revenue), Some(4.0));
    }

    #[test]
    fn revenue_matches_sales_totals() {
        let records = sample();
        let trends = revenue_trends(&records);
        let daily: Vec<f64> = daily_sales(&records).iter().map(|r| r.total_sales).collect();
        let revenue: Vec<f64> = trends.daily_revenue.iter().map(|r| r.revenue).collect();
        assert_eq!(daily, revenue);
    }

    #[test]
    fn records_without_month_are_left_out_of_monthly_rows_only() {
        let records = vec![
            json!({"DATE": "05-05-22", "GROSS AMT": "10"}),
            json!({"DATE": "05-05-22", "Months": "May-22", "GROSS AMT": "5"}),
        ];
        let tx = transactions(&records);
        assert_eq!(tx.daily_transactions.first().map(|r| r.transactions), Some(2));
        assert_eq!(tx.monthly_transactions.first().map(|r| r.transactions), Some(1));
    }

    #[test]
    fn integer_like_month_labels_keep_first_seen_order() {
        let records = vec![
            json!({"DATE": "10-01-22", "Months": "10", "GROSS AMT": "1"}),
            json!({"DATE": "02-01-22", "Months": "2", "GROSS AMT": "2"}),
            json!({"DATE": "01-01-22", "Months": "Jan-22", "GROSS AMT": "3"}),
            json!({"DATE": "02-02-22", "Months": 2, "GROSS AMT": "4"}),
        ];
        let rows = monthly_sales(&records);
        let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, ["10", "2", "Jan-22"]);
        assert_eq!(rows.get(1).map(|r| r.total_sales), Some(6.0));
    }

    #[test]
    fn negative_zero_amounts_total_positive_zero() {
        let records = vec![json!({"DATE": "01-02-23", "GROSS AMT": "-0"})];
        let value = serde_json::to_value(daily_sales(&records)).ok();
        assert_eq!(value, Some(json!([{"date": "2023-01-02", "totalSales": 0.0}])));
        let total = daily_sales(&records).first().map(|r| r.total_sales);
        assert!(matches!(total, Some(t) if t.is_sign_positive()));
    }

    #[test]
    fn queries_are_idempotent() {
        let records = sample();
        assert_eq!(daily_sales(&records), daily_sales(&records));
        assert_eq!(monthly_sales(&records), monthly_sales(&records));
        assert_eq!(transactions(&records), transactions(&records));
        assert_eq!(revenue_trends(&records), revenue_trends(&records));
    }
}
