//! OpenAPI document covering every REST endpoint.

use utoipa::OpenApi;

use super::dto::DatasetInfoResponse;
use super::handlers::{dashboard, sales, system, trends};
use crate::domain::chart::{ChartDataset, ChartKind, ChartPayload, ChartWidget};
use crate::domain::metrics::{
    DailyRevenue, DailySales, DailyTransactions, MonthlyRevenue, MonthlySales,
    MonthlyTransactions, RevenueTrends, TransactionSummary,
};
use crate::domain::DatasetSummary;
use crate::error::{ErrorBody, ErrorResponse};
use crate::service::DashboardSnapshot;

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "sales-analytics",
        description = "Daily and monthly sales aggregates for the sales dashboard."
    ),
    paths(
        sales::daily_sales,
        sales::monthly_sales,
        trends::transactions,
        trends::revenue_trends,
        dashboard::dashboard,
        dashboard::charts,
        dashboard::chart,
        dashboard::aggregate_records,
        system::health_handler,
        system::dataset_handler,
    ),
    components(schemas(
        DailySales,
        MonthlySales,
        DailyTransactions,
        MonthlyTransactions,
        TransactionSummary,
        DailyRevenue,
        MonthlyRevenue,
        RevenueTrends,
        DashboardSnapshot,
        ChartWidget,
        ChartKind,
        ChartDataset,
        ChartPayload,
        DatasetSummary,
        DatasetInfoResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Sales", description = "Daily and monthly sales totals"),
        (name = "Trends", description = "Transaction counts and revenue series"),
        (name = "Dashboard", description = "Composite dashboard and chart payloads"),
        (name = "System", description = "Health and dataset info"),
    )
)]
pub struct ApiDoc;
