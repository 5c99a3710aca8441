//! Dataset description returned by the system endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DatasetSummary;

/// Response body for `GET /config/dataset`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatasetInfoResponse {
    /// Where the records were loaded from.
    pub source: String,
    /// Record and key counts.
    #[serde(flatten)]
    pub summary: DatasetSummary,
}
