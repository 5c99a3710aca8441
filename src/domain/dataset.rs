//! Immutable snapshot of the transaction record sequence.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::metrics::valid_records;
use super::record::{DATE_FIELD, MONTH_FIELD, field, group_key};
use crate::error::AnalyticsError;

/// Ordered, read-only sequence of raw transaction records.
///
/// Built once from the source JSON and shared behind an `Arc`. Individual
/// records are never validated here; the metric queries tolerate any shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Value>,
}

/// Counts describing a loaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DatasetSummary {
    /// Number of entries in the source sequence.
    pub total_records: usize,
    /// Entries carrying a valid `DATE`.
    pub valid_date_records: usize,
    /// Distinct valid dates.
    pub distinct_dates: usize,
    /// Distinct month labels among valid-date records.
    pub distinct_months: usize,
}

impl Dataset {
    /// Wraps an already-decoded record sequence.
    #[must_use]
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Builds a dataset from any JSON document.
    ///
    /// Only a top-level array yields records. Every other shape (object,
    /// scalar, null) becomes an empty dataset.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(records) => Self::new(records),
            other => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "record source is not an array; treating as empty"
                );
                Self::default()
            }
        }
    }

    /// Reads and decodes a JSON dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::DatasetIo`] if the file cannot be read and
    /// [`AnalyticsError::DatasetParse`] if it is not valid JSON.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AnalyticsError> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .map_err(|source| AnalyticsError::DatasetIo {
                path: path.display().to_string(),
                source,
            })?;
        let value: Value =
            serde_json::from_slice(&raw).map_err(|source| AnalyticsError::DatasetParse {
                path: path.display().to_string(),
                source,
            })?;

        let dataset = Self::from_value(value);
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Records in source order.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Computes record and key counts.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        let valid = valid_records(&self.records);
        let dates: HashSet<&str> = valid
            .iter()
            .filter_map(|r| field(r, DATE_FIELD).and_then(Value::as_str))
            .collect();
        let months: HashSet<String> = valid
            .iter()
            .filter_map(|r| field(r, MONTH_FIELD).and_then(group_key))
            .collect();

        DatasetSummary {
            total_records: self.records.len(),
            valid_date_records: valid.len(),
            distinct_dates: dates.len(),
            distinct_months: months.len(),
        }
    }
}

impl From<Vec<Value>> for Dataset {
    fn from(records: Vec<Value>) -> Self {
        Self::new(records)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
