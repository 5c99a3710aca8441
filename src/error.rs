//! Service error types with HTTP status code mapping.
//!
//! Aggregation queries never fail: malformed records are excluded or
//! zero-filled inside the domain layer. [`AnalyticsError`] covers the
//! boundary instead: loading the dataset, reading configuration, and
//! rejecting HTTP requests that cannot be routed or decoded.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "unknown chart widget: pie",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Service error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// Request body could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Chart widget id does not name a known widget.
    #[error("unknown chart widget: {0}")]
    UnknownWidget(String),

    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    DatasetIo {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The dataset file is not valid JSON.
    #[error("failed to parse dataset {path}: {source}")]
    DatasetParse {
        /// Path that was parsed.
        path: String,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AnalyticsError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::UnknownWidget(_) => 2001,
            Self::DatasetIo { .. } => 3001,
            Self::DatasetParse { .. } => 3002,
            Self::InvalidConfig(_) => 3003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnknownWidget(_) => StatusCode::NOT_FOUND,
            Self::DatasetIo { .. } | Self::DatasetParse { .. } | Self::InvalidConfig(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AnalyticsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
