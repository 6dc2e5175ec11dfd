//! Response types for the Travel Cost Engine API.
//!
//! This module defines the success body for the company tree endpoint and
//! the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::CompanyNode;

/// Success body for the `/company-tree` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyTreeResponse {
    /// The cost-annotated company forest.
    pub companies: Vec<CompanyNode>,
    /// How long retrieval and calculation took, reported separately: the
    /// retrieval half depends on the network, the calculation half on the
    /// local machine.
    pub timing: TimingBreakdown,
}

/// Wall-clock timing for one request, split by phase.
#[derive(Debug, Clone, Serialize)]
pub struct TimingBreakdown {
    /// Milliseconds spent fetching the two record sets.
    pub retrieval_ms: f64,
    /// Milliseconds spent in the aggregation pipeline.
    pub calculation_ms: f64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::HttpClient { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "HTTP_CLIENT_ERROR",
                    "Failed to build HTTP client",
                    message,
                ),
            },
            EngineError::FetchFailed { url, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "UPSTREAM_UNAVAILABLE",
                    format!("Failed to fetch '{}'", url),
                    message,
                ),
            },
            EngineError::InvalidPayload { dataset, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "UPSTREAM_PAYLOAD_INVALID",
                    format!("Invalid {} payload", dataset),
                    message,
                ),
            },
            EngineError::MalformedRecord {
                dataset,
                index,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "MALFORMED_RECORD",
                    format!("Malformed {} record at index {}", dataset, index),
                    message,
                ),
            },
            EngineError::HierarchyCycle { company_ids } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "HIERARCHY_CYCLE",
                    "Company hierarchy contains a cycle",
                    format!("Companies involved: {}", company_ids),
                ),
            },
        }
    }
}
