//! Response DTOs for the record endpoint API
//!
//! Defines the response envelope used for every outcome: success bodies,
//! the not-found envelope, and the method-not-allowed envelope all share
//! the same three top-level fields.

use serde::Serialize;
use serde_json::Value;

/// The three-field wrapper carried by every client-facing response.
///
/// `responseError` is `null` on success; `responseResult` is `null` on
/// failure and carries the payload (or a confirmation string) otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Outcome status, mirrored by the transport status code
    pub response_status: u16,
    /// Error details, or null on success
    pub response_error: Option<ErrorBody>,
    /// Result payload, confirmation string, or null
    pub response_result: Value,
}

/// Error details nested under `responseError`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Machine-readable code, e.g. "NOT_FOUND"
    pub error_code: String,
    /// Human-readable message, e.g. "Not found"
    pub error_text: String,
}

impl Envelope {
    /// Creates a 200 envelope wrapping the given result.
    pub fn ok(result: impl Into<Value>) -> Self {
        Self {
            response_status: 200,
            response_error: None,
            response_result: result.into(),
        }
    }

    /// Creates a failure envelope with a null result.
    pub fn error(status: u16, code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            response_status: status,
            response_error: Some(ErrorBody {
                error_code: code.into(),
                error_text: text.into(),
            }),
            response_result: Value::Null,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
