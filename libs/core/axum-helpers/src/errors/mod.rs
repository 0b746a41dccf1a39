//! Structured error responses shared across services.

pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

// Error codes for observability and debugging
pub const CODE_VALIDATION: i32 = 1001;
pub const CODE_NOT_FOUND: i32 = 1004;

/// Standard error response structure.
///
/// Returned for infrastructure-level errors (validation failures, unknown
/// routes), providing consistent error information to clients:
/// - `error`: Machine-readable error identifier (e.g., "BadRequest")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
/// - `code`: Optional integer error code for logging/monitoring
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Request validation failed",
///   "details": { "name": [{ "code": "length" }] },
///   "code": 1001
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Optional integer error code for logging and monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}
