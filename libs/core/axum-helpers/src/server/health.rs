use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

/// Liveness response body. The wire shape is load-bearing: monitoring
/// integrations match `{"status": "healthy"}` literally.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint handler.
///
/// Always returns 200 while the process is running; it checks nothing
/// beyond the ability to serve a request.
pub async fn health_handler() -> Response {
    let response = HealthResponse { status: "healthy" };

    (StatusCode::OK, Json(response)).into_response()
}

/// Creates a router with the /health endpoint.
///
/// Use this to add liveness checks to your app.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
///
/// let app = Router::new().merge(health_router());
/// ```
pub fn health_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
