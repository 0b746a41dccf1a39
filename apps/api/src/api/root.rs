//! Root greeting endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

/// Greeting body served at `/`. The message text is part of the public
/// contract; clients match it literally.
#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Hello World! Welcome to FastAPI")]
    pub message: &'static str,
}

/// Root greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Greeting message", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World! Welcome to FastAPI",
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}
