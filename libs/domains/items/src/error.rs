use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{CODE_VALIDATION, ErrorResponse};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Wire shape of the not-found response. Existing clients match this body
/// literally, so it is kept as-is; the status code is 404 rather than the
/// 200 the legacy service returned.
#[derive(Serialize, ToSchema)]
pub struct ItemNotFound {
    #[schema(example = "Item not found")]
    pub error: &'static str,
}

impl ItemNotFound {
    pub fn body() -> Self {
        Self {
            error: "Item not found",
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            ItemError::NotFound(id) => {
                tracing::info!(item_id = id, "Item not found");
                (StatusCode::NOT_FOUND, Json(ItemNotFound::body())).into_response()
            }
            ItemError::Validation(msg) => {
                tracing::info!("Validation error: {}", msg);
                let body = ErrorResponse {
                    error: "BadRequest".to_string(),
                    message: msg,
                    details: None,
                    code: Some(CODE_VALIDATION),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}
