use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::ValidatedJson;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::{ItemNotFound, ItemResult};
use crate::models::{Item, ItemPayload};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(
        Item,
        ItemPayload,
        ItemListResponse,
        ItemDeletedResponse,
        ItemNotFound
    )),
    tags(
        (name = "Items", description = "Item management endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Response wrapper for the item list
#[derive(Serialize, ToSchema)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
}

/// Response for a successful delete: a confirmation message plus the
/// removed snapshot
#[derive(Serialize, ToSchema)]
pub struct ItemDeletedResponse {
    #[schema(example = "Item 1 deleted")]
    pub message: String,
    pub deleted_item: Item,
}

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// List all items in insertion order
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All items, wrapped in an `items` array", body = ItemListResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ItemListResponse>> {
    let items = service.list_items().await?;
    Ok(Json(ItemListResponse { items }))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created with assigned id and computed total", body = Item),
        (status = 400, description = "Request validation failed")
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(payload): ValidatedJson<ItemPayload>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "No item with this id", body = ItemNotFound)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<u64>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Update an item, replacing all mutable fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated with recomputed total", body = Item),
        (status = 400, description = "Request validation failed"),
        (status = 404, description = "No item with this id", body = ItemNotFound)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<u64>,
    ValidatedJson(payload): ValidatedJson<ItemPayload>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, payload).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted, response carries the removed snapshot", body = ItemDeletedResponse),
        (status = 404, description = "No item with this id", body = ItemNotFound)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<u64>,
) -> ItemResult<Json<ItemDeletedResponse>> {
    let deleted_item = service.delete_item(id).await?;
    Ok(Json(ItemDeletedResponse {
        message: format!("Item {} deleted", id),
        deleted_item,
    }))
}
