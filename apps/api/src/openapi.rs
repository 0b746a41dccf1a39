use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the items API
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root::root),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Root", description = "Service greeting")
    )
)]
pub struct ApiDoc;
