use axum::Router;
use domain_items::{ItemRepository, ItemService, handlers};

pub mod root;

/// Composes all API routes.
///
/// Domain routers apply their own state internally; the result is a
/// stateless Router ready for the cross-cutting layers added by
/// `create_router`.
pub fn routes<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    Router::new()
        .merge(root::router())
        .nest("/items", handlers::router(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_items::InMemoryItemRepository;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        routes(ItemService::new(InMemoryItemRepository::new()))
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_serves_the_greeting() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body, json!({"message": "Hello World! Welcome to FastAPI"}));
    }

    #[tokio::test]
    async fn items_routes_are_mounted_under_items() {
        let response = app()
            .oneshot(Request::builder().uri("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body, json!({"items": []}));
    }

    #[tokio::test]
    async fn item_lifecycle_over_http() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_string(&json!({"name": "Widget", "price": 10.0, "tax": 1.0}))
                            .unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response.into_body()).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["total"], 11.0);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/items/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "Item 1 deleted");

        let response = app
            .oneshot(Request::builder().uri("/items/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response.into_body()).await;
        assert_eq!(body, json!({"error": "Item not found"}));
    }
}
