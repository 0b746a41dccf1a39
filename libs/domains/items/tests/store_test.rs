//! Store tests for the Items domain
//!
//! These exercise the in-memory repository through the service layer,
//! covering id assignment, ordering, and total computation.

use domain_items::{InMemoryItemRepository, ItemError, ItemPayload, ItemService};

fn payload(name: &str, price: f64, tax: Option<f64>) -> ItemPayload {
    ItemPayload {
        name: name.to_string(),
        description: None,
        price,
        tax,
    }
}

fn service() -> ItemService<InMemoryItemRepository> {
    ItemService::new(InMemoryItemRepository::new())
}

#[tokio::test]
async fn ids_are_monotonic_from_one() {
    let service = service();

    let a = service.create_item(payload("a", 1.0, None)).await.unwrap();
    let b = service.create_item(payload("b", 2.0, None)).await.unwrap();
    let c = service.create_item(payload("c", 3.0, None)).await.unwrap();

    assert_eq!((a.id, b.id, c.id), (1, 2, 3));
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
    let service = service();

    let a = service.create_item(payload("a", 1.0, None)).await.unwrap();
    service.delete_item(a.id).await.unwrap();
    let b = service.create_item(payload("b", 2.0, None)).await.unwrap();

    assert_eq!(b.id, 2);
}

#[tokio::test]
async fn list_preserves_insertion_order_across_deletes() {
    let service = service();

    let a = service.create_item(payload("a", 1.0, None)).await.unwrap();
    service.create_item(payload("b", 2.0, None)).await.unwrap();
    service.delete_item(a.id).await.unwrap();
    service.create_item(payload("c", 3.0, None)).await.unwrap();

    let names: Vec<String> = service
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[tokio::test]
async fn get_after_create_returns_the_created_item() {
    let service = service();

    let created = service
        .create_item(payload("Widget", 10.0, Some(1.0)))
        .await
        .unwrap();
    let fetched = service.get_item(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_after_delete_is_not_found() {
    let service = service();

    let created = service.create_item(payload("Widget", 10.0, None)).await.unwrap();
    service.delete_item(created.id).await.unwrap();

    let err = service.get_item(created.id).await.unwrap_err();
    assert!(matches!(err, ItemError::NotFound(id) if id == created.id));
}

#[tokio::test]
async fn get_on_empty_store_is_not_found() {
    let err = service().get_item(999).await.unwrap_err();
    assert!(matches!(err, ItemError::NotFound(999)));
}

#[tokio::test]
async fn create_computes_total_from_price_and_tax() {
    let service = service();

    let item = service
        .create_item(payload("Widget", 10.0, Some(1.0)))
        .await
        .unwrap();

    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.description, None);
    assert_eq!(item.price, 10.0);
    assert_eq!(item.tax, Some(1.0));
    assert_eq!(item.total, 11.0);
}

#[tokio::test]
async fn update_keeps_id_and_recomputes_total() {
    let service = service();

    service
        .create_item(payload("Widget", 10.0, Some(1.0)))
        .await
        .unwrap();
    let updated = service
        .update_item(1, payload("Widget2", 20.0, None))
        .await
        .unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Widget2");
    assert_eq!(updated.description, None);
    assert_eq!(updated.price, 20.0);
    assert_eq!(updated.tax, None);
    assert_eq!(updated.total, 20.0);
}

#[tokio::test]
async fn update_keeps_position_in_the_list() {
    let service = service();

    service.create_item(payload("a", 1.0, None)).await.unwrap();
    service.create_item(payload("b", 2.0, None)).await.unwrap();
    service.create_item(payload("c", 3.0, None)).await.unwrap();

    service.update_item(2, payload("b2", 2.5, None)).await.unwrap();

    let names: Vec<String> = service
        .list_items()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["a", "b2", "c"]);
}

#[tokio::test]
async fn delete_returns_the_removed_snapshot() {
    let service = service();

    let created = service
        .create_item(payload("Widget", 10.0, Some(1.0)))
        .await
        .unwrap();
    let removed = service.delete_item(created.id).await.unwrap();

    assert_eq!(removed, created);
    assert!(service.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn zero_tax_is_treated_as_no_tax() {
    let service = service();

    let item = service
        .create_item(payload("Widget", 10.0, Some(0.0)))
        .await
        .unwrap();

    assert_eq!(item.tax, Some(0.0));
    assert_eq!(item.total, 10.0);
}
