use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item entity as stored and as serialized over the wire.
///
/// `description` and `tax` serialize as `null` when absent; clients depend
/// on those fields being present in every response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the store, immutable after creation
    pub id: u64,
    /// Item name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Price
    pub price: f64,
    /// Optional tax
    pub tax: Option<f64>,
    /// Derived sum of price and tax, recomputed on every create/update
    pub total: f64,
}

/// Request payload for creating or updating an item.
///
/// Update is a full replacement: every mutable field comes from the payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ItemPayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Derived total for a price and optional tax.
///
/// A tax of exactly `0.0` contributes nothing; it is treated the same as an
/// absent tax, preserving the behavior existing clients observe.
pub fn compute_total(price: f64, tax: Option<f64>) -> f64 {
    match tax {
        Some(tax) if tax != 0.0 => price + tax,
        _ => price,
    }
}

impl Item {
    /// Build a new item from a payload, with a store-assigned id.
    pub fn new(id: u64, payload: ItemPayload) -> Self {
        let total = compute_total(payload.price, payload.tax);
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            tax: payload.tax,
            total,
        }
    }

    /// Replace all mutable fields from a payload. The id never changes;
    /// the total is recomputed from the incoming price and tax.
    pub fn apply(&mut self, payload: ItemPayload) {
        self.total = compute_total(payload.price, payload.tax);
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
        self.tax = payload.tax;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, price: f64, tax: Option<f64>) -> ItemPayload {
        ItemPayload {
            name: name.to_string(),
            description: None,
            price,
            tax,
        }
    }

    #[test]
    fn total_without_tax_is_price() {
        assert_eq!(compute_total(10.0, None), 10.0);
    }

    #[test]
    fn total_with_zero_tax_is_price() {
        assert_eq!(compute_total(10.0, Some(0.0)), 10.0);
    }

    #[test]
    fn total_with_tax_is_sum() {
        assert_eq!(compute_total(10.0, Some(1.5)), 11.5);
    }

    #[test]
    fn new_item_computes_total() {
        let item = Item::new(1, payload("Widget", 10.0, Some(1.0)));
        assert_eq!(item.id, 1);
        assert_eq!(item.total, 11.0);
        assert_eq!(item.description, None);
    }

    #[test]
    fn apply_replaces_fields_and_recomputes_total() {
        let mut item = Item::new(1, payload("Widget", 10.0, Some(1.0)));
        item.apply(payload("Widget2", 20.0, None));

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Widget2");
        assert_eq!(item.price, 20.0);
        assert_eq!(item.tax, None);
        assert_eq!(item.total, 20.0);
    }

    #[test]
    fn item_serializes_absent_fields_as_null() {
        let item = Item::new(1, payload("Widget", 10.0, None));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Widget",
                "description": null,
                "price": 10.0,
                "tax": null,
                "total": 10.0
            })
        );
    }

    #[test]
    fn payload_rejects_empty_name() {
        assert!(payload("", 10.0, None).validate().is_err());
        assert!(payload("Widget", 10.0, None).validate().is_ok());
    }
}
