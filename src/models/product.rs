use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the `products` table.
///
/// `product_id` is store-assigned: the database sequence wins on insert and
/// the route id wins on update, whatever the body says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    #[serde(default)]
    pub product_id: i32,
    pub product_name: String,
    #[serde(default)]
    pub category_id: Option<i32>,
    /// Supplier reference only; no suppliers table is exposed.
    #[serde(default)]
    pub supplier_id: Option<i32>,
    #[serde(default)]
    pub quantity_per_unit: Option<String>,
    #[serde(default)]
    pub units_in_stock: i16,
    #[serde(default)]
    pub units_on_order: Option<i16>,
    #[serde(default)]
    pub reorder_level: Option<i16>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub discontinued: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_store_assigned_fields() {
        let p: Product = serde_json::from_str(r#"{"product_name":"Chai"}"#).unwrap();
        assert_eq!(p.product_id, 0);
        assert_eq!(p.product_name, "Chai");
        assert_eq!(p.units_in_stock, 0);
        assert!(!p.discontinued);
        assert!(p.unit_price.is_none());
    }

    #[test]
    fn rejects_body_without_name() {
        assert!(serde_json::from_str::<Product>(r#"{"units_in_stock":5}"#).is_err());
    }

    #[test]
    fn round_trips_full_record() {
        let p = Product {
            product_id: 7,
            product_name: "Uncle Bob's Organic Dried Pears".into(),
            category_id: Some(7),
            supplier_id: Some(3),
            quantity_per_unit: Some("12 - 1 lb pkgs.".into()),
            units_in_stock: 15,
            units_on_order: Some(0),
            reorder_level: Some(10),
            unit_price: Some(30.0),
            discontinued: false,
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
