//! Product Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in currency unit
    pub price: f64,
    /// Units currently on hand
    pub stock: i32,
    /// Category reference
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub category: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    /// Category reference (String ID)
    pub category: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Point-in-time view of a product as reported by the inventory service
///
/// Only the fields order placement needs. The `id` keeps its wire string
/// form so it can be stored verbatim on order lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    /// Unit price in currency unit
    pub price: f64,
    /// Units on hand at lookup time
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decodes_from_product_json() {
        // The inventory API serializes a full product; the snapshot keeps
        // only what order placement reads.
        let body = serde_json::json!({
            "id": "product:espresso",
            "name": "Espresso",
            "description": "Double shot",
            "price": 2.5,
            "stock": 40,
            "created_at": "2026-01-10T09:00:00Z",
            "updated_at": "2026-01-10T09:00:00Z"
        });
        let snapshot: ProductSnapshot = serde_json::from_value(body).unwrap();
        assert_eq!(snapshot.id, "product:espresso");
        assert_eq!(snapshot.name, "Espresso");
        assert_eq!(snapshot.price, 2.5);
        assert_eq!(snapshot.stock, 40);
    }

    #[test]
    fn test_product_id_serializes_as_string() {
        let product = Product {
            id: Some(RecordId::from_table_key("product", "espresso")),
            name: "Espresso".into(),
            description: String::new(),
            price: 2.5,
            stock: 40,
            category: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "product:espresso");
        assert!(value.get("category").is_none());
    }
}
