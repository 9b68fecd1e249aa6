//! Order aggregation
//!
//! Walks the validated item list in request order, fetching one product
//! snapshot per item from the inventory service. The first failing lookup
//! aborts the whole order; inventory itself is never mutated, so there is
//! nothing to roll back.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::client::{InventoryApi, InventoryError};
use crate::orders::money;
use shared::models::{OrderItem, OrderItemInput};
use shared::{AppError, ErrorCode};

/// Inventory-priced order lines plus the derived total
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
}

/// Builds priced orders from validated item lists
pub struct OrderAggregator {
    inventory: Arc<dyn InventoryApi>,
}

impl OrderAggregator {
    pub fn new(inventory: Arc<dyn InventoryApi>) -> Self {
        Self { inventory }
    }

    /// Price every item against the live inventory, strictly sequentially
    ///
    /// Stock is compared, never reserved; concurrent orders can both pass
    /// the same check and the later one wins the race at persistence time.
    pub async fn build(&self, items: &[OrderItemInput]) -> Result<PricedOrder, AppError> {
        let mut priced: Vec<OrderItem> = Vec::with_capacity(items.len());
        let mut total = Decimal::ZERO;

        for item in items {
            let snapshot = match self.inventory.fetch_product(&item.product_id).await {
                Ok(snapshot) => snapshot,
                Err(InventoryError::NotFound) => {
                    return Err(AppError::with_message(
                        ErrorCode::ProductNotFound,
                        format!("Product '{}' does not exist", item.product_id),
                    )
                    .with_detail("product_id", item.product_id.clone()));
                }
                Err(InventoryError::Unavailable(cause)) => {
                    tracing::error!(
                        "Inventory lookup failed for {}: {}",
                        item.product_id,
                        cause
                    );
                    return Err(AppError::new(ErrorCode::InventoryUnavailable));
                }
            };

            if item.quantity > snapshot.stock {
                return Err(AppError::with_message(
                    ErrorCode::InsufficientStock,
                    format!(
                        "Insufficient stock for product '{}': requested {}, available {}",
                        item.product_id, item.quantity, snapshot.stock
                    ),
                )
                .with_detail("product_id", item.product_id.clone())
                .with_detail("requested", item.quantity)
                .with_detail("available", snapshot.stock));
            }

            total += money::to_decimal(snapshot.price) * Decimal::from(item.quantity);
            priced.push(OrderItem {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                price_at_order: snapshot.price,
            });
        }

        Ok(PricedOrder {
            items: priced,
            total_amount: money::to_amount(total),
        })
    }
}
