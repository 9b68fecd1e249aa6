//! Order Repository
//!
//! Orders persist as single documents with their items embedded; nothing
//! here ever deletes one.

use super::{BaseRepository, RepoError, RepoResult};
use chrono::Utc;
use shared::models::{Order, OrderStatus};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const ORDER_TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order as one document
    ///
    /// Stamps both timestamps and lets the database assign the record id;
    /// whatever the caller put in those fields is overwritten.
    pub async fn create(&self, mut order: Order) -> RepoResult<Order> {
        let now = Utc::now();
        order.id = None;
        order.created_at = now;
        order.updated_at = now;

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Fetch one order
    ///
    /// Malformed record ids and unknown ids both surface as [`RepoError::NotFound`].
    pub async fn get_by_id(&self, id: &str) -> RepoResult<Order> {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::NotFound(format!("Invalid order ID format: {}", id)))?;

        let order: Option<Order> = self.base.db().select(record_id).await?;
        order.ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Set the status of an order, stamping only `updated_at`
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let record_id: RecordId = id
            .parse()
            .map_err(|_| RepoError::NotFound(format!("Invalid order ID format: {}", id)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $id SET status = $status, updated_at = $updated_at RETURN AFTER")
            .bind(("id", record_id))
            .bind(("status", status))
            .bind(("updated_at", Utc::now()))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// One page of a user's orders, newest first, plus the total count
    pub async fn list_by_user(
        &self,
        user_id: &str,
        limit: i32,
        offset: i32,
    ) -> RepoResult<(Vec<Order>, i64)> {
        #[derive(serde::Deserialize)]
        struct CountRow {
            total: i64,
        }

        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE user_id = $user_id ORDER BY created_at DESC LIMIT $limit START $offset")
            .query("SELECT count() AS total FROM order WHERE user_id = $user_id GROUP ALL")
            .bind(("user_id", user_id.to_string()))
            .bind(("limit", limit))
            .bind(("offset", offset))
            .await?;

        let orders: Vec<Order> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.into_iter().next().map(|row| row.total).unwrap_or(0);
        Ok((orders, total))
    }
}
