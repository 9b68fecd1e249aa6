//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use chrono::Utc;
use shared::models::{Category, Product, ProductCreate, ProductUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "product";
const CATEGORY_TABLE: &str = "category";

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find one page of products, newest first, optionally filtered by category
    ///
    /// Returns the page together with the total number of matching products.
    pub async fn find_page(
        &self,
        category: Option<&str>,
        limit: i32,
        offset: i32,
    ) -> RepoResult<(Vec<Product>, i64)> {
        #[derive(serde::Deserialize)]
        struct CountRow {
            total: i64,
        }

        let mut result = match category {
            Some(raw) => {
                // Stored category references are "table:key" strings
                let category_id = parse_record_id(CATEGORY_TABLE, raw)
                    .map_err(|_| RepoError::MissingReference(format!("Category {} not found", raw)))?;
                self.base
                    .db()
                    .query("SELECT * FROM product WHERE category = $category ORDER BY created_at DESC LIMIT $limit START $offset")
                    .query("SELECT count() AS total FROM product WHERE category = $category GROUP ALL")
                    .bind(("category", category_id.to_string()))
                    .bind(("limit", limit))
                    .bind(("offset", offset))
                    .await?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM product ORDER BY created_at DESC LIMIT $limit START $offset")
                    .query("SELECT count() AS total FROM product GROUP ALL")
                    .bind(("limit", limit))
                    .bind(("offset", offset))
                    .await?
            }
        };

        let products: Vec<Product> = result.take(0)?;
        let counts: Vec<CountRow> = result.take(1)?;
        let total = counts.into_iter().next().map(|row| row.total).unwrap_or(0);
        Ok((products, total))
    }

    /// Find product by id
    ///
    /// A malformed id is treated the same as an unknown one.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let Ok(record_id) = parse_record_id(PRODUCT_TABLE, id) else {
            return Ok(None);
        };
        let product: Option<Product> = self.base.db().select(record_id).await?;
        Ok(product)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }
        if data.price <= 0.0 {
            return Err(RepoError::Validation("price must be greater than zero".into()));
        }
        if data.stock < 0 {
            return Err(RepoError::Validation("stock cannot be negative".into()));
        }

        let category = match data.category.as_deref() {
            Some(raw) => Some(self.resolve_category(raw).await?),
            None => None,
        };

        let now = Utc::now();
        let product = Product {
            id: None,
            name: data.name,
            description: data.description.unwrap_or_default(),
            price: data.price,
            stock: data.stock,
            category,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let record_id = parse_record_id(PRODUCT_TABLE, id)
            .map_err(|_| RepoError::NotFound(format!("Product {} not found", id)))?;

        if let Some(ref name) = data.name
            && name.trim().is_empty()
        {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }
        if let Some(price) = data.price
            && price <= 0.0
        {
            return Err(RepoError::Validation("price must be greater than zero".into()));
        }
        if let Some(stock) = data.stock
            && stock < 0
        {
            return Err(RepoError::Validation("stock cannot be negative".into()));
        }

        let category = match data.category.as_deref() {
            Some(raw) => Some(self.resolve_category(raw).await?),
            None => None,
        };

        // Build dynamic SET clauses with proper type bindings
        let mut set_parts: Vec<&str> = Vec::new();

        if data.name.is_some() { set_parts.push("name = $name"); }
        if data.description.is_some() { set_parts.push("description = $description"); }
        if data.price.is_some() { set_parts.push("price = $price"); }
        if data.stock.is_some() { set_parts.push("stock = $stock"); }
        if category.is_some() { set_parts.push("category = $category"); }

        if set_parts.is_empty() {
            // No fields to update
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        set_parts.push("updated_at = $updated_at");

        let query_str = format!("UPDATE $id SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(&query_str).bind(("id", record_id));

        if let Some(v) = data.name { query = query.bind(("name", v)); }
        if let Some(v) = data.description { query = query.bind(("description", v)); }
        if let Some(v) = data.price { query = query.bind(("price", v)); }
        if let Some(v) = data.stock { query = query.bind(("stock", v)); }
        if let Some(v) = category { query = query.bind(("category", v.to_string())); }
        query = query.bind(("updated_at", Utc::now()));

        let mut result = query.await?;
        let products: Vec<Product> = result.take(0)?;

        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record_id = parse_record_id(PRODUCT_TABLE, id)
            .map_err(|_| RepoError::NotFound(format!("Product {} not found", id)))?;

        let deleted: Option<Product> = self.base.db().delete(record_id).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }

    /// Resolve a category reference, verifying the target exists
    async fn resolve_category(&self, raw: &str) -> RepoResult<surrealdb::RecordId> {
        let record_id = parse_record_id(CATEGORY_TABLE, raw)
            .map_err(|_| RepoError::MissingReference(format!("Category {} not found", raw)))?;
        let existing: Option<Category> = self.base.db().select(record_id.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::MissingReference(format!(
                "Category {} not found",
                raw
            )));
        }
        Ok(record_id)
    }
}
