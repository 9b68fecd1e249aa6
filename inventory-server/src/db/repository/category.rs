//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use chrono::Utc;
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CATEGORY_TABLE: &str = "category";

// =============================================================================
// Category Repository
// =============================================================================

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY name")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id
    ///
    /// A malformed id is treated the same as an unknown one.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let Ok(record_id) = parse_record_id(CATEGORY_TABLE, id) else {
            return Ok(None);
        };
        let category: Option<Category> = self.base.db().select(record_id).await?;
        Ok(category)
    }

    /// Find category by exact name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// Create a new category
    ///
    /// Category names are unique; a clash is reported as [`RepoError::Duplicate`].
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }

        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        let category = Category {
            id: None,
            name: data.name,
            description: data.description.unwrap_or_default(),
            created_at: Utc::now(),
        };

        let created: Option<Category> = self
            .base
            .db()
            .create(CATEGORY_TABLE)
            .content(category)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Update a category
    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let record_id = parse_record_id(CATEGORY_TABLE, id)
            .map_err(|_| RepoError::NotFound(format!("Category {} not found", id)))?;

        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        if let Some(ref new_name) = data.name {
            if new_name.trim().is_empty() {
                return Err(RepoError::Validation("name cannot be empty".into()));
            }
            if new_name != &existing.name && self.find_by_name(new_name).await?.is_some() {
                return Err(RepoError::Duplicate(format!(
                    "Category '{}' already exists",
                    new_name
                )));
            }
        }

        self.base
            .db()
            .query("UPDATE $id MERGE $data")
            .bind(("id", record_id))
            .bind(("data", data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category
    ///
    /// Products keep their stored reference; lookups on them simply stop
    /// resolving to a live category.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record_id = parse_record_id(CATEGORY_TABLE, id)
            .map_err(|_| RepoError::NotFound(format!("Category {} not found", id)))?;

        let deleted: Option<Category> = self.base.db().delete(record_id).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
