//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod category;
pub mod product;

// Re-exports
pub use category::CategoryRepository;
pub use product::ProductRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record referenced from another table does not exist
    #[error("Missing reference: {0}")]
    MissingReference(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "product:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("product", "abc");
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Parse a caller-supplied ID into a [`surrealdb::RecordId`] for `table`
///
/// Accepts both the full `table:key` form and the bare key.
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<surrealdb::RecordId> {
    if id.contains(':') {
        let record_id: surrealdb::RecordId = id
            .parse()
            .map_err(|_| RepoError::NotFound(format!("Invalid ID format: {}", id)))?;
        if record_id.table() != table {
            return Err(RepoError::NotFound(format!(
                "ID {} does not belong to table {}",
                id, table
            )));
        }
        Ok(record_id)
    } else {
        Ok(surrealdb::RecordId::from_table_key(table, id))
    }
}
