//! Data models
//!
//! Shared between the inventory, order, and gateway services (via API).
//! Record IDs use `surrealdb::RecordId` through the [`serde_helpers`]
//! adapters so JSON clients can send plain `"table:id"` strings.

pub mod serde_helpers;

pub mod category;
pub mod order;
pub mod product;

// Re-exports
pub use category::*;
pub use order::*;
pub use product::*;
