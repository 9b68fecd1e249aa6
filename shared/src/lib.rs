//! Shared types for the shop services
//!
//! Common types used across multiple crates including error types,
//! the API response envelope, pagination helpers and data models.

pub mod error;
pub mod models;
pub mod request;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use request::{PageQuery, Pagination};
