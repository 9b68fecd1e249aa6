//! Pagination types for the shared crate
//!
//! Query-side clamping ([`PageQuery`]) and the page metadata block
//! ([`Pagination`]) returned alongside paginated listings.

use serde::{Deserialize, Serialize};

/// Page size used when the caller sends no limit or a non-positive one
pub const DEFAULT_PAGE_LIMIT: i32 = 10;

/// Largest page size a single request may ask for
pub const MAX_PAGE_LIMIT: i32 = 100;

/// Pagination query parameters
///
/// Raw wire values are kept as received; every consumer goes through
/// [`effective_limit`](PageQuery::effective_limit) and
/// [`effective_offset`](PageQuery::effective_offset) so the clamping
/// rules are applied in exactly one place.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    /// Maximum number of records to return (default: 10, max: 100)
    #[serde(default)]
    pub limit: i32,

    /// Number of records to skip (default: 0)
    #[serde(default)]
    pub offset: i32,
}

impl PageQuery {
    pub fn new(limit: i32, offset: i32) -> Self {
        Self { limit, offset }
    }

    /// Get the limit for database queries
    ///
    /// Zero and negative values fall back to the default page size,
    /// oversized values clamp to the maximum.
    pub fn effective_limit(&self) -> i32 {
        if self.limit <= 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            std::cmp::min(self.limit, MAX_PAGE_LIMIT)
        }
    }

    /// Get the offset for database queries (negative values clamp to zero)
    pub fn effective_offset(&self) -> i32 {
        std::cmp::max(self.offset, 0)
    }
}

/// Page metadata returned alongside a paginated listing
///
/// `limit` and `offset` echo the effective values the query ran with,
/// after clamping; `total` counts every record matching the filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub limit: i32,
    pub offset: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_defaults_when_unset() {
        let q = PageQuery::default();
        assert_eq!(q.effective_limit(), DEFAULT_PAGE_LIMIT);
        assert_eq!(q.effective_offset(), 0);
    }

    #[test]
    fn test_limit_zero_falls_back_to_default() {
        let q = PageQuery::new(0, 0);
        assert_eq!(q.effective_limit(), 10);
    }

    #[test]
    fn test_negative_limit_falls_back_to_default() {
        let q = PageQuery::new(-5, 0);
        assert_eq!(q.effective_limit(), 10);
    }

    #[test]
    fn test_limit_clamps_to_max() {
        let q = PageQuery::new(500, 0);
        assert_eq!(q.effective_limit(), 100);
    }

    #[test]
    fn test_limit_within_range_passes_through() {
        let q = PageQuery::new(25, 0);
        assert_eq!(q.effective_limit(), 25);

        let q = PageQuery::new(100, 0);
        assert_eq!(q.effective_limit(), 100);
    }

    #[test]
    fn test_negative_offset_clamps_to_zero() {
        let q = PageQuery::new(10, -1);
        assert_eq!(q.effective_offset(), 0);
    }

    #[test]
    fn test_offset_passes_through() {
        let q = PageQuery::new(10, 30);
        assert_eq!(q.effective_offset(), 30);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.limit, 0);
        assert_eq!(q.offset, 0);
        assert_eq!(q.effective_limit(), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_deserialize_explicit_values() {
        let q: PageQuery = serde_json::from_str(r#"{"limit":50,"offset":20}"#).unwrap();
        assert_eq!(q.effective_limit(), 50);
        assert_eq!(q.effective_offset(), 20);
    }
}
