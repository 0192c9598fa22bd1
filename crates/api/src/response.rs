//! Shared response envelope types for API handlers.
//!
//! Listing responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Search response: `count` always equals `items.len()`.
#[derive(Debug, Serialize)]
pub struct SearchResult<T: Serialize> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T: Serialize> SearchResult<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
