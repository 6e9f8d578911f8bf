//! Query parameter extractors for list endpoints.

use serde::Deserialize;

/// Query parameters for the product list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct ProductListQuery {
    /// Filter by category (case-insensitive, e.g. "women", "accessories").
    pub category: Option<String>,
}
