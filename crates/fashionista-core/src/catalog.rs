//! Product catalog trait.
//!
//! The storefront's source of `Product` records. Implementations live in
//! fashionista-infra.

use fashionista_types::error::CatalogError;
use fashionista_types::product::{Product, ProductId};

/// Read-only access to catalog products.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait ProductCatalog: Send + Sync {
    /// List products, optionally restricted to one category (case-insensitive).
    fn list(
        &self,
        category: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    /// Get a single product. Returns `CatalogError::ProductNotFound` if absent.
    fn get(
        &self,
        id: &ProductId,
    ) -> impl std::future::Future<Output = Result<Product, CatalogError>> + Send;

    /// Distinct category names, in catalog order.
    fn categories(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, CatalogError>> + Send;
}
