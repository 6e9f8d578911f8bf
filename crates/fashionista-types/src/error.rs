use thiserror::Error;

use crate::product::ProductId;

/// Errors from the virtual try-on flow.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Missing required fields: product or userScenario")]
    MissingFields,

    #[error("image generation timed out after {0}ms")]
    Timeout(u64),

    #[error("image provider error: {0}")]
    Provider(String),
}

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Errors from cart validation and payment.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid quantity for product {0}")]
    InvalidQuantity(ProductId),

    #[error("Cart has too many items")]
    TooManyItems,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("payment declined: {0}")]
    PaymentDeclined(String),
}
