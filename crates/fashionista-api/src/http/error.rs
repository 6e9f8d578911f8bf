//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the storefront's shape: `{ "error": "<message>" }`.
//! Internal failures are logged server-side and reported with a generic
//! message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fashionista_types::error::{CatalogError, CheckoutError, GenerationError};

/// Message returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Try-on generation errors.
    Generation(GenerationError),
    /// Catalog lookup errors.
    Catalog(CatalogError),
    /// Cart and payment errors.
    Checkout(CheckoutError),
    /// Malformed or incomplete request.
    Validation(String),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Catalog(e)
    }
}

impl From<CheckoutError> for AppError {
    fn from(e: CheckoutError) -> Self {
        AppError::Checkout(e)
    }
}

impl AppError {
    /// Status code and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        let status = match self {
            AppError::Generation(GenerationError::MissingFields) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Catalog(CatalogError::ProductNotFound(_))
            | AppError::Checkout(CheckoutError::Catalog(CatalogError::ProductNotFound(_))) => {
                StatusCode::NOT_FOUND
            }
            AppError::Checkout(CheckoutError::EmptyCart)
            | AppError::Checkout(CheckoutError::InvalidQuantity(_))
            | AppError::Checkout(CheckoutError::TooManyItems) => StatusCode::BAD_REQUEST,
            AppError::Checkout(CheckoutError::PaymentDeclined(_)) => StatusCode::PAYMENT_REQUIRED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.detail()
        };

        (status, message)
    }

    /// Full error text, including details hidden from clients on a 500.
    fn detail(&self) -> String {
        match self {
            AppError::Generation(e) => e.to_string(),
            AppError::Catalog(e) => e.to_string(),
            AppError::Checkout(e) => e.to_string(),
            AppError::Validation(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.detail(), "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
