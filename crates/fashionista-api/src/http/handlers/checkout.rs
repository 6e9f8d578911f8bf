//! Mock checkout endpoint.
//!
//! POST /api/checkout - Price the cart against the catalog and run it through
//! the simulated payment gateway.

use axum::extract::State;
use axum::Json;

use fashionista_types::cart::{CheckoutRequest, CheckoutResponse};

use crate::http::error::AppError;
use crate::http::extractors::json::ValidJson;
use crate::state::AppState;

/// POST /api/checkout - Place an order.
pub async fn checkout(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let (order, receipt) = state.checkout_service.checkout(body).await?;
    Ok(Json(CheckoutResponse::from_receipt(&order, &receipt)))
}
