//! Virtual try-on endpoint.
//!
//! POST /api/generate - Build the try-on prompt for a product and scenario and
//! return the generated image URL with the prompt that was used.

use std::time::Instant;

use axum::extract::State;
use axum::Json;

use fashionista_types::generation::{GenerateImageBody, GenerateImageResponse};

use crate::http::error::AppError;
use crate::http::extractors::json::ValidJson;
use crate::state::AppState;

/// POST /api/generate - Generate a try-on image.
///
/// Rejects a body without `product` or with a missing/empty `userScenario`
/// (400). `modelPreferences` defaults to "professional model". Any failure
/// after validation is reported as a generic 500.
pub async fn generate_image(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<GenerateImageBody>,
) -> Result<Json<GenerateImageResponse>, AppError> {
    let start = Instant::now();
    let request = body.into_request()?;

    tracing::info!(
        product_id = %request.product.id,
        product = %request.product.name,
        "Generating try-on image"
    );

    let result = state.tryon_service.generate(&request).await?;

    tracing::info!(
        product_id = %request.product.id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Try-on image generated"
    );

    Ok(Json(result.into()))
}
