//! Catalog handlers for the REST API.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use fashionista_core::catalog::ProductCatalog;
use fashionista_types::product::ProductId;

use crate::http::error::AppError;
use crate::http::extractors::query::ProductListQuery;
use crate::state::AppState;

/// GET /api/products - List products, optionally filtered by `?category=`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Value>, AppError> {
    let products = state.catalog.list(query.category.as_deref()).await?;
    Ok(Json(json!({ "products": products })))
}

/// GET /api/products/{id} - Get a single product.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id: ProductId = id.parse().map_err(AppError::Validation)?;
    let product = state.catalog.get(&id).await?;
    Ok(Json(json!({ "product": product })))
}

/// GET /api/categories - Distinct catalog categories.
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = state.catalog.categories().await?;
    Ok(Json(json!({ "categories": categories })))
}
