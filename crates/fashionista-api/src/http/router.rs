//! Axum router configuration with middleware.
//!
//! All JSON routes are under `/api/`.
//! Middleware: CORS, tracing.
//!
//! The built storefront SPA is served from `web/dist/` (configurable via
//! `FASHIONISTA_WEB_DIR`). API routes take priority; unknown paths fall
//! through to the SPA's `index.html`. If the directory does not exist, only
//! the API is served.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let mut router = api_router(state);

    let web_dir =
        std::env::var("FASHIONISTA_WEB_DIR").unwrap_or_else(|_| "web/dist".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{}/index.html", web_dir);
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    }

    router
}

/// JSON routes and middleware, without static file serving.
fn api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Virtual try-on
        .route("/generate", post(handlers::generate::generate_image))
        // Catalog
        .route("/products", get(handlers::product::list_products))
        .route("/products/{id}", get(handlers::product::get_product))
        .route("/categories", get(handlers::product::list_categories))
        // Checkout
        .route("/checkout", post(handlers::checkout::checkout));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use fashionista_core::prompt::PromptBuilder;
    use fashionista_types::generation::GenerationRequest;
    use fashionista_types::product::Product;

    use crate::config::AppConfig;

    const PLACEHOLDER: &str = "https://img.test/placeholder.png";

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.generation.placeholder_image_url = PLACEHOLDER.to_string();
        config.generation.simulated_latency_ms = 0;
        config.checkout.simulated_latency_ms = 0;
        config
    }

    fn app() -> Router {
        api_router(AppState::init(&test_config()))
    }

    fn dress_json() -> Value {
        json!({
            "id": 1,
            "name": "Silk Red Dress",
            "description": "A long elegant silk red dress with V-neck",
            "price": 129.99,
            "imageUrl": "/images/products/silk-red-dress.jpg",
            "category": "Women"
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_generate_success_returns_positive_prompt() {
        let payload = json!({
            "product": dress_json(),
            "userScenario": "A romantic dinner at a rooftop in Mexico City",
            "modelPreferences": "Latina woman, brown hair, confident pose"
        });

        let (status, body) = send(app(), post_json("/api/generate", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["imageUrl"], PLACEHOLDER);

        let product: Product = serde_json::from_value(dress_json()).unwrap();
        let expected = PromptBuilder::construct_prompt(&GenerationRequest::new(
            product,
            "A romantic dinner at a rooftop in Mexico City",
            Some("Latina woman, brown hair, confident pose".to_string()),
        ));
        assert_eq!(body["promptUsed"], expected.positive);
    }

    #[tokio::test]
    async fn test_generate_defaults_model_preferences() {
        let payload = json!({
            "product": dress_json(),
            "userScenario": "A gallery opening in Berlin"
        });

        let (status, body) = send(app(), post_json("/api/generate", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        let prompt = body["promptUsed"].as_str().unwrap();
        assert!(prompt.contains("A fashion model (professional model) wearing the Silk Red Dress"));
    }

    #[tokio::test]
    async fn test_generate_accepts_name_and_description_only() {
        let payload = json!({
            "product": {
                "name": "Silk Red Dress",
                "description": "A long elegant silk red dress with V-neck"
            },
            "userScenario": "A romantic dinner at a rooftop in Mexico City"
        });

        let (status, body) = send(app(), post_json("/api/generate", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let prompt = body["promptUsed"].as_str().unwrap();
        assert!(prompt.contains(
            "wearing the Silk Red Dress, described as: A long elegant silk red dress with V-neck."
        ));
        assert!(prompt.contains("A romantic dinner at a rooftop in Mexico City"));
    }

    #[tokio::test]
    async fn test_generate_product_without_description_is_400() {
        let payload = json!({
            "product": { "name": "Silk Red Dress" },
            "userScenario": "A beach in Tulum"
        });

        let (status, body) = send(app(), post_json("/api/generate", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("description"));
    }

    #[tokio::test]
    async fn test_generate_missing_scenario_is_400() {
        let payload = json!({ "product": dress_json() });

        let (status, body) = send(app(), post_json("/api/generate", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Missing required fields: product or userScenario" })
        );
    }

    #[tokio::test]
    async fn test_generate_missing_product_is_400() {
        let payload = json!({ "userScenario": "A beach in Tulum", "product": null });

        let (status, body) = send(app(), post_json("/api/generate", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: product or userScenario");
    }

    #[tokio::test]
    async fn test_generate_malformed_json_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_generate_timeout_is_generic_500() {
        let mut config = test_config();
        config.generation.simulated_latency_ms = 500;
        config.generation.timeout_ms = 10;
        let app = api_router(AppState::init(&config));

        let payload = json!({
            "product": dress_json(),
            "userScenario": "A rainy street in Tokyo"
        });
        let (status, body) = send(app, post_json("/api/generate", &payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_list_products_with_category_filter() {
        let (status, body) = send(app(), get("/api/products?category=accessories")).await;
        assert_eq!(status, StatusCode::OK);
        let products = body["products"].as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p["category"] == "Accessories"));

        let (_, all) = send(app(), get("/api/products")).await;
        assert_eq!(all["products"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_get_product_and_not_found() {
        let (status, body) = send(app(), get("/api/products/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["product"]["name"], "Silk Red Dress");
        assert!(body["product"]["shop_the_look"].is_array());

        let (status, body) = send(app(), get("/api/products/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found: 999");
    }

    #[tokio::test]
    async fn test_categories() {
        let (status, body) = send(app(), get("/api/categories")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"], json!(["Women", "Men", "Accessories"]));
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let payload = json!({
            "items": [
                { "productId": "1", "quantity": 1 },
                { "productId": 8, "quantity": 2 }
            ],
            "customerEmail": "ana@example.com"
        });

        let (status, body) = send(app(), post_json("/api/checkout", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["itemCount"], 3);
        assert_eq!(body["total"], 267.99);
        assert!(body["orderId"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    }

    #[tokio::test]
    async fn test_checkout_errors() {
        let (status, body) = send(app(), post_json("/api/checkout", &json!({ "items": [] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Cart is empty");

        let zero = json!({ "items": [{ "productId": "1", "quantity": 0 }] });
        let (status, body) = send(app(), post_json("/api/checkout", &zero)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid quantity for product 1");

        let unknown = json!({ "items": [{ "productId": "nope", "quantity": 1 }] });
        let (status, body) = send(app(), post_json("/api/checkout", &unknown)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found: nope");
    }

    #[tokio::test]
    async fn test_checkout_unit_overflow_is_400() {
        let payload = json!({
            "items": [
                { "productId": "1", "quantity": u32::MAX },
                { "productId": "2", "quantity": 1 }
            ]
        });

        let (status, body) = send(app(), post_json("/api/checkout", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Cart has too many items" }));
    }
}
