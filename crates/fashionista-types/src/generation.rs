//! Virtual try-on generation types.
//!
//! `GenerateImageBody` is the loosely-typed wire body accepted by
//! `POST /api/generate`; `into_request()` turns it into a validated
//! `GenerationRequest`, applying the model-preference default at that
//! boundary rather than inside the prompt builder. The product inside it is a
//! [`TryOnProduct`]: only `name` and `description` feed the prompt, so those
//! are the only product fields required on the wire.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::product::{Product, ProductId, ShopTheLookItem};

/// Model description used when the caller does not send one.
pub const DEFAULT_MODEL_PREFERENCES: &str = "professional model";

/// A validated request to render a product worn in a user-described scene.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub product: Product,
    pub user_scenario: String,
    pub model_preferences: String,
}

impl GenerationRequest {
    /// Build a request, falling back to [`DEFAULT_MODEL_PREFERENCES`].
    pub fn new(
        product: Product,
        user_scenario: impl Into<String>,
        model_preferences: Option<String>,
    ) -> Self {
        Self {
            product,
            user_scenario: user_scenario.into(),
            model_preferences: model_preferences
                .unwrap_or_else(|| DEFAULT_MODEL_PREFERENCES.to_string()),
        }
    }
}

/// Positive/negative prompt pair handed to a text-to-image provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResult {
    pub positive: String,
    pub negative: String,
}

/// Image returned by an image-generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
    /// Provider that produced the image (e.g. "placeholder").
    pub provider: String,
}

/// Outcome of a try-on generation: the image plus the prompts that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryOnResult {
    pub image: GeneratedImage,
    pub prompt: PromptResult,
}

/// Product as sent to `POST /api/generate`.
///
/// Catalog fields other than `name` and `description` may be absent or null
/// and fall back to empty values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryOnProduct {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "shop_the_look", default)]
    pub shop_the_look: Option<Vec<ShopTheLookItem>>,
}

impl From<TryOnProduct> for Product {
    fn from(p: TryOnProduct) -> Self {
        Self {
            id: p.id.unwrap_or_default(),
            name: p.name,
            description: p.description,
            price: p.price.unwrap_or_default(),
            image_url: p.image_url.unwrap_or_default(),
            category: p.category.unwrap_or_default(),
            shop_the_look: p.shop_the_look,
        }
    }
}

/// JSON body of `POST /api/generate`.
///
/// Every field is optional on the wire so that a missing product or scenario
/// is reported with the storefront's own message instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageBody {
    pub product: Option<TryOnProduct>,
    pub user_scenario: Option<String>,
    pub model_preferences: Option<String>,
}

impl GenerateImageBody {
    /// Validate required fields and apply defaults.
    ///
    /// An empty scenario counts as missing. An empty `modelPreferences`
    /// string is kept as-is; only an absent (or null) value gets the default.
    pub fn into_request(self) -> Result<GenerationRequest, GenerationError> {
        let product = self.product.ok_or(GenerationError::MissingFields)?;
        let user_scenario = self
            .user_scenario
            .filter(|s| !s.is_empty())
            .ok_or(GenerationError::MissingFields)?;

        Ok(GenerationRequest::new(
            product.into(),
            user_scenario,
            self.model_preferences,
        ))
    }
}

/// Successful response body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub success: bool,
    pub image_url: String,
    pub prompt_used: String,
}

impl From<TryOnResult> for GenerateImageResponse {
    fn from(result: TryOnResult) -> Self {
        Self {
            success: true,
            image_url: result.image.url,
            prompt_used: result.prompt.positive,
        }
    }
}
