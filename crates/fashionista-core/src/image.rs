//! ImageGenerator trait definition.
//!
//! The seam where a text-to-image provider plugs in. Implementations live in
//! fashionista-infra (currently only a placeholder that never calls a model).

use fashionista_types::error::GenerationError;
use fashionista_types::generation::{GeneratedImage, PromptResult};

/// Trait for text-to-image backends.
pub trait ImageGenerator: Send + Sync {
    /// Human-readable provider name (e.g., "placeholder").
    fn name(&self) -> &str;

    /// Render an image for the given prompt pair.
    fn generate(
        &self,
        prompt: &PromptResult,
    ) -> impl std::future::Future<Output = Result<GeneratedImage, GenerationError>> + Send;
}
