//! Virtual try-on service.
//!
//! Builds the prompt pair for a validated request and hands it to the
//! configured `ImageGenerator`, bounded by a timeout.

use std::time::Duration;

use tracing::{Instrument, debug, info_span, warn};

use fashionista_types::error::GenerationError;
use fashionista_types::generation::{GenerationRequest, TryOnResult};

use crate::image::ImageGenerator;
use crate::prompt::PromptBuilder;

/// Default upper bound on a single provider call.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Service running the try-on flow: prompt construction, then image generation.
///
/// Generic over the image backend so the API layer can pin a concrete
/// provider while tests substitute their own.
pub struct TryOnService<G: ImageGenerator> {
    generator: G,
    timeout: Duration,
}

impl<G: ImageGenerator> TryOnService<G> {
    pub fn new(generator: G, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Build the prompt and render the image.
    ///
    /// Provider errors pass through unchanged; exceeding the timeout yields
    /// `GenerationError::Timeout`. No retries are attempted.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<TryOnResult, GenerationError> {
        let prompt = PromptBuilder::construct_prompt(request);
        debug!(
            product_id = %request.product.id,
            prompt_len = prompt.positive.len(),
            "Constructed try-on prompt"
        );

        let span = info_span!(
            "gen_ai.generate_image",
            gen_ai.system = self.generator.name(),
            gen_ai.operation.name = "generate_image",
            product.id = %request.product.id,
        );

        let image = match tokio::time::timeout(self.timeout, self.generator.generate(&prompt))
            .instrument(span)
            .await
        {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    provider = self.generator.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Image generation timed out"
                );
                return Err(GenerationError::Timeout(self.timeout.as_millis() as u64));
            }
        };

        Ok(TryOnResult { image, prompt })
    }
}
