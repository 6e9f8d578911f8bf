//! Placeholder image generator.
//!
//! Stands in for a real text-to-image provider: waits for a configurable
//! simulated latency, then returns a fixed placeholder image URL. No model
//! is ever called.

use std::time::Duration;

use tracing::debug;

use fashionista_core::image::ImageGenerator;
use fashionista_types::error::GenerationError;
use fashionista_types::generation::{GeneratedImage, PromptResult};

/// Placeholder shown until a real provider is wired in.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?w=800&q=80";

/// Default simulated provider latency.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(2000);

/// `ImageGenerator` returning a static URL after a simulated delay.
pub struct PlaceholderImageGenerator {
    image_url: String,
    latency: Duration,
}

impl PlaceholderImageGenerator {
    pub fn new(image_url: impl Into<String>, latency: Duration) -> Self {
        Self {
            image_url: image_url.into(),
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for PlaceholderImageGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE_URL, DEFAULT_SIMULATED_LATENCY)
    }
}

impl ImageGenerator for PlaceholderImageGenerator {
    fn name(&self) -> &str {
        "placeholder"
    }

    async fn generate(&self, prompt: &PromptResult) -> Result<GeneratedImage, GenerationError> {
        debug!(
            positive_len = prompt.positive.len(),
            latency_ms = self.latency.as_millis() as u64,
            "Simulating image generation"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(GeneratedImage {
            url: self.image_url.clone(),
            provider: self.name().to_string(),
        })
    }
}
