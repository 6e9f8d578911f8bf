//! Prompt builder for the virtual try-on feature.
//!
//! Turns a product, a user-described scenario, and a model description into
//! the positive/negative prompt pair consumed by a text-to-image provider.
//!
//! Layout of the positive prompt:
//! ```text
//! {STYLE_PREFIX} A fashion model ({model_preferences}) wearing the {name},
//! described as: {description}. The fabric texture is palpable. stood in
//! {user_scenario}, during golden hour sunset, dramatic rim lighting, warm
//! cinematic tones.
//! ```

use fashionista_types::generation::{GenerationRequest, PromptResult};

/// Photographic style preamble that opens every positive prompt.
pub const STYLE_PREFIX: &str = "Hyper-realistic professional fashion photography, 8k resolution, \
shot on 85mm lens, f/1.8 aperture, sharp focus, cinematic composition, editorial magazine quality.";

/// Quality-exclusion keywords sent as the negative prompt for every request.
pub const NEGATIVE_PROMPT: &str = "cartoon, illustration, anime, 3d render, painting, drawing, \
blurry, low resolution, pixelated, distorted face, deformed hands, extra limbs, bad anatomy, \
watermark, text, logo, oversaturated, plastic skin";

/// Lighting descriptors appended after the user's scenario.
const SCENARIO_LIGHTING: &str =
    ", during golden hour sunset, dramatic rim lighting, warm cinematic tones.";

/// Builds try-on prompts. Stateless; every call is independent.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the prompt pair for a generation request.
    ///
    /// Pure string assembly: no validation, no I/O. Empty fields produce a
    /// degenerate but well-formed prompt. The negative prompt is always
    /// [`NEGATIVE_PROMPT`].
    pub fn construct_prompt(request: &GenerationRequest) -> PromptResult {
        let garment = Self::garment_clause(&request.product.name, &request.product.description);
        let scenario = Self::scenario_clause(&request.user_scenario);

        let positive = format!(
            "{STYLE_PREFIX} A fashion model ({}) {garment} stood in {scenario}",
            request.model_preferences
        );

        PromptResult {
            positive,
            negative: NEGATIVE_PROMPT.to_string(),
        }
    }

    /// The part of the prompt describing the garment being worn.
    pub fn garment_clause(name: &str, description: &str) -> String {
        format!("wearing the {name}, described as: {description}. The fabric texture is palpable.")
    }

    /// The user's setting, followed by the fixed lighting descriptors.
    pub fn scenario_clause(user_scenario: &str) -> String {
        format!("{user_scenario}{SCENARIO_LIGHTING}")
    }
}
