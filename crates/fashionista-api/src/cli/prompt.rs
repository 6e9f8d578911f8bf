//! `fashionista prompt` -- preview the try-on prompt for a catalog product.

use anyhow::Result;
use console::style;

use fashionista_core::catalog::ProductCatalog;
use fashionista_core::prompt::PromptBuilder;
use fashionista_types::generation::GenerationRequest;
use fashionista_types::product::ProductId;

use crate::state::AppState;

/// Build and print the prompt pair without calling any image provider.
///
/// ```bash
/// fashionista prompt --product 1 --scenario "A rooftop dinner in Mexico City"
/// ```
pub async fn show_prompt(
    state: &AppState,
    product_id: &str,
    scenario: &str,
    model: Option<String>,
    json: bool,
) -> Result<()> {
    let id: ProductId = product_id.parse().map_err(anyhow::Error::msg)?;
    let product = state.catalog.get(&id).await?;

    let request = GenerationRequest::new(product, scenario, model);
    let prompt = PromptBuilder::construct_prompt(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&prompt)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Try-on prompt for {}",
        style("✨").bold(),
        style(&request.product.name).cyan()
    );
    println!();
    println!("  {}", style("Positive").green().bold());
    println!("  {}", prompt.positive);
    println!();
    println!("  {}", style("Negative").red().bold());
    println!("  {}", style(&prompt.negative).dim());
    println!();

    Ok(())
}
