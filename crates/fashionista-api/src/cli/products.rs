//! `fashionista products` -- list the catalog.

use anyhow::Result;
use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use fashionista_core::catalog::ProductCatalog;

use crate::state::AppState;

/// List catalog products as a table, or as JSON with `--json`.
pub async fn list_products(state: &AppState, category: Option<&str>, json: bool) -> Result<()> {
    let products = state.catalog.list(category).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!();
        println!(
            "  {} No products found{}",
            style("i").blue().bold(),
            category
                .map(|c| format!(" in category '{c}'"))
                .unwrap_or_default()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Category").fg(Color::White),
        Cell::new("Price").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for product in &products {
        let desc = if product.description.chars().count() > 50 {
            let cut: String = product.description.chars().take(47).collect();
            format!("{cut}...")
        } else {
            product.description.clone()
        };

        table.add_row(vec![
            Cell::new(&product.id).fg(Color::DarkGrey),
            Cell::new(&product.name).fg(Color::Cyan),
            Cell::new(&product.category),
            Cell::new(format!("${:.2}", product.price)).set_alignment(CellAlignment::Right),
            Cell::new(desc),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} product{}",
        style(products.len()).bold(),
        if products.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}
