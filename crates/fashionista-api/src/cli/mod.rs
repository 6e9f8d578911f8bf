//! CLI command definitions for the `fashionista` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod products;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// FashionistAPP storefront backend and virtual try-on prompt tools.
#[derive(Parser)]
#[command(name = "fashionista", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML config file (defaults to ./fashionista.toml if present).
    #[arg(long, global = true, env = "FASHIONISTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(short, long, env = "FASHIONISTA_PORT")]
        port: Option<u16>,

        /// Host to bind to (overrides the config file).
        #[arg(long, env = "FASHIONISTA_HOST")]
        host: Option<String>,
    },

    /// Print the try-on prompt pair for a catalog product.
    Prompt {
        /// Catalog product id.
        #[arg(long)]
        product: String,

        /// Setting the model is pictured in.
        #[arg(long)]
        scenario: String,

        /// Model description (defaults to "professional model").
        #[arg(long)]
        model: Option<String>,
    },

    /// List catalog products.
    #[command(alias = "ls")]
    Products {
        /// Only show products in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_prompt_command() {
        let cli = Cli::try_parse_from([
            "fashionista",
            "prompt",
            "--product",
            "1",
            "--scenario",
            "A rooftop in Mexico City",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Prompt { product, scenario, model } => {
                assert_eq!(product, "1");
                assert_eq!(scenario, "A rooftop in Mexico City");
                assert!(model.is_none());
            }
            _ => panic!("expected prompt command"),
        }
    }
}
