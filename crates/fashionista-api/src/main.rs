//! FashionistAPP CLI and REST API entry point.
//!
//! Binary name: `fashionista`
//!
//! Parses CLI arguments, loads configuration, wires services, then dispatches
//! to the appropriate command handler or starts the REST API server.

mod cli;
mod config;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use config::AppConfig;
use fashionista_observe::tracing_setup;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "fashionista", &mut std::io::stdout());
        return Ok(());
    }

    tracing_setup::init_tracing(
        tracing_setup::verbosity_directives(cli.verbose, cli.quiet),
        cli.otel,
    )
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port, host } => {
            let config = config.with_server_overrides(host, port);
            let state = AppState::init(&config);

            let addr = config.listen_addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(
                addr = %addr,
                generation_latency_ms = config.generation.simulated_latency_ms,
                generation_timeout_ms = config.generation.timeout_ms,
                "FashionistAPP API listening"
            );
            if !cli.quiet {
                println!(
                    "  {} FashionistAPP API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("Server stopped");
        }

        Commands::Prompt {
            product,
            scenario,
            model,
        } => {
            let state = AppState::init(&config);
            cli::prompt::show_prompt(&state, &product, &scenario, model, cli.json).await?;
        }

        Commands::Products { category } => {
            let state = AppState::init(&config);
            cli::products::list_products(&state, category.as_deref(), cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
