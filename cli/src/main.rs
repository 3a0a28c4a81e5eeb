//! CLI entrypoint for cvchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use cvchat_application::{DispatchOutcome, INPUT_CONTROL, QueryDispatcher, TextInputControl};
use cvchat_infrastructure::{ConfigLoader, FileConfig, HttpQueryGateway};
use cvchat_presentation::{ChatRepl, Cli, TerminalSurface};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins if set
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.base_url = endpoint.clone();
    }
    config.validate()?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting cvchat against {}", config.endpoint.base_url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpQueryGateway::new(&config.endpoint.base_url));
    debug!("Query URL: {}", gateway.url());

    let surface = TerminalSurface::standard(true);
    let dispatcher = QueryDispatcher::install(&surface, gateway)?;

    // Chat mode
    if cli.is_chat() {
        let repl = ChatRepl::attach(&surface, dispatcher, &config.endpoint.base_url)
            .context("Terminal surface is missing a standard control")?
            .with_wait_for_reply(config.repl.wait_for_reply)
            .with_history_file(config.repl.history_file.as_deref());

        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // Single query mode
    let query = cli.query.unwrap_or_default();
    surface
        .prompt_input(INPUT_CONTROL)
        .context("Terminal surface has no input control")?
        .set_value(&query);

    match dispatcher.dispatch().outcome().await {
        DispatchOutcome::Appended { .. } => Ok(ExitCode::SUCCESS),
        // Already logged by the dispatcher
        DispatchOutcome::Failed(_) => Ok(ExitCode::FAILURE),
    }
}
