//! tokenwatch - Live Token Market Tracker
//!
//! Follows one Solana token on the SolanaTracker data API and renders
//! live updates in the terminal.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tokenwatch::adapters::cli::{CliApp, Command, FetchCmd, WatchCmd};
use tokenwatch::adapters::solana_tracker::{SolanaTrackerClient, SolanaTrackerConfig};
use tokenwatch::application::{TokenDataClient, TrackerOrchestrator};
use tokenwatch::config::{load_config, Config};
use tokenwatch::domain::DisplayBoard;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (the API key goes here, not in config/default.toml)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command {
        Command::Watch(cmd) => watch_command(cmd).await,
        Command::Fetch(cmd) => fetch_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn build_client(config: &Config) -> Result<TokenDataClient<SolanaTrackerClient>> {
    let tracker_config = SolanaTrackerConfig::new(config.token.address.clone())
        .with_base_url(config.api.base_url.clone())
        .with_api_key(config.api.get_api_key())
        .with_timeout(config.api.timeout());

    let source = SolanaTrackerClient::with_config(tracker_config)
        .context("Failed to create SolanaTracker client")?;

    Ok(TokenDataClient::with_freshness_window(
        source,
        config.api.freshness_window(),
    ))
}

async fn watch_command(cmd: WatchCmd) -> Result<()> {
    tracing::info!("Starting tokenwatch...");

    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    let client = build_client(&config)?;

    let poll_interval = cmd
        .interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.tracker.poll_interval());

    let orchestrator = TrackerOrchestrator::new(client, config.token.symbol.clone())
        .with_poll_interval(poll_interval)
        .with_alert_threshold(config.tracker.alert_threshold_pct);

    // Setup Ctrl+C handler
    let orch = orchestrator.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown signal received");
        orch.stop().await;
    });

    orchestrator.run().await;
    tracing::info!("tokenwatch stopped");
    Ok(())
}

async fn fetch_command(cmd: FetchCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    let client = build_client(&config)?;

    let snapshot = client.get_snapshot().await.with_context(|| {
        format!(
            "Failed to fetch data for token {} from SolanaTracker",
            config.token.address
        )
    })?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let mut board = DisplayBoard::new(config.token.symbol.clone());
        board.apply(snapshot);
        println!("{}", board.render());
    }

    Ok(())
}
