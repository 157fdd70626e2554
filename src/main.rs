mod cli;
mod config;
mod error;
mod model;
mod providers;
mod sync;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use providers::github::GitHubClient;
use providers::trello::TrelloClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = cli::parse_args(&args)?;
    if args.help {
        cli::print_help();
        return Ok(());
    }

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load config
    let path = args.config.unwrap_or_else(config::default_config_path);
    let config = config::load_config(&path)?;
    tracing::debug!(path = %path.display(), "configuration loaded");

    let board = TrelloClient::new(&config.trello);
    let tracker = GitHubClient::new(&config.github)?;

    let report = sync::run_pass(&config, &board, &tracker, args.dry_run)
        .await
        .context("Sync pass failed")?;

    if report.failed > 0 {
        tracing::warn!(failed = report.failed, "some GitHub writes failed");
    }

    Ok(())
}
