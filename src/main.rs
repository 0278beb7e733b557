//! FraudShield Agent - Main Entry Point

mod cli;
mod logic;
pub mod constants;

use clap::Parser;

use constants::{APP_NAME, APP_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = cli::Cli::parse();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    // A broken data dir downgrades to in-memory only, checks still run
    if let Err(e) = logic::history::init(None) {
        log::warn!("History init failed: {} - results will not be persisted", e);
    }

    cli::run(cli).await
}
