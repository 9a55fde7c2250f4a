//! Starfield tic-tac-toe - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use starfield_tictactoe::{AppConfig, run_script, tui};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { seed } => run_play(config, seed),
        Command::Script { moves, pretty } => run_headless(&moves, pretty),
    }
}

/// Run the terminal game
fn run_play(config: AppConfig, seed: Option<u64>) -> Result<()> {
    init_file_tracing(config.tui().log_file())?;

    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    tui::run(&config)
}

/// Run a move script and print the JSON report
fn run_headless(moves: &str, pretty: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = run_script(moves)?;
    info!(status = %report.status, "Script finished");

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install file logger")
}
