//! Noughts - terminal shell
//!
//! Plays tic-tac-toe on stdin/stdout against a friend or the computer.

#![warn(missing_docs)]

mod cli;
mod config;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::SessionConfig;
use noughts::MatchController;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let mut session = match config.seed() {
        Some(seed) => MatchController::seeded(*seed),
        None => MatchController::new(),
    };
    session.start_match(
        *config.mode(),
        Some(*config.difficulty()),
        config.player1_name().as_deref(),
        config.player2_name().as_deref(),
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run(&mut session, stdin.lock(), &mut stdout)
}

/// Reads the config file if one was given, then applies flag overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let base = match &cli.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("Loading session config from {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let config = base.with_overrides(cli);
    info!(?config, "Session configured");
    Ok(config)
}
