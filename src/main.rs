//! Noughts - terminal tic-tac-toe
//!
//! Play against a friend or the computer, or replay scripted moves.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Console, SessionConfig, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SessionConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play { mode, seed } => run_play(config.with_overrides(mode, seed)),
        Command::Replay {
            mode,
            seed,
            squares,
        } => run_replay(config.with_overrides(mode, seed), &squares),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config), fields(mode = %config.mode()))]
fn run_play(config: SessionConfig) -> Result<()> {
    info!("Starting interactive session");

    let game = config.start_session();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), game);
    console.run()?;

    Ok(())
}

/// Replay squares and print the final snapshot as JSON
#[instrument(skip(config, squares), fields(mode = %config.mode(), moves = squares.len()))]
fn run_replay(config: SessionConfig, squares: &[String]) -> Result<()> {
    let mut game = config.start_session();
    let report = replay(&mut game, squares);
    info!(status = %report.status, rejected = report.rejected.len(), "Replay finished");

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Tracing initialized");
}
