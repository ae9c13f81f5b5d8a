//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::Mode;

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with easy, medium and unbeatable computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the session config file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Starting mode (name or code 1-4), overriding the config file
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<Mode>,

        /// Seed for the random tiers, overriding the config file
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Apply a list of moves and print the final snapshot as JSON
    Replay {
        /// Mode to replay in (name or code 1-4), overriding the config file
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<Mode>,

        /// Seed for the random tiers, overriding the config file
        #[arg(long)]
        seed: Option<u64>,

        /// Squares to play in order, numbered 1-9 as drawn on screen
        squares: Vec<String>,
    },
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::parse(s).map_err(|e| e.to_string())
}
