//! Command-line interface for the noughts shell.

use clap::Parser;
use noughts::{Difficulty, GameMode};
use std::path::PathBuf;

/// Noughts - play tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who plays O: human_vs_human or human_vs_ai
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Computer strength: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Name of the player using X
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the player using O (ignored against the computer)
    #[arg(long)]
    pub player2: Option<String>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,
}
