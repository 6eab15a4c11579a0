//! Command-line interface for strictly_history.

use clap::{Parser, Subcommand};

/// Strictly History - tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "strictly_history")]
#[command(about = "Tic-tac-toe in the terminal with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// List moves newest first
    #[arg(long, global = true)]
    pub reversed: bool,

    /// Report a full board without a winner as a draw
    #[arg(long, global = true)]
    pub announce_draw: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a move sequence and print the resulting view
    Replay {
        /// Comma-separated cells to click, as indices 0-8 or labels (e.g. "0,4,top-right")
        moves: String,

        /// History entry to view after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
