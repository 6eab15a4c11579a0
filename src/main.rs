//! Strictly History - CLI entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_history::{GameConfig, parse_positions, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?
        .with_overrides(cli.reversed, cli.announce_draw);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(config),
        Command::Replay { moves, jump, json } => run_replay(config, &moves, jump, json),
    }
}

/// Replays a move list and prints the resulting view to stdout.
#[instrument(skip(config))]
fn run_replay(config: GameConfig, moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Replaying moves");
    let positions = parse_positions(moves)?;
    let summary = replay(
        &positions,
        jump,
        *config.start_reversed(),
        *config.announce_draw(),
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.to_text());
    }
    Ok(())
}
