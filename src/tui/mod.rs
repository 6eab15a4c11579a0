//! Terminal UI for Strictly History.

mod app;
mod input;
mod ui;
pub mod view;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument, warn};

use crate::config::GameConfig;

pub use app::{App, AppAction, Focus};
pub use input::{digit_position, move_cursor};
pub use ui::{Hit, HitMap, TOGGLE_LABEL, draw};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Leaves raw mode, the alternate screen and mouse capture when dropped.
///
/// Lives for the whole session, so an early `?` or a panic in the game
/// loop still hands back a usable shell.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        // Built before raw mode so a failure below still restores.
        let guard = TerminalGuard;
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Undoes [`TerminalGuard::enter`]. Safe to call when raw mode is off.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Runs the interactive game until the user quits.
///
/// Logs go to the configured file so they do not interfere with the TUI.
pub fn run_tui(config: GameConfig) -> Result<()> {
    init_file_tracing(&config)?;
    info!("Starting Strictly History TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(config));

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, wait for one event, apply it. Repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        let mut hits = HitMap::default();
        terminal.draw(|frame| hits = draw(frame, &app))?;
        app.set_hit_map(hits);

        let event = event::read()?;
        if app.handle_event(event) == AppAction::Quit {
            debug!(
                moves = app.controller().len() - 1,
                current_move = app.controller().current_move(),
                "User quit"
            );
            return Ok(());
        }
    }
}

fn init_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_raw_mode() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
