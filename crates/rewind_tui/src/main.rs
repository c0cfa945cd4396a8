//! Terminal UI for rewind tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod hits;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{Action, App};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(&cli.log_file)?;

    info!("Starting Rewind Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if !cli.no_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if !cli.no_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "event loop error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Synchronous event loop: render, poll, apply.
///
/// Every state transition happens inside this loop; there are no
/// background tasks or timers.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = input::action_for_key(key.code) {
                    if action == Action::Quit {
                        info!("user quit");
                        return Ok(());
                    }
                    app.apply(action);
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    if let Some(action) = app.hit_test(mouse.column, mouse.row) {
                        app.apply(action);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Logs go to a file so tracing output never corrupts the alternate screen.
fn init_tracing(path: &std::path::Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
