//! Command-line interface for the TUI.

use clap::Parser;

/// Rewind Tic-Tac-Toe - play and replay games in the terminal
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Tic-tac-toe with move-history time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log file path (tracing output goes here so it never touches the
    /// alternate screen)
    #[arg(long, default_value = "rewind_tui.log")]
    pub log_file: std::path::PathBuf,

    /// Disable mouse capture (keyboard-only mode)
    #[arg(long)]
    pub no_mouse: bool,
}
