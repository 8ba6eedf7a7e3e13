use super::commands::tui::TuiCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oneproperty-cli")]
#[command(about = "Terminal prototype of the One Property fractional real-estate app")]
pub struct Cli {
    /// Launches the TUI when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive TUI interface
    Tui(TuiCommands),
}
