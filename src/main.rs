use anyhow::Result;
use clap::Parser;
use log::info;

use oneproperty_cli::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file (truncated each run) so the TUI owns stdout.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("oneproperty-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting oneproperty-cli");

    match cli.command {
        Some(Commands::Tui(args)) => cli::commands::tui::tui_command(args).await,
        None => cli::commands::tui::tui_command(Default::default()).await,
    }
}
