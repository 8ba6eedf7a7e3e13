use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;

use crate::ui::App;
use crate::ui::theme::ThemeVariant;

#[derive(Args, Default)]
pub struct TuiCommands {
    #[command(subcommand)]
    pub command: Option<TuiSubcommands>,

    /// Start with this theme instead of the default light theme
    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemeArg>,
}

#[derive(Subcommand)]
pub enum TuiSubcommands {
    /// Launch the interactive TUI (default)
    Launch,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeVariant {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeVariant::Light,
            ThemeArg::Dark => ThemeVariant::Dark,
        }
    }
}

pub async fn tui_command(args: TuiCommands) -> Result<()> {
    match args.command {
        Some(TuiSubcommands::Launch) | None => {
            launch_tui(args.theme.map(Into::into)).await?;
        }
    }
    Ok(())
}

async fn launch_tui(theme: Option<ThemeVariant>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(theme);

    let result = run_tui(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let frame_start = std::time::Instant::now();

        // Drain all pending events first for minimal input latency.
        while event::poll(std::time::Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                // Mouse capture is enabled so stray clicks never reach the
                // terminal scrollback, but interaction is keyboard-only.
                Event::Mouse(_) => {}
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }

        // Advance cosmetic timers and the splash dwell timer.
        app.tick();

        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Sleep for the remainder of a 16ms frame (60 FPS).
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = std::time::Duration::from_millis(16).checked_sub(elapsed) {
            tokio::time::sleep(remaining).await;
        }
    }

    Ok(())
}
