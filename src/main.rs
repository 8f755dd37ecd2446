//! MovieTUI - browse and filter a remote movie catalog
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! movietui
//!
//! # CLI mode (for automation)
//! movietui search "sci" --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use movietui::api::MoviesClient;
use movietui::app::{Action, App};
use movietui::cli::{Cli, Command, ExitCode, Output};
use movietui::commands;
use movietui::config::Config;
use movietui::logging;
use movietui::ui::{grid::columns_for_width, render_ui};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let client = commands::build_client(&config, cli.api_url.as_deref());

    if cli.is_cli_mode() {
        logging::init_stderr(cli.quiet);
        let exit_code = run_cli(cli, &client).await;
        std::process::exit(exit_code.into());
    } else {
        let log_file = cli.log_file.as_deref().or(config.log_file.as_deref());
        logging::init_file(log_file)?;
        run_tui(client).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, client: &MoviesClient) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::List) => commands::list_cmd(client, &output).await,
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, client, &output).await,
        Some(Command::Show(cmd)) => commands::show_cmd(cmd, client, &output).await,
        // Handled by the is_cli_mode check
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(client: MoviesClient) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new();

    // The one catalog request of the session
    let (tx, mut rx) = mpsc::channel::<Action>(1);
    tokio::spawn(async move {
        let action = match client.fetch_movies().await {
            Ok(movies) => Action::CatalogLoaded(movies),
            Err(e) => {
                error!(error = %e, "catalog load failed");
                Action::CatalogFailed(e.to_string())
            }
        };
        let _ = tx.send(action).await;
    });

    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    info!("session ended");
    result
}

/// Main event loop - handles input, updates state, renders UI
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::Receiver<Action>,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        let size = terminal.size()?;
        app.grid.set_columns(columns_for_width(size.width));

        terminal.draw(|frame| render_ui(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if let Ok(action) = rx.try_recv() {
            app.apply(action);
        }
    }

    Ok(())
}
