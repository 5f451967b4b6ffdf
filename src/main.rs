// Chip Filter
// TUI demo: rows of selectable and removable filter chips

// IMPORTS ------------------>>

use anyhow::Result;
use chip_filter::{init_logging, render_app, App, AppConfig, EventHandler};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{error, info};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let settings = AppConfig::default();
    let _log_guard = init_logging(&settings.logging)?;

    // Optional first argument: path to a config.yaml
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut app = App::new(config_path)?;
    info!(rows = app.rows.len(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);
    if let Err(e) = &result {
        error!(error = %e, "main loop failed");
    }

    // Restore terminal
    disable_raw_mode()?;
    if app.config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render_app(f, app))?;

        if event::poll(app.config.ui.poll_interval)? {
            let app_event = EventHandler::handle(event::read()?);
            app.handle_event(app_event);
        }
    }
    Ok(())
}
