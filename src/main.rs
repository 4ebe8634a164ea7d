//! AgroVita Leads - bilingual landing page for AgroVita Organics
//!
//! A Ratatui-based TUI that captures launch-notification and inquiry
//! leads and relays them through EmailJS.

mod app;
mod config;
mod i18n;
mod leads;
mod platform;
mod relay;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrovita_leads=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let config = AppConfig::load()?;
    if let Err(err) = config.relay.ensure_ready() {
        tracing::warn!(%err, "relay is not configured; submissions will show the system error");
    }
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(?err, "landing page exited with an error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to `<data dir>/agrovita-leads.log`; the terminal belongs to the UI
fn log_writer() -> BoxMakeWriter {
    let path = ProjectDirs::from("in", "agrovita", "agrovita-leads")
        .map(|dirs| dirs.data_dir().join("agrovita-leads.log"));

    if let Some(path) = path {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
            return BoxMakeWriter::new(Mutex::new(file));
        }
    }

    BoxMakeWriter::new(io::stderr)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Get terminal height for the popup slide distance
        let terminal_height = terminal.size()?.height;

        // Advance popup and carousel, apply settled dispatches
        app.tick(terminal_height);
        let animating = app.state.popup.is_animating() || app.has_pending_dispatch();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling during the popup slide or while a spinner runs (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
