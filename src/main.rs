//! Leadform TUI - lead capture landing page for the terminal
//!
//! A Ratatui-based landing page that validates a lead form and posts it to
//! an n8n webhook.

mod app;
mod config;
mod state;
mod ui;
mod webhook;

use anyhow::Result;
use app::App;
use config::LeadformConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadform_tui=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Config errors are reported before the terminal is taken over
    let config = LeadformConfig::load()?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let terminal_height = terminal.size()?.height;

        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash(terminal_height);
        }

        // Pick up finished webhook requests before drawing
        app.poll_submission();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling during the splash animation (16ms = ~60fps)
        let poll_duration = if in_splash {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.request_quit();
                } else {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
