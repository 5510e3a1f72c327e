//! Admin Console - terminal front end for the business API
//!
//! Run: cargo run -p admin-console
//! Demo: CONSOLE_DEMO=1 cargo run -p admin-console

mod app;
mod config;
mod logger;
mod routes;
mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use console_client::{ConsoleApi, HttpClient, OneshotHttpClient};
use console_mock::MockState;

use crate::app::{App, Tagged};
use crate::config::ConsoleConfig;
use crate::routes::Route;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref())?;

    if config.demo {
        tracing::info!("Starting against the in-process demo API");
        let state = Arc::new(MockState::seeded());
        let api = ConsoleApi::new(OneshotHttpClient::new(console_mock::router(state)));
        run(api, &config).await
    } else {
        tracing::info!(url = %config.client.base_url, "Starting");
        let api = ConsoleApi::new(config.client.build_http_client()?);
        run(api, &config).await
    }
}

async fn run<C: HttpClient + 'static>(api: ConsoleApi<C>, config: &ConsoleConfig) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(api, tx, config.target());
    app.navigate(Route::Welcome);
    tracing::info!("Tab switches pages, g jumps to a path, q quits");

    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<C: HttpClient + 'static>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<C>,
    rx: &mut mpsc::UnboundedReceiver<Tagged>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(tagged) = rx.try_recv() {
            app.handle_event(tagged);
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
